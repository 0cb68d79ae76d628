//! The workbook aggregate: every record collection for one business.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::ServiceSets;
use crate::customer::Customer;
use crate::invoice::Invoice;
use crate::order::PendingOrder;

/// All records for a single business, as persisted by the record store.
///
/// The workbook owns invoices, customers, pending orders, and the
/// service catalog. Computation services only ever read it; mutations go
/// through the validated services in `washbook-core`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workbook {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub invoices: Vec<Invoice>,
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub pending_orders: Vec<PendingOrder>,
    #[serde(default)]
    pub service_sets: ServiceSets,
}

impl Workbook {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            created_at: now,
            updated_at: now,
            invoices: Vec::new(),
            customers: Vec::new(),
            pending_orders: Vec::new(),
            service_sets: ServiceSets::default(),
        }
    }

    /// Bumps `updated_at`; called by every mutating service.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn invoice(&self, id: Uuid) -> Option<&Invoice> {
        self.invoices.iter().find(|invoice| invoice.id == id)
    }

    pub fn invoice_mut(&mut self, id: Uuid) -> Option<&mut Invoice> {
        self.invoices.iter_mut().find(|invoice| invoice.id == id)
    }

    pub fn invoice_by_number(&self, number: &str) -> Option<&Invoice> {
        self.invoices
            .iter()
            .find(|invoice| invoice.invoice_number == number)
    }

    pub fn customer_by_phone(&self, phone: &str) -> Option<&Customer> {
        self.customers.iter().find(|customer| customer.phone == phone)
    }

    pub fn customer_by_phone_mut(&mut self, phone: &str) -> Option<&mut Customer> {
        self.customers
            .iter_mut()
            .find(|customer| customer.phone == phone)
    }

    pub fn pending_order(&self, id: Uuid) -> Option<&PendingOrder> {
        self.pending_orders.iter().find(|order| order.id == id)
    }

    pub fn add_invoice(&mut self, invoice: Invoice) -> Uuid {
        let id = invoice.id;
        self.invoices.push(invoice);
        self.touch();
        id
    }

    pub fn add_customer(&mut self, customer: Customer) {
        self.customers.push(customer);
        self.touch();
    }

    pub fn add_pending_order(&mut self, order: PendingOrder) -> Uuid {
        let id = order.id;
        self.pending_orders.push(order);
        self.touch();
        id
    }
}
