//! Pending-order mutations and promotion into invoices.

use uuid::Uuid;

use washbook_domain::{Invoice, PendingOrder, Workbook};

use crate::error::CoreError;
use crate::invoice_service::InvoiceService;

/// Write-path operations for [`PendingOrder`] drafts.
pub struct OrderService;

impl OrderService {
    pub fn add(workbook: &mut Workbook, order: PendingOrder) -> Result<Uuid, CoreError> {
        if order.customer_name.trim().is_empty() {
            return Err(CoreError::Validation("Customer name is required".into()));
        }
        Ok(workbook.add_pending_order(order))
    }

    pub fn remove(workbook: &mut Workbook, id: Uuid) -> Result<(), CoreError> {
        let before = workbook.pending_orders.len();
        workbook.pending_orders.retain(|order| order.id != id);
        if workbook.pending_orders.len() == before {
            return Err(CoreError::OrderNotFound(id));
        }
        workbook.touch();
        Ok(())
    }

    /// Pending orders with urgent drafts first, then oldest first.
    pub fn list(workbook: &Workbook) -> Vec<&PendingOrder> {
        let mut orders: Vec<&PendingOrder> = workbook.pending_orders.iter().collect();
        orders.sort_by(|a, b| {
            b.is_urgent
                .cmp(&a.is_urgent)
                .then(a.created_at.cmp(&b.created_at))
        });
        orders
    }

    /// Converts a pending order into a finalized invoice: customer
    /// fields, services, and any advance are copied across, then the
    /// order is deleted. No link back to the order survives.
    pub fn promote(
        workbook: &mut Workbook,
        id: Uuid,
        invoice_number: &str,
        invoice_date: &str,
    ) -> Result<Uuid, CoreError> {
        let order = workbook
            .pending_order(id)
            .ok_or(CoreError::OrderNotFound(id))?
            .clone();

        let mut invoice = Invoice::new(
            invoice_number,
            invoice_date,
            order.customer_name,
            order.customer_phone,
            order.customer_type,
        );
        invoice.customer_address = order.customer_address;
        invoice.services = order.services;
        invoice.advance_paid = order.advance_paid;

        let invoice_id = InvoiceService::add(workbook, invoice)?;
        workbook.pending_orders.retain(|pending| pending.id != id);
        workbook.touch();
        Ok(invoice_id)
    }
}
