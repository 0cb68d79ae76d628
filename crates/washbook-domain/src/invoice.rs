//! Domain models for invoices, service lines, and payments.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;
use crate::customer::CustomerType;

/// A priced service line attached to an invoice or pending order.
///
/// Immutable once attached. A zero-quantity line is valid and simply
/// contributes nothing to the total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceLine {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub is_custom: bool,
}

impl ServiceLine {
    pub fn new(name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
            is_custom: false,
        }
    }

    pub fn custom(name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            is_custom: true,
            ..Self::new(name, price, quantity)
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

impl NamedEntity for ServiceLine {
    fn name(&self) -> &str {
        &self.name
    }
}

/// How a payment was collected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Upi,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Upi => "UPI",
        };
        f.write_str(label)
    }
}

/// A recorded payment against an invoice.
///
/// Payments are append-only; once recorded they are never edited or
/// removed through normal flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    pub amount: f64,
    pub date: String,
    pub method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
}

impl Payment {
    pub fn new(amount: f64, date: impl Into<String>, method: PaymentMethod) -> Self {
        Self {
            amount,
            date: date.into(),
            method,
            reference_number: None,
        }
    }

    pub fn with_reference(mut self, reference_number: impl Into<String>) -> Self {
        self.reference_number = Some(reference_number.into());
        self
    }
}

/// An amount carried onto an invoice from outside it: arrears from
/// before the invoice was created (`old_balance`) or a deposit collected
/// before generation (`advance_paid`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarriedAmount {
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl CarriedAmount {
    pub fn new(amount: f64) -> Self {
        Self { amount, date: None }
    }

    pub fn on(amount: f64, date: impl Into<String>) -> Self {
        Self {
            amount,
            date: Some(date.into()),
        }
    }
}

/// Derived payment state of an invoice.
///
/// Never persisted: status is recomputed from services, payments, old
/// balance, and advance wherever an invoice is displayed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Paid,
    PartiallyPaid,
    Unpaid,
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::PartiallyPaid => "Partially Paid",
            InvoiceStatus::Unpaid => "Unpaid",
        };
        f.write_str(label)
    }
}

/// A finalized invoice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    pub id: Uuid,
    pub invoice_number: String,
    /// Display-formatted date (`DD/MM/YYYY`).
    pub invoice_date: String,
    pub created_at: DateTime<Utc>,
    pub customer_name: String,
    pub customer_phone: String,
    #[serde(default)]
    pub customer_address: String,
    #[serde(default = "CustomerType::unknown")]
    pub customer_type: CustomerType,
    #[serde(default)]
    pub services: Vec<ServiceLine>,
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_balance: Option<CarriedAmount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advance_paid: Option<CarriedAmount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Invoice {
    pub fn new(
        invoice_number: impl Into<String>,
        invoice_date: impl Into<String>,
        customer_name: impl Into<String>,
        customer_phone: impl Into<String>,
        customer_type: CustomerType,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            invoice_number: invoice_number.into(),
            invoice_date: invoice_date.into(),
            created_at: Utc::now(),
            customer_name: customer_name.into(),
            customer_phone: customer_phone.into(),
            customer_address: String::new(),
            customer_type,
            services: Vec::new(),
            payments: Vec::new(),
            old_balance: None,
            advance_paid: None,
            language: None,
        }
    }

    pub fn with_services(mut self, services: Vec<ServiceLine>) -> Self {
        self.services = services;
        self
    }

    pub fn with_old_balance(mut self, old_balance: CarriedAmount) -> Self {
        self.old_balance = Some(old_balance);
        self
    }

    pub fn with_advance(mut self, advance: CarriedAmount) -> Self {
        self.advance_paid = Some(advance);
        self
    }

    /// Appends a payment to the invoice's append-only payment list.
    pub fn add_payment(&mut self, payment: Payment) {
        self.payments.push(payment);
    }

    /// Arrears amount carried onto this invoice, zero when absent.
    pub fn old_balance_amount(&self) -> f64 {
        self.old_balance.as_ref().map(|b| b.amount).unwrap_or(0.0)
    }

    /// Advance collected before generation, zero when absent.
    pub fn advance_amount(&self) -> f64 {
        self.advance_paid.as_ref().map(|a| a.amount).unwrap_or(0.0)
    }
}

impl Identifiable for Invoice {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Invoice {
    fn display_label(&self) -> String {
        format!("#{} — {}", self.invoice_number, self.customer_name)
    }
}
