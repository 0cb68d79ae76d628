//! Typed message translations for invoice and receipt rendering.
//!
//! Lookups are total: a key missing from the active locale falls back to
//! English, and a key missing everywhere falls back to its stable slug,
//! so rendering never panics on an untranslated string.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Languages invoices can be rendered in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum Locale {
    #[default]
    En,
    Hi,
}

impl Locale {
    /// Maps a stored language tag (e.g. an invoice's `language` field)
    /// to a locale, defaulting to English for unknown tags.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "hi" | "hi-in" | "hindi" => Locale::Hi,
            _ => Locale::En,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Locale::En => "en",
            Locale::Hi => "hi",
        };
        f.write_str(label)
    }
}

/// Every user-facing string the core hands to invoice/receipt renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Invoice,
    InvoiceNumber,
    InvoiceDate,
    CustomerName,
    CustomerPhone,
    CustomerAddress,
    Services,
    Quantity,
    Amount,
    Total,
    OldBalance,
    AdvancePaid,
    TotalPaid,
    BalanceDue,
    StatusPaid,
    StatusPartiallyPaid,
    StatusUnpaid,
    MethodCash,
    MethodUpi,
    TypeCustomer,
    TypeGarageServiceStation,
    TypeDealer,
    PendingOrders,
    DueDate,
    Urgent,
    ThankYou,
}

impl MessageKey {
    /// Stable identifier used as the last-resort fallback text.
    pub fn slug(self) -> &'static str {
        match self {
            MessageKey::Invoice => "invoice",
            MessageKey::InvoiceNumber => "invoice_number",
            MessageKey::InvoiceDate => "invoice_date",
            MessageKey::CustomerName => "customer_name",
            MessageKey::CustomerPhone => "customer_phone",
            MessageKey::CustomerAddress => "customer_address",
            MessageKey::Services => "services",
            MessageKey::Quantity => "quantity",
            MessageKey::Amount => "amount",
            MessageKey::Total => "total",
            MessageKey::OldBalance => "old_balance",
            MessageKey::AdvancePaid => "advance_paid",
            MessageKey::TotalPaid => "total_paid",
            MessageKey::BalanceDue => "balance_due",
            MessageKey::StatusPaid => "status_paid",
            MessageKey::StatusPartiallyPaid => "status_partially_paid",
            MessageKey::StatusUnpaid => "status_unpaid",
            MessageKey::MethodCash => "method_cash",
            MessageKey::MethodUpi => "method_upi",
            MessageKey::TypeCustomer => "type_customer",
            MessageKey::TypeGarageServiceStation => "type_garage_service_station",
            MessageKey::TypeDealer => "type_dealer",
            MessageKey::PendingOrders => "pending_orders",
            MessageKey::DueDate => "due_date",
            MessageKey::Urgent => "urgent",
            MessageKey::ThankYou => "thank_you",
        }
    }
}

static ENGLISH: Lazy<HashMap<MessageKey, &'static str>> = Lazy::new(|| {
    use MessageKey::*;
    HashMap::from([
        (Invoice, "Invoice"),
        (InvoiceNumber, "Invoice No."),
        (InvoiceDate, "Date"),
        (CustomerName, "Customer"),
        (CustomerPhone, "Phone"),
        (CustomerAddress, "Address"),
        (Services, "Services"),
        (Quantity, "Qty"),
        (Amount, "Amount"),
        (Total, "Total"),
        (OldBalance, "Old Balance"),
        (AdvancePaid, "Advance Paid"),
        (TotalPaid, "Total Paid"),
        (BalanceDue, "Balance Due"),
        (StatusPaid, "Paid"),
        (StatusPartiallyPaid, "Partially Paid"),
        (StatusUnpaid, "Unpaid"),
        (MethodCash, "Cash"),
        (MethodUpi, "UPI"),
        (TypeCustomer, "Customer"),
        (TypeGarageServiceStation, "Garage / Service Station"),
        (TypeDealer, "Dealer"),
        (PendingOrders, "Pending Orders"),
        (DueDate, "Due Date"),
        (Urgent, "Urgent"),
        (ThankYou, "Thank you for your business!"),
    ])
});

static HINDI: Lazy<HashMap<MessageKey, &'static str>> = Lazy::new(|| {
    use MessageKey::*;
    HashMap::from([
        (Invoice, "बिल"),
        (InvoiceNumber, "बिल क्रमांक"),
        (InvoiceDate, "दिनांक"),
        (CustomerName, "ग्राहक"),
        (CustomerPhone, "फ़ोन"),
        (CustomerAddress, "पता"),
        (Services, "सेवाएँ"),
        (Quantity, "मात्रा"),
        (Amount, "राशि"),
        (Total, "कुल"),
        (OldBalance, "पुराना बकाया"),
        (AdvancePaid, "अग्रिम भुगतान"),
        (TotalPaid, "कुल भुगतान"),
        (BalanceDue, "शेष राशि"),
        (StatusPaid, "भुगतान हो गया"),
        (StatusPartiallyPaid, "आंशिक भुगतान"),
        (StatusUnpaid, "बकाया"),
        (MethodCash, "नकद"),
        (MethodUpi, "यूपीआई"),
        (TypeCustomer, "ग्राहक"),
        (TypeGarageServiceStation, "गैराज / सर्विस स्टेशन"),
        (TypeDealer, "डीलर"),
        (PendingOrders, "लंबित ऑर्डर"),
        (DueDate, "नियत तारीख"),
        (Urgent, "तत्काल"),
        // ThankYou is deliberately untranslated; it falls back to the
        // English footer line.
    ])
});

fn table(locale: Locale) -> &'static HashMap<MessageKey, &'static str> {
    match locale {
        Locale::En => &ENGLISH,
        Locale::Hi => &HINDI,
    }
}

/// Resolves message keys for one locale. Injected at the composition
/// root rather than read from ambient global state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    pub locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn text(&self, key: MessageKey) -> &'static str {
        table(self.locale)
            .get(&key)
            .or_else(|| ENGLISH.get(&key))
            .copied()
            .unwrap_or_else(|| key.slug())
    }
}
