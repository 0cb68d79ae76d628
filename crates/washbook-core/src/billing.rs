//! The money/status engine: every rupee figure shown anywhere — lists,
//! dashboards, payment collection, generated PDFs — comes from these
//! four computations, so they are the single source of truth for money
//! math.

use washbook_domain::{Invoice, InvoiceStatus, Payment, ServiceLine};

/// Stateless money computations over invoice snapshots.
///
/// Pure functions: no I/O, no mutation, and they never fail — missing
/// optional amounts count as zero. Input validation (rejecting negative
/// prices, required fields) belongs to the write path, not here.
pub struct BillingService;

impl BillingService {
    /// Sum of `price × quantity` over all lines, rounded half-up to the
    /// whole currency unit. An empty list totals zero.
    ///
    /// This is the only place rounding happens; intermediate payment
    /// sums stay unrounded so many small payments cannot compound
    /// rounding error.
    pub fn invoice_total(services: &[ServiceLine]) -> f64 {
        services
            .iter()
            .map(ServiceLine::line_total)
            .sum::<f64>()
            .round()
    }

    /// Plain sum of recorded payment amounts; empty list totals zero.
    /// Negative amounts pass through unrejected.
    pub fn total_paid(payments: &[Payment]) -> f64 {
        payments.iter().map(|payment| payment.amount).sum()
    }

    /// `(service total + old balance) − (advance + payments)`.
    ///
    /// May be negative on over-payment; the signed value is preserved
    /// for audit and analytics. Use [`Self::balance_due`] for display.
    pub fn remaining_balance(invoice: &Invoice) -> f64 {
        let total = Self::invoice_total(&invoice.services) + invoice.old_balance_amount();
        let settled = invoice.advance_amount() + Self::total_paid(&invoice.payments);
        total - settled
    }

    /// The "balance due" figure shown to customers: a negative remaining
    /// balance renders as zero due, never as a debt to the customer.
    pub fn balance_due(invoice: &Invoice) -> f64 {
        Self::remaining_balance(invoice).max(0.0)
    }

    /// Derives the payment status. A cleared balance wins regardless of
    /// how much was actually paid, so a fully-waived invoice with zero
    /// payments is still `Paid`.
    pub fn status(invoice: &Invoice) -> InvoiceStatus {
        if Self::remaining_balance(invoice) <= 0.0 {
            InvoiceStatus::Paid
        } else if Self::total_paid(&invoice.payments) + invoice.advance_amount() > 0.0 {
            InvoiceStatus::PartiallyPaid
        } else {
            InvoiceStatus::Unpaid
        }
    }
}
