//! Validated invoice mutations over workbook snapshots.

use uuid::Uuid;

use washbook_domain::{Invoice, Payment, Workbook};

use crate::error::CoreError;

/// Write-path operations for [`Invoice`] records.
///
/// Validation lives here, on the record store's write path; the
/// computation engines in [`crate::billing`] deliberately accept
/// whatever they are given.
pub struct InvoiceService;

impl InvoiceService {
    /// Adds an invoice after checking the human-facing number is unique
    /// and the customer identity fields are present.
    pub fn add(workbook: &mut Workbook, invoice: Invoice) -> Result<Uuid, CoreError> {
        Self::validate_identity(&invoice)?;
        Self::validate_number(workbook, None, &invoice.invoice_number)?;
        Ok(workbook.add_invoice(invoice))
    }

    /// Replaces an invoice's fields with the provided changeset, keeping
    /// its id.
    pub fn edit(workbook: &mut Workbook, id: Uuid, changes: Invoice) -> Result<(), CoreError> {
        Self::validate_identity(&changes)?;
        Self::validate_number(workbook, Some(id), &changes.invoice_number)?;
        let invoice = workbook
            .invoice_mut(id)
            .ok_or(CoreError::InvoiceNotFound(id))?;
        invoice.invoice_number = changes.invoice_number;
        invoice.invoice_date = changes.invoice_date;
        invoice.customer_name = changes.customer_name;
        invoice.customer_phone = changes.customer_phone;
        invoice.customer_address = changes.customer_address;
        invoice.customer_type = changes.customer_type;
        invoice.services = changes.services;
        invoice.old_balance = changes.old_balance;
        invoice.advance_paid = changes.advance_paid;
        invoice.language = changes.language;
        workbook.touch();
        Ok(())
    }

    pub fn remove(workbook: &mut Workbook, id: Uuid) -> Result<(), CoreError> {
        let before = workbook.invoices.len();
        workbook.invoices.retain(|invoice| invoice.id != id);
        if workbook.invoices.len() == before {
            return Err(CoreError::InvoiceNotFound(id));
        }
        workbook.touch();
        Ok(())
    }

    /// Appends a payment to an invoice. Payments are append-only: there
    /// is no edit or delete counterpart.
    pub fn record_payment(
        workbook: &mut Workbook,
        id: Uuid,
        payment: Payment,
    ) -> Result<(), CoreError> {
        if payment.amount <= 0.0 {
            return Err(CoreError::Validation(
                "Payment amount must be positive".into(),
            ));
        }
        let invoice = workbook
            .invoice_mut(id)
            .ok_or(CoreError::InvoiceNotFound(id))?;
        invoice.add_payment(payment);
        workbook.touch();
        Ok(())
    }

    pub fn list(workbook: &Workbook) -> Vec<&Invoice> {
        workbook.invoices.iter().collect()
    }

    pub fn find_by_number<'a>(workbook: &'a Workbook, number: &str) -> Option<&'a Invoice> {
        workbook.invoice_by_number(number)
    }

    fn validate_identity(invoice: &Invoice) -> Result<(), CoreError> {
        if invoice.customer_name.trim().is_empty() {
            return Err(CoreError::Validation("Customer name is required".into()));
        }
        if invoice.customer_phone.trim().is_empty() {
            return Err(CoreError::Validation("Customer phone is required".into()));
        }
        Ok(())
    }

    fn validate_number(
        workbook: &Workbook,
        exclude: Option<Uuid>,
        candidate: &str,
    ) -> Result<(), CoreError> {
        if candidate.trim().is_empty() {
            return Err(CoreError::Validation("Invoice number is required".into()));
        }
        let duplicate = workbook
            .invoices
            .iter()
            .any(|invoice| invoice.invoice_number == candidate && exclude != Some(invoice.id));
        if duplicate {
            Err(CoreError::Validation(format!(
                "Invoice `{}` already exists",
                candidate
            )))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use washbook_domain::{CustomerType, PaymentMethod, ServiceLine};

    fn sample_invoice(number: &str) -> Invoice {
        Invoice::new(number, "10/01/2024", "Asha", "9800000001", CustomerType::Customer)
            .with_services(vec![ServiceLine::new("Wash", 250.0, 2)])
    }

    #[test]
    fn add_rejects_duplicate_invoice_numbers() {
        let mut workbook = Workbook::new("Test");
        InvoiceService::add(&mut workbook, sample_invoice("INV-1")).expect("first add succeeds");

        let err = InvoiceService::add(&mut workbook, sample_invoice("INV-1"))
            .expect_err("duplicate must fail");
        assert!(
            matches!(err, CoreError::Validation(ref message) if message.contains("already exists")),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn add_rejects_missing_customer_identity() {
        let mut workbook = Workbook::new("Test");
        let mut invoice = sample_invoice("INV-1");
        invoice.customer_phone = "  ".into();
        let err = InvoiceService::add(&mut workbook, invoice).expect_err("must fail");
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn edit_overwrites_fields_and_keeps_id() {
        let mut workbook = Workbook::new("Test");
        let id = InvoiceService::add(&mut workbook, sample_invoice("INV-1")).unwrap();

        let mut changes = sample_invoice("INV-2");
        changes.customer_name = "Ravi".into();
        InvoiceService::edit(&mut workbook, id, changes).expect("edit succeeds");

        let stored = workbook.invoice(id).expect("invoice exists");
        assert_eq!(stored.invoice_number, "INV-2");
        assert_eq!(stored.customer_name, "Ravi");
    }

    #[test]
    fn record_payment_rejects_non_positive_amounts() {
        let mut workbook = Workbook::new("Test");
        let id = InvoiceService::add(&mut workbook, sample_invoice("INV-1")).unwrap();

        let zero = Payment::new(0.0, "10/01/2024", PaymentMethod::Cash);
        assert!(InvoiceService::record_payment(&mut workbook, id, zero).is_err());

        let valid = Payment::new(100.0, "10/01/2024", PaymentMethod::Upi);
        InvoiceService::record_payment(&mut workbook, id, valid).expect("payment recorded");
        assert_eq!(workbook.invoice(id).unwrap().payments.len(), 1);
    }

    #[test]
    fn remove_unknown_invoice_errors() {
        let mut workbook = Workbook::new("Test");
        let err = InvoiceService::remove(&mut workbook, Uuid::new_v4()).expect_err("must fail");
        assert!(matches!(err, CoreError::InvoiceNotFound(_)));
    }
}
