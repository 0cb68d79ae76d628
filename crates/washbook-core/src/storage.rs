use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use washbook_domain::{parse_display_date, Workbook};

use crate::CoreError;

/// Describes a persisted backup artifact for a workbook.
#[derive(Debug, Clone)]
pub struct WorkbookBackupInfo {
    pub workbook: String,
    pub id: String,
    pub created_at: String,
    pub path: PathBuf,
}

/// Abstraction over persistence backends capable of storing workbooks
/// and backups.
pub trait WorkbookStorage: Send + Sync {
    fn save_workbook(&self, name: &str, workbook: &Workbook) -> Result<(), CoreError>;
    fn load_workbook(&self, name: &str) -> Result<Workbook, CoreError>;
    fn list_workbooks(&self) -> Result<Vec<String>, CoreError>;
    fn delete_workbook(&self, name: &str) -> Result<(), CoreError>;
    fn save_workbook_to_path(&self, workbook: &Workbook, path: &Path) -> Result<(), CoreError>;
    fn load_workbook_from_path(&self, path: &Path) -> Result<Workbook, CoreError>;
    fn backup_workbook(
        &self,
        name: &str,
        workbook: &Workbook,
        note: Option<&str>,
    ) -> Result<WorkbookBackupInfo, CoreError>;
    fn list_backups(&self, name: &str) -> Result<Vec<WorkbookBackupInfo>, CoreError>;
    fn restore_backup(&self, backup: &WorkbookBackupInfo) -> Result<Workbook, CoreError>;
}

/// Detects dangling references and other anomalies within a workbook
/// snapshot. Warnings are advisory: loading never fails because of them.
pub fn workbook_warnings(workbook: &Workbook) -> Vec<String> {
    let known_phones: HashSet<&str> = workbook
        .customers
        .iter()
        .map(|customer| customer.phone.as_str())
        .collect();
    let mut warnings = Vec::new();

    for invoice in &workbook.invoices {
        if !invoice.customer_phone.trim().is_empty()
            && !known_phones.contains(invoice.customer_phone.as_str())
        {
            warnings.push(format!(
                "invoice {} references unknown customer phone {}",
                invoice.invoice_number, invoice.customer_phone
            ));
        }
        if parse_display_date(&invoice.invoice_date).is_none() {
            warnings.push(format!(
                "invoice {} has unparseable date `{}`",
                invoice.invoice_number, invoice.invoice_date
            ));
        }
        for payment in &invoice.payments {
            if payment.amount <= 0.0 {
                warnings.push(format!(
                    "invoice {} has non-positive payment of {}",
                    invoice.invoice_number, payment.amount
                ));
            }
        }
    }

    for order in &workbook.pending_orders {
        if parse_display_date(&order.order_date).is_none() {
            warnings.push(format!(
                "pending order {} has unparseable date `{}`",
                order.id, order.order_date
            ));
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use washbook_domain::{Customer, CustomerType, Invoice, Payment, PaymentMethod};

    #[test]
    fn clean_workbook_yields_no_warnings() {
        let mut workbook = Workbook::new("Test");
        workbook.add_customer(Customer::new("98001", "Asha", "MG Road"));
        workbook.add_invoice(Invoice::new(
            "INV-1",
            "10/01/2024",
            "Asha",
            "98001",
            CustomerType::Customer,
        ));
        assert!(workbook_warnings(&workbook).is_empty());
    }

    #[test]
    fn anomalies_surface_as_warnings() {
        let mut workbook = Workbook::new("Test");
        let mut invoice =
            Invoice::new("INV-1", "someday", "Ghost", "90000", CustomerType::Customer);
        invoice.add_payment(Payment::new(-5.0, "10/01/2024", PaymentMethod::Cash));
        workbook.add_invoice(invoice);

        let warnings = workbook_warnings(&workbook);
        assert_eq!(warnings.len(), 3);
        assert!(warnings.iter().any(|w| w.contains("unknown customer")));
        assert!(warnings.iter().any(|w| w.contains("unparseable date")));
        assert!(warnings.iter().any(|w| w.contains("non-positive payment")));
    }
}
