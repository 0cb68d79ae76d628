//! Phone-keyed customer mutations.

use washbook_domain::{Customer, Workbook};

use crate::error::CoreError;

/// Write-path operations for [`Customer`] records.
///
/// Customers are keyed by phone number; there is no surrogate id.
pub struct CustomerService;

impl CustomerService {
    /// Inserts or overwrites the customer with the same phone number.
    pub fn upsert(workbook: &mut Workbook, customer: Customer) -> Result<(), CoreError> {
        if customer.phone.trim().is_empty() {
            return Err(CoreError::Validation("Customer phone is required".into()));
        }
        match workbook.customer_by_phone_mut(&customer.phone) {
            Some(existing) => {
                existing.name = customer.name;
                existing.address = customer.address;
                workbook.touch();
            }
            None => workbook.add_customer(customer),
        }
        Ok(())
    }

    pub fn remove(workbook: &mut Workbook, phone: &str) -> Result<(), CoreError> {
        let before = workbook.customers.len();
        workbook.customers.retain(|customer| customer.phone != phone);
        if workbook.customers.len() == before {
            return Err(CoreError::CustomerNotFound(phone.to_string()));
        }
        workbook.touch();
        Ok(())
    }

    pub fn list(workbook: &Workbook) -> Vec<&Customer> {
        workbook.customers.iter().collect()
    }

    pub fn find<'a>(workbook: &'a Workbook, phone: &str) -> Option<&'a Customer> {
        workbook.customer_by_phone(phone)
    }
}
