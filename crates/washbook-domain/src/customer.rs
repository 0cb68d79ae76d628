//! Domain types for customers and customer categories.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::*;

/// Pricing category a customer belongs to.
///
/// `Unknown` absorbs unmapped and missing values from legacy records so
/// deserialization never fails; aggregations skip it. The constructor
/// default stays `Customer` for records created in-app.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum CustomerType {
    #[default]
    Customer,
    GarageServiceStation,
    Dealer,
    #[serde(other)]
    Unknown,
}

impl CustomerType {
    /// The three categories that carry a service catalog and appear in
    /// reports.
    pub const KNOWN: [CustomerType; 3] = [
        CustomerType::Customer,
        CustomerType::GarageServiceStation,
        CustomerType::Dealer,
    ];

    pub fn is_known(self) -> bool {
        !matches!(self, CustomerType::Unknown)
    }

    /// Serde default for records that carry no type at all, so missing
    /// and unmapped type data land in the same bucket.
    pub(crate) fn unknown() -> Self {
        CustomerType::Unknown
    }
}

impl fmt::Display for CustomerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CustomerType::Customer => "Customer",
            CustomerType::GarageServiceStation => "Garage / Service Station",
            CustomerType::Dealer => "Dealer",
            CustomerType::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// A customer record, keyed by phone number rather than a surrogate id.
///
/// Writing a customer with an existing phone overwrites name and
/// address (upsert semantics).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub phone: String,
    pub name: String,
    pub address: String,
}

impl Customer {
    pub fn new(
        phone: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            phone: phone.into(),
            name: name.into(),
            address: address.into(),
        }
    }
}

impl NamedEntity for Customer {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Customer {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.phone)
    }
}
