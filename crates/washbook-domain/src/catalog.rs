//! Service price catalog, one template set per customer category.

use serde::{Deserialize, Serialize};

use crate::common::*;
use crate::customer::CustomerType;

/// A catalog entry used to pre-populate a new service line.
///
/// Copy-on-select: once a line is created from a template the two are
/// not linked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceTemplate {
    pub name: String,
    pub price: f64,
}

impl ServiceTemplate {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

impl NamedEntity for ServiceTemplate {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Price catalog keyed by customer category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ServiceSets {
    #[serde(default)]
    pub customer: Vec<ServiceTemplate>,
    #[serde(default)]
    pub garage_service_station: Vec<ServiceTemplate>,
    #[serde(default)]
    pub dealer: Vec<ServiceTemplate>,
}

impl ServiceSets {
    /// Templates for a customer category. `Unknown` has no catalog and
    /// yields an empty slice.
    pub fn templates(&self, customer_type: CustomerType) -> &[ServiceTemplate] {
        match customer_type {
            CustomerType::Customer => &self.customer,
            CustomerType::GarageServiceStation => &self.garage_service_station,
            CustomerType::Dealer => &self.dealer,
            CustomerType::Unknown => &[],
        }
    }

    pub fn templates_mut(&mut self, customer_type: CustomerType) -> Option<&mut Vec<ServiceTemplate>> {
        match customer_type {
            CustomerType::Customer => Some(&mut self.customer),
            CustomerType::GarageServiceStation => Some(&mut self.garage_service_station),
            CustomerType::Dealer => Some(&mut self.dealer),
            CustomerType::Unknown => None,
        }
    }
}
