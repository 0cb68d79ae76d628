//! Domain model for pending orders awaiting invoice conversion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;
use crate::customer::CustomerType;
use crate::invoice::{CarriedAmount, ServiceLine};

/// A pre-invoice draft captured during order taking.
///
/// Promoted into an [`crate::invoice::Invoice`] by copying its fields
/// across, then deleted from the pending set; no back-link survives
/// promotion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PendingOrder {
    pub id: Uuid,
    /// Display-formatted date (`DD/MM/YYYY`).
    pub order_date: String,
    pub created_at: DateTime<Utc>,
    pub customer_name: String,
    pub customer_phone: String,
    #[serde(default)]
    pub customer_address: String,
    #[serde(default = "CustomerType::unknown")]
    pub customer_type: CustomerType,
    #[serde(default)]
    pub services: Vec<ServiceLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advance_paid: Option<CarriedAmount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default)]
    pub is_urgent: bool,
}

impl PendingOrder {
    pub fn new(
        order_date: impl Into<String>,
        customer_name: impl Into<String>,
        customer_phone: impl Into<String>,
        customer_type: CustomerType,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_date: order_date.into(),
            created_at: Utc::now(),
            customer_name: customer_name.into(),
            customer_phone: customer_phone.into(),
            customer_address: String::new(),
            customer_type,
            services: Vec::new(),
            advance_paid: None,
            due_date: None,
            is_urgent: false,
        }
    }

    pub fn with_services(mut self, services: Vec<ServiceLine>) -> Self {
        self.services = services;
        self
    }

    pub fn with_advance(mut self, advance: CarriedAmount) -> Self {
        self.advance_paid = Some(advance);
        self
    }

    pub fn urgent(mut self) -> Self {
        self.is_urgent = true;
        self
    }
}

impl Identifiable for PendingOrder {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for PendingOrder {
    fn display_label(&self) -> String {
        format!(
            "{} — {}{}",
            self.order_date,
            self.customer_name,
            if self.is_urgent { " (urgent)" } else { "" }
        )
    }
}
