//! Report data models produced by the analytics and chart services.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::customer::CustomerType;

/// Dashboard summary computed over an invoice collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsSummary {
    pub total_invoices: usize,
    /// Gross billed amount across all invoices, ignoring payment state.
    pub total_revenue: f64,
    /// Sum of positive remaining balances; over-paid invoices contribute
    /// zero, never a negative offset.
    pub unpaid_balance: f64,
    /// Recorded payments only; excludes advances and old balances.
    pub total_payments: f64,
    pub revenue_by_customer_type: Vec<CustomerTypeRevenue>,
    /// Most-sold services by total quantity, at most five entries.
    pub top_services: Vec<ServiceUsage>,
}

impl AnalyticsSummary {
    pub fn empty() -> Self {
        Self {
            total_invoices: 0,
            total_revenue: 0.0,
            unpaid_balance: 0.0,
            total_payments: 0.0,
            revenue_by_customer_type: Vec::new(),
            top_services: Vec::new(),
        }
    }
}

/// Gross revenue attributed to one customer category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerTypeRevenue {
    pub customer_type: CustomerType,
    pub revenue: f64,
}

/// Total quantity sold for a single service name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceUsage {
    pub name: String,
    pub quantity: u32,
}

/// Granularity of a time-bucketed chart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChartPeriod {
    Day,
    Week,
    Month,
    Year,
}

impl fmt::Display for ChartPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ChartPeriod::Day => "Day",
            ChartPeriod::Week => "Week",
            ChartPeriod::Month => "Month",
            ChartPeriod::Year => "Year",
        };
        f.write_str(label)
    }
}

/// Labeled bucket series for a chart: `revenue[i]` and `collected[i]`
/// belong to `labels[i]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSeries {
    pub period: ChartPeriod,
    pub labels: Vec<String>,
    pub revenue: Vec<f64>,
    pub collected: Vec<f64>,
}

impl ChartSeries {
    pub fn with_labels(period: ChartPeriod, labels: Vec<String>) -> Self {
        let buckets = labels.len();
        Self {
            period,
            labels,
            revenue: vec![0.0; buckets],
            collected: vec![0.0; buckets],
        }
    }
}
