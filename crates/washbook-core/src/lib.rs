//! washbook-core
//!
//! Business logic and services for Washbook: the money/status engine,
//! analytics and chart aggregation, validated record mutations, and the
//! storage abstraction. Depends on washbook-domain. No terminal I/O, no
//! direct storage interactions.

pub mod analytics;
pub mod billing;
pub mod catalog_service;
pub mod charts;
pub mod customer_service;
pub mod error;
pub mod format;
pub mod invoice_service;
pub mod order_service;
pub mod storage;

pub use analytics::AnalyticsService;
pub use billing::BillingService;
pub use catalog_service::CatalogService;
pub use charts::ChartService;
pub use customer_service::CustomerService;
pub use error::CoreError;
pub use format::{CurrencyFormatter, DateFormatter};
pub use invoice_service::InvoiceService;
pub use order_service::OrderService;
pub use storage::{workbook_warnings, WorkbookBackupInfo, WorkbookStorage};
