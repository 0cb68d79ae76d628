//! Washbook offers invoicing, customer, pending-order, catalog, and
//! reporting primitives for a vehicle-wash business, plus the
//! composition pieces (workbook manager, settings, translations) a
//! presentation layer embeds.

pub mod app;
pub mod i18n;

pub use app::{LoadOutcome, WorkbookManager};
pub use i18n::{Locale, MessageKey, Translator};
pub use washbook_config::{Config, ConfigError, ConfigManager};
pub use washbook_core::{
    AnalyticsService, BillingService, CatalogService, ChartService, CoreError, CustomerService,
    InvoiceService, OrderService,
};
pub use washbook_domain as domain;
pub use washbook_storage_json::JsonWorkbookStorage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("washbook=info"));
        fmt().with_env_filter(filter).init();
        tracing::info!("Washbook tracing initialized.");
    });
}
