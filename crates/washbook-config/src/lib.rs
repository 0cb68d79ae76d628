//! washbook-config
//!
//! Persistent application settings (the deployment-wide singleton:
//! business identity, UPI id, locale) plus disk persistence helpers.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::Config;
