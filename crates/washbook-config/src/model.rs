use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application-wide settings: one record per deployment.
///
/// The business identity and UPI id printed on every invoice live here,
/// not on individual records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    pub business_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_address: Option<String>,
    /// UPI id rendered as the payment QR target on invoices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upi_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_opened_workbook: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for workbooks. Defaults to
    /// `~/Documents/Washbook`.
    pub default_workbook_root: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for backups. Defaults to
    /// `~/Documents/Washbook/backups`.
    pub default_backup_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-IN".into(),
            currency: "INR".into(),
            business_name: "Vehicle Wash".into(),
            business_phone: None,
            business_address: None,
            upi_id: None,
            last_opened_workbook: None,
            default_workbook_root: None,
            default_backup_root: None,
        }
    }
}

impl Config {
    pub fn resolve_default_workbook_root(&self) -> PathBuf {
        if let Some(path) = &self.default_workbook_root {
            return path.clone();
        }
        documents_base().join("Washbook")
    }

    pub fn resolve_default_backup_root(&self) -> PathBuf {
        if let Some(path) = &self.default_backup_root {
            return path.clone();
        }
        documents_base().join("Washbook").join("backups")
    }
}

fn documents_base() -> PathBuf {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}
