use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Workbook not loaded")]
    WorkbookNotLoaded,
    #[error("Workbook not found: {0}")]
    WorkbookNotFound(String),
    #[error("Invoice not found: {0}")]
    InvoiceNotFound(Uuid),
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),
    #[error("Pending order not found: {0}")]
    OrderNotFound(Uuid),
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
