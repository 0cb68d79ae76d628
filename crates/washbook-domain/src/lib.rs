//! washbook-domain
//!
//! Pure domain models (Invoice, Customer, PendingOrder, ServiceSets,
//! Workbook, report types). No I/O, no services, no storage. Only data
//! types, core enums, and calendar helpers.

pub mod catalog;
pub mod common;
pub mod customer;
pub mod invoice;
pub mod order;
pub mod report;
pub mod workbook;

pub use catalog::*;
pub use common::*;
pub use customer::*;
pub use invoice::*;
pub use order::*;
pub use report::*;
pub use workbook::*;
