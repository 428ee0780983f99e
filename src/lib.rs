//! Order Validator - purchase order validation against a customer catalog
//!
//! Checks each order line against a (customer, article) catalog index and
//! memoizes lookups in a bounded cache with sliding expiration.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod validator;

pub use api::AppState;
pub use config::Config;
pub use error::{Result, ValidatorError};
pub use validator::{OrderValidator, PurchaseOrder, ValidationReport};
