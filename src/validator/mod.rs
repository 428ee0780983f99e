//! Validator Module
//!
//! Purchase order input types, the validation engine and its report.

mod engine;
mod order;
mod report;

pub use engine::{
    missing_reason, LookupCache, LookupOutcome, OrderValidator, CACHE_KEY_PREFIX,
};
pub use order::{Buyer, OrderItem, PurchaseOrder};
pub use report::{success_percentage, MissingItem, ValidationReport, ValidationSummary};
