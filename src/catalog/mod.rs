//! Catalog Module
//!
//! Loading the customer catalog and indexing it by (customer, article).

mod index;
mod record;
mod source;

pub use index::{
    lookup_key, normalize_article, normalize_customer, CatalogColumns, CatalogIndex,
    DEFAULT_ARTICLE_COLUMN, DEFAULT_CUSTOMER_COLUMN, KEY_SEPARATOR,
};
pub use record::CatalogRecord;
pub use source::{CatalogSource, CatalogTable, CsvCatalogSource};
