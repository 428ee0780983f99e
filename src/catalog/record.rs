//! Catalog Record Module
//!
//! One row of the customer catalog.

use std::collections::BTreeMap;

use serde::Serialize;

// == Catalog Record ==
/// A catalog row keyed by customer and article code, with every column of
/// the source row kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogRecord {
    /// Raw customer code as found in the source
    pub customer_code: String,
    /// Raw article code as found in the source
    pub article_code: String,
    /// All columns of the row, keyed by header
    pub columns: BTreeMap<String, String>,
}

impl CatalogRecord {
    /// Builds a record from a header row and a data row.
    ///
    /// Missing trailing cells are stored as empty strings.
    pub fn from_row(
        headers: &[String],
        row: &[String],
        customer_idx: usize,
        article_idx: usize,
    ) -> Self {
        let cell = |idx: usize| row.get(idx).cloned().unwrap_or_default();

        let columns = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| (header.clone(), cell(idx)))
            .collect();

        Self {
            customer_code: cell(customer_idx),
            article_code: cell(article_idx),
            columns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_row() {
        let headers = strings(&["Código SN", "Nº catálogo SN", "Descripción"]);
        let row = strings(&["CN800069933", "14003793002", "Etiqueta"]);

        let record = CatalogRecord::from_row(&headers, &row, 0, 1);

        assert_eq!(record.customer_code, "CN800069933");
        assert_eq!(record.article_code, "14003793002");
        assert_eq!(record.columns["Descripción"], "Etiqueta");
        assert_eq!(record.columns.len(), 3);
    }

    #[test]
    fn test_from_short_row_pads_with_empty() {
        let headers = strings(&["Código SN", "Nº catálogo SN", "Descripción"]);
        let row = strings(&["CN1"]);

        let record = CatalogRecord::from_row(&headers, &row, 0, 1);

        assert_eq!(record.article_code, "");
        assert_eq!(record.columns["Descripción"], "");
    }
}
