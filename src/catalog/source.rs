//! Catalog Source Module
//!
//! Where catalog rows come from. The validator only needs a header row and
//! data rows; `CsvCatalogSource` reads them from a CSV export of the catalog
//! spreadsheet.

use std::path::PathBuf;

use tracing::info;

use crate::error::{Result, ValidatorError};

// == Catalog Table ==
/// Raw catalog contents: ordered column names and ordered rows of cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogTable {
    /// Column names from the header row
    pub headers: Vec<String>,
    /// Data rows, possibly shorter than `headers`
    pub rows: Vec<Vec<String>>,
}

impl CatalogTable {
    /// Creates a table from an already split header and data rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Creates a table from raw sheet rows where row 0 is the header row.
    ///
    /// Fails when there is no header row or no data row.
    pub fn from_raw_rows(mut raw: Vec<Vec<String>>) -> Result<Self> {
        if raw.len() < 2 {
            return Err(ValidatorError::Configuration(
                "catalog is empty or has no data rows".to_string(),
            ));
        }

        let rows = raw.split_off(1);
        let headers = raw.pop().unwrap_or_default();
        Ok(Self { headers, rows })
    }

    /// Position of the column whose trimmed header equals `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim() == name)
    }
}

// == Catalog Source ==
/// Anything able to produce the catalog table at startup.
pub trait CatalogSource {
    /// Loads the whole catalog.
    fn load(&self) -> Result<CatalogTable>;
}

impl CatalogSource for CatalogTable {
    fn load(&self) -> Result<CatalogTable> {
        Ok(self.clone())
    }
}

// == CSV Catalog Source ==
/// Reads the catalog from a CSV file whose first record is the header row.
#[derive(Debug, Clone)]
pub struct CsvCatalogSource {
    path: PathBuf,
}

impl CsvCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for CsvCatalogSource {
    fn load(&self) -> Result<CatalogTable> {
        info!("Loading catalog from {}", self.path.display());

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| {
                ValidatorError::Configuration(format!(
                    "cannot open catalog {}: {}",
                    self.path.display(),
                    e
                ))
            })?;

        let mut raw = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| {
                ValidatorError::Configuration(format!(
                    "cannot read catalog {}: {}",
                    self.path.display(),
                    e
                ))
            })?;
            raw.push(record.iter().map(str::to_string).collect::<Vec<_>>());
        }

        let table = CatalogTable::from_raw_rows(raw)?;
        info!(
            "Catalog loaded: {} rows, {} columns",
            table.rows.len(),
            table.headers.len()
        );
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_raw_rows_splits_header() {
        let table = CatalogTable::from_raw_rows(vec![
            strings(&["Código SN", "Nº catálogo SN"]),
            strings(&["CN1", "A1"]),
            strings(&["CN2", "A2"]),
        ])
        .unwrap();

        assert_eq!(table.headers, strings(&["Código SN", "Nº catálogo SN"]));
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], strings(&["CN2", "A2"]));
    }

    #[test]
    fn test_from_raw_rows_header_only() {
        let result = CatalogTable::from_raw_rows(vec![strings(&["Código SN", "Nº catálogo SN"])]);
        assert!(matches!(result, Err(ValidatorError::Configuration(_))));
    }

    #[test]
    fn test_from_raw_rows_empty() {
        let result = CatalogTable::from_raw_rows(Vec::new());
        assert!(matches!(result, Err(ValidatorError::Configuration(_))));
    }

    #[test]
    fn test_column_index_trims_headers() {
        let table = CatalogTable::new(strings(&[" Código SN ", "Nº catálogo SN"]), Vec::new());

        assert_eq!(table.column_index("Código SN"), Some(0));
        assert_eq!(table.column_index("Nº catálogo SN"), Some(1));
        assert_eq!(table.column_index("código sn"), None);
    }

    #[test]
    fn test_csv_source_loads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Código SN,Nº catálogo SN,Descripción").unwrap();
        writeln!(file, "CN800069933,14003793002,Etiqueta adhesiva").unwrap();
        writeln!(file, "CN900,ABC").unwrap();

        let table = CsvCatalogSource::new(file.path()).load().unwrap();

        assert_eq!(table.headers.len(), 3);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][2], "Etiqueta adhesiva");
        assert_eq!(table.rows[1], strings(&["CN900", "ABC"]));
    }

    #[test]
    fn test_csv_source_header_only_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Código SN,Nº catálogo SN").unwrap();

        let result = CsvCatalogSource::new(file.path()).load();
        assert!(matches!(result, Err(ValidatorError::Configuration(_))));
    }

    #[test]
    fn test_csv_source_missing_file() {
        let result = CsvCatalogSource::new("/nonexistent/catalog.csv").load();
        assert!(matches!(result, Err(ValidatorError::Configuration(_))));
    }

    #[test]
    fn test_table_is_its_own_source() {
        let table = CatalogTable::new(strings(&["a"]), vec![strings(&["1"])]);
        assert_eq!(table.load().unwrap(), table);
    }
}
