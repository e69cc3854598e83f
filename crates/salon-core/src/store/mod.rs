//! In-memory vehicle inventory.
//!
//! This module provides:
//! - CSV loading with per-row skip-and-warn error handling
//! - The immutable [`RecordStore`] the search engine reads from

mod loader;

pub use loader::{
    derive_brand, filter_image_urls, parse_record, split_equipment, RowError, COLUMN_COUNT,
};

use crate::error::{Result, SalonError};
use crate::models::VehicleRecord;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// The inventory shipped with the crate.
const EMBEDDED_INVENTORY: &str = include_str!("../../data/inventory.csv");

/// Loaded vehicle records, in source row order.
///
/// Built once at startup and never mutated afterwards, so it can be shared
/// across request handlers behind an `Arc` without locking.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<VehicleRecord>,
}

impl RecordStore {
    /// Wrap already-parsed records.
    pub fn from_records(records: Vec<VehicleRecord>) -> Self {
        Self { records }
    }

    /// Load the inventory bundled with the crate.
    pub fn embedded() -> Result<Self> {
        Self::from_csv_str(EMBEDDED_INVENTORY)
    }

    /// Load inventory from a CSV file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| SalonError::io_with_path(e, path))?;
        info!("Loading inventory from {}", path.display());
        Self::from_csv_reader(file)
    }

    /// Load inventory from CSV text.
    pub fn from_csv_str(content: &str) -> Result<Self> {
        Self::from_csv_reader(content.as_bytes())
    }

    /// Load inventory from any CSV reader.
    ///
    /// The first row is a header and is skipped. Rows with the wrong column
    /// count or unparseable numeric fields are logged and skipped; a reader
    /// that cannot be parsed as CSV at all is an error.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut records = Vec::new();
        for (index, row) in csv_reader.records().enumerate() {
            let row = row?;
            let line = row.position().map(|p| p.line()).unwrap_or(index as u64 + 2);

            match parse_record(&row) {
                Ok(record) => records.push(record),
                Err(e) => warn!("Skipping inventory row at line {}: {}", line, e),
            }
        }

        info!("Loaded {} vehicles from inventory", records.len());
        Ok(Self::from_records(records))
    }

    /// All records in source order.
    pub fn records(&self) -> &[VehicleRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VehicleRecord> {
        self.records().iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "id,title,price_chf,leasing_text,first_registration,car_type,mileage_km,transmission,fuel,drive,power_hp,power_kw,mfk,warranty,warranty_text,equipment,description,image_urls";

    fn row(id: &str, title: &str) -> String {
        format!(
            "{},{},42890,Ab 580.-,08.2021,Limousine,55000,Automatik,Diesel,Allrad,190,140,True,False,24 Monate,Navi;LED,Gepflegt,https://img.example.com/{}.jpg",
            id, title, id
        )
    }

    #[test]
    fn test_embedded_inventory_loads() {
        let store = RecordStore::embedded().unwrap();
        assert_eq!(store.len(), 10);
        assert_eq!(store.records()[0].id, 1);
        assert_eq!(store.records()[0].brand, "BMW");
        assert_eq!(store.records()[4].brand, "Škoda");
        assert_eq!(store.records()[9].id, 10);
    }

    #[test]
    fn test_header_is_skipped() {
        let csv = format!("{}\n{}\n", HEADER, row("7", "Audi A4"));
        let store = RecordStore::from_csv_str(&csv).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].id, 7);
        assert!(!store.records()[0].warranty);
    }

    #[test]
    fn test_short_row_is_skipped_and_load_continues() {
        let short = "2,Audi A4,38900,Ab 530.-,07.2020,Kombi,62000,Automatik,Diesel,Front,204,150,True,True,Garantie,LED,Gepflegt";
        let csv = format!(
            "{}\n{}\n{}\n{}\n",
            HEADER,
            row("1", "BMW 520d"),
            short,
            row("3", "Volvo XC60")
        );
        let store = RecordStore::from_csv_str(&csv).unwrap();
        let ids: Vec<i64> = store.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_unparseable_numbers_are_skipped() {
        let csv = format!(
            "{}\n{}\n{}\n",
            HEADER,
            row("abc", "BMW 520d"),
            row("2", "Audi A4")
        );
        let store = RecordStore::from_csv_str(&csv).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].id, 2);
    }

    #[test]
    fn test_quoted_fields_with_commas() {
        let csv = format!(
            "{}\n5,Škoda Octavia,29900,Ab 410.-,09.2021,Kombi,45000,Manuell,Diesel,Front,150,110,true,true,12 Monate,Navi,\"Sparsam, viel Platz\",\n",
            HEADER
        );
        let store = RecordStore::from_csv_str(&csv).unwrap();
        assert_eq!(store.records()[0].description, "Sparsam, viel Platz");
        assert!(store.records()[0].image_urls.is_empty());
    }

    #[test]
    fn test_empty_source_is_empty_store() {
        let store = RecordStore::from_csv_str("").unwrap();
        assert!(store.is_empty());

        let store = RecordStore::from_csv_str(HEADER).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_fatal() {
        let mut bytes = format!("{}\n", HEADER).into_bytes();
        bytes.extend_from_slice(b"1,\xff\xfe,1,a,b,c,1,d,e,f,1,1,true,true,g,h,i,j\n");
        let err = RecordStore::from_csv_reader(bytes.as_slice()).unwrap_err();
        assert!(matches!(err, SalonError::Source { .. }));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        writeln!(file, "{}", row("42", "Tesla Model 3")).unwrap();
        file.flush().unwrap();

        let store = RecordStore::from_path(file.path()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].brand, "Tesla");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = RecordStore::from_path("/nonexistent/inventory.csv").unwrap_err();
        assert!(matches!(err, SalonError::Io { path: Some(_), .. }));
    }
}
