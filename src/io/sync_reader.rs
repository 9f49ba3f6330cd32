//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over order records from an order log.
//!
//! # Design
//!
//! The SyncReader uses csv::Reader to read CSV records sequentially. The
//! header row is consumed by the reader but never used to map columns: each
//! row is deserialized into `OrderRecord` by position, so any header that
//! passed discovery reads the same way. Records are read one at a time; the
//! file is never loaded into memory as a whole.
//!
//! # Iterator Interface
//!
//! SyncReader implements the Iterator trait, yielding
//! `Result<OrderRecord, CompressError>` for each data row, which is exactly
//! what the aggregation driver consumes:
//!
//! ```no_run
//! use order_compressor::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("orders.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("Order: {:?}", record),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Opening failures are returned from `new()`
//! - Rows with a non-numeric field or the wrong number of fields are yielded
//!   as `CompressError::MalformedRecord` with their line number
//! - The reader itself never stops early; the caller decides what a
//!   malformed record means

use crate::io::csv_format::check_field_count;
use crate::types::{CompressError, OrderRecord};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Synchronous CSV reader
///
/// Generic over the underlying byte source so tests and callers can feed it
/// from memory; `SyncReader::new` opens a file.
#[derive(Debug)]
pub struct SyncReader<R: Read = File> {
    reader: csv::Reader<R>,
    record: StringRecord,
}

impl SyncReader<File> {
    /// Create a new SyncReader from a file path
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the order log
    ///
    /// # Returns
    ///
    /// * `Ok(SyncReader)` if file opened successfully
    /// * `Err(CompressError)` if file could not be opened
    pub fn new(path: &Path) -> Result<Self, CompressError> {
        let file = File::open(path).map_err(|e| CompressError::from_io(e, path))?;
        Ok(Self::from_reader(file))
    }
}

impl<R: Read> SyncReader<R> {
    /// Create a SyncReader over any byte source
    ///
    /// The CSV reader is configured to:
    /// - Treat the first row as the header
    /// - Trim whitespace from all fields
    /// - Accept rows of any length; the field count is checked per row
    /// - Use an 8KB buffer for efficient I/O
    pub fn from_reader(source: R) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(source);

        Self {
            reader,
            record: StringRecord::new(),
        }
    }
}

impl<R: Read> Iterator for SyncReader<R> {
    type Item = Result<OrderRecord, CompressError>;

    /// Get the next order record
    ///
    /// # Returns
    ///
    /// * `Some(Ok(OrderRecord))` - Successfully parsed record
    /// * `Some(Err(CompressError))` - Malformed row or read failure
    /// * `None` - End of input reached
    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(true) => Some(parse_record(&self.record)),
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
        }
    }
}

/// Deserialize one row into an `OrderRecord` by position
fn parse_record(record: &StringRecord) -> Result<OrderRecord, CompressError> {
    let line = record.position().map(|pos| pos.line());
    check_field_count(record.len(), line)?;
    Ok(record.deserialize::<OrderRecord>(None)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn read_all(content: &str) -> Vec<Result<OrderRecord, CompressError>> {
        SyncReader::from_reader(content.as_bytes()).collect()
    }

    #[test]
    fn test_sync_reader_new_opens_file() {
        let file = create_temp_csv("customer_id,order_id,number_of_items\n1,100,5\n");

        let records: Vec<_> = SyncReader::new(file.path()).unwrap().collect();
        assert_eq!(records, vec![Ok(OrderRecord::new(1, 100, 5))]);
    }

    #[test]
    fn test_sync_reader_new_fails_on_missing_file() {
        let result = SyncReader::new(Path::new("nonexistent.csv"));
        assert!(matches!(result, Err(CompressError::FileNotFound { .. })));
    }

    #[test]
    fn test_sync_reader_iterates_multiple_records() {
        let records = read_all("customer_id,order_id,number_of_items\n1,100,5\n2,101,3\n1,102,7\n");

        assert_eq!(
            records,
            vec![
                Ok(OrderRecord::new(1, 100, 5)),
                Ok(OrderRecord::new(2, 101, 3)),
                Ok(OrderRecord::new(1, 102, 7)),
            ]
        );
    }

    #[test]
    fn test_sync_reader_header_only() {
        assert!(read_all("customer_id,order_id,number_of_items\n").is_empty());
    }

    #[test]
    fn test_sync_reader_handles_whitespace_and_crlf() {
        let records = read_all("customer_id,order_id,number_of_items\r\n  1 , 100 ,  5  \r\n");
        assert_eq!(records, vec![Ok(OrderRecord::new(1, 100, 5))]);
    }

    #[test]
    fn test_sync_reader_non_numeric_field_is_malformed() {
        let records = read_all("customer_id,order_id,number_of_items\n1,100,5\n2,abc,3\n");

        assert_eq!(records.len(), 2);
        assert!(records[0].is_ok());
        let error = records[1].as_ref().unwrap_err();
        assert!(error.is_malformed_record());
        assert_eq!(error.line(), Some(3)); // line 3 because of header
    }

    #[test]
    fn test_sync_reader_negative_number_is_malformed() {
        let records = read_all("customer_id,order_id,number_of_items\n-1,100,5\n");
        assert!(records[0].as_ref().unwrap_err().is_malformed_record());
    }

    #[test]
    fn test_sync_reader_wrong_field_count_is_malformed() {
        let records = read_all("customer_id,order_id,number_of_items\n1,100\n2,101,3,9\n");

        assert_eq!(records.len(), 2);
        assert!(records[0].as_ref().unwrap_err().is_malformed_record());
        assert!(records[1].as_ref().unwrap_err().is_malformed_record());
    }

    #[test]
    fn test_sync_reader_ignores_header_names() {
        let records = read_all("customer_id,order_id,number_of_items,note\n1,100,5\n2,101,3\n");
        assert_eq!(
            records,
            vec![Ok(OrderRecord::new(1, 100, 5)), Ok(OrderRecord::new(2, 101, 3))]
        );

        let records = read_all("customer_id,order_id,number_of_itemsXX\n1,100,5\n");
        assert_eq!(records, vec![Ok(OrderRecord::new(1, 100, 5))]);
    }

    #[test]
    fn test_sync_reader_wrong_field_count_reports_line() {
        let records = read_all("customer_id,order_id,number_of_items\n1,100,5\n1,100\n");
        assert_eq!(records[1].as_ref().unwrap_err().line(), Some(3));
    }

    #[test]
    fn test_sync_reader_continues_after_error() {
        let records = read_all("customer_id,order_id,number_of_items\n1,100,5\nx,y,z\n3,102,1\n");

        assert_eq!(records.len(), 3);
        assert!(records[0].is_ok());
        assert!(records[1].is_err());
        assert_eq!(records[2], Ok(OrderRecord::new(3, 102, 1)));
    }
}
