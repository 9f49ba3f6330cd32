//! CSV format handling for order logs and summary output
//!
//! This module centralizes the file-format conventions:
//! - The input header that marks a file as an order log
//! - The output header of summary files
//! - The number of fields in an order record
//! - The naming rule for summary files
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::CompressError;
use std::path::{Path, PathBuf};

/// First line of every order log
pub const INPUT_HEADER: &str = "customer_id,order_id,number_of_items";

/// Fields per order record, read by position
pub const INPUT_FIELD_COUNT: usize = 3;

/// Column names of the summary output
pub const OUTPUT_HEADER: [&str; 2] = ["customer_id", "compressed_int"];

/// Default prefix prepended to a source's file name to name its summary
pub const DEFAULT_OUTPUT_PREFIX: &str = "compressed_";

/// Check whether a file's first line marks it as an order log
///
/// Only the leading bytes are compared, so trailing columns, whitespace or
/// line endings after the header do not disqualify the file.
pub fn is_order_header(first_line: &str) -> bool {
    first_line.starts_with(INPUT_HEADER)
}

/// Reject a row that does not have exactly `INPUT_FIELD_COUNT` fields
///
/// Rows are matched to `OrderRecord` by position, not by header name, so the
/// field count is checked here rather than against the header row.
pub fn check_field_count(found: usize, line: Option<u64>) -> Result<(), CompressError> {
    if found == INPUT_FIELD_COUNT {
        Ok(())
    } else {
        Err(CompressError::malformed_record(
            line,
            &format!("expected {} fields, found {}", INPUT_FIELD_COUNT, found),
        ))
    }
}

/// Build the summary path for a source
///
/// The summary lives next to the source and is named by prefixing the
/// source's file name, e.g. `logs/orders.csv` → `logs/compressed_orders.csv`.
///
/// # Errors
///
/// Returns an error if the source path has no file name component.
pub fn summary_path(source: &Path, prefix: &str) -> Result<PathBuf, CompressError> {
    let file_name = source.file_name().ok_or_else(|| CompressError::IoError {
        message: format!("'{}' has no file name", source.display()),
    })?;

    let mut name = prefix.to_string();
    name.push_str(&file_name.to_string_lossy());

    Ok(source.with_file_name(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::exact("customer_id,order_id,number_of_items", true)]
    #[case::with_newline("customer_id,order_id,number_of_items\n", true)]
    #[case::with_crlf("customer_id,order_id,number_of_items\r\n", true)]
    #[case::extra_column("customer_id,order_id,number_of_items,note", true)]
    #[case::summary_header("customer_id,compressed_int\n", false)]
    #[case::reordered("order_id,customer_id,number_of_items\n", false)]
    #[case::leading_space(" customer_id,order_id,number_of_items\n", false)]
    #[case::empty("", false)]
    fn test_is_order_header(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(is_order_header(line), expected);
    }

    #[rstest]
    #[case::exact(3, true)]
    #[case::missing(2, false)]
    #[case::extra(4, false)]
    fn test_check_field_count(#[case] found: usize, #[case] valid: bool) {
        let result = check_field_count(found, Some(2));
        assert_eq!(result.is_ok(), valid);
        if let Err(e) = result {
            assert!(e.is_malformed_record());
            assert_eq!(e.line(), Some(2));
        }
    }

    #[rstest]
    #[case("orders.csv", "compressed_", "compressed_orders.csv")]
    #[case("logs/orders.csv", "compressed_", "logs/compressed_orders.csv")]
    #[case("logs/orders.csv", "summary-", "logs/summary-orders.csv")]
    fn test_summary_path(#[case] source: &str, #[case] prefix: &str, #[case] expected: &str) {
        let path = summary_path(Path::new(source), prefix).unwrap();
        assert_eq!(path, PathBuf::from(expected));
    }

    #[test]
    fn test_summary_path_requires_file_name() {
        assert!(summary_path(Path::new("/"), DEFAULT_OUTPUT_PREFIX).is_err());
    }
}
