//! Malformed-record handling policy
//!
//! Decides what the aggregation driver does when a record cannot be parsed
//! into the expected three-field shape.

use clap::ValueEnum;
use std::fmt;

/// What to do when an input record is malformed
///
/// A record is malformed when a field is not an unsigned integer or when the
/// row does not have exactly three fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MalformedRecordPolicy {
    /// Stop reading the source at the first malformed record and emit what
    /// was aggregated so far
    #[default]
    Truncate,

    /// Log the malformed record, skip it and keep reading
    Skip,

    /// Fail the whole batch; no output is written for the source
    Fail,
}

impl fmt::Display for MalformedRecordPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MalformedRecordPolicy::Truncate => "truncate",
            MalformedRecordPolicy::Skip => "skip",
            MalformedRecordPolicy::Fail => "fail",
        };
        f.write_str(name)
    }
}
