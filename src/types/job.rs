//! Compression jobs
//!
//! A job pairs one validated input source with the path its summary will be
//! written to.

use std::path::PathBuf;

/// One eligible source and its destination
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CompressionJob {
    /// Validated transaction-log file
    pub input: PathBuf,

    /// Where the compressed summary goes
    pub output: PathBuf,
}

impl CompressionJob {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        CompressionJob {
            input: input.into(),
            output: output.into(),
        }
    }
}
