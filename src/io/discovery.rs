//! Source discovery and validation
//!
//! Decides which files are eligible for compression. This is kept separate
//! from the core: the strategies only ever receive jobs whose input has
//! already been validated.
//!
//! # Rules of `DirectoryDiscovery`
//!
//! - Only regular files directly inside the directory are considered
//! - The file must have a `.csv` extension (any case)
//! - Its first line must start with the order-log header
//! - Unreadable files and files with another header are logged and skipped
//!
//! Summary files from an earlier run carry the summary header, so they fail
//! the header check and are never compressed twice.

use crate::io::csv_format::{is_order_header, summary_path};
use crate::types::{CompressError, CompressionJob};
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Supplies the validated jobs for one run
pub trait SourceDiscovery {
    /// Find every eligible source and pair it with its output path
    ///
    /// # Errors
    ///
    /// Returns an error only when discovery as a whole cannot proceed (e.g.
    /// the directory cannot be listed). Individual ineligible sources are
    /// skipped, not reported as errors.
    fn discover(&self) -> Result<Vec<CompressionJob>, CompressError>;
}

/// Discovers order logs in a single directory
#[derive(Debug, Clone)]
pub struct DirectoryDiscovery {
    directory: PathBuf,
    output_prefix: String,
}

impl DirectoryDiscovery {
    /// Create a discovery over `directory`, naming outputs with `output_prefix`
    pub fn new(directory: impl Into<PathBuf>, output_prefix: &str) -> Self {
        DirectoryDiscovery {
            directory: directory.into(),
            output_prefix: output_prefix.to_string(),
        }
    }

    fn is_csv(path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
    }
}

impl SourceDiscovery for DirectoryDiscovery {
    fn discover(&self) -> Result<Vec<CompressionJob>, CompressError> {
        let entries =
            fs::read_dir(&self.directory).map_err(|e| CompressError::from_io(e, &self.directory))?;

        let mut jobs = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() || !Self::is_csv(&path) {
                continue;
            }

            match validate_source(&path) {
                Ok(()) => {
                    log::info!("Valid header for {}; queued for compression", path.display());
                    let output = summary_path(&path, &self.output_prefix)?;
                    jobs.push(CompressionJob::new(path, output));
                }
                Err(e @ CompressError::InvalidHeader { .. }) => {
                    log::warn!("{}; will not compress", e);
                }
                Err(e) => {
                    log::warn!("Unable to open {}: {}; will not compress", path.display(), e);
                }
            }
        }

        // read_dir order is platform dependent
        jobs.sort();
        Ok(jobs)
    }
}

/// Check that a file starts with the order-log header
///
/// # Errors
///
/// * `CompressError::InvalidHeader` - The first line is something else
/// * `CompressError::FileNotFound` / `IoError` - The file cannot be read
pub fn validate_source(path: &Path) -> Result<(), CompressError> {
    let file = File::open(path).map_err(|e| CompressError::from_io(e, path))?;

    let mut first_line = String::new();
    BufReader::new(file)
        .read_line(&mut first_line)
        .map_err(|e| CompressError::from_io(e, path))?;

    if is_order_header(&first_line) {
        Ok(())
    } else {
        Err(CompressError::invalid_header(path, &first_line))
    }
}
