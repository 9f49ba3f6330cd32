//! Synchronous processing strategy
//!
//! This module provides a single-threaded implementation of the
//! ProcessingStrategy trait. Sources are compressed one after another, each
//! with its own fresh `AccumulatorStore`.
//!
//! # Design
//!
//! The SyncProcessingStrategy focuses on orchestration, delegating:
//! - CSV parsing to `SyncReader` (iterator interface)
//! - Aggregation to `AggregationDriver` and `AccumulatorStore`
//! - Encoding and output to `emit_batch`
//!
//! The output file is only created once ingestion has finished, so a batch
//! that fails while reading leaves nothing behind.

use crate::config::CompressConfig;
use crate::core::{emit_batch, AccumulatorStore, AggregationDriver, BatchSummary};
use crate::io::sync_reader::SyncReader;
use crate::strategy::{ProcessingStrategy, RunReport};
use crate::types::{CompressError, CompressionJob};
use std::fs::{self, File};
use std::io::{BufWriter, Write};

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use order_compressor::config::CompressConfig;
/// use order_compressor::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use order_compressor::types::CompressionJob;
///
/// let strategy = SyncProcessingStrategy::new(CompressConfig::default());
/// let job = CompressionJob::new("orders.csv", "compressed_orders.csv");
///
/// let report = strategy.process(vec![job]).expect("Processing failed");
/// println!("{} sources compressed", report.succeeded());
/// ```
#[derive(Debug, Clone)]
pub struct SyncProcessingStrategy {
    config: CompressConfig,
}

impl SyncProcessingStrategy {
    pub fn new(config: CompressConfig) -> Self {
        Self { config }
    }
}

impl ProcessingStrategy for SyncProcessingStrategy {
    /// Compress every job in order
    ///
    /// A failing job is recorded in the report and the next job proceeds.
    /// This strategy never returns `Err`.
    fn process(&self, jobs: Vec<CompressionJob>) -> Result<RunReport, CompressError> {
        let report = RunReport::new();

        for job in jobs {
            let outcome = compress_file(&job, &self.config);
            report.record(&job.input, outcome.into());
        }

        Ok(report)
    }
}

/// Compress one source file into its summary file
///
/// # Errors
///
/// Returns an error if:
/// - The input cannot be opened or read
/// - A record is malformed and the policy is `Fail`
/// - The output cannot be created or written (any partial file is removed)
pub fn compress_file(
    job: &CompressionJob,
    config: &CompressConfig,
) -> Result<BatchSummary, CompressError> {
    let reader = SyncReader::new(&job.input)?;

    let mut store = AccumulatorStore::new();
    let ingest = AggregationDriver::new(config.malformed_policy).run(&mut store, reader)?;
    log::debug!(
        "{}: {} distinct customers",
        job.input.display(),
        store.unique_count()
    );

    let file = File::create(&job.output).map_err(|e| CompressError::from_io(e, &job.output))?;
    let mut output = BufWriter::new(file);

    let result = emit_batch(&store, ingest, &mut output)
        .and_then(|summary| output.flush().map(|_| summary).map_err(CompressError::from));

    if result.is_err() {
        drop(output);
        if let Err(e) = fs::remove_file(&job.output) {
            log::warn!("Could not remove partial output {}: {}", job.output.display(), e);
        }
    }

    result
}
