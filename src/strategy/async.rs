//! Asynchronous parallel processing strategy
//!
//! This module provides a multi-threaded implementation of the
//! ProcessingStrategy trait. Sources are independent batches, so each one is
//! compressed by its own tokio task with its own `AccumulatorStore`; no store
//! is ever shared between tasks.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── WorkerConfig (batch_size, max_concurrent_sources)
//!     ├── tokio multi-threaded runtime
//!     └── per source task
//!         ├── AsyncReader (csv-async over tokio::fs::File)
//!         ├── AggregationDriver + AccumulatorStore
//!         └── emit_batch → tokio::fs::write
//! ```
//!
//! At most `max_concurrent_sources` tasks are in flight at once. Every task
//! records its outcome into the shared `RunReport`.

use crate::config::CompressConfig;
use crate::core::{emit_batch, AccumulatorStore, AggregationDriver, BatchSummary, Flow};
use crate::io::async_reader::AsyncReader;
use crate::strategy::{ProcessingStrategy, RunReport};
use crate::types::{CompressError, CompressionJob, MalformedRecordPolicy};
use futures::stream::{self, StreamExt};
use std::path::Path;
use tokio_util::compat::TokioAsyncReadCompatExt;

/// Configuration for the async workers
///
/// Both values are always non-zero; build it with `new` or `default`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkerConfig {
    batch_size: usize,
    max_concurrent_sources: usize,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            max_concurrent_sources: num_cpus::get(),
        }
    }
}

impl WorkerConfig {
    /// Create a new WorkerConfig; zero values fall back to the defaults
    pub fn new(batch_size: usize, max_concurrent_sources: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            log::warn!(
                "Invalid batch_size ({}), using default ({})",
                batch_size,
                default.batch_size
            );
            default.batch_size
        } else {
            batch_size
        };

        let max_concurrent_sources = if max_concurrent_sources == 0 {
            log::warn!(
                "Invalid max_concurrent_sources ({}), using default ({})",
                max_concurrent_sources,
                default.max_concurrent_sources
            );
            default.max_concurrent_sources
        } else {
            max_concurrent_sources
        };

        Self {
            batch_size,
            max_concurrent_sources,
        }
    }

    /// Number of records read per batch
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Maximum number of sources compressed concurrently
    pub fn max_concurrent_sources(&self) -> usize {
        self.max_concurrent_sources
    }
}

/// Asynchronous parallel processing strategy
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    config: CompressConfig,
    workers: WorkerConfig,
}

impl AsyncProcessingStrategy {
    pub fn new(config: CompressConfig, workers: WorkerConfig) -> Self {
        Self { config, workers }
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    /// Compress all jobs with bounded parallelism
    ///
    /// # Errors
    ///
    /// Only fails if the tokio runtime cannot be created. Per-source failures,
    /// including panicking workers, are recorded in the report.
    fn process(&self, jobs: Vec<CompressionJob>) -> Result<RunReport, CompressError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.workers.max_concurrent_sources)
            .build()
            .map_err(|e| {
                CompressError::runtime(&format!("Failed to create tokio runtime: {}", e))
            })?;

        let report = RunReport::new();
        let policy = self.config.malformed_policy;
        let batch_size = self.workers.batch_size;

        runtime.block_on(async {
            let workers = jobs.into_iter().map(|job| {
                let report = report.clone();
                async move {
                    let input = job.input.clone();
                    let handle = tokio::spawn(async move {
                        compress_file_async(&job, policy, batch_size).await
                    });

                    let outcome = match handle.await {
                        Ok(result) => result,
                        Err(e) => Err(CompressError::runtime(&format!(
                            "worker for {} did not finish: {}",
                            input.display(),
                            e
                        ))),
                    };
                    report.record(&input, outcome.into());
                }
            });

            stream::iter(workers)
                .buffer_unordered(self.workers.max_concurrent_sources)
                .collect::<Vec<()>>()
                .await;
        });

        Ok(report)
    }
}

/// Compress one source file on the tokio runtime
///
/// Same semantics as the sync `compress_file`: the whole source is ingested
/// before anything is written, and a failed write removes the partial file.
pub async fn compress_file_async(
    job: &CompressionJob,
    policy: MalformedRecordPolicy,
    batch_size: usize,
) -> Result<BatchSummary, CompressError> {
    let file = tokio::fs::File::open(&job.input)
        .await
        .map_err(|e| CompressError::from_io(e, &job.input))?;
    let mut reader = AsyncReader::new(file.compat());

    let mut store = AccumulatorStore::new();
    let mut driver = AggregationDriver::new(policy);

    'read: loop {
        let batch = reader.read_batch(batch_size).await;
        if batch.is_empty() {
            break;
        }

        for item in batch {
            if driver.feed(&mut store, item)? == Flow::Halt {
                break 'read;
            }
        }
    }

    let mut buffer = Vec::new();
    let summary = emit_batch(&store, driver.finish(), &mut buffer)?;

    if let Err(e) = tokio::fs::write(&job.output, buffer).await {
        remove_partial_output(&job.output).await;
        return Err(CompressError::from_io(e, &job.output));
    }

    Ok(summary)
}

async fn remove_partial_output(output: &Path) {
    match tokio::fs::remove_file(output).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => log::warn!("Could not remove partial output {}: {}", output.display(), e),
    }
}
