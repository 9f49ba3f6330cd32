//! Processing strategy module
//!
//! This module defines the Strategy pattern for whole compression runs. A run
//! takes the validated jobs produced by a `SourceDiscovery` and compresses
//! each source into its summary file. Implementations differ only in how the
//! independent batches are scheduled (one after another, or in parallel).

use crate::cli::StrategyType;
use crate::config::CompressConfig;
use crate::io::discovery::SourceDiscovery;
use crate::types::{CompressError, CompressionJob};

pub mod r#async;
pub mod report;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, WorkerConfig};
pub use report::{RunReport, SourceOutcome};
pub use sync::SyncProcessingStrategy;

/// Processing strategy trait for compression runs
pub trait ProcessingStrategy: Send + Sync {
    /// Compress every job and report how each one ended
    ///
    /// Each job is a separate batch with its own accumulator. A failing job
    /// never stops the others; its error is recorded in the returned report.
    ///
    /// # Errors
    ///
    /// Returns an error only when the strategy cannot run at all (e.g. the
    /// async runtime cannot be created).
    fn process(&self, jobs: Vec<CompressionJob>) -> Result<RunReport, CompressError>;
}

/// Create a processing strategy based on the specified strategy type
///
/// # Arguments
///
/// * `strategy_type` - Sequential (`Sync`) or parallel (`Async`)
/// * `workers` - Worker settings for the async strategy (ignored for sync)
/// * `config` - Settings shared by all strategies
pub fn create_strategy(
    strategy_type: StrategyType,
    workers: Option<WorkerConfig>,
    config: CompressConfig,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy::new(config)),
        StrategyType::Async => {
            let workers = workers.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config, workers))
        }
    }
}

/// Discover sources and compress them with the given strategy
pub fn compress_discovered(
    discovery: &dyn SourceDiscovery,
    strategy: &dyn ProcessingStrategy,
) -> Result<RunReport, CompressError> {
    let jobs = discovery.discover()?;
    if jobs.is_empty() {
        log::info!("No eligible order logs found");
    }
    strategy.process(jobs)
}
