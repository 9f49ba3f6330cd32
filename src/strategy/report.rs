//! Per-run outcome report
//!
//! Every job of a run ends up here as either the summary of its emitted batch
//! or the error that stopped it. Workers of the async strategy record into the
//! same report concurrently, so outcomes are kept in a `DashMap` keyed by
//! input path.

use crate::core::BatchSummary;
use crate::types::CompressError;
use dashmap::DashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// How one source ended
#[derive(Debug, Clone, PartialEq)]
pub enum SourceOutcome {
    /// The summary file was written
    Compressed(BatchSummary),

    /// The batch failed and left no output
    Failed(CompressError),
}

impl From<Result<BatchSummary, CompressError>> for SourceOutcome {
    fn from(result: Result<BatchSummary, CompressError>) -> Self {
        match result {
            Ok(summary) => SourceOutcome::Compressed(summary),
            Err(e) => SourceOutcome::Failed(e),
        }
    }
}

/// Outcomes of all jobs in a run
///
/// Cloning is cheap and every clone records into the same map.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    outcomes: Arc<DashMap<PathBuf, SourceOutcome>>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one source, logging it
    pub fn record(&self, input: &Path, outcome: SourceOutcome) {
        match &outcome {
            SourceOutcome::Compressed(summary) => log::info!(
                "Compressed {}: {} customers from {} records{}",
                input.display(),
                summary.unique_customers,
                summary.ingest.records_folded,
                if summary.ingest.truncated {
                    " (truncated at malformed record)"
                } else {
                    ""
                }
            ),
            SourceOutcome::Failed(e) => {
                log::error!("Failed to compress {}: {}", input.display(), e)
            }
        }

        self.outcomes.insert(input.to_path_buf(), outcome);
    }

    /// Outcome recorded for one source
    pub fn get(&self, input: &Path) -> Option<SourceOutcome> {
        self.outcomes.get(input).map(|entry| entry.value().clone())
    }

    /// All outcomes sorted by input path
    pub fn outcomes(&self) -> Vec<(PathBuf, SourceOutcome)> {
        let mut outcomes: Vec<(PathBuf, SourceOutcome)> = self
            .outcomes
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        outcomes.sort_by(|a, b| a.0.cmp(&b.0));
        outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Number of sources whose summary was written
    pub fn succeeded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|entry| matches!(entry.value(), SourceOutcome::Compressed(_)))
            .count()
    }

    /// Number of sources that failed
    pub fn failed(&self) -> usize {
        self.len() - self.succeeded()
    }
}
