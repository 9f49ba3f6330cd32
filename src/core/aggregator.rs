//! Aggregation driver
//!
//! Converts a sequence of raw order records into `AccumulatorStore` mutations
//! and applies the configured `MalformedRecordPolicy` to records that could not
//! be parsed.
//!
//! The driver can be used in two ways:
//! - `run` consumes a whole iterator (sync reader)
//! - `feed` processes one item at a time (async reader, batch by batch)

use crate::core::accumulator_store::AccumulatorStore;
use crate::types::{CompressError, MalformedRecordPolicy, OrderRecord};

/// Whether ingestion should keep reading the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Halt,
}

/// Counters describing how one source was ingested
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Records folded into the store
    pub records_folded: u64,

    /// Malformed records skipped under `MalformedRecordPolicy::Skip`
    pub records_skipped: u64,

    /// Set when ingestion stopped early under `MalformedRecordPolicy::Truncate`.
    /// Holds the line of the malformed record when the reader knew it.
    pub halted_at_line: Option<u64>,

    /// True when ingestion stopped before the end of the input
    pub truncated: bool,
}

/// Folds order records into an `AccumulatorStore`
#[derive(Debug)]
pub struct AggregationDriver {
    policy: MalformedRecordPolicy,
    stats: IngestStats,
}

impl AggregationDriver {
    /// Create a driver applying the given malformed-record policy
    pub fn new(policy: MalformedRecordPolicy) -> Self {
        AggregationDriver {
            policy,
            stats: IngestStats::default(),
        }
    }

    /// Process one item read from the source
    ///
    /// # Arguments
    ///
    /// * `store` - The batch's accumulator
    /// * `item` - A parsed record, or the error the reader produced for it
    ///
    /// # Returns
    ///
    /// * `Ok(Flow::Continue)` - Keep reading
    /// * `Ok(Flow::Halt)` - Stop reading this source and proceed to emission
    /// * `Err(CompressError)` - The batch failed
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The reader failed below the record level (I/O, CSV structure)
    /// - The record is malformed and the policy is `Fail`
    pub fn feed(
        &mut self,
        store: &mut AccumulatorStore,
        item: Result<OrderRecord, CompressError>,
    ) -> Result<Flow, CompressError> {
        match item {
            Ok(record) => {
                store.upsert(record.customer_id, record.num_items);
                self.stats.records_folded += 1;
                Ok(Flow::Continue)
            }
            Err(e) if e.is_malformed_record() => match self.policy {
                MalformedRecordPolicy::Truncate => {
                    log::warn!("{}; ignoring the rest of the source", e);
                    self.stats.halted_at_line = e.line();
                    self.stats.truncated = true;
                    Ok(Flow::Halt)
                }
                MalformedRecordPolicy::Skip => {
                    log::warn!("{}; skipping record", e);
                    self.stats.records_skipped += 1;
                    Ok(Flow::Continue)
                }
                MalformedRecordPolicy::Fail => Err(e),
            },
            Err(e) => Err(e),
        }
    }

    /// Consume all records from an iterator
    ///
    /// Records are processed strictly in input order. Consumption stops early
    /// when `feed` returns `Flow::Halt`; nothing after that point is read.
    ///
    /// # Returns
    ///
    /// The ingest counters for the source
    pub fn run<I>(
        mut self,
        store: &mut AccumulatorStore,
        records: I,
    ) -> Result<IngestStats, CompressError>
    where
        I: IntoIterator<Item = Result<OrderRecord, CompressError>>,
    {
        for item in records {
            if self.feed(store, item)? == Flow::Halt {
                break;
            }
        }
        Ok(self.finish())
    }

    /// Finish ingestion and return the counters
    pub fn finish(self) -> IngestStats {
        log::debug!(
            "ingested {} records ({} skipped)",
            self.stats.records_folded,
            self.stats.records_skipped
        );
        self.stats
    }
}
