//! Batch compression pipeline
//!
//! Runs one batch end to end: aggregation into a fresh `AccumulatorStore`,
//! then emission of the encoded summaries. Nothing is written to the sink
//! until every record has been ingested.
//!
//! ```text
//! records → AggregationDriver → AccumulatorStore → encoder → emitter → sink
//! ```

use crate::core::accumulator_store::AccumulatorStore;
use crate::core::aggregator::{AggregationDriver, IngestStats};
use crate::core::emitter::write_summaries_csv;
use crate::types::{CompressError, MalformedRecordPolicy, OrderRecord};
use std::io::Write;

/// Outcome of one successfully emitted batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// How the source was ingested
    pub ingest: IngestStats,

    /// Distinct customers in the batch
    pub unique_customers: u64,

    /// Customer rows written to the sink (header excluded)
    pub rows_written: u64,
}

/// Compress a sequence of order records into the given sink
///
/// # Arguments
///
/// * `records` - Parsed records (or per-record errors) in input order
/// * `output` - Destination for the summary CSV
/// * `policy` - What to do with malformed records
///
/// # Returns
///
/// * `Ok(BatchSummary)` - The batch was aggregated and emitted
/// * `Err(CompressError)` - The batch failed; nothing was written if the
///   failure happened during ingestion
pub fn compress_records<I>(
    records: I,
    output: &mut dyn Write,
    policy: MalformedRecordPolicy,
) -> Result<BatchSummary, CompressError>
where
    I: IntoIterator<Item = Result<OrderRecord, CompressError>>,
{
    let mut store = AccumulatorStore::new();
    let ingest = AggregationDriver::new(policy).run(&mut store, records)?;
    emit_batch(&store, ingest, output)
}

/// Emit an already populated store and build the batch summary
pub fn emit_batch(
    store: &AccumulatorStore,
    ingest: IngestStats,
    output: &mut dyn Write,
) -> Result<BatchSummary, CompressError> {
    let rows_written = write_summaries_csv(store, output)?;

    Ok(BatchSummary {
        ingest,
        unique_customers: store.unique_count(),
        rows_written,
    })
}
