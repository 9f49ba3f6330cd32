//! Batch emitter
//!
//! Writes the compressed summary of one batch: a header line followed by one
//! `customer_id,compressed_int` line per customer, in store order.
//!
//! The emitter writes to and flushes the sink it is given but never owns it;
//! opening, closing and cleaning up the destination is the caller's job.

use crate::core::accumulator_store::AccumulatorStore;
use crate::core::encoder::encode;
use crate::io::csv_format::OUTPUT_HEADER;
use crate::types::CompressError;
use std::io::Write;

/// Write every aggregate in the store as an encoded summary line
///
/// The unique count is read once, before the first row, so every row of the
/// batch carries the same value.
///
/// # Arguments
///
/// * `store` - The fully populated accumulator for the batch
/// * `output` - Destination sink
///
/// # Returns
///
/// * `Ok(rows)` - Number of customer rows written (header excluded)
/// * `Err(CompressError)` - If writing to the sink failed
pub fn write_summaries_csv(
    store: &AccumulatorStore,
    output: &mut dyn Write,
) -> Result<u64, CompressError> {
    let unique_count = store.unique_count();
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(OUTPUT_HEADER)?;

    let mut rows = 0;
    for aggregate in store.all_aggregates() {
        writer.write_record(&[
            aggregate.customer_id.to_string(),
            encode(aggregate, unique_count).to_string(),
        ])?;
        rows += 1;
    }

    writer.flush()?;

    Ok(rows)
}
