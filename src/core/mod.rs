//! Core aggregation module
//!
//! This module contains the components of the compression core:
//! - `accumulator_store` - Per-customer aggregates for one batch
//! - `aggregator` - Folds order records into the store, applies the malformed-record policy
//! - `encoder` - Packs average order size and unique count into one integer
//! - `emitter` - Writes the encoded summary lines for a batch
//! - `compressor` - Runs one batch from records to sink

pub mod accumulator_store;
pub mod aggregator;
pub mod compressor;
pub mod emitter;
pub mod encoder;

pub use accumulator_store::AccumulatorStore;
pub use aggregator::{AggregationDriver, Flow, IngestStats};
pub use compressor::{compress_records, emit_batch, BatchSummary};
pub use emitter::write_summaries_csv;
pub use encoder::{decode, encode, DecodedSummary};
