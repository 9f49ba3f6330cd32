//! Order Compressor Library
//! # Overview
//!
//! This library scans a directory for customer order logs
//! (`customer_id,order_id,number_of_items`) and writes, for each log, a compact
//! per-customer summary file (`customer_id,compressed_int`).
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (OrderRecord, CustomerAggregate, errors, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`config`] - Run configuration
//! - [`core`] - The compression core:
//!   - [`core::accumulator_store`] - Per-customer aggregates for one batch
//!   - [`core::aggregator`] - Folds order records into the store
//!   - [`core::encoder`] - Packs a summary into one integer and back
//!   - [`core::emitter`] - Writes the summary lines of a batch
//! - [`io`] - Source discovery, CSV readers and format conventions
//! - [`strategy`] - Sequential and parallel compression runs
//!
//! # Encoded Summary
//!
//! Each output line carries one integer:
//!
//! - low 8 bits: the customer's average order size (`total_items / trips`),
//!   truncated to 8 bits, so averages above 255 wrap and cannot be recovered
//! - remaining bits: the number of distinct customers in the source file
//!
//! [`core::decode`] recovers both fields.

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use self::config::CompressConfig;
pub use self::core::{compress_records, decode, encode, AccumulatorStore, DecodedSummary};
pub use types::{
    CompressError, CompressionJob, CustomerAggregate, CustomerId, MalformedRecordPolicy,
    OrderRecord,
};
