//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `order`: Raw order records and identifiers
//! - `aggregate`: Per-customer running statistics
//! - `policy`: Malformed-record handling policy
//! - `job`: Input/output path pairs handed to the strategies
//! - `error`: Error types for the compressor

pub mod aggregate;
pub mod error;
pub mod job;
pub mod order;
pub mod policy;

pub use aggregate::CustomerAggregate;
pub use error::CompressError;
pub use job::CompressionJob;
pub use order::{CustomerId, ItemCount, OrderId, OrderRecord};
pub use policy::MalformedRecordPolicy;
