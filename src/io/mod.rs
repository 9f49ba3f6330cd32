//! I/O module
//!
//! Handles everything around the core: finding sources, reading order logs
//! and the file-format conventions.
//!
//! # Components
//!
//! - `csv_format` - Header constants and summary file naming
//! - `discovery` - Pluggable discovery/validation of input sources
//! - `sync_reader` - Synchronous CSV reader with iterator interface
//! - `async_reader` - Asynchronous CSV reader with batch reading interface

pub mod async_reader;
pub mod csv_format;
pub mod discovery;
pub mod sync_reader;

pub use async_reader::AsyncReader;
pub use csv_format::{is_order_header, summary_path, DEFAULT_OUTPUT_PREFIX, INPUT_HEADER};
pub use discovery::{validate_source, DirectoryDiscovery, SourceDiscovery};
pub use sync_reader::SyncReader;
