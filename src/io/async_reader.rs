//! Asynchronous CSV reader with batch interface
//!
//! Provides batched reading of order records for the async strategy.
//!
//! # Design
//!
//! The AsyncReader uses:
//! - csv-async for streaming CSV parsing
//! - any `futures::io::AsyncRead` source (a `tokio::fs::File` wrapped with
//!   tokio-util's compat layer in production)
//! - Batch reading so a worker yields between chunks of a large file
//!
//! Rows are deserialized by position like the sync reader, never through
//! the header names. Parse failures are returned in the batch, in position,
//! so the aggregation driver applies the same malformed-record policy as the
//! sync path.

use crate::io::csv_format::check_field_count;
use crate::types::{CompressError, OrderRecord};
use csv_async::{AsyncReaderBuilder, StringRecord};
use futures::io::AsyncRead;

/// Asynchronous CSV reader
///
/// Reads order records batch by batch with constant memory per batch.
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncReader<R>,
    record: StringRecord,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    /// Create a new AsyncReader from an async reader
    ///
    /// Configured like the sync reader: header row skipped, trimmed fields,
    /// field count checked per row.
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_reader(reader);

        Self {
            csv_reader,
            record: StringRecord::new(),
        }
    }

    /// Read a batch of order records
    ///
    /// Reads up to `batch_size` rows. Each row yields either the parsed record
    /// or the error describing why it could not be parsed.
    ///
    /// # Returns
    ///
    /// A vector of per-row results in input order.
    /// Returns an empty vector when the end of the file is reached.
    pub async fn read_batch(
        &mut self,
        batch_size: usize,
    ) -> Vec<Result<OrderRecord, CompressError>> {
        let mut batch = Vec::with_capacity(batch_size);

        while batch.len() < batch_size {
            match self.csv_reader.read_record(&mut self.record).await {
                Ok(true) => batch.push(parse_record(&self.record)),
                Ok(false) => break,
                Err(e) => batch.push(Err(e.into())),
            }
        }

        batch
    }
}

fn parse_record(record: &StringRecord) -> Result<OrderRecord, CompressError> {
    let line = record.position().map(|pos| pos.line());
    check_field_count(record.len(), line)?;
    Ok(record.deserialize::<OrderRecord>(None)?)
}
