//! Order-related types for the order compressor
//!
//! This module defines the identifiers and the raw order record read from
//! transaction-log files.

use serde::Deserialize;

/// Customer identifier
///
/// Supports customer IDs from 0 to 4,294,967,295
pub type CustomerId = u32;

/// Order identifier
///
/// Read from the input but never used for aggregation.
pub type OrderId = u32;

/// Number of items purchased in a single order
pub type ItemCount = u32;

/// Input order record from CSV
///
/// Deserialized by position, in column order:
/// `customer_id, order_id, number_of_items`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct OrderRecord {
    /// The customer who placed the order
    pub customer_id: CustomerId,

    /// The order identifier (carried through, ignored by aggregation)
    pub order_id: OrderId,

    /// Number of items in this order
    #[serde(rename = "number_of_items")]
    pub num_items: ItemCount,
}

impl OrderRecord {
    pub fn new(customer_id: CustomerId, order_id: OrderId, num_items: ItemCount) -> Self {
        OrderRecord {
            customer_id,
            order_id,
            num_items,
        }
    }
}
