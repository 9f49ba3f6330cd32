//! Per-customer aggregate state
//!
//! A `CustomerAggregate` holds the running statistics for one customer
//! within a single batch (one input source).

use super::order::{CustomerId, ItemCount};

/// Running purchase statistics for one customer in one batch
///
/// Invariants:
/// - `trip_count >= 1` for as long as the aggregate exists
/// - `total_items` only grows within a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerAggregate {
    /// The customer this aggregate belongs to
    pub customer_id: CustomerId,

    /// Number of orders seen for this customer
    pub trip_count: u64,

    /// Sum of `number_of_items` across all orders seen for this customer
    pub total_items: u64,
}

impl CustomerAggregate {
    /// Create the aggregate for a customer's first order
    ///
    /// # Arguments
    ///
    /// * `customer_id` - The customer ID
    /// * `num_items` - Items in the first order
    ///
    /// # Returns
    ///
    /// A new aggregate with `trip_count = 1` and `total_items = num_items`
    pub fn first_order(customer_id: CustomerId, num_items: ItemCount) -> Self {
        CustomerAggregate {
            customer_id,
            trip_count: 1,
            total_items: u64::from(num_items),
        }
    }

    /// Fold one more order into the aggregate
    pub fn record_order(&mut self, num_items: ItemCount) {
        self.trip_count = self.trip_count.saturating_add(1);
        self.total_items = self.total_items.saturating_add(u64::from(num_items));
    }

    /// Average items per order, truncated towards zero
    ///
    /// This is the full-width value; the encoder narrows it to 8 bits.
    pub fn average_order_size(&self) -> u64 {
        // trip_count starts at 1 and never decreases
        self.total_items / self.trip_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_first_order_starts_at_one_trip() {
        let aggregate = CustomerAggregate::first_order(7, 5);
        assert_eq!(aggregate.customer_id, 7);
        assert_eq!(aggregate.trip_count, 1);
        assert_eq!(aggregate.total_items, 5);
    }

    #[test]
    fn test_record_order_accumulates() {
        let mut aggregate = CustomerAggregate::first_order(1, 5);
        aggregate.record_order(7);

        assert_eq!(aggregate.trip_count, 2);
        assert_eq!(aggregate.total_items, 12);
    }

    #[test]
    fn test_zero_item_orders_still_count_as_trips() {
        let mut aggregate = CustomerAggregate::first_order(1, 0);
        aggregate.record_order(0);

        assert_eq!(aggregate.trip_count, 2);
        assert_eq!(aggregate.total_items, 0);
        assert_eq!(aggregate.average_order_size(), 0);
    }

    #[rstest]
    #[case::exact(&[4, 6], 5)]
    #[case::truncated(&[1, 2], 1)]
    #[case::single(&[300], 300)]
    #[case::large_items(&[u32::MAX, u32::MAX], u32::MAX as u64)]
    fn test_average_order_size(#[case] orders: &[ItemCount], #[case] expected: u64) {
        let mut aggregate = CustomerAggregate::first_order(1, orders[0]);
        for &items in &orders[1..] {
            aggregate.record_order(items);
        }
        assert_eq!(aggregate.average_order_size(), expected);
    }
}
