//! Accumulator store
//!
//! This module provides the `AccumulatorStore`, the keyed table that maps each
//! customer ID to its running aggregate for one batch.
//!
//! The store is responsible for:
//! - Creating an aggregate on a customer's first order
//! - Folding later orders into the existing aggregate
//! - Counting distinct customers
//! - Enumerating aggregates in first-sighting order for emission
//!
//! A store lives for exactly one batch. Aggregates are never removed; the
//! whole store is dropped once the batch's output has been written.

use crate::types::{CustomerAggregate, CustomerId, ItemCount};
use std::collections::HashMap;

/// Keyed accumulator of per-customer aggregates for one batch
///
/// Aggregates are kept in a `Vec` in insertion order, with a `HashMap` index
/// from customer ID to position. This gives O(1) upserts and a stable,
/// deterministic enumeration order.
#[derive(Debug, Default)]
pub struct AccumulatorStore {
    /// Aggregates in first-sighting order
    aggregates: Vec<CustomerAggregate>,

    /// Map of customer IDs to their position in `aggregates`
    index: HashMap<CustomerId, usize>,
}

impl AccumulatorStore {
    /// Create a new, empty store
    pub fn new() -> Self {
        AccumulatorStore {
            aggregates: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Fold one order into the store
    ///
    /// If the customer has no aggregate yet, one is created with
    /// `trip_count = 1` and `total_items = num_items`, and the unique count
    /// grows by one. Otherwise the existing aggregate's trip count is
    /// incremented and `num_items` is added to its total.
    ///
    /// # Arguments
    ///
    /// * `customer_id` - The customer who placed the order
    /// * `num_items` - Number of items in the order
    pub fn upsert(&mut self, customer_id: CustomerId, num_items: ItemCount) {
        match self.index.get(&customer_id) {
            Some(&position) => self.aggregates[position].record_order(num_items),
            None => {
                log::debug!(
                    "New customer {} (unique customers: {})",
                    customer_id,
                    self.aggregates.len() + 1
                );
                self.index.insert(customer_id, self.aggregates.len());
                self.aggregates
                    .push(CustomerAggregate::first_order(customer_id, num_items));
            }
        }
    }

    /// Iterate over all aggregates in first-sighting order
    pub fn all_aggregates(&self) -> impl Iterator<Item = &CustomerAggregate> + '_ {
        self.aggregates.iter()
    }

    /// Number of distinct customer IDs inserted so far
    ///
    /// Never decreases across `upsert` calls.
    pub fn unique_count(&self) -> u64 {
        self.aggregates.len() as u64
    }

    /// Look up the aggregate for one customer
    pub fn get(&self, customer_id: CustomerId) -> Option<&CustomerAggregate> {
        self.index
            .get(&customer_id)
            .map(|&position| &self.aggregates[position])
    }

    pub fn len(&self) -> usize {
        self.aggregates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aggregates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_new_store_is_empty() {
        let store = AccumulatorStore::new();
        assert!(store.is_empty());
        assert_eq!(store.unique_count(), 0);
        assert_eq!(store.all_aggregates().count(), 0);
    }

    #[test]
    fn test_upsert_creates_aggregate() {
        let mut store = AccumulatorStore::new();
        store.upsert(1, 5);

        let aggregate = store.get(1).unwrap();
        assert_eq!(aggregate.trip_count, 1);
        assert_eq!(aggregate.total_items, 5);
        assert_eq!(store.unique_count(), 1);
    }

    #[test]
    fn test_upsert_folds_into_existing_aggregate() {
        let mut store = AccumulatorStore::new();
        store.upsert(1, 5);
        store.upsert(2, 3);
        store.upsert(1, 7);

        let first = store.get(1).unwrap();
        assert_eq!(first.trip_count, 2);
        assert_eq!(first.total_items, 12);

        let second = store.get(2).unwrap();
        assert_eq!(second.trip_count, 1);
        assert_eq!(second.total_items, 3);

        assert_eq!(store.unique_count(), 2);
    }

    #[test]
    fn test_get_unknown_customer() {
        let mut store = AccumulatorStore::new();
        store.upsert(1, 5);
        assert!(store.get(2).is_none());
    }

    #[test]
    fn test_all_aggregates_in_first_sighting_order() {
        let mut store = AccumulatorStore::new();
        for customer_id in [30, 10, 20, 10, 30] {
            store.upsert(customer_id, 1);
        }

        let order: Vec<CustomerId> = store.all_aggregates().map(|a| a.customer_id).collect();
        assert_eq!(order, vec![30, 10, 20]);
    }

    #[test]
    fn test_unique_count_is_monotonic() {
        let mut store = AccumulatorStore::new();
        let mut previous = store.unique_count();

        for customer_id in [1, 2, 1, 3, 2, 2, 4] {
            store.upsert(customer_id, 1);
            assert!(store.unique_count() >= previous);
            previous = store.unique_count();
        }

        assert_eq!(store.unique_count(), 4);
    }

    // Final aggregates must not depend on record order
    #[rstest]
    #[case::forward(&[(1, 5), (2, 3), (1, 7), (3, 0), (2, 9)])]
    #[case::reversed(&[(2, 9), (3, 0), (1, 7), (2, 3), (1, 5)])]
    #[case::interleaved(&[(1, 7), (2, 3), (3, 0), (1, 5), (2, 9)])]
    fn test_aggregates_are_order_independent(#[case] orders: &[(CustomerId, ItemCount)]) {
        let mut store = AccumulatorStore::new();
        for &(customer_id, num_items) in orders {
            store.upsert(customer_id, num_items);
        }

        assert_eq!(store.unique_count(), 3);
        assert_eq!(store.get(1).map(|a| (a.trip_count, a.total_items)), Some((2, 12)));
        assert_eq!(store.get(2).map(|a| (a.trip_count, a.total_items)), Some((2, 12)));
        assert_eq!(store.get(3).map(|a| (a.trip_count, a.total_items)), Some((1, 0)));
    }

    #[test]
    fn test_totals_match_sum_of_records() {
        let orders: Vec<(CustomerId, ItemCount)> =
            (0..500u32).map(|i| (i % 17, (i * 31) % 101)).collect();

        let mut store = AccumulatorStore::new();
        for &(customer_id, num_items) in &orders {
            store.upsert(customer_id, num_items);
        }

        for aggregate in store.all_aggregates() {
            let matching = orders
                .iter()
                .filter(|(customer_id, _)| *customer_id == aggregate.customer_id);
            let trips = matching.clone().count() as u64;
            let items: u64 = matching.map(|&(_, n)| u64::from(n)).sum();

            assert_eq!(aggregate.trip_count, trips);
            assert_eq!(aggregate.total_items, items);
        }
        assert_eq!(store.unique_count(), 17);
    }
}
