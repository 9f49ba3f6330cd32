//! Summary encoder and decoder
//!
//! Packs a customer's average order size and the batch's unique-customer count
//! into one integer:
//!
//! ```text
//!  63                                   8 7        0
//! +--------------------------------------+----------+
//! |            unique_count              | avg_order|
//! +--------------------------------------+----------+
//! ```
//!
//! The format is lossy. The average order size keeps only its low 8 bits, so
//! any true average above 255 wraps silently (300 is stored as 44) and cannot
//! be recovered. The unique count keeps its low 56 bits.

use crate::types::CustomerAggregate;

/// Width of the average-order-size field in bits
pub const AVG_ORDER_BITS: u32 = 8;

/// Mask selecting the average-order-size field
pub const AVG_ORDER_MASK: u64 = 0xFF;

/// Largest unique count that survives a round trip
pub const MAX_UNIQUE_COUNT: u64 = u64::MAX >> AVG_ORDER_BITS;

/// The two fields recovered from an encoded summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedSummary {
    /// Average order size, modulo 256
    pub avg_order_size: u8,

    /// Number of distinct customers in the batch the summary came from
    pub unique_count: u64,
}

/// Encode one customer's aggregate together with the batch's unique count
///
/// `unique_count` must be the batch's final value, computed after every
/// record has been ingested.
pub fn encode(aggregate: &CustomerAggregate, unique_count: u64) -> u64 {
    // Truncation to 8 bits is part of the format
    let avg_order = aggregate.average_order_size() as u8;
    (unique_count << AVG_ORDER_BITS) | u64::from(avg_order)
}

/// Recover the average order size and unique count from an encoded summary
///
/// Exact inverse of [`encode`] for values it produced.
pub fn decode(encoded: u64) -> DecodedSummary {
    DecodedSummary {
        avg_order_size: (encoded & AVG_ORDER_MASK) as u8,
        unique_count: encoded >> AVG_ORDER_BITS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn aggregate(trip_count: u64, total_items: u64) -> CustomerAggregate {
        CustomerAggregate {
            customer_id: 1,
            trip_count,
            total_items,
        }
    }

    #[rstest]
    #[case::frequent_customer(aggregate(2, 12), 2, 518)]
    #[case::single_order(aggregate(1, 3), 2, 515)]
    #[case::average_truncated(aggregate(2, 7), 1, 259)]
    #[case::zero_items(aggregate(4, 0), 3, 768)]
    #[case::max_average(aggregate(1, 255), 1, 511)]
    #[case::wraps_at_256(aggregate(1, 256), 1, 256)]
    #[case::wraps_300(aggregate(1, 300), 1, 300)]
    fn test_encode(
        #[case] aggregate: CustomerAggregate,
        #[case] unique: u64,
        #[case] expected: u64,
    ) {
        assert_eq!(encode(&aggregate, unique), expected);
    }

    #[test]
    fn test_average_above_255_wraps() {
        let decoded = decode(encode(&aggregate(1, 300), 5));
        assert_eq!(decoded.avg_order_size, 44);
        assert_eq!(decoded.unique_count, 5);
    }

    #[rstest]
    #[case(518, 6, 2)]
    #[case(515, 3, 2)]
    #[case(0, 0, 0)]
    #[case(255, 255, 0)]
    #[case(u64::MAX, 255, MAX_UNIQUE_COUNT)]
    fn test_decode(#[case] encoded: u64, #[case] avg: u8, #[case] unique: u64) {
        assert_eq!(
            decode(encoded),
            DecodedSummary {
                avg_order_size: avg,
                unique_count: unique,
            }
        );
    }

    #[rstest]
    #[case(aggregate(3, 10), 0)]
    #[case(aggregate(7, 7_000), 42)]
    #[case(aggregate(1, u64::from(u32::MAX)), 1_000_000)]
    #[case(aggregate(2, 1), MAX_UNIQUE_COUNT)]
    fn test_decode_inverts_encode(#[case] aggregate: CustomerAggregate, #[case] unique: u64) {
        let decoded = decode(encode(&aggregate, unique));

        assert_eq!(
            u64::from(decoded.avg_order_size),
            (aggregate.total_items / aggregate.trip_count) % 256
        );
        assert_eq!(decoded.unique_count, unique);
    }
}
