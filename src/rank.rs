//! Node degree type and the degree bound used by consolidation.
//!
//! # Why u8?
//!
//! A node of degree `k` in a Fibonacci heap roots a subtree of at least
//! `F(k + 2)` nodes, where `F` is the Fibonacci sequence. `F(95)` already
//! exceeds `u64::MAX`, so no heap that fits in memory can hold a node whose
//! degree does not fit in a `u8`. Using `u8` keeps the per-node bookkeeping
//! (degree and mark) within two bytes.
//!
//! # Consolidation table size
//!
//! [`max_degree`] walks the Fibonacci sequence to find the largest degree a
//! heap of `n` nodes can contain. It is the tight `floor(log_φ n)` bound, computed
//! with integer arithmetic only.

/// Type alias for node degree (number of direct children).
pub type Rank = u8;

/// Maximum representable degree.
pub const MAX_RANK: Rank = u8::MAX;

/// Increment a degree, panicking on overflow.
///
/// # Panics
///
/// Panics if `rank == MAX_RANK`. Reaching it would require a heap with more
/// nodes than `u64` can count, so a panic here means the links are corrupt.
///
/// # Example
///
/// ```rust
/// use fibheap::rank::{checked_increment, Rank};
///
/// let rank: Rank = 5;
/// assert_eq!(checked_increment(rank), 6);
/// ```
#[inline]
pub fn checked_increment(rank: Rank) -> Rank {
    rank.checked_add(1).expect(
        "degree overflow: a node of degree 255 needs more than 2^64 descendants",
    )
}

/// Decrement a degree, saturating at zero.
///
/// # Example
///
/// ```rust
/// use fibheap::rank::{saturating_decrement, Rank};
///
/// let rank: Rank = 1;
/// assert_eq!(saturating_decrement(rank), 0);
/// assert_eq!(saturating_decrement(0), 0);
/// ```
#[inline]
pub fn saturating_decrement(rank: Rank) -> Rank {
    rank.saturating_sub(1)
}

/// Largest degree any node can have in a heap of `n` nodes.
///
/// Returns the largest `k` with `F(k + 2) <= n`, or 0 for an empty heap.
///
/// # Example
///
/// ```rust
/// use fibheap::rank::max_degree;
///
/// assert_eq!(max_degree(1), 0);
/// assert_eq!(max_degree(2), 1);
/// assert_eq!(max_degree(8), 4);
/// ```
pub fn max_degree(n: usize) -> usize {
    let n = n as u128;
    // (F(k + 2), F(k + 3)) starting at k = 0
    let (mut lo, mut hi): (u128, u128) = (1, 2);
    let mut k = 0;
    if n < lo {
        return 0;
    }
    while hi <= n {
        let next = lo + hi;
        lo = hi;
        hi = next;
        k += 1;
    }
    k
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_increment() {
        assert_eq!(checked_increment(0), 1);
        assert_eq!(checked_increment(254), 255);
    }

    #[test]
    #[should_panic(expected = "degree overflow")]
    fn test_checked_increment_overflow() {
        checked_increment(MAX_RANK);
    }

    #[test]
    fn test_saturating_decrement() {
        assert_eq!(saturating_decrement(5), 4);
        assert_eq!(saturating_decrement(0), 0);
    }

    #[test]
    fn test_max_degree_small() {
        // F(2..) = 1, 2, 3, 5, 8, 13, 21
        assert_eq!(max_degree(0), 0);
        assert_eq!(max_degree(1), 0);
        assert_eq!(max_degree(2), 1);
        assert_eq!(max_degree(3), 2);
        assert_eq!(max_degree(4), 2);
        assert_eq!(max_degree(5), 3);
        assert_eq!(max_degree(7), 3);
        assert_eq!(max_degree(8), 4);
        assert_eq!(max_degree(13), 5);
        assert_eq!(max_degree(20), 5);
        assert_eq!(max_degree(21), 6);
    }

    #[test]
    fn test_max_degree_fits_rank() {
        assert!(max_degree(usize::MAX) < usize::from(MAX_RANK));
        assert_eq!(std::mem::size_of::<Rank>(), 1);
    }

    #[test]
    fn test_max_degree_at_least_binomial_bound() {
        // A binomial tree of 2^k nodes has a root of degree k.
        for k in 0..20 {
            assert!(max_degree(1usize << k) >= k);
        }
    }
}
