//! Two-component path-cost key
//!
//! Incremental planners in the D* family order their open list by a pair of
//! costs, compared lexicographically: the primary estimate first, the
//! secondary breaks ties. [`CostKey`] is that pair over `f64`, with a total
//! order built from [`f64::total_cmp`] so it can be used with
//! [`NaturalOrder`](crate::order::NaturalOrder) directly.

use std::cmp::Ordering;

use crate::order::MinSentinel;

/// Lexicographically ordered pair of path costs.
///
/// # Example
///
/// ```rust
/// use fibheap::{CostKey, FibHeap};
///
/// let mut open: FibHeap<CostKey, &str> = FibHeap::new();
/// open.insert(CostKey::new(4.0, 1.0), "far");
/// open.insert(CostKey::new(2.0, 9.0), "near");
/// open.insert(CostKey::new(2.0, 3.0), "nearest");
/// assert_eq!(open.extract_min(), Some("nearest"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CostKey {
    pub primary: f64,
    pub secondary: f64,
}

impl CostKey {
    /// Sentinel sorting before every key a planner produces.
    pub const MIN_SENTINEL: CostKey = CostKey {
        primary: -1e32,
        secondary: -1e32,
    };

    pub const fn new(primary: f64, secondary: f64) -> Self {
        Self { primary, secondary }
    }
}

impl From<[f64; 2]> for CostKey {
    fn from([primary, secondary]: [f64; 2]) -> Self {
        Self::new(primary, secondary)
    }
}

impl From<(f64, f64)> for CostKey {
    fn from((primary, secondary): (f64, f64)) -> Self {
        Self::new(primary, secondary)
    }
}

impl PartialEq for CostKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CostKey {}

impl PartialOrd for CostKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CostKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.primary
            .total_cmp(&other.primary)
            .then_with(|| self.secondary.total_cmp(&other.secondary))
    }
}

impl MinSentinel for CostKey {
    fn min_sentinel() -> Self {
        Self::MIN_SENTINEL
    }
}
