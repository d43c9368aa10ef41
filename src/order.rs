//! Key ordering strategies
//!
//! A heap never compares keys with `Ord` directly. It holds a [`KeyOrder`]
//! value supplied at construction and asks it for a total order. This lets
//! several heaps with different key types or orderings coexist, and lets keys
//! such as floating-point costs be ordered without a newtype.
//!
//! The ordering must be a total order and must stay consistent for the whole
//! lifetime of the heap that holds it.

use std::cmp::Ordering;

/// A total order over keys of type `K`.
///
/// # Example
///
/// ```rust
/// use fibheap::order::{FnOrder, KeyOrder};
/// use std::cmp::Ordering;
///
/// let by_len = FnOrder(|a: &&str, b: &&str| a.len().cmp(&b.len()));
/// assert_eq!(by_len.compare(&"ab", &"abc"), Ordering::Less);
/// ```
pub trait KeyOrder<K: ?Sized> {
    /// Compare two keys.
    fn compare(&self, a: &K, b: &K) -> Ordering;

    /// `a` sorts strictly before `b`.
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// `a` sorts before or together with `b`.
    #[inline]
    fn less_eq(&self, a: &K, b: &K) -> bool {
        self.compare(a, b) != Ordering::Greater
    }
}

impl<K: ?Sized, O: KeyOrder<K> + ?Sized> KeyOrder<K> for &O {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        (**self).compare(a, b)
    }
}

/// The key type's own `Ord` implementation (min-heap).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> KeyOrder<K> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// The reverse of the key type's `Ord` implementation (max-heap).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseOrder;

impl<K: Ord + ?Sized> KeyOrder<K> for ReverseOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        b.cmp(a)
    }
}

/// A comparison closure used as an ordering strategy.
#[derive(Clone, Copy)]
pub struct FnOrder<F>(pub F);

impl<K: ?Sized, F> KeyOrder<K> for FnOrder<F>
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        (self.0)(a, b)
    }
}

impl<F> std::fmt::Debug for FnOrder<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnOrder(..)")
    }
}

/// Keys with a value that sorts at or before every other value under
/// [`NaturalOrder`].
///
/// Heaps built with [`FibHeap::new`](crate::FibHeap::new) use it as the
/// sentinel that `delete_node` forces onto a node before extracting it.
pub trait MinSentinel {
    /// A value no valid key sorts before.
    fn min_sentinel() -> Self;
}

macro_rules! min_sentinel_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl MinSentinel for $t {
                #[inline]
                fn min_sentinel() -> Self {
                    <$t>::MIN
                }
            }
        )*
    };
}

min_sentinel_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<A: MinSentinel, B: MinSentinel> MinSentinel for (A, B) {
    fn min_sentinel() -> Self {
        (A::min_sentinel(), B::min_sentinel())
    }
}
