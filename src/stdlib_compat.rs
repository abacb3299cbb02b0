//! Standard library compatibility layer
//!
//! Shortcuts for the common collect-then-drain patterns, in the shape of the standard
//! library's sorting and collection APIs.
//!
//! # Example
//!
//! ```rust
//! use sorting_machine::stdlib_compat::{smallest_k, sorted};
//! use sorting_machine::{CaseInsensitiveOrder, NaturalOrder};
//!
//! assert_eq!(
//!     sorted(["Red", "green", "Blue"], CaseInsensitiveOrder),
//!     vec!["Blue", "green", "Red"]
//! );
//! assert_eq!(smallest_k([9, 4, 7, 1, 8], 2, NaturalOrder::new()), vec![1, 4]);
//! ```

use crate::heap_machine::HeapSortingMachine;
use crate::order::{NaturalOrder, TotalPreorder};
use crate::staged::Inserter;

/// A heap-backed machine ordered by `T`'s [`Ord`] implementation
pub type NaturalSortingMachine<T> = HeapSortingMachine<T, NaturalOrder<T>>;

/// Collects `iter` and returns its entries sorted by `order`
///
/// Not stable: equivalent entries come out in an unspecified relative order.
pub fn sorted<I, O>(iter: I, order: O) -> Vec<I::Item>
where
    I: IntoIterator,
    O: TotalPreorder<I::Item>,
{
    let mut inserter = Inserter::new(order);
    inserter.extend(iter);
    inserter.into_extractor().collect()
}

/// Sorts `entries` in place by `order`
///
/// Not stable: equivalent entries come out in an unspecified relative order.
pub fn sort_by_preorder<T, O>(entries: &mut Vec<T>, order: O)
where
    O: TotalPreorder<T>,
{
    *entries = sorted(std::mem::take(entries), order);
}

/// Returns the `k` smallest entries of `iter` under `order`, smallest first
///
/// Heapifies everything once and extracts only `k` entries.
///
/// # Time Complexity
/// O(n + k log n)
pub fn smallest_k<I, O>(iter: I, k: usize, order: O) -> Vec<I::Item>
where
    I: IntoIterator,
    O: TotalPreorder<I::Item>,
{
    let mut inserter = Inserter::new(order);
    inserter.extend(iter);
    inserter.into_extractor().take(k).collect()
}

impl<T: Ord> FromIterator<T> for HeapSortingMachine<T, NaturalOrder<T>> {
    /// Builds a machine in insertion mode holding every entry of `iter`
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut machine = HeapSortingMachine::new(NaturalOrder::new());
        machine.extend(iter);
        machine
    }
}
