//! Layout-independent inspection of sorting machines
//!
//! Two correct heaps over the same multiset may arrange their entries differently, so
//! machines are never compared slot by slot. Instead both sides are canonicalised into
//! a snapshot sorted by the machine's order, and the snapshots are compared as
//! multisets: run by run over groups of order-equivalent entries, matching entries
//! within a run by [`PartialEq`] regardless of their position.
//!
//! Snapshots are built with the crate's own heap primitives, so an order that breaks
//! the total preorder contract gives a meaningless snapshot but never a panic.

use crate::heapify::{heapify, pop_min};
use crate::order::TotalPreorder;
use crate::traits::SortingMachine;

/// Returns references to `entries`, sorted by `order`
///
/// Equivalent entries appear in an unspecified relative order.
pub fn sorted_snapshot<'a, T, O>(entries: impl IntoIterator<Item = &'a T>, order: &O) -> Vec<&'a T>
where
    T: 'a,
    O: TotalPreorder<T> + ?Sized,
{
    let by_target = |a: &&T, b: &&T| order.compare(a, b);

    let mut heap: Vec<&T> = entries.into_iter().collect();
    heapify(&mut heap, &by_target);

    let mut sorted = Vec::with_capacity(heap.len());
    while let Some(entry) = pop_min(&mut heap, &by_target) {
        sorted.push(entry);
    }
    sorted
}

/// Returns true if `a` and `b` hold the same entries with the same multiplicities
///
/// `order` must consider [`PartialEq`]-equal entries equivalent.
pub fn multiset_eq<'a, T, O>(
    a: impl IntoIterator<Item = &'a T>,
    b: impl IntoIterator<Item = &'a T>,
    order: &O,
) -> bool
where
    T: PartialEq + 'a,
    O: TotalPreorder<T> + ?Sized,
{
    let a = sorted_snapshot(a, order);
    let b = sorted_snapshot(b, order);
    if a.len() != b.len() {
        return false;
    }

    let mut start = 0;
    while start < a.len() {
        let mut end = start + 1;
        while end < a.len() && order.is_equivalent(a[start], a[end]) {
            end += 1;
        }

        let mut unmatched: Vec<&T> = b[start..end].to_vec();
        for entry in &a[start..end] {
            match unmatched.iter().position(|candidate| **candidate == **entry) {
                Some(idx) => {
                    unmatched.swap_remove(idx);
                }
                None => return false,
            }
        }

        start = end;
    }

    true
}

/// Compares two machines, possibly of different implementations
///
/// Machines are equal when they are in the same mode, their orders compare equal, and
/// their contents are equal as multisets.
pub fn machines_eq<T, A, B>(a: &A, b: &B) -> bool
where
    T: PartialEq,
    A: SortingMachine<T>,
    B: SortingMachine<T, Order = A::Order>,
    A::Order: PartialEq,
{
    a.mode() == b.mode()
        && a.order() == b.order()
        && a.size() == b.size()
        && multiset_eq(a.entries(), b.entries(), a.order())
}
