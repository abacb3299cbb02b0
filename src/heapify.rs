//! Binary min-heap primitives over an implicit array
//!
//! The heap lives in a contiguous slice: the children of index `i` are `2i + 1` and
//! `2i + 2`, its parent is `(i - 1) / 2`. Every function here is parameterised by a
//! [`TotalPreorder`] rather than by [`Ord`], and every function is safe, index-checked
//! code: an order that breaks the total preorder contract can produce a badly ordered
//! heap, but never an out-of-bounds access or a lost entry.
//!
//! # Time Complexity
//!
//! | Operation   | Complexity | Comparisons   |
//! |-------------|------------|---------------|
//! | `heapify`   | O(n)       | at most `2n`  |
//! | `sift_down` | O(log n)   | `2 log n`     |
//! | `pop_min`   | O(log n)   | `2 log n`     |
//! | `is_heap`   | O(n)       | `n - 1`       |

use crate::order::TotalPreorder;

/// Rearranges `data` in place so that it satisfies the min-heap property under `order`
///
/// Bottom-up construction: every internal node, from the last one back to the root,
/// is sifted down into the already-heap-ordered subtrees beneath it.
///
/// # Example
///
/// ```rust
/// use sorting_machine::heapify::{heapify, is_heap};
/// use sorting_machine::NaturalOrder;
///
/// let mut data = vec![5, 3, 8, 1, 9, 2];
/// heapify(&mut data, &NaturalOrder::new());
/// assert!(is_heap(&data, &NaturalOrder::new()));
/// assert_eq!(data[0], 1);
/// ```
pub fn heapify<T, O>(data: &mut [T], order: &O)
where
    O: TotalPreorder<T> + ?Sized,
{
    let mut n = data.len() / 2;
    while n > 0 {
        n -= 1;
        sift_down(data, n, order);
    }
}

/// Moves the element at `index` down until neither child is smaller than it
///
/// Both subtrees of `index` must already be heap-ordered. Indices at or past the end
/// of the slice are ignored.
pub fn sift_down<T, O>(data: &mut [T], mut index: usize, order: &O)
where
    O: TotalPreorder<T> + ?Sized,
{
    let len = data.len();
    loop {
        let left = 2 * index + 1;
        if left >= len {
            break;
        }

        let right = left + 1;
        let smaller = if right < len && order.lt(&data[right], &data[left]) {
            right
        } else {
            left
        };

        if order.lt(&data[smaller], &data[index]) {
            data.swap(index, smaller);
            index = smaller;
        } else {
            break;
        }
    }
}

/// Removes and returns the root of a heap-ordered vector, restoring the heap property
///
/// The root is swapped with the last element, popped off, and the new root is sifted
/// down. Returns `None` if `heap` is empty.
pub fn pop_min<T, O>(heap: &mut Vec<T>, order: &O) -> Option<T>
where
    O: TotalPreorder<T> + ?Sized,
{
    if heap.is_empty() {
        return None;
    }

    let last_idx = heap.len() - 1;
    heap.swap(0, last_idx);
    let result = heap.pop();

    if !heap.is_empty() {
        sift_down(heap, 0, order);
    }

    result
}

/// Returns true if every element of `data` is not after either of its children
pub fn is_heap<T, O>(data: &[T], order: &O) -> bool
where
    O: TotalPreorder<T> + ?Sized,
{
    (1..data.len()).all(|child| order.le(&data[(child - 1) / 2], &data[child]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{NaturalOrder, ReverseOrder};
    use std::cell::Cell;
    use std::cmp::Ordering;

    #[test]
    fn test_heapify_empty_and_single() {
        let order = NaturalOrder::<i32>::new();

        let mut empty: Vec<i32> = Vec::new();
        heapify(&mut empty, &order);
        assert!(empty.is_empty());

        let mut single = vec![42];
        heapify(&mut single, &order);
        assert_eq!(single, vec![42]);
    }

    #[test]
    fn test_heapify_descending_input() {
        let order = NaturalOrder::new();
        let mut data: Vec<i32> = (0..100).rev().collect();
        heapify(&mut data, &order);
        assert!(is_heap(&data, &order));
        assert_eq!(data[0], 0);
    }

    #[test]
    fn test_heapify_with_duplicates() {
        let order = NaturalOrder::new();
        let mut data = vec![3, 1, 3, 1, 2, 2, 1, 3];
        heapify(&mut data, &order);
        assert!(is_heap(&data, &order));
        assert_eq!(data[0], 1);
    }

    #[test]
    fn test_pop_min_drains_sorted() {
        let order = NaturalOrder::new();
        let mut heap = vec![9, 4, 7, 1, 8, 2, 6, 3, 5, 0];
        heapify(&mut heap, &order);

        let mut drained = Vec::new();
        while let Some(min) = pop_min(&mut heap, &order) {
            assert!(is_heap(&heap, &order));
            drained.push(min);
        }

        assert_eq!(drained, (0..10).collect::<Vec<_>>());
        assert_eq!(pop_min(&mut heap, &order), None);
    }

    #[test]
    fn test_reverse_order_is_max_heap() {
        let order = ReverseOrder(NaturalOrder::new());
        let mut heap = vec![2, 7, 1, 8, 2, 8];
        heapify(&mut heap, &order);
        assert_eq!(pop_min(&mut heap, &order), Some(8));
        assert_eq!(pop_min(&mut heap, &order), Some(8));
        assert_eq!(pop_min(&mut heap, &order), Some(7));
    }

    #[test]
    fn test_is_heap_detects_violation() {
        let order = NaturalOrder::new();
        assert!(is_heap(&[1, 2, 3], &order));
        assert!(!is_heap(&[2, 1, 3], &order));
        assert!(!is_heap(&[1, 2, 3, 0], &order));
    }

    #[test]
    fn test_heapify_comparison_bound() {
        let comparisons = Cell::new(0usize);
        let counting = |a: &u32, b: &u32| -> Ordering {
            comparisons.set(comparisons.get() + 1);
            a.cmp(b)
        };

        let n = 1000u32;
        let mut data: Vec<u32> = (0..n).rev().collect();
        heapify(&mut data, &counting);

        assert!(comparisons.get() <= 2 * n as usize);
        assert!(is_heap(&data, &NaturalOrder::new()));
    }

    #[test]
    fn test_inconsistent_order_keeps_entries() {
        // Not a total preorder: everything is "less" than everything else.
        let broken = |_: &i32, _: &i32| Ordering::Less;
        let mut heap: Vec<i32> = (0..50).collect();
        heapify(&mut heap, &broken);

        let mut drained = Vec::new();
        while let Some(x) = pop_min(&mut heap, &broken) {
            drained.push(x);
        }
        drained.sort_unstable();
        assert_eq!(drained, (0..50).collect::<Vec<_>>());
    }
}
