//! Typestate handles for the two machine phases
//!
//! [`Inserter`] and [`Extractor`] split a sorting machine into one type per phase, so
//! that the mode rules are checked by the compiler instead of at runtime. An
//! `Inserter` can only grow; [`Inserter::into_extractor`] consumes it, heapifies its
//! buffer, and hands back an `Extractor`, which can only shrink. There is no way to
//! add to an `Extractor` or to switch modes twice, so there are no mode errors: the
//! only remaining failure, removing from an empty extractor, is an ordinary `None`.
//!
//! An `Extractor` is an [`Iterator`] over its remaining entries in order.
//!
//! # Example
//!
//! ```rust
//! use sorting_machine::staged::Inserter;
//! use sorting_machine::CaseInsensitiveOrder;
//!
//! let mut inserter = Inserter::new(CaseInsensitiveOrder);
//! inserter.push("Red");
//! inserter.push("Green");
//! inserter.push("Blue");
//!
//! let extractor = inserter.into_extractor();
//! assert_eq!(extractor.collect::<Vec<_>>(), vec!["Blue", "Green", "Red"]);
//! ```

use std::fmt;
use std::iter::FusedIterator;

use tracing::debug;

use crate::heap_machine::HeapSortingMachine;
use crate::heapify::{heapify, pop_min};
use crate::order::TotalPreorder;
use crate::snapshot::sorted_snapshot;

/// The insertion phase of a sorting machine
#[derive(Clone)]
pub struct Inserter<T, O> {
    order: O,
    buffer: Vec<T>,
}

impl<T, O: TotalPreorder<T>> Inserter<T, O> {
    /// Creates an empty inserter
    pub fn new(order: O) -> Self {
        Self {
            order,
            buffer: Vec::new(),
        }
    }

    /// Creates an empty inserter with room for `capacity` entries before reallocating
    pub fn with_capacity(order: O, capacity: usize) -> Self {
        Self {
            order,
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Adds an entry
    ///
    /// # Time Complexity
    /// O(1) amortized, no comparisons
    pub fn push(&mut self, entry: T) {
        self.buffer.push(entry);
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if no entries have been added
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the order relation supplied at construction
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Iterates over the entries in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.buffer.iter()
    }

    /// Switches to the extraction phase
    ///
    /// # Time Complexity
    /// O(n)
    pub fn into_extractor(self) -> Extractor<T, O> {
        let Self { order, mut buffer } = self;
        heapify(&mut buffer, &order);
        debug!(entries = buffer.len(), "heapified insertion buffer");
        Extractor { order, heap: buffer }
    }
}

impl<T, O: TotalPreorder<T>> Extend<T> for Inserter<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.buffer.extend(iter);
    }
}

impl<T: fmt::Debug, O: fmt::Debug> fmt::Debug for Inserter<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inserter")
            .field("order", &self.order)
            .field("entries", &self.buffer)
            .finish()
    }
}

/// The extraction phase of a sorting machine
#[derive(Clone)]
pub struct Extractor<T, O> {
    order: O,
    heap: Vec<T>,
}

impl<T, O: TotalPreorder<T>> Extractor<T, O> {
    /// Removes and returns a minimum entry, or `None` if empty
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn pop(&mut self) -> Option<T> {
        pop_min(&mut self.heap, &self.order)
    }

    /// Returns a minimum entry without removing it
    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    /// Returns the number of remaining entries
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if every entry has been removed
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the order relation supplied at construction
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Returns references to the remaining entries, sorted by the order
    pub fn sorted_snapshot(&self) -> Vec<&T> {
        sorted_snapshot(&self.heap, &self.order)
    }
}

impl<T, O: TotalPreorder<T>> Iterator for Extractor<T, O> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl<T, O: TotalPreorder<T>> ExactSizeIterator for Extractor<T, O> {}

impl<T, O: TotalPreorder<T>> FusedIterator for Extractor<T, O> {}

impl<T, O> fmt::Debug for Extractor<T, O>
where
    T: fmt::Debug,
    O: TotalPreorder<T> + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extractor")
            .field("order", &self.order)
            .field("entries", &self.sorted_snapshot())
            .finish()
    }
}

impl<T, O: TotalPreorder<T>> From<Extractor<T, O>> for HeapSortingMachine<T, O> {
    /// Wraps an extractor in a runtime-checked machine that is already in extraction mode
    fn from(extractor: Extractor<T, O>) -> Self {
        HeapSortingMachine::from_heap(extractor.order, extractor.heap)
    }
}

impl<T, O: TotalPreorder<T>> From<Inserter<T, O>> for HeapSortingMachine<T, O> {
    /// Wraps an inserter in a runtime-checked machine that is still in insertion mode
    fn from(inserter: Inserter<T, O>) -> Self {
        let mut machine = HeapSortingMachine::with_capacity(inserter.order, inserter.buffer.len());
        machine.extend(inserter.buffer);
        machine
    }
}
