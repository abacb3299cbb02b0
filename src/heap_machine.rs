//! Heap-backed sorting machine
//!
//! [`HeapSortingMachine`] is the production implementation of [`SortingMachine`].
//! Insertion appends to an unordered buffer and performs no comparisons; the switch to
//! extraction mode heapifies that buffer in place in linear time; each extraction then
//! pops the root of the binary min-heap. A full collect-then-drain is heapsort exposed
//! one entry at a time.
//!
//! # Time Complexity
//!
//! | Operation                   | Complexity       |
//! |-----------------------------|------------------|
//! | `add`                       | O(1) amortized   |
//! | `change_to_extraction_mode` | O(n)             |
//! | `remove_first`              | O(log n)         |
//! | `peek_first`                | O(1)             |
//! | `size`                      | O(1)             |
//!
//! # Example
//!
//! ```rust
//! use sorting_machine::SortingMachine;
//! use sorting_machine::heap_machine::HeapSortingMachine;
//! use sorting_machine::NaturalOrder;
//!
//! let mut machine = HeapSortingMachine::new(NaturalOrder::new());
//! machine.extend([5, 1, 4, 1, 3]);
//! machine.change_to_extraction_mode();
//!
//! let drained: Vec<i32> = machine.drain_sorted().unwrap().collect();
//! assert_eq!(drained, vec![1, 1, 3, 4, 5]);
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use tracing::{debug, trace};

use crate::heapify::{heapify, pop_min};
use crate::order::TotalPreorder;
use crate::snapshot::{machines_eq, sorted_snapshot};
use crate::traits::{Entries, MachineError, Mode, SortingMachine};

/// Phase-specific storage
///
/// Both phases own a `Vec`, but only the extracting one is heap-ordered.
#[derive(Clone)]
enum Phase<T> {
    /// Unordered growth buffer
    Inserting(Vec<T>),
    /// Implicit binary min-heap
    Extracting(Vec<T>),
}

impl<T> Phase<T> {
    fn as_slice(&self) -> &[T] {
        match self {
            Phase::Inserting(buffer) => buffer,
            Phase::Extracting(heap) => heap,
        }
    }
}

/// A sorting machine backed by a binary min-heap
///
/// The order relation is fixed at construction and governs every comparison the
/// machine makes over its lifetime.
#[derive(Clone)]
pub struct HeapSortingMachine<T, O> {
    order: O,
    phase: Phase<T>,
}

impl<T, O: TotalPreorder<T>> HeapSortingMachine<T, O> {
    /// Creates an empty machine in insertion mode
    pub fn new(order: O) -> Self {
        Self {
            order,
            phase: Phase::Inserting(Vec::new()),
        }
    }

    /// Creates an empty machine with room for `capacity` entries before reallocating
    pub fn with_capacity(order: O, capacity: usize) -> Self {
        Self {
            order,
            phase: Phase::Inserting(Vec::with_capacity(capacity)),
        }
    }

    /// Returns a minimum entry without removing it
    ///
    /// # Errors
    /// Returns [`MachineError::NotInExtractionMode`] while inserting, or
    /// [`MachineError::Empty`] if no entries remain.
    pub fn peek_first(&self) -> Result<&T, MachineError> {
        match &self.phase {
            Phase::Inserting(_) => Err(MachineError::NotInExtractionMode),
            Phase::Extracting(heap) => heap.first().ok_or(MachineError::Empty),
        }
    }

    /// Removes the remaining entries in order, lazily
    ///
    /// Entries the iterator does not reach stay in the machine.
    ///
    /// # Errors
    /// Returns [`MachineError::NotInExtractionMode`] while inserting.
    pub fn drain_sorted(&mut self) -> Result<DrainSorted<'_, T, O>, MachineError> {
        match self.phase {
            Phase::Inserting(_) => Err(MachineError::NotInExtractionMode),
            Phase::Extracting(_) => Ok(DrainSorted { machine: self }),
        }
    }

    /// Returns references to every entry, sorted by the machine's order
    pub fn sorted_snapshot(&self) -> Vec<&T> {
        sorted_snapshot(self.phase.as_slice(), &self.order)
    }

    /// Consumes the machine and returns its entries sorted by its order
    ///
    /// Works in either mode; an inserting machine is heapified first.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let Self { order, phase } = self;
        let mut heap = match phase {
            Phase::Inserting(mut buffer) => {
                heapify(&mut buffer, &order);
                buffer
            }
            Phase::Extracting(heap) => heap,
        };

        let mut sorted = Vec::with_capacity(heap.len());
        while let Some(entry) = pop_min(&mut heap, &order) {
            sorted.push(entry);
        }
        sorted
    }

    /// Builds an extracting machine directly from an already heap-ordered vector
    pub(crate) fn from_heap(order: O, heap: Vec<T>) -> Self {
        Self {
            order,
            phase: Phase::Extracting(heap),
        }
    }
}

impl<T, O: TotalPreorder<T>> SortingMachine<T> for HeapSortingMachine<T, O> {
    type Order = O;

    fn new(order: O) -> Self {
        Self::new(order)
    }

    fn is_in_insertion_mode(&self) -> bool {
        matches!(self.phase, Phase::Inserting(_))
    }

    fn order(&self) -> &O {
        &self.order
    }

    fn size(&self) -> usize {
        self.phase.as_slice().len()
    }

    fn entries(&self) -> Entries<'_, T> {
        Entries::new(self.phase.as_slice())
    }

    fn try_add(&mut self, entry: T) -> Result<(), MachineError> {
        match &mut self.phase {
            Phase::Inserting(buffer) => {
                buffer.push(entry);
                Ok(())
            }
            Phase::Extracting(_) => {
                trace!(mode = %Mode::Extraction, "rejected add");
                Err(MachineError::NotInInsertionMode)
            }
        }
    }

    fn try_change_to_extraction_mode(&mut self) -> Result<(), MachineError> {
        let Phase::Inserting(buffer) = &mut self.phase else {
            trace!(mode = %Mode::Extraction, "rejected mode change");
            return Err(MachineError::NotInInsertionMode);
        };

        let mut heap = mem::take(buffer);
        heapify(&mut heap, &self.order);
        debug!(entries = heap.len(), "heapified insertion buffer");
        self.phase = Phase::Extracting(heap);
        Ok(())
    }

    fn try_remove_first(&mut self) -> Result<T, MachineError> {
        match &mut self.phase {
            Phase::Inserting(_) => {
                trace!(mode = %Mode::Insertion, "rejected remove_first");
                Err(MachineError::NotInExtractionMode)
            }
            Phase::Extracting(heap) => pop_min(heap, &self.order).ok_or(MachineError::Empty),
        }
    }
}

impl<T, O: TotalPreorder<T>> Extend<T> for HeapSortingMachine<T, O> {
    /// Adds every entry of `iter`
    ///
    /// # Panics
    /// Panics if the machine is not in insertion mode.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        match &mut self.phase {
            Phase::Inserting(buffer) => buffer.extend(iter),
            Phase::Extracting(_) => panic!("extend: {}", MachineError::NotInInsertionMode),
        }
    }
}

impl<T, O> PartialEq for HeapSortingMachine<T, O>
where
    T: PartialEq,
    O: TotalPreorder<T> + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        machines_eq::<T, _, _>(self, other)
    }
}

impl<T, O> fmt::Debug for HeapSortingMachine<T, O>
where
    T: fmt::Debug,
    O: TotalPreorder<T> + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeapSortingMachine")
            .field("mode", &self.mode())
            .field("order", &self.order)
            .field("entries", &self.sorted_snapshot())
            .finish()
    }
}

/// Draining iterator returned by [`HeapSortingMachine::drain_sorted`]
pub struct DrainSorted<'a, T, O: TotalPreorder<T>> {
    machine: &'a mut HeapSortingMachine<T, O>,
}

impl<T, O: TotalPreorder<T>> Iterator for DrainSorted<'_, T, O> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match &mut self.machine.phase {
            Phase::Extracting(heap) => pop_min(heap, &self.machine.order),
            Phase::Inserting(_) => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.machine.size();
        (len, Some(len))
    }
}

impl<T, O: TotalPreorder<T>> ExactSizeIterator for DrainSorted<'_, T, O> {}

impl<T, O: TotalPreorder<T>> FusedIterator for DrainSorted<'_, T, O> {}
