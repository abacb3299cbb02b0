//! Common traits for sorting machines
//!
//! This module provides the kernel contract shared by every sorting machine in the crate:
//!
//! - [`SortingMachine`]: the two-phase "collect, then drain sorted" interface
//! - [`Mode`]: which of the two phases a machine is in
//! - [`MachineError`]: the precondition violations an operation can report
//!
//! A machine starts in [`Mode::Insertion`], where entries are accepted in any order.
//! A single call to [`SortingMachine::change_to_extraction_mode`] moves it irreversibly
//! to [`Mode::Extraction`], where entries come back out one at a time, smallest first
//! under the machine's [`TotalPreorder`].
//!
//! Every operation comes in two flavours. The `try_*` methods report a violated
//! precondition as a [`MachineError`]; the plain methods treat it as a caller bug and
//! panic with the same message.

use std::fmt;
use std::iter::FusedIterator;
use std::slice;

use thiserror::Error;

use crate::order::TotalPreorder;

/// The phase a sorting machine is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Entries may be added; nothing may be removed
    Insertion,
    /// The minimum may be removed; nothing may be added
    Extraction,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Insertion => f.write_str("insertion"),
            Mode::Extraction => f.write_str("extraction"),
        }
    }
}

/// Error type for sorting machine operations
///
/// Each variant is a violated precondition. A rejected operation never mutates the
/// machine: its contents and mode are exactly as they were before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum MachineError {
    /// The operation requires insertion mode, but the machine is extracting
    #[error("sorting machine is not in insertion mode")]
    NotInInsertionMode,
    /// The operation requires extraction mode, but the machine is still inserting
    #[error("sorting machine is not in extraction mode")]
    NotInExtractionMode,
    /// The machine has no entries left to remove
    #[error("sorting machine is empty")]
    Empty,
}

/// Iterator over the entries of a sorting machine, in an unspecified order
///
/// The order in which entries are visited depends on the machine's internal
/// arrangement and must not be relied upon. Use
/// [`sorted_snapshot`](crate::snapshot::sorted_snapshot) for a canonical view.
#[derive(Debug, Clone)]
pub struct Entries<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<'a, T> Entries<'a, T> {
    pub(crate) fn new(entries: &'a [T]) -> Self {
        Self {
            inner: entries.iter(),
        }
    }
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Entries<'_, T> {}

impl<T> FusedIterator for Entries<'_, T> {}

/// Base trait for two-phase sorting machines
///
/// # Example
///
/// ```rust
/// use sorting_machine::{CaseInsensitiveOrder, SortingMachine};
/// use sorting_machine::heap_machine::HeapSortingMachine;
///
/// let mut machine = HeapSortingMachine::new(CaseInsensitiveOrder);
/// machine.add("Red");
/// machine.add("Green");
/// machine.add("Blue");
/// assert_eq!(machine.size(), 3);
///
/// machine.change_to_extraction_mode();
/// assert!(!machine.is_in_insertion_mode());
///
/// assert_eq!(machine.remove_first(), "Blue");
/// assert_eq!(machine.remove_first(), "Green");
/// assert_eq!(machine.remove_first(), "Red");
/// assert_eq!(machine.size(), 0);
/// ```
pub trait SortingMachine<T> {
    /// The order relation the machine sorts by
    type Order: TotalPreorder<T>;

    /// Creates an empty machine in insertion mode that sorts by `order`
    fn new(order: Self::Order) -> Self;

    /// Returns true if the machine is in insertion mode
    fn is_in_insertion_mode(&self) -> bool;

    /// Returns the order relation supplied at construction
    fn order(&self) -> &Self::Order;

    /// Returns the number of entries in the machine
    ///
    /// # Time Complexity
    /// O(1)
    fn size(&self) -> usize;

    /// Iterates over the entries in an unspecified order
    fn entries(&self) -> Entries<'_, T>;

    /// Adds an entry
    ///
    /// # Errors
    /// Returns [`MachineError::NotInInsertionMode`] if the machine is extracting.
    ///
    /// # Time Complexity
    /// O(1) amortized
    fn try_add(&mut self, entry: T) -> Result<(), MachineError>;

    /// Switches the machine to extraction mode
    ///
    /// # Errors
    /// Returns [`MachineError::NotInInsertionMode`] if the machine is already
    /// extracting. The transition happens once; a second call is an error, not a no-op.
    fn try_change_to_extraction_mode(&mut self) -> Result<(), MachineError>;

    /// Removes and returns a minimum entry under [`order`](Self::order)
    ///
    /// Entries the order considers equivalent come out in an unspecified relative order.
    ///
    /// # Errors
    /// Returns [`MachineError::NotInExtractionMode`] while inserting, or
    /// [`MachineError::Empty`] if no entries remain.
    fn try_remove_first(&mut self) -> Result<T, MachineError>;

    /// Returns the current mode
    fn mode(&self) -> Mode {
        if self.is_in_insertion_mode() {
            Mode::Insertion
        } else {
            Mode::Extraction
        }
    }

    /// Returns true if the machine holds no entries
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Adds an entry
    ///
    /// # Panics
    /// Panics if the machine is not in insertion mode.
    fn add(&mut self, entry: T) {
        if let Err(err) = self.try_add(entry) {
            panic!("add: {err}");
        }
    }

    /// Switches the machine to extraction mode
    ///
    /// # Panics
    /// Panics if the machine is already in extraction mode.
    fn change_to_extraction_mode(&mut self) {
        if let Err(err) = self.try_change_to_extraction_mode() {
            panic!("change_to_extraction_mode: {err}");
        }
    }

    /// Removes and returns a minimum entry
    ///
    /// # Panics
    /// Panics if the machine is not in extraction mode or is empty.
    fn remove_first(&mut self) -> T {
        match self.try_remove_first() {
            Ok(entry) => entry,
            Err(err) => panic!("remove_first: {err}"),
        }
    }
}
