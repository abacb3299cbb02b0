//! Reference sorting machine
//!
//! [`ListSortingMachine`] implements [`SortingMachine`] in the most direct way possible:
//! an unordered list, a mode flag, and a linear scan for the minimum on every removal.
//! It makes no attempt to be fast. It exists as a trusted model that other
//! implementations are checked against, operation by operation.
//!
//! # Time Complexity
//!
//! | Operation                   | Complexity |
//! |-----------------------------|------------|
//! | `add`                       | O(1)       |
//! | `change_to_extraction_mode` | O(1)       |
//! | `remove_first`              | O(n)       |

use std::fmt;

use crate::heap_machine::HeapSortingMachine;
use crate::order::TotalPreorder;
use crate::snapshot::{machines_eq, sorted_snapshot};
use crate::traits::{Entries, MachineError, SortingMachine};

/// A sorting machine backed by an unordered list
#[derive(Clone)]
pub struct ListSortingMachine<T, O> {
    order: O,
    insertion_mode: bool,
    entries: Vec<T>,
}

impl<T, O: TotalPreorder<T>> ListSortingMachine<T, O> {
    /// Creates an empty machine in insertion mode
    pub fn new(order: O) -> Self {
        Self {
            order,
            insertion_mode: true,
            entries: Vec::new(),
        }
    }

    /// Returns references to every entry, sorted by the machine's order
    pub fn sorted_snapshot(&self) -> Vec<&T> {
        sorted_snapshot(&self.entries, &self.order)
    }
}

impl<T, O: TotalPreorder<T>> SortingMachine<T> for ListSortingMachine<T, O> {
    type Order = O;

    fn new(order: O) -> Self {
        Self::new(order)
    }

    fn is_in_insertion_mode(&self) -> bool {
        self.insertion_mode
    }

    fn order(&self) -> &O {
        &self.order
    }

    fn size(&self) -> usize {
        self.entries.len()
    }

    fn entries(&self) -> Entries<'_, T> {
        Entries::new(&self.entries)
    }

    fn try_add(&mut self, entry: T) -> Result<(), MachineError> {
        if !self.insertion_mode {
            return Err(MachineError::NotInInsertionMode);
        }
        self.entries.push(entry);
        Ok(())
    }

    fn try_change_to_extraction_mode(&mut self) -> Result<(), MachineError> {
        if !self.insertion_mode {
            return Err(MachineError::NotInInsertionMode);
        }
        self.insertion_mode = false;
        Ok(())
    }

    fn try_remove_first(&mut self) -> Result<T, MachineError> {
        if self.insertion_mode {
            return Err(MachineError::NotInExtractionMode);
        }

        if self.entries.is_empty() {
            return Err(MachineError::Empty);
        }

        let mut min_idx = 0;
        for idx in 1..self.entries.len() {
            if self.order.lt(&self.entries[idx], &self.entries[min_idx]) {
                min_idx = idx;
            }
        }
        Ok(self.entries.swap_remove(min_idx))
    }
}

impl<T, O> PartialEq for ListSortingMachine<T, O>
where
    T: PartialEq,
    O: TotalPreorder<T> + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        machines_eq::<T, _, _>(self, other)
    }
}

impl<T, O> PartialEq<HeapSortingMachine<T, O>> for ListSortingMachine<T, O>
where
    T: PartialEq,
    O: TotalPreorder<T> + PartialEq,
{
    fn eq(&self, other: &HeapSortingMachine<T, O>) -> bool {
        machines_eq::<T, _, _>(self, other)
    }
}

impl<T, O> PartialEq<ListSortingMachine<T, O>> for HeapSortingMachine<T, O>
where
    T: PartialEq,
    O: TotalPreorder<T> + PartialEq,
{
    fn eq(&self, other: &ListSortingMachine<T, O>) -> bool {
        machines_eq::<T, _, _>(self, other)
    }
}

impl<T, O> fmt::Debug for ListSortingMachine<T, O>
where
    T: fmt::Debug,
    O: TotalPreorder<T> + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListSortingMachine")
            .field("mode", &self.mode())
            .field("order", &self.order)
            .field("entries", &self.sorted_snapshot())
            .finish()
    }
}
