//! Sorting machines for Rust
//!
//! A sorting machine is a two-phase container: it accepts entries in any order, then
//! switches, once and irreversibly, to handing them back one at a time, smallest first
//! under a caller-supplied total preorder. It is heapsort exposed as a collection, for
//! any consumer with "collect, then drain sorted" needs: external sort stages, top-K
//! pipelines, event schedulers.
//!
//! # Features
//!
//! - **O(1) insertion**: adding an entry appends it to an unordered buffer, with no comparisons
//! - **O(n) transition**: switching modes heapifies the buffer bottom-up, in place
//! - **O(log n) extraction**: each removal pops the root of a binary min-heap
//! - **Any order**: closures, [`NaturalOrder`], [`ReverseOrder`], [`CaseInsensitiveOrder`]
//! - **Two APIs**: the runtime-checked [`SortingMachine`] trait, and the
//!   [`staged`] typestate handles where illegal operations do not compile
//!
//! # Example
//!
//! ```rust
//! use sorting_machine::heap_machine::HeapSortingMachine;
//! use sorting_machine::{CaseInsensitiveOrder, MachineError, SortingMachine};
//!
//! let mut machine = HeapSortingMachine::new(CaseInsensitiveOrder);
//! machine.add("Red");
//! machine.add("Green");
//! machine.add("Blue");
//! machine.change_to_extraction_mode();
//!
//! assert_eq!(machine.try_add("Violet"), Err(MachineError::NotInInsertionMode));
//! assert_eq!(machine.remove_first(), "Blue");
//! assert_eq!(machine.size(), 2);
//! ```

pub mod heap_machine;
pub mod heapify;
pub mod order;
pub mod reference;
pub mod snapshot;
pub mod staged;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main trait and orders for convenience
pub use order::{CaseInsensitiveOrder, NaturalOrder, ReverseOrder, TotalPreorder};
pub use traits::{MachineError, Mode, SortingMachine};
