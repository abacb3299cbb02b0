//! Complexity checks for sorting machine operations
//!
//! Two kinds of check live here.
//!
//! Comparison counting builds every machine with an order that increments a shared
//! counter, which makes these bounds exact and deterministic:
//!
//! - `add` performs no comparisons at all
//! - the transition performs at most `2n` comparisons (bottom-up heapify)
//! - each `remove_first` performs at most `2 floor(log2 n)` comparisons
//! - a full drain stays within `2 n log2 n`
//!
//! Timing uses `test_algorithm` from the `big-o-test` crate on batch operations, where
//! O(1) amortized per-element work appears as O(n) and O(log n) per-element work
//! appears as O(n log n). These are empirical: they catch significant deviations from
//! the expected growth, not subtle ones.

use std::cell::Cell;
use std::cmp::Ordering;
use std::rc::Rc;
use std::sync::Arc;

use big_o_test::{test_algorithm, BigOAlgorithmComplexity};
use ctor::ctor;
use parking_lot::RwLock;
use sorting_machine::heap_machine::HeapSortingMachine;
use sorting_machine::reference::ListSortingMachine;
use sorting_machine::{NaturalOrder, SortingMachine};

/// Sets up the ENV, affecting the Rust's test runner
#[ctor]
fn setup_env() {
    // timing passes must not share the CPU with other tests
    std::env::set_var("RUST_TEST_THREADS", "1");
}

/// Builds an order over `u32` that counts how often it is called
fn counting_order(counter: Rc<Cell<usize>>) -> impl Fn(&u32, &u32) -> Ordering {
    move |a, b| {
        counter.set(counter.get() + 1);
        a.cmp(b)
    }
}

fn scrambled(n: u32) -> impl Iterator<Item = u32> {
    (0..n).map(move |i| i.wrapping_mul(2_654_435_761) % n.max(1))
}

fn floor_log2(n: usize) -> usize {
    (usize::BITS - 1 - n.max(1).leading_zeros()) as usize
}

#[test]
fn test_insertion_performs_no_comparisons() {
    let counter = Rc::new(Cell::new(0));
    let mut machine = HeapSortingMachine::new(counting_order(Rc::clone(&counter)));

    for value in scrambled(10_000) {
        machine.add(value);
    }

    assert_eq!(counter.get(), 0);
    assert_eq!(machine.size(), 10_000);
}

#[test]
fn test_transition_is_linear() {
    for n in [1u32, 2, 3, 10, 100, 1_000, 10_000, 100_000] {
        for input in [
            (0..n).collect::<Vec<_>>(),
            (0..n).rev().collect(),
            scrambled(n).collect(),
        ] {
            let counter = Rc::new(Cell::new(0));
            let mut machine = HeapSortingMachine::new(counting_order(Rc::clone(&counter)));
            machine.extend(input);

            machine.change_to_extraction_mode();

            assert!(
                counter.get() <= 2 * n as usize,
                "heapify of {} entries took {} comparisons",
                n,
                counter.get()
            );
        }
    }
}

#[test]
fn test_remove_first_is_logarithmic() {
    let n = 4_096u32;
    let counter = Rc::new(Cell::new(0));
    let mut machine = HeapSortingMachine::new(counting_order(Rc::clone(&counter)));
    machine.extend(scrambled(n));
    machine.change_to_extraction_mode();

    while !machine.is_empty() {
        let size = machine.size();
        counter.set(0);
        machine.remove_first();
        assert!(
            counter.get() <= 2 * floor_log2(size),
            "remove_first at size {} took {} comparisons",
            size,
            counter.get()
        );
    }
}

#[test]
fn test_full_drain_is_n_log_n() {
    let n = 20_000u32;
    let counter = Rc::new(Cell::new(0));
    let mut machine = HeapSortingMachine::new(counting_order(Rc::clone(&counter)));
    machine.extend(scrambled(n));
    machine.change_to_extraction_mode();

    let mut previous = None;
    while let Ok(value) = machine.try_remove_first() {
        if let Some(prev) = previous {
            assert!(prev <= value);
        }
        previous = Some(value);
    }

    let n = n as usize;
    assert!(counter.get() <= 2 * n + 2 * n * floor_log2(n));
}

// ============================================================================
// Timed batch checks
// ============================================================================

type Natural = NaturalOrder<u32>;

/// Test that n insertions has O(n) batch complexity
fn test_add_batch_complexity<M>(machine_name: &str)
where
    M: SortingMachine<u32, Order = Natural> + Send + Sync,
{
    let machine = Arc::new(RwLock::new(M::new(NaturalOrder::new())));

    test_algorithm(
        &format!("{} add batch", machine_name),
        3,
        || {
            *machine.write() = M::new(NaturalOrder::new());
        },
        10_000,
        || {
            let mut m = machine.write();
            for value in scrambled(10_000) {
                m.add(value);
            }
            42
        },
        20_000,
        || {
            let mut m = machine.write();
            for value in scrambled(20_000) {
                m.add(value);
            }
            42
        },
        BigOAlgorithmComplexity::ON,
        BigOAlgorithmComplexity::ON,
    );
}

/// Test that the transition is O(n) in the number of entries
///
/// Each pass starts from a filled machine; cloning it is O(n) as well, so the
/// measured batch stays linear only if heapify does.
fn test_transition_complexity<M>(machine_name: &str)
where
    M: SortingMachine<u32, Order = Natural> + Clone + Send + Sync,
{
    let filled = |n: u32| {
        let mut m = M::new(NaturalOrder::new());
        for value in scrambled(n) {
            m.add(value);
        }
        m
    };
    let small = filled(50_000);
    let large = filled(100_000);

    test_algorithm(
        &format!("{} transition", machine_name),
        3,
        || {},
        50_000,
        || {
            let mut m = small.clone();
            m.change_to_extraction_mode();
            42
        },
        100_000,
        || {
            let mut m = large.clone();
            m.change_to_extraction_mode();
            42
        },
        BigOAlgorithmComplexity::ON,
        BigOAlgorithmComplexity::ON,
    );
}

/// Test that adding, transitioning and draining n entries has O(n log n) batch complexity
fn test_drain_batch_complexity<M>(machine_name: &str)
where
    M: SortingMachine<u32, Order = Natural> + Send + Sync,
{
    let machine = Arc::new(RwLock::new(M::new(NaturalOrder::new())));

    test_algorithm(
        &format!("{} drain batch", machine_name),
        3,
        || {
            *machine.write() = M::new(NaturalOrder::new());
        },
        10_000,
        || {
            let mut m = machine.write();
            for value in scrambled(10_000) {
                m.add(value);
            }
            m.change_to_extraction_mode();
            for _ in 0..10_000 {
                assert!(
                    m.try_remove_first().is_ok(),
                    "remove_first must succeed while entries remain"
                );
            }
            42
        },
        20_000,
        || {
            let mut m = machine.write();
            for value in scrambled(20_000) {
                m.add(value);
            }
            m.change_to_extraction_mode();
            for _ in 0..20_000 {
                assert!(
                    m.try_remove_first().is_ok(),
                    "remove_first must succeed while entries remain"
                );
            }
            42
        },
        BigOAlgorithmComplexity::ONLogN,
        BigOAlgorithmComplexity::ON,
    );
}

#[test]
fn test_heap_add() {
    // O(1) amortized per entry, so the batch is O(n)
    test_add_batch_complexity::<HeapSortingMachine<u32, Natural>>("HeapSortingMachine");
}

#[test]
fn test_heap_transition() {
    test_transition_complexity::<HeapSortingMachine<u32, Natural>>("HeapSortingMachine");
}

#[test]
fn test_heap_drain() {
    test_drain_batch_complexity::<HeapSortingMachine<u32, Natural>>("HeapSortingMachine");
}

#[test]
fn test_list_add() {
    // the reference only differs from the heap on extraction
    test_add_batch_complexity::<ListSortingMachine<u32, Natural>>("ListSortingMachine");
}
