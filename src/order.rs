//! Order relations for sorting machines
//!
//! A sorting machine is parameterised by a [`TotalPreorder`]: a comparison that is
//! reflexive, transitive and total, but not necessarily antisymmetric. Two distinct
//! entries may compare [`Equal`](Ordering::Equal); the machine treats them as
//! interchangeable and emits them in an unspecified relative order.
//!
//! Any `Fn(&T, &T) -> Ordering` is a total preorder, so plain closures and function
//! pointers such as `i32::cmp` work directly. The zero-sized orders in this module exist
//! for the common cases and, unlike closures, implement [`PartialEq`], which the
//! machine equality in [`snapshot`](crate::snapshot) relies on.
//!
//! The machine never validates the relation. An order that is not a total preorder
//! yields entries in an unspecified order, but never loses or duplicates an entry.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

/// A total preorder over `T`
pub trait TotalPreorder<T: ?Sized> {
    /// Compares two entries
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns true if `a` is strictly before `b`
    fn lt(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Returns true if `a` is not after `b`
    fn le(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) != Ordering::Greater
    }

    /// Returns true if neither entry is before the other
    fn is_equivalent(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}

impl<T: ?Sized, F> TotalPreorder<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// A zero-sized order that delegates to the [`Ord`] implementation of `T`
pub struct NaturalOrder<T: ?Sized>(PhantomData<fn(&T)>);

impl<T: ?Sized> NaturalOrder<T> {
    /// Creates the natural order
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized> Default for NaturalOrder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for NaturalOrder<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for NaturalOrder<T> {}

impl<T: ?Sized> PartialEq for NaturalOrder<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T: ?Sized> Eq for NaturalOrder<T> {}

impl<T: ?Sized> fmt::Debug for NaturalOrder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NaturalOrder")
    }
}

impl<T: ?Sized + Ord> TotalPreorder<T> for NaturalOrder<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Reverses another order, turning the machine into a maximum-first drain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseOrder<O>(pub O);

impl<T: ?Sized, O: TotalPreorder<T>> TotalPreorder<T> for ReverseOrder<O> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Case-insensitive lexicographic order over strings
///
/// Characters are compared pairwise after folding each one to upper case and then to
/// lower case; when one string is a folded prefix of the other, the shorter comes
/// first. `"Blue"`, `"blue"` and `"BLUE"` are equivalent. Only one-to-one case
/// mappings fold, so `"ß"` and `"s"` stay distinct.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CaseInsensitiveOrder;

impl CaseInsensitiveOrder {
    fn fold(c: char) -> char {
        let upper = Self::simple_mapping(c, c.to_uppercase());
        Self::simple_mapping(upper, upper.to_lowercase())
    }

    /// Keeps `c` unless its case mapping is a single char
    fn simple_mapping(c: char, mut mapped: impl Iterator<Item = char>) -> char {
        match (mapped.next(), mapped.next()) {
            (Some(m), None) => m,
            _ => c,
        }
    }
}

impl<T: ?Sized + AsRef<str>> TotalPreorder<T> for CaseInsensitiveOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        let a = a.as_ref().chars().map(Self::fold);
        let b = b.as_ref().chars().map(Self::fold);
        a.cmp(b)
    }
}

/// Builds an order that compares entries by a key extracted with `key`
///
/// ```rust
/// use sorting_machine::order::{by_key, TotalPreorder};
/// use std::cmp::Ordering;
///
/// let by_len = by_key(|s: &&str| s.len());
/// assert_eq!(by_len.compare(&"abc", &"de"), Ordering::Greater);
/// assert!(by_len.is_equivalent(&"ab", &"cd"));
/// ```
pub fn by_key<T: ?Sized, K: Ord>(key: impl Fn(&T) -> K) -> impl Fn(&T, &T) -> Ordering {
    move |a, b| key(a).cmp(&key(b))
}
