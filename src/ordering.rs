//! Ordering strategies and a sorted set that takes one at construction.
//!
//! `BTreeSet<T>` can only sort by `T: Ord`. When a container needs a
//! different order for the same type, the order is supplied as a
//! `Comparator` type parameter, and it wins over the type's own `Ord`.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use crate::records::Book;

// =============================================================================
// Comparison strategies
// =============================================================================

/// A stateless total order over `T`.
pub trait Comparator<T> {
    fn compare(a: &T, b: &T) -> Ordering;
}

/// Defers to the element's own `Ord` implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    fn compare(a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders books by title, then by code.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookTitleCode;

impl Comparator<Book> for BookTitleCode {
    fn compare(a: &Book, b: &Book) -> Ordering {
        a.title()
            .cmp(b.title())
            .then_with(|| a.code().cmp(&b.code()))
    }
}

// =============================================================================
// Sorted set with an injected comparator
// =============================================================================

/// A set kept sorted by `C`.
///
/// Duplicate detection also goes through `C`: an element is rejected when
/// `C::compare` returns `Equal` against one already stored, even if the two
/// differ under `PartialEq`. Lookups are binary searches, inserts shift the
/// tail of the backing vector.
pub struct ComparatorSet<T, C = NaturalOrder> {
    data: Vec<T>,
    order: PhantomData<C>,
}

impl<T, C: Comparator<T>> ComparatorSet<T, C> {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            order: PhantomData,
        }
    }

    fn search(&self, value: &T) -> Result<usize, usize> {
        self.data.binary_search_by(|probe| C::compare(probe, value))
    }

    /// Returns `false` and drops `value` if an equal element is already present.
    pub fn insert(&mut self, value: T) -> bool {
        match self.search(&value) {
            Ok(_) => false,
            Err(idx) => {
                self.data.insert(idx, value);
                true
            }
        }
    }

    pub fn remove(&mut self, value: &T) -> bool {
        if let Ok(idx) = self.search(value) {
            self.data.remove(idx);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_ok()
    }

    pub fn get(&self, value: &T) -> Option<&T> {
        self.search(value).ok().map(|idx| &self.data[idx])
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn first(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T, C: Comparator<T>> Default for ComparatorSet<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, C> Clone for ComparatorSet<T, C> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            order: PhantomData,
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for ComparatorSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.data.iter()).finish()
    }
}

impl<T, C: Comparator<T>> Extend<T> for ComparatorSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C: Comparator<T>> FromIterator<T> for ComparatorSet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a, T, C> IntoIterator for &'a ComparatorSet<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T, C> IntoIterator for ComparatorSet<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
