pub mod batch_delete;
pub mod batch_insert;

use std::fmt::Debug;
use std::slice;

use crate::error::{Error, Result};
use crate::options::Options;
use crate::types::Element;

/// An ordered, contiguous collection of key/value elements.
///
/// Invariant: `entries[i].key <= entries[i + 1].key` for every adjacent pair.
/// Duplicate keys are tolerated, but the batch operations assume each
/// selected key occurs exactly once.
///
/// ```text
///   index:  0     1     2     3     4
///   key:   [ 3 ] [ 7 ] [ 8 ] [12 ] [40 ]
///           ^ lookup(&8) = Some(2), binary search, O(log n)
/// ```
///
/// Compared to a balanced tree: lookups touch far fewer cache lines, but a
/// single insert or delete shifts the tail. The batch operations amortize
/// that shift across the whole selection.
#[derive(Debug, Clone)]
pub struct SortedVec<K, V> {
    entries: Vec<Element<K, V>>,
    options: Options,
}

impl<K, V> Default for SortedVec<K, V> {
    fn default() -> Self {
        SortedVec {
            entries: Vec::new(),
            options: Options::default(),
        }
    }
}

impl<K: Ord, V> SortedVec<K, V> {
    /// Create an empty sequence with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty sequence with the given options.
    pub fn with_options(options: Options) -> Self {
        SortedVec {
            entries: Vec::new(),
            options,
        }
    }

    /// Build from elements in any order. Sorts once.
    pub fn from_unsorted(mut entries: Vec<Element<K, V>>) -> Self {
        entries.sort();
        SortedVec {
            entries,
            options: Options::default(),
        }
    }

    /// Adopt elements that are already in key order.
    pub fn from_sorted(entries: Vec<Element<K, V>>) -> Result<Self> {
        if let Some(position) = first_unsorted(&entries) {
            return Err(Error::NotSorted { position });
        }
        Ok(SortedVec {
            entries,
            options: Options::default(),
        })
    }

    /// Replace the options carried by this sequence.
    pub fn set_options(&mut self, options: Options) {
        self.options = options;
    }

    pub fn options(&self) -> Options {
        self.options
    }

    /// Position of the first element with this key, or None.
    ///
    /// Lower-bound binary search, so with duplicate keys the leftmost
    /// occurrence wins.
    pub fn lookup(&self, key: &K) -> Option<usize> {
        let pos = lower_bound(&self.entries, key);
        match self.entries.get(pos) {
            Some(e) if e.key == *key => Some(pos),
            _ => None,
        }
    }

    /// Value stored under `key`, if any.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.lookup(key).map(|pos| &self.entries[pos].value)
    }

    /// Membership by linear scan.
    ///
    /// Deliberately avoids binary search so tests can check the search-based
    /// operations without trusting the same assumptions.
    pub fn contains_linear(&self, key: &K) -> bool {
        self.entries.iter().any(|e| e.key == *key)
    }

    /// Append then re-sort the whole buffer. O(n log n); the baseline that
    /// batch insert is measured against.
    pub fn point_insert(&mut self, element: Element<K, V>) {
        self.entries.push(element);
        self.entries.sort();
    }

    /// Remove the element at `position`, shifting the tail down by one. O(n).
    pub fn point_delete(&mut self, position: usize) -> Result<Element<K, V>> {
        let len = self.entries.len();
        if position >= len {
            return Err(Error::PositionOutOfRange { position, len });
        }
        Ok(self.entries.remove(position))
    }

    /// Look up `key` and remove it with a point delete.
    pub fn delete_key(&mut self, key: &K) -> Result<Element<K, V>>
    where
        K: Debug,
    {
        match self.lookup(key) {
            Some(pos) => self.point_delete(pos),
            None => Err(Error::KeyNotFound(format!("{key:?}"))),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over elements in key order.
    pub fn iter(&self) -> slice::Iter<'_, Element<K, V>> {
        self.entries.iter()
    }

    /// Keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(|e| &e.key)
    }

    pub fn as_slice(&self) -> &[Element<K, V>] {
        &self.entries
    }

    pub fn into_vec(self) -> Vec<Element<K, V>> {
        self.entries
    }

    /// Check the ordering invariant. O(n).
    pub fn is_sorted(&self) -> bool {
        first_unsorted(&self.entries).is_none()
    }
}

impl<K: Ord, V> FromIterator<Element<K, V>> for SortedVec<K, V> {
    fn from_iter<I: IntoIterator<Item = Element<K, V>>>(iter: I) -> Self {
        Self::from_unsorted(iter.into_iter().collect())
    }
}

impl<'a, K, V> IntoIterator for &'a SortedVec<K, V> {
    type Item = &'a Element<K, V>;
    type IntoIter = slice::Iter<'a, Element<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Index of the first element whose key is not less than `key`.
pub(crate) fn lower_bound<K: Ord, V>(entries: &[Element<K, V>], key: &K) -> usize {
    entries.partition_point(|e| e.key < *key)
}

/// Index of the first element that is smaller than its predecessor.
fn first_unsorted<K: Ord, V>(entries: &[Element<K, V>]) -> Option<usize> {
    entries
        .windows(2)
        .position(|w| w[0].key > w[1].key)
        .map(|i| i + 1)
}
