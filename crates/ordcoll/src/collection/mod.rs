//! The ordered key/value [`Collection`].
//!
//! A collection is a sequence of `(key, value)` pairs with unique keys.
//! Iteration order is insertion order until an operation such as
//! [`sort`](Collection::sort) or [`reverse`](Collection::reverse) produces a
//! reordered copy.
//!
//! List-like collections use `usize` keys `0..n` (see [`List`]). Every
//! operation documents whether it *preserves* the source keys or *reindexes*
//! its result to fresh sequential keys; reindexing operations always return a
//! [`List`].
//!
//! All operations that return a new collection borrow the source and clone
//! the elements they keep, so the source is never modified. The in-place
//! mutators are [`push`](Collection::push), [`push_all`](Collection::push_all),
//! [`put`](Collection::put), [`pop`](Collection::pop) and
//! [`forget`](Collection::forget).

use std::{slice, vec};

use crate::{error::empty_collection, Result};

pub use self::serialize::CollectionKey;
pub use self::transform::{IntoSequence, Spread};

mod aggregate;
mod combine;
mod filter;
mod group;
mod query;
mod serialize;
mod transform;
mod window;

/// A collection keyed by sequential positions `0..n`.
pub type List<V> = Collection<usize, V>;

/// An ordered mapping from unique keys `K` to values `V`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collection<K, V> {
    items: Vec<(K, V)>,
}

impl<K, V> Default for Collection<K, V> {
    fn default() -> Self {
        Collection { items: Vec::new() }
    }
}

impl<K, V> Collection<K, V> {
    /// Create an empty collection.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps pairs whose keys are already known to be unique.
    #[inline]
    pub(crate) fn from_unique(items: Vec<(K, V)>) -> Self {
        Collection { items }
    }

    /// The ordered `(key, value)` pairs.
    #[inline]
    pub fn all(&self) -> &[(K, V)] {
        &self.items
    }

    /// Iterate over the `(key, value)` pairs in order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, (K, V)> {
        self.items.iter()
    }

    /// Iterate over the values in order.
    #[inline]
    pub fn values_iter(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.items.iter().map(|(_, v)| v)
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Alias of [`len`](Collection::len).
    #[inline]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the collection has at least one element.
    #[inline]
    pub fn is_not_empty(&self) -> bool {
        !self.items.is_empty()
    }

    /// Whether the collection has exactly one element.
    #[inline]
    pub fn contains_one_item(&self) -> bool {
        self.items.len() == 1
    }

    /// Removes and returns the last value.
    ///
    /// Fails with [`Error::EmptyCollection`](crate::Error::EmptyCollection) if
    /// there is nothing to remove; the collection is left as it was.
    pub fn pop(&mut self) -> Result<V> {
        self.items.pop().map(|(_, v)| v).ok_or_else(|| empty_collection("pop"))
    }

    /// Consumes the collection, returning its values in order.
    #[inline]
    pub fn into_values(self) -> Vec<V> {
        self.items.into_iter().map(|(_, v)| v).collect()
    }
}

/// Key equality for lookups and grouping. Keys that are not equal to
/// themselves, such as a NaN float, all count as one key.
#[inline]
pub(crate) fn same_key<K: PartialEq>(a: &K, b: &K) -> bool {
    #[allow(clippy::eq_op)]
    let unordered = a != a && b != b;
    a == b || unordered
}

impl<K: PartialEq, V> Collection<K, V> {
    /// Build a collection from explicit `(key, value)` pairs.
    ///
    /// A key given more than once keeps its first position and its last value.
    /// NaN keys all count as the same key.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        pairs.into_iter().collect()
    }

    /// Returns the value stored under `key`.
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.items.iter().find(|(k, _)| same_key(k, key)).map(|(_, v)| v)
    }

    /// Whether a value is stored under `key`.
    #[inline]
    pub fn has(&self, key: &K) -> bool {
        self.items.iter().any(|(k, _)| same_key(k, key))
    }

    /// Stores `value` under `key`, in place. An existing key keeps its
    /// position; a new key is appended. Returns the replaced value.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        match self.items.iter_mut().find(|(k, _)| same_key(k, &key)) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.items.push((key, value));
                None
            }
        }
    }

    /// Removes the value stored under `key`, in place.
    pub fn forget(&mut self, key: &K) -> Option<V> {
        let position = self.items.iter().position(|(k, _)| same_key(k, key))?;
        Some(self.items.remove(position).1)
    }
}

impl<K: Clone, V: Clone> Collection<K, V> {
    /// The values, reindexed to `0..n`.
    pub fn values(&self) -> List<V> {
        List::from_values(self.values_iter().cloned())
    }

    /// The keys, reindexed to `0..n`.
    pub fn keys(&self) -> List<K> {
        List::from_values(self.items.iter().map(|(k, _)| k.clone()))
    }

    /// The values in order, as a `Vec`.
    pub fn to_vec(&self) -> Vec<V> {
        self.values_iter().cloned().collect()
    }
}

impl<V> Collection<usize, V> {
    /// Build a list-like collection with keys `0..n`.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        Collection {
            items: values.into_iter().enumerate().collect(),
        }
    }

    fn next_index(&self) -> usize {
        self.items.iter().map(|(k, _)| *k).max().map_or(0, |k| k + 1)
    }

    /// Appends `value` in place, keyed one past the largest existing index.
    pub fn push(&mut self, value: V) -> &mut Self {
        let key = self.next_index();
        self.items.push((key, value));
        self
    }

    /// Appends every value in argument order, in place.
    pub fn push_all<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
    {
        let mut key = self.next_index();
        for value in values {
            self.items.push((key, value));
            key += 1;
        }
        self
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for Collection<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut collection = Collection::new();
        for (k, v) in iter {
            collection.put(k, v);
        }
        collection
    }
}

impl<K, V> IntoIterator for Collection<K, V> {
    type Item = (K, V);
    type IntoIter = vec::IntoIter<(K, V)>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a Collection<K, V> {
    type Item = &'a (K, V);
    type IntoIter = slice::Iter<'a, (K, V)>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod test {
    use super::{Collection, List};
    use crate::{collect, Error, Result};

    #[test]
    fn test_create() {
        let collection = collect([1, 2, 3]);
        assert_eq!(collection.to_vec(), vec![1, 2, 3]);
        assert_eq!(collection.all(), &[(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn test_for_each_key_is_position() {
        let collection = collect(1..=9);
        for (key, value) in &collection {
            assert_eq!(*key + 1, *value);
        }
    }

    #[test]
    fn test_push_pop() -> Result<()> {
        let mut collection = List::new();
        collection.push_all([1, 2, 3]);
        assert_eq!(collection.to_vec(), vec![1, 2, 3]);

        assert_eq!(collection.pop()?, 3);
        assert_eq!(collection.to_vec(), vec![1, 2]);

        collection.push(4).push(5);
        assert_eq!(collection.all(), &[(0, 1), (1, 2), (2, 4), (3, 5)]);
        Ok(())
    }

    #[test]
    fn test_push_after_gap_continues_from_largest_key() {
        let mut collection = collect([1, 2, 3, 4]).filter(|v, _| v % 2 == 0);
        collection.push(6);
        assert_eq!(collection.all(), &[(1, 2), (3, 4), (4, 6)]);
    }

    #[test]
    fn test_pop_empty_leaves_state_usable() {
        let mut collection: List<i32> = List::new();
        assert_eq!(collection.pop(), Err(Error::EmptyCollection));
        assert!(collection.is_empty());
        collection.push(1);
        assert_eq!(collection.pop(), Ok(1));
        assert_eq!(collection.pop(), Err(Error::EmptyCollection));
    }

    #[test]
    fn test_from_pairs_duplicate_keys() {
        let collection = Collection::from_pairs([("a", 1), ("b", 2), ("a", 3)]);
        assert_eq!(collection.all(), &[("a", 3), ("b", 2)]);
    }

    #[test]
    fn test_get_put_forget() {
        let mut scores = Collection::from_pairs([("Felix", 100), ("Xilef", 70)]);
        assert_eq!(scores.get(&"Felix"), Some(&100));
        assert!(scores.has(&"Xilef"));
        assert!(!scores.has(&"Orevas"));

        assert_eq!(scores.put("Xilef", 75), Some(70));
        assert_eq!(scores.put("Orevas", 90), None);
        assert_eq!(scores.all(), &[("Felix", 100), ("Xilef", 75), ("Orevas", 90)]);

        assert_eq!(scores.forget(&"Felix"), Some(100));
        assert_eq!(scores.forget(&"Felix"), None);
        assert_eq!(scores.keys().to_vec(), vec!["Xilef", "Orevas"]);
    }

    #[test]
    fn test_existence() {
        let collection = collect(1..=9);
        assert!(collection.is_not_empty());
        assert!(!collection.is_empty());
        assert!(!collection.contains_one_item());
        assert!(collect(["one"]).contains_one_item());
        assert!(List::<i32>::new().is_empty());
    }

    #[test]
    fn test_values_reindexes() {
        let scores = Collection::from_pairs([("Felix", 100), ("Xilef", 70)]);
        assert_eq!(scores.values().all(), &[(0, 100), (1, 70)]);
        assert_eq!(scores.count(), 2);
        assert_eq!(scores.into_values(), vec![100, 70]);
    }

    #[test]
    fn test_round_trip() {
        let items = vec!["a", "b", "c"];
        assert_eq!(collect(items.clone()).to_vec(), items);
    }
}
