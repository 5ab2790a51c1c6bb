use std::cmp::Ordering;

use rand::{
    seq::{index, IndexedRandom},
    Rng,
};

use super::{Collection, List};
use crate::{
    config::{NullOrder, SortConfig, SortOrder},
    error::{empty_collection, invalid_argument},
    types::Value,
    Error, Result,
};

impl<K, V> Collection<K, V> {
    /// The first value, if any.
    #[inline]
    pub fn first(&self) -> Option<&V> {
        self.items.first().map(|(_, v)| v)
    }

    /// The first value for which `predicate(value, key)` holds.
    pub fn first_where<F>(&self, mut predicate: F) -> Option<&V>
    where
        F: FnMut(&V, &K) -> bool,
    {
        self.items.iter().find(|(k, v)| predicate(v, k)).map(|(_, v)| v)
    }

    /// The last value, if any.
    #[inline]
    pub fn last(&self) -> Option<&V> {
        self.items.last().map(|(_, v)| v)
    }

    /// The last value for which `predicate(value, key)` holds.
    pub fn last_where<F>(&self, mut predicate: F) -> Option<&V>
    where
        F: FnMut(&V, &K) -> bool,
    {
        self.items.iter().rev().find(|(k, v)| predicate(v, k)).map(|(_, v)| v)
    }

    /// Like [`first`](Collection::first), but an empty collection is an
    /// [`Error::EmptyCollection`].
    pub fn first_or_fail(&self) -> Result<&V> {
        self.first().ok_or_else(|| empty_collection("first_or_fail"))
    }

    /// Like [`first_where`](Collection::first_where), but no match is an
    /// [`Error::ItemNotFound`].
    pub fn first_where_or_fail<F>(&self, predicate: F) -> Result<&V>
    where
        F: FnMut(&V, &K) -> bool,
    {
        self.first_where(predicate).ok_or_else(|| {
            tracing::debug!(len = self.len(), "no item matched");
            Error::ItemNotFound
        })
    }

    /// A value chosen uniformly at random.
    ///
    /// Fails with [`Error::EmptyCollection`] if there is nothing to choose
    /// from.
    #[inline]
    pub fn random(&self) -> Result<&V> {
        self.random_with(&mut rand::rng())
    }

    /// Like [`random`](Collection::random), drawing from `rng`.
    pub fn random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&V> {
        self.items.choose(rng).map(|(_, v)| v).ok_or_else(|| empty_collection("random"))
    }
}

impl<K: Clone, V: Clone> Collection<K, V> {
    /// `n` distinct elements chosen at random, in source order, reindexed.
    ///
    /// Fails with [`Error::InvalidArgument`] if the collection has fewer than
    /// `n` elements.
    #[inline]
    pub fn random_many(&self, n: usize) -> Result<List<V>> {
        self.random_many_with(n, &mut rand::rng())
    }

    /// Like [`random_many`](Collection::random_many), drawing from `rng`.
    pub fn random_many_with<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<List<V>> {
        if n > self.len() {
            return Err(invalid_argument(
                "random_many",
                format!("requested {n} items but only {} are available", self.len()),
            ));
        }
        let mut positions = index::sample(rng, self.len(), n).into_vec();
        positions.sort_unstable();
        Ok(List::from_values(positions.into_iter().map(|i| self.items[i].1.clone())))
    }

    /// Sorts by `compare`, stably. Keys stay with their values.
    pub fn sort_by<F>(&self, mut compare: F) -> Collection<K, V>
    where
        F: FnMut(&V, &V) -> Ordering,
    {
        let mut items = self.items.clone();
        items.sort_by(|(_, a), (_, b)| compare(a, b));
        Collection::from_unique(items)
    }

    /// Sorts ascending by `f(value, key)`, stably. Keys stay with their
    /// values.
    pub fn sort_by_key<T, F>(&self, mut f: F) -> Collection<K, V>
    where
        T: PartialOrd,
        F: FnMut(&V, &K) -> T,
    {
        let mut items = self.items.clone();
        items.sort_by(|(ka, a), (kb, b)| f(a, ka).partial_cmp(&f(b, kb)).unwrap_or(Ordering::Equal));
        Collection::from_unique(items)
    }

    /// Sorts ascending by key.
    pub fn sort_keys(&self) -> Collection<K, V>
    where
        K: Ord,
    {
        let mut items = self.items.clone();
        items.sort_by(|(a, _), (b, _)| a.cmp(b));
        Collection::from_unique(items)
    }

    /// The pairs in reverse order. Keys stay with their values, so reversing
    /// twice gives back the original.
    pub fn reverse(&self) -> Collection<K, V> {
        Collection::from_unique(self.items.iter().rev().cloned().collect())
    }
}

impl<K: Clone, V: Clone + PartialOrd> Collection<K, V> {
    /// Sorts ascending, stably. Keys stay with their values.
    ///
    /// Values that do not compare (such as `NaN`) are treated as equal to
    /// their neighbours.
    ///
    /// ```rust
    /// use ordcoll::collect;
    ///
    /// let sorted = collect([3, 1, 2]).sort();
    /// assert_eq!(sorted.all(), &[(1, 1), (2, 2), (0, 3)]);
    /// ```
    pub fn sort(&self) -> Collection<K, V> {
        self.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
    }

    /// Sorts descending, stably. Keys stay with their values.
    pub fn sort_desc(&self) -> Collection<K, V> {
        self.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal))
    }
}

impl<K: Clone> Collection<K, Value> {
    /// Sorts dynamic values as `config` says.
    ///
    /// Nulls are placed first or last regardless of the sort order.
    ///
    /// ```rust
    /// use ordcoll::{collect, config::{NullOrder, SortConfig, SortOrder}, types::Value};
    ///
    /// let config = SortConfig::default().order(SortOrder::Desc).null_order(NullOrder::NullsLast);
    /// let sorted = collect([Value::from(1), Value::Null, Value::from(3)]).sort_with(&config);
    /// assert_eq!(sorted.to_vec(), vec![Value::from(3), Value::from(1), Value::Null]);
    /// ```
    pub fn sort_with(&self, config: &SortConfig) -> Collection<K, Value> {
        let (order, null_order) = (config.get_order(), config.get_null_order());
        tracing::trace!(%config, len = self.len(), "sorting values");
        self.sort_by(|a, b| match (a.is_null(), b.is_null()) {
            (true, true) => Ordering::Equal,
            (true, false) if null_order == NullOrder::NullsFirst => Ordering::Less,
            (true, false) => Ordering::Greater,
            (false, true) if null_order == NullOrder::NullsFirst => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                let ordering = a.partial_cmp(b).unwrap_or(Ordering::Equal);
                match order {
                    SortOrder::Asc => ordering,
                    SortOrder::Desc => ordering.reverse(),
                }
            }
        })
    }
}
