use super::Collection;

impl<K: Clone, V: Clone> Collection<K, V> {
    /// Keeps the pairs for which `predicate(value, key)` holds.
    ///
    /// Keys are preserved, so a filtered list may have gaps in its indices:
    /// filtering `[1, 2, 3, 4]` down to the even numbers leaves them under keys
    /// `1` and `3`. Call [`values`](Collection::values) to reindex.
    pub fn filter<F>(&self, mut predicate: F) -> Collection<K, V>
    where
        F: FnMut(&V, &K) -> bool,
    {
        Collection::from_unique(self.items.iter().filter(|(k, v)| predicate(v, k)).cloned().collect())
    }

    /// Keeps the pairs for which `predicate(value, key)` does not hold. Keys
    /// are preserved.
    pub fn reject<F>(&self, mut predicate: F) -> Collection<K, V>
    where
        F: FnMut(&V, &K) -> bool,
    {
        self.filter(|v, k| !predicate(v, k))
    }

    /// Splits into the pairs that satisfy `predicate(value, key)` and those
    /// that do not, each in source order with its keys preserved.
    pub fn partition<F>(&self, mut predicate: F) -> (Collection<K, V>, Collection<K, V>)
    where
        F: FnMut(&V, &K) -> bool,
    {
        let (matched, unmatched): (Vec<_>, Vec<_>) = self.items.iter().cloned().partition(|(k, v)| predicate(v, k));
        (Collection::from_unique(matched), Collection::from_unique(unmatched))
    }

    /// Keeps the first occurrence of every value. Keys are preserved.
    pub fn unique(&self) -> Collection<K, V>
    where
        V: PartialEq,
    {
        let mut kept: Vec<(K, V)> = Vec::new();
        for (k, v) in &self.items {
            if !kept.iter().any(|(_, seen)| seen == v) {
                kept.push((k.clone(), v.clone()));
            }
        }
        Collection::from_unique(kept)
    }
}

impl<K, V> Collection<K, V> {
    /// Whether any value equals `value`.
    #[inline]
    pub fn contains(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values_iter().any(|v| v == value)
    }

    /// Whether `predicate(value, key)` holds for any pair.
    #[inline]
    pub fn contains_where<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&V, &K) -> bool,
    {
        self.items.iter().any(|(k, v)| predicate(v, k))
    }
}
