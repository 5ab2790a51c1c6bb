use super::{Collection, List};
use crate::{Error, Result};

impl<K: Clone, V: Clone> Collection<K, V> {
    /// Pairs every value with the value at the same position in `other`.
    ///
    /// The result always has the length of `self`; positions that `other`
    /// does not reach are paired with `None`. The result is reindexed.
    pub fn zip<K2, W: Clone>(&self, other: &Collection<K2, W>) -> List<(V, Option<W>)> {
        let mut others = other.values_iter();
        List::from_values(self.values_iter().map(|v| (v.clone(), others.next().cloned())))
    }

    /// Appends the values of `other` after the values of `self`, without
    /// removing duplicates. The result is reindexed.
    pub fn concat<K2>(&self, other: &Collection<K2, V>) -> List<V> {
        List::from_values(self.values_iter().chain(other.values_iter()).cloned())
    }

    /// Uses the values of `self` as keys for the values of `values`, paired by
    /// position.
    ///
    /// Fails with [`Error::LengthMismatch`] unless both collections have the
    /// same length. A value of `self` occurring twice keeps its first
    /// position and takes the later paired value.
    ///
    /// ```rust
    /// use ordcoll::collect;
    ///
    /// let fields = collect(["name", "country"]);
    /// let person = fields.combine(&collect(["Felix", "Wakanda"]))?;
    /// assert_eq!(person.get(&"country"), Some(&"Wakanda"));
    /// # Ok::<(), ordcoll::Error>(())
    /// ```
    pub fn combine<K2, W: Clone>(&self, values: &Collection<K2, W>) -> Result<Collection<V, W>>
    where
        V: PartialEq,
    {
        if self.len() != values.len() {
            tracing::debug!(keys = self.len(), values = values.len(), "combine length mismatch");
            return Err(Error::LengthMismatch(self.len(), values.len()));
        }
        Ok(self.values_iter().cloned().zip(values.values_iter().cloned()).collect())
    }

    /// Overlays `other` onto `self`: values under keys both share are replaced
    /// in place, keys only `other` has are appended.
    pub fn merge(&self, other: &Collection<K, V>) -> Collection<K, V>
    where
        K: PartialEq,
    {
        let mut merged = self.clone();
        for (k, v) in other {
            merged.put(k.clone(), v.clone());
        }
        merged
    }
}
