use super::{Collection, List};
use crate::{error::invalid_argument, Result};

impl<K: Clone, V: Clone> Collection<K, V> {
    fn window(&self, start: usize, end: usize) -> Collection<K, V> {
        let end = end.min(self.len());
        let start = start.min(end);
        Collection::from_unique(self.items[start..end].to_vec())
    }

    /// The pairs from position `offset` on, at most `length` of them when a
    /// length is given. Keys are preserved.
    ///
    /// An offset past the end gives an empty collection.
    pub fn slice(&self, offset: usize, length: Option<usize>) -> Collection<K, V> {
        let end = match length {
            Some(length) => offset.saturating_add(length),
            None => self.len(),
        };
        self.window(offset, end)
    }

    /// The first `n` pairs, or all of them if there are fewer. Keys are
    /// preserved.
    #[inline]
    pub fn take(&self, n: usize) -> Collection<K, V> {
        self.window(0, n)
    }

    /// The last `n` pairs, or all of them if there are fewer. Keys are
    /// preserved.
    #[inline]
    pub fn take_last(&self, n: usize) -> Collection<K, V> {
        self.window(self.len().saturating_sub(n), self.len())
    }

    /// Leading pairs up to, not including, the first one where
    /// `predicate(value, key)` fails.
    pub fn take_while<F>(&self, mut predicate: F) -> Collection<K, V>
    where
        F: FnMut(&V, &K) -> bool,
    {
        let end = self.items.iter().position(|(k, v)| !predicate(v, k)).unwrap_or(self.len());
        self.window(0, end)
    }

    /// Leading pairs up to, not including, the first one where
    /// `predicate(value, key)` holds.
    pub fn take_until<F>(&self, mut predicate: F) -> Collection<K, V>
    where
        F: FnMut(&V, &K) -> bool,
    {
        self.take_while(|v, k| !predicate(v, k))
    }

    /// Everything but the first `n` pairs. Keys are preserved.
    #[inline]
    pub fn skip(&self, n: usize) -> Collection<K, V> {
        self.window(n, self.len())
    }

    /// Drops leading pairs while `predicate(value, key)` holds and keeps the
    /// rest, including later pairs that would satisfy it again.
    pub fn skip_while<F>(&self, mut predicate: F) -> Collection<K, V>
    where
        F: FnMut(&V, &K) -> bool,
    {
        let start = self.items.iter().position(|(k, v)| !predicate(v, k)).unwrap_or(self.len());
        self.window(start, self.len())
    }

    /// Drops leading pairs until `predicate(value, key)` first holds.
    pub fn skip_until<F>(&self, mut predicate: F) -> Collection<K, V>
    where
        F: FnMut(&V, &K) -> bool,
    {
        self.skip_while(|v, k| !predicate(v, k))
    }

    /// Splits into consecutive chunks of `size` pairs; the last chunk holds
    /// whatever is left. Chunks keep the source keys.
    ///
    /// Fails with [`Error::InvalidArgument`](crate::Error::InvalidArgument)
    /// when `size` is zero.
    ///
    /// ```rust
    /// use ordcoll::collect;
    ///
    /// let chunks = collect(1..=10).chunk(3)?;
    /// assert_eq!(chunks.len(), 4);
    /// assert_eq!(chunks.get(&3).map(|c| c.to_vec()), Some(vec![10]));
    /// # Ok::<(), ordcoll::Error>(())
    /// ```
    pub fn chunk(&self, size: usize) -> Result<List<Collection<K, V>>> {
        if size == 0 {
            return Err(invalid_argument("chunk", "chunk size must be at least 1"));
        }
        Ok(List::from_values(
            self.items.chunks(size).map(|chunk| Collection::from_unique(chunk.to_vec())),
        ))
    }
}
