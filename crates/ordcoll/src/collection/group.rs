use std::fmt::Display;

use super::{same_key, Collection, List};
use crate::{
    error::invalid_argument,
    types::{Record, Value},
    Result,
};

/// Buckets `(key, item)` pairs under `group`, creating groups in first-seen
/// order.
fn bucket<G: PartialEq, K, T>(groups: &mut Vec<(G, Vec<(K, T)>)>, group: G, entry: (K, T)) {
    match groups.iter_mut().find(|(g, _)| same_key(g, &group)) {
        Some((_, entries)) => entries.push(entry),
        None => groups.push((group, vec![entry])),
    }
}

/// Buckets items under `group`, reindexing each group to `0..n`.
fn bucket_reindexed<G: PartialEq, T>(groups: &mut Vec<(G, Vec<(usize, T)>)>, group: G, item: T) {
    match groups.iter_mut().find(|(g, _)| same_key(g, &group)) {
        Some((_, entries)) => entries.push((entries.len(), item)),
        None => groups.push((group, vec![(0, item)])),
    }
}

fn into_groups<G, K, T>(groups: Vec<(G, Vec<(K, T)>)>) -> Collection<G, Collection<K, T>> {
    tracing::trace!(groups = groups.len(), "grouped");
    Collection::from_unique(
        groups
            .into_iter()
            .map(|(g, entries)| (g, Collection::from_unique(entries)))
            .collect(),
    )
}

impl<K: Clone, V: Clone> Collection<K, V> {
    /// Groups the values by `f(value, key)`.
    ///
    /// Groups appear in the order their key is first produced, and each group
    /// holds its values in source order, reindexed to `0..n`. NaN group keys
    /// all land in one group.
    pub fn group_by<G, F>(&self, mut f: F) -> Collection<G, List<V>>
    where
        G: PartialEq,
        F: FnMut(&V, &K) -> G,
    {
        let mut groups = Vec::new();
        for (k, v) in &self.items {
            bucket_reindexed(&mut groups, f(v, k), v.clone());
        }
        into_groups(groups)
    }

    /// Like [`group_by`](Collection::group_by), but each group keeps the
    /// source keys of its values.
    pub fn group_by_preserving_keys<G, F>(&self, mut f: F) -> Collection<G, Collection<K, V>>
    where
        G: PartialEq,
        F: FnMut(&V, &K) -> G,
    {
        let mut groups = Vec::new();
        for (k, v) in &self.items {
            bucket(&mut groups, f(v, k), (k.clone(), v.clone()));
        }
        into_groups(groups)
    }

    /// Maps every pair to a `(group, item)` pair and gathers the items by
    /// group.
    ///
    /// Groups appear in the order they are first produced; each group holds
    /// its items in source order, reindexed to `0..n`.
    pub fn map_to_groups<G, R, F>(&self, mut f: F) -> Collection<G, List<R>>
    where
        G: PartialEq,
        F: FnMut(&V, &K) -> (G, R),
    {
        let mut groups = Vec::new();
        for (k, v) in &self.items {
            let (group, item) = f(v, k);
            bucket_reindexed(&mut groups, group, item);
        }
        into_groups(groups)
    }

    /// Re-keys every value by `f(value, key)`. When two values produce the
    /// same key the later value wins, at the earlier position.
    pub fn key_by<G, F>(&self, mut f: F) -> Collection<G, V>
    where
        G: PartialEq,
        F: FnMut(&V, &K) -> G,
    {
        self.items.iter().map(|(k, v)| (f(v, k), v.clone())).collect()
    }
}

impl<K: Clone, V: Clone + Record> Collection<K, V> {
    /// Groups record values by the value of their field `name`.
    ///
    /// Fails with [`Error::InvalidArgument`](crate::Error::InvalidArgument) if
    /// any value has no such field.
    ///
    /// ```rust
    /// use ordcoll::{collect, record, types::Value};
    ///
    /// let people = collect([
    ///     record! { "name" => "Felix", "department" => "IT" },
    ///     record! { "name" => "Budi", "department" => "HR" },
    /// ]);
    /// let departments = people.group_by_field("department")?;
    /// assert_eq!(departments.keys().to_vec(), vec![Value::from("IT"), Value::from("HR")]);
    /// # Ok::<(), ordcoll::Error>(())
    /// ```
    pub fn group_by_field(&self, name: &str) -> Result<Collection<Value, List<V>>> {
        let mut groups = Vec::new();
        for (position, (_, v)) in self.items.iter().enumerate() {
            let group = v.field(name).ok_or_else(|| missing_field("group_by_field", name, position))?;
            bucket_reindexed(&mut groups, group.clone(), v.clone());
        }
        Ok(into_groups(groups))
    }

    /// The value of field `name` of every record. Keys are preserved.
    ///
    /// Fails with [`Error::InvalidArgument`](crate::Error::InvalidArgument) if
    /// any value has no such field.
    pub fn pluck(&self, name: &str) -> Result<Collection<K, Value>> {
        let mut items = Vec::with_capacity(self.len());
        for (position, (k, v)) in self.items.iter().enumerate() {
            let field = v.field(name).ok_or_else(|| missing_field("pluck", name, position))?;
            items.push((k.clone(), field.clone()));
        }
        Ok(Collection::from_unique(items))
    }
}

#[cold]
fn missing_field(op: &'static str, name: &str, position: usize) -> crate::Error {
    invalid_argument(op, format!("item {position} has no field {name}"))
}

impl<K, V: Display> Collection<K, V> {
    /// Joins the values with `glue`.
    #[inline]
    pub fn join(&self, glue: &str) -> String {
        self.join_with_last(glue, glue)
    }

    /// Joins the values with `glue`, except for the last two, which are
    /// joined with `last_glue`.
    ///
    /// An empty collection joins to the empty string and a single value to
    /// that value alone.
    ///
    /// ```rust
    /// use ordcoll::collect;
    ///
    /// let names = collect(["Felix", "Xilef", "Orevas"]);
    /// assert_eq!(names.join_with_last(", ", " and "), "Felix, Xilef and Orevas");
    /// ```
    pub fn join_with_last(&self, glue: &str, last_glue: &str) -> String {
        let mut joined = String::new();
        let last = self.len().saturating_sub(1);
        for (i, v) in self.values_iter().enumerate() {
            if i > 0 {
                joined.push_str(if i == last { last_glue } else { glue });
            }
            joined.push_str(&v.to_string());
        }
        joined
    }
}
