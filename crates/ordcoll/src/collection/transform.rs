use std::{array, iter, option, vec};

use super::{Collection, List};
use crate::{
    error::invalid_argument,
    types::{FromValue, Value},
    Error, Result,
};

/// Values that can be spliced into a flat list by
/// [`flat_map`](Collection::flat_map) and [`collapse`](Collection::collapse).
///
/// Sequences yield their elements; a scalar [`Value`] yields itself, so
/// mapping to a mix of lists and scalars appends the scalars as they are.
pub trait IntoSequence {
    /// The element type.
    type Item;
    /// The iterator over the elements.
    type IntoIter: Iterator<Item = Self::Item>;

    /// Converts into the sequence of elements.
    fn into_sequence(self) -> Self::IntoIter;
}

impl<T> IntoSequence for Vec<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    #[inline]
    fn into_sequence(self) -> Self::IntoIter {
        self.into_iter()
    }
}

impl<T, const N: usize> IntoSequence for [T; N] {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    #[inline]
    fn into_sequence(self) -> Self::IntoIter {
        self.into_iter()
    }
}

impl<T> IntoSequence for Option<T> {
    type Item = T;
    type IntoIter = option::IntoIter<T>;

    #[inline]
    fn into_sequence(self) -> Self::IntoIter {
        self.into_iter()
    }
}

impl<K, V> IntoSequence for Collection<K, V> {
    type Item = V;
    type IntoIter = iter::Map<vec::IntoIter<(K, V)>, fn((K, V)) -> V>;

    #[inline]
    fn into_sequence(self) -> Self::IntoIter {
        fn value<K, V>((_, v): (K, V)) -> V {
            v
        }
        self.items.into_iter().map(value as fn((K, V)) -> V)
    }
}

impl IntoSequence for Value {
    type Item = Value;
    type IntoIter = vec::IntoIter<Value>;

    #[inline]
    fn into_sequence(self) -> Self::IntoIter {
        match self {
            Value::List(items) => items.into_iter(),
            scalar => vec![scalar].into_iter(),
        }
    }
}

/// Functions that take the fields of a tuple as separate arguments, for
/// [`map_spread`](Collection::map_spread).
pub trait Spread<Args> {
    /// The function's return type.
    type Output;

    /// Calls the function with the tuple's fields as its arguments.
    fn call_spread(&mut self, args: Args) -> Self::Output;
}

macro_rules! spread_tuple(
    ($($arg:ident),+) => (
        impl<Func, Out, $($arg),+> Spread<($($arg,)+)> for Func
        where
            Func: FnMut($($arg),+) -> Out,
        {
            type Output = Out;

            #[inline]
            #[allow(non_snake_case)]
            fn call_spread(&mut self, ($($arg,)+): ($($arg,)+)) -> Out {
                self($($arg),+)
            }
        }
    )
);

spread_tuple!(A);
spread_tuple!(A, B);
spread_tuple!(A, B, C);
spread_tuple!(A, B, C, D);
spread_tuple!(A, B, C, D, E);
spread_tuple!(A, B, C, D, E, F);

impl<K: Clone, V: Clone> Collection<K, V> {
    /// Replaces every value with `f(value, key)`. Keys are preserved.
    pub fn map<R, F>(&self, mut f: F) -> Collection<K, R>
    where
        F: FnMut(&V, &K) -> R,
    {
        Collection::from_unique(self.items.iter().map(|(k, v)| (k.clone(), f(v, k))).collect())
    }

    /// Converts every value with `T::from`. Keys are preserved.
    pub fn map_into<T>(&self) -> Collection<K, T>
    where
        T: From<V>,
    {
        self.map(|v, _| T::from(v.clone()))
    }

    /// Replaces every pair with the `(key, value)` pair `f` returns. When two
    /// pairs map to the same key the later value wins.
    pub fn map_with_keys<K2, R, F>(&self, mut f: F) -> Collection<K2, R>
    where
        K2: PartialEq,
        F: FnMut(&V, &K) -> (K2, R),
    {
        self.items.iter().map(|(k, v)| f(v, k)).collect()
    }

    /// Calls `f` with the fields of each tuple value as separate arguments.
    /// Keys are preserved.
    ///
    /// ```rust
    /// use ordcoll::collect;
    ///
    /// let names = collect([("Felix", "Xilef"), ("Xilef", "Felix")]);
    /// let full = names.map_spread(|first: &str, last: &str| format!("{first} {last}"));
    /// assert_eq!(full.to_vec(), vec!["Felix Xilef", "Xilef Felix"]);
    /// ```
    pub fn map_spread<F>(&self, mut f: F) -> Collection<K, F::Output>
    where
        F: Spread<V>,
    {
        self.map(|v, _| f.call_spread(v.clone()))
    }

    /// Maps every value to a sequence (or a scalar, see [`IntoSequence`])
    /// and concatenates the results one level deep. The result is
    /// reindexed.
    pub fn flat_map<R, F>(&self, mut f: F) -> List<R::Item>
    where
        R: IntoSequence,
        F: FnMut(&V, &K) -> R,
    {
        let flattened = List::from_values(self.items.iter().flat_map(|(k, v)| f(v, k).into_sequence()));
        tracing::trace!(from = self.len(), to = flattened.len(), "flat_map");
        flattened
    }
}

impl<K, V> Collection<K, V>
where
    V: IntoSequence + Clone,
{
    /// Concatenates every inner sequence into one flat list, one level deep.
    /// The result is reindexed.
    pub fn collapse(&self) -> List<V::Item> {
        let collapsed = List::from_values(self.values_iter().cloned().flat_map(IntoSequence::into_sequence));
        tracing::trace!(from = self.len(), to = collapsed.len(), "collapse");
        collapsed
    }
}

impl<K: Clone> Collection<K, Value> {
    /// Calls `f` with the elements of each list value. Keys are preserved.
    ///
    /// Fails with [`Error::InvalidArgument`] if any value is not a list.
    pub fn map_spread_values<R, F>(&self, mut f: F) -> Result<Collection<K, R>>
    where
        F: FnMut(&[Value]) -> R,
    {
        let mut items = Vec::with_capacity(self.len());
        for (position, (k, v)) in self.items.iter().enumerate() {
            let args = v.as_list().ok_or_else(|| {
                invalid_argument(
                    "map_spread_values",
                    format!("item {position} is {}, not a list", v.data_type()),
                )
            })?;
            items.push((k.clone(), f(args)));
        }
        Ok(Collection::from_unique(items))
    }

    /// Converts every value into `T`. Keys are preserved.
    ///
    /// Fails with [`Error::FromValueConversionFailure`] naming the position
    /// of the first value that does not convert.
    pub fn values_as<T: FromValue>(&self) -> Result<Collection<K, T>> {
        let mut items = Vec::with_capacity(self.len());
        for (position, (k, v)) in self.items.iter().enumerate() {
            let converted = T::from_value(v).map_err(|err| {
                tracing::debug!(position, %err, "values_as conversion failed");
                Error::FromValueConversionFailure(position, v.data_type(), err)
            })?;
            items.push((k.clone(), converted));
        }
        Ok(Collection::from_unique(items))
    }
}
