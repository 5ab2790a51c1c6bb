use num::{CheckedAdd, ToPrimitive, Zero};

use super::Collection;
use crate::{
    error::{empty_collection, invalid_argument},
    Result,
};

impl<K, V> Collection<K, V> {
    /// Folds the pairs into an accumulator, in order.
    pub fn reduce<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &V, &K) -> A,
    {
        self.items.iter().fold(init, |acc, (k, v)| f(acc, v, k))
    }

    /// Calls `f(value, key)` for every pair, in order.
    pub fn each<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(&V, &K),
    {
        for (k, v) in &self.items {
            f(v, k);
        }
        self
    }

    /// Sum of `f(value, key)` over every pair; zero when empty.
    pub fn sum_by<R, F>(&self, mut f: F) -> R
    where
        R: Zero,
        F: FnMut(&V, &K) -> R,
    {
        self.items.iter().fold(R::zero(), |acc, (k, v)| acc + f(v, k))
    }

    fn numbers(&self, op: &'static str) -> Result<Vec<f64>>
    where
        V: ToPrimitive,
    {
        if self.is_empty() {
            return Err(empty_collection(op));
        }
        self.values_iter()
            .enumerate()
            .map(|(position, v)| {
                v.to_f64()
                    .ok_or_else(|| invalid_argument(op, format!("item {position} is not numeric")))
            })
            .collect()
    }

    /// The arithmetic mean of the values.
    ///
    /// Fails with [`Error::EmptyCollection`](crate::Error::EmptyCollection)
    /// on an empty collection and with
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument) if a value
    /// has no numeric representation.
    ///
    /// ```rust
    /// use ordcoll::collect;
    ///
    /// assert_eq!(collect(1..=9).avg()?, 5.0);
    /// # Ok::<(), ordcoll::Error>(())
    /// ```
    pub fn avg(&self) -> Result<f64>
    where
        V: ToPrimitive,
    {
        let numbers = self.numbers("avg")?;
        Ok(numbers.iter().sum::<f64>() / numbers.len() as f64)
    }

    /// The median of the values: the middle one, or the mean of the middle
    /// two when there is an even number of them.
    ///
    /// Fails like [`avg`](Collection::avg).
    pub fn median(&self) -> Result<f64>
    where
        V: ToPrimitive,
    {
        let mut numbers = self.numbers("median")?;
        numbers.sort_by(f64::total_cmp);
        let middle = numbers.len() / 2;
        if numbers.len() % 2 == 0 {
            Ok((numbers[middle - 1] + numbers[middle]) / 2.0)
        } else {
            Ok(numbers[middle])
        }
    }
}

impl<K, V: Clone + PartialOrd> Collection<K, V> {
    /// The smallest value; the first one among equals.
    ///
    /// Fails with [`Error::EmptyCollection`](crate::Error::EmptyCollection)
    /// on an empty collection.
    pub fn min(&self) -> Result<V> {
        self.values_iter()
            .reduce(|best, v| if v < best { v } else { best })
            .cloned()
            .ok_or_else(|| empty_collection("min"))
    }

    /// The largest value; the first one among equals.
    ///
    /// Fails with [`Error::EmptyCollection`](crate::Error::EmptyCollection)
    /// on an empty collection.
    pub fn max(&self) -> Result<V> {
        self.values_iter()
            .reduce(|best, v| if v > best { v } else { best })
            .cloned()
            .ok_or_else(|| empty_collection("max"))
    }
}

impl<K, V: Zero + Clone> Collection<K, V> {
    /// Sum of the values; zero when empty.
    ///
    /// Integer overflow follows the `+` of `V`, so it panics in debug builds.
    /// Use [`checked_sum`](Collection::checked_sum) when the values may not
    /// fit.
    pub fn sum(&self) -> V {
        self.values_iter().fold(V::zero(), |acc, v| acc + v.clone())
    }

    /// Sum of the values, or `None` if it overflows `V`; zero when empty.
    ///
    /// ```rust
    /// use ordcoll::collect;
    ///
    /// assert_eq!(collect([1, 2, 3]).checked_sum(), Some(6));
    /// assert_eq!(collect([i32::MAX, 1]).checked_sum(), None);
    /// ```
    pub fn checked_sum(&self) -> Option<V>
    where
        V: CheckedAdd,
    {
        let sum = self.values_iter().try_fold(V::zero(), |acc, v| acc.checked_add(v));
        if sum.is_none() {
            tracing::debug!(len = self.len(), "sum overflowed");
        }
        sum
    }
}

#[cfg(test)]
mod test {
    use crate::{collect, record, types::Value, Error, List, Result};
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    #[test]
    fn test_min_max() -> Result<()> {
        let collection = collect([4, 9, 1, 7]);
        assert_eq!(collection.min()?, 1);
        assert_eq!(collection.max()?, 9);
        assert_eq!(List::<i32>::new().min(), Err(Error::EmptyCollection));
        assert_eq!(List::<i32>::new().max(), Err(Error::EmptyCollection));
        Ok(())
    }

    #[test]
    fn test_min_max_mixed_values() -> Result<()> {
        let collection = collect([Value::from(2), Value::from(0.5), Value::from(Decimal::new(75, 1))]);
        assert_eq!(collection.min()?, Value::from(0.5));
        assert_eq!(collection.max()?, Value::from(Decimal::new(75, 1)));
        Ok(())
    }

    #[test]
    fn test_sum() {
        assert_eq!(collect(1..=9).sum(), 45);
        assert_eq!(collect([0.5, 0.25]).sum(), 0.75);
        assert_eq!(List::<i64>::new().sum(), 0);
        assert_eq!(collect(["a", "bb", "ccc"]).sum_by(|v, _| v.len()), 6);
    }

    #[test]
    fn test_checked_sum_overflow() {
        assert_eq!(collect(1..=9).checked_sum(), Some(45));
        assert_eq!(List::<u8>::new().checked_sum(), Some(0));
        assert_eq!(collect([i32::MAX, 1]).checked_sum(), None);
        assert_eq!(collect([200u8, 50, 10]).checked_sum(), None);
        assert_eq!(collect([i64::MIN, i64::MAX]).checked_sum(), Some(-1));
    }

    #[test]
    fn test_avg() -> Result<()> {
        assert_eq!(collect(1..=9).avg()?, 5.0);
        assert_eq!(collect([1, 2]).avg()?, 1.5);
        assert_eq!(List::<i32>::new().avg(), Err(Error::EmptyCollection));
        Ok(())
    }

    #[test]
    fn test_avg_values() -> Result<()> {
        let numbers = collect([Value::from(1), Value::from("2"), Value::from(3.0)]);
        assert_eq!(numbers.avg()?, 2.0);

        let mixed = collect([Value::from(1), record! { "n" => 2 }]);
        assert_eq!(mixed.avg(), Err(Error::InvalidArgument("item 1 is not numeric".to_string())));
        Ok(())
    }

    #[test]
    fn test_median() -> Result<()> {
        assert_eq!(collect([3, 1, 2]).median()?, 2.0);
        assert_eq!(collect([4, 1, 3, 2]).median()?, 2.5);
        assert_eq!(List::<i32>::new().median(), Err(Error::EmptyCollection));
        Ok(())
    }

    #[test]
    fn test_reduce_each() {
        let collection = collect([1, 2, 3]);
        assert_eq!(collection.reduce(0, |acc, v, k| acc + v * *k as i32), 8);

        let mut seen = Vec::new();
        let count = collection.each(|v, k| seen.push((*k, *v))).count();
        assert_eq!(count, 3);
        assert_eq!(seen, vec![(0, 1), (1, 2), (2, 3)]);
    }
}
