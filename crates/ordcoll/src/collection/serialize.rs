use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use super::Collection;
use crate::{types::Value, Result};

/// Keys that may denote a list position.
///
/// A collection whose keys are exactly the positions `0..n`, in order,
/// serializes as a sequence; any other collection serializes as a map.
pub trait CollectionKey {
    /// The list position this key denotes, if any.
    fn as_index(&self) -> Option<usize> {
        None
    }
}

impl CollectionKey for usize {
    #[inline]
    fn as_index(&self) -> Option<usize> {
        Some(*self)
    }
}

macro_rules! index_key {
    ($($t:ty),*) => {$(
        impl CollectionKey for $t {
            #[inline]
            fn as_index(&self) -> Option<usize> {
                usize::try_from(*self).ok()
            }
        }
    )*};
}

index_key!(u32, u64, i32, i64);

impl CollectionKey for String {}
impl CollectionKey for &str {}
impl CollectionKey for char {}
impl CollectionKey for bool {}

impl CollectionKey for Value {
    fn as_index(&self) -> Option<usize> {
        match *self {
            Value::BigInt(i) => usize::try_from(i).ok(),
            Value::UBigInt(i) => usize::try_from(i).ok(),
            _ => None,
        }
    }
}

impl<K: CollectionKey, V> Collection<K, V> {
    /// Whether the keys are exactly the positions `0..n`, in order.
    pub fn is_list(&self) -> bool {
        self.items
            .iter()
            .enumerate()
            .all(|(position, (k, _))| k.as_index() == Some(position))
    }
}

impl<K: CollectionKey + Serialize, V: Serialize> Serialize for Collection<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.is_list() {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for v in self.values_iter() {
                seq.serialize_element(v)?;
            }
            seq.end()
        } else {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (k, v) in &self.items {
                map.serialize_entry(k, v)?;
            }
            map.end()
        }
    }
}

impl<K: CollectionKey + Serialize, V: Serialize> Collection<K, V> {
    /// Serializes to a JSON string: an array when [`is_list`](Collection::is_list)
    /// holds, an object otherwise.
    ///
    /// ```rust
    /// use ordcoll::{collect, Collection};
    ///
    /// assert_eq!(collect([1, 2, 3]).to_json()?, "[1,2,3]");
    /// assert_eq!(Collection::from_pairs([("a", 1)]).to_json()?, r#"{"a":1}"#);
    /// # Ok::<(), ordcoll::Error>(())
    /// ```
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string(self).inspect_err(|err| tracing::debug!(%err, "to_json failed"))?;
        Ok(json)
    }
}
