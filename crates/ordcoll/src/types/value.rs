use super::{OrderedMap, Type};
use rust_decimal::prelude::*;

use serde::{Serialize, Serializer};
use std::{cmp::Ordering, fmt};

/// Owning dynamic value, for collections of records or mixed items.
///
/// Equality is structural: two lists are equal when their elements are, two
/// structs when their fields are (in order).
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The value is a `NULL` value.
    Null,
    /// The value is a boolean.
    Boolean(bool),
    /// The value is a signed big integer.
    BigInt(i64),
    /// The value is a unsigned big integer.
    UBigInt(u64),
    /// The value is a f64.
    Double(f64),
    /// The value is a Decimal.
    ///
    /// rust_decimal crate.
    Decimal(Decimal),
    /// The value is a text string.
    Text(String),
    /// The value is a list
    List(Vec<Value>),
    /// The value is a struct
    Struct(OrderedMap<String, Value>),
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Value::Null => serializer.serialize_none(),
            Value::Boolean(b) => serializer.serialize_bool(b),
            Value::BigInt(i) => serializer.serialize_i64(i),
            Value::UBigInt(i) => serializer.serialize_u64(i),
            Value::Double(d) => serializer.serialize_f64(d),
            Value::Decimal(d) => serializer.serialize_str(&d.to_string()),
            Value::Text(ref s) => serializer.serialize_str(s),
            Value::List(ref v) => v.serialize(serializer),
            Value::Struct(ref m) => m.serialize(serializer),
        }
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(i: bool) -> Value {
        Value::Boolean(i)
    }
}

impl From<usize> for Value {
    #[inline]
    fn from(i: usize) -> Value {
        Value::UBigInt(i as u64)
    }
}

impl From<isize> for Value {
    #[inline]
    fn from(i: isize) -> Value {
        Value::BigInt(i as i64)
    }
}

macro_rules! from_i64_lossless(
    ($t:ty) => (
        impl From<$t> for Value {
            #[inline]
            fn from(i: $t) -> Value {
                Value::BigInt(i64::from(i))
            }
        }
    )
);

from_i64_lossless!(i8);
from_i64_lossless!(i16);
from_i64_lossless!(i32);
from_i64_lossless!(i64);
from_i64_lossless!(u8);
from_i64_lossless!(u16);
from_i64_lossless!(u32);

impl From<u64> for Value {
    #[inline]
    fn from(i: u64) -> Value {
        Value::UBigInt(i)
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(f: f32) -> Value {
        Value::Double(f64::from(f))
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(f: f64) -> Value {
        Value::Double(f)
    }
}

impl From<Decimal> for Value {
    #[inline]
    fn from(d: Decimal) -> Value {
        Value::Decimal(d)
    }
}

impl From<String> for Value {
    #[inline]
    fn from(s: String) -> Value {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(s: &str) -> Value {
        Value::Text(s.to_owned())
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    #[inline]
    fn from(v: Vec<T>) -> Value {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl From<OrderedMap<String, Value>> for Value {
    #[inline]
    fn from(m: OrderedMap<String, Value>) -> Value {
        Value::Struct(m)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    #[inline]
    fn from(v: Option<T>) -> Value {
        match v {
            Some(x) => x.into(),
            None => Value::Null,
        }
    }
}

impl Value {
    /// Returns the fundamental datatype.
    #[inline]
    pub fn data_type(&self) -> Type {
        match *self {
            Value::Null => Type::Null,
            Value::Boolean(_) => Type::Boolean,
            Value::BigInt(_) => Type::BigInt,
            Value::UBigInt(_) => Type::UBigInt,
            Value::Double(_) => Type::Double,
            Value::Decimal(_) => Type::Decimal,
            Value::Text(_) => Type::Text,
            Value::List(_) => Type::List,
            Value::Struct(_) => Type::Struct,
        }
    }

    /// Whether this is `Value::Null`.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// If `self` is case `Text`, returns the string value.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match *self {
            Value::Text(ref s) => Some(s),
            _ => None,
        }
    }

    /// If `self` is case `List`, returns its elements.
    #[inline]
    pub fn as_list(&self) -> Option<&[Value]> {
        match *self {
            Value::List(ref items) => Some(items),
            _ => None,
        }
    }

    fn compare_numeric(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::BigInt(a), Value::BigInt(b)) => Some(a.cmp(b)),
            (Value::UBigInt(a), Value::UBigInt(b)) => Some(a.cmp(b)),
            (Value::BigInt(a), Value::UBigInt(b)) => Some(i128::from(*a).cmp(&i128::from(*b))),
            (Value::UBigInt(a), Value::BigInt(b)) => Some(i128::from(*a).cmp(&i128::from(*b))),
            (Value::Double(_), _) | (_, Value::Double(_)) => self.to_f64()?.partial_cmp(&other.to_f64()?),
            _ => self.to_decimal()?.partial_cmp(&other.to_decimal()?),
        }
    }

    fn to_decimal(&self) -> Option<Decimal> {
        match *self {
            Value::BigInt(i) => Some(Decimal::from(i)),
            Value::UBigInt(i) => Some(Decimal::from(i)),
            Value::Decimal(d) => Some(d),
            Value::Double(f) => Decimal::from_f64(f),
            _ => None,
        }
    }
}

/// Numbers compare by magnitude across variants, text lexicographically and
/// lists element by element. Values of different kinds (and numbers of equal
/// magnitude held in different variants) order by their [`Type`].
impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Value) -> Option<Ordering> {
        let (lt, rt) = (self.data_type(), other.data_type());
        let ordering = match (self, other) {
            (Value::Null, Value::Null) => Some(Ordering::Equal),
            (Value::Boolean(a), Value::Boolean(b)) => Some(a.cmp(b)),
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            (Value::List(a), Value::List(b)) => a.partial_cmp(b),
            (Value::Struct(a), Value::Struct(b)) => {
                if a == b {
                    Some(Ordering::Equal)
                } else {
                    None
                }
            }
            _ if lt.is_numeric() && rt.is_numeric() => self.compare_numeric(other),
            _ => None,
        };
        match ordering {
            Some(Ordering::Equal) if lt != rt => Some(lt.rank().cmp(&rt.rank())),
            None if lt != rt => Some(lt.rank().cmp(&rt.rank())),
            ordering => ordering,
        }
    }
}

impl ToPrimitive for Value {
    fn to_i64(&self) -> Option<i64> {
        match *self {
            Value::BigInt(i) => Some(i),
            Value::UBigInt(i) => i.to_i64(),
            Value::Double(f) => f.to_i64(),
            Value::Decimal(d) => d.to_i64(),
            Value::Text(ref s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    fn to_u64(&self) -> Option<u64> {
        match *self {
            Value::BigInt(i) => i.to_u64(),
            Value::UBigInt(i) => Some(i),
            Value::Double(f) => f.to_u64(),
            Value::Decimal(d) => d.to_u64(),
            Value::Text(ref s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    fn to_f64(&self) -> Option<f64> {
        match *self {
            Value::BigInt(i) => i.to_f64(),
            Value::UBigInt(i) => i.to_f64(),
            Value::Double(f) => Some(f),
            Value::Decimal(d) => d.to_f64(),
            Value::Text(ref s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Scalars display bare (`Null` as the empty string); lists and structs
/// display as JSON.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Value::Null => Ok(()),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::BigInt(i) => write!(f, "{i}"),
            Value::UBigInt(i) => write!(f, "{i}"),
            Value::Double(d) => write!(f, "{d}"),
            Value::Decimal(d) => write!(f, "{d}"),
            Value::Text(ref s) => f.pad(s),
            Value::List(_) | Value::Struct(_) => {
                let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

/// Builds a struct [`Value`] from `"field" => value` pairs, keeping the fields
/// in the order they are written.
///
/// ```rust
/// use ordcoll::{record, types::Value};
///
/// let person = record! { "name" => "Felix", "hobbies" => vec!["Coding", "Gaming"] };
/// assert_eq!(person.to_string(), r#"{"name":"Felix","hobbies":["Coding","Gaming"]}"#);
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::types::Value::Struct($crate::types::OrderedMap::default())
    };
    ($($field:expr => $value:expr),+ $(,)?) => {
        $crate::types::Value::Struct(
            vec![$((::std::string::String::from($field), $crate::types::Value::from($value))),+].into(),
        )
    };
}
