//! Dynamic item types for collections whose elements are not a single Rust
//! type: records with named fields, heterogenous lists and JSON-like data.
//!
//! [`Value`] is the owning dynamic value. Its record form is backed by an
//! [`OrderedMap`], which keeps fields in declaration order. Items that expose
//! named fields implement [`Record`], which is what
//! [`group_by_field`](crate::Collection::group_by_field) and
//! [`pluck`](crate::Collection::pluck) look fields up through.
//!
//! [`FromValue`] converts a [`Value`] back into a concrete Rust type. Integral
//! conversions are range checked, so asking for a `u8` out of `Value::BigInt(300)`
//! fails with [`FromValueError::OutOfRange`] instead of truncating.
//!
//! ```rust
//! use ordcoll::record;
//! use ordcoll::types::{Record, Value};
//!
//! let felix = record! { "name" => "Felix", "department" => "IT" };
//! assert_eq!(felix.field("department"), Some(&Value::from("IT")));
//! assert_eq!(felix.field("salary"), None);
//! ```

pub use self::{
    from_value::{FromValue, FromValueError, FromValueResult},
    ordered_map::OrderedMap,
    value::Value,
};

use strum::Display;

mod from_value;
mod ordered_map;
mod value;

/// Items exposing named fields.
///
/// Implement this for your own record types to use them with
/// [`group_by_field`](crate::Collection::group_by_field) and
/// [`pluck`](crate::Collection::pluck).
pub trait Record {
    /// Returns the field called `name`, or `None` if the item has no such field.
    fn field(&self, name: &str) -> Option<&Value>;
}

impl Record for Value {
    #[inline]
    fn field(&self, name: &str) -> Option<&Value> {
        match *self {
            Value::Struct(ref fields) => fields.get(name),
            _ => None,
        }
    }
}

impl Record for OrderedMap<String, Value> {
    #[inline]
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

/// Fundamental kinds of [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Type {
    /// NULL
    Null,
    /// BOOLEAN
    Boolean,
    /// BIGINT
    BigInt,
    /// UBIGINT
    UBigInt,
    /// DOUBLE
    Double,
    /// DECIMAL
    Decimal,
    /// Text
    Text,
    /// LIST
    List,
    /// STRUCT
    Struct,
}

impl Type {
    /// Position of the type when values of different kinds are ordered
    /// against each other.
    pub(crate) fn rank(self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Boolean => 1,
            Self::BigInt => 2,
            Self::UBigInt => 3,
            Self::Decimal => 4,
            Self::Double => 5,
            Self::Text => 6,
            Self::List => 7,
            Self::Struct => 8,
        }
    }

    /// Whether the type holds a number.
    #[inline]
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::BigInt | Self::UBigInt | Self::Decimal | Self::Double)
    }
}
