use crate::types::{FromValueError, Type};
use std::{error, fmt};

/// Enum listing possible errors from ordcoll.
#[derive(Debug)]
#[allow(clippy::enum_variant_names)]
#[non_exhaustive]
pub enum Error {
    /// Error when an operation that needs at least one element (e.g.
    /// [`pop`](crate::Collection::pop) or [`avg`](crate::Collection::avg)) is
    /// called on an empty collection.
    EmptyCollection,

    /// Error when an element was required to match a predicate (e.g. for
    /// [`first_or_fail`](crate::Collection::first_or_fail)) but none did.
    ItemNotFound,

    /// Error when two collections that must be paired position by position
    /// have different lengths. The first `usize` is the length of the receiver,
    /// the 2nd is the length of the argument.
    LengthMismatch(usize, usize),

    /// Error when an argument cannot be applied to the collection, such as a
    /// chunk size of zero or a field name that an item does not have.
    InvalidArgument(String),

    /// Error when a dynamic [`Value`](crate::types::Value) is requested as a
    /// Rust type it cannot be converted to. The `usize` is the position of the
    /// offending item.
    FromValueConversionFailure(usize, Type, FromValueError),

    /// Error when a collection cannot be rendered as JSON.
    Serialization(serde_json::Error),
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::EmptyCollection, Self::EmptyCollection) => true,
            (Self::ItemNotFound, Self::ItemNotFound) => true,
            (Self::LengthMismatch(l1, r1), Self::LengthMismatch(l2, r2)) => l1 == l2 && r1 == r2,
            (Self::InvalidArgument(m1), Self::InvalidArgument(m2)) => m1 == m2,
            (Self::FromValueConversionFailure(i1, t1, e1), Self::FromValueConversionFailure(i2, t2, e2)) => {
                i1 == i2 && t1 == t2 && e1 == e2
            }
            (..) => false,
        }
    }
}

impl From<serde_json::Error> for Error {
    #[cold]
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::EmptyCollection => write!(f, "Collection is empty"),
            Self::ItemNotFound => write!(f, "No item matched the predicate"),
            Self::LengthMismatch(l, r) => {
                write!(f, "Collections have mismatched lengths. Got {l} and {r}")
            }
            Self::InvalidArgument(ref msg) => write!(f, "Invalid argument: {msg}"),
            Self::FromValueConversionFailure(i, ref t, ref err) => {
                write!(f, "Conversion error from type {t} at index: {i}, {err}")
            }
            Self::Serialization(ref err) => write!(f, "{err}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Self::FromValueConversionFailure(_, _, ref err) => Some(err),
            Self::Serialization(ref err) => Some(err),

            Self::EmptyCollection | Self::ItemNotFound | Self::LengthMismatch(..) | Self::InvalidArgument(_) => None,
        }
    }
}

// These are public but not re-exported by lib.rs, so only visible within crate.

#[cold]
pub(crate) fn empty_collection(op: &'static str) -> Error {
    tracing::debug!(op, "operation requires a non-empty collection");
    Error::EmptyCollection
}

#[cold]
pub(crate) fn invalid_argument(op: &'static str, msg: impl Into<String>) -> Error {
    let msg = msg.into();
    tracing::debug!(op, %msg, "invalid argument");
    Error::InvalidArgument(msg)
}
