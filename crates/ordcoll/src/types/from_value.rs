use std::{error::Error, fmt};

use rust_decimal::{Decimal, RoundingStrategy::MidpointAwayFromZero};

use super::Value;

/// Enum listing possible errors from [`FromValue`] trait.
#[derive(Debug)]
#[non_exhaustive]
pub enum FromValueError {
    /// Error when a value is requested, but its kind cannot be converted to the
    /// requested Rust type.
    InvalidType,

    /// Error when the value cannot be stored into the requested type.
    OutOfRange(i128),

    /// An error case available for implementors of the [`FromValue`] trait.
    Other(Box<dyn Error + Send + Sync + 'static>),
}

impl PartialEq for FromValueError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidType, Self::InvalidType) => true,
            (Self::OutOfRange(n1), Self::OutOfRange(n2)) => n1 == n2,
            (..) => false,
        }
    }
}

impl fmt::Display for FromValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::InvalidType => write!(f, "Invalid type"),
            Self::OutOfRange(i) => write!(f, "Value {i} out of range"),
            Self::Other(ref err) => write!(f, "{err}"),
        }
    }
}

impl Error for FromValueError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        if let Self::Other(ref err) = self {
            Some(&**err)
        } else {
            None
        }
    }
}

/// Result type for implementors of the [`FromValue`] trait.
pub type FromValueResult<T> = Result<T, FromValueError>;

/// A trait for types that can be created from a dynamic [`Value`].
pub trait FromValue: Sized {
    /// Converts the value into a Rust value.
    fn from_value(value: &Value) -> FromValueResult<Self>;
}

macro_rules! from_value_integral(
    ($t:ident) => (
        impl FromValue for $t {
            #[inline]
            fn from_value(value: &Value) -> FromValueResult<Self> {
                match *value {
                    Value::BigInt(i) => <$t as cast::From<i64>>::cast(i).into_result(FromValueError::OutOfRange(i as i128)),
                    Value::UBigInt(i) => <$t as cast::From<u64>>::cast(i).into_result(FromValueError::OutOfRange(i as i128)),
                    Value::Double(i) => <$t as cast::From<f64>>::cast(i).into_result(FromValueError::OutOfRange(i as i128)),

                    Value::Decimal(d) => {
                        let rounded = d.round_dp_with_strategy(0, MidpointAwayFromZero);
                        <$t as cast::From<i128>>::cast(rounded.mantissa()).into_result(FromValueError::OutOfRange(d.mantissa()))
                    }

                    Value::Text(ref s) => {
                        s.parse::<$t>().or_else(|_| {
                            s.parse::<i128>()
                                .map_err(|_| FromValueError::InvalidType)
                                .and_then(|i| Err(FromValueError::OutOfRange(i)))
                        })
                    }
                    _ => Err(FromValueError::InvalidType),
                }
            }
        }
    )
);

/// A trait to provide ok_or method for both Result and primitive types
/// cast::From trait returns Result or the primitive, depending on the types
trait IntoResult {
    type Value;
    fn into_result<E>(self, err: E) -> Result<Self::Value, E>;
}

/// A macro to implement the IntoResult trait for all integral types
macro_rules! into_result_integral(
    ($type_name:ident) => (
        impl IntoResult for $type_name {
            type Value = $type_name;

            #[inline]
            fn into_result<E>(self, _err: E) -> Result<Self::Value, E> {
                Ok(self)
            }
        }
    )
);

into_result_integral!(i8);
into_result_integral!(i16);
into_result_integral!(i32);
into_result_integral!(i64);
into_result_integral!(isize);
into_result_integral!(u8);
into_result_integral!(u16);
into_result_integral!(u32);
into_result_integral!(u64);
into_result_integral!(usize);
into_result_integral!(f32);
into_result_integral!(f64);

impl<T, E> IntoResult for Result<T, E> {
    type Value = T;

    #[inline]
    fn into_result<E2>(self, err: E2) -> Result<Self::Value, E2> {
        self.map_err(|_| err)
    }
}

from_value_integral!(i8);
from_value_integral!(i16);
from_value_integral!(i32);
from_value_integral!(i64);
from_value_integral!(isize);
from_value_integral!(u8);
from_value_integral!(u16);
from_value_integral!(u32);
from_value_integral!(u64);
from_value_integral!(usize);

impl FromValue for f64 {
    #[inline]
    fn from_value(value: &Value) -> FromValueResult<Self> {
        use num::ToPrimitive;

        match *value {
            Value::BigInt(_) | Value::UBigInt(_) | Value::Double(_) | Value::Decimal(_) | Value::Text(_) => {
                value.to_f64().ok_or(FromValueError::InvalidType)
            }
            _ => Err(FromValueError::InvalidType),
        }
    }
}

impl FromValue for bool {
    #[inline]
    fn from_value(value: &Value) -> FromValueResult<Self> {
        match *value {
            Value::Boolean(b) => Ok(b),
            _ => i8::from_value(value).map(|i| i != 0),
        }
    }
}

impl FromValue for String {
    #[inline]
    fn from_value(value: &Value) -> FromValueResult<Self> {
        match *value {
            Value::Text(ref s) => Ok(s.clone()),
            _ => Err(FromValueError::InvalidType),
        }
    }
}

impl FromValue for Decimal {
    #[inline]
    fn from_value(value: &Value) -> FromValueResult<Self> {
        use rust_decimal::prelude::FromPrimitive;

        match *value {
            Value::BigInt(i) => Ok(Decimal::from(i)),
            Value::UBigInt(i) => Ok(Decimal::from(i)),
            Value::Double(f) => Decimal::from_f64(f).ok_or(FromValueError::InvalidType),
            Value::Decimal(d) => Ok(d),
            Value::Text(ref s) => s.parse().map_err(|e| FromValueError::Other(Box::new(e))),
            _ => Err(FromValueError::InvalidType),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    #[inline]
    fn from_value(value: &Value) -> FromValueResult<Self> {
        match *value {
            Value::Null => Ok(None),
            _ => FromValue::from_value(value).map(Some),
        }
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    #[inline]
    fn from_value(value: &Value) -> FromValueResult<Self> {
        match *value {
            Value::List(ref items) => items.iter().map(T::from_value).collect(),
            _ => Err(FromValueError::InvalidType),
        }
    }
}

impl FromValue for Value {
    #[inline]
    fn from_value(value: &Value) -> FromValueResult<Self> {
        Ok(value.clone())
    }
}
