//! ordcoll is an ordered key/value collection with a fluent API for the
//! everyday work of filtering, mapping, grouping, slicing and aggregating
//! in-memory data.
//!
//! ```rust
//! use ordcoll::{collect, record, Result};
//!
//! fn main() -> Result<()> {
//!     let employees = collect([
//!         record! { "name" => "Felix", "department" => "IT", "salary" => 100 },
//!         record! { "name" => "Xilef", "department" => "IT", "salary" => 80 },
//!         record! { "name" => "Budi", "department" => "HR", "salary" => 70 },
//!     ]);
//!
//!     let departments = employees.group_by_field("department")?;
//!     for (department, members) in &departments {
//!         let salaries = members.pluck("salary")?;
//!         println!("{department}: {} people, average salary {}", members.len(), salaries.avg()?);
//!     }
//!
//!     let names = employees.pluck("name")?;
//!     assert_eq!(names.join_with_last(", ", " and "), "Felix, Xilef and Budi");
//!     Ok(())
//! }
//! ```
#![warn(missing_docs)]

use std::result;

pub use crate::collection::{Collection, CollectionKey, IntoSequence, List, Spread};
pub use crate::error::Error;

mod collection;
mod error;

pub mod config;
pub mod types;

/// A typedef of the result returned by many methods.
pub type Result<T, E = Error> = result::Result<T, E>;

/// Builds a list-like collection with keys `0..n` from any sequence of
/// values.
///
/// ```rust
/// let names = ordcoll::collect(["Felix", "Xilef"]);
/// assert_eq!(names.all(), &[(0, "Felix"), (1, "Xilef")]);
/// ```
#[inline]
pub fn collect<V, I>(values: I) -> List<V>
where
    I: IntoIterator<Item = V>,
{
    List::from_values(values)
}

/// See the [method documentation](#tymethod.optional).
pub trait OptionalExt<T> {
    /// Converts a `Result<T>` into a `Result<Option<T>>`.
    ///
    /// Operations that must produce an element, such as
    /// [`first_or_fail`](Collection::first_or_fail) or [`min`](Collection::min),
    /// treat an empty collection or a missing match as an error. This method
    /// will handle that error, and give you back an `Option<T>` instead.
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for Result<T> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(Error::EmptyCollection | Error::ItemNotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

#[cfg(test)]
mod collection_scenarios;

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::Value;

    // this function is never called, but is still type checked; in
    // particular, calls with specific instantiations will require
    // that those types are `Send` and `Sync`.
    #[allow(dead_code, unconditional_recursion)]
    fn ensure_send_sync<T: Send + Sync>() {
        ensure_send_sync::<List<Value>>();
        ensure_send_sync::<Collection<String, List<i32>>>();
        ensure_send_sync::<Error>();
    }

    #[test]
    fn test_collect() {
        assert_eq!(collect(vec![1, 2]).all(), &[(0, 1), (1, 2)]);
        assert!(collect(Vec::<i32>::new()).is_empty());
        assert_eq!(collect("abc".chars()).to_vec(), vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_optional() -> Result<()> {
        let empty: List<i32> = List::new();
        assert_eq!(empty.min().optional()?, None);
        assert_eq!(collect([1, 2]).first_where_or_fail(|v, _| *v > 5).optional()?, None);
        assert_eq!(collect([3, 1]).min().optional()?, Some(1));
        assert!(collect([1]).chunk(0).optional().is_err());
        Ok(())
    }
}
