//! Error types for resolving sort keys against a [`SortSchema`](crate::SortSchema).
//!
//! Everything else in the crate is infallible: misusing an accessor is a
//! compile error, not a runtime one.
//!
//! # Example
//!
//! ```
//! use keypath::{Error, KeyPath, Result, SortSchema};
//!
//! struct Person { age: u32 }
//!
//! fn order(schema: &SortSchema<Person>, query: &str) -> Result<usize> {
//!     match schema.parse(query) {
//!         Ok(descriptors) => Ok(descriptors.len()),
//!         Err(Error::UnknownKey(name)) => {
//!             println!("cannot sort by {name}");
//!             Err(Error::UnknownKey(name))
//!         }
//!         Err(e) => Err(e),
//!     }
//! }
//!
//! let schema = SortSchema::new().with_key("age", KeyPath::new(|p: &Person| &p.age))?;
//! assert_eq!(order(&schema, "-age")?, 1);
//! assert!(order(&schema, "height").is_err());
//! # Ok::<(), Error>(())
//! ```

use std::fmt::{self, Display};

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// This type represents all possible errors that can occur when parsing or
/// resolving sort keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A sort key had no field name, e.g. `""`, `"-"` or `"age,,name"`.
    EmptyKey,

    /// The word after a field name was neither `asc` nor `desc`.
    InvalidDirection(String),

    /// The field name is not registered in the schema.
    UnknownKey(String),

    /// The field name was registered twice.
    DuplicateKey(String),
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptyKey => formatter.write_str("empty sort key"),
            Error::InvalidDirection(word) => formatter.write_str(&format!(
                "invalid sort direction: {word:?}, expected \"asc\" or \"desc\""
            )),
            Error::UnknownKey(name) => formatter.write_str(&format!("unknown sort key: {name:?}")),
            Error::DuplicateKey(name) => {
                formatter.write_str(&format!("sort key registered twice: {name:?}"))
            }
        }
    }
}

impl std::error::Error for Error {}
