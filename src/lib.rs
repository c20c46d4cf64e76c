//! Key paths for the standard sequence operations.
//!
//! An [`Accessor`] is a value describing how to read a field out of a root
//! type. This crate turns accessors into plain functions ([`to_fn`]),
//! filter/map adapters ([`KeyPathIterator`]), less-than predicates
//! ([`their`]) and type-erased, composable [`SortDescriptor`]s.
//!
//! ```
//! use keypath::{KeyPathIterator, SortDescriptor, key_path};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! let people = vec![
//!     Person { name: "Xavier".into(), age: 12 },
//!     Person { name: "Alexia".into(), age: 23 },
//!     Person { name: "Charlie".into(), age: 12 },
//! ];
//!
//! let sorted = people.iter().sorted_by_descriptors(&[
//!     SortDescriptor::ascending(key_path!(Person, age)),
//!     SortDescriptor::descending(key_path!(Person, name)),
//! ]);
//! let names: Vec<String> = sorted.into_iter().map_by(key_path!(Person, name)).collect();
//! assert_eq!(names, ["Xavier", "Charlie", "Alexia"]);
//! ```

mod accessor;
mod descriptor;
pub mod error;
mod iter;
mod macros;
mod order;
mod schema;
mod sort;

pub use accessor::*;
pub use descriptor::*;
pub use error::{Error, Result};
pub use iter::*;
pub use order::*;
pub use schema::*;
pub use sort::*;
