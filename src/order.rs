use std::cmp::Ordering;

use crate::Accessor;

/// Direction of a single sort key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Returns the opposite direction.
    #[inline]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Applies this direction to an ascending comparison result.
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use keypath::Direction;
    ///
    /// assert_eq!(Direction::Ascending.apply(Ordering::Less), Ordering::Less);
    /// assert_eq!(Direction::Descending.apply(Ordering::Less), Ordering::Greater);
    /// assert_eq!(Direction::Descending.apply(Ordering::Equal), Ordering::Equal);
    /// ```
    #[inline]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Builds a strict less-than predicate over the value read by `accessor`.
///
/// `their(a)(x, y)` is `a(x) < a(y)`.
///
/// ```
/// use keypath::{KeyPath, their};
///
/// struct Person { age: u32 }
///
/// let younger = their(KeyPath::new(|p: &Person| &p.age));
/// assert!(younger(&Person { age: 12 }, &Person { age: 45 }));
/// assert!(!younger(&Person { age: 45 }, &Person { age: 45 }));
/// ```
#[inline]
pub fn their<Root, A>(accessor: A) -> impl Fn(&Root, &Root) -> bool
where
    Root: ?Sized,
    A: Accessor<Root>,
    A::Value: Ord,
{
    move |left: &Root, right: &Root| {
        accessor.with(left, |l| accessor.with(right, |r| l < r))
    }
}

/// Builds a three-way comparator over the value read by `accessor`, ready for
/// [`slice::sort_by`].
///
/// Values must be totally ordered. Floats can be sorted through
/// [`SortDescriptor::new`](crate::SortDescriptor::new) with `f64::total_cmp`.
///
/// ```
/// use keypath::{KeyPath, their_ordering};
///
/// struct Fruit { name: String }
///
/// let mut basket: Vec<Fruit> = ["pear", "fig", "banana"]
///     .into_iter()
///     .map(|name| Fruit { name: name.to_string() })
///     .collect();
/// basket.sort_by(their_ordering(KeyPath::new(|f: &Fruit| &f.name)));
/// let names: Vec<&str> = basket.iter().map(|f| f.name.as_str()).collect();
/// assert_eq!(names, ["banana", "fig", "pear"]);
/// ```
#[inline]
pub fn their_ordering<Root, A>(accessor: A) -> impl Fn(&Root, &Root) -> Ordering
where
    Root: ?Sized,
    A: Accessor<Root>,
    A::Value: Ord,
{
    move |left: &Root, right: &Root| {
        accessor.with(left, |l| accessor.with(right, |r| l.cmp(r)))
    }
}
