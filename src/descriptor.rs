use std::{cmp::Ordering, fmt, sync::Arc};

use crate::{Accessor, Direction};

type CompareFn<Element> = dyn Fn(&Element, &Element) -> Ordering + Send + Sync;

/// A type-erased, single-key ordering rule.
///
/// Each descriptor closes over one accessor and hides its value type behind a
/// three-way comparison, so descriptors over keys of different types can live
/// in one slice and be combined with [`compare_all`](crate::compare_all) or
/// [`ordered_before`](crate::ordered_before).
///
/// Cloning is cheap: the comparison is shared behind an [`Arc`].
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use keypath::{KeyPath, SortDescriptor};
///
/// struct Person { name: String, age: u32 }
///
/// let by_age = SortDescriptor::ascending(KeyPath::new(|p: &Person| &p.age));
/// let by_name = SortDescriptor::descending(KeyPath::new(|p: &Person| &p.name));
///
/// let x = Person { name: "Xavier".into(), age: 12 };
/// let c = Person { name: "Charlie".into(), age: 12 };
///
/// assert_eq!(by_age.compare(&x, &c), Ordering::Equal);
/// assert_eq!(by_name.compare(&x, &c), Ordering::Less);
/// ```
pub struct SortDescriptor<Element: ?Sized> {
    compare: Arc<CompareFn<Element>>,
}

impl<Element: ?Sized> SortDescriptor<Element> {
    /// Wraps an arbitrary three-way comparison.
    ///
    /// The function must be a total preorder over `Element`. This is the way
    /// in for keys without an [`Ord`] impl:
    ///
    /// ```
    /// use keypath::SortDescriptor;
    ///
    /// struct Reading { celsius: f64 }
    ///
    /// let by_celsius = SortDescriptor::new(|l: &Reading, r: &Reading| l.celsius.total_cmp(&r.celsius));
    /// assert!(by_celsius.compare(&Reading { celsius: -4.0 }, &Reading { celsius: f64::NAN }).is_lt());
    /// ```
    #[inline]
    pub fn new<F>(compare: F) -> Self
    where
        F: Fn(&Element, &Element) -> Ordering + Send + Sync + 'static,
    {
        Self {
            compare: Arc::new(compare),
        }
    }

    /// Orders by the value read by `accessor`, smallest first.
    #[inline]
    pub fn ascending<A>(accessor: A) -> Self
    where
        A: Accessor<Element> + Send + Sync + 'static,
        A::Value: Ord,
    {
        Self::new(move |left: &Element, right: &Element| {
            accessor.with(left, |l| accessor.with(right, |r| l.cmp(r)))
        })
    }

    /// Orders by the value read by `accessor`, largest first.
    #[inline]
    pub fn descending<A>(accessor: A) -> Self
    where
        A: Accessor<Element> + Send + Sync + 'static,
        A::Value: Ord,
    {
        Self::new(move |left: &Element, right: &Element| {
            accessor.with(left, |l| {
                accessor.with(right, |r| l.cmp(r).reverse())
            })
        })
    }

    /// Orders by the value read by `accessor` in the given direction.
    #[inline]
    pub fn by<A>(accessor: A, direction: Direction) -> Self
    where
        A: Accessor<Element> + Send + Sync + 'static,
        A::Value: Ord,
    {
        match direction {
            Direction::Ascending => Self::ascending(accessor),
            Direction::Descending => Self::descending(accessor),
        }
    }

    /// Compares two elements under this rule.
    #[inline]
    pub fn compare(&self, left: &Element, right: &Element) -> Ordering {
        (self.compare)(left, right)
    }

    /// Returns a descriptor with `Less` and `Greater` swapped.
    pub fn reversed(&self) -> Self
    where
        Element: 'static,
    {
        let inner = Arc::clone(&self.compare);
        Self::new(move |left: &Element, right: &Element| inner(left, right).reverse())
    }
}

impl<Element: ?Sized> Clone for SortDescriptor<Element> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            compare: Arc::clone(&self.compare),
        }
    }
}

impl<Element: ?Sized> fmt::Debug for SortDescriptor<Element> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortDescriptor").finish_non_exhaustive()
    }
}
