use std::cmp::Ordering;

use crate::SortDescriptor;

/// Compares two elements under an ordered list of descriptors.
///
/// The first descriptor is the primary key and each following one only
/// breaks ties left by those before it. When every descriptor reports
/// `Equal`, or the list is empty, the result is `Equal`.
#[inline]
pub fn compare_all<Element: ?Sized>(
    descriptors: &[SortDescriptor<Element>],
    left: &Element,
    right: &Element,
) -> Ordering {
    for descriptor in descriptors {
        match descriptor.compare(left, right) {
            Ordering::Equal => continue,
            decided => return decided,
        }
    }
    Ordering::Equal
}

/// Combines descriptors into one strict "left sorts before right" predicate.
///
/// Fully tied pairs, and every pair when `descriptors` is empty, yield `false`.
///
/// ```
/// use keypath::{KeyPath, SortDescriptor, ordered_before};
///
/// struct Person { name: &'static str, age: u32 }
///
/// let rules = [
///     SortDescriptor::ascending(KeyPath::new(|p: &Person| &p.age)),
///     SortDescriptor::descending(KeyPath::new(|p: &Person| &p.name)),
/// ];
/// let before = ordered_before(&rules);
///
/// let xavier = Person { name: "Xavier", age: 12 };
/// let charlie = Person { name: "Charlie", age: 12 };
/// assert!(before(&xavier, &charlie));
/// assert!(!before(&charlie, &xavier));
/// assert!(!before(&xavier, &xavier));
/// ```
#[inline]
pub fn ordered_before<Element: ?Sized>(
    descriptors: &[SortDescriptor<Element>],
) -> impl Fn(&Element, &Element) -> bool + '_ {
    move |left: &Element, right: &Element| {
        compare_all(descriptors, left, right) == Ordering::Less
    }
}

/// Converts a strict less-than predicate into a three-way comparison.
#[inline]
pub(crate) fn ordering_from_less<T: ?Sized>(
    is_less: &impl Fn(&T, &T) -> bool,
    left: &T,
    right: &T,
) -> Ordering {
    if is_less(left, right) {
        Ordering::Less
    } else if is_less(right, left) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

mod private {
    pub trait Sealed {}
    impl<T> Sealed for [T] {}
}

/// In-place sorting of slices by key paths and descriptors.
///
/// All sorts are stable: elements that compare equal keep their relative order.
pub trait SortByKeyPath<T>: private::Sealed {
    /// Sorts with a strict less-than predicate such as one built by [`their`](crate::their).
    fn sort_by_predicate<F>(&mut self, is_less: F)
    where
        F: Fn(&T, &T) -> bool;

    /// Sorts by an ordered list of descriptors, primary key first.
    fn sort_by_descriptors(&mut self, descriptors: &[SortDescriptor<T>]);
}

impl<T> SortByKeyPath<T> for [T] {
    #[inline]
    fn sort_by_predicate<F>(&mut self, is_less: F)
    where
        F: Fn(&T, &T) -> bool,
    {
        self.sort_by(|left, right| ordering_from_less(&is_less, left, right));
    }

    #[inline]
    fn sort_by_descriptors(&mut self, descriptors: &[SortDescriptor<T>]) {
        if descriptors.is_empty() {
            return;
        }
        self.sort_by(|left, right| compare_all(descriptors, left, right));
    }
}
