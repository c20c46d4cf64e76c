use std::borrow::{Borrow, ToOwned};

use crate::{Accessor, SortDescriptor, sort::compare_all, sort::ordering_from_less};

/// Key-path flavoured adapters for every iterator.
///
/// Items only need to borrow as the accessor's root, so the same accessor
/// works over `vec.iter()` and `vec.into_iter()` alike.
///
/// # Example
///
/// ```
/// use keypath::{KeyPathIterator, Property};
///
/// let data = [1, 2, 3, 4, 5, 6, 7, 8, 9];
///
/// let is_even = Property::new(|n: &i32| n % 2 == 0);
/// let even: Vec<&i32> = data.iter().filter_by(is_even).collect();
/// assert_eq!(even, [&2, &4, &6, &8]);
///
/// let description = Property::new(|n: &i32| n.to_string());
/// let labels: Vec<String> = data.iter().map_by(description).collect();
/// assert_eq!(labels[0], "1");
/// ```
pub trait KeyPathIterator: Iterator + Sized {
    /// Keeps the items for which `accessor` reads `true`, in their original order.
    #[inline]
    fn filter_by<Root, A>(self, accessor: A) -> impl Iterator<Item = Self::Item>
    where
        Root: ?Sized,
        Self::Item: Borrow<Root>,
        A: Accessor<Root, Value = bool>,
    {
        self.filter(move |item| {
            accessor.with(<Self::Item as Borrow<Root>>::borrow(item), |keep| *keep)
        })
    }

    /// Replaces every item with an owned copy of the value `accessor` reads.
    #[inline]
    fn map_by<Root, A>(
        self,
        accessor: A,
    ) -> impl Iterator<Item = <A::Value as ToOwned>::Owned>
    where
        Root: ?Sized,
        Self::Item: Borrow<Root>,
        A: Accessor<Root>,
        A::Value: ToOwned,
    {
        self.map(move |item| accessor.get(<Self::Item as Borrow<Root>>::borrow(&item)))
    }

    /// Collects and stably sorts the items with a strict less-than predicate.
    fn sorted_by_predicate<F>(self, is_less: F) -> Vec<Self::Item>
    where
        F: Fn(&Self::Item, &Self::Item) -> bool,
    {
        let mut items: Vec<Self::Item> = self.collect();
        items.sort_by(|left, right| ordering_from_less(&is_less, left, right));
        items
    }

    /// Collects and stably sorts the items by an ordered list of descriptors.
    fn sorted_by_descriptors<Root>(self, descriptors: &[SortDescriptor<Root>]) -> Vec<Self::Item>
    where
        Root: ?Sized,
        Self::Item: Borrow<Root>,
    {
        let mut items: Vec<Self::Item> = self.collect();
        if !descriptors.is_empty() {
            items.sort_by(|left, right| {
                compare_all(
                    descriptors,
                    <Self::Item as Borrow<Root>>::borrow(left),
                    <Self::Item as Borrow<Root>>::borrow(right),
                )
            });
        }
        items
    }
}

impl<I: Iterator> KeyPathIterator for I {}
