use std::{borrow::ToOwned, fmt};

/// Describes how to read a `Value` out of a `Root`.
///
/// An accessor is a value, not a call: it can be stored, copied and passed
/// around, and only later applied to a concrete root. Reads are expressed in
/// continuation-passing style so that stored fields (handed out by reference)
/// and computed properties (handed out as temporaries) share one trait.
///
/// # Example
///
/// ```
/// use keypath::{Accessor, KeyPath, Property};
///
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// let name = KeyPath::new(|p: &Person| &p.name);
/// let adult = Property::new(|p: &Person| p.age >= 18);
///
/// let p = Person { name: "Lee".into(), age: 44 };
/// assert_eq!(name.with(&p, |n| n.len()), 3);
/// assert_eq!(name.get(&p), "Lee");
/// assert!(adult.get(&p));
/// ```
pub trait Accessor<Root: ?Sized> {
    type Value: ?Sized;

    /// Reads the value out of `root` and passes it to `f`.
    fn with<R>(&self, root: &Root, f: impl FnOnce(&Self::Value) -> R) -> R;

    /// Reads an owned copy of the value out of `root`.
    #[inline]
    fn get(&self, root: &Root) -> <Self::Value as ToOwned>::Owned
    where
        Self::Value: ToOwned,
    {
        self.with(root, <Self::Value as ToOwned>::to_owned)
    }

    /// Chains `next` after this accessor, reading through the intermediate value.
    ///
    /// ```
    /// use keypath::{Accessor, KeyPath};
    ///
    /// struct Team { lead: Person }
    /// struct Person { age: u32 }
    ///
    /// let lead_age = KeyPath::new(|t: &Team| &t.lead).appending(KeyPath::new(|p: &Person| &p.age));
    /// assert_eq!(lead_age.get(&Team { lead: Person { age: 21 } }), 21);
    /// ```
    #[inline]
    fn appending<B>(self, next: B) -> Appended<Self, B>
    where
        Self: Sized,
        B: Accessor<Self::Value>,
    {
        Appended { head: self, tail: next }
    }
}

impl<Root: ?Sized, A: Accessor<Root> + ?Sized> Accessor<Root> for &A {
    type Value = A::Value;

    #[inline]
    fn with<R>(&self, root: &Root, f: impl FnOnce(&Self::Value) -> R) -> R {
        (**self).with(root, f)
    }
}

/// A reference to a stored field of `Root`.
pub struct KeyPath<Root: ?Sized, Value: ?Sized> {
    read: fn(&Root) -> &Value,
}

impl<Root: ?Sized, Value: ?Sized> KeyPath<Root, Value> {
    /// Creates a key path from a field projection.
    ///
    /// Non-capturing closures coerce to the function pointer, so the usual
    /// call site is `KeyPath::new(|p: &Person| &p.name)`. The [`key_path!`]
    /// macro shortens this further.
    ///
    /// [`key_path!`]: crate::key_path
    #[inline]
    pub const fn new(read: fn(&Root) -> &Value) -> Self {
        Self { read }
    }

    /// Borrows the field out of `root`.
    #[inline]
    pub fn read<'r>(&self, root: &'r Root) -> &'r Value {
        (self.read)(root)
    }
}

impl<Root: ?Sized, Value: ?Sized> Accessor<Root> for KeyPath<Root, Value> {
    type Value = Value;

    #[inline]
    fn with<R>(&self, root: &Root, f: impl FnOnce(&Value) -> R) -> R {
        f((self.read)(root))
    }
}

impl<Root: ?Sized, Value: ?Sized> Clone for KeyPath<Root, Value> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<Root: ?Sized, Value: ?Sized> Copy for KeyPath<Root, Value> {}

impl<Root: ?Sized, Value: ?Sized> fmt::Debug for KeyPath<Root, Value> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "KeyPath<{}, {}>",
            std::any::type_name::<Root>(),
            std::any::type_name::<Value>()
        )
    }
}

/// A computed property of `Root`, such as `i32::is_positive` or `ToString::to_string`.
///
/// Computed values are produced fresh on every read, so the value type must be
/// its own owned form (any `Clone` type is).
pub struct Property<Root: ?Sized, Value> {
    compute: fn(&Root) -> Value,
}

impl<Root: ?Sized, Value> Property<Root, Value> {
    #[inline]
    pub const fn new(compute: fn(&Root) -> Value) -> Self {
        Self { compute }
    }

    /// Runs the computation on `root`.
    #[inline]
    pub fn compute(&self, root: &Root) -> Value {
        (self.compute)(root)
    }
}

impl<Root, Value> Accessor<Root> for Property<Root, Value>
where
    Root: ?Sized,
    Value: ToOwned<Owned = Value>,
{
    type Value = Value;

    #[inline]
    fn with<R>(&self, root: &Root, f: impl FnOnce(&Value) -> R) -> R {
        f(&(self.compute)(root))
    }

    /// Returns the computed value itself, without copying it.
    #[inline]
    fn get(&self, root: &Root) -> Value {
        (self.compute)(root)
    }
}

impl<Root: ?Sized, Value> Clone for Property<Root, Value> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<Root: ?Sized, Value> Copy for Property<Root, Value> {}

impl<Root: ?Sized, Value> fmt::Debug for Property<Root, Value> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Property<{}, {}>",
            std::any::type_name::<Root>(),
            std::any::type_name::<Value>()
        )
    }
}

/// Two accessors read one after the other. Built by [`Accessor::appending`].
#[derive(Clone, Copy, Debug)]
pub struct Appended<A, B> {
    head: A,
    tail: B,
}

impl<Root, A, B> Accessor<Root> for Appended<A, B>
where
    Root: ?Sized,
    A: Accessor<Root>,
    B: Accessor<A::Value>,
{
    type Value = B::Value;

    #[inline]
    fn with<R>(&self, root: &Root, f: impl FnOnce(&Self::Value) -> R) -> R {
        self.head.with(root, |mid| self.tail.with(mid, f))
    }
}

/// Turns an accessor into a plain unary function returning owned values.
///
/// ```
/// use keypath::{Property, to_fn};
///
/// let data = [1, 2, 3];
/// let labels: Vec<String> = data.iter().map(to_fn(Property::new(|n: &i32| n.to_string()))).collect();
/// assert_eq!(labels, ["1", "2", "3"]);
/// ```
#[inline]
pub fn to_fn<Root, A>(accessor: A) -> impl Fn(&Root) -> <A::Value as ToOwned>::Owned
where
    Root: ?Sized,
    A: Accessor<Root>,
    A::Value: ToOwned,
{
    move |root: &Root| accessor.get(root)
}
