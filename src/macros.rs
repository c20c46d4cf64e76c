/// Builds a [`KeyPath`](crate::KeyPath) from a root type and a field path.
///
/// `key_path!(Person, name)` expands to `KeyPath::new(|root: &Person| &root.name)`.
/// Nested fields are separated by dots.
///
/// ```
/// use keypath::{Accessor, key_path};
///
/// struct Address { city: String }
/// struct Person { age: u32, address: Address }
///
/// let person = Person { age: 33, address: Address { city: "Lyon".into() } };
/// assert_eq!(key_path!(Person, age).get(&person), 33);
/// assert_eq!(key_path!(Person, address.city).get(&person), "Lyon");
/// ```
#[macro_export]
macro_rules! key_path {
    ($root:ty, $($field:tt).+) => {
        $crate::KeyPath::new(|root: &$root| &root.$($field).+)
    };
}
