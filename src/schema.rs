use std::{collections::BTreeMap, fmt, str::FromStr};

use tracing::{debug, trace};

use crate::{Accessor, Direction, Error, Result, SortDescriptor};

/// A sort rule expressed as data: a field name plus a direction.
///
/// Parses from the forms `name`, `+name`, `-name`, `name asc` and
/// `name desc`; direction words are case-insensitive.
///
/// ```
/// use keypath::{Direction, SortKey};
///
/// let key: SortKey = "-age".parse()?;
/// assert_eq!(key, SortKey::new("age", Direction::Descending));
/// assert_eq!("name ASC".parse::<SortKey>()?, SortKey::ascending("name"));
/// assert_eq!(key.to_string(), "-age");
/// # Ok::<(), keypath::Error>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortKey {
    pub field: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub direction: Direction,
}

impl SortKey {
    #[inline]
    pub fn new(field: impl Into<String>, direction: Direction) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    #[inline]
    pub fn ascending(field: impl Into<String>) -> Self {
        Self::new(field, Direction::Ascending)
    }

    #[inline]
    pub fn descending(field: impl Into<String>) -> Self {
        Self::new(field, Direction::Descending)
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(word: &str) -> Result<Self> {
        if word.eq_ignore_ascii_case("asc") || word.eq_ignore_ascii_case("ascending") {
            Ok(Direction::Ascending)
        } else if word.eq_ignore_ascii_case("desc") || word.eq_ignore_ascii_case("descending") {
            Ok(Direction::Descending)
        } else {
            Err(Error::InvalidDirection(word.to_owned()))
        }
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self> {
        let source = source.trim();
        let (prefixed, rest) = match source.as_bytes().first() {
            Some(b'-') => (Some(Direction::Descending), &source[1..]),
            Some(b'+') => (Some(Direction::Ascending), &source[1..]),
            _ => (None, source),
        };

        let mut words = rest.split_whitespace();
        let field = words.next().ok_or(Error::EmptyKey)?;
        let direction = match (prefixed, words.next()) {
            (Some(direction), None) => direction,
            (Some(_), Some(word)) => return Err(Error::InvalidDirection(word.to_owned())),
            (None, None) => Direction::Ascending,
            (None, Some(word)) => word.parse()?,
        };
        if let Some(extra) = words.next() {
            return Err(Error::InvalidDirection(extra.to_owned()));
        }

        Ok(Self::new(field, direction))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Ascending if self.field.starts_with(['-', '+']) => {
                write!(f, "+{}", self.field)
            }
            Direction::Ascending => f.write_str(&self.field),
            Direction::Descending => write!(f, "-{}", self.field),
        }
    }
}

/// Parses a comma-separated list of sort keys such as `"age,-name"`.
///
/// A blank string yields no keys.
pub fn parse_sort_keys(source: &str) -> Result<Vec<SortKey>> {
    if source.trim().is_empty() {
        return Ok(Vec::new());
    }
    source.split(',').map(str::parse::<SortKey>).collect()
}

struct Entry<Element: ?Sized> {
    ascending: SortDescriptor<Element>,
    descending: SortDescriptor<Element>,
}

/// A registry of named accessors that turns sort keys into descriptors.
///
/// ```
/// use keypath::{KeyPath, SortByKeyPath, SortSchema};
///
/// #[derive(Debug, PartialEq)]
/// struct Person { name: &'static str, age: u32 }
///
/// let schema = SortSchema::new()
///     .with_key("name", KeyPath::new(|p: &Person| &p.name))?
///     .with_key("age", KeyPath::new(|p: &Person| &p.age))?;
///
/// let mut people = vec![
///     Person { name: "Alexia", age: 23 },
///     Person { name: "Charlie", age: 12 },
///     Person { name: "Xavier", age: 12 },
/// ];
/// people.sort_by_descriptors(&schema.parse("age, name desc")?);
///
/// let names: Vec<_> = people.iter().map(|p| p.name).collect();
/// assert_eq!(names, ["Xavier", "Charlie", "Alexia"]);
/// # Ok::<(), keypath::Error>(())
/// ```
pub struct SortSchema<Element: ?Sized> {
    entries: BTreeMap<String, Entry<Element>>,
}

impl<Element: ?Sized> SortSchema<Element> {
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Registers `accessor` under `name`.
    pub fn register<A>(&mut self, name: impl Into<String>, accessor: A) -> Result<()>
    where
        A: Accessor<Element> + Clone + Send + Sync + 'static,
        A::Value: Ord,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::EmptyKey);
        }
        if self.entries.contains_key(&name) {
            return Err(Error::DuplicateKey(name));
        }

        trace!(key = %name, "registered sort key");
        self.entries.insert(
            name,
            Entry {
                ascending: SortDescriptor::ascending(accessor.clone()),
                descending: SortDescriptor::descending(accessor),
            },
        );
        Ok(())
    }

    /// Builder form of [`register`](Self::register).
    #[inline]
    pub fn with_key<A>(mut self, name: impl Into<String>, accessor: A) -> Result<Self>
    where
        A: Accessor<Element> + Clone + Send + Sync + 'static,
        A::Value: Ord,
    {
        self.register(name, accessor)?;
        Ok(self)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in lexicographic order.
    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the descriptor for one sort key.
    pub fn descriptor(&self, key: &SortKey) -> Result<SortDescriptor<Element>> {
        let entry = self
            .entries
            .get(&key.field)
            .ok_or_else(|| Error::UnknownKey(key.field.clone()))?;

        debug!(%key, "resolved sort key");
        Ok(match key.direction {
            Direction::Ascending => entry.ascending.clone(),
            Direction::Descending => entry.descending.clone(),
        })
    }

    /// Looks up descriptors for every key, keeping their order.
    pub fn resolve(&self, keys: &[SortKey]) -> Result<Vec<SortDescriptor<Element>>> {
        keys.iter().map(|key| self.descriptor(key)).collect()
    }

    /// Parses a comma-separated sort string and resolves it.
    pub fn parse(&self, source: &str) -> Result<Vec<SortDescriptor<Element>>> {
        self.resolve(&parse_sort_keys(source)?)
    }
}

impl<Element: ?Sized> Default for SortSchema<Element> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<Element: ?Sized> fmt::Debug for SortSchema<Element> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortSchema")
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}
