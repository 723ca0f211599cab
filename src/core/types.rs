// ============================================================================
// spark-toolkit - Core Types
// Capability traits shared by the operations, and the Nested<T> sequence
// ============================================================================

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// FIELDS (get field by name)
// =============================================================================

/// Named-field access on a record.
///
/// This is what `pluck` and `where_matches` need from an element. Map types
/// and JSON objects get it for free; client record types implement it by
/// hand, returning a reference into a uniform value type.
///
/// # Example
/// ```
/// use spark_toolkit::Fields;
///
/// struct Gem {
///     kind: String,
///     cut: String,
/// }
///
/// impl Fields for Gem {
///     type Value = String;
///
///     fn field(&self, name: &str) -> Option<&String> {
///         match name {
///             "kind" => Some(&self.kind),
///             "cut" => Some(&self.cut),
///             _ => None,
///         }
///     }
/// }
///
/// let ruby = Gem { kind: "ruby".into(), cut: "oval".into() };
/// assert_eq!(ruby.field("kind").map(String::as_str), Some("ruby"));
/// assert!(ruby.field("carat").is_none());
/// ```
pub trait Fields {
    type Value;

    /// Returns the value stored under `name`, or `None` if the record has no
    /// such field.
    fn field(&self, name: &str) -> Option<&Self::Value>;
}

impl<T: Fields + ?Sized> Fields for &T {
    type Value = T::Value;

    fn field(&self, name: &str) -> Option<&Self::Value> {
        (**self).field(name)
    }
}

impl<K, V, S> Fields for HashMap<K, V, S>
where
    K: Borrow<str> + Eq + Hash,
    S: BuildHasher,
{
    type Value = V;

    fn field(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<K, V> Fields for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
{
    type Value = V;

    fn field(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<K: Borrow<str>, V> Fields for [(K, V)] {
    type Value = V;

    fn field(&self, name: &str) -> Option<&V> {
        self.iter()
            .find(|(key, _)| Borrow::<str>::borrow(key) == name)
            .map(|(_, value)| value)
    }
}

impl<K: Borrow<str>, V> Fields for Vec<(K, V)> {
    type Value = V;

    fn field(&self, name: &str) -> Option<&V> {
        self.as_slice().field(name)
    }
}

impl Fields for Map<String, Value> {
    type Value = Value;

    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

/// Only JSON objects have fields; every other variant reports none.
impl Fields for Value {
    type Value = Value;

    fn field(&self, name: &str) -> Option<&Value> {
        self.as_object().and_then(|object| object.get(name))
    }
}

// =============================================================================
// MAPPING (ordered key-value entries)
// =============================================================================

/// A key-value container with a defined iteration order.
///
/// `entries()` must yield every entry exactly once, and two calls on the same
/// unmodified mapping must yield the same order. That order is:
///
/// - `BTreeMap`: ascending key order
/// - `serde_json::Map`: insertion order
/// - `Vec<(K, V)>`, `[(K, V)]`, `[(K, V); N]`: insertion (index) order
/// - `HashMap`: the iteration order of that particular instance; stable while
///   the map is unmodified, but not reproducible across processes
pub trait Mapping {
    type Key;
    type Value;

    fn entries(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A mapping that accepts inserts with override semantics.
///
/// Inserting an existing key replaces its value. Containers with positional
/// order keep the key where it was.
pub trait MappingMut: Mapping {
    fn insert(&mut self, key: Self::Key, value: Self::Value);
}

impl<K, V, S> Mapping for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl<K, V, S> MappingMut for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn insert(&mut self, key: K, value: V) {
        HashMap::insert(self, key, value);
    }
}

impl<K, V> Mapping for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

impl<K: Ord, V> MappingMut for BTreeMap<K, V> {
    fn insert(&mut self, key: K, value: V) {
        BTreeMap::insert(self, key, value);
    }
}

impl Mapping for Map<String, Value> {
    type Key = String;
    type Value = Value;

    fn entries(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.iter()
    }

    fn len(&self) -> usize {
        Map::len(self)
    }
}

impl MappingMut for Map<String, Value> {
    fn insert(&mut self, key: String, value: Value) {
        Map::insert(self, key, value);
    }
}

impl<K, V> Mapping for [(K, V)] {
    type Key = K;
    type Value = V;

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter().map(|(key, value)| (key, value))
    }

    fn len(&self) -> usize {
        <[(K, V)]>::len(self)
    }
}

impl<K, V, const N: usize> Mapping for [(K, V); N] {
    type Key = K;
    type Value = V;

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.as_slice().entries()
    }

    fn len(&self) -> usize {
        N
    }
}

impl<K, V> Mapping for Vec<(K, V)> {
    type Key = K;
    type Value = V;

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.as_slice().entries()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<K: PartialEq, V> MappingMut for Vec<(K, V)> {
    fn insert(&mut self, key: K, value: V) {
        match self.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = value,
            None => self.push((key, value)),
        }
    }
}

// =============================================================================
// SIZE
// =============================================================================

/// Number of values held by a sequence or mapping.
pub trait Size {
    fn size(&self) -> usize;
}

impl<T> Size for [T] {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Size for [T; N] {
    fn size(&self) -> usize {
        N
    }
}

impl<T> Size for Vec<T> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Size for VecDeque<T> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, S> Size for HashSet<T, S> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Size for HashMap<K, V, S> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V> Size for BTreeMap<K, V> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl Size for Map<String, Value> {
    fn size(&self) -> usize {
        self.len()
    }
}

// =============================================================================
// NESTED SEQUENCES
// =============================================================================

/// An element of an arbitrarily nested sequence.
///
/// `List` is listed first so that untagged deserialisation reads JSON arrays
/// as nesting rather than as leaves when `T` is itself `serde_json::Value`.
///
/// # Example
/// ```
/// use spark_toolkit::Nested;
///
/// let parsed: Vec<Nested<i32>> = serde_json::from_str("[1, [2], [3, [[4]]]]").unwrap();
/// assert_eq!(parsed[0], Nested::Leaf(1));
/// assert!(parsed[2].is_list());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nested<T> {
    List(Vec<Nested<T>>),
    Leaf(T),
}

impl<T> Nested<T> {
    pub fn leaf(value: T) -> Self {
        Nested::Leaf(value)
    }

    pub fn list(items: Vec<Nested<T>>) -> Self {
        Nested::List(items)
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Nested::Leaf(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Nested::List(_))
    }

    pub fn as_leaf(&self) -> Option<&T> {
        match self {
            Nested::Leaf(value) => Some(value),
            Nested::List(_) => None,
        }
    }

    /// Deepest level of nesting below this element. A leaf is depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Nested::Leaf(_) => 0,
            Nested::List(items) => 1 + items.iter().map(Nested::depth).max().unwrap_or(0),
        }
    }
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Nested::Leaf(value)
    }
}

// =============================================================================
// TESTS
// =============================================================================
