// ============================================================================
// spark-toolkit - Predicate Search
// find, find_index, filter, where_matches, contains
// ============================================================================

use crate::core::types::{Fields, Mapping};

/// Returns the leftmost element satisfying `predicate`.
///
/// Stops at the first match; the predicate is never called on later
/// elements. `None` means nothing matched, which is distinct from finding a
/// falsy element.
///
/// # Example
/// ```
/// use spark_toolkit::find;
///
/// let flags = [true, true, true, false, true, false];
/// assert_eq!(find(&flags, |x| !*x), Some(&false));
/// assert_eq!(find(&[1, 3, 5], |x| x % 2 == 0), None);
/// ```
pub fn find<T, P>(seq: &[T], mut predicate: P) -> Option<&T>
where
    P: FnMut(&T) -> bool,
{
    seq.iter().find(|item| predicate(*item))
}

/// Position of the leftmost element satisfying `predicate`.
pub fn find_index<T, P>(seq: &[T], predicate: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    seq.iter().position(predicate)
}

/// Every element satisfying `predicate`, in their original order.
///
/// # Example
/// ```
/// use spark_toolkit::filter;
///
/// assert_eq!(filter(&[1, 5, 10, 20, 25, 30], |x| *x > 20), vec![25, 30]);
/// ```
pub fn filter<T, P>(seq: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    seq.iter().filter(|item| predicate(*item)).cloned().collect()
}

/// Every element that has an equal value for each key of `properties`.
///
/// A missing field never matches. An empty `properties` mapping matches
/// every element.
///
/// # Example
/// ```
/// use serde_json::json;
/// use spark_toolkit::where_matches;
///
/// let pets = vec![
///     json!({"name": "Jacob", "age": 27, "type": "human"}),
///     json!({"name": "Bailey", "age": 5, "type": "dog"}),
/// ];
/// let humans = where_matches(&pets, &[("type", json!("human"))]);
/// assert_eq!(humans, vec![pets[0].clone()]);
/// ```
pub fn where_matches<T, M>(seq: &[T], properties: &M) -> Vec<T>
where
    T: Fields + Clone,
    T::Value: PartialEq,
    M: Mapping<Value = T::Value> + ?Sized,
    M::Key: AsRef<str>,
{
    seq.iter()
        .filter(|item| has_properties(*item, properties))
        .cloned()
        .collect()
}

fn has_properties<T, M>(item: &T, properties: &M) -> bool
where
    T: Fields,
    T::Value: PartialEq,
    M: Mapping<Value = T::Value> + ?Sized,
    M::Key: AsRef<str>,
{
    properties
        .entries()
        .all(|(key, expected)| item.field(key.as_ref()) == Some(expected))
}

/// True if some element equals `value`.
pub fn contains<T: PartialEq>(seq: &[T], value: &T) -> bool {
    seq.iter().any(|item| item == value)
}

// =============================================================================
// TESTS
// =============================================================================
