// ============================================================================
// spark-toolkit - Mapping Merge
// extend: the one operation that mutates its argument
// ============================================================================

use crate::core::types::{Mapping, MappingMut};

/// Copies every entry of each source into `destination`, in argument order,
/// and hands `destination` back.
///
/// Later sources override earlier ones, and any source overrides the
/// destination's own value for a shared key. The returned reference is the
/// `destination` passed in, not a copy.
///
/// # Example
/// ```
/// use serde_json::{Map, Value, json};
/// use spark_toolkit::extend;
///
/// let mut ice_cream: Map<String, Value> = serde_json::from_value(
///     json!({"melted": false, "flavor": "vanilla", "price": "priceless"}),
/// ).unwrap();
/// let otherworldly: Map<String, Value> =
///     serde_json::from_value(json!({"origin": "otherworldly"})).unwrap();
///
/// extend(&mut ice_cream, [&otherworldly]);
/// assert_eq!(
///     Value::Object(ice_cream),
///     json!({"melted": false, "flavor": "vanilla", "price": "priceless", "origin": "otherworldly"})
/// );
/// ```
pub fn extend<'d, 's, D, S, I>(destination: &'d mut D, sources: I) -> &'d mut D
where
    D: MappingMut + ?Sized,
    D::Key: Clone,
    D::Value: Clone,
    S: Mapping<Key = D::Key, Value = D::Value> + ?Sized + 's,
    I: IntoIterator<Item = &'s S>,
{
    for source in sources {
        for (key, value) in source.entries() {
            destination.insert(key.clone(), value.clone());
        }
    }
    destination
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};

    #[test]
    fn test_extend_returns_same_destination() {
        let mut dest: HashMap<&str, i32> = HashMap::from([("name", 1)]);
        let src = HashMap::from([("age", 50)]);

        let dest_ptr: *const HashMap<&str, i32> = &dest;
        let returned = extend(&mut dest, [&src]);
        assert_eq!(returned.len(), 2);
        assert!(std::ptr::eq(returned as *const _, dest_ptr));
        assert_eq!(dest["age"], 50);
    }

    #[test]
    fn test_extend_later_sources_win() {
        let mut dest = BTreeMap::from([("a", 1), ("b", 2)]);
        let first = BTreeMap::from([("b", 20), ("c", 30)]);
        let second = BTreeMap::from([("c", 300)]);

        extend(&mut dest, [&first, &second]);
        assert_eq!(dest, BTreeMap::from([("a", 1), ("b", 20), ("c", 300)]));
    }

    #[test]
    fn test_extend_pairs_keep_insertion_order() {
        let mut dest = vec![("melted", "no"), ("flavor", "vanilla")];
        let src = vec![("origin", "otherworldly"), ("flavor", "mint")];

        extend(&mut dest, [&src]);
        assert_eq!(
            dest,
            vec![("melted", "no"), ("flavor", "mint"), ("origin", "otherworldly")]
        );
    }

    #[test]
    fn test_extend_no_sources() {
        let mut dest = BTreeMap::from([("a", 1)]);
        let none: [&BTreeMap<&str, i32>; 0] = [];
        extend(&mut dest, none);
        assert_eq!(dest.len(), 1);
    }

    #[test]
    fn test_extend_from_slice_source() {
        let mut dest: HashMap<String, i32> = HashMap::new();
        let pairs: &[(String, i32)] = &[("x".to_string(), 1), ("y".to_string(), 2)];
        extend(&mut dest, [pairs]);
        assert_eq!(dest.get("y"), Some(&2));
    }
}
