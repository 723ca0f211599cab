// ============================================================================
// spark-toolkit - JSON Documents
// The toolkit over serde_json::Value, where shapes are only known at runtime
// ============================================================================
//
// Typed operations take slices and mappings. Here the input is a Value that
// may or may not be an array or object, so every operation checks the shape
// first and reports a ToolkitError instead of guessing. Counts and indices
// arrive as i64 (the way JSON numbers do) and negatives are clamped to zero.
//
// Anything that already works on a &[Value] (find, filter, pluck, compact,
// ...) is not repeated here; call as_array() and use the typed function.
//
// Equality: the typed functions compare with Value's own PartialEq, which
// keeps integers and floats apart (27 != 27.0). The comparing functions in
// this module (where_matches, contains, without, union) use same_value
// instead, where numbers are equal when their values are.
// ============================================================================

use rand::Rng;
use serde_json::{Map, Number, Value};

use crate::core::error::{Result, ToolkitError};
use crate::ops::{random, slicing};

// =============================================================================
// SHAPE HELPERS
// =============================================================================

/// Name of the JSON type of `value`, as used in error messages.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// The elements of an array document.
pub fn as_array(value: &Value) -> Result<&[Value]> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| ToolkitError::not_an_array(kind_of(value)))
}

/// The entries of an object document.
pub fn as_object(value: &Value) -> Result<&Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| ToolkitError::not_an_object(kind_of(value)))
}

fn clamp(count: i64) -> usize {
    usize::try_from(count.max(0)).unwrap_or(usize::MAX)
}

// =============================================================================
// MAPPING OPS
// =============================================================================

/// Property names of an object, in insertion order.
pub fn keys(value: &Value) -> Result<Vec<String>> {
    Ok(crate::ops::keys(as_object(value)?))
}

/// Property values of an object, aligned with [`keys`].
pub fn values(value: &Value) -> Result<Vec<Value>> {
    Ok(crate::ops::values(as_object(value)?))
}

/// Element count of an array or property count of an object.
pub fn size(value: &Value) -> Result<usize> {
    match value {
        Value::Array(items) => Ok(items.len()),
        Value::Object(map) => Ok(map.len()),
        other => Err(ToolkitError::not_a_collection(kind_of(other))),
    }
}

/// Merges each source object into `destination`, later sources winning.
///
/// Every argument is checked before anything is written, so on error the
/// destination is unchanged.
///
/// # Example
/// ```
/// use serde_json::json;
/// use spark_toolkit::json;
///
/// let mut moe = json!({"name": "moe"});
/// json::extend(&mut moe, &[json!({"age": 50})]).unwrap();
/// assert_eq!(moe, json!({"name": "moe", "age": 50}));
///
/// assert!(json::extend(&mut moe, &[json!([1, 2])]).is_err());
/// ```
pub fn extend<'d>(destination: &'d mut Value, sources: &[Value]) -> Result<&'d mut Value> {
    let found = kind_of(destination);
    let Value::Object(target) = destination else {
        return Err(ToolkitError::not_an_object(found));
    };

    let objects = sources
        .iter()
        .map(as_object)
        .collect::<Result<Vec<_>>>()?;
    crate::ops::extend(target, objects);

    Ok(destination)
}

// =============================================================================
// EQUALITY
// =============================================================================

/// Structural equality that treats numbers by value, so `27` equals `27.0`.
/// Arrays compare element-wise and objects key by key, ignoring order.
///
/// # Example
/// ```
/// use serde_json::json;
/// use spark_toolkit::json;
///
/// assert!(json::same_value(&json!({"age": 27}), &json!({"age": 27.0})));
/// assert!(!json::same_value(&json!(1), &json!("1")));
/// ```
pub fn same_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => same_number(x, y),
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| same_value(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(key, x)| ys.get(key).is_some_and(|y| same_value(x, y)))
        }
        _ => a == b,
    }
}

fn same_number(x: &Number, y: &Number) -> bool {
    if let (Some(x), Some(y)) = (x.as_i64(), y.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (x.as_u64(), y.as_u64()) {
        return x == y;
    }
    match (x.as_f64(), y.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// Elements of an array whose fields include every property of `properties`.
/// Non-object elements match only an empty `properties`.
pub fn where_matches(value: &Value, properties: &Value) -> Result<Vec<Value>> {
    let items = as_array(value)?;
    let wanted = as_object(properties)?;
    Ok(crate::ops::filter(items, |item| {
        wanted.iter().all(|(key, expected)| {
            item.get(key.as_str())
                .is_some_and(|actual| same_value(actual, expected))
        })
    }))
}

/// Whether any element of an array is [`same_value`] as `target`.
pub fn contains(value: &Value, target: &Value) -> Result<bool> {
    Ok(as_array(value)?.iter().any(|item| same_value(item, target)))
}

/// The array without any element matching one of `excluded`.
pub fn without(value: &Value, excluded: &[Value]) -> Result<Vec<Value>> {
    let items = as_array(value)?;
    Ok(crate::ops::filter(items, |item| {
        !excluded.iter().any(|other| same_value(item, other))
    }))
}

/// Distinct elements across several arrays, in first-seen order. The first
/// spelling of a number wins (`[1]` then `[1.0]` keeps `1`).
pub fn union(arrays: &[Value]) -> Result<Vec<Value>> {
    let arrays = arrays.iter().map(as_array).collect::<Result<Vec<_>>>()?;
    let mut out: Vec<Value> = Vec::new();
    for item in arrays.into_iter().flatten() {
        if !out.iter().any(|seen| same_value(seen, item)) {
            out.push(item.clone());
        }
    }
    Ok(out)
}

// =============================================================================
// SEQUENCE OPS
// =============================================================================

/// Flattens an array document, recursively or (`shallow`) by one level.
/// Non-array elements are leaves.
///
/// # Example
/// ```
/// use serde_json::json;
/// use spark_toolkit::json;
///
/// let doc = json!([1, [2], [3, [[4]]]]);
/// assert_eq!(json::flatten(&doc, false).unwrap(), vec![json!(1), json!(2), json!(3), json!(4)]);
/// assert_eq!(json::flatten(&doc, true).unwrap(), vec![json!(1), json!(2), json!(3), json!([[4]])]);
/// ```
pub fn flatten(value: &Value, shallow: bool) -> Result<Vec<Value>> {
    let items = as_array(value)?;
    let depth = if shallow { 1 } else { usize::MAX };
    let mut out = Vec::with_capacity(items.len());
    splice(items, depth, &mut out);
    Ok(out)
}

fn splice(items: &[Value], depth: usize, out: &mut Vec<Value>) {
    for item in items {
        match item {
            Value::Array(inner) if depth > 0 => splice(inner, depth - 1, out),
            other => out.push(other.clone()),
        }
    }
}

/// First element of an array, `None` if it is empty.
pub fn first(value: &Value) -> Result<Option<&Value>> {
    Ok(slicing::first(as_array(value)?))
}

/// First `n` elements; negative `n` gives none.
pub fn first_n(value: &Value, n: i64) -> Result<Vec<Value>> {
    Ok(slicing::first_n(as_array(value)?, clamp(n)))
}

/// Last element of an array, `None` if it is empty.
pub fn last(value: &Value) -> Result<Option<&Value>> {
    Ok(slicing::last(as_array(value)?))
}

/// Last `n` elements; negative `n` gives none.
pub fn last_n(value: &Value, n: i64) -> Result<Vec<Value>> {
    Ok(slicing::last_n(as_array(value)?, clamp(n)))
}

/// Elements from `index` on; a negative index counts as 0.
pub fn rest_from(value: &Value, index: i64) -> Result<Vec<Value>> {
    Ok(slicing::rest_from(as_array(value)?, clamp(index)))
}

/// One random element, `None` if the array is empty.
pub fn sample_one<'a, R>(value: &'a Value, rng: &mut R) -> Result<Option<&'a Value>>
where
    R: Rng + ?Sized,
{
    Ok(random::sample_one(as_array(value)?, rng))
}

/// Up to `n` random elements without replacement; negative `n` gives none.
pub fn sample<R: Rng + ?Sized>(value: &Value, n: i64, rng: &mut R) -> Result<Vec<Value>> {
    Ok(random::sample(as_array(value)?, clamp(n), rng))
}

/// A shuffled copy of an array.
pub fn shuffle<R: Rng + ?Sized>(value: &Value, rng: &mut R) -> Result<Vec<Value>> {
    Ok(random::shuffle(as_array(value)?, rng))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::json;

    fn ice_cream() -> Value {
        json!({"melted": false, "flavor": "vanilla", "price": "priceless"})
    }

    #[test]
    fn test_kind_of() {
        assert_eq!(kind_of(&json!(null)), "null");
        assert_eq!(kind_of(&json!([1])), "array");
        assert_eq!(kind_of(&json!({"a": 1})), "object");
        assert_eq!(kind_of(&json!(1.5)), "number");
    }

    #[test]
    fn test_keys_values_insertion_order() {
        assert_eq!(keys(&ice_cream()).unwrap(), vec!["melted", "flavor", "price"]);
        assert_eq!(
            values(&ice_cream()).unwrap(),
            vec![json!(false), json!("vanilla"), json!("priceless")]
        );
    }

    #[test]
    fn test_keys_rejects_arrays() {
        assert_eq!(
            keys(&json!([1, 2])),
            Err(ToolkitError::NotAnObject { found: "array" })
        );
    }

    #[test]
    fn test_size() {
        assert_eq!(size(&json!({"one": 1, "two": 2, "three": 3})), Ok(3));
        assert_eq!(size(&json!([1, 2])), Ok(2));
        assert_eq!(
            size(&json!("abc")),
            Err(ToolkitError::NotACollection { found: "string" })
        );
    }

    #[test]
    fn test_extend_appends_and_returns_destination() {
        let mut dest = ice_cream();
        let returned = extend(&mut dest, &[json!({"origin": "otherworldly"})]).unwrap();
        assert_eq!(
            keys(returned).unwrap(),
            vec!["melted", "flavor", "price", "origin"]
        );
        assert_eq!(dest["origin"], "otherworldly");
    }

    #[test]
    fn test_extend_override_keeps_position() {
        let mut dest = ice_cream();
        extend(
            &mut dest,
            &[json!({"flavor": "mint"}), json!({"flavor": "pistachio", "melted": true})],
        )
        .unwrap();
        assert_eq!(dest["flavor"], "pistachio");
        assert_eq!(dest["melted"], true);
        assert_eq!(keys(&dest).unwrap(), vec!["melted", "flavor", "price"]);
    }

    #[test]
    fn test_extend_is_atomic_on_error() {
        let mut dest = ice_cream();
        let err = extend(&mut dest, &[json!({"origin": "x"}), json!(3)]).unwrap_err();
        assert_eq!(err, ToolkitError::NotAnObject { found: "number" });
        assert_eq!(dest, ice_cream());

        let mut not_object = json!([1]);
        assert!(extend(&mut not_object, &[]).is_err());
    }

    #[test]
    fn test_same_value_numbers_by_value() {
        assert!(same_value(&json!(27), &json!(27.0)));
        assert!(same_value(&json!(-3), &json!(-3.0)));
        assert!(same_value(&json!(u64::MAX), &json!(u64::MAX)));
        assert!(!same_value(&json!(27), &json!(27.5)));
        assert!(!same_value(&json!(0), &json!(false)));
        assert!(same_value(&json!([1, {"a": 2.0}]), &json!([1.0, {"a": 2}])));
        assert!(same_value(&json!({"a": 1, "b": 2}), &json!({"b": 2, "a": 1})));
        assert!(!same_value(&json!({"a": 1}), &json!({"a": 1, "b": 2})));
        assert!(!same_value(&json!([1]), &json!([1, 1])));
    }

    #[test]
    fn test_where_matches_mixed_number_spellings() {
        let people = json!([
            {"name": "Cora", "age": 26},
            {"name": "Ira", "age": 27},
            {"name": "Hal", "age": 27.0},
            "not a record",
        ]);
        let found = where_matches(&people, &json!({"age": 27.0})).unwrap();
        assert_eq!(found, vec![json!({"name": "Ira", "age": 27}), json!({"name": "Hal", "age": 27.0})]);
        assert_eq!(where_matches(&people, &json!({})).unwrap().len(), 4);
        assert!(where_matches(&people, &json!([1])).is_err());
        assert!(where_matches(&json!({"a": 1}), &json!({})).is_err());
    }

    #[test]
    fn test_contains_without_union_by_value() {
        let numbers = json!([1, 2.5, 3]);
        assert_eq!(contains(&numbers, &json!(3.0)), Ok(true));
        assert_eq!(contains(&numbers, &json!("3")), Ok(false));
        assert!(contains(&json!("abc"), &json!("a")).is_err());

        assert_eq!(without(&numbers, &[json!(1.0), json!(3)]).unwrap(), vec![json!(2.5)]);

        let merged = union(&[json!([1, 2]), json!([1.0, 3]), json!([])]).unwrap();
        assert_eq!(merged, vec![json!(1), json!(2), json!(3)]);
        assert_eq!(
            union(&[json!([1]), json!(2)]),
            Err(ToolkitError::NotAnArray { found: "number" })
        );
    }

    #[test]
    fn test_flatten_fruit() {
        let fruit = json!(["strawberry", ["watermelon", "cantelope"], ["grapes", ["apples"]]]);
        assert_eq!(
            flatten(&fruit, false).unwrap(),
            vec!["strawberry", "watermelon", "cantelope", "grapes", "apples"]
        );
        assert_eq!(
            flatten(&fruit, true).unwrap(),
            vec![
                json!("strawberry"),
                json!("watermelon"),
                json!("cantelope"),
                json!("grapes"),
                json!(["apples"]),
            ]
        );
        assert!(flatten(&json!({"a": 1}), false).is_err());
    }

    #[test]
    fn test_slicing_with_signed_counts() {
        let picnic = json!(["buns", "hamburger", "ketchup", "mustard", "grill"]);
        assert_eq!(first(&picnic).unwrap(), Some(&json!("buns")));
        assert_eq!(last(&picnic).unwrap(), Some(&json!("grill")));
        assert_eq!(first_n(&picnic, 3).unwrap(), vec!["buns", "hamburger", "ketchup"]);
        assert_eq!(last_n(&picnic, 3).unwrap(), vec!["ketchup", "mustard", "grill"]);
        assert_eq!(rest_from(&picnic, 3).unwrap(), vec!["mustard", "grill"]);

        assert!(first_n(&picnic, -2).unwrap().is_empty());
        assert!(last_n(&picnic, -1).unwrap().is_empty());
        assert_eq!(rest_from(&picnic, -5).unwrap().len(), 5);
        assert_eq!(first(&json!([])).unwrap(), None);
        assert!(first(&json!(null)).is_err());
    }

    #[test]
    fn test_sampling_with_signed_counts() {
        let gems = json!(["ruby", "sapphire", "diamond"]);
        let mut rng = StdRng::seed_from_u64(4);

        assert!(sample(&gems, -3, &mut rng).unwrap().is_empty());
        assert_eq!(sample(&gems, 2, &mut rng).unwrap().len(), 2);
        assert!(sample_one(&gems, &mut rng).unwrap().is_some());
        assert_eq!(sample_one(&json!([]), &mut rng).unwrap(), None);
        assert_eq!(shuffle(&gems, &mut rng).unwrap().len(), 3);
        assert!(shuffle(&json!(7), &mut rng).is_err());
    }
}
