// ============================================================================
// spark-toolkit - Projection
// pluck, keys, values
// ============================================================================

use crate::core::types::{Fields, Mapping};

/// The value of field `key` for each element, in order.
///
/// An element without that field contributes `None`, so the result always
/// has one entry per input element and positions line up with `seq`.
///
/// # Example
/// ```
/// use serde_json::json;
/// use spark_toolkit::pluck;
///
/// let stooges = vec![json!({"name": "moe"}), json!({"nick": "larry"})];
/// assert_eq!(pluck(&stooges, "name"), vec![Some(json!("moe")), None]);
/// ```
pub fn pluck<T>(seq: &[T], key: &str) -> Vec<Option<T::Value>>
where
    T: Fields,
    T::Value: Clone,
{
    seq.iter().map(|item| item.field(key).cloned()).collect()
}

/// All keys of `mapping` in its iteration order.
///
/// # Example
/// ```
/// use spark_toolkit::keys;
///
/// let ice_cream = [("melted", "no"), ("flavor", "vanilla"), ("price", "priceless")];
/// assert_eq!(keys(&ice_cream), vec!["melted", "flavor", "price"]);
/// ```
pub fn keys<M>(mapping: &M) -> Vec<M::Key>
where
    M: Mapping + ?Sized,
    M::Key: Clone,
{
    let mut out = Vec::with_capacity(mapping.len());
    out.extend(mapping.entries().map(|(key, _)| key.clone()));
    out
}

/// All values of `mapping`, positionally aligned with [`keys`].
pub fn values<M>(mapping: &M) -> Vec<M::Value>
where
    M: Mapping + ?Sized,
    M::Value: Clone,
{
    let mut out = Vec::with_capacity(mapping.len());
    out.extend(mapping.entries().map(|(_, value)| value.clone()));
    out
}

// =============================================================================
// TESTS
// =============================================================================
