// ============================================================================
// spark-toolkit - Cleaning & Combination
// compact, flatten, without, union
// ============================================================================

use crate::core::truthy::Truthy;
use crate::core::types::Nested;

// =============================================================================
// COMPACT
// =============================================================================

/// A copy of `seq` with every falsy element removed.
///
/// Falsy is the fixed policy of [`Truthy`]: `false`, zero, NaN, empty text
/// and the absent value.
///
/// # Example
/// ```
/// use serde_json::json;
/// use spark_toolkit::compact;
///
/// let sloppy = [json!(0), json!(""), json!(1), json!("beans"), json!(""),
///               json!(false), json!(false), json!(true)];
/// assert_eq!(compact(&sloppy), vec![json!(1), json!("beans"), json!(true)]);
/// ```
pub fn compact<T: Truthy + Clone>(seq: &[T]) -> Vec<T> {
    seq.iter().filter(|item| item.is_truthy()).cloned().collect()
}

// =============================================================================
// FLATTEN
// =============================================================================

/// Recursively flattens to the leaves, left to right, depth first.
///
/// # Example
/// ```
/// use spark_toolkit::{flatten, nested};
///
/// assert_eq!(flatten(&nested![1, [2], [3, [[4]]]]), vec![1, 2, 3, 4]);
/// ```
pub fn flatten<T: Clone>(seq: &[Nested<T>]) -> Vec<T> {
    let mut out = Vec::new();
    collect_leaves(seq, &mut out);
    out
}

fn collect_leaves<T: Clone>(seq: &[Nested<T>], out: &mut Vec<T>) {
    for item in seq {
        match item {
            Nested::Leaf(value) => out.push(value.clone()),
            Nested::List(items) => collect_leaves(items, out),
        }
    }
}

/// Splices in exactly one level of nesting. Deeper lists stay lists.
///
/// # Example
/// ```
/// use spark_toolkit::{flatten_shallow, nested};
///
/// assert_eq!(flatten_shallow(&nested![1, [2], [3, [[4]]]]), nested![1, 2, 3, [[4]]]);
/// ```
pub fn flatten_shallow<T: Clone>(seq: &[Nested<T>]) -> Vec<Nested<T>> {
    flatten_depth(seq, 1)
}

/// Splices in up to `depth` levels of nesting. `depth == 0` returns a copy.
pub fn flatten_depth<T: Clone>(seq: &[Nested<T>], depth: usize) -> Vec<Nested<T>> {
    let mut out = Vec::with_capacity(seq.len());
    splice(seq, depth, &mut out);
    out
}

fn splice<T: Clone>(seq: &[Nested<T>], depth: usize, out: &mut Vec<Nested<T>>) {
    for item in seq {
        match item {
            Nested::List(items) if depth > 0 => splice(items, depth - 1, out),
            other => out.push(other.clone()),
        }
    }
}

// =============================================================================
// WITHOUT / UNION
// =============================================================================

/// A copy of `seq` without any element equal to one of `excluded`.
///
/// # Example
/// ```
/// use spark_toolkit::without;
///
/// assert_eq!(without(&[1, 2, 1, 0, 3, 1, 4], &[0, 1]), vec![2, 3, 4]);
/// ```
pub fn without<T: PartialEq + Clone>(seq: &[T], excluded: &[T]) -> Vec<T> {
    seq.iter()
        .filter(|item| !excluded.contains(*item))
        .cloned()
        .collect()
}

/// Distinct elements across all `seqs`, in first-occurrence order.
///
/// Distinctness uses `PartialEq`; each element is checked against the output
/// collected so far.
///
/// # Example
/// ```
/// use spark_toolkit::union;
///
/// let merged: Vec<i32> = union([vec![1, 2, 3], vec![101, 2, 1, 10], vec![2, 1]]);
/// assert_eq!(merged, vec![1, 2, 3, 101, 10]);
/// ```
pub fn union<T, I>(seqs: I) -> Vec<T>
where
    T: PartialEq + Clone,
    I: IntoIterator,
    I::Item: AsRef<[T]>,
{
    let mut out: Vec<T> = Vec::new();
    for seq in seqs {
        for item in seq.as_ref() {
            if !out.contains(item) {
                out.push(item.clone());
            }
        }
    }
    out
}

// =============================================================================
// TESTS
// =============================================================================
