// ============================================================================
// spark-toolkit - Slicing
// first, last, rest, size and their aliases
// ============================================================================
//
// Operations with an optional count come in two shapes: the bare form
// returns a single Option<&T>, the `_n` / `_from` form returns a new Vec.
// ============================================================================

use crate::core::types::Size;

/// The first element, or `None` if empty.
///
/// # Example
/// ```
/// use spark_toolkit::{first, first_n};
///
/// let picnic = ["buns", "hamburger", "ketchup", "mustard", "grill"];
/// assert_eq!(first(&picnic), Some(&"buns"));
/// assert_eq!(first_n(&picnic, 3), vec!["buns", "hamburger", "ketchup"]);
/// ```
pub fn first<T>(seq: &[T]) -> Option<&T> {
    seq.first()
}

/// The first `min(n, len)` elements.
pub fn first_n<T: Clone>(seq: &[T], n: usize) -> Vec<T> {
    seq[..n.min(seq.len())].to_vec()
}

/// The last element, or `None` if empty.
pub fn last<T>(seq: &[T]) -> Option<&T> {
    seq.last()
}

/// The last `min(n, len)` elements, in their original order.
///
/// # Example
/// ```
/// use spark_toolkit::last_n;
///
/// let picnic = ["buns", "hamburger", "ketchup", "mustard", "grill"];
/// assert_eq!(last_n(&picnic, 3), vec!["ketchup", "mustard", "grill"]);
/// ```
pub fn last_n<T: Clone>(seq: &[T], n: usize) -> Vec<T> {
    seq[seq.len().saturating_sub(n)..].to_vec()
}

/// Everything after the first element.
pub fn rest<T: Clone>(seq: &[T]) -> Vec<T> {
    rest_from(seq, 1)
}

/// Everything from `index` onward. An index past the end yields an empty
/// `Vec`.
///
/// # Example
/// ```
/// use spark_toolkit::rest_from;
///
/// let picnic = ["buns", "hamburger", "ketchup", "mustard", "grill"];
/// assert_eq!(rest_from(&picnic, 3), vec!["mustard", "grill"]);
/// assert!(rest_from(&picnic, 9).is_empty());
/// ```
pub fn rest_from<T: Clone>(seq: &[T], index: usize) -> Vec<T> {
    seq.get(index..).map(<[T]>::to_vec).unwrap_or_default()
}

/// Number of values in a sequence or mapping.
pub fn size<C: Size + ?Sized>(collection: &C) -> usize {
    collection.size()
}

// =============================================================================
// ALIASES
// =============================================================================

/// Alias of [`first`].
pub fn head<T>(seq: &[T]) -> Option<&T> {
    first(seq)
}

/// Alias of [`first_n`].
pub fn take<T: Clone>(seq: &[T], n: usize) -> Vec<T> {
    first_n(seq, n)
}

/// Alias of [`rest`].
pub fn tail<T: Clone>(seq: &[T]) -> Vec<T> {
    rest(seq)
}

// =============================================================================
// TESTS
// =============================================================================
