// ============================================================================
// spark-toolkit - Ergonomic Macros
// ============================================================================

/// Build a `Vec<Nested<T>>` from a bracketed literal.
///
/// Bracketed groups become `Nested::List`, anything else becomes
/// `Nested::Leaf`. Each item must be a single token tree, so wrap negative
/// numbers or longer expressions in parentheses.
///
/// # Usage
///
/// ```rust
/// use spark_toolkit::{nested, Nested};
///
/// let seq = nested![1, [2], [3, [[(-4)]]]];
/// assert_eq!(seq[0], Nested::Leaf(1));
/// assert_eq!(seq[1], Nested::List(vec![Nested::Leaf(2)]));
/// assert_eq!(seq[2].depth(), 3);
/// ```
#[macro_export]
macro_rules! nested {
    (@item [$($inner:tt),* $(,)?]) => {
        $crate::Nested::List($crate::nested![$($inner),*])
    };
    (@item $leaf:expr) => {
        $crate::Nested::Leaf($leaf)
    };
    ($($item:tt),* $(,)?) => {
        ::std::vec![$($crate::nested!(@item $item)),*]
    };
}
