// ============================================================================
// spark-toolkit - Ranking
// max, min, max_by_key, min_by_key
// ============================================================================

use std::cmp::Ordering;

/// The greatest element, or `None` for an empty slice.
///
/// Ties go to the earliest element. Unlike `Iterator::max`, which keeps the
/// last of equal maxima, the scan only replaces its pick on a strictly
/// greater value. Values that do not compare with themselves (NaN) are never
/// picked while a comparable one exists; if none does, the first element is
/// returned.
///
/// # Example
/// ```
/// use spark_toolkit::max;
///
/// assert_eq!(max(&[10, 5, 100, 2, 1000]), Some(&1000));
/// assert_eq!(max::<i32>(&[]), None);
/// ```
pub fn max<T: PartialOrd>(seq: &[T]) -> Option<&T> {
    extremum(seq, |item| item, Ordering::Greater)
}

/// The least element, or `None` for an empty slice. Ties go to the earliest
/// element.
pub fn min<T: PartialOrd>(seq: &[T]) -> Option<&T> {
    extremum(seq, |item| item, Ordering::Less)
}

/// The element with the greatest score.
///
/// `scorer` runs once per element. Ties go to the earliest element. A score
/// that does not compare with itself (a NaN) is skipped wherever it sits; when
/// every score is like that, the first element is returned.
///
/// # Example
/// ```
/// use spark_toolkit::max_by_key;
///
/// let gems = [("ruby", 100), ("sapphire", 200), ("diamond", 300)];
/// assert_eq!(max_by_key(&gems, |g| g.1), Some(&("diamond", 300)));
/// ```
pub fn max_by_key<T, K, F>(seq: &[T], scorer: F) -> Option<&T>
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    extremum(seq, scorer, Ordering::Greater)
}

/// The element with the least score. Same tie rules as [`max_by_key`].
pub fn min_by_key<T, K, F>(seq: &[T], scorer: F) -> Option<&T>
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    extremum(seq, scorer, Ordering::Less)
}

/// Left-to-right scan keeping the first element whose score beats every
/// earlier comparable one in the `wanted` direction.
fn extremum<'a, T, K, F>(seq: &'a [T], mut scorer: F, wanted: Ordering) -> Option<&'a T>
where
    K: PartialOrd,
    F: FnMut(&'a T) -> K,
{
    let first = seq.first()?;
    let mut best: Option<(&'a T, K)> = None;

    for item in seq {
        let score = scorer(item);
        let replace = match &best {
            Some((_, current)) => score.partial_cmp(current) == Some(wanted),
            None => score.partial_cmp(&score).is_some(),
        };
        if replace {
            best = Some((item, score));
        }
    }

    Some(best.map_or(first, |(item, _)| item))
}

// =============================================================================
// TESTS
// =============================================================================
