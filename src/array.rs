//! Array helpers shared by the scales.
//!
//! [`bisect`] and its variants locate the left insertion point of a value in
//! a sorted slice. They back the threshold family of scales, which turn a
//! continuous input into a bucket index.
//!
//! ```rust
//! use skala::array::{bisect, bisect_by_key};
//!
//! assert_eq!(bisect(&[1, 3, 5, 7, 9], &4), 2);
//! assert_eq!(bisect(&[1, 3, 3, 3, 5], &3), 1);
//!
//! let rows = [(0.5, "a"), (1.5, "b"), (2.5, "c")];
//! assert_eq!(bisect_by_key(&rows, &2.0, |row| &row.0), 2);
//! ```

use std::hash::Hash;

use indexmap::IndexMap;

/// Left insertion index of `target` in the whole of `sorted`.
///
/// Returns the unique `i` such that every element before `i` is `< target`
/// and every element from `i` on is `>= target`. Duplicates of `target`
/// therefore resolve to the left-most position.
pub fn bisect<T: PartialOrd>(sorted: &[T], target: &T) -> usize {
    bisect_by_key_range(sorted, target, 0, sorted.len(), |item| item)
}

/// [`bisect`] restricted to `sorted[lo..hi]`.
///
/// `hi` is clamped to the slice length. A degenerate range returns `lo`.
pub fn bisect_range<T: PartialOrd>(sorted: &[T], target: &T, lo: usize, hi: usize) -> usize {
    bisect_by_key_range(sorted, target, lo, hi, |item| item)
}

/// [`bisect`] over a projection of each element.
///
/// `sorted` must be ordered by `key_of`.
pub fn bisect_by_key<T, K, F>(sorted: &[T], target: &K, key_of: F) -> usize
where
    K: PartialOrd + ?Sized,
    F: Fn(&T) -> &K,
{
    bisect_by_key_range(sorted, target, 0, sorted.len(), key_of)
}

/// General form: projected search within `sorted[lo..hi]`.
pub fn bisect_by_key_range<T, K, F>(sorted: &[T], target: &K, lo: usize, hi: usize, key_of: F) -> usize
where
    K: PartialOrd + ?Sized,
    F: Fn(&T) -> &K,
{
    let mut lo = lo;
    let mut hi = hi.min(sorted.len());

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if key_of(&sorted[mid]) < target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    lo
}

/// Buckets `items` by `key_of`, keeping groups in order of first appearance.
///
/// ```rust
/// use skala::array::group;
///
/// let groups = group(vec![1, 2, 3, 4, 5], |n| if n % 2 == 0 { "even" } else { "odd" });
/// assert_eq!(groups.keys().collect::<Vec<_>>(), [&"odd", &"even"]);
/// assert_eq!(groups["odd"], [1, 3, 5]);
/// ```
pub fn group<T, K, F, I>(items: I, key_of: F) -> IndexMap<K, Vec<T>>
where
    I: IntoIterator<Item = T>,
    K: Hash + Eq,
    F: Fn(&T) -> K,
{
    let mut groups: IndexMap<K, Vec<T>> = IndexMap::new();
    for item in items {
        groups.entry(key_of(&item)).or_default().push(item);
    }
    groups
}
