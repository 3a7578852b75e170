//! Stable, comparator-driven insertion sort.
//!
//! This module implements the ordering core used by [`order_by`](crate::ops::order_by):
//! - Elements are pulled from the source once, in source order.
//! - Each incoming element is placed by scanning the already sorted prefix
//!   backwards while the placed element's key is **strictly greater** than the
//!   incoming one, which keeps equal keys in source order.
//!
//! Keys are not cached; the key extractor runs on both sides of every comparison.
//!
//! The main entry point is [`sort_by_key_with`].

use crate::core::Comparator;
use std::cmp::Ordering;
use tracing::debug;

/// Collects `source` into a vector ordered by ascending key.
///
/// The sort is stable: elements whose keys compare equal keep their relative
/// order from `source`. It runs in O(n²) comparisons in the worst case and O(n)
/// on already sorted input.
///
/// # Arguments
///
/// * `source` - The elements to order.
/// * `key` - Extracts the sort key of an element. Called twice per comparison.
/// * `comparator` - The total order over keys.
///
/// # Examples
///
/// ```
/// use lazyseq::algo::sort_by_key_with;
///
/// let words = vec!["pear", "fig", "apple", "kiwi"];
/// let sorted = sort_by_key_with(words, |w: &&str| w.len(), |a: &usize, b: &usize| a.cmp(b));
///
/// assert_eq!(sorted, vec!["fig", "pear", "kiwi", "apple"]);
/// ```
pub fn sort_by_key_with<I, K, F, C>(source: I, mut key: F, comparator: C) -> Vec<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    C: Comparator<K>,
{
    let mut placed: Vec<I::Item> = Vec::new();
    let mut comparisons = 0usize;

    for element in source {
        let mut index = placed.len();
        while index > 0 {
            comparisons += 1;
            let ordering = comparator.compare(&key(&placed[index - 1]), &key(&element));
            if ordering != Ordering::Greater {
                break;
            }
            index -= 1;
        }
        placed.insert(index, element);
    }

    debug!(elements = placed.len(), comparisons, "ordering pass complete");
    placed
}
