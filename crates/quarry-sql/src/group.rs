//! Grouping fold over compiled query pieces.

use std::hash::Hash;

use indexmap::IndexMap;

/// Partition `items` into groups keyed by the first element of
/// `derive(item)`, collecting the second elements.
///
/// Groups appear in first-seen order; within a group, values keep their
/// encounter order. Single linear pass, amortized O(1) per item.
pub fn group_by_kv<I, K, V, F>(items: I, mut derive: F) -> IndexMap<K, Vec<V>>
where
    I: IntoIterator,
    K: Hash + Eq,
    F: FnMut(I::Item) -> (K, V),
{
    let mut groups: IndexMap<K, Vec<V>> = IndexMap::new();
    for item in items {
        let (key, value) = derive(item);
        groups.entry(key).or_default().push(value);
    }
    groups
}
