//! Path-addressed accumulation of compiled clause fragments.
//!
//! While lowering a query, the compiler collects fragments (SQL expressions,
//! predicates, join constraints) under nested keys like
//! `["where", ":or", "left"]`. Each tree node carries both a child map and a
//! value sequence, so an empty remaining path means "append at this node"
//! and a path can never collide with an existing branch.

use std::collections::BTreeMap;

/// A tree of fragment sequences addressed by key paths.
///
/// Values appended under the same path accumulate in call order. The
/// append methods take the tree by value and return the updated tree, so a
/// caller holding a clone observes no mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentTree<K, V> {
    children: BTreeMap<K, FragmentTree<K, V>>,
    values: Vec<V>,
}

impl<K, V> Default for FragmentTree<K, V> {
    fn default() -> Self {
        Self {
            children: BTreeMap::new(),
            values: Vec::new(),
        }
    }
}

impl<K: Ord + Clone, V> FragmentTree<K, V> {
    /// An empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` at the tail of the sequence addressed by `path`,
    /// creating intermediate nodes as needed. An empty path appends at the
    /// root.
    pub fn append_at(self, path: &[K], value: V) -> Self {
        self.append_all_at(path, std::iter::once(value))
    }

    /// Append every value in `values`, in order, at the tail of the
    /// sequence addressed by `path`.
    pub fn append_all_at(mut self, path: &[K], values: impl IntoIterator<Item = V>) -> Self {
        let mut node = &mut self;
        for key in path {
            node = node.children.entry(key.clone()).or_default();
        }
        node.values.extend(values);
        self
    }

    /// The values accumulated at exactly `path`, or `None` if no node
    /// exists there.
    pub fn values_at(&self, path: &[K]) -> Option<&[V]> {
        let mut node = self;
        for key in path {
            node = node.children.get(key)?;
        }
        Some(&node.values)
    }

    /// Whether the tree holds no values anywhere.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.children.values().all(FragmentTree::is_empty)
    }
}
