use std::collections::BTreeMap;
use std::fmt;

use crate::error::RadixError;
use crate::node::RadixNode;

use crate::radix::{find, find_all, insert, print, remove, to_record};

/// Radix tree over string keys.
///
/// Nodes live in an arena; edges refer to them by `u32` index. Removed nodes
/// are unlinked but their slots are not reused, which suits the build-once,
/// scan-many usage of the dictionary index.
#[derive(Clone, Debug)]
pub struct RadixTree<V = ()> {
    pub(crate) size: usize,
    pub(crate) nodes: Vec<RadixNode<V>>,
    pub(crate) root: u32,
}

impl<V> RadixTree<V> {
    pub fn new() -> Self {
        let nodes = vec![RadixNode::new(String::new(), None)];
        Self {
            size: 0,
            nodes,
            root: 0,
        }
    }

    pub(crate) fn push_node(&mut self, key: String, value: Option<V>) -> u32 {
        self.nodes.push(RadixNode::new(key, value));
        (self.nodes.len() - 1) as u32
    }

    /// Number of keys holding a value.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Inserts `value` under `key`, returning the value it replaced.
    pub fn insert<K: AsRef<str>>(&mut self, key: K, value: V) -> Result<Option<V>, RadixError> {
        insert(self, key.as_ref(), value)
    }

    pub fn get<K: AsRef<str>>(&self, key: K) -> Option<&V> {
        find(self, key.as_ref()).and_then(|idx| self.nodes[idx as usize].value.as_ref())
    }

    pub fn get_mut<K: AsRef<str>>(&mut self, key: K) -> Option<&mut V> {
        let idx = find(self, key.as_ref())?;
        self.nodes[idx as usize].value.as_mut()
    }

    /// Exact node lookup; see [`find`](crate::radix::find).
    pub fn find<K: AsRef<str>>(&self, key: K) -> Option<&RadixNode<V>> {
        find(self, key.as_ref()).map(|idx| &self.nodes[idx as usize])
    }

    /// Values of every stored key that is a prefix of `probe`, shortest key
    /// first along each path.
    pub fn find_all<K: AsRef<str>>(&self, probe: K) -> Vec<&V> {
        let mut entries = Vec::new();
        find_all(self, probe.as_ref(), &mut entries);
        entries
    }

    /// Like [`RadixTree::find_all`] but appends into a caller-owned buffer.
    pub fn find_all_into<'a>(&'a self, probe: &str, entries: &mut Vec<&'a V>) {
        find_all(self, probe, entries);
    }

    pub fn remove<K: AsRef<str>>(&mut self, key: K) -> Option<V> {
        remove(self, key.as_ref())
    }

    pub fn to_record(&self) -> BTreeMap<String, V>
    where
        V: Clone,
    {
        to_record(self)
    }

    pub fn root_index(&self) -> u32 {
        self.root
    }

    pub fn node(&self, idx: u32) -> &RadixNode<V> {
        &self.nodes[idx as usize]
    }

    /// Child node indices of `parent`, in edge order.
    pub fn children(&self, parent: u32) -> Vec<u32> {
        self.nodes[parent as usize]
            .edges
            .iter()
            .map(|edge| edge.node)
            .collect()
    }
}

impl<V> Default for RadixTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: AsRef<str>, V> FromIterator<(K, V)> for RadixTree<V> {
    /// Builds a tree from key/value pairs. Empty keys are skipped.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        for (key, value) in iter {
            if key.as_ref().is_empty() {
                continue;
            }
            tree.insert(key, value).ok();
        }
        tree
    }
}

impl<V> fmt::Display for RadixTree<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print(self, self.root, ""))
    }
}
