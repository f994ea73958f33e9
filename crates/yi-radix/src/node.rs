/// Outgoing edge of a [`RadixNode`].
///
/// `prefix` is never empty, and no two edges leaving the same node share a
/// first character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RadixEdge {
    pub prefix: String,
    pub node: u32,
}

/// Radix tree node stored in the [`RadixTree`](crate::RadixTree) arena.
///
/// `key` is the concatenation of every edge prefix on the path from the
/// root. A node carries a value iff that exact key was inserted; nodes
/// without a value are pure branching points.
#[derive(Clone, Debug)]
pub struct RadixNode<V> {
    pub key: String,
    pub value: Option<V>,
    pub edges: Vec<RadixEdge>,
}

impl<V> RadixNode<V> {
    pub fn new(key: String, value: Option<V>) -> Self {
        Self {
            key,
            value,
            edges: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.edges.is_empty()
    }
}
