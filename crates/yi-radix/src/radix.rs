use std::collections::BTreeMap;

use tracing::trace;

use crate::error::RadixError;
use crate::node::RadixEdge;
use crate::tree::RadixTree;

/// Length in bytes of the longest common prefix of `a` and `b`.
///
/// Comparison is done per `char`, so the result always lies on a character
/// boundary of both strings and can be used to slice either of them.
pub fn common_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .find(|((_, x), y)| x != y)
        .map(|((i, _), _)| i)
        .unwrap_or_else(|| a.len().min(b.len()))
}

/// Inserts `value` under `key`.
///
/// Walks down from the root following the (single) edge that shares a
/// non-empty prefix with the unmatched rest of `key`:
///
/// - no such edge: a new leaf hangs off the current node;
/// - edge fully matched and key exhausted: the existing node takes `value`
///   and the previous value is returned (duplicate keys merge in place);
/// - edge fully matched, key left over: descend;
/// - edge partially matched: the edge is split at the divergence point and
///   the new value lands on the split node or on a fresh leaf below it.
pub fn insert<V>(tree: &mut RadixTree<V>, key: &str, value: V) -> Result<Option<V>, RadixError> {
    if key.is_empty() {
        return Err(RadixError::EmptyKey);
    }

    let mut curr = tree.root;
    let mut consumed = 0usize;

    loop {
        let rest = &key[consumed..];
        let hit = tree.nodes[curr as usize]
            .edges
            .iter()
            .enumerate()
            .find_map(|(i, edge)| {
                let common = common_prefix_len(rest, &edge.prefix);
                (common > 0).then_some((i, common))
            });

        let Some((edge_idx, common)) = hit else {
            let leaf = tree.push_node(key.to_string(), Some(value));
            tree.nodes[curr as usize].edges.push(RadixEdge {
                prefix: rest.to_string(),
                node: leaf,
            });
            tree.size += 1;
            return Ok(None);
        };

        let edge = &tree.nodes[curr as usize].edges[edge_idx];
        let child = edge.node;

        if common == edge.prefix.len() {
            if common == rest.len() {
                let previous = tree.nodes[child as usize].value.replace(value);
                if previous.is_none() {
                    tree.size += 1;
                }
                return Ok(previous);
            }
            consumed += common;
            curr = child;
            continue;
        }

        let head = edge.prefix[..common].to_string();
        let tail = edge.prefix[common..].to_string();
        trace!(key, split_at = %head, "splitting radix edge");

        let split = tree.push_node(key[..consumed + common].to_string(), None);
        tree.nodes[split as usize].edges.push(RadixEdge {
            prefix: tail,
            node: child,
        });
        tree.nodes[curr as usize].edges[edge_idx] = RadixEdge {
            prefix: head,
            node: split,
        };

        if common == rest.len() {
            tree.nodes[split as usize].value = Some(value);
        } else {
            let leaf = tree.push_node(key.to_string(), Some(value));
            tree.nodes[split as usize].edges.push(RadixEdge {
                prefix: rest[common..].to_string(),
                node: leaf,
            });
        }
        tree.size += 1;
        return Ok(None);
    }
}

/// Finds the node whose accumulated key equals `key`.
///
/// The returned node may be a pure branching node without a value. An empty
/// key resolves to the root.
pub fn find<V>(tree: &RadixTree<V>, key: &str) -> Option<u32> {
    let mut curr = tree.root;
    let mut rest = key;

    while !rest.is_empty() {
        let edge = tree.nodes[curr as usize]
            .edges
            .iter()
            .find(|edge| rest.starts_with(edge.prefix.as_str()))?;
        rest = &rest[edge.prefix.len()..];
        curr = edge.node;
    }

    Some(curr)
}

/// Same as [`find`] but returns the whole path, root first.
pub fn find_with_parents<V>(tree: &RadixTree<V>, key: &str) -> Option<Vec<u32>> {
    let mut list = vec![tree.root];
    let mut curr = tree.root;
    let mut rest = key;

    while !rest.is_empty() {
        let edge = tree.nodes[curr as usize]
            .edges
            .iter()
            .find(|edge| rest.starts_with(edge.prefix.as_str()))?;
        rest = &rest[edge.prefix.len()..];
        curr = edge.node;
        list.push(curr);
    }

    Some(list)
}

/// Collects the value of every inserted key that is a prefix of `probe`.
///
/// Values are appended to `entries` in pre-order, so along one matching
/// path shorter keys come first. Every edge sharing a non-empty prefix with
/// the unmatched part of `probe` is explored, even when the edge itself is
/// only partially matched.
pub fn find_all<'a, V>(tree: &'a RadixTree<V>, probe: &str, entries: &mut Vec<&'a V>) {
    find_all_from(tree, tree.root, probe, 0, entries);
}

fn find_all_from<'a, V>(
    tree: &'a RadixTree<V>,
    node_idx: u32,
    probe: &str,
    seen: usize,
    entries: &mut Vec<&'a V>,
) {
    let node = &tree.nodes[node_idx as usize];

    // `seen` only catches up with the key length when every edge on the
    // path was consumed in full, i.e. when the key is a prefix of `probe`.
    if let Some(value) = node.value.as_ref() {
        if node.key.len() == seen {
            entries.push(value);
        }
    }

    let rest = &probe[seen..];
    for edge in &node.edges {
        let common = common_prefix_len(rest, &edge.prefix);
        if common > 0 {
            find_all_from(tree, edge.node, probe, seen + common, entries);
        }
    }
}

/// Removes the value stored under `key`, prunes nodes left with neither a
/// value nor edges, and folds a remaining valueless single-edge node into
/// its parent edge so the tree stays compressed.
pub fn remove<V>(tree: &mut RadixTree<V>, key: &str) -> Option<V> {
    if key.is_empty() {
        return None;
    }

    let list = find_with_parents(tree, key)?;
    let last = *list.last()?;
    let removed = tree.nodes[last as usize].value.take()?;
    tree.size -= 1;

    let mut i = list.len() - 1;
    while i > 0 {
        let child = list[i];
        let node = &tree.nodes[child as usize];
        if node.value.is_some() || !node.is_leaf() {
            break;
        }
        tree.nodes[list[i - 1] as usize]
            .edges
            .retain(|edge| edge.node != child);
        i -= 1;
    }
    if i > 0 {
        merge_into_parent(tree, list[i - 1], list[i]);
    }

    Some(removed)
}

fn merge_into_parent<V>(tree: &mut RadixTree<V>, parent: u32, node: u32) {
    let n = &mut tree.nodes[node as usize];
    if n.value.is_some() || n.edges.len() != 1 {
        return;
    }
    let Some(below) = n.edges.pop() else {
        return;
    };
    if let Some(edge) = tree.nodes[parent as usize]
        .edges
        .iter_mut()
        .find(|edge| edge.node == node)
    {
        edge.prefix.push_str(&below.prefix);
        edge.node = below.node;
        trace!(prefix = %edge.prefix, "merged radix edge after remove");
    }
}

fn to_record_impl<V: Clone>(tree: &RadixTree<V>, node: u32, record: &mut BTreeMap<String, V>) {
    let n = &tree.nodes[node as usize];
    if let Some(v) = n.value.as_ref() {
        record.insert(n.key.clone(), v.clone());
    }
    for edge in &n.edges {
        to_record_impl(tree, edge.node, record);
    }
}

pub fn to_record<V: Clone>(tree: &RadixTree<V>) -> BTreeMap<String, V> {
    let mut out = BTreeMap::new();
    to_record_impl(tree, tree.root, &mut out);
    out
}

fn print_impl<V>(tree: &RadixTree<V>, node: u32, label: &str, tab: &str) -> String {
    let n = &tree.nodes[node as usize];
    let value = if n.value.is_some() { " = [value]" } else { "" };
    let mut result = format!("RadixNode {label:?}{value}");

    for (i, edge) in n.edges.iter().enumerate() {
        let is_last = i + 1 == n.edges.len();
        let branch = if is_last { "└── " } else { "├── " };
        let child_tab = format!("{tab}{}", if is_last { "    " } else { "│   " });
        result.push('\n');
        result.push_str(tab);
        result.push_str(branch);
        result.push_str(&print_impl(tree, edge.node, &edge.prefix, &child_tab));
    }

    result
}

pub fn print<V>(tree: &RadixTree<V>, node: u32, tab: &str) -> String {
    let label = if node == tree.root {
        ""
    } else {
        tree.nodes[node as usize].key.as_str()
    };
    print_impl(tree, node, label, tab)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_prefix_len_counts_bytes_on_char_boundaries() {
        assert_eq!(common_prefix_len("abc", "abd"), 2);
        assert_eq!(common_prefix_len("abc", "ab"), 2);
        assert_eq!(common_prefix_len("", "ab"), 0);
        assert_eq!(common_prefix_len("xyz", "abc"), 0);
        // "日本" and "日曜" share one three-byte character.
        assert_eq!(common_prefix_len("日本", "日曜"), 3);
        assert_eq!(common_prefix_len("日本語", "日本"), 6);
    }

    #[test]
    fn split_keeps_accumulated_keys() {
        let mut tree = RadixTree::new();
        tree.insert("romane", 1).unwrap();
        tree.insert("romanus", 2).unwrap();
        tree.insert("romulus", 3).unwrap();

        let root = &tree.nodes[tree.root as usize];
        assert_eq!(root.edges.len(), 1);
        assert_eq!(root.edges[0].prefix, "rom");

        let rom = &tree.nodes[root.edges[0].node as usize];
        assert_eq!(rom.key, "rom");
        assert!(rom.value.is_none());
        let prefixes: Vec<&str> = rom.edges.iter().map(|e| e.prefix.as_str()).collect();
        assert_eq!(prefixes, vec!["an", "ulus"]);

        let an = &tree.nodes[rom.edges[0].node as usize];
        assert_eq!(an.key, "roman");
        let prefixes: Vec<&str> = an.edges.iter().map(|e| e.prefix.as_str()).collect();
        assert_eq!(prefixes, vec!["e", "us"]);
    }

    #[test]
    fn find_all_explores_partial_edges_without_false_hits() {
        let mut tree = RadixTree::new();
        tree.insert("ab", 1).unwrap();
        tree.insert("abc", 2).unwrap();

        let mut entries = Vec::new();
        find_all(&tree, "ac", &mut entries);
        assert!(entries.is_empty());

        find_all(&tree, "abx", &mut entries);
        assert_eq!(entries, vec![&1]);
    }
}
