//! A radix tree over dictionary keys, reusable across
//! scans.

use tracing::{debug, trace};
use yi_radix::RadixTree;

use crate::entry::DictionaryKey;
use crate::occurrence::Occurrence;
use crate::options::ScanOptions;

/// Owns dictionary entries and indexes them by key.
///
/// Tree values are slot lists into `entries`, so several entries sharing a
/// key are all reported, in insertion order.
#[derive(Debug, Clone)]
pub struct DictionaryIndex<E> {
    entries: Vec<E>,
    tree: RadixTree<Vec<usize>>,
    options: ScanOptions,
}

impl<E: DictionaryKey> DictionaryIndex<E> {
    pub fn new(entries: impl IntoIterator<Item = E>) -> Self {
        Self::with_options(entries, ScanOptions::default())
    }

    pub fn with_options(entries: impl IntoIterator<Item = E>, options: ScanOptions) -> Self {
        let mut index = Self {
            entries: Vec::new(),
            tree: RadixTree::new(),
            options,
        };
        for entry in entries {
            index.insert(entry);
        }
        debug!(
            entries = index.entries.len(),
            keys = index.tree.len(),
            "built dictionary index"
        );
        index
    }

    /// Index one more entry. Returns `false` when its key is shorter than
    /// [`ScanOptions::min_key_len`] and the entry was dropped.
    pub fn insert(&mut self, entry: E) -> bool {
        let key = entry.key();
        if key.chars().count() < self.options.min_key_len.max(1) {
            trace!(key, "skipping short dictionary key");
            return false;
        }

        let slot = self.entries.len();
        match self.tree.get_mut(key) {
            Some(slots) => slots.push(slot),
            None => {
                if self.tree.insert(key, vec![slot]).is_err() {
                    return false;
                }
            }
        }
        self.entries.push(entry);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Entries whose key is exactly `key`.
    pub fn lookup(&self, key: &str) -> Vec<&E> {
        self.tree
            .get(key)
            .map(|slots| slots.iter().map(|&i| &self.entries[i]).collect())
            .unwrap_or_default()
    }

    /// Entries whose key is a prefix of `probe`, shortest key first.
    pub fn matches_at(&self, probe: &str) -> Vec<&E> {
        let mut hits = Vec::new();
        self.tree.find_all_into(probe, &mut hits);
        self.resolve(&hits)
    }

    fn resolve(&self, hits: &[&Vec<usize>]) -> Vec<&E> {
        // Every key that prefixes one probe lies on a single root path, so
        // the last hit is the longest key.
        let hits = match (self.options.longest_match_only, hits.last()) {
            (true, Some(last)) => std::slice::from_ref(last),
            _ => hits,
        };
        hits.iter()
            .flat_map(|slots| slots.iter().map(|&i| &self.entries[i]))
            .collect()
    }

    /// Every character position of `text` where at least one key starts,
    /// with the entries found there.
    ///
    /// Positions are character offsets. Each position probes the tree with
    /// the suffix of `text` starting there, so the cost is one prefix walk
    /// per character.
    pub fn scan(&self, text: &str) -> Vec<Occurrence<&E>> {
        let mut occurrences = Vec::new();
        let mut hits = Vec::new();

        for (position, (offset, _)) in text.char_indices().enumerate() {
            hits.clear();
            self.tree.find_all_into(&text[offset..], &mut hits);
            if hits.is_empty() {
                continue;
            }
            occurrences.push(Occurrence {
                position,
                entries: self.resolve(&hits),
            });
        }

        debug!(
            text_len = text.len(),
            occurrences = occurrences.len(),
            "scanned text for dictionary keys"
        );
        occurrences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_sharing_a_key_are_all_kept() {
        let index = DictionaryIndex::new(["bank", "bank", "banker"]);
        assert_eq!(index.len(), 3);
        assert_eq!(index.lookup("bank"), vec![&"bank", &"bank"]);
        assert_eq!(index.matches_at("bankers"), vec![&"bank", &"bank", &"banker"]);
    }

    #[test]
    fn short_keys_are_skipped() {
        let options = ScanOptions {
            min_key_len: 2,
            ..ScanOptions::default()
        };
        let mut index = DictionaryIndex::with_options(["a", "ab", ""], options);
        assert_eq!(index.len(), 1);
        assert!(!index.insert("b"));
        assert!(index.insert("bc"));
        assert_eq!(index.matches_at("abc"), vec![&"ab"]);
    }

    #[test]
    fn empty_key_never_indexed_even_with_zero_minimum() {
        let options = ScanOptions {
            min_key_len: 0,
            ..ScanOptions::default()
        };
        let index = DictionaryIndex::with_options([""], options);
        assert!(index.is_empty());
    }

    #[test]
    fn longest_match_only_keeps_last_hit() {
        let options = ScanOptions {
            longest_match_only: true,
            ..ScanOptions::default()
        };
        let index = DictionaryIndex::with_options(["日本", "日本語"], options);
        assert_eq!(index.matches_at("日本語です"), vec![&"日本語"]);
        assert_eq!(index.matches_at("日本人"), vec![&"日本"]);
    }
}
