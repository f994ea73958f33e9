use serde::{Deserialize, Serialize};

use crate::entry::DictionaryKey;
use crate::index::DictionaryIndex;
use crate::options::ScanOptions;

/// Entries whose key occurs in a text starting at `position` (a character
/// offset).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence<T> {
    pub position: usize,
    pub entries: Vec<T>,
}

impl<T: Clone> Occurrence<&T> {
    pub fn cloned(&self) -> Occurrence<T> {
        Occurrence {
            position: self.position,
            entries: self.entries.iter().map(|&e| e.clone()).collect(),
        }
    }
}

/// Build a fresh index over `entries` and scan `text` once.
///
/// Prefer keeping a [`DictionaryIndex`] around when the same dictionary is
/// scanned repeatedly.
pub fn find_occurrences<E>(entries: impl IntoIterator<Item = E>, text: &str) -> Vec<Occurrence<E>>
where
    E: DictionaryKey + Clone,
{
    find_occurrences_with(entries, text, ScanOptions::default())
}

pub fn find_occurrences_with<E>(
    entries: impl IntoIterator<Item = E>,
    text: &str,
    options: ScanOptions,
) -> Vec<Occurrence<E>>
where
    E: DictionaryKey + Clone,
{
    let index = DictionaryIndex::with_options(entries, options);
    index.scan(text).iter().map(Occurrence::cloned).collect()
}
