//! Dictionary scanning: find every place in a text where a dictionary key
//! occurs, and link those places to word annotations.
//!
//! Dictionary sentences ([`DictionarySentence`]) are annotated the same way,
//! and [`SentenceLinks`] records which entries each sentence illustrates.
//!
//! ```
//! use yi_dictionary::{find_occurrences, DictionaryEntry};
//!
//! let dictionary = vec![DictionaryEntry::new("cat", "en"), DictionaryEntry::new("dog", "en")];
//! let hits = find_occurrences(dictionary, "the cat sat");
//!
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].position, 4);
//! assert_eq!(hits[0].entries[0].key, "cat");
//! ```

pub mod entry;
pub mod index;
pub mod link;
pub mod occurrence;
pub mod options;
pub mod sentence;
pub mod tag;

pub use entry::{DictionaryEntry, DictionaryKey, DictionaryVariant, DocumentLink};
pub use index::DictionaryIndex;
pub use link::{link_words, word_fragments};
pub use occurrence::{find_occurrences, find_occurrences_with, Occurrence};
pub use options::ScanOptions;
pub use sentence::{DictionarySentence, SentenceLinks, SentenceWord};
pub use tag::{DictionaryTag, GrammarPoint};
