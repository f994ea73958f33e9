//! Dictionary entry shape and the key abstraction the scanner works with.

use serde::{Deserialize, Serialize};
use yi_document::Id;

use crate::tag::DictionaryTag;

/// A record that can be indexed by the scanner.
pub trait DictionaryKey {
    /// Literal text matched against documents.
    fn key(&self) -> &str;

    /// Entry id used when linking matches to word fragments.
    fn dict_id(&self) -> Option<&Id> {
        None
    }
}

impl<T: DictionaryKey + ?Sized> DictionaryKey for &T {
    fn key(&self) -> &str {
        (**self).key()
    }

    fn dict_id(&self) -> Option<&Id> {
        (**self).dict_id()
    }
}

impl DictionaryKey for str {
    fn key(&self) -> &str {
        self
    }
}

impl DictionaryKey for String {
    fn key(&self) -> &str {
        self
    }
}

/// Where in a document something was found: the document, the fragmentable
/// inside it, and a character offset into that fragmentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentLink {
    pub document_id: Id,
    pub fragmentable_id: Id,
    pub offset: usize,
}

impl DocumentLink {
    pub fn new(document_id: Id, fragmentable_id: Id, offset: usize) -> Self {
        Self {
            document_id,
            fragmentable_id,
            offset,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryVariant {
    pub key: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Id>,
    #[serde(default)]
    pub comment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spelling: Option<String>,
}

/// One entry of a user's dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    pub id: Id,
    pub key: String,
    pub lang: String,
    #[serde(default)]
    pub translations: Vec<String>,
    #[serde(default)]
    pub tags: Vec<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spelling: Option<String>,
    #[serde(default)]
    pub variations: Vec<DictionaryVariant>,
    /// Document the entry was created from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_document: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_seen: Option<DocumentLink>,
}

impl DictionaryEntry {
    pub fn new(key: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            id: Id::new(),
            key: key.into(),
            lang: lang.into(),
            translations: Vec::new(),
            tags: Vec::new(),
            root: None,
            comment: None,
            spelling: None,
            variations: Vec::new(),
            source_document: None,
            first_seen: None,
        }
    }

    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translations.push(translation.into());
        self
    }

    /// Record where the entry was first met. Later sightings are ignored;
    /// returns whether `link` was stored.
    pub fn mark_seen(&mut self, link: DocumentLink) -> bool {
        if self.first_seen.is_some() {
            return false;
        }
        self.source_document.get_or_insert_with(|| link.document_id.clone());
        self.first_seen = Some(link);
        true
    }

    /// The tags in `tags` this entry refers to, in the entry's order. Ids
    /// with no matching tag are skipped.
    pub fn resolve_tags<'a>(&self, tags: &'a [DictionaryTag]) -> Vec<&'a DictionaryTag> {
        self.tags
            .iter()
            .filter_map(|id| tags.iter().find(|tag| &tag.id == id))
            .collect()
    }
}

impl DictionaryKey for DictionaryEntry {
    fn key(&self) -> &str {
        &self.key
    }

    fn dict_id(&self) -> Option<&Id> {
        Some(&self.id)
    }
}
