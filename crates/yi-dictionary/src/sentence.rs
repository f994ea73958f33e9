//! Example sentences kept in a dictionary, and the links between sentences
//! and the entries they contain.

use serde::{Deserialize, Serialize};
use tracing::debug;
use yi_document::{DocumentError, Fragment, FragmentKind, Fragmentable, Id};

use crate::entry::{DictionaryKey, DocumentLink};
use crate::index::DictionaryIndex;
use crate::link::link_words;

/// A sentence saved to the dictionary with its translation.
///
/// `content` is a full [`Fragmentable`], so the sentence carries word and
/// other annotations like any document text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionarySentence {
    pub id: Id,
    pub content: Fragmentable,
    pub translation: String,
    pub lang: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<DocumentLink>,
}

impl DictionarySentence {
    pub fn new(
        content: impl Into<String>,
        translation: impl Into<String>,
        lang: impl Into<String>,
    ) -> Self {
        Self {
            id: Id::new(),
            content: Fragmentable::new(content),
            translation: translation.into(),
            lang: lang.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: DocumentLink) -> Self {
        self.source = Some(source);
        self
    }

    pub fn text(&self) -> &str {
        self.content.root()
    }

    /// Scan the sentence with `index` and add a word fragment for every
    /// entry found; see [`link_words`].
    pub fn link_entries<E: DictionaryKey>(
        &mut self,
        index: &DictionaryIndex<E>,
    ) -> Result<usize, DocumentError> {
        let hits = index.scan(self.content.root());
        link_words(&mut self.content, &hits)
    }

    /// Dictionary ids referenced by the sentence's word fragments, first
    /// occurrence order, without repeats.
    pub fn word_ids(&self) -> Vec<&Id> {
        let mut ids: Vec<&Id> = Vec::new();
        for id in self.content.fragments().iter().flat_map(word_ids_of) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }
}

fn word_ids_of(fragment: &Fragment) -> Vec<&Id> {
    match &fragment.kind {
        FragmentKind::Word { dict_id } => vec![dict_id],
        FragmentKind::Sentence(sentence) => sentence.words.iter().map(|w| &w.dict_id).collect(),
        _ => Vec::new(),
    }
}

/// One sentence/entry pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceWord {
    pub sentence_id: Id,
    pub word_id: Id,
}

/// In-memory many-to-many table between dictionary sentences and entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SentenceLinks {
    links: Vec<SentenceWord>,
}

impl SentenceLinks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SentenceWord> {
        self.links.iter()
    }

    /// Returns `false` if the pair was already linked.
    pub fn link(&mut self, sentence_id: Id, word_id: Id) -> bool {
        let pair = SentenceWord {
            sentence_id,
            word_id,
        };
        if self.links.contains(&pair) {
            return false;
        }
        self.links.push(pair);
        true
    }

    /// Returns `false` if the pair was not linked.
    pub fn unlink(&mut self, sentence_id: &Id, word_id: &Id) -> bool {
        let before = self.links.len();
        self.links
            .retain(|l| !(&l.sentence_id == sentence_id && &l.word_id == word_id));
        self.links.len() != before
    }

    /// Drop every link of `sentence_id` and return how many there were.
    pub fn unlink_sentence(&mut self, sentence_id: &Id) -> usize {
        let before = self.links.len();
        self.links.retain(|l| &l.sentence_id != sentence_id);
        before - self.links.len()
    }

    pub fn words_for(&self, sentence_id: &Id) -> Vec<&Id> {
        self.links
            .iter()
            .filter(|l| &l.sentence_id == sentence_id)
            .map(|l| &l.word_id)
            .collect()
    }

    pub fn sentences_for(&self, word_id: &Id) -> Vec<&Id> {
        self.links
            .iter()
            .filter(|l| &l.word_id == word_id)
            .map(|l| &l.sentence_id)
            .collect()
    }

    /// Link `sentence_id` to every entry named by a word fragment in
    /// `fragments`, including words nested in sentence fragments. Returns
    /// the number of new links.
    pub fn link_fragments(&mut self, sentence_id: &Id, fragments: &[Fragment]) -> usize {
        let added = fragments
            .iter()
            .flat_map(word_ids_of)
            .filter(|word_id| self.link(sentence_id.clone(), (*word_id).clone()))
            .count();
        debug!(sentence = %sentence_id, added, "linked sentence words");
        added
    }

    pub fn link_sentence(&mut self, sentence: &DictionarySentence) -> usize {
        self.link_fragments(&sentence.id, sentence.content.fragments())
    }
}
