//! Typed annotations anchored to a [`Range`] of a fragmentable string.
//!
//! A [`Fragment`] is the shared header (id, range, split marker) plus a
//! [`FragmentKind`] payload. Serialized, the payload is flattened into the
//! header with a `"type"` discriminant:
//!
//! ```json
//! {"id": "…", "range": {"start": 0, "end": 4}, "type": "Word", "dictId": "…"}
//! ```
//!
//! Sentences own a flat list of [`WordFragment`]s whose ranges are relative
//! to the sentence start. Nesting stops there.

use serde::{Deserialize, Serialize};

use crate::error::DocumentError;
use crate::id::Id;
use crate::range::{normalize_range, Range};

// ── FragmentType ──────────────────────────────────────────────────────────

/// Discriminant of [`FragmentKind`], used to filter queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FragmentType {
    Mark,
    Sentence,
    Word,
    Note,
    Highlight,
    Background,
}

/// Which side of a split annotation a piece is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fragmented {
    Left,
    Right,
}

/// Anything with a range and a fragment type; the unit the intersection
/// queries in [`store`](crate::store) operate on.
pub trait Anchored {
    fn range(&self) -> Range;
    fn fragment_type(&self) -> FragmentType;
}

// ── Payloads ──────────────────────────────────────────────────────────────

/// A word annotation nested in a sentence. `range` is sentence-local.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Word", rename_all = "camelCase")]
pub struct WordFragment {
    pub id: Id,
    pub range: Range,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fragmented: Option<Fragmented>,
    pub dict_id: Id,
}

impl WordFragment {
    pub fn new(dict_id: Id, range: Range) -> Self {
        Self {
            id: Id::new(),
            range,
            fragmented: None,
            dict_id,
        }
    }
}

impl Anchored for WordFragment {
    fn range(&self) -> Range {
        self.range
    }

    fn fragment_type(&self) -> FragmentType {
        FragmentType::Word
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SentenceFragment {
    pub translation: String,
    #[serde(default)]
    pub words: Vec<WordFragment>,
}

impl SentenceFragment {
    pub fn new(translation: impl Into<String>) -> Self {
        Self {
            translation: translation.into(),
            words: Vec::new(),
        }
    }

    /// Link a word given in absolute coordinates to this sentence.
    ///
    /// `sentence` is the range of the owning sentence fragment. The word is
    /// stored normalized to the sentence start and must fit inside it.
    pub fn add_word(
        &mut self,
        dict_id: Id,
        word: Range,
        sentence: Range,
    ) -> Result<&WordFragment, DocumentError> {
        if word.start > word.end || !sentence.contains(&word) {
            return Err(DocumentError::WordOutsideSentence { word, sentence });
        }
        let local = normalize_range(sentence, word);
        self.words.push(WordFragment::new(dict_id, local));
        Ok(&self.words[self.words.len() - 1])
    }
}

/// Variant payload of a [`Fragment`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FragmentKind {
    Highlight,
    Background,
    Mark {
        color: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },
    Note {
        note: String,
    },
    Word {
        #[serde(rename = "dictId")]
        dict_id: Id,
    },
    Sentence(SentenceFragment),
}

impl FragmentKind {
    pub fn fragment_type(&self) -> FragmentType {
        match self {
            FragmentKind::Highlight => FragmentType::Highlight,
            FragmentKind::Background => FragmentType::Background,
            FragmentKind::Mark { .. } => FragmentType::Mark,
            FragmentKind::Note { .. } => FragmentType::Note,
            FragmentKind::Word { .. } => FragmentType::Word,
            FragmentKind::Sentence(_) => FragmentType::Sentence,
        }
    }
}

// ── Fragment ──────────────────────────────────────────────────────────────

/// One annotation on a fragmentable string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    pub id: Id,
    pub range: Range,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fragmented: Option<Fragmented>,
    #[serde(flatten)]
    pub kind: FragmentKind,
}

impl Fragment {
    /// A fragment with a fresh id.
    pub fn new(kind: FragmentKind, range: Range) -> Self {
        Self::with_id(Id::new(), kind, range)
    }

    pub fn with_id(id: Id, kind: FragmentKind, range: Range) -> Self {
        Self {
            id,
            range,
            fragmented: None,
            kind,
        }
    }

    pub fn highlight(range: Range) -> Self {
        Self::new(FragmentKind::Highlight, range)
    }

    pub fn background(range: Range) -> Self {
        Self::new(FragmentKind::Background, range)
    }

    pub fn mark(range: Range, color: impl Into<String>, comment: Option<String>) -> Self {
        Self::new(
            FragmentKind::Mark {
                color: color.into(),
                comment,
            },
            range,
        )
    }

    pub fn note(range: Range, note: impl Into<String>) -> Self {
        Self::new(FragmentKind::Note { note: note.into() }, range)
    }

    pub fn word(range: Range, dict_id: Id) -> Self {
        Self::new(FragmentKind::Word { dict_id }, range)
    }

    pub fn sentence(range: Range, sentence: SentenceFragment) -> Self {
        Self::new(FragmentKind::Sentence(sentence), range)
    }

    pub fn as_sentence(&self) -> Option<&SentenceFragment> {
        match &self.kind {
            FragmentKind::Sentence(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sentence_mut(&mut self) -> Option<&mut SentenceFragment> {
        match &mut self.kind {
            FragmentKind::Sentence(s) => Some(s),
            _ => None,
        }
    }
}

impl Anchored for Fragment {
    fn range(&self) -> Range {
        self.range
    }

    fn fragment_type(&self) -> FragmentType {
        self.kind.fragment_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fragment_serializes_flat_with_type_tag() {
        let f = Fragment::with_id(
            Id::from("f1"),
            FragmentKind::Mark {
                color: "red".into(),
                comment: None,
            },
            Range::new(1, 4),
        );
        assert_eq!(
            serde_json::to_value(&f).unwrap(),
            json!({"id": "f1", "range": {"start": 1, "end": 4}, "type": "Mark", "color": "red"})
        );
    }

    #[test]
    fn word_fragment_uses_camel_case_dict_id() {
        let raw = json!({
            "id": "w1",
            "range": {"start": 0, "end": 3},
            "fragmented": "left",
            "type": "Word",
            "dictId": "d1"
        });
        let f: Fragment = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(f.fragmented, Some(Fragmented::Left));
        assert_eq!(f.kind, FragmentKind::Word { dict_id: Id::from("d1") });
        assert_eq!(serde_json::to_value(&f).unwrap(), raw);
    }

    #[test]
    fn sentence_roundtrips_nested_words() {
        let raw = json!({
            "id": "s1",
            "range": {"start": 4, "end": 20},
            "type": "Sentence",
            "translation": "hello",
            "words": [
                {"type": "Word", "id": "w1", "range": {"start": 2, "end": 6}, "dictId": "d1"}
            ]
        });
        let f: Fragment = serde_json::from_value(raw).unwrap();
        let sentence = f.as_sentence().expect("sentence payload");
        assert_eq!(sentence.words.len(), 1);
        assert_eq!(sentence.words[0].range, Range::new(2, 6));
        assert_eq!(f.fragment_type(), FragmentType::Sentence);

        let out = serde_json::to_value(&f).unwrap();
        assert_eq!(out["words"][0]["type"], "Word");
        assert_eq!(out["words"][0]["dictId"], "d1");
    }

    #[test]
    fn add_word_normalizes_and_validates() {
        let sentence_range = Range::new(10, 30);
        let mut sentence = SentenceFragment::new("");

        let word = sentence
            .add_word(Id::from("d"), Range::new(12, 16), sentence_range)
            .unwrap();
        assert_eq!(word.range, Range::new(2, 6));

        let err = sentence
            .add_word(Id::from("d"), Range::new(25, 35), sentence_range)
            .unwrap_err();
        assert_eq!(
            err,
            DocumentError::WordOutsideSentence {
                word: Range::new(25, 35),
                sentence: sentence_range,
            }
        );
        assert_eq!(sentence.words.len(), 1);
    }
}
