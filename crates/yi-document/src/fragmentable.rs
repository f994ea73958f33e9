//! An immutable base string plus the fragments on it.

use serde::{Deserialize, Serialize};

use crate::error::DocumentError;
use crate::fragment::{Fragment, FragmentType};
use crate::id::Id;
use crate::options::PushOptions;
use crate::range::{char_slice, Range};
use crate::store::{self, FragmentSelection};

/// Text owned by one document block (or dictionary sentence) together with
/// its annotations.
///
/// `root` never changes after creation; annotations are added and removed
/// through the validating methods below, which delegate to
/// [`store`](crate::store).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fragmentable {
    pub id: Id,
    root: String,
    #[serde(default)]
    fragments: Vec<Fragment>,
    #[serde(default = "default_show_spelling")]
    pub show_spelling: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    highlighted_fragment: Option<Id>,
}

fn default_show_spelling() -> bool {
    true
}

impl Fragmentable {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Id::new(),
            root: text.into(),
            fragments: Vec::new(),
            show_spelling: true,
            highlighted_fragment: None,
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// Length of `root` in characters.
    pub fn char_len(&self) -> usize {
        self.root.chars().count()
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn highlighted_fragment(&self) -> Option<&Id> {
        self.highlighted_fragment.as_ref()
    }

    fn check_range(&self, range: Range) -> Result<(), DocumentError> {
        Range::try_new(range.start, range.end)?;
        let len = self.char_len();
        if range.start < 0 || range.end as usize > len {
            return Err(DocumentError::RangeOutOfBounds { range, len });
        }
        Ok(())
    }

    pub fn push_fragment(&mut self, target: Fragment) -> Result<(), DocumentError> {
        self.push_fragment_with(target, &PushOptions::default())
    }

    /// Insert `target`, truncating it around colliding fragments; see
    /// [`store::push_fragment_with`].
    pub fn push_fragment_with(
        &mut self,
        target: Fragment,
        options: &PushOptions,
    ) -> Result<(), DocumentError> {
        self.check_range(target.range)?;
        self.fragments = store::push_fragment_with(target, &self.fragments, options);
        Ok(())
    }

    /// Drop every fragment (optionally of one type) that `range` meets and
    /// return how many were removed.
    pub fn remove_in_range(&mut self, range: Range, filter: Option<FragmentType>) -> usize {
        let before = self.fragments.len();
        self.fragments = store::remove_fragments_in_range(range, &self.fragments, filter);
        self.forget_dangling_highlight();
        before - self.fragments.len()
    }

    /// Remove every piece of the fragment `id`.
    pub fn remove_fragment(&mut self, id: &Id) -> Result<(), DocumentError> {
        if store::find_fragment(id, &self.fragments).is_none() {
            return Err(DocumentError::FragmentNotFound(id.clone()));
        }
        self.fragments = store::remove_fragment(id, &self.fragments);
        self.forget_dangling_highlight();
        Ok(())
    }

    pub fn fragment(&self, id: &Id) -> Option<&Fragment> {
        store::find_fragment(id, &self.fragments)
    }

    pub fn fragment_mut(&mut self, id: &Id) -> Option<&mut Fragment> {
        self.fragments.iter_mut().find(|f| &f.id == id)
    }

    /// Attach a word, given in text coordinates, to the sentence fragment
    /// `sentence_id`. Returns the new word's id.
    pub fn add_sentence_word(
        &mut self,
        sentence_id: &Id,
        dict_id: Id,
        word: Range,
    ) -> Result<Id, DocumentError> {
        let fragment = self
            .fragment_mut(sentence_id)
            .ok_or_else(|| DocumentError::FragmentNotFound(sentence_id.clone()))?;
        let range = fragment.range;
        let sentence = fragment
            .as_sentence_mut()
            .ok_or_else(|| DocumentError::NotASentence(sentence_id.clone()))?;
        Ok(sentence.add_word(dict_id, word, range)?.id.clone())
    }

    pub fn fragments_in_range(&self, range: Range) -> Vec<FragmentSelection<'_>> {
        store::get_fragments_in_range(range, &self.fragments)
    }

    /// The text covered by `fragment`, `None` if its range does not fit the
    /// root.
    pub fn resolve(&self, fragment: &Fragment) -> Option<&str> {
        char_slice(&self.root, fragment.range)
    }

    pub fn text_in(&self, range: Range) -> Option<&str> {
        char_slice(&self.root, range)
    }

    pub fn highlight(&mut self, id: &Id) -> Result<(), DocumentError> {
        if self.fragment(id).is_none() {
            return Err(DocumentError::FragmentNotFound(id.clone()));
        }
        self.highlighted_fragment = Some(id.clone());
        Ok(())
    }

    pub fn clear_highlight(&mut self) {
        self.highlighted_fragment = None;
    }

    fn forget_dangling_highlight(&mut self) {
        if let Some(id) = &self.highlighted_fragment {
            if store::find_fragment(id, &self.fragments).is_none() {
                self.highlighted_fragment = None;
            }
        }
    }
}

impl Default for Fragmentable {
    fn default() -> Self {
        Self::new(String::new())
    }
}
