//! Turning scan results into word annotations.

use tracing::{debug, trace};
use yi_document::store::get_intersecting_fragments;
use yi_document::{
    CollisionPolicy, DocumentError, Fragment, FragmentType, Fragmentable, IntersectType,
    PushOptions, Range,
};

use crate::entry::DictionaryKey;
use crate::occurrence::Occurrence;

/// One `Word` fragment per linked entry, spanning
/// `[position, position + key length)`. Entries without a dictionary id are
/// skipped.
pub fn word_fragments<E: DictionaryKey>(occurrences: &[Occurrence<E>]) -> Vec<Fragment> {
    occurrences
        .iter()
        .flat_map(|occ| {
            occ.entries.iter().filter_map(move |entry| {
                let Some(dict_id) = entry.dict_id() else {
                    trace!(key = entry.key(), "entry has no id, not linking");
                    return None;
                };
                let start = occ.position as i64;
                let end = start + entry.key().chars().count() as i64;
                Some(Fragment::word(Range::new(start, end), dict_id.clone()))
            })
        })
        .collect()
}

/// Push the word fragments for `occurrences` into `text`.
///
/// A word always covers its whole key. Longer words go first; a candidate
/// that only partly overlaps a word already in `text` is skipped, as is one
/// that repeats an existing link. Words nested inside or around other
/// words, and words crossing non-word annotations, are kept whole. Returns
/// the number of words pushed.
pub fn link_words<E: DictionaryKey>(
    text: &mut Fragmentable,
    occurrences: &[Occurrence<E>],
) -> Result<usize, DocumentError> {
    let mut words = word_fragments(occurrences);
    words.sort_by_key(|w| (std::cmp::Reverse(w.range.len()), w.range.start));

    let whole = PushOptions::new(CollisionPolicy::KeepWhole);
    let mut linked = 0;
    for word in words {
        if collides_with_word(text, &word) {
            trace!(range = %word.range, "word partly overlaps a linked word, skipping");
            continue;
        }
        text.push_fragment_with(word, &whole)?;
        linked += 1;
    }
    debug!(fragmentable = %text.id, words = linked, "linked dictionary words");
    Ok(linked)
}

fn collides_with_word(text: &Fragmentable, word: &Fragment) -> bool {
    get_intersecting_fragments(word.range, text.fragments(), Some(FragmentType::Word))
        .iter()
        .any(|hit| match hit.intersect_type {
            IntersectType::LeftAnchor | IntersectType::RightAnchor => true,
            _ => hit.fragment.range == word.range && hit.fragment.kind == word.kind,
        })
}
