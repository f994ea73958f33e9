//! Range queries and edits over a fragment list.
//!
//! These are free functions over slices so they work both on the top-level
//! fragments of a [`Fragmentable`](crate::Fragmentable) and on the words
//! nested in a sentence. Edits return a new `Vec`; the input is untouched.
//!
//! Ranges are assumed well-formed (`start <= end`); inverted ranges give
//! unspecified, but never panicking, results.

use serde::Serialize;
use tracing::debug;

use crate::fragment::{Anchored, Fragment, FragmentType, Fragmented, WordFragment};
use crate::id::Id;
use crate::options::{CollisionPolicy, PushOptions};
use crate::range::{check_fragment_in_range, is_between, normalize_range, Range};

// ── Intersection ──────────────────────────────────────────────────────────

/// Where a query range sits relative to a stored fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum IntersectType {
    /// The query starts before the fragment and ends inside it.
    LeftAnchor,
    /// Both ends of the query lie inside the fragment.
    Inside,
    /// The fragment lies within the query; neither query end is inside it.
    Enclosed,
    /// The query starts inside the fragment and ends past it.
    RightAnchor,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntersectResult<'a, F> {
    pub fragment: &'a F,
    pub intersect_type: IntersectType,
}

/// A top-level hit of [`get_fragments_in_range`]. Sentence hits carry the
/// nested words the (normalized) query touches; other hits have none.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FragmentSelection<'a> {
    pub fragment: &'a Fragment,
    pub intersect_type: IntersectType,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<IntersectResult<'a, WordFragment>>,
}

/// Classify `range` against one fragment range, `None` if they do not meet.
///
/// The query's end is tested at `range.end - 1`, its last covered position.
pub fn classify(range: Range, fragment: Range) -> Option<IntersectType> {
    let left_in = is_between(range.start, fragment);
    let right_in = is_between(range.end - 1, fragment);

    match (left_in, right_in) {
        (false, true) => Some(IntersectType::LeftAnchor),
        (true, true) => Some(IntersectType::Inside),
        (true, false) => Some(IntersectType::RightAnchor),
        (false, false) if check_fragment_in_range(range, fragment) => {
            Some(IntersectType::Enclosed)
        }
        (false, false) => None,
    }
}

/// Every fragment (optionally of one type) that `range` meets, in storage
/// order, with its [`IntersectType`].
pub fn get_intersecting_fragments<'a, F: Anchored>(
    range: Range,
    fragments: &'a [F],
    filter: Option<FragmentType>,
) -> Vec<IntersectResult<'a, F>> {
    fragments
        .iter()
        .filter(|f| filter.map_or(true, |t| f.fragment_type() == t))
        .filter_map(|fragment| {
            classify(range, fragment.range()).map(|intersect_type| IntersectResult {
                fragment,
                intersect_type,
            })
        })
        .collect()
}

/// Fragments meeting `range`, descending one level into sentences.
pub fn get_fragments_in_range(range: Range, fragments: &[Fragment]) -> Vec<FragmentSelection<'_>> {
    get_intersecting_fragments(range, fragments, None)
        .into_iter()
        .map(|hit| {
            let children = match hit.fragment.as_sentence() {
                Some(sentence) => get_intersecting_fragments(
                    normalize_range(hit.fragment.range, range),
                    &sentence.words,
                    Some(FragmentType::Word),
                ),
                None => Vec::new(),
            };
            FragmentSelection {
                fragment: hit.fragment,
                intersect_type: hit.intersect_type,
                children,
            }
        })
        .collect()
}

/// `true` if any selected fragment, or any nested child, has type `ty`.
pub fn check_selection_for_type(ty: FragmentType, selected: &[FragmentSelection<'_>]) -> bool {
    selected.iter().any(|s| {
        s.fragment.fragment_type() == ty || s.children.iter().any(|c| c.fragment.fragment_type() == ty)
    })
}

// ── Edits ─────────────────────────────────────────────────────────────────

/// Cut `piece` around `obstacle`, dropping empty leftovers.
fn cut(piece: Range, obstacle: Range) -> Vec<Range> {
    if !piece.overlaps(&obstacle) {
        return vec![piece];
    }
    let left = Range::new(piece.start, obstacle.start.min(piece.end));
    let right = Range::new(obstacle.end.max(piece.start), piece.end);
    [left, right].into_iter().filter(|r| !r.is_empty()).collect()
}

/// Append `target` to `fragments` using the default [`PushOptions`].
pub fn push_fragment(target: Fragment, fragments: &[Fragment]) -> Vec<Fragment> {
    push_fragment_with(target, fragments, &PushOptions::default())
}

/// Append `target` to `fragments`, truncating it around the fragments it
/// collides with.
///
/// Existing fragments are never modified. A collision classified as
/// `LeftAnchor`, `RightAnchor` or `Enclosed` cuts every overlapping piece of
/// the target into the part before and the part after the existing
/// fragment; empty parts are dropped. An `Inside` collision leaves the
/// target as is. Pieces keep the target's id; when there is more than one
/// the first is marked [`Fragmented::Left`] and the rest
/// [`Fragmented::Right`]. Under [`CollisionPolicy::KeepWhole`] the target
/// is appended unchanged.
pub fn push_fragment_with(
    target: Fragment,
    fragments: &[Fragment],
    options: &PushOptions,
) -> Vec<Fragment> {
    let intersections = get_intersecting_fragments(target.range, fragments, None);
    let considered = match options.collision {
        CollisionPolicy::TruncateAll => &intersections[..],
        CollisionPolicy::FirstOnly => &intersections[..intersections.len().min(1)],
        CollisionPolicy::KeepWhole => &intersections[..0],
    };

    let pieces = considered
        .iter()
        .fold(vec![target.range], |pieces, hit| match hit.intersect_type {
            IntersectType::Inside => pieces,
            _ => pieces
                .into_iter()
                .flat_map(|piece| cut(piece, hit.fragment.range))
                .collect(),
        });

    let mut out = fragments.to_vec();
    match pieces.len() {
        0 => {
            debug!(id = %target.id, range = %target.range, "fragment swallowed by existing fragments");
        }
        1 => out.push(Fragment {
            range: pieces[0],
            ..target
        }),
        n => {
            debug!(id = %target.id, range = %target.range, pieces = n, "fragment split around collisions");
            out.extend(pieces.into_iter().enumerate().map(|(i, range)| Fragment {
                range,
                fragmented: Some(if i == 0 {
                    Fragmented::Left
                } else {
                    Fragmented::Right
                }),
                ..target.clone()
            }));
        }
    }
    out
}

/// `fragments` minus every fragment (optionally of one type) that `range`
/// meets.
pub fn remove_fragments_in_range(
    range: Range,
    fragments: &[Fragment],
    filter: Option<FragmentType>,
) -> Vec<Fragment> {
    fragments
        .iter()
        .filter(|f| {
            let selected = filter.map_or(true, |t| f.fragment_type() == t);
            !(selected && classify(range, f.range).is_some())
        })
        .cloned()
        .collect()
}

/// `fragments` minus every piece carrying `id`.
pub fn remove_fragment(id: &Id, fragments: &[Fragment]) -> Vec<Fragment> {
    fragments.iter().filter(|f| &f.id != id).cloned().collect()
}

pub fn find_fragment<'a>(id: &Id, fragments: &'a [Fragment]) -> Option<&'a Fragment> {
    fragments.iter().find(|f| &f.id == id)
}
