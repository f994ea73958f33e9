//! Fragmentable strings for annotated language-learning documents.
//!
//! A [`Fragmentable`] is an immutable base string plus a list of typed,
//! possibly overlapping annotations ([`Fragment`]s) addressed by
//! half-open character [`Range`]s. Sentence fragments own a flat list of
//! word fragments in sentence-local coordinates.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`range`] | [`Range`], `is_between`, `normalize_range` |
//! | [`fragment`] | [`Fragment`], [`FragmentKind`], [`WordFragment`] |
//! | [`store`] | intersection queries, `push_fragment`, `remove_fragments_in_range` |
//! | [`fragmentable`] | [`Fragmentable`] |
//! | [`block`], [`document`] | blocks, documents and selections |
//!
//! # Quick start
//!
//! ```
//! use yi_document::{Fragment, Fragmentable, FragmentType, Range};
//!
//! let mut text = Fragmentable::new("the cat sat");
//! text.push_fragment(Fragment::mark(Range::new(4, 7), "yellow", None)).unwrap();
//!
//! let hits = text.fragments_in_range(Range::new(5, 6));
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].fragment.kind.fragment_type(), FragmentType::Mark);
//! assert_eq!(text.resolve(hits[0].fragment), Some("cat"));
//! ```

pub mod block;
pub mod document;
pub mod error;
pub mod fragment;
pub mod fragmentable;
pub mod id;
pub mod options;
pub mod range;
pub mod store;

pub use block::{BlockKind, BlockType, DialogLine, DocumentBlock};
pub use document::{Document, DocumentIdentifier, DocumentSelection};
pub use error::DocumentError;
pub use fragment::{
    Anchored, Fragment, FragmentKind, FragmentType, Fragmented, SentenceFragment, WordFragment,
};
pub use fragmentable::Fragmentable;
pub use id::Id;
pub use options::{CollisionPolicy, PushOptions};
pub use range::{is_between, normalize_range, Range};
pub use store::{FragmentSelection, IntersectResult, IntersectType};
