use thiserror::Error;

use crate::id::Id;
use crate::range::Range;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("invalid range [{start}, {end}): start is past end")]
    InvalidRange { start: i64, end: i64 },
    #[error("range {range} exceeds text of length {len}")]
    RangeOutOfBounds { range: Range, len: usize },
    #[error("word range {word} lies outside sentence {sentence}")]
    WordOutsideSentence { word: Range, sentence: Range },
    #[error("fragment {0} not found")]
    FragmentNotFound(Id),
    #[error("fragment {0} is not a sentence")]
    NotASentence(Id),
    #[error("fragmentable {0} not found")]
    FragmentableNotFound(Id),
    #[error("block {0} not found")]
    BlockNotFound(Id),
}
