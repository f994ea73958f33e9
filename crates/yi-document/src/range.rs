//! Half-open character ranges.
//!
//! Positions are character offsets into a base string. They are signed
//! because [`normalize_range`] rebases a range onto an enclosing one, and a
//! query that starts before the enclosing fragment ends up negative.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DocumentError;

/// A half-open interval `[start, end)`.
///
/// `start <= end` is a precondition of every function in this crate that
/// does not explicitly validate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start: i64,
    pub end: i64,
}

impl Range {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Create a range, rejecting `start > end`.
    pub fn try_new(start: i64, end: i64) -> Result<Self, DocumentError> {
        if start > end {
            return Err(DocumentError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn len(&self) -> usize {
        (self.end - self.start).max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// `true` when `other` lies entirely within `self`.
    pub fn contains(&self, other: &Range) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// `true` when both ranges share at least one position.
    pub fn overlaps(&self, other: &Range) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// `true` iff `range.start <= target < range.end`.
pub fn is_between(target: i64, range: Range) -> bool {
    target >= range.start && target < range.end
}

/// Re-express `target` relative to the start of `normalizer`.
///
/// No bounds checking: the result is only meaningful when `target` refers
/// to the same base string as `normalizer`.
pub fn normalize_range(normalizer: Range, target: Range) -> Range {
    Range {
        start: target.start - normalizer.start,
        end: target.end - normalizer.start,
    }
}

/// `true` when either endpoint of `fragment` (`start` or `end - 1`) lies
/// inside `range`.
pub fn check_fragment_in_range(range: Range, fragment: Range) -> bool {
    is_between(fragment.start, range) || is_between(fragment.end - 1, range)
}

/// Slice `text` by character offsets. `None` when the range is inverted,
/// negative or runs past the end of `text`.
pub fn char_slice(text: &str, range: Range) -> Option<&str> {
    if range.start < 0 || range.start > range.end {
        return None;
    }
    let (start, end) = (range.start as usize, range.end as usize);
    let mut offsets = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()));
    let from = offsets.nth(start)?;
    let to = if end == start {
        from
    } else {
        offsets.nth(end - start - 1)?
    };
    Some(&text[from..to])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_between_is_half_open() {
        let r = Range::new(3, 7);
        assert!(is_between(3, r));
        assert!(is_between(6, r));
        assert!(!is_between(7, r));
        assert!(!is_between(2, r));
        assert!(!is_between(0, Range::new(0, 0)));
    }

    #[test]
    fn normalize_rebases_onto_normalizer() {
        let sentence = Range::new(10, 30);
        assert_eq!(normalize_range(sentence, Range::new(12, 16)), Range::new(2, 6));
        assert_eq!(normalize_range(sentence, Range::new(5, 12)), Range::new(-5, 2));
    }

    #[test]
    fn try_new_rejects_inverted() {
        assert_eq!(
            Range::try_new(5, 2),
            Err(DocumentError::InvalidRange { start: 5, end: 2 })
        );
        assert_eq!(Range::try_new(2, 2), Ok(Range::new(2, 2)));
    }

    #[test]
    fn overlap_and_containment() {
        let a = Range::new(0, 10);
        assert!(a.contains(&Range::new(2, 10)));
        assert!(!a.contains(&Range::new(2, 11)));
        assert!(a.overlaps(&Range::new(9, 12)));
        assert!(!a.overlaps(&Range::new(10, 12)));
        assert_eq!(Range::new(4, 9).len(), 5);
        assert!(Range::new(4, 4).is_empty());
    }

    #[test]
    fn check_fragment_in_range_uses_last_position() {
        let range = Range::new(5, 10);
        assert!(check_fragment_in_range(range, Range::new(0, 6)));
        assert!(check_fragment_in_range(range, Range::new(9, 20)));
        assert!(!check_fragment_in_range(range, Range::new(0, 5)));
        assert!(!check_fragment_in_range(range, Range::new(10, 20)));
    }

    #[test]
    fn char_slice_counts_characters() {
        assert_eq!(char_slice("the cat", Range::new(4, 7)), Some("cat"));
        assert_eq!(char_slice("猫が好き", Range::new(0, 1)), Some("猫"));
        assert_eq!(char_slice("猫が好き", Range::new(2, 4)), Some("好き"));
        assert_eq!(char_slice("abc", Range::new(3, 3)), Some(""));
        assert_eq!(char_slice("abc", Range::new(2, 4)), None);
        assert_eq!(char_slice("abc", Range::new(-1, 2)), None);
    }
}
