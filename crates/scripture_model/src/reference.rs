//! Scripture References - Book/Chapter/Verse triples and reference ranges
//!
//! This module implements the reference types used throughout the model:
//!
//! - `BcvRef` - a (book, chapter, verse) triple with a zero "unknown" sentinel
//! - `RefRange` - a start/end pair of references covered by a footnote or note
//! - Parsing helpers for chapter-number and verse-number run text, including
//!   bridged verses such as "3-4"

use serde::{Deserialize, Serialize};

// =============================================================================
// BcvRef
// =============================================================================

/// A Book/Chapter/Verse reference.
///
/// A value of 0 in any field means "unknown". References order by
/// (book, chapter, verse), which matches document order within a book.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct BcvRef {
    /// Canonical book number (1-based; 0 = unknown)
    pub book: u32,
    /// Chapter number (0 = unknown)
    pub chapter: u32,
    /// Verse number (0 = unknown)
    pub verse: u32,
}

impl BcvRef {
    /// Create a reference from book, chapter, and verse numbers
    pub fn new(book: u32, chapter: u32, verse: u32) -> Self {
        Self { book, chapter, verse }
    }

    /// The empty (fully unknown) reference
    pub const EMPTY: BcvRef = BcvRef {
        book: 0,
        chapter: 0,
        verse: 0,
    };

    /// Check if every field is unknown
    pub fn is_empty(&self) -> bool {
        self.book == 0 && self.chapter == 0 && self.verse == 0
    }

    /// Check if the chapter field is known
    pub fn chapter_is_known(&self) -> bool {
        self.chapter != 0
    }

    /// Check if the verse field is known
    pub fn verse_is_known(&self) -> bool {
        self.verse != 0
    }
}

impl std::fmt::Display for BcvRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.book, self.chapter, self.verse)
    }
}

// =============================================================================
// RefRange
// =============================================================================

/// The chapter:verse range a footnote or note refers to.
///
/// Invariant: the book number is constant across start and end. A range is
/// computed lazily, cached on its owner, and invalidated explicitly when the
/// owning book is structurally edited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RefRange {
    /// First reference covered
    pub start: BcvRef,
    /// Last reference covered
    pub end: BcvRef,
}

impl RefRange {
    /// Create a range from start and end references
    pub fn new(start: BcvRef, end: BcvRef) -> Self {
        Self { start, end }
    }

    /// Create a single-reference range
    pub fn point(reference: BcvRef) -> Self {
        Self {
            start: reference,
            end: reference,
        }
    }

    /// The empty sentinel range, returned when an anchor cannot be located
    pub const EMPTY: RefRange = RefRange {
        start: BcvRef::EMPTY,
        end: BcvRef::EMPTY,
    };

    /// Check if both ends are fully unknown
    pub fn is_empty(&self) -> bool {
        self.start.is_empty() && self.end.is_empty()
    }
}

impl std::fmt::Display for RefRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

// =============================================================================
// Run text parsing
// =============================================================================

/// Parse the text of a verse-number run into (start, end) verse numbers.
///
/// Handles plain numbers ("12") and verse bridges ("12-14", en dash
/// accepted). Trailing non-numeric segment text is ignored. Returns None if
/// the text carries no leading verse number.
pub fn parse_verse_number(text: &str) -> Option<(u32, u32)> {
    let text = text.trim();
    let (start, rest) = take_number(text)?;

    let rest = rest.trim_start();
    let end = rest
        .strip_prefix('-')
        .or_else(|| rest.strip_prefix('\u{2013}'))
        .and_then(|after| take_number(after.trim_start()))
        .map(|(n, _)| n)
        .unwrap_or(start);

    // A bridge that runs backward is treated as a single verse
    Some((start, end.max(start)))
}

/// Parse the text of a chapter-number run into a chapter number.
pub fn parse_chapter_number(text: &str) -> Option<u32> {
    take_number(text.trim()).map(|(n, _)| n)
}

/// Split leading ASCII digits off a string, returning the parsed number and
/// the remainder. Returns None when there is no leading digit or the number
/// is zero.
fn take_number(text: &str) -> Option<(u32, &str)> {
    let digits: usize = text.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let (head, rest) = text.split_at(digits);
    match head.parse::<u32>() {
        Ok(n) if n > 0 => Some((n, rest)),
        _ => None,
    }
}

// =============================================================================
// Tests
// =============================================================================
