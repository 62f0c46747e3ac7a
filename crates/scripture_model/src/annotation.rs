//! Annotation model - scripture notes kept in document order
//!
//! Scripture notes annotate a reference range of a book for review and
//! consultation. Notes support:
//! - Anchoring to a paragraph, or to a translation or segment owned by one
//! - Four free-text sub-texts (quote, discussion, recommendation, resolution)
//! - Resolution status tracking
//! - Creation/modification/resolution timestamps
//!
//! Each book owns one ordered note sequence. The sequence is kept sorted by
//! document position incrementally on every insert - never by a global sort
//! (see `ref_engine::note_indexer`).

use crate::{BcvRef, ObjId, RefRange};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Note ID
// =============================================================================

/// Unique identifier for a scripture note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteId(Uuid);

impl NoteId {
    /// Create a new random NoteId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a NoteId from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Anchors
// =============================================================================

/// What a note end is anchored to.
///
/// Translations and segments are owned by a paragraph; for position
/// comparison all three variants resolve to the owning paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteAnchor {
    /// Anchored directly to a paragraph
    Paragraph(ObjId),
    /// Anchored to a translation owned by a paragraph
    Translation { para: ObjId },
    /// Anchored to a segment owned by a paragraph
    Segment { para: ObjId },
}

impl NoteAnchor {
    /// The paragraph this anchor ultimately lives in
    pub fn owning_paragraph(&self) -> ObjId {
        match self {
            NoteAnchor::Paragraph(para) => *para,
            NoteAnchor::Translation { para } => *para,
            NoteAnchor::Segment { para } => *para,
        }
    }
}

// =============================================================================
// Note type and status
// =============================================================================

/// Kind of scripture note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteKind {
    /// A consultant's note
    Consultant,
    /// A translator's note
    Translator,
}

impl Default for NoteKind {
    fn default() -> Self {
        NoteKind::Translator
    }
}

/// Resolution status of a scripture note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionStatus {
    /// Still open for discussion
    Open,
    /// Resolved
    Resolved,
}

impl Default for ResolutionStatus {
    fn default() -> Self {
        ResolutionStatus::Open
    }
}

// =============================================================================
// ScriptureNote
// =============================================================================

/// An annotation on a reference range of a book
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptureNote {
    id: NoteId,
    /// Kind of note
    pub kind: NoteKind,
    /// The reference range this note is about
    pub range: RefRange,
    /// Begin anchor, if the note is attached to content
    pub begin_anchor: Option<NoteAnchor>,
    /// End anchor, if the note is attached to content
    pub end_anchor: Option<NoteAnchor>,
    /// Character offset of the note start within the begin anchor
    pub begin_offset: usize,
    /// Character offset of the note end within the end anchor
    pub end_offset: usize,
    /// The quoted text the note is about
    pub quote: String,
    /// Discussion text
    pub discussion: String,
    /// Recommendation text
    pub recommendation: String,
    /// Resolution text
    pub resolution: String,
    /// Resolution status
    pub status: ResolutionStatus,
    /// When the note was created
    pub date_created: DateTime<Utc>,
    /// When the note was last modified
    pub date_modified: DateTime<Utc>,
    /// When the note was resolved, if it has been
    pub date_resolved: Option<DateTime<Utc>>,
}

impl ScriptureNote {
    /// Create a new open note on the given reference range
    pub fn new(kind: NoteKind, range: RefRange) -> Self {
        let now = Utc::now();
        Self {
            id: NoteId::new(),
            kind,
            range,
            begin_anchor: None,
            end_anchor: None,
            begin_offset: 0,
            end_offset: 0,
            quote: String::new(),
            discussion: String::new(),
            recommendation: String::new(),
            resolution: String::new(),
            status: ResolutionStatus::Open,
            date_created: now,
            date_modified: now,
            date_resolved: None,
        }
    }

    /// Create a note on a single reference
    pub fn at(kind: NoteKind, reference: BcvRef) -> Self {
        Self::new(kind, RefRange::point(reference))
    }

    /// Anchor the note to a begin/end pair with character offsets
    pub fn anchored(
        mut self,
        begin: NoteAnchor,
        begin_offset: usize,
        end: NoteAnchor,
        end_offset: usize,
    ) -> Self {
        self.begin_anchor = Some(begin);
        self.begin_offset = begin_offset;
        self.end_anchor = Some(end);
        self.end_offset = end_offset;
        self
    }

    /// Get the note ID
    pub fn id(&self) -> NoteId {
        self.id
    }

    /// The reference the note begins at
    pub fn begin_ref(&self) -> BcvRef {
        self.range.start
    }

    /// Mark the note resolved, recording the resolution text and time
    pub fn resolve(&mut self, resolution: impl Into<String>) {
        self.resolution = resolution.into();
        self.status = ResolutionStatus::Resolved;
        let now = Utc::now();
        self.date_resolved = Some(now);
        self.date_modified = now;
    }

    /// Reopen a resolved note
    pub fn reopen(&mut self) {
        self.status = ResolutionStatus::Open;
        self.date_resolved = None;
        self.date_modified = Utc::now();
    }
}

// =============================================================================
// BookAnnotations
// =============================================================================

/// The ordered note sequence for one book.
///
/// Ordering is by (document position of the begin anchor, then begin
/// reference, then insertion order) and is maintained on every insert by the
/// note indexer; this type only stores the sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAnnotations {
    /// Canonical number of the book these notes annotate
    pub book_num: u32,
    notes: Vec<ScriptureNote>,
}

impl BookAnnotations {
    /// Create an empty note sequence for a book
    pub fn new(book_num: u32) -> Self {
        Self {
            book_num,
            notes: Vec::new(),
        }
    }

    /// Get the notes in document order
    pub fn notes(&self) -> &[ScriptureNote] {
        &self.notes
    }

    /// Number of notes
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Check if there are no notes
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Get a note by sequence index
    pub fn get(&self, index: usize) -> Option<&ScriptureNote> {
        self.notes.get(index)
    }

    /// Get a mutable note by ID
    pub fn get_mut(&mut self, id: NoteId) -> Option<&mut ScriptureNote> {
        self.notes.iter_mut().find(|n| n.id() == id)
    }

    /// Insert a note at a precomputed sequence index. Callers are expected
    /// to obtain the index from the note indexer so the sequence stays
    /// sorted.
    pub fn insert_at(&mut self, index: usize, note: ScriptureNote) {
        let index = index.min(self.notes.len());
        self.notes.insert(index, note);
    }

    /// Remove a note by ID
    pub fn remove(&mut self, id: NoteId) -> Option<ScriptureNote> {
        let index = self.notes.iter().position(|n| n.id() == id)?;
        Some(self.notes.remove(index))
    }
}

// =============================================================================
// Tests
// =============================================================================
