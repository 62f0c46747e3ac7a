//! Note insertion ordering
//!
//! Finds the index at which a new scripture note must be inserted into a
//! book's ordered note sequence so the sequence stays sorted by document
//! position. The sequence is maintained incrementally on every insert; it is
//! never globally re-sorted.
//!
//! Two modes:
//!
//! - Reference-only: insert immediately after the last existing note whose
//!   begin reference is at or before the target. Notes at the same reference
//!   keep insertion order (new ones go after existing ones).
//! - Anchor mode: compare by the composite key (begin reference,
//!   section index, paragraph index, character offset), in that priority
//!   order. Anchors that cannot be located in the live book - deleted
//!   content, or archived saved-version copies - take the position-unknown
//!   key (section -1, paragraph +infinity).

use scripture_model::{BcvRef, BookAnnotations, NoteAnchor, ScrBook, ScriptureNote};

/// Position-comparison key for a note: (reference, section, paragraph,
/// offset). Lexicographic tuple order is exactly the priority order.
type PositionKey = (BcvRef, i32, usize, usize);

/// Section index used when an anchor cannot be ordered against live content
const SECTION_UNKNOWN: i32 = -1;
/// Paragraph index used when an anchor cannot be ordered against live content
const PARA_UNKNOWN: usize = usize::MAX;

// =============================================================================
// Index computation
// =============================================================================

/// Reference-only mode: the insertion index for a note with the given begin
/// reference and no usable anchor information. Scans from the end so ties
/// land after all existing notes at the same reference.
pub fn insertion_index_by_ref(annotations: &BookAnnotations, target: BcvRef) -> usize {
    let notes = annotations.notes();
    for i in (0..notes.len()).rev() {
        if notes[i].begin_ref() <= target {
            return i + 1;
        }
    }
    0
}

/// Anchor mode: the insertion index for a note with the given begin
/// reference, begin anchor, and character offset within that anchor.
///
/// Walks backward from the end of the sequence while existing notes compare
/// strictly after the target key, stopping at the first note at or before it.
pub fn insertion_index(
    annotations: &BookAnnotations,
    book: &ScrBook,
    target: BcvRef,
    anchor: &NoteAnchor,
    offset: usize,
) -> usize {
    let (section, para) = anchor_position(book, Some(anchor));
    let target_key: PositionKey = (target, section, para, offset);

    let notes = annotations.notes();
    let mut index = notes.len();
    while index > 0 {
        if note_key(book, &notes[index - 1]) > target_key {
            index -= 1;
        } else {
            break;
        }
    }
    index
}

/// Insert a note into the sequence at its computed position, using anchor
/// mode when the note carries a begin anchor and reference-only mode
/// otherwise. Returns the index the note landed at.
pub fn insert_note(
    annotations: &mut BookAnnotations,
    book: &ScrBook,
    note: ScriptureNote,
) -> usize {
    let index = match &note.begin_anchor {
        Some(anchor) => insertion_index(
            annotations,
            book,
            note.begin_ref(),
            anchor,
            note.begin_offset,
        ),
        None => insertion_index_by_ref(annotations, note.begin_ref()),
    };
    annotations.insert_at(index, note);
    index
}

// =============================================================================
// Keys
// =============================================================================

/// The composite position key of an existing note
fn note_key(book: &ScrBook, note: &ScriptureNote) -> PositionKey {
    let (section, para) = anchor_position(book, note.begin_anchor.as_ref());
    (note.begin_ref(), section, para, note.begin_offset)
}

/// Resolve an anchor to (section index, paragraph index) in the live book.
/// Anchors with no paragraph there sort with the position-unknown sentinels.
fn anchor_position(book: &ScrBook, anchor: Option<&NoteAnchor>) -> (i32, usize) {
    anchor
        .and_then(|a| book.find_paragraph(a.owning_paragraph()))
        .map(|(s, p)| (s as i32, p))
        .unwrap_or((SECTION_UNKNOWN, PARA_UNKNOWN))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use scripture_model::{NoteKind, ObjId, ScrParagraph, ScrSection, TextRun};

    fn reference(verse: u32) -> BcvRef {
        BcvRef::new(40, 1, verse)
    }

    fn note_at(verse: u32) -> ScriptureNote {
        ScriptureNote::at(NoteKind::Translator, reference(verse))
    }

    /// A book with two sections of three content paragraphs each
    fn live_book() -> ScrBook {
        let mut book = ScrBook::new(40, "Matthew");
        for s in 0..2u32 {
            let mut section = ScrSection::new(
                BcvRef::new(40, s + 1, 1),
                BcvRef::new(40, s + 1, 20),
            );
            for _ in 0..3 {
                section.content.push(ScrParagraph::new().run(TextRun::new("text")));
            }
            book.sections.push(section);
        }
        book
    }

    fn para_anchor(book: &ScrBook, section: usize, para: usize) -> NoteAnchor {
        NoteAnchor::Paragraph(book.sections[section].content[para].id())
    }

    #[test]
    fn test_reference_only_appends_after_lower_refs() {
        let mut annotations = BookAnnotations::new(40);
        annotations.insert_at(0, note_at(1));
        annotations.insert_at(1, note_at(5));

        assert_eq!(insertion_index_by_ref(&annotations, reference(3)), 1);
        assert_eq!(insertion_index_by_ref(&annotations, reference(9)), 2);
    }

    #[test]
    fn test_reference_only_before_all() {
        let mut annotations = BookAnnotations::new(40);
        annotations.insert_at(0, note_at(4));
        assert_eq!(insertion_index_by_ref(&annotations, reference(2)), 0);
    }

    #[test]
    fn test_reference_only_ties_go_after() {
        let mut annotations = BookAnnotations::new(40);
        annotations.insert_at(0, note_at(3));
        annotations.insert_at(1, note_at(3));

        assert_eq!(insertion_index_by_ref(&annotations, reference(3)), 2);
    }

    #[test]
    fn test_empty_sequence() {
        let annotations = BookAnnotations::new(40);
        assert_eq!(insertion_index_by_ref(&annotations, reference(1)), 0);
    }

    #[test]
    fn test_anchor_mode_orders_by_paragraph() {
        let book = live_book();
        let mut annotations = BookAnnotations::new(40);

        let later = note_at(3).anchored(para_anchor(&book, 0, 2), 0, para_anchor(&book, 0, 2), 0);
        insert_note(&mut annotations, &book, later);

        let earlier = note_at(3).anchored(para_anchor(&book, 0, 0), 5, para_anchor(&book, 0, 0), 5);
        let index = insert_note(&mut annotations, &book, earlier);

        assert_eq!(index, 0);
    }

    #[test]
    fn test_anchor_mode_orders_by_offset_within_paragraph() {
        let book = live_book();
        let mut annotations = BookAnnotations::new(40);
        let anchor = para_anchor(&book, 1, 1);

        let at_ten = note_at(3).anchored(anchor, 10, anchor, 12);
        insert_note(&mut annotations, &book, at_ten);

        let at_two = note_at(3).anchored(anchor, 2, anchor, 4);
        assert_eq!(insert_note(&mut annotations, &book, at_two), 0);

        let at_twenty = note_at(3).anchored(anchor, 20, anchor, 21);
        assert_eq!(insert_note(&mut annotations, &book, at_twenty), 2);
    }

    #[test]
    fn test_reference_outranks_position() {
        let book = live_book();
        let mut annotations = BookAnnotations::new(40);

        // A verse-5 note anchored early in the book
        let high_ref = note_at(5).anchored(para_anchor(&book, 0, 0), 0, para_anchor(&book, 0, 0), 0);
        insert_note(&mut annotations, &book, high_ref);

        // A verse-2 note anchored later still sorts first: reference wins
        let low_ref = note_at(2).anchored(para_anchor(&book, 1, 2), 50, para_anchor(&book, 1, 2), 50);
        assert_eq!(insert_note(&mut annotations, &book, low_ref), 0);
    }

    #[test]
    fn test_stable_tie_break() {
        let book = live_book();
        let mut annotations = BookAnnotations::new(40);
        let anchor = para_anchor(&book, 0, 1);

        let first = note_at(3).anchored(anchor, 4, anchor, 4);
        let first_id = first.id();
        let second = note_at(3).anchored(anchor, 4, anchor, 4);
        let second_id = second.id();

        insert_note(&mut annotations, &book, first);
        let index = insert_note(&mut annotations, &book, second);

        assert_eq!(index, 1);
        assert_eq!(annotations.get(0).unwrap().id(), first_id);
        assert_eq!(annotations.get(1).unwrap().id(), second_id);
    }

    #[test]
    fn test_archived_anchor_is_position_unknown() {
        let book = live_book();
        let mut annotations = BookAnnotations::new(40);

        // An existing note anchored into a paragraph the live book does not
        // contain (an archived saved-version copy) takes the unknown key
        // (section -1, paragraph +infinity) and is never judged "after" a
        // live target, so it keeps its place
        let archived = note_at(3).anchored(
            NoteAnchor::Paragraph(ObjId::new()),
            0,
            NoteAnchor::Paragraph(ObjId::new()),
            0,
        );
        insert_note(&mut annotations, &book, archived);

        let live = note_at(3).anchored(para_anchor(&book, 0, 0), 0, para_anchor(&book, 0, 0), 0);
        let index = insert_note(&mut annotations, &book, live);
        assert_eq!(index, 1);
    }

    #[test]
    fn test_insert_without_anchor_falls_back_to_reference_mode() {
        let book = live_book();
        let mut annotations = BookAnnotations::new(40);

        insert_note(&mut annotations, &book, note_at(2));
        insert_note(&mut annotations, &book, note_at(6));
        let index = insert_note(&mut annotations, &book, note_at(4));

        assert_eq!(index, 1);
        let refs: Vec<u32> = annotations.notes().iter().map(|n| n.begin_ref().verse).collect();
        assert_eq!(refs, vec![2, 4, 6]);
    }
}
