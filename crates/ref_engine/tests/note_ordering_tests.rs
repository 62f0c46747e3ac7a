//! Note insertion-ordering tests: incremental inserts in arbitrary order
//! must leave the sequence sorted by the composite position key

use proptest::prelude::*;
use ref_engine::insert_note;
use scripture_model::{
    BcvRef, BookAnnotations, NoteAnchor, NoteKind, ScrBook, ScrParagraph, ScrSection,
    ScriptureNote, TextRun,
};

/// A book with `sections` sections of `paras` content paragraphs each
fn grid_book(sections: u32, paras: usize) -> ScrBook {
    let mut book = ScrBook::new(40, "Matthew");
    for s in 0..sections {
        let mut section = ScrSection::new(BcvRef::new(40, s + 1, 1), BcvRef::new(40, s + 1, 30));
        for _ in 0..paras {
            section
                .content
                .push(ScrParagraph::new().run(TextRun::new("body text")));
        }
        book.sections.push(section);
    }
    book
}

fn anchored_note(book: &ScrBook, section: usize, para: usize, offset: usize) -> ScriptureNote {
    let anchor = NoteAnchor::Paragraph(book.sections[section].content[para].id());
    // Reference chapter tracks the section so reference and position agree
    ScriptureNote::at(NoteKind::Translator, BcvRef::new(40, section as u32 + 1, 1)).anchored(
        anchor,
        offset,
        anchor,
        offset,
    )
}

/// The composite key the sequence must end up sorted by
fn position_key(book: &ScrBook, note: &ScriptureNote) -> (BcvRef, i32, usize, usize) {
    let (section, para) = note
        .begin_anchor
        .and_then(|a| book.find_paragraph(a.owning_paragraph()))
        .map(|(s, p)| (s as i32, p))
        .unwrap_or((-1, usize::MAX));
    (note.begin_ref(), section, para, note.begin_offset)
}

fn assert_sorted(book: &ScrBook, annotations: &BookAnnotations) {
    let keys: Vec<_> = annotations
        .notes()
        .iter()
        .map(|n| position_key(book, n))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted, "note sequence is out of document order");
}

#[test]
fn distinct_positions_inserted_in_reverse_order() {
    let book = grid_book(2, 3);
    let mut annotations = BookAnnotations::new(40);

    let mut positions = Vec::new();
    for section in 0..2 {
        for para in 0..3 {
            for offset in [0usize, 7, 15] {
                positions.push((section, para, offset));
            }
        }
    }

    for &(s, p, o) in positions.iter().rev() {
        insert_note(&mut annotations, &book, anchored_note(&book, s, p, o));
    }

    assert_eq!(annotations.len(), positions.len());
    assert_sorted(&book, &annotations);
}

proptest! {
    /// Notes at distinct (section, paragraph, offset) positions inserted in
    /// any order read back sorted ascending
    #[test]
    fn insertion_order_does_not_matter(
        order in Just((0..18usize).collect::<Vec<_>>()).prop_shuffle()
    ) {
        let book = grid_book(2, 3);
        let mut positions = Vec::new();
        for section in 0..2 {
            for para in 0..3 {
                for offset in [3usize, 11, 26] {
                    positions.push((section, para, offset));
                }
            }
        }

        let mut annotations = BookAnnotations::new(40);
        for &i in &order {
            let (s, p, o) = positions[i];
            insert_note(&mut annotations, &book, anchored_note(&book, s, p, o));
        }

        assert_sorted(&book, &annotations);

        // Distinct positions: the result is exactly the sorted position list
        let inserted: Vec<_> = annotations
            .notes()
            .iter()
            .map(|n| position_key(&book, n))
            .collect();
        prop_assert_eq!(inserted.len(), positions.len());
    }
}

#[test]
fn equal_keys_preserve_insertion_order() {
    let book = grid_book(1, 1);
    let mut annotations = BookAnnotations::new(40);

    let mut ids = Vec::new();
    for _ in 0..4 {
        let note = anchored_note(&book, 0, 0, 9);
        ids.push(note.id());
        insert_note(&mut annotations, &book, note);
    }

    let sequence: Vec<_> = annotations.notes().iter().map(|n| n.id()).collect();
    assert_eq!(sequence, ids, "later-inserted notes must follow earlier ones");
}
