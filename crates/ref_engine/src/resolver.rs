//! Footnote reference resolution
//!
//! Computes the chapter:verse range a footnote refers to. Two entry points:
//!
//! - [`resolve_all`] - one forward pass over a whole book that recomputes and
//!   caches every footnote's range. This is the explicit batch operation.
//! - [`resolve_range`] - the lazy accessor for a single footnote. Returns the
//!   cached range when present; otherwise scans paragraph runs backward from
//!   the footnote's anchor. Verse-number runs capture verse start/end,
//!   chapter-number runs capture the chapter (defaulting the verse to 1 when
//!   none was seen), and already-resolved sibling footnotes seed fields that
//!   are still unknown. Meeting an unresolved sibling means no footnote in
//!   the book has been resolved yet; the scan short-circuits into one
//!   [`resolve_all`] pass.
//!
//! The scan continues into previous paragraphs of the same section content
//! but never crosses into a previous section. Fields still unknown after the
//! scan are filled from the section's start reference, and only when the
//! section spans a single chapter. Verse and chapter values of 0 mean
//! "unknown"; section bounds never override a partially resolved value.
//!
//! A footnote whose anchor run has been deleted resolves to
//! [`RefRange::EMPTY`]. That is a recognized edge (documents are edited while
//! references are computed), not a failure.

use scripture_model::{
    parse_chapter_number, parse_verse_number, BcvRef, ObjId, RefRange, ScrBook, ScrSection,
};

/// Resolved chapter/verse fields accumulated during a scan. Zero = unknown.
#[derive(Debug, Clone, Copy, Default)]
struct ScanState {
    chapter: u32,
    verse_start: u32,
    verse_end: u32,
}

impl ScanState {
    fn is_complete(&self) -> bool {
        self.chapter != 0 && self.verse_start != 0
    }

    /// Fill still-unknown fields from a section's start reference. Only
    /// single-chapter sections can do this; a multi-chapter section's start
    /// says nothing about where in the section the anchor sits.
    fn fill_from_section(&mut self, section: &ScrSection) {
        if !section.covers_single_chapter() {
            return;
        }
        if self.chapter == 0 {
            self.chapter = section.start_ref.chapter;
        }
        if self.verse_start == 0 {
            self.verse_start = section.start_ref.verse;
            self.verse_end = section.start_ref.verse;
        }
    }

    fn into_range(self, book_num: u32) -> RefRange {
        let start = BcvRef::new(book_num, self.chapter, self.verse_start);
        let end = BcvRef::new(book_num, self.chapter, self.verse_end.max(self.verse_start));
        RefRange::new(start, end)
    }
}

/// Outcome of the backward scan for one footnote
enum ScanOutcome {
    /// Scan finished (possibly with unknown fields still to be filled)
    Finished(ScanState),
    /// An unresolved sibling footnote was encountered; nothing in the book
    /// has been resolved yet and a whole-book pass is needed
    NeedsFullPass,
    /// The anchor run is no longer in its paragraph
    AnchorMissing,
}

// =============================================================================
// Lazy accessor
// =============================================================================

/// Get the chapter:verse range for one footnote, computing and caching it if
/// needed. Returns [`RefRange::EMPTY`] when the anchor cannot be located.
pub fn resolve_range(book: &mut ScrBook, footnote_id: ObjId) -> RefRange {
    if let Some(range) = book.footnote(footnote_id).and_then(|f| f.resolved_range()) {
        return range;
    }

    match scan_backward(book, footnote_id) {
        ScanOutcome::Finished(mut state) => {
            if let Some(section_ix) = anchor_section(book, footnote_id) {
                state.fill_from_section(&book.sections[section_ix]);
            }
            let range = state.into_range(book.book_num);
            if let Some(footnote) = book.footnote_mut(footnote_id) {
                footnote.set_resolved_range(range);
            }
            range
        }
        ScanOutcome::NeedsFullPass => {
            tracing::debug!(
                book = book.book_num,
                "unresolved sibling footnote; resolving all footnotes"
            );
            resolve_all(book);
            book.footnote(footnote_id)
                .and_then(|f| f.resolved_range())
                .unwrap_or(RefRange::EMPTY)
        }
        ScanOutcome::AnchorMissing => {
            tracing::warn!(
                footnote = %footnote_id,
                "footnote anchor not found; returning empty range"
            );
            RefRange::EMPTY
        }
    }
}

/// Section index of a footnote's anchor paragraph, if it can be located
fn anchor_section(book: &ScrBook, footnote_id: ObjId) -> Option<usize> {
    let para_id = book.footnote(footnote_id)?.anchor_para?;
    book.find_paragraph(para_id).map(|(s, _)| s)
}

/// Scan paragraph runs backward from the footnote's anchor run
fn scan_backward(book: &ScrBook, footnote_id: ObjId) -> ScanOutcome {
    let anchor = match locate_anchor(book, footnote_id) {
        Some(a) => a,
        None => return ScanOutcome::AnchorMissing,
    };
    let (section_ix, para_ix, run_ix) = anchor;

    let mut state = ScanState::default();
    let content = &book.sections[section_ix].content;

    for p in (0..=para_ix).rev() {
        let runs = content[p].runs();
        let upper = if p == para_ix { run_ix } else { runs.len() };

        for run in runs[..upper].iter().rev() {
            if run.is_verse_number() {
                if state.verse_start == 0 {
                    if let Some((start, end)) = parse_verse_number(&run.text) {
                        state.verse_start = start;
                        state.verse_end = end;
                    }
                }
            } else if run.is_chapter_number() {
                if state.chapter == 0 {
                    if let Some(chapter) = parse_chapter_number(&run.text) {
                        state.chapter = chapter;
                        // No verse run between the chapter number and the
                        // anchor: the footnote sits at the chapter opening
                        if state.verse_start == 0 {
                            state.verse_start = 1;
                            state.verse_end = 1;
                        }
                    }
                }
            } else if let Some(embedded) = run.embedded {
                if embedded != footnote_id {
                    match book.footnote(embedded).map(|f| f.resolved_range()) {
                        Some(Some(seed)) => {
                            // First resolved value wins: seed only fields
                            // that are still unknown
                            if state.verse_start == 0 && seed.start.verse_is_known() {
                                state.verse_start = seed.start.verse;
                                state.verse_end = seed.end.verse;
                            }
                            if state.chapter == 0 && seed.start.chapter_is_known() {
                                state.chapter = seed.start.chapter;
                            }
                        }
                        Some(None) => return ScanOutcome::NeedsFullPass,
                        // Embedded object that is not a footnote of this book
                        None => {}
                    }
                }
            }

            if state.is_complete() {
                return ScanOutcome::Finished(state);
            }
        }
    }

    ScanOutcome::Finished(state)
}

/// Locate a footnote's anchor as (section, paragraph, run) indices
fn locate_anchor(book: &ScrBook, footnote_id: ObjId) -> Option<(usize, usize, usize)> {
    let para_id = book.footnote(footnote_id)?.anchor_para?;
    let (section_ix, para_ix) = book.find_paragraph(para_id)?;
    let run_ix = book.sections[section_ix].content[para_ix].embedded_run_index(footnote_id)?;
    Some((section_ix, para_ix, run_ix))
}

// =============================================================================
// Whole-book batch pass
// =============================================================================

/// Recompute and cache the range of every footnote in the book in one
/// forward pass. This is the explicit batch counterpart of [`resolve_range`]
/// and avoids quadratic backward rescans when nothing is resolved yet.
pub fn resolve_all(book: &mut ScrBook) {
    let mut resolved: Vec<(ObjId, RefRange)> = Vec::with_capacity(book.footnotes().len());

    for section in &book.sections {
        let mut state = ScanState::default();

        for para in &section.content {
            for run in para.runs() {
                if run.is_verse_number() {
                    if let Some((start, end)) = parse_verse_number(&run.text) {
                        state.verse_start = start;
                        state.verse_end = end;
                    }
                } else if run.is_chapter_number() {
                    if let Some(chapter) = parse_chapter_number(&run.text) {
                        state.chapter = chapter;
                        state.verse_start = 1;
                        state.verse_end = 1;
                    }
                } else if let Some(embedded) = run.embedded {
                    if book.footnote(embedded).is_some() {
                        let mut footnote_state = state;
                        footnote_state.fill_from_section(section);
                        resolved.push((embedded, footnote_state.into_range(book.book_num)));
                    }
                }
            }
        }
    }

    for (id, range) in resolved {
        if let Some(footnote) = book.footnote_mut(id) {
            footnote.set_resolved_range(range);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use scripture_model::{Footnote, ScrParagraph, ScrSection, TextRun};

    /// Build a one-section book: chapter 1, verses 1-3, with footnotes
    /// anchored after each verse run
    fn book_with_footnotes() -> (ScrBook, Vec<ObjId>) {
        let mut book = ScrBook::new(40, "Matthew");
        let mut ids = Vec::new();

        let mut para = ScrParagraph::new();
        para.push_run(TextRun::chapter_number("1"));
        for verse in 1..=3u32 {
            para.push_run(TextRun::verse_number(verse.to_string()));
            para.push_run(TextRun::new(format!("verse {verse} text ")));

            let mut footnote = Footnote::new();
            footnote.anchor_para = Some(para.id());
            let id = footnote.id();
            para.push_run(TextRun::embedded_object(id));
            book.add_footnote(footnote);
            ids.push(id);
        }

        let section =
            ScrSection::new(BcvRef::new(40, 1, 1), BcvRef::new(40, 1, 3)).paragraph(para);
        book.sections.push(section);
        (book, ids)
    }

    #[test]
    fn test_resolve_nearest_preceding_verse() {
        let (mut book, ids) = book_with_footnotes();

        for (i, id) in ids.iter().enumerate() {
            let verse = i as u32 + 1;
            let range = resolve_range(&mut book, *id);
            assert_eq!(range, RefRange::point(BcvRef::new(40, 1, verse)));
        }
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let (mut book, ids) = book_with_footnotes();

        let first = resolve_range(&mut book, ids[1]);
        let second = resolve_range(&mut book, ids[1]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_chapter_defaults_verse_to_one() {
        let mut book = ScrBook::new(40, "Matthew");
        let mut para = ScrParagraph::new();
        para.push_run(TextRun::chapter_number("2"));

        let mut footnote = Footnote::new();
        footnote.anchor_para = Some(para.id());
        let id = footnote.id();
        para.push_run(TextRun::embedded_object(id));
        book.add_footnote(footnote);

        // Multi-chapter bounds keep the section fallback out of play
        book.sections.push(
            ScrSection::new(BcvRef::new(40, 1, 20), BcvRef::new(40, 2, 5)).paragraph(para),
        );

        let range = resolve_range(&mut book, id);
        assert_eq!(range, RefRange::point(BcvRef::new(40, 2, 1)));
    }

    #[test]
    fn test_verse_bridge_range() {
        let mut book = ScrBook::new(40, "Matthew");
        let mut para = ScrParagraph::new();
        para.push_run(TextRun::chapter_number("1"));
        para.push_run(TextRun::verse_number("4-5"));
        para.push_run(TextRun::new("bridged text"));

        let mut footnote = Footnote::new();
        footnote.anchor_para = Some(para.id());
        let id = footnote.id();
        para.push_run(TextRun::embedded_object(id));
        book.add_footnote(footnote);

        book.sections
            .push(ScrSection::new(BcvRef::new(40, 1, 1), BcvRef::new(40, 1, 10)).paragraph(para));

        let range = resolve_range(&mut book, id);
        assert_eq!(range.start, BcvRef::new(40, 1, 4));
        assert_eq!(range.end, BcvRef::new(40, 1, 5));
    }

    #[test]
    fn test_scan_continues_into_previous_paragraph() {
        let mut book = ScrBook::new(40, "Matthew");

        let mut first = ScrParagraph::new();
        first.push_run(TextRun::chapter_number("1"));
        first.push_run(TextRun::verse_number("7"));
        first.push_run(TextRun::new("end of paragraph"));

        let mut second = ScrParagraph::new();
        second.push_run(TextRun::new("continues the verse "));
        let mut footnote = Footnote::new();
        footnote.anchor_para = Some(second.id());
        let id = footnote.id();
        second.push_run(TextRun::embedded_object(id));
        book.add_footnote(footnote);

        book.sections.push(
            ScrSection::new(BcvRef::new(40, 1, 1), BcvRef::new(40, 1, 10))
                .paragraph(first)
                .paragraph(second),
        );

        assert_eq!(
            resolve_range(&mut book, id),
            RefRange::point(BcvRef::new(40, 1, 7))
        );
    }

    #[test]
    fn test_seed_from_resolved_sibling() {
        let (mut book, ids) = book_with_footnotes();

        // Resolve the second footnote, then clear only the third's cache and
        // remove the verse run between them so the scan reaches the sibling
        resolve_all(&mut book);
        let para_id = book.sections[0].content[0].id();
        let para = book.paragraph_mut(para_id).unwrap();
        // Runs: ch, v1, text, fn0, v2, text, fn1, v3, text, fn2
        para.remove_run(7); // the "3" verse-number run
        book.footnote_mut(ids[2]).unwrap().clear_resolved_range();

        let range = resolve_range(&mut book, ids[2]);
        // Seeded from footnote 1's resolved (1:2) range
        assert_eq!(range, RefRange::point(BcvRef::new(40, 1, 2)));
    }

    #[test]
    fn test_unresolved_sibling_triggers_full_pass() {
        let (mut book, ids) = book_with_footnotes();

        // Nothing resolved yet; resolving the last footnote walks past two
        // unresolved siblings
        let range = resolve_range(&mut book, ids[2]);
        assert_eq!(range, RefRange::point(BcvRef::new(40, 1, 3)));

        // The full pass resolved every other footnote as a side effect
        for (i, id) in ids.iter().enumerate() {
            let cached = book.footnote(*id).unwrap().resolved_range();
            assert_eq!(
                cached,
                Some(RefRange::point(BcvRef::new(40, 1, i as u32 + 1)))
            );
        }
    }

    #[test]
    fn test_missing_anchor_yields_empty_range() {
        let mut book = ScrBook::new(40, "Matthew");
        let footnote = Footnote::new(); // never anchored
        let id = footnote.id();
        book.add_footnote(footnote);

        assert_eq!(resolve_range(&mut book, id), RefRange::EMPTY);
        // Sentinel results are not cached
        assert!(!book.footnote(id).unwrap().is_resolved());
    }

    #[test]
    fn test_deleted_anchor_run_yields_empty_range() {
        let (mut book, ids) = book_with_footnotes();
        let para_id = book.sections[0].content[0].id();
        let para = book.paragraph_mut(para_id).unwrap();
        let run_ix = para.embedded_run_index(ids[0]).unwrap();
        para.remove_run(run_ix);

        assert_eq!(resolve_range(&mut book, ids[0]), RefRange::EMPTY);
    }

    #[test]
    fn test_section_fallback_fills_unknown_only() {
        let mut book = ScrBook::new(40, "Matthew");
        let mut para = ScrParagraph::new();
        para.push_run(TextRun::new("intro material, no verse runs "));

        let mut footnote = Footnote::new();
        footnote.anchor_para = Some(para.id());
        let id = footnote.id();
        para.push_run(TextRun::embedded_object(id));
        book.add_footnote(footnote);

        book.sections
            .push(ScrSection::new(BcvRef::new(40, 1, 1), BcvRef::new(40, 1, 5)).paragraph(para));

        assert_eq!(
            resolve_range(&mut book, id),
            RefRange::point(BcvRef::new(40, 1, 1))
        );
    }

    #[test]
    fn test_multi_chapter_section_does_not_fill() {
        let mut book = ScrBook::new(40, "Matthew");
        let mut para = ScrParagraph::new();
        para.push_run(TextRun::new("no markers at all "));

        let mut footnote = Footnote::new();
        footnote.anchor_para = Some(para.id());
        let id = footnote.id();
        para.push_run(TextRun::embedded_object(id));
        book.add_footnote(footnote);

        book.sections
            .push(ScrSection::new(BcvRef::new(40, 1, 20), BcvRef::new(40, 2, 5)).paragraph(para));

        let range = resolve_range(&mut book, id);
        assert!(!range.start.chapter_is_known());
        assert!(!range.start.verse_is_known());
    }

    #[test]
    fn test_clear_resolved_ranges_invalidates() {
        let (mut book, ids) = book_with_footnotes();
        resolve_all(&mut book);
        assert!(book.footnote(ids[0]).unwrap().is_resolved());

        book.clear_resolved_ranges();
        for id in &ids {
            assert!(!book.footnote(*id).unwrap().is_resolved());
        }
    }
}
