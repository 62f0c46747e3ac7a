//! Paragraph node - an ordered sequence of text runs

use crate::{ObjId, TextRun};
use serde::{Deserialize, Serialize};

/// A paragraph of scripture text, owning its run sequence exclusively
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrParagraph {
    id: ObjId,
    /// Named paragraph style, if any
    pub style: Option<String>,
    runs: Vec<TextRun>,
}

impl ScrParagraph {
    /// Create a new empty paragraph
    pub fn new() -> Self {
        Self {
            id: ObjId::new(),
            style: None,
            runs: Vec::new(),
        }
    }

    /// Create a paragraph with a named style
    pub fn with_style(style: impl Into<String>) -> Self {
        Self {
            id: ObjId::new(),
            style: Some(style.into()),
            runs: Vec::new(),
        }
    }

    /// Get the paragraph ID
    pub fn id(&self) -> ObjId {
        self.id
    }

    /// Get the run sequence
    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    /// Append a run, returning self for chained construction
    pub fn run(mut self, run: TextRun) -> Self {
        self.runs.push(run);
        self
    }

    /// Append a run
    pub fn push_run(&mut self, run: TextRun) {
        self.runs.push(run);
    }

    /// Remove the run at the given index
    pub fn remove_run(&mut self, index: usize) -> Option<TextRun> {
        if index < self.runs.len() {
            Some(self.runs.remove(index))
        } else {
            None
        }
    }

    /// Find the index of the run embedding the given object
    pub fn embedded_run_index(&self, id: ObjId) -> Option<usize> {
        self.runs.iter().position(|r| r.embedded == Some(id))
    }

    /// Get the concatenated text of all runs
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check if the paragraph has no runs
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

impl Default for ScrParagraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_runs() {
        let para = ScrParagraph::new()
            .run(TextRun::verse_number("1"))
            .run(TextRun::new("In the beginning"));

        assert_eq!(para.runs().len(), 2);
        assert_eq!(para.text(), "1In the beginning");
    }

    #[test]
    fn test_embedded_run_index() {
        let id = ObjId::new();
        let mut para = ScrParagraph::new();
        para.push_run(TextRun::new("text "));
        para.push_run(TextRun::embedded_object(id));

        assert_eq!(para.embedded_run_index(id), Some(1));
        assert_eq!(para.embedded_run_index(ObjId::new()), None);

        para.remove_run(1);
        assert_eq!(para.embedded_run_index(id), None);
    }
}
