//! Translations and back-translation bookkeeping
//!
//! A translation carries per-writing-system text plus a status per writing
//! system tracking how far checking has progressed. Editing an alternative
//! drops that alternative's status back to Unfinished; the vernacular has
//! changed underneath it and the check must be redone.
//!
//! Invariant: a translation that holds any text must have a type. The only
//! exemption is an empty translation (nothing typed yet), which may have its
//! type cleared; anything else is rejected at the point of assignment.

use crate::{LangModelError, MultiString, Result, WsId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranslationType {
    /// A back translation of vernacular text into an analysis language
    BackTranslation,
    /// A free translation
    FreeTranslation,
}

/// Per-writing-system checking status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranslationStatus {
    /// Not yet finished (or invalidated by an edit)
    Unfinished,
    /// Finished by the translator
    Finished,
    /// Checked by a consultant
    Checked,
}

impl Default for TranslationStatus {
    fn default() -> Self {
        TranslationStatus::Unfinished
    }
}

/// A typed translation of a paragraph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translation {
    id: Uuid,
    trans_type: Option<TranslationType>,
    text: MultiString,
    status: std::collections::HashMap<WsId, TranslationStatus>,
}

impl Translation {
    /// Create an empty translation of the given type
    pub fn new(trans_type: TranslationType) -> Self {
        Self {
            id: Uuid::new_v4(),
            trans_type: Some(trans_type),
            text: MultiString::new(),
            status: std::collections::HashMap::new(),
        }
    }

    /// Get the translation ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Get the translation type
    pub fn trans_type(&self) -> Option<TranslationType> {
        self.trans_type
    }

    /// Set or clear the translation type. Clearing is rejected once any
    /// text alternative exists.
    pub fn set_type(&mut self, trans_type: Option<TranslationType>) -> Result<()> {
        if trans_type.is_none() && !self.text.is_empty() {
            return Err(LangModelError::TranslationTypeRequired);
        }
        self.trans_type = trans_type;
        Ok(())
    }

    /// Get the text alternatives
    pub fn text(&self) -> &MultiString {
        &self.text
    }

    /// Set the text for one writing system, resetting that writing system's
    /// status to Unfinished
    pub fn set_text(&mut self, ws: impl Into<WsId>, text: impl Into<String>) {
        let ws = ws.into();
        self.text.set(ws.clone(), text);
        self.status.insert(ws, TranslationStatus::Unfinished);
    }

    /// Get the checking status for a writing system
    pub fn status(&self, ws: &WsId) -> TranslationStatus {
        self.status.get(ws).copied().unwrap_or_default()
    }

    /// Record a checking status for a writing system
    pub fn set_status(&mut self, ws: impl Into<WsId>, status: TranslationStatus) {
        self.status.insert(ws.into(), status);
    }
}

// =============================================================================
// Tests
// =============================================================================
