//! Writing systems and the language project's writing-system lists
//!
//! A project keeps a catalog of every writing system it knows about plus two
//! ordered "current" lists: vernacular (the languages being documented) and
//! analysis (the languages used to describe them). The default writing
//! system of each kind is the first entry of its list. Each list must keep
//! at least one member once populated.

use crate::{LangModelError, Result};
use serde::{Deserialize, Serialize};

// =============================================================================
// WsId
// =============================================================================

/// Identifier for a writing system: an IETF-style language tag such as
/// "en" or "seh-fonipa"
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WsId(String);

impl WsId {
    /// Create a writing-system ID from a language tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Get the language tag
    pub fn tag(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WsId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for WsId {
    fn from(tag: &str) -> Self {
        Self(tag.to_string())
    }
}

// =============================================================================
// WritingSystem
// =============================================================================

/// A writing system: a language/script variant strings can be stored in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritingSystem {
    /// Identifier tag
    pub id: WsId,
    /// Display name
    pub name: String,
    /// Whether the script runs right to left
    pub right_to_left: bool,
}

impl WritingSystem {
    /// Create a left-to-right writing system
    pub fn new(id: impl Into<WsId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            right_to_left: false,
        }
    }
}

// =============================================================================
// WritingSystems
// =============================================================================

/// The project's writing-system catalog and current lists
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WritingSystems {
    catalog: Vec<WritingSystem>,
    vernacular: Vec<WsId>,
    analysis: Vec<WsId>,
}

impl WritingSystems {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a writing system to the catalog (no-op if already present)
    pub fn add(&mut self, ws: WritingSystem) {
        if !self.catalog.iter().any(|w| w.id == ws.id) {
            self.catalog.push(ws);
        }
    }

    /// Look up a catalog entry
    pub fn get(&self, id: &WsId) -> Option<&WritingSystem> {
        self.catalog.iter().find(|w| &w.id == id)
    }

    /// The current vernacular list, in priority order
    pub fn vernacular(&self) -> &[WsId] {
        &self.vernacular
    }

    /// The current analysis list, in priority order
    pub fn analysis(&self) -> &[WsId] {
        &self.analysis
    }

    /// The default vernacular writing system (first of the list)
    pub fn default_vernacular(&self) -> Option<&WsId> {
        self.vernacular.first()
    }

    /// The default analysis writing system (first of the list)
    pub fn default_analysis(&self) -> Option<&WsId> {
        self.analysis.first()
    }

    /// Append a catalog writing system to the current vernacular list
    pub fn activate_vernacular(&mut self, id: WsId) -> Result<()> {
        Self::activate(&self.catalog, &mut self.vernacular, id)
    }

    /// Append a catalog writing system to the current analysis list
    pub fn activate_analysis(&mut self, id: WsId) -> Result<()> {
        Self::activate(&self.catalog, &mut self.analysis, id)
    }

    fn activate(catalog: &[WritingSystem], list: &mut Vec<WsId>, id: WsId) -> Result<()> {
        if !catalog.iter().any(|w| w.id == id) {
            return Err(LangModelError::UnknownWritingSystem(id.to_string()));
        }
        if list.contains(&id) {
            return Err(LangModelError::WritingSystemAlreadyActive(id.to_string()));
        }
        list.push(id);
        Ok(())
    }

    /// Remove a writing system from the current vernacular list. The last
    /// member cannot be removed.
    pub fn deactivate_vernacular(&mut self, id: &WsId) -> Result<()> {
        Self::deactivate(&mut self.vernacular, id, "vernacular")
    }

    /// Remove a writing system from the current analysis list. The last
    /// member cannot be removed.
    pub fn deactivate_analysis(&mut self, id: &WsId) -> Result<()> {
        Self::deactivate(&mut self.analysis, id, "analysis")
    }

    fn deactivate(list: &mut Vec<WsId>, id: &WsId, kind: &'static str) -> Result<()> {
        let index = list
            .iter()
            .position(|w| w == id)
            .ok_or_else(|| LangModelError::UnknownWritingSystem(id.to_string()))?;
        if list.len() == 1 {
            return Err(LangModelError::LastWritingSystem { list: kind });
        }
        list.remove(index);
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
