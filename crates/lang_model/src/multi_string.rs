//! Multi-writing-system strings
//!
//! A `MultiString` stores one string alternative per writing system. Readers
//! usually want "the best available alternative": the first non-empty entry
//! along a caller-supplied fallback order. Merging copies alternatives a
//! target is missing and can optionally append differing ones.

use crate::WsId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A string with one alternative per writing system
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiString {
    alternatives: HashMap<WsId, String>,
}

impl MultiString {
    /// Create an empty multi-string
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a multi-string holding one alternative
    pub fn with(ws: impl Into<WsId>, text: impl Into<String>) -> Self {
        let mut ms = Self::new();
        ms.set(ws, text);
        ms
    }

    /// Get the alternative for a writing system
    pub fn get(&self, ws: &WsId) -> Option<&str> {
        self.alternatives.get(ws).map(|s| s.as_str())
    }

    /// Set the alternative for a writing system. Setting empty text removes
    /// the alternative.
    pub fn set(&mut self, ws: impl Into<WsId>, text: impl Into<String>) {
        let ws = ws.into();
        let text = text.into();
        if text.is_empty() {
            self.alternatives.remove(&ws);
        } else {
            self.alternatives.insert(ws, text);
        }
    }

    /// The first non-empty alternative along the given fallback order
    pub fn best(&self, fallback: &[WsId]) -> Option<&str> {
        fallback.iter().find_map(|ws| self.get(ws))
    }

    /// Number of stored alternatives
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    /// Check whether no alternative is stored
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// Writing systems with a stored alternative
    pub fn writing_systems(&self) -> impl Iterator<Item = &WsId> {
        self.alternatives.keys()
    }

    /// Merge another multi-string into this one. Alternatives this string
    /// is missing are copied. When `append` is set, alternatives that exist
    /// on both sides but differ are concatenated with a separating space;
    /// otherwise the existing alternative is kept.
    pub fn merge(&mut self, other: &MultiString, append: bool) {
        for (ws, text) in &other.alternatives {
            match self.alternatives.get_mut(ws) {
                None => {
                    self.alternatives.insert(ws.clone(), text.clone());
                }
                Some(existing) if append && existing != text => {
                    existing.push(' ');
                    existing.push_str(text);
                }
                Some(_) => {}
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
