//! Homograph display configuration
//!
//! Controls how homograph numbers are rendered on headwords across the main
//! dictionary view, cross-references, and reversal indexes. The
//! configuration persists as a compact `key:value;...` settings string;
//! parsing is an explicit Result so a malformed saved string leaves the
//! previous configuration in place.

use crate::{LangModelError, Result, WsId};
use serde::{Deserialize, Serialize};

/// Homograph-number display settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomographConfiguration {
    /// Render the homograph number before the headword instead of after
    pub number_before: bool,
    /// Show homograph numbers on cross-references
    pub show_in_cross_refs: bool,
    /// Show homograph numbers in reversal indexes
    pub show_in_reversal: bool,
    /// Show sense numbers on references
    pub show_sense_number: bool,
    /// Writing system whose digits render the number, if overridden
    pub writing_system: Option<WsId>,
}

impl Default for HomographConfiguration {
    fn default() -> Self {
        Self {
            number_before: false,
            show_in_cross_refs: true,
            show_in_reversal: true,
            show_sense_number: true,
            writing_system: None,
        }
    }
}

const KEY_BEFORE: &str = "before";
const KEY_CROSS_REFS: &str = "crossRefs";
const KEY_REVERSAL: &str = "reversal";
const KEY_SENSE: &str = "senseNumber";
const KEY_WS: &str = "ws";

impl HomographConfiguration {
    /// Serialize to the persisted settings string, e.g.
    /// `before:F;crossRefs:T;reversal:T;senseNumber:T`
    pub fn to_settings_string(&self) -> String {
        let mut parts = vec![
            format!("{KEY_BEFORE}:{}", flag(self.number_before)),
            format!("{KEY_CROSS_REFS}:{}", flag(self.show_in_cross_refs)),
            format!("{KEY_REVERSAL}:{}", flag(self.show_in_reversal)),
            format!("{KEY_SENSE}:{}", flag(self.show_sense_number)),
        ];
        if let Some(ws) = &self.writing_system {
            parts.push(format!("{KEY_WS}:{ws}"));
        }
        parts.join(";")
    }

    /// Parse a persisted settings string. Keys may appear in any order;
    /// missing keys keep their defaults.
    pub fn from_settings_string(text: &str) -> Result<Self> {
        let mut config = Self::default();

        for part in text.split(';').filter(|p| !p.is_empty()) {
            let (key, value) = part
                .split_once(':')
                .ok_or_else(|| LangModelError::UnrecognizedSettingKey(part.to_string()))?;
            match key {
                KEY_BEFORE => config.number_before = parse_flag(key, value)?,
                KEY_CROSS_REFS => config.show_in_cross_refs = parse_flag(key, value)?,
                KEY_REVERSAL => config.show_in_reversal = parse_flag(key, value)?,
                KEY_SENSE => config.show_sense_number = parse_flag(key, value)?,
                KEY_WS => config.writing_system = Some(WsId::new(value)),
                other => return Err(LangModelError::UnrecognizedSettingKey(other.to_string())),
            }
        }

        Ok(config)
    }
}

fn flag(value: bool) -> char {
    if value {
        'T'
    } else {
        'F'
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value {
        "T" => Ok(true),
        "F" => Ok(false),
        _ => Err(LangModelError::InvalidSettingValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

// =============================================================================
// Tests
// =============================================================================
