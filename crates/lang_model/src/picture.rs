//! Embedded picture metadata
//!
//! Pictures embed in paragraph text the same way footnotes do (an object
//! reference run); this type holds the metadata side: file location,
//! multilingual caption and description, layout, and scale.

use crate::MultiString;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a picture is placed relative to the column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PictureLayout {
    /// Centered within the column
    CenterInColumn,
    /// Centered across the page
    CenterOnPage,
    /// Aligned to the right column edge, text wrapping left
    RightAlignInColumn,
    /// Aligned to the left column edge, text wrapping right
    LeftAlignInColumn,
    /// Scaled to fill the column width
    FillColumnWidth,
}

impl Default for PictureLayout {
    fn default() -> Self {
        PictureLayout::CenterInColumn
    }
}

/// Metadata for a picture embedded in text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Picture {
    id: Uuid,
    /// Path of the picture file inside the project's media folder
    pub file_path: String,
    /// Multilingual caption shown under the picture
    pub caption: MultiString,
    /// Multilingual description (not shown; for cataloguing)
    pub description: MultiString,
    /// Layout placement
    pub layout: PictureLayout,
    /// Scale percentage (1-100), applied to the natural size
    scale: u32,
    /// When the picture was added
    pub date_created: DateTime<Utc>,
}

impl Picture {
    /// Create a picture for the given file with default layout at full scale
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            file_path: file_path.into(),
            caption: MultiString::new(),
            description: MultiString::new(),
            layout: PictureLayout::default(),
            scale: 100,
            date_created: Utc::now(),
        }
    }

    /// Set the caption for one writing system, returning self for chained
    /// construction
    pub fn with_caption(mut self, ws: &str, text: impl Into<String>) -> Self {
        self.caption.set(ws, text);
        self
    }

    /// Get the picture ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Get the scale percentage
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Set the scale percentage, clamped to 1-100
    pub fn set_scale(&mut self, scale: u32) {
        self.scale = scale.clamp(1, 100);
    }
}
