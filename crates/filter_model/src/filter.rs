//! Filters - named collections of criteria rows
//!
//! A filter is a grid: each row is a conjunction of cells, and the filter
//! matches a record when any row does. Values offered to a cell are either
//! a scalar integer or a collection of possibility items, mirroring the two
//! evaluation paths of [`FilterCell`].

use crate::{FilterCell, PossibilityId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A value a record presents to one cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    /// A scalar integer field
    Integer(i64),
    /// A collection-of-items field
    Items(Vec<PossibilityId>),
}

impl FilterCell {
    /// Evaluate the cell against either value shape
    pub fn matches(&self, value: &CellValue) -> bool {
        match value {
            CellValue::Integer(n) => self.matches_value(*n),
            CellValue::Items(items) => self.matches_set(items),
        }
    }
}

/// One row of a filter: all cells must match
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterRow {
    /// Cells, one per filtered column
    pub cells: Vec<FilterCell>,
}

impl FilterRow {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cell, returning self for chained construction
    pub fn cell(mut self, cell: FilterCell) -> Self {
        self.cells.push(cell);
        self
    }

    /// Check the row against one value per cell. Rows match when every cell
    /// matches its value; a row with more cells than values does not match.
    pub fn matches(&self, values: &[CellValue]) -> bool {
        self.cells.len() <= values.len()
            && self
                .cells
                .iter()
                .zip(values)
                .all(|(cell, value)| cell.matches(value))
    }
}

/// A named, persisted filter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Filter {
    id: Uuid,
    /// Display name
    pub name: String,
    /// Identifier of the application that owns this filter
    pub app: String,
    /// Class of records the filter applies to
    pub class_id: u32,
    /// Criteria rows; the filter matches when any row matches
    pub rows: Vec<FilterRow>,
}

impl Filter {
    /// Create an empty filter
    pub fn new(name: impl Into<String>, app: impl Into<String>, class_id: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            app: app.into(),
            class_id,
            rows: Vec::new(),
        }
    }

    /// Add a row, returning self for chained construction
    pub fn row(mut self, row: FilterRow) -> Self {
        self.rows.push(row);
        self
    }

    /// Get the filter ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Check the filter against one value per cell column
    pub fn matches(&self, values: &[CellValue]) -> bool {
        self.rows.iter().any(|row| row.matches(values))
    }
}

// =============================================================================
// Tests
// =============================================================================
