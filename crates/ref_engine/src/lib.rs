//! Reference Engine - computations over the scripture model
//!
//! This crate implements the two position computations the editor needs:
//!
//! - `resolver` - determines the chapter:verse range a footnote refers to by
//!   scanning backward from its anchor, with a whole-book batch recompute
//! - `note_indexer` - finds the insertion index that keeps a book's note
//!   sequence sorted by document position

pub mod note_indexer;
pub mod resolver;

pub use note_indexer::*;
pub use resolver::*;
