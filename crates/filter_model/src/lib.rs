//! Filter Model - single-cell filter predicates over list values
//!
//! This crate implements the simple filters used to narrow record lists:
//! hierarchical possibility items, per-cell match criteria (scalar
//! comparisons and set membership), the persisted textual criteria format,
//! and filters assembled from rows of cells.

mod error;
mod possibility;
mod criteria;
mod text_format;
mod filter;

pub use error::*;
pub use possibility::*;
pub use criteria::*;
pub use filter::*;
