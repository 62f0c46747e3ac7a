//! Language Model - writing systems and multilingual data objects
//!
//! This crate provides the language-data side of the domain model:
//!
//! - Writing-system identifiers, the project catalog, and the current
//!   vernacular/analysis lists
//! - Multi-writing-system string alternatives with fallback and merging
//! - Typed translations with per-writing-system status bookkeeping
//! - Embedded picture metadata
//! - Homograph-number display configuration

mod error;
mod writing_system;
mod multi_string;
mod translation;
mod picture;
mod homograph;

pub use error::*;
pub use writing_system::*;
pub use multi_string::*;
pub use translation::*;
pub use picture::*;
pub use homograph::*;
