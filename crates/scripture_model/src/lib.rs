//! Scripture Model - Core book/section/paragraph object model
//!
//! This crate provides the foundational domain model for the Scripture
//! editor: books composed of sections, sections composed of paragraphs of
//! styled text runs, footnotes anchored inside paragraphs, and annotations
//! (scripture notes) kept in document order per book.

mod object_id;
mod error;
pub mod reference;
mod run;
mod paragraph;
pub mod section;
pub mod book;
pub mod footnote;
pub mod annotation;

pub use object_id::*;
pub use error::*;
pub use reference::*;
pub use run::*;
pub use paragraph::*;
pub use section::*;
pub use book::*;
pub use footnote::*;
pub use annotation::*;
