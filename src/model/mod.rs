//! Document model types for DOCX content representation.
//!
//! This module defines the intermediate representation that bridges
//! package parsing and content rendering. The model keeps paragraph
//! text only; run-level formatting from the source is discarded.

mod document;
mod paragraph;

pub use document::{Document, Metadata};
pub use paragraph::{Paragraph, Run};
