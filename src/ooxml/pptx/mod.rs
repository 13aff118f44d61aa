//! PresentationML (.pptx) slide serialization.
//!
//! - [`model`]: the in-memory slides, shapes and text the writer reads
//! - [`writer`]: relationship assignment and the slide and notes part writers

pub mod model;
pub mod writer;

pub use writer::{RelationshipDepth, SlidePart, SlideWriter, WriterOptions};
