//! Slidewright - PresentationML slide serialization
//!
//! This library turns an in-memory presentation model into the XML parts of a
//! `.pptx` package: one `p:sld` document per slide, its `.rels` manifest, and
//! `p:notes` documents for speaker notes.
//!
//! # Features
//!
//! - **Shape trees**: text boxes, tables, lines, charts, images and nested groups
//! - **Relationship assignment**: sequential `rId` allocation for media, charts,
//!   backgrounds and hyperlinks, written back onto the model
//! - **Table layout**: column and row spans with merge markers and shared borders
//! - **Rich text**: paragraph alignment, bullets, run formatting and hyperlinks
//!
//! Packaging (zip container, content types, presentation part) is left to the
//! caller. Slidewright produces the per-slide parts.
//!
//! # Example - Writing a slide
//!
//! ```
//! use slidewright::{
//!     Color, Fill, Paragraph, ShapeProps, Slide, SlideWriter, TextBox, WriterOptions,
//! };
//!
//! # fn main() -> slidewright::Result<()> {
//! let title = TextBox::new(
//!     ShapeProps::at(40.0, 30.0, 600.0, 80.0).with_fill(Fill::Solid(Color::rgb(0xEE, 0xEE, 0xEE))),
//! )
//! .with_paragraph(Paragraph::from_text("Quarterly review"));
//!
//! let mut slide = Slide::new().with_extent(960.0, 540.0).with_shape(title);
//! let part = SlideWriter::new(WriterOptions::default()).write_slide(&mut slide, 1)?;
//!
//! assert!(part.xml_str().contains(r#"<p:cNvPr id="2""#));
//! let rels = part.relationships_xml()?;
//! assert!(rels.starts_with(b"<?xml"));
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Relationship depth
//!
//! Images and charts nested below the first group level receive no
//! relationship unless the writer is configured otherwise. Hyperlinks are
//! assigned at any depth.
//!
//! ```
//! use slidewright::{
//!     Group, ImageFormat, ImageRef, ImageSource, RelationshipDepth, ShapeProps, Slide,
//!     SlideWriter, WriterOptions,
//! };
//!
//! # fn main() -> slidewright::Result<()> {
//! let image = ImageRef::new(
//!     ShapeProps::at(0.0, 0.0, 10.0, 10.0),
//!     ImageSource::Generated { name: "logo".into(), format: ImageFormat::Png, index: 1 },
//! );
//! let inner = Group::new(ShapeProps::default()).with_shape(image);
//! let outer = Group::new(ShapeProps::default()).with_shape(inner);
//! let mut slide = Slide::new().with_shape(outer);
//!
//! let strict = SlideWriter::new(WriterOptions::default());
//! assert!(strict.write_slide(&mut slide.clone(), 1).is_err());
//!
//! let deep = SlideWriter::new(
//!     WriterOptions::default().with_relationship_depth(RelationshipDepth::Unlimited),
//! );
//! assert_eq!(deep.write_slide(&mut slide, 1)?.next_rel_id(), 2);
//! # Ok(())
//! # }
//! ```

/// Shared XML, unit and identifier helpers
pub mod common;

/// OOXML packaging constants, relationships and the PresentationML writer
pub mod ooxml;

pub use ooxml::error::{Result, SlideError};
pub use ooxml::opc::{RelId, Relationship, RelationshipKind, Relationships};
pub use ooxml::pptx::model::*;
pub use ooxml::pptx::writer::{RelationshipDepth, SlidePart, SlideWriter, WriterOptions};
