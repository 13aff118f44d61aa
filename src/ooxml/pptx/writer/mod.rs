//! Slide and notes part writers.
//!
//! [`SlideWriter`] runs the two passes over a slide: relationship assignment
//! stamps ids onto images, charts, the background and hyperlinks, then the
//! shape serializer emits the `p:sld` document that references them.
//!
//! Each call owns its counters and output buffer, so slides can be written
//! on separate threads as long as each gets its own starting relationship id.
//!
//! # Examples
//!
//! ```
//! use slidewright::ooxml::pptx::model::{Paragraph, ShapeProps, Slide, TextBox};
//! use slidewright::ooxml::pptx::writer::{SlideWriter, WriterOptions};
//!
//! # fn main() -> slidewright::Result<()> {
//! let mut slide = Slide::new().with_shape(
//!     TextBox::new(ShapeProps::at(10.0, 20.0, 100.0, 50.0))
//!         .with_paragraph(Paragraph::from_text("Hello")),
//! );
//!
//! let writer = SlideWriter::new(WriterOptions::default());
//! let part = writer.write_slide(&mut slide, 1)?;
//! assert!(part.xml_str().contains("Hello"));
//! assert_eq!(part.next_rel_id(), 1);
//! # Ok(())
//! # }
//! ```

pub mod ids;
pub mod notes;
pub mod options;
pub mod paragraph;
pub mod relmap;
pub mod shape;
pub mod slide;
pub mod style;
pub mod table;

pub use ids::ShapeIdCounter;
pub use options::{RelationshipDepth, WriterOptions};
pub use relmap::{RelIdCounter, RelationshipAssigner, assign_relationships};
pub use shape::ShapeSerializer;

use crate::ooxml::error::Result;
use crate::ooxml::opc::Relationships;
use crate::ooxml::pptx::model::{Note, Slide};
use tracing::debug;

/// A serialized slide and the relationships it references.
#[derive(Debug, Clone)]
pub struct SlidePart {
    xml: Vec<u8>,
    relationships: Relationships,
    next_rel_id: u32,
}

impl SlidePart {
    /// The `p:sld` document.
    #[inline]
    pub fn xml(&self) -> &[u8] {
        &self.xml
    }

    /// The document as text. The writer only produces UTF-8.
    pub fn xml_str(&self) -> &str {
        std::str::from_utf8(&self.xml).unwrap_or_default()
    }

    #[inline]
    pub fn relationships(&self) -> &Relationships {
        &self.relationships
    }

    /// First relationship id left unused by this slide.
    #[inline]
    pub fn next_rel_id(&self) -> u32 {
        self.next_rel_id
    }

    /// Render the part's `.rels` manifest.
    pub fn relationships_xml(&self) -> Result<Vec<u8>> {
        self.relationships.to_xml()
    }

    pub fn into_xml(self) -> Vec<u8> {
        self.xml
    }
}

/// Entry point for writing slide and notes parts.
#[derive(Debug, Clone, Default)]
pub struct SlideWriter {
    options: WriterOptions,
}

impl SlideWriter {
    pub fn new(options: WriterOptions) -> Self {
        Self { options }
    }

    #[inline]
    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    /// Assign the slide's relationships and serialize it.
    ///
    /// Relationship ids start at `first_rel_id`. Ids are written back onto the
    /// slide's images, charts, background and hyperlinks.
    ///
    /// # Errors
    ///
    /// Malformed tables, media that cannot be named, and images or charts
    /// left without a relationship (nested deeper than the configured
    /// [`RelationshipDepth`]) abort the slide. No partial output is returned.
    pub fn write_slide(&self, slide: &mut Slide, first_rel_id: u32) -> Result<SlidePart> {
        let mut relationships = Relationships::new();
        let next_rel_id = assign_relationships(
            slide,
            &mut relationships,
            first_rel_id,
            self.options.relationship_depth,
        )?;
        debug!(
            first_rel_id,
            allocated = relationships.len(),
            "assigned slide relationships"
        );

        let xml = slide::write_slide_document(slide, &self.options)?;
        Ok(SlidePart {
            xml,
            relationships,
            next_rel_id,
        })
    }

    /// Serialize a notes page.
    pub fn write_notes(&self, note: &Note) -> Result<Vec<u8>> {
        notes::write_notes_document(note, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::{RelId, RelationshipKind};
    use crate::ooxml::pptx::model::{
        Background, ChartRef, Hyperlink, ImageFormat, ImageRef, ImageSource, Paragraph, Shape,
        ShapeProps, TextBox, TextRun,
    };

    fn generated(name: &str, index: u32) -> ImageSource {
        ImageSource::Generated {
            name: name.to_string(),
            format: ImageFormat::Png,
            index,
        }
    }

    #[test]
    fn test_write_slide_continues_relationship_sequence() {
        let mut slide = Slide::new()
            .with_shape(ImageRef::new(ShapeProps::at(0.0, 0.0, 10.0, 10.0), generated("photo", 1)))
            .with_shape(ChartRef::new(ShapeProps::at(0.0, 0.0, 10.0, 10.0), 3))
            .with_background(Background::image(generated("bg", 2)));

        let part = SlideWriter::default().write_slide(&mut slide, 4).unwrap();
        assert_eq!(part.next_rel_id(), 7);
        assert_eq!(part.relationships().len(), 3);
        assert_eq!(
            part.relationships().get(RelId::new(5)).map(|rel| rel.kind()),
            Some(RelationshipKind::Chart)
        );
        assert!(part.xml_str().contains(r#"<a:blip r:embed="rId4"/>"#));
        assert!(part.xml_str().contains(r#"r:id="rId5""#));
        assert!(part.xml_str().contains(r#"<a:blip r:embed="rId6"/>"#));

        // Ids are written back onto the model.
        match &slide.shapes[0] {
            Shape::Image(image) => assert_eq!(image.relation_id, Some(RelId::new(4))),
            other => panic!("unexpected shape {}", other.kind_name()),
        }
    }

    #[test]
    fn test_relationships_xml_lists_external_links() {
        let mut slide = Slide::new().with_shape(
            TextBox::new(
                ShapeProps::at(0.0, 0.0, 10.0, 10.0)
                    .with_hyperlink(Hyperlink::new("https://example.com/a?b=1&c=2")),
            )
            .with_paragraph(Paragraph::from_text("link")),
        );

        let part = SlideWriter::default().write_slide(&mut slide, 1).unwrap();
        let rels = String::from_utf8(part.relationships_xml().unwrap()).unwrap();
        assert!(rels.contains(r#"Id="rId1""#));
        assert!(rels.contains(r#"Target="https://example.com/a?b=1&amp;c=2""#));
        assert!(rels.contains(r#"TargetMode="External""#));
        assert!(part.xml_str().contains(r#"<a:hlinkClick r:id="rId1" tooltip=""/>"#));
    }

    #[test]
    fn test_empty_slide_allocates_nothing() {
        let part = SlideWriter::default().write_slide(&mut Slide::new(), 9).unwrap();
        assert_eq!(part.next_rel_id(), 9);
        assert!(part.relationships().is_empty());
    }

    #[test]
    fn test_write_notes_uses_options() {
        let writer = SlideWriter::new(WriterOptions::default().with_default_language("de-DE"));
        let note = Note::new().with_shape(
            TextBox::new(ShapeProps::default())
                .with_paragraph(Paragraph::new().with_run(TextRun::new("remember"))),
        );
        let out = String::from_utf8(writer.write_notes(&note).unwrap()).unwrap();
        assert!(out.contains(r#"lang="de-DE""#));
        assert!(out.contains("remember"));
    }
}
