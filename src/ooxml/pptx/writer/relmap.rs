//! Relationship id assignment for one slide.
//!
//! Runs before the slide is serialized. Every image, chart, background image
//! and hyperlink that needs a package relationship gets the next id from a
//! shared counter; the id is stamped back onto the model so the shape
//! serializer can reference it, and the entry is reported to a
//! [`RelationshipSink`].
//!
//! Allocation order within a slide:
//!
//! 1. images and charts, in shape order, descending into groups up to the
//!    configured [`RelationshipDepth`]
//! 2. the background image
//! 3. hyperlinks on shapes and on text runs, at any group depth

use crate::ooxml::error::Result;
use crate::ooxml::opc::{RelId, Relationship, RelationshipKind, RelationshipSink};
use crate::ooxml::pptx::model::{Background, Hyperlink, Shape, Slide};
use crate::ooxml::pptx::writer::options::RelationshipDepth;
use tracing::debug;

/// Sequential relationship id source, seeded by the caller so a slide can
/// continue an id sequence already in use by the package.
#[derive(Debug, Clone)]
pub struct RelIdCounter {
    next: u32,
}

impl RelIdCounter {
    pub fn new(first: u32) -> Self {
        Self { next: first }
    }

    pub fn next_id(&mut self) -> RelId {
        let id = RelId::new(self.next);
        self.next += 1;
        id
    }

    /// The id the next allocation would return.
    #[inline]
    pub fn peek(&self) -> u32 {
        self.next
    }
}

/// Walks a slide and allocates its relationships.
pub struct RelationshipAssigner<'a, S: RelationshipSink> {
    sink: &'a mut S,
    counter: RelIdCounter,
    depth: RelationshipDepth,
}

impl<'a, S: RelationshipSink> RelationshipAssigner<'a, S> {
    /// # Arguments
    /// * `sink` - Receives every allocated relationship
    /// * `first_rel_id` - First id to hand out
    /// * `depth` - Group nesting limit for the image and chart walk
    pub fn new(sink: &'a mut S, first_rel_id: u32, depth: RelationshipDepth) -> Self {
        Self {
            sink,
            counter: RelIdCounter::new(first_rel_id),
            depth,
        }
    }

    /// Assign every relationship of `slide` in the documented order.
    pub fn assign_slide(&mut self, slide: &mut Slide) -> Result<()> {
        self.assign_drawings(&mut slide.shapes)?;
        if let Some(background) = slide.background.as_mut() {
            self.assign_background(background)?;
        }
        self.assign_hyperlinks(&mut slide.shapes)
    }

    /// Images and charts.
    pub fn assign_drawings(&mut self, shapes: &mut [Shape]) -> Result<()> {
        self.drawings_at(shapes, 0)
    }

    fn drawings_at(&mut self, shapes: &mut [Shape], depth: u32) -> Result<()> {
        for shape in shapes.iter_mut() {
            match shape {
                Shape::Image(image) => {
                    let target = image.source.target()?;
                    let id = self.allocate(RelationshipKind::Image, target, false)?;
                    image.relation_id = Some(id);
                },
                Shape::Chart(chart) => {
                    let target = chart.target();
                    let id = self.allocate(RelationshipKind::Chart, target, false)?;
                    chart.relation_id = Some(id);
                },
                Shape::Group(group) => {
                    if self.depth.allows(depth + 1) {
                        self.drawings_at(&mut group.shapes, depth + 1)?;
                    }
                },
                Shape::TextBox(_) | Shape::Table(_) | Shape::Line(_) | Shape::Other(_) => {},
            }
        }
        Ok(())
    }

    pub fn assign_background(&mut self, background: &mut Background) -> Result<()> {
        match background {
            Background::Image {
                source,
                relation_id,
            } => {
                let target = source.target()?;
                *relation_id = Some(self.allocate(RelationshipKind::Image, target, false)?);
            },
            Background::Color(_) | Background::SchemeColor(_) => {},
        }
        Ok(())
    }

    /// Shape hyperlinks and run hyperlinks in text boxes and table cells.
    ///
    /// Descends through every group level, as the shape serializer does.
    pub fn assign_hyperlinks(&mut self, shapes: &mut [Shape]) -> Result<()> {
        for shape in shapes.iter_mut() {
            if let Shape::Other(_) = shape {
                continue;
            }
            if let Some(link) = shape.props_mut().hyperlink.as_mut() {
                self.assign_hyperlink(link)?;
            }
            match shape {
                Shape::TextBox(text_box) => {
                    for paragraph in text_box.paragraphs.iter_mut() {
                        for link in paragraph.hyperlinks_mut() {
                            self.assign_hyperlink(link)?;
                        }
                    }
                },
                Shape::Table(table) => {
                    for link in table.hyperlinks_mut() {
                        self.assign_hyperlink(link)?;
                    }
                },
                Shape::Group(group) => self.assign_hyperlinks(&mut group.shapes)?,
                Shape::Line(_) | Shape::Chart(_) | Shape::Image(_) | Shape::Other(_) => {},
            }
        }
        Ok(())
    }

    fn assign_hyperlink(&mut self, link: &mut Hyperlink) -> Result<()> {
        link.relation_id = if !link.is_internal() {
            let url = link.url.clone();
            Some(self.allocate(RelationshipKind::Hyperlink, url, true)?)
        } else if let Some(slide_number) = link.slide_number {
            let target = format!("slide{slide_number}.xml");
            Some(self.allocate(RelationshipKind::Slide, target, false)?)
        } else {
            None
        };
        Ok(())
    }

    fn allocate(&mut self, kind: RelationshipKind, target: String, external: bool) -> Result<RelId> {
        let id = self.counter.next_id();
        debug!(r_id = %id, kind = kind.as_str(), target = %target, "allocated relationship");
        let rel = if external {
            Relationship::external(id, kind, target)
        } else {
            Relationship::internal(id, kind, target)
        };
        self.sink.add_relationship(rel)?;
        Ok(id)
    }

    /// First id not handed out by this assigner.
    #[inline]
    pub fn next_rel_id(&self) -> u32 {
        self.counter.peek()
    }
}

/// Assign all relationships of `slide` and return the next free id.
pub fn assign_relationships<S: RelationshipSink>(
    slide: &mut Slide,
    sink: &mut S,
    first_rel_id: u32,
    depth: RelationshipDepth,
) -> Result<u32> {
    let mut assigner = RelationshipAssigner::new(sink, first_rel_id, depth);
    assigner.assign_slide(slide)?;
    Ok(assigner.next_rel_id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::Relationships;
    use crate::ooxml::pptx::model::{
        ChartRef, Group, ImageFormat, ImageRef, ImageSource, Paragraph, ShapeProps, TextBox,
        TextElement, TextRun,
    };

    fn image(index: u32) -> Shape {
        ImageRef::new(
            ShapeProps::default(),
            ImageSource::Generated {
                name: "pic".to_string(),
                format: ImageFormat::Png,
                index,
            },
        )
        .into()
    }

    fn image_id(shape: &Shape) -> Option<RelId> {
        match shape {
            Shape::Image(image) => image.relation_id,
            _ => None,
        }
    }

    #[test]
    fn test_sequential_ids_from_seed() {
        let mut slide = Slide::new()
            .with_shape(image(1))
            .with_shape(ChartRef::new(ShapeProps::default(), 3))
            .with_shape(image(2));
        let mut rels = Relationships::new();
        let next = assign_relationships(&mut slide, &mut rels, 5, RelationshipDepth::default()).unwrap();

        assert_eq!(next, 8);
        assert_eq!(image_id(&slide.shapes[0]), Some(RelId::new(5)));
        assert_eq!(image_id(&slide.shapes[2]), Some(RelId::new(7)));
        let chart = rels.get(RelId::new(6)).unwrap();
        assert_eq!(chart.kind(), RelationshipKind::Chart);
        assert_eq!(chart.target_ref(), "../charts/chart3.xml");
        assert_eq!(rels.get(RelId::new(5)).unwrap().target_ref(), "../media/pic1.png");
    }

    #[test]
    fn test_default_depth_stops_below_first_group_level() {
        let inner = Group::new(ShapeProps::default()).with_shape(image(3));
        let outer = Group::new(ShapeProps::default())
            .with_shape(image(2))
            .with_shape(inner);
        let mut slide = Slide::new().with_shape(image(1)).with_shape(outer);
        let mut rels = Relationships::new();
        let next = assign_relationships(&mut slide, &mut rels, 1, RelationshipDepth::Limited(1)).unwrap();

        assert_eq!(next, 3);
        let Shape::Group(outer) = &slide.shapes[1] else {
            panic!("expected group");
        };
        assert_eq!(image_id(&outer.shapes[0]), Some(RelId::new(2)));
        let Shape::Group(inner) = &outer.shapes[1] else {
            panic!("expected group");
        };
        assert_eq!(image_id(&inner.shapes[0]), None);
    }

    #[test]
    fn test_unlimited_depth_reaches_nested_groups() {
        let inner = Group::new(ShapeProps::default()).with_shape(image(3));
        let outer = Group::new(ShapeProps::default()).with_shape(inner);
        let mut slide = Slide::new().with_shape(outer);
        let mut rels = Relationships::new();
        let next = assign_relationships(&mut slide, &mut rels, 1, RelationshipDepth::Unlimited).unwrap();
        assert_eq!(next, 2);
        assert_eq!(rels.len(), 1);
    }

    #[test]
    fn test_background_after_drawings_then_hyperlinks() {
        let text = TextBox::new(ShapeProps::default().with_hyperlink(Hyperlink::new("https://a.example")))
            .with_paragraph(Paragraph::new().with_run(
                TextRun::new("next").with_hyperlink(Hyperlink::to_slide(4)),
            ))
            .with_paragraph(Paragraph::new().with_run(
                TextRun::new("end").with_hyperlink(Hyperlink::new("ppaction://hlinkshowjump?jump=endshow")),
            ));
        let mut slide = Slide::new()
            .with_shape(text)
            .with_shape(image(1))
            .with_background(Background::image(ImageSource::Generated {
                name: "bg".to_string(),
                format: ImageFormat::Jpeg,
                index: 1,
            }));
        let mut rels = Relationships::new();
        let next = assign_relationships(&mut slide, &mut rels, 2, RelationshipDepth::default()).unwrap();

        assert_eq!(next, 6);
        assert_eq!(rels.get(RelId::new(2)).unwrap().target_ref(), "../media/pic1.png");
        assert_eq!(rels.get(RelId::new(3)).unwrap().target_ref(), "../media/bg1.jpg");
        let external = rels.get(RelId::new(4)).unwrap();
        assert!(external.is_external());
        assert_eq!(external.target_ref(), "https://a.example");
        let jump = rels.get(RelId::new(5)).unwrap();
        assert_eq!(jump.kind(), RelationshipKind::Slide);
        assert_eq!(jump.target_ref(), "slide4.xml");

        let Shape::TextBox(text) = &slide.shapes[0] else {
            panic!("expected text box");
        };
        assert_eq!(run_link(&text.paragraphs[0]), Some(RelId::new(5)));
        assert_eq!(run_link(&text.paragraphs[1]), None);
    }

    #[test]
    fn test_hyperlinks_ignore_depth_limit() {
        let text = TextBox::new(ShapeProps::default()).with_paragraph(
            Paragraph::new().with_run(TextRun::new("site").with_hyperlink(Hyperlink::new("https://example.com"))),
        );
        let inner = Group::new(ShapeProps::default()).with_shape(text).with_shape(image(1));
        let outer = Group::new(ShapeProps::default()).with_shape(inner);
        let mut slide = Slide::new().with_shape(outer);
        let mut rels = Relationships::new();
        let next = assign_relationships(&mut slide, &mut rels, 1, RelationshipDepth::Limited(1)).unwrap();

        // The nested image is out of reach; the nested link is not.
        assert_eq!(next, 2);
        assert_eq!(rels.get(RelId::new(1)).unwrap().target_ref(), "https://example.com");
        let Shape::Group(outer) = &slide.shapes[0] else {
            panic!("expected group");
        };
        let Shape::Group(inner) = &outer.shapes[0] else {
            panic!("expected group");
        };
        let Shape::TextBox(text) = &inner.shapes[0] else {
            panic!("expected text box");
        };
        assert_eq!(run_link(&text.paragraphs[0]), Some(RelId::new(1)));
        assert_eq!(image_id(&inner.shapes[1]), None);
    }

    fn run_link(paragraph: &Paragraph) -> Option<RelId> {
        match paragraph.elements.first() {
            Some(TextElement::Run(run)) => run.hyperlink.as_ref().and_then(|link| link.relation_id),
            _ => None,
        }
    }
}
