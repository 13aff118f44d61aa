//! Shape id allocation and group transforms.
//!
//! One [`ShapeIdCounter`] lives for the duration of a single part. It is passed
//! by `&mut` through the recursive shape walk, so a group takes its own id
//! before any of its children and ids stay unique across nesting levels.

use crate::common::unit::px_to_emu;
use crate::common::xml::XmlWriter;
use crate::ooxml::error::Result;
use crate::ooxml::pptx::model::Shape;
use tracing::trace;

/// Sequential shape id source for one part. The first id handed out is 1.
#[derive(Debug, Default)]
pub struct ShapeIdCounter {
    last: u32,
}

impl ShapeIdCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next id.
    pub fn next_id(&mut self) -> u32 {
        self.last += 1;
        trace!(shape_id = self.last, "allocated shape id");
        self.last
    }

    /// Number of ids handed out so far.
    #[inline]
    pub fn issued(&self) -> u32 {
        self.last
    }
}

/// Name written for a group container.
pub fn group_name(id: u32) -> String {
    format!("Group {id}")
}

/// Number of shape ids a walk over `shapes` consumes.
///
/// Groups count themselves plus their children; unsupported shapes take no id.
pub fn shape_id_demand(shapes: &[Shape]) -> u32 {
    shapes
        .iter()
        .map(|shape| match shape {
            Shape::Group(group) => 1 + shape_id_demand(&group.shapes),
            Shape::Other(_) => 0,
            Shape::TextBox(_)
            | Shape::Table(_)
            | Shape::Line(_)
            | Shape::Chart(_)
            | Shape::Image(_) => 1,
        })
        .sum()
}

/// Group placement in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupTransform {
    pub offset_x: f64,
    pub offset_y: f64,
    pub extent_x: f64,
    pub extent_y: f64,
}

impl GroupTransform {
    pub fn new(offset_x: f64, offset_y: f64, extent_x: f64, extent_y: f64) -> Self {
        Self {
            offset_x,
            offset_y,
            extent_x,
            extent_y,
        }
    }

    /// Write `a:xfrm` with the outer and child transforms set to the same box.
    ///
    /// Children keep their own slide coordinates because the child space maps
    /// onto the group one to one.
    pub fn write(&self, xml: &mut XmlWriter) -> Result<()> {
        let x = px_to_emu(self.offset_x);
        let y = px_to_emu(self.offset_y);
        let cx = px_to_emu(self.extent_x);
        let cy = px_to_emu(self.extent_y);

        xml.start_element("a:xfrm")?;
        for (off, ext) in [("a:off", "a:ext"), ("a:chOff", "a:chExt")] {
            xml.start_element(off)?;
            xml.write_int_attribute("x", x)?;
            xml.write_int_attribute("y", y)?;
            xml.end_element()?;
            xml.start_element(ext)?;
            xml.write_int_attribute("cx", cx)?;
            xml.write_int_attribute("cy", cy)?;
            xml.end_element()?;
        }
        xml.end_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::model::{Group, Line, OtherShape, ShapeProps, TextBox};

    #[test]
    fn test_counter_starts_at_one() {
        let mut ids = ShapeIdCounter::new();
        assert_eq!(ids.issued(), 0);
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
        assert_eq!(ids.issued(), 2);
    }

    #[test]
    fn test_id_demand_counts_groups() {
        let inner = Group::new(ShapeProps::default()).with_shape(Line::new(ShapeProps::default()));
        let outer = Group::new(ShapeProps::default())
            .with_shape(TextBox::new(ShapeProps::default()))
            .with_shape(inner);
        let shapes = vec![
            Shape::from(outer),
            Shape::Other(OtherShape {
                props: ShapeProps::default(),
                kind: "media".to_string(),
            }),
        ];
        assert_eq!(shape_id_demand(&shapes), 4);
    }

    #[test]
    fn test_group_transform_writes_both_boxes() {
        let mut xml = XmlWriter::new();
        GroupTransform::new(10.0, 20.0, 100.0, 50.0)
            .write(&mut xml)
            .unwrap();
        let out = String::from_utf8(xml.into_bytes().unwrap()).unwrap();
        assert_eq!(
            out,
            concat!(
                r#"<a:xfrm><a:off x="95250" y="190500"/><a:ext cx="952500" cy="476250"/>"#,
                r#"<a:chOff x="95250" y="190500"/><a:chExt cx="952500" cy="476250"/></a:xfrm>"#
            )
        );
        assert_eq!(group_name(7), "Group 7");
    }
}
