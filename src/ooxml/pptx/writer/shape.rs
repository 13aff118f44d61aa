//! Shape tree serialization.
//!
//! [`ShapeSerializer`] walks a shape collection depth first, taking shape ids
//! from a shared [`ShapeIdCounter`] and writing one element per supported
//! shape. Images and charts must already carry the relationship id assigned
//! by the relationship pass.

use crate::common::id::FieldIdGenerator;
use crate::common::unit::{nonzero_angle, px_to_emu};
use crate::common::xml::XmlWriter;
use crate::ooxml::error::{Result, SlideError};
use crate::ooxml::opc::constants::{graphic_data, namespace};
use crate::ooxml::pptx::model::{
    AutoFit, ChartRef, Group, Hyperlink, ImageRef, Line, Overflow, PlaceholderType, Shape,
    ShapeProps, TextBox, TextWrap,
};
use crate::ooxml::pptx::writer::ids::{GroupTransform, ShapeIdCounter, group_name};
use crate::ooxml::pptx::writer::options::WriterOptions;
use crate::ooxml::pptx::writer::paragraph::{write_hyperlink, write_text_body_paragraphs};
use crate::ooxml::pptx::writer::style::{write_border, write_fill, write_shadow};
use crate::ooxml::pptx::writer::table::write_table;
use tracing::debug;

/// Box placement in pixels, plus the flip flags of a line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub offset_x: f64,
    pub offset_y: f64,
    pub width: f64,
    pub height: f64,
    pub flip_h: bool,
    pub flip_v: bool,
}

impl Geometry {
    /// The shape's declared box.
    pub fn of(props: &ShapeProps) -> Self {
        Self {
            offset_x: props.offset_x,
            offset_y: props.offset_y,
            width: props.width,
            height: props.height,
            flip_h: false,
            flip_v: false,
        }
    }

    /// Bounding box of a line whose width or height may be negative.
    ///
    /// A single negative dimension moves the offset back along that axis and
    /// flips it. With both negative the box moves to the implied top-left
    /// corner and nothing is flipped.
    pub fn line(props: &ShapeProps) -> Self {
        let mut geometry = Self::of(props);
        let flip_x = props.width < 0.0;
        let flip_y = props.height < 0.0;
        if flip_x {
            geometry.offset_x += props.width;
            geometry.width = -props.width;
        }
        if flip_y {
            geometry.offset_y += props.height;
            geometry.height = -props.height;
        }
        geometry.flip_h = flip_x && !flip_y;
        geometry.flip_v = flip_y && !flip_x;
        geometry
    }

    /// Write `tag` holding `a:off` and `a:ext`.
    pub fn write(&self, xml: &mut XmlWriter, tag: &str, rotation: Option<i64>) -> Result<()> {
        xml.start_element(tag)?;
        xml.write_int_attribute_opt("rot", rotation)?;
        xml.write_attribute_if(self.flip_h, "flipH", "1")?;
        xml.write_attribute_if(self.flip_v, "flipV", "1")?;
        xml.start_element("a:off")?;
        xml.write_int_attribute("x", px_to_emu(self.offset_x))?;
        xml.write_int_attribute("y", px_to_emu(self.offset_y))?;
        xml.end_element()?;
        xml.start_element("a:ext")?;
        xml.write_int_attribute("cx", px_to_emu(self.width))?;
        xml.write_int_attribute("cy", px_to_emu(self.height))?;
        xml.end_element()?;
        xml.end_element()
    }
}

/// Write the shape's declared box as `tag`, with its rotation when `rotate` is set.
pub(crate) fn write_transform(
    xml: &mut XmlWriter,
    tag: &str,
    props: &ShapeProps,
    rotate: bool,
) -> Result<()> {
    let rotation = if rotate {
        nonzero_angle(props.rotation)
    } else {
        None
    };
    Geometry::of(props).write(xml, tag, rotation)
}

/// Write `p:cNvPr`, the header every shape starts with.
///
/// `description` is written only when given; the hyperlink becomes an
/// `a:hlinkClick` child.
pub(crate) fn write_non_visual_props(
    xml: &mut XmlWriter,
    id: u32,
    name: &str,
    description: Option<&str>,
    hyperlink: Option<&Hyperlink>,
) -> Result<()> {
    xml.start_element("p:cNvPr")?;
    xml.write_int_attribute("id", id)?;
    xml.write_attribute("name", name)?;
    if let Some(description) = description {
        xml.write_attribute("descr", description)?;
    }
    if let Some(link) = hyperlink {
        let owner = if name.is_empty() { "shape" } else { name };
        write_hyperlink(xml, link, owner)?;
    }
    xml.end_element()
}

/// Writes shape collections for one part.
pub struct ShapeSerializer<'a> {
    options: &'a WriterOptions,
    field_ids: FieldIdGenerator,
}

impl<'a> ShapeSerializer<'a> {
    pub fn new(options: &'a WriterOptions) -> Self {
        Self {
            options,
            field_ids: FieldIdGenerator::new(options.field_ids),
        }
    }

    /// Write every shape in order.
    pub fn write_shapes(
        &mut self,
        xml: &mut XmlWriter,
        shapes: &[Shape],
        ids: &mut ShapeIdCounter,
    ) -> Result<()> {
        for shape in shapes {
            self.write_shape(xml, shape, ids)?;
        }
        Ok(())
    }

    pub fn write_shape(
        &mut self,
        xml: &mut XmlWriter,
        shape: &Shape,
        ids: &mut ShapeIdCounter,
    ) -> Result<()> {
        match shape {
            Shape::TextBox(text_box) => {
                let id = ids.next_id();
                self.write_text_box(xml, text_box, id)
            },
            Shape::Table(table) => {
                let id = ids.next_id();
                write_table(xml, table, id, self.options)
            },
            Shape::Line(line) => {
                let id = ids.next_id();
                self.write_line(xml, line, id)
            },
            Shape::Chart(chart) => {
                let id = ids.next_id();
                self.write_chart(xml, chart, id)
            },
            Shape::Image(image) => {
                let id = ids.next_id();
                self.write_image(xml, image, id)
            },
            Shape::Group(group) => self.write_group(xml, group, ids),
            // Unsupported kinds are left out of the slide and take no id.
            Shape::Other(other) => {
                debug!(kind = %other.kind, name = %other.props.name, "skipping unsupported shape");
                Ok(())
            },
        }
    }

    fn write_text_box(&mut self, xml: &mut XmlWriter, text_box: &TextBox, id: u32) -> Result<()> {
        let props = &text_box.props;
        let name = match text_box.placeholder {
            Some(placeholder) => format!("Placeholder for {}", placeholder.kind.as_str()),
            None => props.name.clone(),
        };

        xml.start_element("p:sp")?;

        xml.start_element("p:nvSpPr")?;
        write_non_visual_props(xml, id, &name, None, props.hyperlink.as_ref())?;
        xml.start_element("p:cNvSpPr")?;
        xml.write_attribute("txBox", "1")?;
        xml.end_element()?;
        xml.start_element("p:nvPr")?;
        if let Some(placeholder) = text_box.placeholder {
            xml.start_element("p:ph")?;
            xml.write_attribute("type", placeholder.kind.as_str())?;
            if let Some(index) = placeholder.index {
                xml.write_int_attribute("idx", index)?;
            }
            xml.end_element()?;
        }
        xml.end_element()?;
        xml.end_element()?;

        xml.start_element("p:spPr")?;
        write_transform(xml, "a:xfrm", props, true)?;
        xml.start_element("a:prstGeom")?;
        xml.write_attribute("prst", "rect")?;
        xml.end_element()?;
        self.write_shape_style(xml, props)?;
        xml.end_element()?;

        xml.start_element("p:txBody")?;
        write_body_properties(xml, text_box)?;
        xml.write_element("a:lstStyle")?;
        match text_box.field_placeholder() {
            Some(kind) => self.write_field(xml, kind)?,
            None => write_text_body_paragraphs(xml, &text_box.paragraphs, self.options)?,
        }
        xml.end_element()?;

        xml.end_element()
    }

    /// Slide number or date field, in place of the paragraphs.
    fn write_field(&mut self, xml: &mut XmlWriter, kind: PlaceholderType) -> Result<()> {
        let (field_type, text) = match kind {
            PlaceholderType::SlideNumber => ("slidenum", "<nr.>"),
            _ => ("datetime", self.options.date_placeholder_text.as_str()),
        };
        xml.start_element("a:p")?;
        xml.start_element("a:fld")?;
        xml.write_attribute("id", &self.field_ids.next_id())?;
        xml.write_attribute("type", field_type)?;
        xml.write_text_element("a:t", text)?;
        xml.end_element()?;
        xml.end_element()
    }

    fn write_line(&mut self, xml: &mut XmlWriter, line: &Line, id: u32) -> Result<()> {
        let props = &line.props;

        xml.start_element("p:cxnSp")?;

        xml.start_element("p:nvCxnSpPr")?;
        write_non_visual_props(xml, id, &props.name, None, props.hyperlink.as_ref())?;
        xml.write_element("p:cNvCxnSpPr")?;
        xml.write_element("p:nvPr")?;
        xml.end_element()?;

        xml.start_element("p:spPr")?;
        Geometry::line(props).write(xml, "a:xfrm", nonzero_angle(props.rotation))?;
        xml.start_element("a:prstGeom")?;
        xml.write_attribute("prst", "line")?;
        xml.end_element()?;
        if props.border.is_visible() {
            write_border(xml, &props.border, "")?;
        }
        xml.end_element()?;

        xml.end_element()
    }

    fn write_chart(&mut self, xml: &mut XmlWriter, chart: &ChartRef, id: u32) -> Result<()> {
        let props = &chart.props;
        let r_id = chart
            .relation_id
            .ok_or_else(|| missing_relationship(props, "chart"))?;

        xml.start_element("p:graphicFrame")?;

        xml.start_element("p:nvGraphicFramePr")?;
        write_non_visual_props(xml, id, &props.name, Some(&props.description), props.hyperlink.as_ref())?;
        xml.write_element("p:cNvGraphicFramePr")?;
        xml.write_element("p:nvPr")?;
        xml.end_element()?;

        write_transform(xml, "p:xfrm", props, true)?;

        xml.start_element("a:graphic")?;
        xml.start_element("a:graphicData")?;
        xml.write_attribute("uri", graphic_data::CHART)?;
        xml.start_element("c:chart")?;
        xml.write_attribute("xmlns:c", namespace::DML_CHART)?;
        xml.write_attribute("xmlns:r", namespace::OFC_RELATIONSHIPS)?;
        xml.write_attribute("r:id", &r_id.to_string())?;
        xml.end_element()?;
        xml.end_element()?;
        xml.end_element()?;

        xml.end_element()
    }

    fn write_image(&mut self, xml: &mut XmlWriter, image: &ImageRef, id: u32) -> Result<()> {
        let props = &image.props;
        let r_id = image
            .relation_id
            .ok_or_else(|| missing_relationship(props, "image"))?;

        xml.start_element("p:pic")?;

        xml.start_element("p:nvPicPr")?;
        write_non_visual_props(xml, id, &props.name, Some(&props.description), props.hyperlink.as_ref())?;
        xml.start_element("p:cNvPicPr")?;
        xml.start_element("a:picLocks")?;
        xml.write_attribute("noChangeAspect", "1")?;
        xml.end_element()?;
        xml.end_element()?;
        xml.write_element("p:nvPr")?;
        xml.end_element()?;

        xml.start_element("p:blipFill")?;
        xml.start_element("a:blip")?;
        xml.write_attribute("r:embed", &r_id.to_string())?;
        xml.end_element()?;
        xml.start_element("a:stretch")?;
        xml.write_element("a:fillRect")?;
        xml.end_element()?;
        xml.end_element()?;

        xml.start_element("p:spPr")?;
        write_transform(xml, "a:xfrm", props, true)?;
        xml.start_element("a:prstGeom")?;
        xml.write_attribute("prst", "rect")?;
        xml.write_element("a:avLst")?;
        xml.end_element()?;
        if props.border.is_visible() {
            write_border(xml, &props.border, "")?;
        }
        write_shadow(xml, &props.shadow)?;
        xml.end_element()?;

        xml.end_element()
    }

    fn write_group(&mut self, xml: &mut XmlWriter, group: &Group, ids: &mut ShapeIdCounter) -> Result<()> {
        let props = &group.props;
        let id = ids.next_id();

        xml.start_element("p:grpSp")?;

        xml.start_element("p:nvGrpSpPr")?;
        write_non_visual_props(xml, id, &group_name(id), None, props.hyperlink.as_ref())?;
        xml.write_element("p:cNvGrpSpPr")?;
        xml.write_element("p:nvPr")?;
        xml.end_element()?;

        xml.start_element("p:grpSpPr")?;
        GroupTransform::new(props.offset_x, props.offset_y, props.width, props.height).write(xml)?;
        xml.end_element()?;

        self.write_shapes(xml, &group.shapes, ids)?;

        xml.end_element()
    }

    /// Fill, visible outline and visible shadow.
    fn write_shape_style(&self, xml: &mut XmlWriter, props: &ShapeProps) -> Result<()> {
        write_fill(xml, &props.fill)?;
        if props.border.is_visible() {
            write_border(xml, &props.border, "")?;
        }
        write_shadow(xml, &props.shadow)
    }
}

fn missing_relationship(props: &ShapeProps, kind: &'static str) -> SlideError {
    SlideError::MissingRelationship {
        shape: props.name.clone(),
        kind,
    }
}

fn write_body_properties(xml: &mut XmlWriter, text_box: &TextBox) -> Result<()> {
    let insets = &text_box.insets;

    xml.start_element("a:bodyPr")?;
    if let Some(anchor) = text_box.anchor() {
        xml.write_attribute("anchor", anchor.as_str())?;
    }
    xml.write_attribute_if(text_box.wrap != TextWrap::Square, "wrap", text_box.wrap.as_str())?;
    xml.write_attribute("rtlCol", "0")?;
    xml.write_attribute_if(
        text_box.horizontal_overflow != Overflow::Overflow,
        "horzOverflow",
        text_box.horizontal_overflow.as_str(),
    )?;
    xml.write_attribute_if(
        text_box.vertical_overflow != Overflow::Overflow,
        "vertOverflow",
        text_box.vertical_overflow.as_str(),
    )?;
    xml.write_attribute_if(text_box.upright, "upright", "1")?;
    xml.write_attribute_if(text_box.vertical, "vert", "vert")?;
    xml.write_int_attribute("bIns", px_to_emu(insets.bottom))?;
    xml.write_int_attribute("lIns", px_to_emu(insets.left))?;
    xml.write_int_attribute("rIns", px_to_emu(insets.right))?;
    xml.write_int_attribute("tIns", px_to_emu(insets.top))?;
    if text_box.columns != 1 {
        xml.write_int_attribute("numCol", text_box.columns)?;
    }

    match &text_box.autofit {
        AutoFit::None => xml.write_element("a:noAutofit")?,
        AutoFit::Normal {
            font_scale,
            line_space_reduction,
        } => {
            xml.start_element("a:normAutofit")?;
            xml.write_int_attribute_opt("fontScale", font_scale.map(thousandths))?;
            xml.write_int_attribute_opt("lnSpcReduction", line_space_reduction.map(thousandths))?;
            xml.end_element()?;
        },
        AutoFit::Shape => xml.write_element("a:spAutoFit")?,
    }

    xml.end_element()
}

#[inline]
fn thousandths(percent: f64) -> i64 {
    (percent * 1000.0).round() as i64
}
