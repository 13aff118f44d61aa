//! Slide part (`p:sld`) serialization.

use crate::common::xml::XmlWriter;
use crate::ooxml::error::{Result, SlideError};
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::pptx::model::{Background, Slide};
use crate::ooxml::pptx::writer::ids::{GroupTransform, ShapeIdCounter};
use crate::ooxml::pptx::writer::options::WriterOptions;
use crate::ooxml::pptx::writer::shape::ShapeSerializer;
use crate::ooxml::pptx::writer::style::write_solid_fill;
use tracing::debug;

/// Open a part's root element with the `a`, `p` and `r` namespace declarations.
pub(crate) fn start_part_root(xml: &mut XmlWriter, name: &str) -> Result<()> {
    xml.start_document()?;
    xml.start_element(name)?;
    xml.write_attribute("xmlns:a", namespace::DML_MAIN)?;
    xml.write_attribute("xmlns:p", namespace::PML_MAIN)?;
    xml.write_attribute("xmlns:r", namespace::OFC_RELATIONSHIPS)
}

/// Write the shape tree's own group node. It takes the first shape id.
pub(crate) fn write_tree_root(
    xml: &mut XmlWriter,
    ids: &mut ShapeIdCounter,
    transform: GroupTransform,
) -> Result<()> {
    let id = ids.next_id();
    xml.start_element("p:nvGrpSpPr")?;
    xml.start_element("p:cNvPr")?;
    xml.write_int_attribute("id", id)?;
    xml.write_attribute("name", "")?;
    xml.end_element()?;
    xml.write_element("p:cNvGrpSpPr")?;
    xml.write_element("p:nvPr")?;
    xml.end_element()?;

    xml.start_element("p:grpSpPr")?;
    transform.write(xml)?;
    xml.end_element()
}

/// Serialize a slide whose relationships have already been assigned.
pub fn write_slide_document(slide: &Slide, options: &WriterOptions) -> Result<Vec<u8>> {
    let mut xml = XmlWriter::with_capacity(16 * 1024);
    let mut ids = ShapeIdCounter::new();

    start_part_root(&mut xml, "p:sld")?;
    xml.start_element("p:cSld")?;
    if let Some(background) = &slide.background {
        write_background(&mut xml, background)?;
    }

    xml.start_element("p:spTree")?;
    let transform = GroupTransform::new(slide.offset_x, slide.offset_y, slide.extent_x, slide.extent_y);
    write_tree_root(&mut xml, &mut ids, transform)?;
    ShapeSerializer::new(options).write_shapes(&mut xml, &slide.shapes, &mut ids)?;
    xml.end_element()?; // p:spTree
    xml.end_element()?; // p:cSld

    xml.start_element("p:clrMapOvr")?;
    xml.write_element("a:masterClrMapping")?;
    xml.end_element()?;

    xml.end_element()?;
    let bytes = xml.into_bytes()?;
    debug!(shape_ids = ids.issued(), bytes = bytes.len(), "wrote slide part");
    Ok(bytes)
}

/// Write `p:bg`.
pub fn write_background(xml: &mut XmlWriter, background: &Background) -> Result<()> {
    xml.start_element("p:bg")?;
    match background {
        Background::Color(color) => {
            xml.start_element("p:bgPr")?;
            write_solid_fill(xml, color)?;
            xml.write_element("a:effectLst")?;
            xml.end_element()?;
        },
        Background::Image {
            relation_id, ..
        } => {
            let r_id = relation_id.ok_or_else(|| SlideError::MissingRelationship {
                shape: "slide background".to_string(),
                kind: "image",
            })?;
            xml.start_element("p:bgPr")?;
            xml.start_element("a:blipFill")?;
            xml.start_element("a:blip")?;
            xml.write_attribute("r:embed", &r_id.to_string())?;
            xml.end_element()?;
            xml.start_element("a:stretch")?;
            xml.write_element("a:fillRect")?;
            xml.end_element()?;
            xml.end_element()?;
            xml.write_element("a:effectLst")?;
            xml.end_element()?;
        },
        Background::SchemeColor(scheme) => {
            xml.start_element("p:bgRef")?;
            xml.write_attribute("idx", "1001")?;
            xml.start_element("a:schemeClr")?;
            xml.write_attribute("val", scheme)?;
            xml.end_element()?;
            xml.end_element()?;
        },
    }
    xml.end_element()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::RelId;
    use crate::ooxml::pptx::model::{Color, ImageFormat, ImageSource, Line, ShapeProps};

    fn render_background(background: &Background) -> Result<String> {
        let mut xml = XmlWriter::new();
        write_background(&mut xml, background)?;
        Ok(String::from_utf8(xml.into_bytes()?).unwrap())
    }

    #[test]
    fn test_slide_shell() {
        let slide = Slide::new()
            .with_extent(960.0, 540.0)
            .with_shape(Line::new(ShapeProps::default()));
        let out = String::from_utf8(write_slide_document(&slide, &WriterOptions::default()).unwrap()).unwrap();

        assert!(out.starts_with(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><p:sld xmlns:a="#));
        assert!(out.contains(concat!(
            r#"<p:cSld><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
            r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="9144000" cy="5143500"/>"#,
            r#"<a:chOff x="0" y="0"/><a:chExt cx="9144000" cy="5143500"/></a:xfrm></p:grpSpPr>"#
        )));
        assert!(out.contains(r#"<p:cxnSp><p:nvCxnSpPr><p:cNvPr id="2" name=""/>"#));
        assert!(out.ends_with(
            "</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>"
        ));
    }

    #[test]
    fn test_color_background() {
        let out = render_background(&Background::Color(Color::rgb(0x20, 0x40, 0x60))).unwrap();
        assert_eq!(
            out,
            concat!(
                r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="204060"><a:alpha val="100000"/></a:srgbClr>"#,
                r#"</a:solidFill><a:effectLst/></p:bgPr></p:bg>"#
            )
        );
    }

    #[test]
    fn test_image_background() {
        let mut background = Background::image(ImageSource::Generated {
            name: "bg".to_string(),
            format: ImageFormat::Png,
            index: 1,
        });
        assert!(matches!(
            render_background(&background),
            Err(SlideError::MissingRelationship { kind: "image", .. })
        ));

        if let Background::Image { relation_id, .. } = &mut background {
            *relation_id = Some(RelId::new(4));
        }
        assert_eq!(
            render_background(&background).unwrap(),
            concat!(
                r#"<p:bg><p:bgPr><a:blipFill><a:blip r:embed="rId4"/><a:stretch><a:fillRect/></a:stretch>"#,
                r#"</a:blipFill><a:effectLst/></p:bgPr></p:bg>"#
            )
        );
    }

    #[test]
    fn test_scheme_background() {
        let out = render_background(&Background::SchemeColor("bg2".to_string())).unwrap();
        assert_eq!(out, r#"<p:bg><p:bgRef idx="1001"><a:schemeClr val="bg2"/></p:bgRef></p:bg>"#);
    }
}
