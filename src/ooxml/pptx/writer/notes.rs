//! Notes part (`p:notes`) serialization.
//!
//! A notes page is a fixed shell: the tree root and a single body placeholder
//! that receives the paragraphs of every text box in the note. Other shapes
//! in the note are not written.

use crate::common::xml::XmlWriter;
use crate::ooxml::error::Result;
use crate::ooxml::pptx::model::{Note, Paragraph, Shape};
use crate::ooxml::pptx::writer::ids::{GroupTransform, ShapeIdCounter};
use crate::ooxml::pptx::writer::options::WriterOptions;
use crate::ooxml::pptx::writer::paragraph::write_paragraph;
use crate::ooxml::pptx::writer::slide::{start_part_root, write_tree_root};
use tracing::debug;

const NOTES_PLACEHOLDER_NAME: &str = "Notes Placeholder";
const NOTES_BODY_INDEX: u32 = 1;

/// Paragraphs of the note's top-level text boxes, in shape order.
pub fn note_paragraphs(note: &Note) -> Vec<&Paragraph> {
    note.shapes
        .iter()
        .filter_map(|shape| match shape {
            Shape::TextBox(text_box) => Some(text_box.paragraphs.iter()),
            Shape::Table(_)
            | Shape::Line(_)
            | Shape::Chart(_)
            | Shape::Image(_)
            | Shape::Group(_)
            | Shape::Other(_) => None,
        })
        .flatten()
        .collect()
}

pub fn write_notes_document(note: &Note, options: &WriterOptions) -> Result<Vec<u8>> {
    let mut xml = XmlWriter::with_capacity(4096);
    let mut ids = ShapeIdCounter::new();

    start_part_root(&mut xml, "p:notes")?;
    xml.start_element("p:cSld")?;
    xml.start_element("p:spTree")?;

    let transform = GroupTransform::new(note.offset_x, note.offset_y, note.extent_x, note.extent_y);
    write_tree_root(&mut xml, &mut ids, transform)?;

    xml.start_element("p:sp")?;
    xml.start_element("p:nvSpPr")?;
    xml.start_element("p:cNvPr")?;
    xml.write_int_attribute("id", ids.next_id())?;
    xml.write_attribute("name", NOTES_PLACEHOLDER_NAME)?;
    xml.end_element()?;
    xml.start_element("p:cNvSpPr")?;
    xml.start_element("a:spLocks")?;
    xml.write_attribute("noGrp", "1")?;
    xml.end_element()?;
    xml.end_element()?;
    xml.start_element("p:nvPr")?;
    xml.start_element("p:ph")?;
    xml.write_attribute("type", "body")?;
    xml.write_int_attribute("idx", NOTES_BODY_INDEX)?;
    xml.end_element()?;
    xml.end_element()?;
    xml.end_element()?; // p:nvSpPr
    xml.write_element("p:spPr")?;

    xml.start_element("p:txBody")?;
    xml.write_element("a:bodyPr")?;
    xml.write_element("a:lstStyle")?;
    let paragraphs = note_paragraphs(note);
    if paragraphs.is_empty() {
        xml.write_element("a:p")?;
    }
    for paragraph in &paragraphs {
        write_paragraph(&mut xml, paragraph, options)?;
    }
    xml.end_element()?; // p:txBody
    xml.end_element()?; // p:sp

    xml.end_element()?; // p:spTree
    xml.end_element()?; // p:cSld
    xml.end_element()?;

    let bytes = xml.into_bytes()?;
    debug!(paragraphs = paragraphs.len(), bytes = bytes.len(), "wrote notes part");
    Ok(bytes)
}
