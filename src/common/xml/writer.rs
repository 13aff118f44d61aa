//! Streaming XML emitter used by all part writers.
//!
//! A thin layer over [`quick_xml::Writer`] that accepts attributes after a start
//! tag has been opened, the way the part writers build elements. A start tag is
//! held back until its first child or text arrives; an element closed with no
//! content is written as a void element (`<a:br/>`).

use crate::ooxml::error::{Result, SlideError};
use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Cursor;

/// Append-only XML writer backed by an in-memory buffer.
pub struct XmlWriter {
    writer: Writer<Cursor<Vec<u8>>>,
    pending: Option<BytesStart<'static>>,
    open: Vec<String>,
}

impl XmlWriter {
    /// Create a writer with an empty buffer.
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Create a writer with a preallocated buffer.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            writer: Writer::new(Cursor::new(Vec::with_capacity(capacity))),
            pending: None,
            open: Vec::new(),
        }
    }

    /// Write the `<?xml version="1.0" encoding="UTF-8" standalone="yes"?>` declaration.
    pub fn start_document(&mut self) -> Result<()> {
        self.emit(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
    }

    /// Open an element. Attributes may follow until the first child or text.
    pub fn start_element(&mut self, name: &str) -> Result<()> {
        self.flush_pending()?;
        self.pending = Some(BytesStart::new(name.to_owned()));
        self.open.push(name.to_owned());
        Ok(())
    }

    /// Add an attribute to the element opened last. The value is escaped.
    pub fn write_attribute(&mut self, key: &str, value: &str) -> Result<()> {
        match self.pending.as_mut() {
            Some(start) => {
                start.push_attribute((key, value));
                Ok(())
            },
            None => Err(SlideError::Xml(format!(
                "attribute '{key}' written outside a start tag"
            ))),
        }
    }

    /// Add an integer attribute.
    pub fn write_int_attribute(&mut self, key: &str, value: impl Into<i64>) -> Result<()> {
        let mut buffer = itoa::Buffer::new();
        let formatted = buffer.format(value.into());
        self.write_attribute(key, formatted)
    }

    /// Add an attribute only when `condition` holds.
    pub fn write_attribute_if(&mut self, condition: bool, key: &str, value: &str) -> Result<()> {
        if condition {
            self.write_attribute(key, value)?;
        }
        Ok(())
    }

    /// Add an integer attribute only when a value is present.
    pub fn write_int_attribute_opt(&mut self, key: &str, value: Option<i64>) -> Result<()> {
        match value {
            Some(value) => self.write_int_attribute(key, value),
            None => Ok(()),
        }
    }

    /// Close the element opened last.
    pub fn end_element(&mut self) -> Result<()> {
        let name = self
            .open
            .pop()
            .ok_or_else(|| SlideError::Xml("end_element with no open element".to_string()))?;
        match self.pending.take() {
            Some(start) => self.emit(Event::Empty(start)),
            None => self.emit(Event::End(BytesEnd::new(name))),
        }
    }

    /// Write an element with no attributes and no content.
    pub fn write_element(&mut self, name: &str) -> Result<()> {
        self.start_element(name)?;
        self.end_element()
    }

    /// Write an element holding escaped text.
    pub fn write_text_element(&mut self, name: &str, text: &str) -> Result<()> {
        self.start_element(name)?;
        self.write_text(text)?;
        self.end_element()
    }

    /// Write escaped character data.
    pub fn write_text(&mut self, text: &str) -> Result<()> {
        self.flush_pending()?;
        self.emit(Event::Text(BytesText::new(text)))
    }

    /// Write text as CDATA.
    ///
    /// A `]]>` sequence inside `text` is split across two sections.
    pub fn write_cdata(&mut self, text: &str) -> Result<()> {
        self.flush_pending()?;
        let mut rest = text;
        while let Some(pos) = rest.find("]]>") {
            self.emit(Event::CData(BytesCData::new(&rest[..pos + 2])))?;
            rest = &rest[pos + 2..];
        }
        self.emit(Event::CData(BytesCData::new(rest)))
    }

    /// Current element nesting depth.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Finish writing and hand over the buffer.
    ///
    /// Fails if any element is still open.
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        if let Some(name) = self.open.last() {
            return Err(SlideError::Xml(format!("element '{name}' was never closed")));
        }
        Ok(self.writer.into_inner().into_inner())
    }

    fn flush_pending(&mut self) -> Result<()> {
        if let Some(start) = self.pending.take() {
            self.emit(Event::Start(start))?;
        }
        Ok(())
    }

    fn emit(&mut self, event: Event<'_>) -> Result<()> {
        self.writer
            .write_event(event)
            .map_err(|e| SlideError::Xml(e.to_string()))
    }
}

impl Default for XmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finish(xml: XmlWriter) -> String {
        String::from_utf8(xml.into_bytes().unwrap()).unwrap()
    }

    #[test]
    fn test_void_and_nested_elements() {
        let mut xml = XmlWriter::new();
        xml.start_element("a:p").unwrap();
        xml.start_element("a:pPr").unwrap();
        xml.write_attribute("algn", "l").unwrap();
        xml.end_element().unwrap();
        xml.write_element("a:br").unwrap();
        xml.end_element().unwrap();
        assert_eq!(finish(xml), r#"<a:p><a:pPr algn="l"/><a:br/></a:p>"#);
    }

    #[test]
    fn test_declaration() {
        let mut xml = XmlWriter::new();
        xml.start_document().unwrap();
        xml.write_element("root").unwrap();
        assert_eq!(
            finish(xml),
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><root/>"#
        );
    }

    #[test]
    fn test_attribute_and_text_escaping() {
        let mut xml = XmlWriter::new();
        xml.start_element("a:hlinkClick").unwrap();
        xml.write_attribute("tooltip", "a \"b\" & <c>").unwrap();
        xml.end_element().unwrap();
        xml.write_text_element("a:t", "<nr.>").unwrap();
        let out = finish(xml);
        assert!(out.contains("tooltip=\"a &quot;b&quot; &amp; &lt;c&gt;\""));
        assert!(out.contains("<a:t>&lt;nr.&gt;</a:t>"));
    }

    #[test]
    fn test_int_attributes() {
        let mut xml = XmlWriter::new();
        xml.start_element("a:off").unwrap();
        xml.write_int_attribute("x", -476_250i64).unwrap();
        xml.write_int_attribute_opt("rot", None).unwrap();
        xml.write_int_attribute("y", 7u32).unwrap();
        xml.end_element().unwrap();
        assert_eq!(finish(xml), r#"<a:off x="-476250" y="7"/>"#);
    }

    #[test]
    fn test_cdata_split() {
        let mut xml = XmlWriter::new();
        xml.start_element("a:t").unwrap();
        xml.write_cdata("x]]>y").unwrap();
        xml.end_element().unwrap();
        assert_eq!(
            finish(xml),
            "<a:t><![CDATA[x]]]]><![CDATA[>y]]></a:t>"
        );
    }

    #[test]
    fn test_attribute_after_content_fails() {
        let mut xml = XmlWriter::new();
        xml.start_element("a:p").unwrap();
        xml.write_text("text").unwrap();
        assert!(matches!(
            xml.write_attribute("lvl", "0"),
            Err(SlideError::Xml(_))
        ));
    }

    #[test]
    fn test_unclosed_element_fails() {
        let mut xml = XmlWriter::new();
        xml.start_element("p:sld").unwrap();
        assert_eq!(xml.depth(), 1);
        assert!(xml.into_bytes().is_err());
        assert!(XmlWriter::new().end_element().is_err());
    }
}
