//! Helpers for reading generated parts back with quick-xml.

#![allow(dead_code)]

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// An opening or empty element, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
}

impl Element {
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }
}

fn element(start: &BytesStart<'_>) -> Element {
    let attributes = start
        .attributes()
        .map(|attr| {
            let attr = attr.expect("well-formed attribute");
            (
                String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
                String::from_utf8_lossy(&attr.value).into_owned(),
            )
        })
        .collect();
    Element {
        name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
        attributes,
    }
}

/// Parse a part, panicking unless it is a well-formed document with one root.
pub fn parse(xml: &[u8]) -> Vec<Element> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::with_capacity(1024);
    let mut elements = Vec::new();
    let mut depth = 0usize;
    let mut roots = 0usize;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                if depth == 0 {
                    roots += 1;
                }
                depth += 1;
                elements.push(element(e));
            },
            Ok(Event::Empty(ref e)) => {
                if depth == 0 {
                    roots += 1;
                }
                elements.push(element(e));
            },
            Ok(Event::End(_)) => depth -= 1,
            Ok(Event::Eof) => break,
            Err(e) => panic!("malformed XML at {}: {e}", reader.buffer_position()),
            _ => {},
        }
        buf.clear();
    }

    assert_eq!(depth, 0, "unclosed elements");
    assert_eq!(roots, 1, "expected a single root element");
    elements
}

/// Elements named `name`.
pub fn named<'a>(elements: &'a [Element], name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
    elements.iter().filter(move |element| element.name == name)
}

/// Shape ids from every `p:cNvPr`, in document order.
pub fn shape_ids(elements: &[Element]) -> Vec<u32> {
    named(elements, "p:cNvPr")
        .map(|element| {
            element
                .attr("id")
                .and_then(|id| id.parse().ok())
                .expect("numeric shape id")
        })
        .collect()
}

/// Relationship ids referenced by `r:embed` and `r:id`, in document order.
pub fn referenced_rel_ids(elements: &[Element]) -> Vec<u32> {
    elements
        .iter()
        .filter(|element| element.name == "a:blip" || element.name == "c:chart")
        .filter_map(|element| element.attr("r:embed").or_else(|| element.attr("r:id")))
        .map(|id| id.trim_start_matches("rId").parse().expect("numeric relationship id"))
        .collect()
}
