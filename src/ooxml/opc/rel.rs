//! Relationship entries produced while serializing one slide part.
//!
//! The slide writer decides which entries exist and which numeric id each
//! referencing shape receives; persisting them is the job of a
//! [`RelationshipSink`]. [`Relationships`] is the in-memory sink that renders
//! the part's `.rels` manifest.

use crate::common::xml::XmlWriter;
use crate::ooxml::error::{Result, SlideError};
use crate::ooxml::opc::constants::{namespace, relationship_type, target_mode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric relationship identifier, rendered as `rId<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RelId(u32);

impl RelId {
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rId{}", self.0)
    }
}

/// What a relationship points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipKind {
    Image,
    Chart,
    Hyperlink,
    Slide,
}

impl RelationshipKind {
    /// Relationship type URI.
    pub fn reltype(self) -> &'static str {
        match self {
            Self::Image => relationship_type::IMAGE,
            Self::Chart => relationship_type::CHART,
            Self::Hyperlink => relationship_type::HYPERLINK,
            Self::Slide => relationship_type::SLIDE,
        }
    }

    /// Short lowercase name, used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Chart => "chart",
            Self::Hyperlink => "hyperlink",
            Self::Slide => "slide",
        }
    }
}

/// A single relationship from the slide part to a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    r_id: RelId,
    kind: RelationshipKind,
    target_ref: String,
    is_external: bool,
}

impl Relationship {
    /// Relationship to another part of the package.
    pub fn internal(r_id: RelId, kind: RelationshipKind, target_ref: impl Into<String>) -> Self {
        Self {
            r_id,
            kind,
            target_ref: target_ref.into(),
            is_external: false,
        }
    }

    /// Relationship to an external URL.
    pub fn external(r_id: RelId, kind: RelationshipKind, target_ref: impl Into<String>) -> Self {
        Self {
            r_id,
            kind,
            target_ref: target_ref.into(),
            is_external: true,
        }
    }

    #[inline]
    pub fn r_id(&self) -> RelId {
        self.r_id
    }

    #[inline]
    pub fn kind(&self) -> RelationshipKind {
        self.kind
    }

    /// Target reference, relative to the slide part or an absolute URL.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }

    #[inline]
    pub fn is_external(&self) -> bool {
        self.is_external
    }
}

/// Receiver for relationship entries as they are allocated.
pub trait RelationshipSink {
    fn add_relationship(&mut self, rel: Relationship) -> Result<()>;
}

/// Ordered collection of a part's relationships.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relationships {
    rels: Vec<Relationship>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a relationship by its ID.
    pub fn get(&self, r_id: RelId) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.r_id == r_id)
    }

    /// Iterate in allocation order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize relationships to the `.rels` part format, sorted by id.
    pub fn to_xml(&self) -> Result<Vec<u8>> {
        let mut xml = XmlWriter::with_capacity(256 + self.rels.len() * 160);
        xml.start_document()?;
        xml.start_element("Relationships")?;
        xml.write_attribute("xmlns", namespace::OPC_RELATIONSHIPS)?;

        let mut rels: Vec<&Relationship> = self.rels.iter().collect();
        rels.sort_by_key(|rel| rel.r_id);

        for rel in rels {
            xml.start_element("Relationship")?;
            xml.write_attribute("Id", &rel.r_id.to_string())?;
            xml.write_attribute("Type", rel.kind.reltype())?;
            xml.write_attribute("Target", &rel.target_ref)?;
            xml.write_attribute_if(rel.is_external, "TargetMode", target_mode::EXTERNAL)?;
            xml.end_element()?;
        }

        xml.end_element()?;
        xml.into_bytes()
    }
}

impl RelationshipSink for Relationships {
    fn add_relationship(&mut self, rel: Relationship) -> Result<()> {
        if self.get(rel.r_id).is_some() {
            return Err(SlideError::MalformedModel(format!(
                "relationship id {} allocated twice",
                rel.r_id
            )));
        }
        self.rels.push(rel);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rel_id_display() {
        assert_eq!(RelId::new(7).to_string(), "rId7");
        assert!(RelId::new(2) < RelId::new(10));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut rels = Relationships::new();
        rels.add_relationship(Relationship::internal(
            RelId::new(2),
            RelationshipKind::Image,
            "../media/a1.png",
        ))
        .unwrap();
        let again = Relationship::internal(RelId::new(2), RelationshipKind::Chart, "../charts/chart1.xml");
        assert!(rels.add_relationship(again).is_err());
        assert_eq!(rels.len(), 1);
    }

    #[test]
    fn test_rels_xml() {
        let mut rels = Relationships::new();
        rels.add_relationship(Relationship::external(
            RelId::new(3),
            RelationshipKind::Hyperlink,
            "https://example.com/?a=1&b=2",
        ))
        .unwrap();
        rels.add_relationship(Relationship::internal(
            RelId::new(2),
            RelationshipKind::Image,
            "../media/logo1.png",
        ))
        .unwrap();

        let xml = String::from_utf8(rels.to_xml().unwrap()).unwrap();
        let image = xml.find(r#"Id="rId2""#).unwrap();
        let link = xml.find(r#"Id="rId3""#).unwrap();
        assert!(image < link);
        assert!(xml.contains(r#"Target="https://example.com/?a=1&amp;b=2" TargetMode="External""#));
        assert!(xml.contains(relationship_type::IMAGE));
        assert!(xml.ends_with("</Relationships>"));
    }
}
