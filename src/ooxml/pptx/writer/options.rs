//! Writer configuration.

use crate::common::id::FieldIdMode;
use serde::{Deserialize, Serialize};

/// How far the image and chart relationship pass descends into nested groups.
///
/// Top-level shapes are at depth 0, children of a top-level group at depth 1.
/// Images and charts deeper than the limit receive no relationship, and
/// serializing one fails with a missing-relationship error. Hyperlinks are
/// assigned at every depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipDepth {
    Limited(u32),
    Unlimited,
}

impl RelationshipDepth {
    /// Whether images and charts at `depth` take part in relationship assignment.
    #[inline]
    pub fn allows(self, depth: u32) -> bool {
        match self {
            Self::Limited(limit) => depth <= limit,
            Self::Unlimited => true,
        }
    }
}

impl Default for RelationshipDepth {
    fn default() -> Self {
        Self::Limited(1)
    }
}

/// Options shared by slide and notes serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterOptions {
    /// Language written on runs that do not set one
    pub default_language: String,
    pub relationship_depth: RelationshipDepth,
    /// Identifier scheme for slide-number and date fields
    pub field_ids: FieldIdMode,
    /// Sample text shown in date fields until the application refreshes them
    pub date_placeholder_text: String,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            default_language: "en-US".to_string(),
            relationship_depth: RelationshipDepth::default(),
            field_ids: FieldIdMode::default(),
            date_placeholder_text: "03-04-05".to_string(),
        }
    }
}

impl WriterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = language.into();
        self
    }

    pub fn with_relationship_depth(mut self, depth: RelationshipDepth) -> Self {
        self.relationship_depth = depth;
        self
    }

    pub fn with_field_ids(mut self, mode: FieldIdMode) -> Self {
        self.field_ids = mode;
        self
    }

    pub fn with_date_placeholder_text(mut self, text: impl Into<String>) -> Self {
        self.date_placeholder_text = text.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = WriterOptions::default();
        assert_eq!(options.default_language, "en-US");
        assert_eq!(options.relationship_depth, RelationshipDepth::Limited(1));
        assert_eq!(options.field_ids, FieldIdMode::Random);
        assert_eq!(options.date_placeholder_text, "03-04-05");
    }

    #[test]
    fn test_depth_limit() {
        let depth = RelationshipDepth::Limited(1);
        assert!(depth.allows(0));
        assert!(depth.allows(1));
        assert!(!depth.allows(2));
        assert!(RelationshipDepth::Unlimited.allows(u32::MAX));
        assert!(!RelationshipDepth::Limited(0).allows(1));
    }
}
