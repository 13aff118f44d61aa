//! Error types for slide serialization.

use thiserror::Error;

/// Result type for slide serialization.
pub type Result<T> = std::result::Result<T, SlideError>;

/// Error types for slide serialization.
///
/// Every variant is fatal to the part being written; no partial XML is returned.
#[derive(Error, Debug)]
pub enum SlideError {
    /// Table has no rows or no columns
    #[error("Malformed table: a table needs at least one row and one column")]
    EmptyTable,

    /// Table row whose cell count differs from the grid defined by the first row
    #[error("Malformed table: row {row} has {found} cells, expected {expected}")]
    MalformedTable {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Cell span that is zero or reaches past the table grid
    #[error("Invalid span at row {row}, column {column}: {reason}")]
    InvalidSpan {
        row: usize,
        column: usize,
        reason: String,
    },

    /// Other model inconsistency
    #[error("Malformed model: {0}")]
    MalformedModel(String),

    /// Reference-carrying element reached the serializer without a relationship id
    #[error("Missing relationship for {kind} on shape '{shape}'")]
    MissingRelationship { shape: String, kind: &'static str },

    /// Referenced media could not be resolved to a package target
    #[error("Resource lookup failed: {0}")]
    ResourceLookup(String),

    /// XML emitter error
    #[error("XML error: {0}")]
    Xml(String),
}

impl From<quick_xml::Error> for SlideError {
    fn from(err: quick_xml::Error) -> Self {
        SlideError::Xml(err.to_string())
    }
}

impl From<std::io::Error> for SlideError {
    fn from(err: std::io::Error) -> Self {
        SlideError::Xml(err.to_string())
    }
}
