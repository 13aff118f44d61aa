/// Open Packaging Conventions (OPC) pieces used by the part writers.
///
/// - Namespace and relationship type constants
/// - Relationship entries and the `.rels` part writer

pub mod constants;
pub mod rel;

// Re-export commonly used types
pub use rel::{RelId, Relationship, RelationshipKind, RelationshipSink, Relationships};
