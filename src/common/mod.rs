//! Common types and utilities shared across part writers.

// Submodule declarations
pub mod id;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use id::{FieldIdGenerator, FieldIdMode};
pub use unit::{degrees_to_angle, emu_to_px, px_to_emu};
pub use xml::XmlWriter;
