//! XML emission helpers shared by all part writers.

mod escape;
mod writer;

pub use escape::encode_control_characters;
pub use writer::XmlWriter;
