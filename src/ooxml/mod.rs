//! Office Open XML (OOXML) support.
//!
//! The module is organized into layers:
//!
//! 1. **OPC Layer** (`opc`): namespaces, relationship types and `.rels` parts
//! 2. **Errors** (`error`): the error type shared by every writer
//! 3. **PresentationML** (`pptx`): the slide model and its part writers

pub mod error;
pub mod opc;
pub mod pptx;

pub use error::{Result, SlideError};
