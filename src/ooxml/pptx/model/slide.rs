//! Slides, backgrounds and speaker notes.

use super::shape::{ImageSource, Shape};
use super::style::Color;
use crate::ooxml::opc::RelId;

/// Slide background.
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    Color(Color),
    Image {
        source: ImageSource,
        /// Filled in by relationship assignment
        relation_id: Option<RelId>,
    },
    /// Theme color reference such as `bg1` or `accent2`
    SchemeColor(String),
}

impl Background {
    pub fn image(source: ImageSource) -> Self {
        Self::Image {
            source,
            relation_id: None,
        }
    }
}

/// One slide. Offset and extent describe the slide-level group transform,
/// in pixels.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Slide {
    pub shapes: Vec<Shape>,
    pub background: Option<Background>,
    pub offset_x: f64,
    pub offset_y: f64,
    pub extent_x: f64,
    pub extent_y: f64,
}

impl Slide {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shape(mut self, shape: impl Into<Shape>) -> Self {
        self.shapes.push(shape.into());
        self
    }

    pub fn with_background(mut self, background: Background) -> Self {
        self.background = Some(background);
        self
    }

    pub fn with_extent(mut self, extent_x: f64, extent_y: f64) -> Self {
        self.extent_x = extent_x;
        self.extent_y = extent_y;
        self
    }
}

/// Speaker notes attached to a slide.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Note {
    pub shapes: Vec<Shape>,
    pub offset_x: f64,
    pub offset_y: f64,
    pub extent_x: f64,
    pub extent_y: f64,
}

impl Note {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shape(mut self, shape: impl Into<Shape>) -> Self {
        self.shapes.push(shape.into());
        self
    }
}
