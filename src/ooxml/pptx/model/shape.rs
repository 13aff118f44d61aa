//! Slide shapes.
//!
//! [`Shape`] is a closed set of variants; every consumer matches on it
//! exhaustively. Geometry is stored in pixels and converted to EMU when the
//! shape is written.

use super::style::{Border, Fill, Shadow};
use super::table::Table;
use super::text::{Hyperlink, Paragraph, VerticalAlignment};
use crate::ooxml::error::{Result, SlideError};
use crate::ooxml::opc::RelId;
use std::path::PathBuf;

/// Properties shared by every shape kind.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeProps {
    pub name: String,
    pub description: String,
    pub offset_x: f64,
    pub offset_y: f64,
    /// May be negative for lines, which then flip
    pub width: f64,
    pub height: f64,
    /// Rotation in degrees
    pub rotation: f64,
    pub fill: Fill,
    pub border: Border,
    pub shadow: Shadow,
    pub hyperlink: Option<Hyperlink>,
}

impl Default for ShapeProps {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            offset_x: 0.0,
            offset_y: 0.0,
            width: 0.0,
            height: 0.0,
            rotation: 0.0,
            fill: Fill::None,
            border: Border::none(),
            shadow: Shadow::default(),
            hyperlink: None,
        }
    }
}

impl ShapeProps {
    /// Shape at the given position and size, in pixels.
    pub fn at(offset_x: f64, offset_y: f64, width: f64, height: f64) -> Self {
        Self {
            offset_x,
            offset_y,
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = shadow;
        self
    }

    pub fn with_hyperlink(mut self, hyperlink: Hyperlink) -> Self {
        self.hyperlink = Some(hyperlink);
        self
    }
}

/// Placeholder role (`p:ph type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderType {
    Title,
    Body,
    CenteredTitle,
    Subtitle,
    DateTime,
    SlideNumber,
    Footer,
    Header,
    Object,
    Chart,
    Table,
    ClipArt,
    Diagram,
    Media,
    SlideImage,
    Picture,
}

impl PlaceholderType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Body => "body",
            Self::CenteredTitle => "ctrTitle",
            Self::Subtitle => "subTitle",
            Self::DateTime => "dt",
            Self::SlideNumber => "sldNum",
            Self::Footer => "ftr",
            Self::Header => "hdr",
            Self::Object => "obj",
            Self::Chart => "chart",
            Self::Table => "tbl",
            Self::ClipArt => "clipArt",
            Self::Diagram => "dgm",
            Self::Media => "media",
            Self::SlideImage => "sldImg",
            Self::Picture => "pic",
        }
    }
}

/// Binding of a text box to a layout placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    pub kind: PlaceholderType,
    pub index: Option<u32>,
}

impl Placeholder {
    pub fn new(kind: PlaceholderType) -> Self {
        Self { kind, index: None }
    }

    pub fn with_index(mut self, index: u32) -> Self {
        self.index = Some(index);
        self
    }
}

/// Text autofit behaviour.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AutoFit {
    None,
    /// Shrink text on overflow. Values are percentages.
    Normal {
        font_scale: Option<f64>,
        line_space_reduction: Option<f64>,
    },
    /// Resize the shape to fit its text
    #[default]
    Shape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextWrap {
    #[default]
    Square,
    None,
}

impl TextWrap {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::None => "none",
        }
    }
}

/// Overflow handling. `Ellipsis` only applies vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    #[default]
    Overflow,
    Clip,
    Ellipsis,
}

impl Overflow {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Overflow => "overflow",
            Self::Clip => "clip",
            Self::Ellipsis => "ellipsis",
        }
    }
}

/// Text body insets, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Insets {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Default for Insets {
    fn default() -> Self {
        Self {
            top: 4.8,
            bottom: 4.8,
            left: 9.6,
            right: 9.6,
        }
    }
}

/// Rich text shape.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    pub props: ShapeProps,
    pub paragraphs: Vec<Paragraph>,
    pub placeholder: Option<Placeholder>,
    pub autofit: AutoFit,
    pub wrap: TextWrap,
    pub horizontal_overflow: Overflow,
    pub vertical_overflow: Overflow,
    pub upright: bool,
    pub vertical: bool,
    pub insets: Insets,
    pub columns: u32,
}

impl TextBox {
    pub fn new(props: ShapeProps) -> Self {
        Self {
            props,
            paragraphs: Vec::new(),
            placeholder: None,
            autofit: AutoFit::default(),
            wrap: TextWrap::default(),
            horizontal_overflow: Overflow::default(),
            vertical_overflow: Overflow::default(),
            upright: false,
            vertical: false,
            insets: Insets::default(),
            columns: 1,
        }
    }

    pub fn with_paragraph(mut self, paragraph: Paragraph) -> Self {
        self.paragraphs.push(paragraph);
        self
    }

    pub fn with_placeholder(mut self, placeholder: Placeholder) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn with_autofit(mut self, autofit: AutoFit) -> Self {
        self.autofit = autofit;
        self
    }

    pub fn with_columns(mut self, columns: u32) -> Self {
        self.columns = columns;
        self
    }

    /// Anchor taken from the first paragraph, if it names one.
    pub fn anchor(&self) -> Option<VerticalAlignment> {
        self.paragraphs
            .first()
            .map(|p| p.alignment.vertical)
            .filter(|v| v.is_anchor())
    }

    /// Placeholder kind when the box renders a slide number or date field.
    pub fn field_placeholder(&self) -> Option<PlaceholderType> {
        self.placeholder
            .map(|ph| ph.kind)
            .filter(|kind| matches!(kind, PlaceholderType::SlideNumber | PlaceholderType::DateTime))
    }
}

/// Straight connector. Negative width or height flips the line.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub props: ShapeProps,
}

impl Line {
    pub fn new(props: ShapeProps) -> Self {
        Self { props }
    }
}

/// Reference to a chart part written elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRef {
    pub props: ShapeProps,
    /// Package-wide chart number
    pub index: u32,
    pub relation_id: Option<RelId>,
}

impl ChartRef {
    pub fn new(props: ShapeProps, index: u32) -> Self {
        Self {
            props,
            index,
            relation_id: None,
        }
    }

    /// Relationship target, relative to the slide part.
    pub fn target(&self) -> String {
        format!("../charts/chart{}.xml", self.index)
    }
}

/// Encoded format of generated image data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Gif => "gif",
        }
    }
}

/// Where an image's bytes come from.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    /// Image file on disk
    File { path: PathBuf, index: u32 },
    /// Image data produced in memory
    Generated {
        name: String,
        format: ImageFormat,
        index: u32,
    },
}

impl ImageSource {
    /// Package-unique media file name: stem, index, extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidewright::ooxml::pptx::model::ImageSource;
    /// let source = ImageSource::File { path: "img/logo.png".into(), index: 3 };
    /// assert_eq!(source.indexed_filename().unwrap(), "logo3.png");
    /// ```
    pub fn indexed_filename(&self) -> Result<String> {
        match self {
            Self::File { path, index } => {
                let stem = path.file_stem().and_then(|s| s.to_str());
                let extension = path.extension().and_then(|s| s.to_str());
                match (stem, extension) {
                    (Some(stem), Some(extension)) => Ok(format!("{stem}{index}.{extension}")),
                    _ => Err(SlideError::ResourceLookup(format!(
                        "cannot derive a media name from '{}'",
                        path.display()
                    ))),
                }
            },
            Self::Generated {
                name,
                format,
                index,
            } => {
                let stem = if name.is_empty() { "image" } else { name };
                Ok(format!("{stem}{index}.{}", format.extension()))
            },
        }
    }

    /// Relationship target, relative to the slide part.
    pub fn target(&self) -> Result<String> {
        Ok(format!("../media/{}", self.indexed_filename()?.replace(' ', "_")))
    }
}

/// Picture shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRef {
    pub props: ShapeProps,
    pub source: ImageSource,
    pub relation_id: Option<RelId>,
}

impl ImageRef {
    pub fn new(props: ShapeProps, source: ImageSource) -> Self {
        Self {
            props,
            source,
            relation_id: None,
        }
    }
}

/// Container of child shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub props: ShapeProps,
    pub shapes: Vec<Shape>,
}

impl Group {
    pub fn new(props: ShapeProps) -> Self {
        Self {
            props,
            shapes: Vec::new(),
        }
    }

    pub fn with_shape(mut self, shape: impl Into<Shape>) -> Self {
        self.shapes.push(shape.into());
        self
    }
}

/// Shape kind the writer does not emit (media, SmartArt, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct OtherShape {
    pub props: ShapeProps,
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    TextBox(TextBox),
    Table(Table),
    Line(Line),
    Chart(ChartRef),
    Image(ImageRef),
    Group(Group),
    Other(OtherShape),
}

impl Shape {
    pub fn props(&self) -> &ShapeProps {
        match self {
            Shape::TextBox(s) => &s.props,
            Shape::Table(s) => &s.props,
            Shape::Line(s) => &s.props,
            Shape::Chart(s) => &s.props,
            Shape::Image(s) => &s.props,
            Shape::Group(s) => &s.props,
            Shape::Other(s) => &s.props,
        }
    }

    pub fn props_mut(&mut self) -> &mut ShapeProps {
        match self {
            Shape::TextBox(s) => &mut s.props,
            Shape::Table(s) => &mut s.props,
            Shape::Line(s) => &mut s.props,
            Shape::Chart(s) => &mut s.props,
            Shape::Image(s) => &mut s.props,
            Shape::Group(s) => &mut s.props,
            Shape::Other(s) => &mut s.props,
        }
    }

    /// Short kind name, used in diagnostics.
    pub fn kind_name(&self) -> &str {
        match self {
            Shape::TextBox(_) => "text box",
            Shape::Table(_) => "table",
            Shape::Line(_) => "line",
            Shape::Chart(_) => "chart",
            Shape::Image(_) => "image",
            Shape::Group(_) => "group",
            Shape::Other(s) => &s.kind,
        }
    }
}

impl From<TextBox> for Shape {
    fn from(shape: TextBox) -> Self {
        Shape::TextBox(shape)
    }
}

impl From<Table> for Shape {
    fn from(shape: Table) -> Self {
        Shape::Table(shape)
    }
}

impl From<Line> for Shape {
    fn from(shape: Line) -> Self {
        Shape::Line(shape)
    }
}

impl From<ChartRef> for Shape {
    fn from(shape: ChartRef) -> Self {
        Shape::Chart(shape)
    }
}

impl From<ImageRef> for Shape {
    fn from(shape: ImageRef) -> Self {
        Shape::Image(shape)
    }
}

impl From<Group> for Shape {
    fn from(shape: Group) -> Self {
        Shape::Group(shape)
    }
}

impl From<OtherShape> for Shape {
    fn from(shape: OtherShape) -> Self {
        Shape::Other(shape)
    }
}
