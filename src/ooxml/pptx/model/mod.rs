//! In-memory presentation model read by the slide writer.

pub mod shape;
pub mod slide;
pub mod style;
pub mod table;
pub mod text;

pub use shape::{
    AutoFit, ChartRef, Group, ImageFormat, ImageRef, ImageSource, Insets, Line, OtherShape,
    Overflow, Placeholder, PlaceholderType, Shape, ShapeProps, TextBox, TextWrap,
};
pub use slide::{Background, Note, Slide};
pub use style::{
    Border, Color, DashStyle, Fill, GradientKind, LineStyle, PatternPreset, Shadow,
    ShadowAlignment,
};
pub use table::{CellBorders, Table, TableCell, TableRow};
pub use text::{
    Alignment, AutoNumberScheme, Baseline, Bullet, Font, HorizontalAlignment, Hyperlink,
    Paragraph, TextElement, TextRun, Underline, VerticalAlignment,
};
