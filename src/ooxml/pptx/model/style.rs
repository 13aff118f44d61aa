//! Fill, outline, shadow and color types.

use std::fmt::Write;

/// ARGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub alpha: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

    /// Fully opaque color.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            alpha: 0xFF,
            red,
            green,
            blue,
        }
    }

    /// Color from a packed `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            alpha: (argb >> 24) as u8,
            red: (argb >> 16) as u8,
            green: (argb >> 8) as u8,
            blue: argb as u8,
        }
    }

    /// Parse `RRGGBB` or `AARRGGBB` hex notation.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidewright::ooxml::pptx::model::Color;
    /// assert_eq!(Color::from_hex("FF0000"), Some(Color::rgb(255, 0, 0)));
    /// assert_eq!(Color::from_hex("80FF0000").map(|c| c.alpha), Some(0x80));
    /// assert_eq!(Color::from_hex("red"), None);
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let value = u32::from_str_radix(hex, 16).ok()?;
        match hex.len() {
            6 => Some(Self::from_argb(0xFF00_0000 | value)),
            8 => Some(Self::from_argb(value)),
            _ => None,
        }
    }

    /// Uppercase `RRGGBB` value as written in `a:srgbClr`.
    pub fn rgb_hex(&self) -> String {
        let mut out = String::with_capacity(6);
        let _ = write!(out, "{:02X}{:02X}{:02X}", self.red, self.green, self.blue);
        out
    }

    /// Opacity as a whole percentage (0-100).
    pub fn alpha_percent(&self) -> u8 {
        (f64::from(self.alpha) / 255.0 * 100.0).round() as u8
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Gradient flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientKind {
    Linear,
    Path,
}

/// Preset pattern fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternPreset {
    Pct5,
    Pct10,
    Pct25,
    Pct50,
    Pct75,
    Horizontal,
    Vertical,
    DownDiagonal,
    UpDiagonal,
    Cross,
    DiagonalCross,
    SmallCheck,
    SmallGrid,
}

impl PatternPreset {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pct5 => "pct5",
            Self::Pct10 => "pct10",
            Self::Pct25 => "pct25",
            Self::Pct50 => "pct50",
            Self::Pct75 => "pct75",
            Self::Horizontal => "horz",
            Self::Vertical => "vert",
            Self::DownDiagonal => "dnDiag",
            Self::UpDiagonal => "upDiag",
            Self::Cross => "cross",
            Self::DiagonalCross => "diagCross",
            Self::SmallCheck => "smCheck",
            Self::SmallGrid => "smGrid",
        }
    }
}

/// Shape or cell fill.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Fill {
    /// Nothing is written; the layout or table style decides.
    #[default]
    None,
    Solid(Color),
    Gradient {
        kind: GradientKind,
        /// Direction of a linear gradient, in degrees
        rotation: f64,
        start: Color,
        end: Color,
    },
    Pattern {
        preset: PatternPreset,
        foreground: Color,
        background: Color,
    },
}

/// Compound line style (`cmpd`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    /// No outline
    None,
    #[default]
    Single,
    Double,
    ThickThin,
    ThinThick,
    Triple,
}

impl LineStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Single => "sng",
            Self::Double => "dbl",
            Self::ThickThin => "thickThin",
            Self::ThinThick => "thinThick",
            Self::Triple => "tri",
        }
    }
}

/// Preset dash pattern (`a:prstDash`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashStyle {
    #[default]
    Solid,
    Dash,
    DashDot,
    Dot,
    LargeDash,
    LargeDashDot,
    LargeDashDotDot,
    SysDash,
    SysDashDot,
    SysDashDotDot,
    SysDot,
}

impl DashStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dash => "dash",
            Self::DashDot => "dashDot",
            Self::Dot => "dot",
            Self::LargeDash => "lgDash",
            Self::LargeDashDot => "lgDashDot",
            Self::LargeDashDotDot => "lgDashDotDot",
            Self::SysDash => "sysDash",
            Self::SysDashDot => "sysDashDot",
            Self::SysDashDotDot => "sysDashDotDot",
            Self::SysDot => "sysDot",
        }
    }
}

/// Outline of a shape or one edge of a table cell.
///
/// `Border::default()` doubles as the "not explicitly set" value when table
/// cell edges are resolved against their neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Border {
    /// Width in points
    pub line_width: u32,
    pub line_style: LineStyle,
    pub dash_style: DashStyle,
    pub color: Color,
}

impl Default for Border {
    fn default() -> Self {
        Self {
            line_width: 1,
            line_style: LineStyle::Single,
            dash_style: DashStyle::Solid,
            color: Color::BLACK,
        }
    }
}

impl Border {
    /// Outline that is not drawn.
    pub fn none() -> Self {
        Self {
            line_style: LineStyle::None,
            ..Self::default()
        }
    }

    /// Single solid line.
    pub fn solid(line_width: u32, color: Color) -> Self {
        Self {
            line_width,
            color,
            ..Self::default()
        }
    }

    pub fn with_dash(mut self, dash_style: DashStyle) -> Self {
        self.dash_style = dash_style;
        self
    }

    pub fn with_line_style(mut self, line_style: LineStyle) -> Self {
        self.line_style = line_style;
        self
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.line_style != LineStyle::None
    }
}

/// Anchor of an outer shadow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadowAlignment {
    #[default]
    Bottom,
    BottomLeft,
    BottomRight,
    Center,
    Left,
    Right,
    Top,
    TopLeft,
    TopRight,
}

impl ShadowAlignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bottom => "b",
            Self::BottomLeft => "bl",
            Self::BottomRight => "br",
            Self::Center => "ctr",
            Self::Left => "l",
            Self::Right => "r",
            Self::Top => "t",
            Self::TopLeft => "tl",
            Self::TopRight => "tr",
        }
    }
}

/// Outer shadow.
#[derive(Debug, Clone, PartialEq)]
pub struct Shadow {
    pub visible: bool,
    /// Blur radius in pixels
    pub blur_radius: f64,
    /// Offset distance in pixels
    pub distance: f64,
    /// Direction in degrees
    pub direction: f64,
    pub alignment: ShadowAlignment,
    pub color: Color,
    /// Opacity percentage (0-100), overriding the color's own alpha
    pub alpha: u8,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            visible: false,
            blur_radius: 6.0,
            distance: 2.0,
            direction: 0.0,
            alignment: ShadowAlignment::Bottom,
            color: Color::BLACK,
            alpha: 50,
        }
    }
}

impl Shadow {
    /// A visible shadow with default geometry.
    pub fn visible() -> Self {
        Self {
            visible: true,
            ..Self::default()
        }
    }

    pub fn with_direction(mut self, direction: f64) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex() {
        assert_eq!(Color::rgb(0x12, 0xAB, 0x0F).rgb_hex(), "12AB0F");
        assert_eq!(Color::from_argb(0x80FF_0000).rgb_hex(), "FF0000");
        assert_eq!(Color::from_hex("12ab0f"), Some(Color::rgb(0x12, 0xAB, 0x0F)));
        assert_eq!(Color::from_hex("12345"), None);
    }

    #[test]
    fn test_alpha_percent() {
        assert_eq!(Color::BLACK.alpha_percent(), 100);
        assert_eq!(Color::from_argb(0x0000_0000).alpha_percent(), 0);
        assert_eq!(Color::from_argb(0x8000_0000).alpha_percent(), 50);
    }

    #[test]
    fn test_border_sentinel_equality() {
        assert_eq!(Border::default(), Border::default());
        assert_ne!(Border::solid(2, Color::BLACK), Border::default());
        assert_ne!(Border::none(), Border::default());
        assert!(!Border::none().is_visible());
    }
}
