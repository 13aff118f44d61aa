//! Paragraphs, runs and their formatting.

use super::style::Color;
use crate::ooxml::opc::RelId;

/// Horizontal paragraph alignment (`algn`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Right,
    Center,
    Justify,
    Distributed,
}

impl HorizontalAlignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Right => "r",
            Self::Center => "ctr",
            Self::Justify => "just",
            Self::Distributed => "dist",
        }
    }
}

/// Vertical alignment. Used as `fontAlgn` on paragraphs and as the
/// `anchor` of text bodies and table cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlignment {
    #[default]
    Base,
    Auto,
    Bottom,
    Center,
    Top,
}

impl VerticalAlignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Auto => "auto",
            Self::Bottom => "b",
            Self::Center => "ctr",
            Self::Top => "t",
        }
    }

    /// Whether the value is meaningful as a body or cell anchor.
    #[inline]
    pub fn is_anchor(self) -> bool {
        !matches!(self, Self::Base | Self::Auto)
    }
}

/// Paragraph alignment and indentation. Distances are in pixels.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Alignment {
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
    pub margin_left: f64,
    pub margin_right: f64,
    pub indent: f64,
    pub level: u8,
}

impl Alignment {
    pub fn horizontal(horizontal: HorizontalAlignment) -> Self {
        Self {
            horizontal,
            ..Self::default()
        }
    }

    pub fn with_vertical(mut self, vertical: VerticalAlignment) -> Self {
        self.vertical = vertical;
        self
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn with_margins(mut self, left: f64, right: f64) -> Self {
        self.margin_left = left;
        self.margin_right = right;
        self
    }

    pub fn with_indent(mut self, indent: f64) -> Self {
        self.indent = indent;
        self
    }
}

/// Auto numbering schemes for numbered bullets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoNumberScheme {
    #[default]
    ArabicPeriod,
    ArabicParenR,
    ArabicPlain,
    AlphaLcPeriod,
    AlphaUcPeriod,
    AlphaLcParenR,
    RomanLcPeriod,
    RomanUcPeriod,
}

impl AutoNumberScheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ArabicPeriod => "arabicPeriod",
            Self::ArabicParenR => "arabicParenR",
            Self::ArabicPlain => "arabicPlain",
            Self::AlphaLcPeriod => "alphaLcPeriod",
            Self::AlphaUcPeriod => "alphaUcPeriod",
            Self::AlphaLcParenR => "alphaLcParenR",
            Self::RomanLcPeriod => "romanLcPeriod",
            Self::RomanUcPeriod => "romanUcPeriod",
        }
    }
}

/// Paragraph bullet.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Bullet {
    #[default]
    None,
    Character {
        font: String,
        character: char,
    },
    Numbered {
        font: String,
        scheme: AutoNumberScheme,
        start_at: u32,
    },
}

impl Bullet {
    pub fn character(character: char) -> Self {
        Self::Character {
            font: "Calibri".to_string(),
            character,
        }
    }

    pub fn numbered(scheme: AutoNumberScheme) -> Self {
        Self::Numbered {
            font: "Calibri".to_string(),
            scheme,
            start_at: 1,
        }
    }
}

/// Underline style (`u`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Underline {
    #[default]
    None,
    Single,
    Double,
    Dash,
    Dotted,
    Heavy,
    Wavy,
    Words,
}

impl Underline {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Single => "sng",
            Self::Double => "dbl",
            Self::Dash => "dash",
            Self::Dotted => "dotted",
            Self::Heavy => "heavy",
            Self::Wavy => "wavy",
            Self::Words => "words",
        }
    }
}

/// Vertical text position. Superscript and subscript are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Baseline {
    #[default]
    Normal,
    Superscript,
    Subscript,
}

impl Baseline {
    /// `baseline` attribute value, in thousandths of a percent.
    pub fn offset(self) -> Option<i64> {
        match self {
            Self::Normal => None,
            Self::Superscript => Some(30_000),
            Self::Subscript => Some(-25_000),
        }
    }
}

/// Character formatting of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub name: String,
    /// Size in points
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: Underline,
    pub baseline: Baseline,
    pub color: Color,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            name: "Calibri".to_string(),
            size: 10.0,
            bold: false,
            italic: false,
            strikethrough: false,
            underline: Underline::None,
            baseline: Baseline::Normal,
            color: Color::BLACK,
        }
    }
}

impl Font {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_underline(mut self, underline: Underline) -> Self {
        self.underline = underline;
        self
    }

    pub fn with_baseline(mut self, baseline: Baseline) -> Self {
        self.baseline = baseline;
        self
    }
}

/// Link attached to a shape or a run.
///
/// URLs starting with `ppaction://` are actions inside the presentation;
/// everything else is an external target.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Hyperlink {
    pub url: String,
    pub tooltip: String,
    /// Target slide for `ppaction://hlinksldjump` style actions
    pub slide_number: Option<u32>,
    /// Filled in by relationship assignment
    pub relation_id: Option<RelId>,
}

impl Hyperlink {
    pub const INTERNAL_PREFIX: &'static str = "ppaction://";

    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Jump to another slide of the presentation (1-based).
    pub fn to_slide(slide_number: u32) -> Self {
        Self {
            url: "ppaction://hlinksldjump".to_string(),
            slide_number: Some(slide_number),
            ..Self::default()
        }
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = tooltip.into();
        self
    }

    #[inline]
    pub fn is_internal(&self) -> bool {
        self.url.starts_with(Self::INTERNAL_PREFIX)
    }
}

/// Formatted run of text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextRun {
    pub text: String,
    pub font: Font,
    /// Overrides the writer's default language
    pub language: Option<String>,
    pub hyperlink: Option<Hyperlink>,
}

impl TextRun {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_hyperlink(mut self, hyperlink: Hyperlink) -> Self {
        self.hyperlink = Some(hyperlink);
        self
    }
}

/// Paragraph child.
#[derive(Debug, Clone, PartialEq)]
pub enum TextElement {
    /// Run carrying its own character properties
    Run(TextRun),
    /// Plain text that inherits formatting from the paragraph
    Text(String),
    /// Line break inside the paragraph
    Break,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    pub alignment: Alignment,
    pub bullet: Bullet,
    pub elements: Vec<TextElement>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paragraph holding a single default-formatted run.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new().with_run(TextRun::new(text))
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_bullet(mut self, bullet: Bullet) -> Self {
        self.bullet = bullet;
        self
    }

    pub fn with_run(mut self, run: TextRun) -> Self {
        self.elements.push(TextElement::Run(run));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.elements.push(TextElement::Text(text.into()));
        self
    }

    pub fn with_break(mut self) -> Self {
        self.elements.push(TextElement::Break);
        self
    }

    /// Runs with a hyperlink, in document order.
    pub fn hyperlinks_mut(&mut self) -> impl Iterator<Item = &mut Hyperlink> {
        self.elements.iter_mut().filter_map(|element| match element {
            TextElement::Run(run) => run.hyperlink.as_mut(),
            TextElement::Text(_) | TextElement::Break => None,
        })
    }

    /// Concatenated text, breaks rendered as `\n`.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for element in &self.elements {
            match element {
                TextElement::Run(run) => out.push_str(&run.text),
                TextElement::Text(text) => out.push_str(text),
                TextElement::Break => out.push('\n'),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_hyperlink() {
        assert!(Hyperlink::to_slide(3).is_internal());
        assert!(!Hyperlink::new("https://example.com").is_internal());
    }

    #[test]
    fn test_paragraph_text() {
        let p = Paragraph::new()
            .with_run(TextRun::new("a"))
            .with_break()
            .with_text("b");
        assert_eq!(p.text(), "a\nb");
    }

    #[test]
    fn test_baseline_offsets() {
        assert_eq!(Baseline::Normal.offset(), None);
        assert_eq!(Baseline::Superscript.offset(), Some(30_000));
        assert_eq!(Baseline::Subscript.offset(), Some(-25_000));
    }
}
