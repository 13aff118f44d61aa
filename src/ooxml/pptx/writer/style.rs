//! DrawingML style blocks: colors, fills, outlines and shadows.

use crate::common::unit::{nonzero_angle, pt_to_emu, px_to_emu};
use crate::common::xml::XmlWriter;
use crate::ooxml::error::Result;
use crate::ooxml::pptx::model::{Border, Color, Fill, GradientKind, LineStyle, Shadow};

/// Write `a:srgbClr` with an `a:alpha` child.
///
/// `alpha` is a percentage; `None` takes it from the color itself.
pub fn write_color(xml: &mut XmlWriter, color: &Color, alpha: Option<u8>) -> Result<()> {
    let alpha = alpha.unwrap_or_else(|| color.alpha_percent());
    xml.start_element("a:srgbClr")?;
    xml.write_attribute("val", &color.rgb_hex())?;
    xml.start_element("a:alpha")?;
    xml.write_int_attribute("val", i64::from(alpha) * 1000)?;
    xml.end_element()?;
    xml.end_element()
}

pub fn write_solid_fill(xml: &mut XmlWriter, color: &Color) -> Result<()> {
    xml.start_element("a:solidFill")?;
    write_color(xml, color, None)?;
    xml.end_element()
}

/// Write a fill. [`Fill::None`] writes nothing.
pub fn write_fill(xml: &mut XmlWriter, fill: &Fill) -> Result<()> {
    match fill {
        Fill::None => Ok(()),
        Fill::Solid(color) => write_solid_fill(xml, color),
        Fill::Gradient {
            kind,
            rotation,
            start,
            end,
        } => {
            xml.start_element("a:gradFill")?;
            xml.start_element("a:gsLst")?;
            for (pos, color) in [(0, start), (100_000, end)] {
                xml.start_element("a:gs")?;
                xml.write_int_attribute("pos", pos)?;
                write_color(xml, color, None)?;
                xml.end_element()?;
            }
            xml.end_element()?;
            match kind {
                GradientKind::Linear => {
                    xml.start_element("a:lin")?;
                    xml.write_int_attribute_opt("ang", nonzero_angle(*rotation))?;
                    xml.write_attribute("scaled", "0")?;
                    xml.end_element()?;
                },
                GradientKind::Path => {
                    xml.start_element("a:path")?;
                    xml.write_attribute("path", "circle")?;
                    xml.end_element()?;
                },
            }
            xml.end_element()
        },
        Fill::Pattern {
            preset,
            foreground,
            background,
        } => {
            xml.start_element("a:pattFill")?;
            xml.write_attribute("prst", preset.as_str())?;
            xml.start_element("a:fgClr")?;
            write_color(xml, foreground, None)?;
            xml.end_element()?;
            xml.start_element("a:bgClr")?;
            write_color(xml, background, None)?;
            xml.end_element()?;
            xml.end_element()
        },
    }
}

/// Write an outline as `a:ln{suffix}`.
///
/// Shape outlines use an empty suffix; table cells use `L`, `R`, `T`, `B`,
/// `TlToBr` and `BlToTr`. A border with [`LineStyle::None`] is still written,
/// as an unfilled line.
pub fn write_border(xml: &mut XmlWriter, border: &Border, suffix: &str) -> Result<()> {
    let cmpd = match border.line_style {
        LineStyle::None => LineStyle::Single.as_str(),
        style => style.as_str(),
    };

    xml.start_element(&format!("a:ln{suffix}"))?;
    xml.write_int_attribute("w", pt_to_emu(f64::from(border.line_width)))?;
    xml.write_attribute("cap", "flat")?;
    xml.write_attribute("cmpd", cmpd)?;
    xml.write_attribute("algn", "ctr")?;

    if border.is_visible() {
        write_solid_fill(xml, &border.color)?;
    } else {
        xml.write_element("a:noFill")?;
    }

    xml.start_element("a:prstDash")?;
    xml.write_attribute("val", border.dash_style.as_str())?;
    xml.end_element()?;

    xml.write_element("a:round")?;

    for end in ["a:headEnd", "a:tailEnd"] {
        xml.start_element(end)?;
        xml.write_attribute("type", "none")?;
        xml.write_attribute("w", "med")?;
        xml.write_attribute("len", "med")?;
        xml.end_element()?;
    }

    xml.end_element()
}

/// Write an outer shadow. Invisible shadows write nothing.
pub fn write_shadow(xml: &mut XmlWriter, shadow: &Shadow) -> Result<()> {
    if !shadow.visible {
        return Ok(());
    }

    xml.start_element("a:effectLst")?;
    xml.start_element("a:outerShdw")?;
    xml.write_int_attribute("blurRad", px_to_emu(shadow.blur_radius))?;
    xml.write_int_attribute("dist", px_to_emu(shadow.distance))?;
    xml.write_int_attribute_opt("dir", nonzero_angle(shadow.direction))?;
    xml.write_attribute("algn", shadow.alignment.as_str())?;
    xml.write_attribute("rotWithShape", "0")?;
    write_color(xml, &shadow.color, Some(shadow.alpha))?;
    xml.end_element()?;
    xml.end_element()
}
