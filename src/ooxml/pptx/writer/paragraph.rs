//! Paragraph, bullet and run markup.
//!
//! Only [`TextElement::Run`] carries an `a:rPr` block. Plain text elements
//! inherit their formatting and are written as a bare `a:r`.

use crate::common::unit::px_to_emu;
use crate::common::xml::{XmlWriter, encode_control_characters};
use crate::ooxml::error::{Result, SlideError};
use crate::ooxml::pptx::model::{Bullet, Hyperlink, Paragraph, TextElement, TextRun};
use crate::ooxml::pptx::writer::options::WriterOptions;

/// Write each paragraph as an `a:p` element.
pub fn write_paragraphs(
    xml: &mut XmlWriter,
    paragraphs: &[Paragraph],
    options: &WriterOptions,
) -> Result<()> {
    for paragraph in paragraphs {
        write_paragraph(xml, paragraph, options)?;
    }
    Ok(())
}

/// Write paragraphs into a text body, which needs at least one `a:p`.
pub fn write_text_body_paragraphs(
    xml: &mut XmlWriter,
    paragraphs: &[Paragraph],
    options: &WriterOptions,
) -> Result<()> {
    if paragraphs.is_empty() {
        return xml.write_element("a:p");
    }
    write_paragraphs(xml, paragraphs, options)
}

pub fn write_paragraph(xml: &mut XmlWriter, paragraph: &Paragraph, options: &WriterOptions) -> Result<()> {
    xml.start_element("a:p")?;
    write_paragraph_properties(xml, paragraph)?;

    for element in &paragraph.elements {
        match element {
            TextElement::Break => xml.write_element("a:br")?,
            TextElement::Run(run) => {
                xml.start_element("a:r")?;
                write_run_properties(xml, run, options)?;
                write_text(xml, &run.text)?;
                xml.end_element()?;
            },
            TextElement::Text(text) => {
                xml.start_element("a:r")?;
                write_text(xml, text)?;
                xml.end_element()?;
            },
        }
    }

    xml.end_element()
}

fn write_paragraph_properties(xml: &mut XmlWriter, paragraph: &Paragraph) -> Result<()> {
    let alignment = &paragraph.alignment;
    xml.start_element("a:pPr")?;
    xml.write_attribute("algn", alignment.horizontal.as_str())?;
    xml.write_attribute("fontAlgn", alignment.vertical.as_str())?;
    xml.write_int_attribute("marL", px_to_emu(alignment.margin_left))?;
    xml.write_int_attribute("marR", px_to_emu(alignment.margin_right))?;
    xml.write_int_attribute("indent", px_to_emu(alignment.indent))?;
    xml.write_int_attribute("lvl", alignment.level)?;

    match &paragraph.bullet {
        Bullet::None => {},
        Bullet::Character { font, character } => {
            write_bullet_font(xml, font)?;
            let mut buf = [0u8; 4];
            xml.start_element("a:buChar")?;
            xml.write_attribute("char", character.encode_utf8(&mut buf))?;
            xml.end_element()?;
        },
        Bullet::Numbered {
            font,
            scheme,
            start_at,
        } => {
            write_bullet_font(xml, font)?;
            xml.start_element("a:buAutoNum")?;
            xml.write_attribute("type", scheme.as_str())?;
            if *start_at != 1 {
                xml.write_int_attribute("startAt", *start_at)?;
            }
            xml.end_element()?;
        },
    }

    xml.end_element()
}

fn write_bullet_font(xml: &mut XmlWriter, font: &str) -> Result<()> {
    xml.start_element("a:buFont")?;
    xml.write_attribute("typeface", font)?;
    xml.end_element()
}

fn write_run_properties(xml: &mut XmlWriter, run: &TextRun, options: &WriterOptions) -> Result<()> {
    let font = &run.font;
    let language = run.language.as_deref().unwrap_or(&options.default_language);

    xml.start_element("a:rPr")?;
    xml.write_attribute("lang", language)?;
    xml.write_attribute("b", if font.bold { "1" } else { "0" })?;
    xml.write_attribute("i", if font.italic { "1" } else { "0" })?;
    xml.write_attribute(
        "strike",
        if font.strikethrough {
            "sngStrike"
        } else {
            "noStrike"
        },
    )?;
    xml.write_int_attribute("sz", (font.size * 100.0).round() as i64)?;
    xml.write_attribute("u", font.underline.as_str())?;
    xml.write_int_attribute_opt("baseline", font.baseline.offset())?;

    // Run colors carry no alpha.
    xml.start_element("a:solidFill")?;
    xml.start_element("a:srgbClr")?;
    xml.write_attribute("val", &font.color.rgb_hex())?;
    xml.end_element()?;
    xml.end_element()?;

    xml.start_element("a:latin")?;
    xml.write_attribute("typeface", &font.name)?;
    xml.end_element()?;

    if let Some(link) = &run.hyperlink {
        write_hyperlink(xml, link, "text run")?;
    }

    xml.end_element()
}

fn write_text(xml: &mut XmlWriter, text: &str) -> Result<()> {
    xml.start_element("a:t")?;
    xml.write_cdata(&encode_control_characters(text))?;
    xml.end_element()
}

/// Write `a:hlinkClick`.
///
/// Internal actions without a target slide have no relationship and are
/// written with an empty `r:id`. Any other link must already carry its id.
///
/// # Arguments
/// * `owner` - Name used in the error when the id is missing
pub fn write_hyperlink(xml: &mut XmlWriter, link: &Hyperlink, owner: &str) -> Result<()> {
    let r_id = match link.relation_id {
        Some(id) => id.to_string(),
        None if link.is_internal() && link.slide_number.is_none() => String::new(),
        None => {
            return Err(SlideError::MissingRelationship {
                shape: owner.to_string(),
                kind: "hyperlink",
            });
        },
    };

    xml.start_element("a:hlinkClick")?;
    xml.write_attribute("r:id", &r_id)?;
    xml.write_attribute("tooltip", &link.tooltip)?;
    xml.write_attribute_if(link.is_internal(), "action", &link.url)?;
    xml.end_element()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::RelId;
    use crate::ooxml::pptx::model::{
        Alignment, AutoNumberScheme, Baseline, Color, Font, HorizontalAlignment, Underline,
    };

    fn render(paragraphs: &[Paragraph]) -> String {
        let mut xml = XmlWriter::new();
        write_paragraphs(&mut xml, paragraphs, &WriterOptions::default()).unwrap();
        String::from_utf8(xml.into_bytes().unwrap()).unwrap()
    }

    #[test]
    fn test_paragraph_properties_always_written() {
        let out = render(&[Paragraph::new()]);
        assert_eq!(
            out,
            r#"<a:p><a:pPr algn="l" fontAlgn="base" marL="0" marR="0" indent="0" lvl="0"/></a:p>"#
        );
    }

    #[test]
    fn test_alignment_in_native_units() {
        let alignment = Alignment::horizontal(HorizontalAlignment::Center)
            .with_margins(10.0, 5.0)
            .with_indent(-2.0)
            .with_level(2);
        let out = render(&[Paragraph::new().with_alignment(alignment)]);
        assert!(out.contains(r#"algn="ctr" fontAlgn="base" marL="95250" marR="47625" indent="-19050" lvl="2""#));
    }

    #[test]
    fn test_bullets() {
        let out = render(&[Paragraph::new().with_bullet(Bullet::character('•'))]);
        assert!(out.contains(r#"<a:buFont typeface="Calibri"/><a:buChar char="•"/>"#));

        let out = render(&[Paragraph::new().with_bullet(Bullet::numbered(AutoNumberScheme::RomanUcPeriod))]);
        assert!(out.contains(r#"<a:buAutoNum type="romanUcPeriod"/>"#));

        let numbered = Bullet::Numbered {
            font: "Arial".to_string(),
            scheme: AutoNumberScheme::ArabicPeriod,
            start_at: 4,
        };
        let out = render(&[Paragraph::new().with_bullet(numbered)]);
        assert!(out.contains(r#"<a:buFont typeface="Arial"/><a:buAutoNum type="arabicPeriod" startAt="4"/>"#));
    }

    #[test]
    fn test_run_properties() {
        let font = Font::default()
            .with_name("Georgia")
            .with_size(12.5)
            .with_bold(true)
            .with_underline(Underline::Double)
            .with_baseline(Baseline::Superscript)
            .with_color(Color::rgb(0x11, 0x22, 0x33));
        let out = render(&[Paragraph::new().with_run(TextRun::new("x").with_font(font))]);
        assert!(out.contains(concat!(
            r#"<a:rPr lang="en-US" b="1" i="0" strike="noStrike" sz="1250" u="dbl" baseline="30000">"#,
            r#"<a:solidFill><a:srgbClr val="112233"/></a:solidFill><a:latin typeface="Georgia"/></a:rPr>"#,
            r#"<a:t><![CDATA[x]]></a:t>"#
        )));
    }

    #[test]
    fn test_run_language_override() {
        let run = TextRun::new("hallo").with_language("de-DE");
        assert!(render(&[Paragraph::new().with_run(run)]).contains(r#"lang="de-DE""#));
    }

    #[test]
    fn test_plain_text_has_no_run_properties() {
        let out = render(&[Paragraph::new().with_text("plain").with_break().with_text("b")]);
        assert!(!out.contains("a:rPr"));
        assert!(out.contains(
            "<a:r><a:t><![CDATA[plain]]></a:t></a:r><a:br/><a:r><a:t><![CDATA[b]]></a:t></a:r>"
        ));
    }

    #[test]
    fn test_control_characters_encoded() {
        let out = render(&[Paragraph::new().with_text("a\u{7}b")]);
        assert!(out.contains("<![CDATA[a_x0007_b]]>"));
    }

    #[test]
    fn test_hyperlinks() {
        let mut external = Hyperlink::new("https://example.com").with_tooltip("go");
        external.relation_id = Some(RelId::new(4));
        let out = render(&[Paragraph::new().with_run(TextRun::new("x").with_hyperlink(external))]);
        assert!(out.contains(r#"<a:hlinkClick r:id="rId4" tooltip="go"/></a:rPr>"#));

        let action = Hyperlink::new("ppaction://hlinkshowjump?jump=firstslide");
        let out = render(&[Paragraph::new().with_run(TextRun::new("x").with_hyperlink(action))]);
        assert!(out.contains(r#"<a:hlinkClick r:id="" tooltip="" action="ppaction://hlinkshowjump?jump=firstslide"/>"#));
    }

    #[test]
    fn test_unassigned_hyperlink_fails() {
        let run = TextRun::new("x").with_hyperlink(Hyperlink::new("https://example.com"));
        let mut xml = XmlWriter::new();
        let result = write_paragraphs(&mut xml, &[Paragraph::new().with_run(run)], &WriterOptions::default());
        assert!(matches!(result, Err(SlideError::MissingRelationship { kind: "hyperlink", .. })));
    }

    #[test]
    fn test_empty_text_body_gets_paragraph() {
        let mut xml = XmlWriter::new();
        write_text_body_paragraphs(&mut xml, &[], &WriterOptions::default()).unwrap();
        assert_eq!(String::from_utf8(xml.into_bytes().unwrap()).unwrap(), "<a:p/>");
    }
}
