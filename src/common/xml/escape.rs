use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

/// C0 control characters that cannot appear literally in XML 1.0 text.
/// Tab, line feed and carriage return are legal and pass through.
static CONTROL_CHARACTERS: Lazy<Vec<String>> = Lazy::new(|| {
    (0u8..0x20)
        .filter(|b| !matches!(b, b'\t' | b'\n' | b'\r'))
        .map(|b| char::from(b).to_string())
        .collect()
});

static CONTROL_REPLACEMENTS: Lazy<Vec<String>> = Lazy::new(|| {
    (0u8..0x20)
        .filter(|b| !matches!(b, b'\t' | b'\n' | b'\r'))
        .map(|b| format!("_x{:04X}_", b))
        .collect()
});

// Static initialization: automaton is built only once, thread-safe
static CONTROL_ENCODER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(CONTROL_CHARACTERS.iter())
        .expect("Failed to build control character encoder")
});

/// Encode control characters as OOXML `_xHHHH_` escapes.
///
/// # Examples
///
/// ```
/// use slidewright::common::xml::encode_control_characters;
/// assert_eq!(encode_control_characters("a\u{1}b"), "a_x0001_b");
/// assert_eq!(encode_control_characters("tab\tok"), "tab\tok");
/// ```
#[inline]
pub fn encode_control_characters(s: &str) -> String {
    CONTROL_ENCODER.replace_all(s, CONTROL_REPLACEMENTS.as_slice())
}
