use std::borrow::Cow;

/// Replaces characters that may not appear in an XML 1.0 document with
/// U+FFFD. Borrows when nothing needs replacing.
pub fn make_valid_xml(s: &str) -> Cow<'_, str> {
    if s.chars().all(is_valid_xml_char) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(
        s.chars()
            .map(|c| if is_valid_xml_char(c) { c } else { '\u{FFFD}' })
            .collect(),
    )
}

fn is_valid_xml_char(c: char) -> bool {
    matches!(c,
        '\u{0009}' | '\u{000A}' | '\u{000D}' |
        '\u{0020}'..='\u{D7FF}' |
        '\u{E000}'..='\u{FFFD}' |
        '\u{10000}'..='\u{10FFFF}'
    )
}

/// True when run text would lose whitespace without `xml:space="preserve"`.
pub fn needs_space_preserve(text: &str) -> bool {
    text.starts_with(char::is_whitespace)
        || text.ends_with(char::is_whitespace)
        || text.contains("  ")
        || text.contains(['\t', '\n', '\r'])
}
