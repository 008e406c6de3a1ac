//! Quoting of item values for display

/// Wrap `value` in double quotes, escaping anything that would make the
/// output ambiguous or unreadable.
///
/// Backslashes and double quotes get a backslash, common control characters
/// use their short escapes (`\n`, `\t`, ...), remaining ASCII control bytes
/// become `\xNN` and other non-printable characters `\uNNNN` or `\UNNNNNNNN`.
/// Printable Unicode is kept as-is.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0B}' => out.push_str("\\v"),
            c if c.is_ascii_control() => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c if is_unprintable(c) => {
                let code = c as u32;
                if code > 0xFFFF {
                    out.push_str(&format!("\\U{code:08x}"));
                } else {
                    out.push_str(&format!("\\u{code:04x}"));
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

// C1 controls, spaces other than U+0020, soft hyphen, format characters
// that render invisibly, and the byte-order mark
fn is_unprintable(c: char) -> bool {
    c.is_control()
        || matches!(
            c,
            '\u{A0}'
                | '\u{AD}'
                | '\u{1680}'
                | '\u{2000}'..='\u{200F}'
                | '\u{2028}'..='\u{202F}'
                | '\u{205F}'..='\u{2064}'
                | '\u{3000}'
                | '\u{FEFF}'
        )
}
