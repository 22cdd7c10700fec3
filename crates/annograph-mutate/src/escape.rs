//! GraphQL string-literal escaping.

/// Escape text for embedding in a GraphQL string literal.
///
/// Exactly five characters are rewritten: backslash, double quote,
/// newline, carriage return, tab. Everything else passes through
/// untouched, including non-ASCII.
pub fn escape_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}
