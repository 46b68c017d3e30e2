//! Literal text for strings and numbers.

use std::fmt::Write;

use quill_codegen::Number;
use serde::{Deserialize, Serialize};

/// Preferred string delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuoteStyle {
    #[default]
    Double,
    Single,
}

impl QuoteStyle {
    pub fn as_char(self) -> char {
        match self {
            Self::Double => '"',
            Self::Single => '\'',
        }
    }

    fn other(self) -> Self {
        match self {
            Self::Double => Self::Single,
            Self::Single => Self::Double,
        }
    }
}

/// Quote and escape `value` so the literal evaluates back to `value`.
pub fn escape_string(value: &str, quote: QuoteStyle) -> String {
    let q = quote.as_char();
    let mut out = String::with_capacity(value.len() + 2);
    out.push(q);

    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{b}' => out.push_str("\\v"),
            '\u{c}' => out.push_str("\\f"),
            // `\0` followed by a digit would read as a legacy octal escape.
            '\0' if chars.peek().is_some_and(char::is_ascii_digit) => out.push_str("\\x00"),
            '\0' => out.push_str("\\0"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c == q => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                let _ = write!(out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }

    out.push(q);
    out
}

/// Wrap already-escaped source text in a delimiter without touching it.
///
/// The preferred quote is used unless the text contains it, in which case the
/// other quote is used. Text containing a line break or both quote kinds is
/// wrapped in backticks; unescaped `` ` `` and `${` are then escaped so the
/// template literal neither ends early nor interpolates.
pub fn raw_string(value: &str, quote: QuoteStyle) -> String {
    let has_preferred = value.contains(quote.as_char());
    let has_other = value.contains(quote.other().as_char());

    if value.contains(['\n', '\r']) || (has_preferred && has_other) {
        return template_literal(value);
    }

    let delimiter = if has_preferred {
        quote.other().as_char()
    } else {
        quote.as_char()
    };

    let mut out = String::with_capacity(value.len() + 2);
    out.push(delimiter);
    out.push_str(value);
    out.push(delimiter);
    out
}

fn template_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('`');

    // Whether the next character is preceded by an unpaired backslash.
    let mut escaped = false;
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '`' if !escaped => out.push_str("\\`"),
            '$' if !escaped && chars.peek() == Some(&'{') => out.push_str("\\$"),
            _ => out.push(c),
        }
        escaped = c == '\\' && !escaped;
    }

    out.push('`');
    out
}

/// Numeric literal text. Integers are exact; floats use the shortest form
/// that reads back to the same value.
pub fn format_number(value: Number) -> String {
    match value {
        Number::Int(_) | Number::UInt(_) => value.to_string(),
        Number::Float(v) if v.is_nan() => "NaN".to_string(),
        Number::Float(v) if v.is_infinite() => {
            if v > 0.0 {
                "Infinity".to_string()
            } else {
                "-Infinity".to_string()
            }
        }
        Number::Float(v) => {
            let magnitude = v.abs();
            if magnitude >= 1e21 || (magnitude != 0.0 && magnitude < 1e-6) {
                format!("{:e}", v)
            } else {
                v.to_string()
            }
        }
    }
}
