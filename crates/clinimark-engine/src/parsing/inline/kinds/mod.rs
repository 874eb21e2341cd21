//! # Inline Kinds
//!
//! Inline span types that own their syntax delimiters. The scanner and the
//! block classifier call these; neither hardcodes `**`, `*`, `_` or `` ` ``.
//!
//! ## Types
//!
//! - **`Strong`**: `MARKER = "**"`
//! - **`Emphasis`**: `MARKERS = ['*', '_']`, opener and closer need not agree
//! - **`CodeSpan`**: `TICK = '`'`

pub mod code_span;
pub mod emphasis;
pub mod strong;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use strong::Strong;

/// Every character that may begin an inline span.
pub const SPECIALS: [char; 3] = [Emphasis::MARKERS[0], Emphasis::MARKERS[1], CodeSpan::TICK];

/// A delimited span matched at the very start of a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimitedMatch<'a> {
    /// Text between the delimiters.
    pub inner: &'a str,
    /// Byte length of the whole span, delimiters included.
    pub len: usize,
}

/// Characters that end a line for span matching purposes. Span interiors never
/// cross one of these.
pub fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Matches an opener of `open_len` bytes (already checked by the caller), the
/// shortest non-empty interior, then a closer recognised by `closer`, which
/// returns the closer's byte length when `rest` starts with one.
pub fn match_delimited(
    s: &str,
    open_len: usize,
    closer: fn(&str) -> Option<usize>,
) -> Option<DelimitedMatch<'_>> {
    let body = s.get(open_len..)?;
    let mut chars = body.char_indices();

    // interior holds at least one character
    let (_, first) = chars.next()?;
    if is_line_terminator(first) {
        return None;
    }

    for (i, c) in chars {
        if let Some(close_len) = closer(&body[i..]) {
            return Some(DelimitedMatch {
                inner: &body[..i],
                len: open_len + i + close_len,
            });
        }
        if is_line_terminator(c) {
            return None;
        }
    }
    None
}
