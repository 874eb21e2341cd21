/// A reference to a single line of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// Zero-based line number.
    pub index: usize,
    /// Line text without its `\n`, and without a `\r` just before it.
    pub text: &'a str,
}

/// Splits text on `\n`, keeping empty lines as their own units.
///
/// A document without a trailing newline still yields its last line, and a
/// trailing newline yields one final empty line.
pub fn lines_with_index(text: &str) -> impl Iterator<Item = LineRef<'_>> {
    text.split('\n').enumerate().map(|(index, raw)| LineRef {
        index,
        text: raw.strip_suffix('\r').unwrap_or(raw),
    })
}
