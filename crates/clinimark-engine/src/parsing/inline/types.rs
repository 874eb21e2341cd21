use serde::Serialize;

/// One styled run of text within a single line.
///
/// Fragments own their text with the markdown delimiters already removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InlineFragment {
    /// Unstyled text, including any delimiter that failed to pair up.
    PlainText(String),
    /// `**bold**`
    Bold(String),
    /// `*italic*` or `_italic_`
    Italic(String),
    /// `` `code` ``
    Code(String),
}

impl InlineFragment {
    /// The fragment's text without styling.
    pub fn text(&self) -> &str {
        match self {
            Self::PlainText(s) | Self::Bold(s) | Self::Italic(s) | Self::Code(s) => s,
        }
    }
}

/// Concatenates fragment texts, ignoring styling.
pub fn visible_text(fragments: &[InlineFragment]) -> String {
    fragments.iter().map(InlineFragment::text).collect()
}
