use crate::parsing::blocks::types::HeaderLevel;

/// Header lines: `# `, `## ` and `### `.
pub struct Header;

impl Header {
    /// Header prefixes, longest first so `### ` is never read as `## `.
    pub const PREFIXES: [(&'static str, HeaderLevel); 3] = [
        ("### ", HeaderLevel::H4),
        ("## ", HeaderLevel::H3),
        ("# ", HeaderLevel::H2),
    ];

    /// Returns the header level and the text after the marker's single space.
    pub fn strip_prefix(line: &str) -> Option<(HeaderLevel, &str)> {
        Self::PREFIXES
            .iter()
            .find_map(|(prefix, level)| line.strip_prefix(prefix).map(|rest| (*level, rest)))
    }
}
