/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters. They take any non-blank line no other
/// block claims, and their whole text is inline-scanned.
pub struct Paragraph;

impl Paragraph {
    /// Whether a line is empty or whitespace only.
    pub fn is_blank(line: &str) -> bool {
        line.trim().is_empty()
    }
}
