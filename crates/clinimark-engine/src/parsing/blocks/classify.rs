use crate::parsing::inline::kinds::{Strong, is_line_terminator};

use super::{
    kinds::{
        BulletList, Header, NumberedList, Paragraph,
        list::{item_content, split_gap},
    },
    types::HeaderLevel,
};

/// What a single line is, decided without looking at any other line.
///
/// Borrowed slices point into the line; nothing is inline-scanned yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// `1. **Title**rest`: the bold span follows the marker directly.
    NumberedBold { title: &'a str, rest: &'a str },
    /// `1. content`
    Numbered { content: &'a str },
    /// `- content` or `* content`
    Bullet { content: &'a str },
    /// `# `, `## ` or `### ` followed by the header text.
    Header { level: HeaderLevel, content: &'a str },
    /// Empty or whitespace-only.
    Blank,
    /// Anything else.
    Paragraph { content: &'a str },
}

impl LineClass<'_> {
    /// Whether this line contributes an item to a list group.
    pub fn is_list_line(&self) -> bool {
        matches!(
            self,
            Self::NumberedBold { .. } | Self::Numbered { .. } | Self::Bullet { .. }
        )
    }
}

/// A single classification rule: `Some` when the rule claims the line.
pub type LineMatcher = for<'a> fn(&'a str) -> Option<LineClass<'a>>;

/// Classifies lines by trying each rule in [`Self::MATCHERS`] order.
///
/// The first rule that claims a line wins; a line no rule claims is a
/// paragraph.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classification rules in precedence order.
    pub const MATCHERS: [LineMatcher; 5] = [
        match_numbered_bold,
        match_numbered,
        match_bullet,
        match_header,
        match_blank,
    ];

    /// Classifies one line (without its trailing line break).
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        Self::MATCHERS
            .iter()
            .find_map(|matcher| matcher(line))
            .unwrap_or(LineClass::Paragraph { content: line })
    }
}

fn match_numbered_bold(line: &str) -> Option<LineClass<'_>> {
    let (_, rest) = split_gap(NumberedList::strip_marker(line)?)?;
    let bold = Strong::match_at(rest)?;
    let trailing = &rest[bold.len..];
    if trailing.chars().any(is_line_terminator) {
        return None;
    }
    Some(LineClass::NumberedBold {
        title: bold.inner,
        rest: trailing,
    })
}

fn match_numbered(line: &str) -> Option<LineClass<'_>> {
    let content = item_content(NumberedList::strip_marker(line)?)?;
    Some(LineClass::Numbered { content })
}

fn match_bullet(line: &str) -> Option<LineClass<'_>> {
    let content = item_content(BulletList::strip_marker(line)?)?;
    Some(LineClass::Bullet { content })
}

fn match_header(line: &str) -> Option<LineClass<'_>> {
    let (level, content) = Header::strip_prefix(line)?;
    Some(LineClass::Header { level, content })
}

fn match_blank(line: &str) -> Option<LineClass<'_>> {
    Paragraph::is_blank(line).then_some(LineClass::Blank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn classify(line: &str) -> LineClass<'_> {
        MarkdownLineClassifier.classify(line)
    }

    #[rstest]
    #[case("1. **Dx**: note", LineClass::NumberedBold { title: "Dx", rest: ": note" })]
    #[case("12.   **Plan**", LineClass::NumberedBold { title: "Plan", rest: "" })]
    #[case("1. **a** and **b**", LineClass::NumberedBold { title: "a", rest: " and **b**" })]
    #[case("1. Dx is **bold** later", LineClass::Numbered { content: "Dx is **bold** later" })]
    #[case("1. ****", LineClass::Numbered { content: "****" })]
    #[case("2. Another", LineClass::Numbered { content: "Another" })]
    #[case("1.  ", LineClass::Numbered { content: " " })]
    #[case("- item", LineClass::Bullet { content: "item" })]
    #[case("* item", LineClass::Bullet { content: "item" })]
    #[case("* * *", LineClass::Bullet { content: "* *" })]
    #[case("### Labs", LineClass::Header { level: HeaderLevel::H4, content: "Labs" })]
    #[case("## Plan", LineClass::Header { level: HeaderLevel::H3, content: "Plan" })]
    #[case("# Summary", LineClass::Header { level: HeaderLevel::H2, content: "Summary" })]
    #[case("", LineClass::Blank)]
    #[case(" \t ", LineClass::Blank)]
    #[case("Body text", LineClass::Paragraph { content: "Body text" })]
    #[case("1. ", LineClass::Paragraph { content: "1. " })]
    #[case("1.Item", LineClass::Paragraph { content: "1.Item" })]
    #[case("-item", LineClass::Paragraph { content: "-item" })]
    #[case("*italic* opener", LineClass::Paragraph { content: "*italic* opener" })]
    #[case("**Bold** lead", LineClass::Paragraph { content: "**Bold** lead" })]
    #[case("#### Too deep", LineClass::Paragraph { content: "#### Too deep" })]
    #[case("  - indented", LineClass::Paragraph { content: "  - indented" })]
    fn classify_cases(#[case] line: &str, #[case] expected: LineClass<'_>) {
        assert_eq!(classify(line), expected);
    }

    #[test]
    fn list_rules_beat_header_rule() {
        // a bullet whose text looks like a header is still a bullet
        assert_eq!(classify("- # not a header"), LineClass::Bullet { content: "# not a header" });
    }

    #[test]
    fn list_lines_are_flagged() {
        assert!(classify("1. x").is_list_line());
        assert!(classify("- x").is_list_line());
        assert!(!classify("# x").is_list_line());
        assert!(!classify("").is_list_line());
        assert!(!classify("x").is_list_line());
    }
}
