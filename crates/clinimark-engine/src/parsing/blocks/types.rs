use serde::Serialize;

use crate::parsing::inline::InlineFragment;

/// Display level of a header. One `#` maps to the most prominent level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub enum HeaderLevel {
    /// `# `
    H2,
    /// `## `
    H3,
    /// `### `
    H4,
}

impl HeaderLevel {
    /// Numeric level, as used by `<h2>`..`<h4>`.
    pub fn level(self) -> u8 {
        match self {
            Self::H2 => 2,
            Self::H3 => 3,
            Self::H4 => 4,
        }
    }
}

impl From<HeaderLevel> for u8 {
    fn from(level: HeaderLevel) -> Self {
        level.level()
    }
}

/// The fragments of one list item.
pub type ListItem = Vec<InlineFragment>;

/// A top-level unit of a segmented document, in render order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BlockNode {
    Header {
        level: HeaderLevel,
        text: Vec<InlineFragment>,
    },
    /// Consecutive list lines, numbered and bulleted alike.
    ListGroup { items: Vec<ListItem> },
    Paragraph { text: Vec<InlineFragment> },
    /// A hard line break standing in for an empty source line.
    Blank,
}
