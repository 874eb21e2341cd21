use std::fmt::Write;

use crate::parsing::{blocks::BlockNode, inline::InlineFragment};

/// Renders blocks as an indented outline, one node or item per line.
///
/// ```text
/// Header h2: [Plain("Title")]
/// ListGroup
///   - [Bold("Dx"), Plain(": note")]
/// Blank
/// ```
pub fn outline(blocks: &[BlockNode]) -> String {
    let mut lines = Vec::with_capacity(blocks.len());
    for b in blocks {
        match b {
            BlockNode::Header { level, text } => {
                lines.push(format!("Header h{}: {}", level.level(), fragments(text)));
            }
            BlockNode::ListGroup { items } => {
                lines.push("ListGroup".to_string());
                for item in items {
                    lines.push(format!("  - {}", fragments(item)));
                }
            }
            BlockNode::Paragraph { text } => {
                lines.push(format!("Paragraph: {}", fragments(text)));
            }
            BlockNode::Blank => lines.push("Blank".to_string()),
        }
    }
    lines.join("\n")
}

fn fragments(frags: &[InlineFragment]) -> String {
    let mut s = String::from("[");
    for (i, f) in frags.iter().enumerate() {
        if i > 0 {
            s.push_str(", ");
        }
        let kind = match f {
            InlineFragment::PlainText(_) => "Plain",
            InlineFragment::Bold(_) => "Bold",
            InlineFragment::Italic(_) => "Italic",
            InlineFragment::Code(_) => "Code",
        };
        let _ = write!(s, "{kind}({:?})", f.text());
    }
    s.push(']');
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::HeaderLevel;

    #[test]
    fn outline_of_each_kind() {
        let blocks = vec![
            BlockNode::Header {
                level: HeaderLevel::H3,
                text: vec![InlineFragment::PlainText("Plan".into())],
            },
            BlockNode::ListGroup {
                items: vec![
                    vec![
                        InlineFragment::Bold("Dx".into()),
                        InlineFragment::PlainText(": note".into()),
                    ],
                    vec![InlineFragment::Code("x".into())],
                ],
            },
            BlockNode::Blank,
            BlockNode::Paragraph {
                text: vec![InlineFragment::Italic("say \"hi\"".into())],
            },
        ];

        assert_eq!(
            outline(&blocks),
            "Header h3: [Plain(\"Plan\")]\n\
             ListGroup\n  \
             - [Bold(\"Dx\"), Plain(\": note\")]\n  \
             - [Code(\"x\")]\n\
             Blank\n\
             Paragraph: [Italic(\"say \\\"hi\\\"\")]"
        );
    }

    #[test]
    fn empty_outline() {
        assert_eq!(outline(&[]), "");
    }
}
