use crate::parsing::{blocks::BlockNode, inline::InlineFragment, lines::lines_with_index};

/// Panics if `blocks` breaks a structural guarantee of segmenting `text`.
pub fn check(text: &str, blocks: &[BlockNode]) {
    let line_count = if text.is_empty() {
        0
    } else {
        lines_with_index(text).count()
    };
    assert!(
        blocks.len() <= line_count,
        "more blocks than lines: {} blocks, {} lines",
        blocks.len(),
        line_count
    );

    let mut prev_was_list = false;
    for (i, b) in blocks.iter().enumerate() {
        match b {
            BlockNode::ListGroup { items } => {
                assert!(!items.is_empty(), "empty list group at block {i}");
                assert!(!prev_was_list, "adjacent list groups at block {i}");
                for item in items {
                    assert!(!item.is_empty(), "empty list item at block {i}");
                    check_fragments(i, item);
                }
            }
            BlockNode::Header { text, .. } | BlockNode::Paragraph { text } => {
                check_fragments(i, text);
            }
            BlockNode::Blank => {}
        }
        prev_was_list = matches!(b, BlockNode::ListGroup { .. });
    }
}

fn check_fragments(block: usize, frags: &[InlineFragment]) {
    for f in frags {
        assert!(
            !f.text().is_empty(),
            "empty fragment {f:?} in block {block}"
        );
    }
}
