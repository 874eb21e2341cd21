//! Segmenter tests over whole documents.
//!
//! Line- and span-level cases live beside the classifier and scanner.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    blocks::{BlockNode, HeaderLevel},
    inline::InlineFragment::{self, *},
    parse_document, segment, snapshot,
};

fn p(s: &str) -> InlineFragment {
    PlainText(s.into())
}

fn para(s: &str) -> BlockNode {
    BlockNode::Paragraph { text: vec![p(s)] }
}

fn checked(text: &str) -> Vec<BlockNode> {
    let blocks = segment(text);
    snapshot::invariants(text, &blocks);
    blocks
}

#[test]
fn empty_document() {
    assert!(segment("").is_empty());
}

#[test]
fn absent_document() {
    assert!(segment(None::<&str>).is_empty());
    assert_eq!(parse_document(None::<&str>).lines, 0);
}

#[test]
fn header_blank_paragraph() {
    assert_eq!(
        checked("# Title\n\nBody text"),
        vec![
            BlockNode::Header {
                level: HeaderLevel::H2,
                text: vec![p("Title")],
            },
            BlockNode::Blank,
            para("Body text"),
        ]
    );
}

#[test]
fn numbered_list_with_bold_titles() {
    assert_eq!(
        checked("1. **Dx**: note\n2. Another"),
        vec![BlockNode::ListGroup {
            items: vec![vec![Bold("Dx".into()), p(": note")], vec![p("Another")]],
        }]
    );
}

#[test]
fn blank_line_closes_list() {
    assert_eq!(
        checked("- a\n- b\n\nc"),
        vec![
            BlockNode::ListGroup {
                items: vec![vec![p("a")], vec![p("b")]],
            },
            BlockNode::Blank,
            para("c"),
        ]
    );
}

#[test]
fn blank_line_inside_numbered_run_splits_it() {
    assert_eq!(
        checked("1. a\n\n2. b"),
        vec![
            BlockNode::ListGroup {
                items: vec![vec![p("a")]],
            },
            BlockNode::Blank,
            BlockNode::ListGroup {
                items: vec![vec![p("b")]],
            },
        ]
    );
}

#[test]
fn mixed_markers_share_one_group() {
    let blocks = checked("1. first\n- second\n* third\n2. **Fourth** item");
    assert_eq!(blocks.len(), 1);
    let BlockNode::ListGroup { items } = &blocks[0] else {
        panic!("expected ListGroup, got {:?}", blocks[0]);
    };
    assert_eq!(items.len(), 4);
    assert_eq!(items[3], vec![Bold("Fourth".into()), p(" item")]);
}

#[test]
fn header_closes_list() {
    assert_eq!(
        checked("- a\n## Next"),
        vec![
            BlockNode::ListGroup {
                items: vec![vec![p("a")]],
            },
            BlockNode::Header {
                level: HeaderLevel::H3,
                text: vec![p("Next")],
            },
        ]
    );
}

#[test]
fn trailing_list_is_flushed_at_end() {
    let blocks = checked("Intro\n- a");
    assert_eq!(
        blocks,
        vec![
            para("Intro"),
            BlockNode::ListGroup {
                items: vec![vec![p("a")]],
            },
        ]
    );
}

#[test]
fn header_text_is_inline_scanned() {
    assert_eq!(
        checked("### Labs for **today**"),
        vec![BlockNode::Header {
            level: HeaderLevel::H4,
            text: vec![p("Labs for "), Bold("today".into())],
        }]
    );
}

#[test]
fn empty_header_text() {
    assert_eq!(
        checked("# "),
        vec![BlockNode::Header {
            level: HeaderLevel::H2,
            text: vec![],
        }]
    );
}

#[test]
fn trailing_newline_adds_blank() {
    assert_eq!(checked("text\n"), vec![para("text"), BlockNode::Blank]);
}

#[test]
fn crlf_input_matches_lf_input() {
    assert_eq!(
        segment("# T\r\n- a\r\n- b\r\n\r\nc"),
        segment("# T\n- a\n- b\n\nc")
    );
}

#[rstest]
#[case("", 0)]
#[case("one", 1)]
#[case("a\nb", 2)]
#[case("\n\n\n", 4)]
#[case("- a\n- b\n- c", 3)]
fn line_count_matches_newline_segments(#[case] text: &str, #[case] expected: usize) {
    assert_eq!(parse_document(text).lines, expected);
}

#[test]
fn segmenting_is_deterministic() {
    let text = "## Assessment\n1. **Dx**: _stable_\n2. Follow `CBC`\n\nNotes *here";
    assert_eq!(segment(text), segment(text));
}

#[test]
fn hostile_input_terminates() {
    let text = "*_`**".repeat(200) + "\n" + &"1. **".repeat(50);
    let blocks = checked(&text);
    assert_eq!(blocks.len(), 2);
}
