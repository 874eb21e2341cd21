use clinimark_engine::{
    BlockNode, InlineFragment, markdown_to_html, parse_document,
    parsing::snapshot,
};

#[test]
fn fixture_clinical_summary() {
    assert_fixture("clinical_summary");
}

#[test]
fn fixture_malformed() {
    assert_fixture("malformed");
}

#[test]
fn fixture_clinical_summary_html() {
    let md = read_fixture("clinical_summary");
    let html = markdown_to_html(&md);
    insta::assert_snapshot!("clinical_summary_html", html);
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn assert_fixture(name: &str) {
    let md = read_fixture(name);

    let doc = parse_document(md.as_str());
    snapshot::invariants(&md, &doc.blocks);
    assert_eq!(doc.lines, md.split('\n').count());

    let outline = snapshot::outline(&doc.blocks);
    insta::assert_snapshot!(name, outline);
}

/// Every fixture renders the same way twice.
#[test]
fn segmenting_fixtures_is_deterministic() {
    for name in ["clinical_summary", "malformed"] {
        let md = read_fixture(name);
        assert_eq!(parse_document(md.as_str()).blocks, parse_document(md.as_str()).blocks);
    }
}

/// The bold title of a numbered line is always the item's first fragment.
#[test]
fn numbered_bold_titles_lead_items() {
    let md = read_fixture("clinical_summary");
    let doc = parse_document(md.as_str());

    let BlockNode::ListGroup { items } = &doc.blocks[3] else {
        panic!("expected ListGroup, got {:?}", doc.blocks[3]);
    };
    assert_eq!(items[0][0], InlineFragment::Bold("Type 2 diabetes".into()));
    assert_eq!(items[1][0], InlineFragment::Bold("Hypertension".into()));
}
