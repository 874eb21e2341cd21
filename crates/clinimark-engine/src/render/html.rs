use html_escape::encode_text_to_string;

use crate::parsing::{blocks::BlockNode, inline::InlineFragment, segment};

/// Renders blocks as the dashboard's HTML.
///
/// Each block sits on its own line inside a `markdown-content` div. All lists
/// render as `<ol>`, blank lines as `<br>`. Text is escaped; no block yields
/// an empty string.
pub fn render_html(blocks: &[BlockNode]) -> String {
    if blocks.is_empty() {
        return String::new();
    }

    let mut out = String::from("<div class=\"markdown-content\">\n");
    for b in blocks {
        render_block(b, &mut out);
        out.push('\n');
    }
    out.push_str("</div>");
    out
}

/// Segments `text` and renders it with [`render_html`].
pub fn markdown_to_html(text: &str) -> String {
    render_html(&segment(text))
}

fn render_block(b: &BlockNode, out: &mut String) {
    match b {
        BlockNode::Header { level, text } => {
            let n = level.level();
            out.push_str(&format!("<h{n}>"));
            render_fragments(text, out);
            out.push_str(&format!("</h{n}>"));
        }
        BlockNode::ListGroup { items } => {
            out.push_str("<ol>");
            for item in items {
                out.push_str("<li>");
                render_fragments(item, out);
                out.push_str("</li>");
            }
            out.push_str("</ol>");
        }
        BlockNode::Paragraph { text } => {
            out.push_str("<p>");
            render_fragments(text, out);
            out.push_str("</p>");
        }
        BlockNode::Blank => out.push_str("<br>"),
    }
}

fn render_fragments(frags: &[InlineFragment], out: &mut String) {
    for f in frags {
        let tag = match f {
            InlineFragment::PlainText(text) => {
                encode_text_to_string(text, out);
                continue;
            }
            InlineFragment::Bold(_) => "strong",
            InlineFragment::Italic(_) => "em",
            InlineFragment::Code(_) => "code",
        };
        out.push('<');
        out.push_str(tag);
        out.push('>');
        encode_text_to_string(f.text(), out);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}
