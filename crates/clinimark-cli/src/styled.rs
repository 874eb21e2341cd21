use clinimark_engine::{BlockNode, HeaderLevel, InlineFragment};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

fn header_style(level: HeaderLevel) -> Style {
    let base = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    match level {
        HeaderLevel::H2 => base.add_modifier(Modifier::UNDERLINED),
        HeaderLevel::H3 => base,
        HeaderLevel::H4 => base.add_modifier(Modifier::ITALIC),
    }
}

fn code_style() -> Style {
    Style::default().fg(Color::Yellow).bg(Color::DarkGray)
}

/// Maps segmented blocks to styled terminal lines.
///
/// Headers are followed by an empty line, list items are numbered from 1 in
/// every group, and `Blank` becomes an empty line.
pub fn block_lines(blocks: &[BlockNode]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for block in blocks {
        match block {
            BlockNode::Header { level, text } => {
                lines.push(Line::from(fragment_spans(text, header_style(*level))));
                lines.push(Line::default());
            }
            BlockNode::ListGroup { items } => {
                for (i, item) in items.iter().enumerate() {
                    let mut spans = vec![Span::raw(format!("{}. ", i + 1))];
                    spans.extend(fragment_spans(item, Style::default()));
                    lines.push(Line::from(spans));
                }
            }
            BlockNode::Paragraph { text } => {
                lines.push(Line::from(fragment_spans(text, Style::default())));
            }
            BlockNode::Blank => lines.push(Line::default()),
        }
    }

    lines
}

fn fragment_spans(fragments: &[InlineFragment], base: Style) -> Vec<Span<'static>> {
    fragments
        .iter()
        .map(|f| {
            let style = match f {
                InlineFragment::PlainText(_) => base,
                InlineFragment::Bold(_) => base.add_modifier(Modifier::BOLD),
                InlineFragment::Italic(_) => base.add_modifier(Modifier::ITALIC),
                InlineFragment::Code(_) => base.patch(code_style()),
            };
            Span::styled(f.text().to_string(), style)
        })
        .collect()
}
