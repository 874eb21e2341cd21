pub mod blocks;
pub mod inline;
pub mod lines;
pub mod snapshot;

#[cfg(test)]
mod tests;

use log::trace;

use blocks::{BlockBuilder, BlockNode, MarkdownLineClassifier, Step};
use lines::lines_with_index;

pub use inline::scan;

#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
    /// Number of `\n`-delimited lines consumed.
    pub lines: usize,
}

/// Segments a whole document, keeping the line count alongside the blocks.
///
/// Empty and absent input both produce an empty document.
pub fn parse_document<'a>(text: impl Into<Option<&'a str>>) -> ParsedDoc {
    let text = match text.into() {
        Some(t) if !t.is_empty() => t,
        _ => {
            return ParsedDoc {
                blocks: vec![],
                lines: 0,
            };
        }
    };

    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();
    let mut lines = 0;

    for lr in lines_with_index(text) {
        let lc = classifier.classify(lr.text);
        trace!("line {}: {lc:?}", lr.index);
        builder.push(Step::from(lc));
        lines += 1;
    }

    ParsedDoc {
        blocks: builder.finish(),
        lines,
    }
}

/// Segments text into block nodes in render order.
///
/// Accepts `&str` or `Option<&str>`; `None` and `""` yield no blocks.
pub fn segment<'a>(text: impl Into<Option<&'a str>>) -> Vec<BlockNode> {
    parse_document(text).blocks
}
