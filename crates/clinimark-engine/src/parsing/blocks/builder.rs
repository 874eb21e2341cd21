use log::debug;

use crate::parsing::inline::{InlineFragment, scan};

use super::{
    classify::LineClass,
    types::{BlockNode, ListItem},
};

/// What the builder does with one classified line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Add an item to the list being accumulated.
    AppendToList(ListItem),
    /// Close any pending list, then emit this node.
    FlushAndEmit(BlockNode),
}

impl From<LineClass<'_>> for Step {
    fn from(class: LineClass<'_>) -> Self {
        match class {
            LineClass::NumberedBold { title, rest } => {
                let mut item = vec![InlineFragment::Bold(title.to_string())];
                item.extend(scan(rest));
                Step::AppendToList(item)
            }
            LineClass::Numbered { content } | LineClass::Bullet { content } => {
                Step::AppendToList(scan(content))
            }
            LineClass::Header { level, content } => Step::FlushAndEmit(BlockNode::Header {
                level,
                text: scan(content),
            }),
            LineClass::Blank => Step::FlushAndEmit(BlockNode::Blank),
            LineClass::Paragraph { content } => Step::FlushAndEmit(BlockNode::Paragraph {
                text: scan(content),
            }),
        }
    }
}

/// Items of a list whose lines are still being read.
#[derive(Debug, Default)]
pub struct ListAccumulator {
    items: Vec<ListItem>,
}

impl ListAccumulator {
    pub fn push(&mut self, item: ListItem) {
        self.items.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Moves the accumulated items into one `ListGroup`, leaving the
    /// accumulator empty. Returns `None` when nothing was accumulated.
    pub fn flush(&mut self) -> Option<BlockNode> {
        if self.items.is_empty() {
            return None;
        }
        Some(BlockNode::ListGroup {
            items: std::mem::take(&mut self.items),
        })
    }
}

/// Collects block nodes line by line and finalizes once with [`Self::finish`].
pub struct BlockBuilder {
    list: ListAccumulator,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            list: ListAccumulator::default(),
            out: vec![],
        }
    }

    pub fn push(&mut self, step: Step) {
        match step {
            Step::AppendToList(item) => self.list.push(item),
            Step::FlushAndEmit(node) => {
                self.flush_list();
                self.out.push(node);
            }
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush
        self.flush_list();
        self.out
    }

    fn flush_list(&mut self) {
        let pending = self.list.len();
        if let Some(group) = self.list.flush() {
            debug!("flushing list group of {pending} items at block {}", self.out.len());
            self.out.push(group);
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
