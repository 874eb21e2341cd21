//! # Block Segmentation
//!
//! Two-phase, single forward pass over the lines of a document.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    by trying an ordered table of matchers; the first that claims the line
//!    wins and unclaimed lines are paragraphs.
//!
//! 2. **Block Construction** (`builder`): each `LineClass` turns into a `Step`.
//!    List lines append to a `ListAccumulator`; every other line flushes the
//!    pending list as one `ListGroup` and then emits its own node.
//!
//! ## Modules
//!
//! - **`types`**: `BlockNode`, `HeaderLevel`, `ListItem`
//! - **`kinds`**: block types owning their markers (Header, NumberedList, BulletList, Paragraph)
//! - **`classify`**: `MarkdownLineClassifier` and `LineClass`
//! - **`builder`**: `Step`, `ListAccumulator`, `BlockBuilder`
//!
//! ## Key Invariants
//!
//! - A `ListGroup` is never empty and two never sit next to each other
//! - A blank line closes a pending list like any other non-list line
//! - Each line yields at most one node directly; list lines yield none until flushed

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::{BlockBuilder, ListAccumulator, Step};
pub use classify::{LineClass, LineMatcher, MarkdownLineClassifier};
pub use types::{BlockNode, HeaderLevel, ListItem};
