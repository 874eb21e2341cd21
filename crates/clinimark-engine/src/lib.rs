pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use models::DocumentEntry;
pub use parsing::{
    ParsedDoc,
    blocks::{BlockNode, HeaderLevel, ListItem},
    inline::{InlineFragment, visible_text},
    parse_document, scan, segment,
};
pub use render::{markdown_to_html, render_html};
