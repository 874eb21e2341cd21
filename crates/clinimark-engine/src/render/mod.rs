//! Display mappings for segmented documents.

pub mod html;

pub use html::{markdown_to_html, render_html};
