//! # Inline Scanning
//!
//! Single-pass, cursor-based scanning of one line into styled fragments.
//!
//! ## Modules
//!
//! - **`types`**: `InlineFragment` enum (PlainText, Bold, Italic, Code)
//! - **`kinds`**: span types owning their delimiters (Strong, Emphasis, CodeSpan)
//! - **`cursor`**: `Cursor` over the unconsumed suffix of the line
//! - **`parser`**: `scan()` entry point
//!
//! ## Precedence
//!
//! Bold beats italic beats code, all anchored at the cursor. Unpaired
//! delimiters degrade to literal text; scanning never fails.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::scan;
pub use types::{InlineFragment, visible_text};
