//! Block types that own their line-level syntax. The classifier asks these
//! for matches and never spells out a marker itself.

pub mod header;
pub mod list;
pub mod paragraph;

pub use header::Header;
pub use list::{BulletList, NumberedList};
pub use paragraph::Paragraph;
