pub mod document_entry;

pub use document_entry::DocumentEntry;
