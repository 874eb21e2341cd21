use relative_path::{RelativePath, RelativePathBuf};

/// A clinical document found in the documents folder, with a display-friendly name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DocumentEntry {
    relative_path: RelativePathBuf,
    display_name: String,
}

impl DocumentEntry {
    /// File extensions the viewer lists, compared case-insensitively.
    pub const EXTENSIONS: [&'static str; 3] = ["md", "markdown", "txt"];

    pub fn new(relative_path: RelativePathBuf) -> Self {
        let display_name = Self::extract_display_name(&relative_path);
        Self {
            relative_path,
            display_name,
        }
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Relative path without its extension, e.g. `2024/discharge`.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Whether a file extension marks a renderable document.
    pub fn is_document_extension(ext: &str) -> bool {
        Self::EXTENSIONS
            .iter()
            .any(|known| known.eq_ignore_ascii_case(ext))
    }

    fn extract_display_name(path: &RelativePath) -> String {
        let s = path.as_str();
        match path.extension() {
            Some(ext) if Self::is_document_extension(ext) => s[..s.len() - ext.len() - 1].to_string(),
            _ => s.to_string(),
        }
    }
}

impl From<&str> for DocumentEntry {
    fn from(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }
}
