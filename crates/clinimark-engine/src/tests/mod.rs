use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_documents_dir() -> TempDir {
    TempDir::new().expect("create temp dir")
}

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write test file");
    path
}
