use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Writes `content` to `name` under `dir`, creating parent directories.
pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let doc_path = dir.path().join(name);
    if let Some(parent) = doc_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&doc_path, content)?;
    Ok(doc_path)
}

pub fn setup_test_directory() -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_test_file(
        &dir,
        "guide.md",
        "---\nsummary: Getting started\nread_when:\n  - onboarding\n---\n# Guide",
    )?;
    create_test_file(&dir, "Zeta.md", "No front matter here")?;
    create_test_file(&dir, "nested/deep/file.md", "---\nsummary: Deep file\n---\n")?;
    create_test_file(&dir, "notes.txt", "Not markdown")?;

    create_test_file(&dir, ".hidden.md", "Hidden file")?;
    create_test_file(&dir, ".private/secret.md", "Hidden directory")?;
    create_test_file(&dir, "archive/old.md", "Archived")?;
    create_test_file(&dir, "nested/research/paper.md", "Research notes")?;

    Ok(dir)
}
