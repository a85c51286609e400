// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Writes `content` to `name` under `dir`, creating parent directories. Shared by the
/// library integration tests and the binary tests in `tests/cli.rs`.
pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// A docs tree covering every diagnostic plus hidden and excluded entries.
pub fn setup_docs_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    create_test_file(
        root,
        "auth.md",
        "---\nsummary: 'Handles OAuth flows'\nread_when:\n  - \"auth changes\"\n  - tests\n---\n# Auth\n",
    )?;
    create_test_file(
        root,
        "release/Checklist.md",
        "---\nsummary: Cutting a release\nread_when: ['tagging', 'changelog']\n---\n",
    )?;
    create_test_file(root, "dns.md", "# DNS runbook\nNo metadata.\n")?;
    create_test_file(root, "drafts/wip.md", "---\nsummary: Work in progress\n")?;
    create_test_file(
        root,
        "tools.md",
        "---\ntitle: Tools\nread_when:\n  - picking a tool\n---\n",
    )?;
    create_test_file(root, "blank.md", "---\nsummary: ''\n---\n")?;

    create_test_file(root, "notes.txt", "not markdown")?;
    create_test_file(root, ".hidden.md", "---\nsummary: hidden\n---\n")?;
    create_test_file(root, ".github/pr.md", "---\nsummary: hidden dir\n---\n")?;
    create_test_file(root, "archive/2019.md", "---\nsummary: old\n---\n")?;
    create_test_file(root, "release/research/spike.md", "---\nsummary: spike\n---\n")?;

    Ok(temp_dir)
}
