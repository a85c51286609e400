// tests/integration_tests/scanning_test.rs
use super::common::{create_test_file, setup_docs_directory};
use anyhow::Result;
use docs_list::{ExcludePatterns, FailureReason, list_markdown_files, scan_docs};

#[test]
fn test_listing_skips_hidden_and_excluded() -> Result<()> {
    let temp_dir = setup_docs_directory()?;

    let files = list_markdown_files(temp_dir.path(), &ExcludePatterns::default())?;
    let files: Vec<&str> = files.iter().map(|f| f.as_str()).collect();

    assert_eq!(
        files,
        vec![
            "auth.md",
            "blank.md",
            "dns.md",
            "drafts/wip.md",
            "release/Checklist.md",
            "tools.md",
        ]
    );

    Ok(())
}

#[test]
fn test_scan_reports_every_reason() -> Result<()> {
    let temp_dir = setup_docs_directory()?;

    let docs = scan_docs(temp_dir.path())?;
    let reasons: Vec<Option<FailureReason>> = docs.iter().map(|d| d.metadata.reason()).collect();

    assert_eq!(
        reasons,
        vec![
            None,
            Some(FailureReason::SummaryEmpty),
            Some(FailureReason::MissingFrontMatter),
            Some(FailureReason::UnterminatedFrontMatter),
            None,
            Some(FailureReason::SummaryKeyMissing),
        ]
    );
    assert_eq!(docs[4].metadata.hints(), ["tagging", "changelog"]);
    assert_eq!(docs[5].metadata.hints(), ["picking a tool"]);

    Ok(())
}

#[test]
fn test_config_excludes_directories() -> Result<()> {
    let temp_dir = setup_docs_directory()?;
    create_test_file(temp_dir.path(), ".docs-list.toml", "exclude = [\"drafts\", \"release\"]\n")?;

    let docs = scan_docs(temp_dir.path())?;
    let files: Vec<&str> = docs.iter().map(|d| d.file.as_str()).collect();
    assert_eq!(files, vec!["auth.md", "blank.md", "dns.md", "tools.md"]);

    Ok(())
}

#[test]
fn test_invalid_config_is_fatal() -> Result<()> {
    let temp_dir = setup_docs_directory()?;
    create_test_file(temp_dir.path(), ".docs-list.toml", "exclude = \"not a list\"\n")?;

    assert!(scan_docs(temp_dir.path()).is_err());

    Ok(())
}
