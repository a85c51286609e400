// src/core/scanner.rs
use anyhow::{Context as _, Result};
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::core::config::{ExcludePatterns, load_config};
use crate::core::frontmatter::extract;
use crate::models::{FrontMatterResult, ListedDoc, MarkdownFileEntry};
use crate::utils::{collate, is_hidden, read_document};

/// Directory names that are never descended into, at any depth.
pub const EXCLUDED_DIRS: [&str; 2] = ["archive", "research"];

const MARKDOWN_EXTENSION: &str = ".md";

/// Lists every markdown file under `root`, sorted for display.
///
/// Hidden entries (names starting with `.`) are skipped, as are directories named in
/// [`EXCLUDED_DIRS`] or matched by `extra`. Symbolic links are not followed.
///
/// # Arguments
///
/// * `root` - The docs directory to walk
/// * `extra` - Additional directory exclusions, usually from `.docs-list.toml`
///
/// # Errors
///
/// This function may return an error if:
/// * The root does not exist or cannot be read
/// * A directory cannot be read during traversal
pub fn list_markdown_files(root: &Path, extra: &ExcludePatterns) -> Result<Vec<MarkdownFileEntry>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !should_exclude(e, root, extra))
    {
        let entry =
            entry.with_context(|| format!("Failed to walk docs directory: {}", root.display()))?;
        if !entry.file_type().is_file() || !is_markdown(&entry) {
            continue;
        }

        let relative = entry.path().strip_prefix(root).with_context(|| {
            format!(
                "{} is not inside {}",
                entry.path().display(),
                root.display()
            )
        })?;
        files.push(MarkdownFileEntry::from_relative_path(relative));
    }

    files.sort_by(|a, b| collate(a.as_str(), b.as_str()));
    debug!(root = %root.display(), count = files.len(), "listed markdown files");
    Ok(files)
}

/// Walks `root` and extracts the metadata of every markdown file, in listing order.
///
/// A file that cannot be read stays in the listing with no diagnostic reason.
///
/// # Errors
///
/// This function may return an error if:
/// * `.docs-list.toml` exists but is invalid
/// * The docs directory cannot be walked
pub fn scan_docs(root: &Path) -> Result<Vec<ListedDoc>> {
    let extra = load_config(root)?.exclude_patterns()?;
    let files = list_markdown_files(root, &extra)?;

    Ok(files
        .into_iter()
        .map(|file| {
            let metadata = match read_document(&file.absolute(root)) {
                Ok(content) => extract(&content),
                Err(err) => {
                    warn!(file = %file, error = %err, "could not read document");
                    FrontMatterResult::unavailable()
                }
            };
            if let Some(reason) = metadata.reason() {
                debug!(file = %file, %reason, "no summary extracted");
            }
            ListedDoc { file, metadata }
        })
        .collect())
}

/// Determines if a walk entry should be skipped along with everything beneath it.
/// The root itself is never skipped.
fn should_exclude(entry: &walkdir::DirEntry, root: &Path, extra: &ExcludePatterns) -> bool {
    if entry.depth() == 0 {
        return false;
    }

    if is_hidden(entry) {
        return true;
    }

    if !entry.file_type().is_dir() {
        return false;
    }

    let name = entry.file_name().to_string_lossy();
    if EXCLUDED_DIRS.iter().any(|excluded| name == *excluded) {
        debug!(dir = %entry.path().display(), "skipping excluded directory");
        return true;
    }

    if !extra.is_empty() {
        let relative = entry
            .path()
            .strip_prefix(root)
            .map(MarkdownFileEntry::from_relative_path)
            .unwrap_or_else(|_| MarkdownFileEntry::new(name.clone()));
        if extra.matches(&name, relative.as_str()) {
            debug!(dir = %entry.path().display(), "skipping directory matched by config");
            return true;
        }
    }

    false
}

fn is_markdown(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.ends_with(MARKDOWN_EXTENSION))
}
