// src/models/markdown_file.rs
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A markdown file found under the docs root, stored as a `/`-separated relative path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MarkdownFileEntry {
    relative: String,
}

impl MarkdownFileEntry {
    #[must_use]
    pub fn new(relative: impl Into<String>) -> Self {
        Self {
            relative: relative.into(),
        }
    }

    /// Builds an entry from a path relative to the docs root, normalizing separators to `/`.
    #[must_use]
    pub fn from_relative_path(path: &Path) -> Self {
        let relative = path
            .components()
            .filter_map(|component| match component {
                Component::Normal(segment) => Some(segment.to_string_lossy()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/");
        Self { relative }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.relative
    }

    #[must_use]
    pub fn absolute(&self, root: &Path) -> PathBuf {
        root.join(&self.relative)
    }
}

impl fmt::Display for MarkdownFileEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.relative)
    }
}
