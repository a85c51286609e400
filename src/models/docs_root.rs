// src/models/docs_root.rs
use std::fmt;
use std::path::PathBuf;

/// Where the docs directory came from, in resolution precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    DocsFlag,
    RootFlag,
    DocsDirEnv,
    DocsRootEnv,
    WorkingDirectory,
    RepositoryRoot,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::DocsFlag => "--docs",
            Self::RootFlag => "--root",
            Self::DocsDirEnv => "DOCS_DIR",
            Self::DocsRootEnv => "DOCS_ROOT",
            Self::WorkingDirectory => "working directory",
            Self::RepositoryRoot => "repository root",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDocsRoot {
    /// Absolute path of the docs directory. Explicit sources are not checked for existence.
    pub path: PathBuf,
    pub provenance: Provenance,
}

impl ResolvedDocsRoot {
    #[must_use]
    pub const fn new(path: PathBuf, provenance: Provenance) -> Self {
        Self { path, provenance }
    }
}
