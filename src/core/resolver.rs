// src/core/resolver.rs
use anyhow::{Context as _, Result};
use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::models::{Provenance, ResolvedDocsRoot};

pub const DOCS_DIR_ENV: &str = "DOCS_DIR";
pub const DOCS_ROOT_ENV: &str = "DOCS_ROOT";

const DOCS_SUBDIR: &str = "docs";
const REPO_MARKER: &str = ".git";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("{flag} requires a path")]
    MissingPath { flag: &'static str },

    #[error(
        "could not find a docs directory. Tell docs-list where to look with one of:\n  \
         --docs <path>     the docs directory itself\n  \
         --root <path>     a repository root containing docs/\n  \
         DOCS_DIR=<path>   the docs directory itself\n  \
         DOCS_ROOT=<path>  a repository root containing docs/\n\
         or run it from a directory that contains docs/, \
         or from anywhere inside a repository whose root contains docs/"
    )]
    NotFound,
}

/// Everything resolution depends on, gathered up front so [`resolve`] stays pure.
///
/// `docs_arg` and `root_arg` are `None` when the flag was not given and `Some(None)`
/// when it was given without a value.
#[derive(Debug, Clone, Default)]
pub struct ResolveRequest {
    pub docs_arg: Option<Option<PathBuf>>,
    pub root_arg: Option<Option<PathBuf>>,
    pub docs_dir_env: Option<String>,
    pub docs_root_env: Option<String>,
    pub cwd: PathBuf,
    pub repo_root: Option<PathBuf>,
}

impl ResolveRequest {
    /// Fills in the environment, working directory and repository root from the process.
    ///
    /// # Errors
    ///
    /// Returns an error if the current working directory cannot be determined.
    pub fn from_process(
        docs_arg: Option<Option<PathBuf>>,
        root_arg: Option<Option<PathBuf>>,
    ) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to determine the current directory")?;
        let repo_root = find_repo_root(&cwd);
        Ok(Self {
            docs_arg,
            root_arg,
            docs_dir_env: env::var(DOCS_DIR_ENV).ok(),
            docs_root_env: env::var(DOCS_ROOT_ENV).ok(),
            cwd,
            repo_root,
        })
    }
}

/// Picks the docs directory. The first matching source wins:
///
/// 1. `--docs <path>`
/// 2. `--root <path>`, using `<path>/docs`
/// 3. `DOCS_DIR`
/// 4. `DOCS_ROOT`, using `<value>/docs`
/// 5. `<cwd>/docs`, if it exists
/// 6. `<repo root>/docs`, if it exists and `cwd` is inside the repository
///
/// Explicit sources (1-4) are returned without checking that the directory exists.
///
/// # Errors
///
/// * [`ResolveError::MissingPath`] if `--docs` or `--root` was given without a usable path
/// * [`ResolveError::NotFound`] if no source yields a directory
pub fn resolve(request: &ResolveRequest) -> Result<ResolvedDocsRoot, ResolveError> {
    let cwd = &request.cwd;

    if let Some(arg) = &request.docs_arg {
        let docs = explicit_path(arg.as_deref(), "--docs")?;
        return Ok(chosen(absolutize(cwd, docs), Provenance::DocsFlag));
    }

    if let Some(arg) = &request.root_arg {
        let root = explicit_path(arg.as_deref(), "--root")?;
        return Ok(chosen(
            absolutize(cwd, root).join(DOCS_SUBDIR),
            Provenance::RootFlag,
        ));
    }

    if let Some(docs) = non_blank(request.docs_dir_env.as_deref()) {
        return Ok(chosen(
            absolutize(cwd, Path::new(docs)),
            Provenance::DocsDirEnv,
        ));
    }

    if let Some(root) = non_blank(request.docs_root_env.as_deref()) {
        return Ok(chosen(
            absolutize(cwd, Path::new(root)).join(DOCS_SUBDIR),
            Provenance::DocsRootEnv,
        ));
    }

    let local = cwd.join(DOCS_SUBDIR);
    if local.is_dir() {
        return Ok(chosen(local, Provenance::WorkingDirectory));
    }

    if let Some(repo_root) = &request.repo_root {
        if cwd.starts_with(repo_root) {
            let repo_docs = repo_root.join(DOCS_SUBDIR);
            if repo_docs.is_dir() {
                return Ok(chosen(repo_docs, Provenance::RepositoryRoot));
            }
        }
    }

    Err(ResolveError::NotFound)
}

/// Finds the nearest directory at or above `start` that contains a `.git` entry.
#[must_use]
pub fn find_repo_root(start: &Path) -> Option<PathBuf> {
    let mut current_dir = start.to_path_buf();
    let mut visited = HashSet::new();

    while visited.insert(current_dir.clone()) {
        if current_dir.join(REPO_MARKER).exists() {
            return Some(current_dir);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    None
}

fn chosen(path: PathBuf, provenance: Provenance) -> ResolvedDocsRoot {
    debug!(path = %path.display(), %provenance, "resolved docs directory");
    ResolvedDocsRoot::new(path, provenance)
}

fn explicit_path<'a>(
    value: Option<&'a Path>,
    flag: &'static str,
) -> Result<&'a Path, ResolveError> {
    match value {
        Some(path) if !path.as_os_str().is_empty() && !looks_like_flag(path) => Ok(path),
        _ => Err(ResolveError::MissingPath { flag }),
    }
}

fn looks_like_flag(path: &Path) -> bool {
    path.to_string_lossy().starts_with('-')
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn absolutize(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
