// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;
pub mod report;
pub mod utils;

pub use cli::{Args, help_requested, missing_flag_value, run, setup_logging};
pub use crate::core::config::{CONFIG_FILE_NAME, Config, ExcludePatterns, load_config};
pub use crate::core::frontmatter::extract;
pub use crate::core::resolver::{
    DOCS_DIR_ENV, DOCS_ROOT_ENV, ResolveError, ResolveRequest, find_repo_root, resolve,
};
pub use crate::core::scanner::{EXCLUDED_DIRS, list_markdown_files, scan_docs};
pub use models::{
    FailureReason, FrontMatterResult, ListedDoc, MarkdownFileEntry, Provenance,
    ResolvedDocsRoot,
};
pub use report::{CLOSING_REMINDER, render};
