// src/models.rs
pub mod docs_root;
pub mod frontmatter;
pub mod listed_doc;
pub mod markdown_file;

pub use docs_root::{Provenance, ResolvedDocsRoot};
pub use frontmatter::{FailureReason, FrontMatterResult};
pub use listed_doc::ListedDoc;
pub use markdown_file::MarkdownFileEntry;
