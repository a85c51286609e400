// src/models/listed_doc.rs
use crate::models::{FrontMatterResult, MarkdownFileEntry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedDoc {
    pub file: MarkdownFileEntry,
    pub metadata: FrontMatterResult,
}
