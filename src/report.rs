// src/report.rs
use std::io::{self, Write};

use crate::models::{FrontMatterResult, ListedDoc};

pub const CLOSING_REMINDER: &str = "Reminder: keep docs up to date as behavior changes. \
Before starting a task that matches a \"Read when\" hint above, read that doc first. \
If no doc covers the area you are working on, propose a new one.";

/// Writes one line per document, an indented `Read when:` line for documents with hints,
/// and the closing reminder.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render<W: Write>(out: &mut W, docs: &[ListedDoc]) -> io::Result<()> {
    for doc in docs {
        write!(out, "{}", doc.file)?;
        match &doc.metadata {
            FrontMatterResult::Success { summary, .. } => write!(out, " - {summary}")?,
            FrontMatterResult::Failure {
                reason: Some(reason),
                ..
            } => write!(out, " - [{reason}]")?,
            FrontMatterResult::Failure { reason: None, .. } => {}
        }
        writeln!(out)?;

        let hints = doc.metadata.hints();
        if !hints.is_empty() {
            writeln!(out, "  Read when: {}", hints.join("; "))?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{CLOSING_REMINDER}")?;
    out.flush()
}
