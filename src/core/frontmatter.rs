// src/core/frontmatter.rs
use tracing::{debug, trace};

use crate::models::{FailureReason, FrontMatterResult};

const DELIMITER: &str = "---";
const SUMMARY_KEY: &str = "summary:";
const READ_WHEN_KEY: &str = "read_when:";
const LIST_ITEM: &str = "- ";

/// Extracts the `summary` and `read_when` hints from a document's leading metadata block.
///
/// This is a line-based reader for a narrow subset of front matter syntax, not a YAML
/// parser. A `read_when:` line switches on hint collection; `- item` lines are collected
/// until the first non-blank line that is not a list item; one pair of matching quotes
/// around an item is dropped. An inline list
/// (`read_when: ['a', 'b']`) is parsed as a JSON array after normalizing single quotes,
/// and silently ignored if that fails.
///
/// Never fails outright: problems are reported as a [`FrontMatterResult::Failure`]
/// carrying whatever hints were collected.
#[must_use]
pub fn extract(content: &str) -> FrontMatterResult {
    let block = match metadata_block(content) {
        Ok(block) => block,
        Err(reason) => return FrontMatterResult::failed(reason, Vec::new()),
    };

    let mut raw_summary: Option<&str> = None;
    let mut hints = Vec::new();
    let mut collecting = false;

    for line in block.trim().lines().map(str::trim) {
        if let Some(value) = line.strip_prefix(SUMMARY_KEY) {
            raw_summary = Some(value);
            collecting = false;
            continue;
        }

        if let Some(value) = line.strip_prefix(READ_WHEN_KEY) {
            collecting = true;
            let inline = value.trim();
            if inline.starts_with('[') && inline.ends_with(']') {
                match parse_inline_list(inline) {
                    Some(items) => hints.extend(items),
                    None => debug!(line, "ignoring malformed inline read_when list"),
                }
            }
            continue;
        }

        if collecting {
            if let Some(item) = line.strip_prefix(LIST_ITEM) {
                let item = strip_matching_quotes(item.trim()).trim();
                if !item.is_empty() {
                    hints.push(item.to_owned());
                }
                continue;
            }
            if line.is_empty() {
                continue;
            }
            trace!(line, "read_when list ended");
            collecting = false;
        }
    }

    let Some(raw_summary) = raw_summary else {
        return FrontMatterResult::failed(FailureReason::SummaryKeyMissing, hints);
    };

    let summary = normalize_summary(raw_summary);
    if summary.is_empty() {
        return FrontMatterResult::failed(FailureReason::SummaryEmpty, hints);
    }

    FrontMatterResult::Success { summary, hints }
}

/// Returns the text between the opening `---` line and the next line starting with `---`.
fn metadata_block(content: &str) -> Result<&str, FailureReason> {
    let first_line = content.lines().next().unwrap_or_default();
    if first_line.trim_end_matches('\r') != DELIMITER {
        return Err(FailureReason::MissingFrontMatter);
    }

    let after_opening = &content[DELIMITER.len()..];
    let closing = format!("\n{DELIMITER}");
    after_opening
        .find(&closing)
        .map(|end| &after_opening[..end])
        .ok_or(FailureReason::UnterminatedFrontMatter)
}

fn parse_inline_list(inline: &str) -> Option<Vec<String>> {
    let normalized = inline.replace('\'', "\"");
    let items: Vec<String> = serde_json::from_str(&normalized).ok()?;
    Some(
        items
            .iter()
            .map(|item| item.trim())
            .filter(|item| !item.is_empty())
            .map(str::to_owned)
            .collect(),
    )
}

fn normalize_summary(raw: &str) -> String {
    let trimmed = raw.trim();
    let unquoted = strip_matching_quotes(trimmed);
    if unquoted.chars().all(is_quote) {
        return String::new();
    }
    unquoted.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn strip_matching_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

const fn is_quote(c: char) -> bool {
    matches!(c, '"' | '\'')
}
