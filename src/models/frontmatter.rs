// src/models/frontmatter.rs
use std::fmt;

/// Why a document's metadata block could not be fully extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    MissingFrontMatter,
    UnterminatedFrontMatter,
    SummaryKeyMissing,
    SummaryEmpty,
}

impl FailureReason {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::MissingFrontMatter => "missing-front-matter",
            Self::UnterminatedFrontMatter => "unterminated-front-matter",
            Self::SummaryKeyMissing => "summary-key-missing",
            Self::SummaryEmpty => "summary-empty",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Outcome of extracting one document's metadata block.
///
/// Hints collected before a failure are kept so they can still be reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontMatterResult {
    Success {
        summary: String,
        hints: Vec<String>,
    },
    Failure {
        /// `None` when no diagnostic applies, e.g. the file could not be read.
        reason: Option<FailureReason>,
        hints: Vec<String>,
    },
}

impl FrontMatterResult {
    #[must_use]
    pub const fn failed(reason: FailureReason, hints: Vec<String>) -> Self {
        Self::Failure {
            reason: Some(reason),
            hints,
        }
    }

    #[must_use]
    pub const fn unavailable() -> Self {
        Self::Failure {
            reason: None,
            hints: Vec::new(),
        }
    }

    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        match self {
            Self::Success { summary, .. } => Some(summary),
            Self::Failure { .. } => None,
        }
    }

    #[must_use]
    pub const fn reason(&self) -> Option<FailureReason> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { reason, .. } => *reason,
        }
    }

    #[must_use]
    pub fn hints(&self) -> &[String] {
        match self {
            Self::Success { hints, .. } | Self::Failure { hints, .. } => hints,
        }
    }
}
