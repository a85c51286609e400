// src/core/config.rs
use anyhow::{Context as _, Result};
use glob::Pattern;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = ".docs-list.toml";

/// Optional per-docs-root settings read from `.docs-list.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Extra directories to skip, as glob patterns.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Config {
    /// Compiles the `exclude` globs.
    ///
    /// # Errors
    ///
    /// Returns an error if any pattern has invalid glob syntax.
    pub fn exclude_patterns(&self) -> Result<ExcludePatterns> {
        let mut patterns = ExcludePatterns::default();
        for pattern in &self.exclude {
            patterns.add_pattern(pattern)?;
        }
        Ok(patterns)
    }
}

/// Loads `.docs-list.toml` from the docs root. A missing file yields the default config.
///
/// # Errors
///
/// This function may return an error if:
/// * The config file exists but cannot be read
/// * The file is not valid TOML or contains unknown keys
pub fn load_config(docs_root: &Path) -> Result<Config> {
    let config_file = docs_root.join(CONFIG_FILE_NAME);
    if !config_file.is_file() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed to read config file: {}", config_file.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_file.display()))?;

    debug!(path = %config_file.display(), excludes = config.exclude.len(), "loaded config");
    Ok(config)
}

/// Directory exclusion globs, matched against a directory's name and its path relative
/// to the docs root.
#[derive(Debug, Default)]
pub struct ExcludePatterns {
    patterns: Vec<Pattern>,
}

impl ExcludePatterns {
    /// # Errors
    ///
    /// Returns an error if the pattern has invalid glob syntax.
    pub fn add_pattern(&mut self, pattern: &str) -> Result<()> {
        let pattern = pattern.trim().trim_end_matches('/');
        if pattern.is_empty() {
            return Ok(());
        }
        let compiled =
            Pattern::new(pattern).with_context(|| format!("Invalid exclude pattern: {pattern}"))?;
        self.patterns.push(compiled);
        Ok(())
    }

    #[must_use]
    pub fn matches(&self, name: &str, relative: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| pattern.matches(name) || pattern.matches(relative))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
