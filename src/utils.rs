// src/utils.rs
use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::Path;
use unicode_normalization::UnicodeNormalization as _;
use unicode_normalization::char::is_combining_mark;

/// Reads a document, replacing invalid UTF-8 rather than failing on it.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn read_document(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}

/// Punctuation in root-locale collation order. Anything listed here sorts before
/// other symbols, which sort before digits, which sort before letters.
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Multi-level sort key: base characters first, then accents, then case.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct CollationKey {
    primary: Vec<(u8, u32)>,
    secondary: Vec<u32>,
    tertiary: Vec<u8>,
}

fn collation_key(s: &str) -> CollationKey {
    let mut key = CollationKey {
        primary: Vec::new(),
        secondary: Vec::new(),
        tertiary: Vec::new(),
    };

    for c in s.nfd() {
        if is_combining_mark(c) {
            if let Some(accent) = key.secondary.last_mut() {
                *accent = accent.saturating_add(u32::from(c));
            }
            continue;
        }
        key.primary.push(primary_weight(c));
        key.secondary.push(0);
        key.tertiary.push(u8::from(c.is_uppercase()));
    }

    key
}

fn primary_weight(c: char) -> (u8, u32) {
    if c.is_whitespace() {
        return (0, 0);
    }
    if let Some(position) = PUNCTUATION_ORDER.chars().position(|p| p == c) {
        return (0, u32::try_from(position).unwrap_or(u32::MAX).saturating_add(1));
    }
    if let Some(digit) = c.to_digit(10) {
        return (2, digit);
    }
    if c.is_numeric() {
        return (2, u32::from(c).saturating_add(10));
    }
    if c.is_alphabetic() {
        let lower = c.to_lowercase().next().unwrap_or(c);
        return (3, u32::from(lower));
    }
    if c.is_control() {
        return (4, u32::from(c));
    }
    (1, u32::from(c))
}

/// Orders paths the way a locale-aware listing does: punctuation before digits before
/// letters, accents and case ignored until the base letters tie, lowercase before
/// uppercase. Raw code points break any remaining tie so the order is total.
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}
