//! ID normalization and field validation.
//!
//! A slug is one or more characters from `a-z`, `0-9` and `-`. Free text is
//! turned into a slug by [`normalize_id`]:
//!
//! 1. lower-case
//! 2. spaces become hyphens
//! 3. anything outside `a-z0-9-` is dropped
//! 4. runs of hyphens collapse into one
//! 5. leading and trailing hyphens are trimmed
//!
//! Typed IDs are normalized too, so `"Tom Hanks"` and `"tom-hanks"` name the
//! same record. Only what is still wrong after normalization is reported.
//!
//! ```
//! use cinedb::slug::{normalize_id, validate_id};
//!
//! assert_eq!(normalize_id("Jane Doe"), "jane-doe");
//! assert!(validate_id("ok-123").is_ok());
//! assert!(validate_id("Has Spaces").is_err());
//! ```

use crate::error::{CinedbError, Result};

/// Converts arbitrary text into a slug. Never fails, but may return an empty
/// string when the input has no eligible characters.
pub fn normalize_id(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());

    for ch in input.to_lowercase().chars() {
        let ch = if ch == ' ' { '-' } else { ch };
        if !is_slug_char(ch) {
            continue;
        }
        if ch == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(ch);
    }

    slug.trim_matches('-').to_string()
}

/// Checks that `id` is a non-empty slug.
pub fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(CinedbError::EmptyId);
    }
    if !id.chars().all(is_slug_char) {
        return Err(CinedbError::InvalidIdFormat(id.to_string()));
    }
    Ok(())
}

/// Checks that a display name or title has content besides whitespace.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(CinedbError::EmptyName);
    }
    Ok(())
}

/// Parses a release year. Any integer is accepted; surrounding whitespace is
/// not.
pub fn parse_year(text: &str) -> Result<i64> {
    text.parse()
        .map_err(|_| CinedbError::InvalidYear(text.to_string()))
}

/// Picks the ID for a new record: the typed ID when one was given, otherwise
/// the name or title it is derived from. Both paths are normalized before
/// validation, so a typed ID of only spaces fails as empty.
pub fn resolve_id(typed: &str, fallback: &str) -> Result<String> {
    let source = if typed.is_empty() {
        fallback
    } else {
        typed
    };
    let id = normalize_id(source);
    validate_id(&id)?;
    Ok(id)
}

fn is_slug_char(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-'
}
