//! Locating and parsing the YAML frontmatter block of a note.
//!
//! Two views of "where the block is" coexist on purpose:
//! - [`extract_block`] is strict and is what field validation runs on.
//! - [`body_start_line`] is a permissive line scan used for body checks. It
//!   accepts any later `---` line as the end of the block, and falls back to
//!   treating the whole document as body when none exists.

use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::{Mapping, Value};
use thiserror::Error;

/// Delimiter line that opens and closes the frontmatter block.
pub const DELIMITER: &str = "---";

/// Anchored at the document start; the closing delimiter must end its line.
static BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)\A---\s*\n(.*?)\n---\s*$").expect("frontmatter pattern is valid")
});

/// Failures that leave no field data to check.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("No frontmatter found. Notes must start with --- frontmatter ---")]
    Missing,

    #[error("Invalid YAML syntax: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("Empty frontmatter")]
    Empty,
}

/// Returns the text between the opening and closing delimiters.
///
/// # Format
/// ```text
/// ---
/// date: 2024-01-15
/// status: capture
/// ---
/// Body content here...
/// ```
pub fn extract_block(content: &str) -> Option<&str> {
    BLOCK_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parses a frontmatter block into its top-level mapping.
///
/// # Errors
///
/// - `InvalidYaml` if the block is not well-formed YAML
/// - `Empty` if it parses to an empty or falsy value (null, `false`, `0`,
///   `""`, `[]`, `{}`)
///
/// Any other non-mapping value (a bare scalar or a list) has no fields and
/// yields an empty mapping, so every required field is reported missing.
pub fn parse_block(block: &str) -> Result<Mapping, ParseError> {
    let value: Value = if block.trim().is_empty() {
        Value::Null
    } else {
        serde_yaml::from_str(block)?
    };

    if is_falsy(&value) {
        return Err(ParseError::Empty);
    }

    match value {
        Value::Mapping(mapping) => Ok(mapping),
        _ => Ok(Mapping::new()),
    }
}

/// Locates and parses the frontmatter of a whole document.
///
/// # Errors
///
/// Returns `ParseError::Missing` if no delimited block starts the document,
/// otherwise any error from [`parse_block`].
pub fn parse(content: &str) -> Result<Mapping, ParseError> {
    let block = extract_block(content).ok_or(ParseError::Missing)?;
    parse_block(block)
}

/// Index of the first body line.
///
/// The block ends at the first line after the opening one whose trimmed text
/// is exactly the delimiter. Returns 0 when there is no such line, so the
/// whole document counts as body.
pub fn body_start_line(lines: &[&str]) -> usize {
    lines
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, line)| line.trim() == DELIMITER)
        .map_or(0, |(i, _)| i + 1)
}

/// Splits a document on `\n` and returns the lines that make up the body.
pub fn body_lines(content: &str) -> Vec<&str> {
    let lines: Vec<&str> = content.split('\n').collect();
    let start = body_start_line(&lines);
    lines[start..].to_vec()
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Sequence(seq) => seq.is_empty(),
        Value::Mapping(map) => map.is_empty(),
        Value::Tagged(_) => false,
    }
}
