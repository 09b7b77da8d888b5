//! Wikilink references of the form `[[target]]` or `[[target|alias]]`.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Non-nested double-bracket link; captures the text between the brackets.
static WIKILINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\]]+)\]\]").expect("wikilink pattern is valid"));

const ALIAS_SEPARATOR: char = '|';

/// Error returned when an aliased link has more than one separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWikilinkError {
    raw: String,
}

impl ParseWikilinkError {
    /// Returns the link body that failed to parse, without brackets.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for ParseWikilinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid wikilink '[[{}]]'", self.raw)
    }
}

impl std::error::Error for ParseWikilinkError {}

/// Checks the text found between `[[` and `]]`.
///
/// An aliased link (`target|alias`) overrides the text displayed for the
/// link; either part may be empty but there must be exactly one separator.
///
/// # Errors
///
/// Returns `ParseWikilinkError` if the body contains the alias separator
/// but does not split into exactly two parts.
pub fn check_wikilink(body: &str) -> Result<(), ParseWikilinkError> {
    if body.contains(ALIAS_SEPARATOR) && body.split(ALIAS_SEPARATOR).count() != 2 {
        return Err(ParseWikilinkError {
            raw: body.to_string(),
        });
    }
    Ok(())
}

/// Returns the body of every wikilink in `text`, in document order.
///
/// Returns nothing unless both `[[` and `]]` occur somewhere in the text.
pub fn find_wikilinks(text: &str) -> Vec<&str> {
    if !(text.contains("[[") && text.contains("]]")) {
        return Vec::new();
    }

    WIKILINK_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}
