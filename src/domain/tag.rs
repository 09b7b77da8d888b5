//! Strict lowercase tags used in note frontmatter.

use std::fmt;

/// Error returned when a string is not a valid tag.
#[derive(Debug, Clone)]
pub struct ParseTagError(String);

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseTagError {}

/// Checks a tag exactly as it appears in frontmatter.
///
/// Unlike a search filter, a stored tag is not normalized: the text must
/// already be in canonical form.
///
/// # Validation Rules
/// - Non-empty
/// - Only ASCII lowercase letters, digits, and hyphens
///
/// # Examples
///
/// ```
/// use notecheck::domain::check_tag;
///
/// assert!(check_tag("rust-cli").is_ok());
/// assert!(check_tag("Rust").is_err());
/// assert!(check_tag("snake_case").is_err());
/// ```
///
/// # Errors
///
/// Returns `ParseTagError` if the tag is empty or contains anything other
/// than lowercase letters, digits, and hyphens.
pub fn check_tag(s: &str) -> Result<(), ParseTagError> {
    if s.is_empty() {
        return Err(ParseTagError("tag cannot be empty".to_string()));
    }

    if !s
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ParseTagError(format!(
            "invalid tag '{}': tags must contain only lowercase letters, digits, and hyphens",
            s
        )));
    }

    Ok(())
}
