//! Lifecycle status of a note.

use std::fmt;
use std::str::FromStr;

/// Where a note sits in its writing lifecycle.
///
/// The set is closed: frontmatter `status` values outside it are reported
/// as field errors.
///
/// # Examples
///
/// ```
/// use notecheck::domain::Status;
///
/// let status: Status = "develop".parse().unwrap();
/// assert_eq!(status, Status::Develop);
/// assert!("Develop".parse::<Status>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Capture,
    Develop,
    Refine,
    Complete,
}

/// Error returned when parsing an unknown status.
#[derive(Debug, Clone)]
pub struct ParseStatusError(String);

impl fmt::Display for ParseStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown status '{}'", self.0)
    }
}

impl std::error::Error for ParseStatusError {}

impl Status {
    /// Every status, in lifecycle order.
    pub const ALL: [Status; 4] = [
        Status::Capture,
        Status::Develop,
        Status::Refine,
        Status::Complete,
    ];

    /// Returns the frontmatter spelling of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Capture => "capture",
            Status::Develop => "develop",
            Status::Refine => "refine",
            Status::Complete => "complete",
        }
    }

    /// Comma-separated list of accepted values, for error messages.
    pub fn choices() -> String {
        Self::ALL
            .iter()
            .map(Status::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}
