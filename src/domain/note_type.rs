//! Kind of note declared in frontmatter `type`.

use std::fmt;
use std::str::FromStr;

/// The kind of document a note is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteType {
    Note,
    Guide,
    Architecture,
    Workflow,
    Idea,
}

/// Error returned when parsing an unknown note type.
#[derive(Debug, Clone)]
pub struct ParseNoteTypeError(String);

impl fmt::Display for ParseNoteTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown note type '{}'", self.0)
    }
}

impl std::error::Error for ParseNoteTypeError {}

impl NoteType {
    pub const ALL: [NoteType; 5] = [
        NoteType::Note,
        NoteType::Guide,
        NoteType::Architecture,
        NoteType::Workflow,
        NoteType::Idea,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NoteType::Note => "note",
            NoteType::Guide => "guide",
            NoteType::Architecture => "architecture",
            NoteType::Workflow => "workflow",
            NoteType::Idea => "idea",
        }
    }

    /// Comma-separated list of accepted values, for error messages.
    pub fn choices() -> String {
        Self::ALL
            .iter()
            .map(NoteType::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for NoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoteType {
    type Err = ParseNoteTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseNoteTypeError(s.to_string()))
    }
}
