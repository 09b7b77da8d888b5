//! Rules for note titles, which double as file names.

use std::fmt;

/// Titles longer than this many characters make unwieldy file names.
pub const MAX_TITLE_CHARS: usize = 60;

/// Characters that are not safe in a file name on common platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilenameChar {
    Colon,
    Slash,
    Backslash,
    Pipe,
    Asterisk,
    Question,
    Quote,
    LessThan,
    GreaterThan,
}

impl FilenameChar {
    /// Every unsafe character, in reporting order.
    pub const ALL: [FilenameChar; 9] = [
        FilenameChar::Colon,
        FilenameChar::Slash,
        FilenameChar::Backslash,
        FilenameChar::Pipe,
        FilenameChar::Asterisk,
        FilenameChar::Question,
        FilenameChar::Quote,
        FilenameChar::LessThan,
        FilenameChar::GreaterThan,
    ];

    pub fn as_char(self) -> char {
        match self {
            FilenameChar::Colon => ':',
            FilenameChar::Slash => '/',
            FilenameChar::Backslash => '\\',
            FilenameChar::Pipe => '|',
            FilenameChar::Asterisk => '*',
            FilenameChar::Question => '?',
            FilenameChar::Quote => '"',
            FilenameChar::LessThan => '<',
            FilenameChar::GreaterThan => '>',
        }
    }

    /// Returns each unsafe character present in `title`, once, in reporting order.
    pub fn found_in(title: &str) -> impl Iterator<Item = FilenameChar> + '_ {
        Self::ALL
            .into_iter()
            .filter(move |c| title.contains(c.as_char()))
    }
}

impl fmt::Display for FilenameChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Number of characters (not bytes) in a title.
pub fn title_length(title: &str) -> usize {
    title.chars().count()
}
