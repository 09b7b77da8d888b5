//! Result types produced by note validation.
//!
//! Frontmatter problems are errors and decide validity. Body problems are
//! advisory warnings and never do.

use std::fmt;

use thiserror::Error;

use crate::domain::{FilenameChar, NoteType, Status};
use crate::infra::ParseError;

/// A frontmatter field every note must declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Date,
    Status,
    Type,
    Tags,
}

impl Field {
    /// Required fields, in the order they are checked.
    pub const REQUIRED: [Field; 4] = [Field::Date, Field::Status, Field::Type, Field::Tags];

    /// Returns the YAML key for this field.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Date => "date",
            Field::Status => "status",
            Field::Type => "type",
            Field::Tags => "tags",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A violated frontmatter rule.
///
/// `Parse` is fatal and is always the only error in its report; the other
/// variants accumulate.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Missing required field: {0}")]
    MissingField(Field),

    #[error("Invalid date format: '{0}'. Use YYYY-MM-DD format")]
    InvalidDate(String),

    #[error("Invalid status: '{0}'. Must be one of: {choices}", choices = Status::choices())]
    InvalidStatus(String),

    #[error("Invalid type: '{0}'. Must be one of: {choices}", choices = NoteType::choices())]
    InvalidType(String),

    #[error("Tags must be a list")]
    TagsNotList,

    #[error("At least one tag is required")]
    NoTags,

    #[error("Tag must be a string: {0}")]
    TagNotString(String),

    #[error("Tag '{0}' must be lowercase with only letters, numbers, and hyphens")]
    InvalidTag(String),
}

impl FrontmatterError {
    /// Returns true if this error stopped field checking.
    pub fn is_fatal(&self) -> bool {
        matches!(self, FrontmatterError::Parse(_))
    }
}

/// Accumulated outcome of frontmatter validation.
#[derive(Debug, Default)]
pub struct FrontmatterReport {
    errors: Vec<FrontmatterError>,
}

impl FrontmatterReport {
    /// Creates an empty (valid) report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a report holding a single fatal error.
    pub fn fatal(error: ParseError) -> Self {
        Self {
            errors: vec![FrontmatterError::Parse(error)],
        }
    }

    /// Records a field error.
    pub fn push(&mut self, error: FrontmatterError) {
        self.errors.push(error);
    }

    /// Returns true if no rule was violated.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FrontmatterError] {
        &self.errors
    }

    /// Returns the error messages in the order they were found.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// An advisory finding about the note body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureWarning {
    /// No line in the body starts with `# `.
    MissingHeading,

    /// An aliased wikilink with more than one `|`. Holds the text between the brackets.
    InvalidWikilink(String),

    /// A level-1 title longer than the file name limit. Holds the character count.
    TitleTooLong(usize),

    /// A level-1 title containing a character that is unsafe in file names.
    UnsafeTitleChar(FilenameChar),
}

impl fmt::Display for StructureWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureWarning::MissingHeading => {
                write!(f, "No main heading (# Title) found after frontmatter")
            }
            StructureWarning::InvalidWikilink(raw) => {
                write!(f, "Invalid wikilink format: [[{}]]", raw)
            }
            StructureWarning::TitleTooLong(chars) => write!(
                f,
                "Title too long ({} chars): Consider shortening for filename",
                chars
            ),
            StructureWarning::UnsafeTitleChar(c) => {
                write!(f, "Title contains invalid filename character: '{}'", c)
            }
        }
    }
}

/// How a validated note should be summarized to its author.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Valid frontmatter and no warnings.
    Clean,
    /// Valid frontmatter with at least one warning.
    ValidWithWarnings,
    /// At least one frontmatter error.
    Invalid,
}

/// Combined outcome of both validation stages for one document.
#[derive(Debug)]
pub struct ValidationReport {
    pub frontmatter: FrontmatterReport,
    pub warnings: Vec<StructureWarning>,
}

impl ValidationReport {
    /// Returns true if the frontmatter is valid; warnings do not matter.
    pub fn is_valid(&self) -> bool {
        self.frontmatter.is_valid()
    }

    pub fn verdict(&self) -> Verdict {
        match (self.is_valid(), self.warnings.is_empty()) {
            (false, _) => Verdict::Invalid,
            (true, true) => Verdict::Clean,
            (true, false) => Verdict::ValidWithWarnings,
        }
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.frontmatter.messages()
    }

    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}
