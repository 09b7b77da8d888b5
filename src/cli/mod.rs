//! CLI command definition and handler

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser};
use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use output::OutputFormat;

/// Argument value meaning "read the note from standard input".
pub const STDIN_SENTINEL: &str = "-";

/// notecheck - validate note frontmatter and body structure
#[derive(Parser, Debug)]
#[command(
    name = "notecheck",
    version,
    about,
    long_about = None,
    arg_required_else_help = true,
    after_help = "Examples:\n  notecheck 'My Note.md'\n  cat note.md | notecheck -"
)]
pub struct Cli {
    /// Path to a markdown note, or `-` to read from stdin
    pub input: DocumentSource,

    /// Output format (overrides config file)
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Config file to use instead of the default location
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Where the document text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Stdin,
    File(PathBuf),
}

impl FromStr for DocumentSource {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == STDIN_SENTINEL {
            Ok(Self::Stdin)
        } else {
            Ok(Self::File(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::Stdin => write!(f, "<stdin>"),
            DocumentSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
