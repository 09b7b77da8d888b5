//! Document I/O and frontmatter parsing

pub mod frontmatter;
mod fs;

pub use frontmatter::ParseError;
pub use fs::{InputError, read_document, read_stdin};
