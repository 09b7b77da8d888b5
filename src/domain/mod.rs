//! Core types and validation rules for notes: Status, NoteType, tags, wikilinks, reports

mod note_type;
mod report;
mod status;
mod tag;
mod title;
mod validate;
mod wikilink;

pub use note_type::{NoteType, ParseNoteTypeError};
pub use report::{
    Field, FrontmatterError, FrontmatterReport, StructureWarning, ValidationReport, Verdict,
};
pub use status::{ParseStatusError, Status};
pub use tag::{ParseTagError, check_tag};
pub use title::{FilenameChar, MAX_TITLE_CHARS, title_length};
pub use validate::{validate_content_structure, validate_document, validate_frontmatter};
pub use wikilink::{ParseWikilinkError, check_wikilink, find_wikilinks};
