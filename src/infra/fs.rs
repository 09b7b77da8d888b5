//! Reading note documents from disk or standard input.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// File extension a note must carry.
pub const NOTE_EXTENSION: &str = "md";

/// Errors that prevent a document from being validated at all.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("not a markdown file: {path}")]
    NotMarkdown { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read standard input: {0}")]
    Stdin(#[source] io::Error),

    #[error("invalid encoding in {path}: {encoding}")]
    InvalidEncoding { path: PathBuf, encoding: String },
}

impl InputError {
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => InputError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => InputError::PermissionDenied { path: path.into() },
            _ => InputError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// Reads a note file for validation.
///
/// Existence is checked before the extension, so a missing `notes.txt`
/// reports "not found".
///
/// # Errors
///
/// Returns `InputError::NotFound` if nothing exists at `path`.
/// Returns `InputError::NotMarkdown` if the path does not end in `.md`.
/// Returns `InputError::InvalidEncoding` if the file is not UTF-8.
pub fn read_document(path: &Path) -> Result<String, InputError> {
    if !path.exists() {
        return Err(InputError::NotFound { path: path.into() });
    }

    if path.extension().and_then(|ext| ext.to_str()) != Some(NOTE_EXTENSION) {
        return Err(InputError::NotMarkdown { path: path.into() });
    }

    let bytes = std::fs::read(path).map_err(|e| InputError::from_io(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "read note file");
    decode(bytes, path)
}

/// Reads the whole of standard input as one document.
///
/// # Errors
///
/// Returns `InputError::Stdin` if reading fails and
/// `InputError::InvalidEncoding` if the input is not UTF-8.
pub fn read_stdin() -> Result<String, InputError> {
    let mut bytes = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut bytes)
        .map_err(InputError::Stdin)?;
    debug!(bytes = bytes.len(), "read note from stdin");
    decode(bytes, Path::new("<stdin>"))
}

/// Decodes UTF-8 and normalizes CRLF and lone CR line endings to LF.
fn decode(bytes: Vec<u8>, path: &Path) -> Result<String, InputError> {
    if bytes.starts_with(&[0xFF, 0xFE]) || bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(InputError::InvalidEncoding {
            path: path.into(),
            encoding: "UTF-16 byte order mark detected; convert to UTF-8".into(),
        });
    }

    let content = String::from_utf8(bytes).map_err(|e| InputError::InvalidEncoding {
        path: path.into(),
        encoding: format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
    })?;

    Ok(normalize_newlines(&content))
}

fn normalize_newlines(content: &str) -> String {
    if !content.contains('\r') {
        return content.to_string();
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}
