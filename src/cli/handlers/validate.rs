//! Validate command handler.

use std::path::Path;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::DocumentSource;
use crate::cli::output::{OutputFormat, ReportOutput, render_human, render_json};
use crate::domain::{ValidationReport, validate_document};
use crate::infra::{read_document, read_stdin};

/// Reads the document named by `source` and runs both validation stages.
///
/// # Errors
///
/// Returns the input error when the document cannot be obtained; the
/// validators are not run in that case.
pub fn validate_source(source: &DocumentSource) -> Result<ValidationReport> {
    let content = match source {
        DocumentSource::Stdin => read_stdin()?,
        DocumentSource::File(path) => read_document(path)?,
    };
    debug!(%source, chars = content.chars().count(), "validating note");
    Ok(validate_document(&content))
}

/// Validates one note and prints the result.
///
/// Returns whether the note's frontmatter is valid.
pub fn handle_validate(source: &DocumentSource, format: OutputFormat) -> Result<bool> {
    let report = validate_source(source)?;

    info!(
        %source,
        valid = report.is_valid(),
        errors = report.frontmatter.errors().len(),
        warnings = report.warnings.len(),
        "validated note"
    );

    match format {
        OutputFormat::Human => {
            let name = match source {
                DocumentSource::Stdin => None,
                DocumentSource::File(path) => Some(file_name(path)),
            };
            print!("{}", render_human(name.as_deref(), &report));
        }
        OutputFormat::Json => {
            let output = ReportOutput::new(source.to_string(), &report);
            println!("{}", render_json(&output)?);
        }
    }

    Ok(report.is_valid())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
