//! Validation of a single note document.
//!
//! This module provides pure functions over the document text. Frontmatter
//! checks accumulate every field error they find; only a missing, malformed,
//! or empty block stops them early. Body checks only ever produce warnings.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde_yaml::{Mapping, Value};
use tracing::trace;

use crate::domain::{
    Field, FilenameChar, FrontmatterError, FrontmatterReport, MAX_TITLE_CHARS, NoteType, Status,
    StructureWarning, ValidationReport, check_tag, check_wikilink, find_wikilinks, title_length,
};
use crate::infra::frontmatter;

/// Prefix of a level-1 heading line.
const H1_PREFIX: &str = "# ";

static DATE_SHAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is valid"));

/// Validates the frontmatter block at the top of `content`.
///
/// Returns a report whose errors are:
/// - exactly one fatal error if the block is missing, is not valid YAML, or
///   is empty;
/// - a missing-field error for every required field when the block is a
///   bare scalar or a list, since it carries no fields;
/// - otherwise one error per violated field rule, in check order (missing
///   fields, `date`, `status`, `type`, `tags`).
pub fn validate_frontmatter(content: &str) -> FrontmatterReport {
    let fields = match frontmatter::parse(content) {
        Ok(fields) => fields,
        Err(err) => {
            trace!(error = %err, "frontmatter rejected before field checks");
            return FrontmatterReport::fatal(err);
        }
    };

    let mut report = FrontmatterReport::new();

    for field in Field::REQUIRED {
        if !fields.contains_key(field.key()) {
            report.push(FrontmatterError::MissingField(field));
        }
    }

    check_date(&fields, &mut report);
    check_status(&fields, &mut report);
    check_type(&fields, &mut report);
    check_tags(&fields, &mut report);

    trace!(errors = report.errors().len(), "frontmatter checked");
    report
}

/// Scans the note body for heading, wikilink, and title problems.
///
/// The body starts after the first `---` line past the opening one. When no
/// such line exists the whole document is scanned.
pub fn validate_content_structure(content: &str) -> Vec<StructureWarning> {
    let body = frontmatter::body_lines(content);
    let mut warnings = Vec::new();

    let titles: Vec<&str> = body
        .iter()
        .filter_map(|line| line.strip_prefix(H1_PREFIX))
        .map(str::trim)
        .collect();

    if titles.is_empty() {
        warnings.push(StructureWarning::MissingHeading);
    }

    let text = body.join("\n");
    for raw in find_wikilinks(&text) {
        if let Err(err) = check_wikilink(raw) {
            warnings.push(StructureWarning::InvalidWikilink(err.raw().to_string()));
        }
    }

    for title in titles {
        let chars = title_length(title);
        if chars > MAX_TITLE_CHARS {
            warnings.push(StructureWarning::TitleTooLong(chars));
        }
        warnings.extend(FilenameChar::found_in(title).map(StructureWarning::UnsafeTitleChar));
    }

    trace!(warnings = warnings.len(), "content structure checked");
    warnings
}

/// Runs both validation stages on one document.
pub fn validate_document(content: &str) -> ValidationReport {
    ValidationReport {
        frontmatter: validate_frontmatter(content),
        warnings: validate_content_structure(content),
    }
}

fn check_date(fields: &Mapping, report: &mut FrontmatterReport) {
    let Some(value) = fields.get(Field::Date.key()) else {
        return;
    };
    let text = render_value(value);
    if !is_calendar_date(&text) {
        report.push(FrontmatterError::InvalidDate(text));
    }
}

fn check_status(fields: &Mapping, report: &mut FrontmatterReport) {
    let Some(value) = fields.get(Field::Status.key()) else {
        return;
    };
    if value.as_str().and_then(|s| s.parse::<Status>().ok()).is_none() {
        report.push(FrontmatterError::InvalidStatus(render_value(value)));
    }
}

fn check_type(fields: &Mapping, report: &mut FrontmatterReport) {
    let Some(value) = fields.get(Field::Type.key()) else {
        return;
    };
    if value.as_str().and_then(|s| s.parse::<NoteType>().ok()).is_none() {
        report.push(FrontmatterError::InvalidType(render_value(value)));
    }
}

fn check_tags(fields: &Mapping, report: &mut FrontmatterReport) {
    let Some(value) = fields.get(Field::Tags.key()) else {
        return;
    };
    let Value::Sequence(tags) = value else {
        report.push(FrontmatterError::TagsNotList);
        return;
    };
    if tags.is_empty() {
        report.push(FrontmatterError::NoTags);
        return;
    }

    for tag in tags {
        match tag {
            Value::String(s) => {
                if check_tag(s).is_err() {
                    report.push(FrontmatterError::InvalidTag(s.clone()));
                }
            }
            other => report.push(FrontmatterError::TagNotString(render_value(other))),
        }
    }
}

/// `YYYY-MM-DD`, zero-padded, naming a real day.
fn is_calendar_date(text: &str) -> bool {
    DATE_SHAPE_RE.is_match(text) && NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok()
}

/// Renders a YAML value the way it is echoed back in error messages.
fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|yaml| yaml.trim_end().to_string())
            .unwrap_or_else(|_| format!("{other:?}")),
    }
}
