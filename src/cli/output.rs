//! Output formats and rendering of validation results.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::{ValidationReport, Verdict};

const RULE_WIDTH: usize = 50;
const BULLET: &str = "   • ";

/// Output format for validation results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Serializable summary of one validated document.
#[derive(Debug, Serialize)]
pub struct ReportOutput {
    pub source: String,
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ReportOutput {
    pub fn new(source: impl Into<String>, report: &ValidationReport) -> Self {
        Self {
            source: source.into(),
            valid: report.is_valid(),
            errors: report.error_messages(),
            warnings: report.warning_messages(),
        }
    }
}

/// Renders a report for a person reading a terminal.
///
/// `name` is the file name, or `None` when the note came from stdin.
pub fn render_human(name: Option<&str>, report: &ValidationReport) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = Vec::new();

    match name {
        Some(name) => lines.push(format!("Validating: {}", name)),
        None => lines.push("Validating provided content".to_string()),
    }
    lines.push(rule.clone());

    if report.is_valid() {
        lines.push("Frontmatter: Valid".to_string());
    } else {
        lines.push("Frontmatter: Invalid".to_string());
        for error in report.error_messages() {
            lines.push(format!("{BULLET}{error}"));
        }
    }

    if !report.warnings.is_empty() {
        lines.push(String::new());
        lines.push("Content Warnings:".to_string());
        for warning in report.warning_messages() {
            lines.push(format!("{BULLET}{warning}"));
        }
    } else if report.is_valid() {
        lines.push("Content Structure: Good".to_string());
    }

    lines.push(rule);

    match report.verdict() {
        Verdict::Clean => lines.push("Perfect! Note is well-formatted.".to_string()),
        Verdict::ValidWithWarnings => lines.push("Valid with minor suggestions".to_string()),
        Verdict::Invalid => {
            lines.push("Note has errors; fix them before committing.".to_string())
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Renders a report as pretty-printed JSON.
pub fn render_json(output: &ReportOutput) -> serde_json::Result<String> {
    serde_json::to_string_pretty(output)
}
