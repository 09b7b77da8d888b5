//! notecheck - validate note frontmatter and body structure

pub mod cli;
pub mod domain;
pub mod infra;

use std::process::ExitCode;

use anyhow::Result;

use cli::{Cli, config::Config, handlers::handle_validate};

/// Main entry point for the CLI application.
///
/// Returns success only when the note's frontmatter is valid.
pub fn run(cli: &Cli) -> Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let format = config.format(cli.format);

    if handle_validate(&cli.input, format)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
