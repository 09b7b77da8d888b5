//! Command handlers for the CLI.

mod validate;

pub use validate::{handle_validate, validate_source};
