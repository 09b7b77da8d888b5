//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `notecheck` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct NoteCheckCommand {
    args: Vec<String>,
    stdin: Option<String>,
}

impl NoteCheckCommand {
    /// Creates a new command for the `notecheck` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            stdin: None,
        }
    }

    /// Sets the `--config` option to an explicit config file.
    pub fn config(mut self, path: &Path) -> Self {
        self.args.push("--config".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("notecheck").expect("Failed to find notecheck binary");
        cmd.args(&self.args);
        cmd.env_remove("RUST_LOG");
        if let Some(stdin) = self.stdin {
            cmd.write_stdin(stdin);
        }
        cmd.assert()
    }

    /// Runs the command and returns stdout as a string, whatever the exit status.
    pub fn output(self) -> String {
        let output = self.assert().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command and parses stdout as JSON, whatever the exit status.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Input Shortcuts
    // ===========================================

    /// Validates the note at `path`.
    pub fn file(self, path: &Path) -> Self {
        self.args([path.to_string_lossy()])
    }

    /// Validates `content` piped through stdin.
    pub fn stdin(mut self, content: impl Into<String>) -> Self {
        self.stdin = Some(content.into());
        self.args(["-"])
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for NoteCheckCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_runs_binary() {
        NoteCheckCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = NoteCheckCommand::new().format_json().stdin("text");
        let args = cmd.get_args();
        assert_eq!(args, ["--format", "json", "-"]);
    }
}
