//! Operator I/O for the commit workflow.

use std::env;
use std::io::{self, Write};
use std::process::Command;

use dialoguer::{Confirm, Input, Password};
use tracing::{debug, warn};

use crate::error::PromptError;

/// Editor used when neither `VISUAL` nor `EDITOR` is set.
const FALLBACK_EDITOR: &str = "vi";

/// Blocking prompts the workflow issues to the operator.
pub trait Prompter {
    /// Read a line of text, pre-filled with `initial`. Blank input is returned as-is.
    fn input(&mut self, prompt: &str, initial: &str) -> Result<String, PromptError>;

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, PromptError>;

    /// Open an external editor seeded with `initial`.
    ///
    /// Returns `Ok(None)` when no editor could be run.
    fn edit_external(&mut self, initial: &str) -> Result<Option<String>, PromptError>;

    /// Read a line without echoing it.
    fn secret(&mut self, prompt: &str) -> Result<String, PromptError>;
}

/// [`Prompter`] backed by `dialoguer` on the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for TerminalPrompter {
    fn input(&mut self, prompt: &str, initial: &str) -> Result<String, PromptError> {
        let value = Input::<String>::new()
            .with_prompt(prompt)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()?;
        Ok(value)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, PromptError> {
        let answer = Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(answer)
    }

    fn edit_external(&mut self, initial: &str) -> Result<Option<String>, PromptError> {
        let Some((program, args)) = resolve_editor_command() else {
            return Ok(None);
        };

        if which::which(&program).is_err() {
            debug!("Editor '{}' not found in PATH", program);
            return Ok(None);
        }

        match run_editor(&program, &args, initial) {
            Ok(edited) => Ok(edited),
            Err(e) => {
                warn!("Failed to run editor '{}': {}", program, e);
                Ok(None)
            }
        }
    }

    fn secret(&mut self, prompt: &str) -> Result<String, PromptError> {
        let value = Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()?;
        Ok(value)
    }
}

/// Seed a temp file with `initial`, open it in the editor, and read it back.
///
/// Returns `Ok(None)` if the editor exits unsuccessfully.
fn run_editor(program: &str, args: &[String], initial: &str) -> io::Result<Option<String>> {
    let mut file = tempfile::Builder::new()
        .prefix("COMMIT_EDITMSG-")
        .suffix(".txt")
        .tempfile()?;
    file.write_all(initial.as_bytes())?;
    file.flush()?;

    let status = Command::new(program).args(args).arg(file.path()).status()?;
    if !status.success() {
        warn!("Editor '{}' exited with {}", program, status);
        return Ok(None);
    }

    let edited = std::fs::read_to_string(file.path())?;
    Ok(Some(edited.trim_end_matches(['\n', '\r']).to_string()))
}

/// Resolve the editor from `VISUAL`, then `EDITOR`, then [`FALLBACK_EDITOR`].
fn resolve_editor_command() -> Option<(String, Vec<String>)> {
    let configured = ["VISUAL", "EDITOR"]
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_EDITOR.to_string());

    split_editor_command(&configured)
}

/// Split an editor setting such as `code --wait` into program and arguments.
fn split_editor_command(command: &str) -> Option<(String, Vec<String>)> {
    let mut parts = command.split_whitespace().map(String::from);
    let program = parts.next()?;
    Some((program, parts.collect()))
}
