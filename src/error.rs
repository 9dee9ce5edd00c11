//! Error types for commitgen modules using thiserror.

use thiserror::Error;

/// Errors from `git` subprocess invocations.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Failed to run git {operation}: {source}")]
    Spawn {
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("git {operation} failed ({}): {stderr}",
            code.map_or("terminated by signal".to_string(), |c| format!("exit code {c}")))]
    CommandFailed {
        operation: &'static str,
        code: Option<i32>,
        stderr: String,
    },

    #[error("git {operation} exited with unexpected status {}",
            code.map_or("unknown".to_string(), |c| c.to_string()))]
    UnexpectedStatus {
        operation: &'static str,
        code: Option<i32>,
    },
}

/// Errors from interactive terminal prompts.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Terminal prompt failed: {0}")]
    Io(#[from] dialoguer::Error),
}

/// Errors from reading or writing the credential file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine the home directory for the config file")]
    NoConfigDir,

    #[error("Failed to read config file: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to write config file: {0}")]
    Write(#[source] std::io::Error),

    #[error("API key must not be empty")]
    EmptyApiKey,

    #[error(
        "OPENAI_API_KEY is not set. Run `commitgen config` or export OPENAI_API_KEY in your environment"
    )]
    MissingApiKey,
}

/// Terminal failures of the interactive commit workflow.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("Not a git repository. Run commitgen from within a git working tree.")]
    NotARepository,

    #[error("No changes available to stage")]
    NothingToStage,

    #[error("Commit aborted")]
    Aborted,

    #[error("Invalid file selection: {0}")]
    InvalidSelection(String),

    #[error("Failed to read staged diff: {0}")]
    DiffFailed(#[source] GatewayError),

    #[error("Staged diff is empty; nothing to commit")]
    EmptyDiff,

    #[error("Failed to create commit: {0}")]
    CommitFailed(#[source] GatewayError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Prompt(#[from] PromptError),
}

impl WorkflowError {
    /// Process exit status for this failure. Every terminal failure maps to 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
