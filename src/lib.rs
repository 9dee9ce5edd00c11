//! commitgen - An interactive CLI that drafts commit messages for staged changes.
//!
//! # Overview
//!
//! commitgen reads the staged diff through the system `git` binary, proposes a
//! commit message, and lets the operator accept, regenerate with extra context,
//! or edit it before committing and optionally pushing.

pub mod composer;
pub mod config;
pub mod error;
pub mod git;
pub mod workflow;

// Re-export commonly used types
pub use composer::{MessageComposer, TemplateComposer};
pub use error::{ConfigError, GatewayError, PromptError, WorkflowError};
pub use git::{GitCli, RepositoryGateway};
pub use workflow::prompter::{Prompter, TerminalPrompter};
pub use workflow::summary::ChangeEntry;
pub use workflow::{CommitWorkflow, WorkflowOptions, WorkflowOutcome};
