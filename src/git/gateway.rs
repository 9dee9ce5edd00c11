//! Repository gateway: the staging, diff, commit, and push operations.
//!
//! All operations use `std::process::Command` to shell out to the system `git`
//! binary, inheriting the user's existing git config, SSH agent, and credential store.
//! Arguments are passed directly to the process and never go through a shell.

use std::path::PathBuf;
use std::process::{Command, Output};

use tracing::debug;

use crate::error::GatewayError;

use super::status::parse_porcelain_paths;

/// Operations the commit workflow needs from version control.
///
/// Every fallible operation reports failure through [`GatewayError`]; callers
/// decide whether a failure is fatal or best-effort.
#[cfg_attr(test, mockall::automock)]
pub trait RepositoryGateway {
    /// True iff the working directory is inside a git working tree.
    fn verify_repository(&self) -> bool;

    /// True iff the index differs from HEAD.
    fn has_staged_changes(&self) -> Result<bool, GatewayError>;

    /// Files with staged, unstaged, or untracked changes, in tool order.
    fn list_modified_files(&self) -> Result<Vec<String>, GatewayError>;

    /// Stage every change in the working tree (`git add .`).
    fn stage_all(&self) -> Result<(), GatewayError>;

    /// Stage a single path, given relative to the repository root.
    fn stage_file(&self, path: &str) -> Result<(), GatewayError>;

    /// Unified diff of the staged content.
    fn staged_diff(&self) -> Result<String, GatewayError>;

    /// Create a commit with exactly `message`.
    fn commit(&self, message: &str) -> Result<(), GatewayError>;

    /// Push the current branch to its configured upstream.
    fn push(&self) -> Result<(), GatewayError>;
}

/// Gateway backed by the `git` executable.
#[derive(Debug, Clone, Default)]
pub struct GitCli {
    workdir: Option<PathBuf>,
}

impl GitCli {
    /// Run git in the current process directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run git inside `dir` instead of the process directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: Some(dir.into()),
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new("git");
        cmd.args(args);
        if let Some(ref dir) = self.workdir {
            cmd.current_dir(dir);
        }
        cmd
    }

    /// Spawn git and wait for it, without interpreting the exit status.
    fn output(&self, args: &[&str], operation: &'static str) -> Result<Output, GatewayError> {
        debug!("Running git {}", args.join(" "));
        self.command(args)
            .output()
            .map_err(|source| GatewayError::Spawn { operation, source })
    }

    /// Run git and return its stdout, failing on any non-zero exit.
    fn run_git(&self, args: &[&str], operation: &'static str) -> Result<String, GatewayError> {
        let output = self.output(args, operation)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GatewayError::CommandFailed {
                operation,
                code: output.status.code(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl RepositoryGateway for GitCli {
    fn verify_repository(&self) -> bool {
        match self.output(&["rev-parse", "--is-inside-work-tree"], "rev-parse") {
            Ok(output) => output.status.success(),
            Err(e) => {
                debug!("Repository check could not run: {}", e);
                false
            }
        }
    }

    fn has_staged_changes(&self) -> Result<bool, GatewayError> {
        let operation = "diff --cached --quiet";
        let output = self.output(&["diff", "--cached", "--quiet"], operation)?;

        // --quiet exits 1 when differences exist.
        match output.status.code() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            code => Err(GatewayError::UnexpectedStatus { operation, code }),
        }
    }

    fn list_modified_files(&self) -> Result<Vec<String>, GatewayError> {
        let stdout = self.run_git(&["status", "--porcelain", "-z"], "status")?;
        Ok(parse_porcelain_paths(&stdout))
    }

    fn stage_all(&self) -> Result<(), GatewayError> {
        self.run_git(&["add", "."], "add").map(|_| ())
    }

    fn stage_file(&self, path: &str) -> Result<(), GatewayError> {
        // Status paths are root-relative; anchor them so a subdirectory cwd still matches.
        let pathspec = format!(":(top){path}");
        self.run_git(&["add", "--", &pathspec], "add").map(|_| ())
    }

    fn staged_diff(&self) -> Result<String, GatewayError> {
        self.run_git(&["diff", "--staged"], "diff --staged")
    }

    fn commit(&self, message: &str) -> Result<(), GatewayError> {
        self.run_git(&["commit", "-m", message], "commit").map(|_| ())
    }

    fn push(&self) -> Result<(), GatewayError> {
        self.run_git(&["push"], "push").map(|_| ())
    }
}
