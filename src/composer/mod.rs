//! Commit message composition from staged diffs.

pub mod prompt;
pub mod template;

pub use prompt::{MAX_PROMPT_DIFF_LENGTH, build_commit_prompt, sanitize_diff};
pub use template::{NO_CHANGES_MESSAGE, TemplateComposer};

/// Produces candidate commit messages from diff text and operator context.
///
/// This is the seam a real generation backend plugs into: the workflow only
/// ever calls these two methods. Implementations must be total and never fail.
#[cfg_attr(test, mockall::automock)]
pub trait MessageComposer {
    /// Compose a message for `diff`, optionally steered by `context`.
    fn generate(&self, diff: &str, context: &str) -> String;

    /// Compose a replacement for `previous` using new `context`.
    fn refine(&self, diff: &str, _previous: &str, context: &str) -> String {
        self.generate(diff, context)
    }
}
