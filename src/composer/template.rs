//! Deterministic placeholder composer.

use tracing::debug;

use super::MessageComposer;
use super::prompt::build_commit_prompt;

/// Message returned for an empty or whitespace-only diff.
pub const NO_CHANGES_MESSAGE: &str = "chore: no changes detected";

/// Subject used for every non-empty diff.
const TEMPLATE_SUBJECT: &str = "feat: update codebase";

/// Composer that returns a fixed template instead of calling a model.
///
/// The generation prompt is still built so its size shows up in debug logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateComposer;

impl TemplateComposer {
    pub fn new() -> Self {
        Self
    }
}

impl MessageComposer for TemplateComposer {
    fn generate(&self, diff: &str, context: &str) -> String {
        if diff.trim().is_empty() {
            return NO_CHANGES_MESSAGE.to_string();
        }

        let prompt = build_commit_prompt(diff, context);
        debug!("Commit prompt length: {} chars", prompt.len());

        if context.is_empty() {
            TEMPLATE_SUBJECT.to_string()
        } else {
            format!("{TEMPLATE_SUBJECT}\n\nContext: {context}")
        }
    }

    fn refine(&self, diff: &str, previous: &str, context: &str) -> String {
        debug!(
            "Refining {} char message with {} chars of context",
            previous.len(),
            context.len()
        );
        self.generate(diff, context)
    }
}
