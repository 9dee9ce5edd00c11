//! Interactive commit workflow.
//!
//! Verifies the repository, makes sure something is staged, proposes a message
//! from the staged diff, and loops on the operator's decision until the
//! message is committed or the operator quits.

pub mod prompter;
pub mod staging;
pub mod summary;

#[cfg(test)]
mod testing;

use tracing::{debug, warn};

use crate::composer::MessageComposer;
use crate::error::WorkflowError;
use crate::git::RepositoryGateway;

use self::prompter::Prompter;
use self::staging::prompt_to_stage;
use self::summary::summarize;

const DECISION_PROMPT: &str = "[a]ccept, [r]egenerate, [i]nline edit, [e]ditor, [q]uit";
const CONTEXT_PROMPT: &str = "Additional context for regeneration";
const EDIT_PROMPT: &str = "Commit message";
const CONFIRM_PROMPT: &str = "Commit with this message?";

/// Options taken from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkflowOptions {
    /// Push to the upstream branch after a successful commit.
    pub push: bool,
}

/// Result of an accepted commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowOutcome {
    /// The exact message that was committed.
    pub message: String,
    /// Whether a push was attempted and succeeded.
    pub pushed: bool,
}

/// Operator choice at the decision prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Regenerate,
    InlineEdit,
    ExternalEdit,
    Quit,
}

impl Decision {
    /// Case-insensitive dispatch on a single-character answer.
    pub fn parse(input: &str) -> Option<Self> {
        match single_char(input)?.to_ascii_lowercase() {
            'a' => Some(Self::Accept),
            'r' => Some(Self::Regenerate),
            'i' => Some(Self::InlineEdit),
            'e' => Some(Self::ExternalEdit),
            'q' => Some(Self::Quit),
            _ => None,
        }
    }
}

/// The answer's only character, once surrounding whitespace is trimmed.
pub(crate) fn single_char(input: &str) -> Option<char> {
    let mut chars = input.trim().chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

/// Where the decision loop goes after handling one choice.
enum Step {
    Stay,
    Show,
    Commit,
}

/// One invocation of the commit workflow.
///
/// Holds every collaborator explicitly; nothing is read from global state.
pub struct CommitWorkflow<'a, G: ?Sized, C: ?Sized, P: ?Sized> {
    gateway: &'a G,
    composer: &'a C,
    prompter: &'a mut P,
    options: WorkflowOptions,
}

impl<'a, G, C, P> CommitWorkflow<'a, G, C, P>
where
    G: RepositoryGateway + ?Sized,
    C: MessageComposer + ?Sized,
    P: Prompter + ?Sized,
{
    pub fn new(
        gateway: &'a G,
        composer: &'a C,
        prompter: &'a mut P,
        options: WorkflowOptions,
    ) -> Self {
        Self {
            gateway,
            composer,
            prompter,
            options,
        }
    }

    /// Run to completion: commit (and optionally push), or fail.
    pub fn run(mut self) -> Result<WorkflowOutcome, WorkflowError> {
        println!("Verifying git repository...");
        if !self.gateway.verify_repository() {
            return Err(WorkflowError::NotARepository);
        }

        println!("Checking for staged changes...");
        if !self.gateway.has_staged_changes()? {
            prompt_to_stage(self.gateway, &mut *self.prompter)?;
        }

        println!("Extracting staged diff...");
        let diff = self
            .gateway
            .staged_diff()
            .map_err(WorkflowError::DiffFailed)?;
        if diff.trim().is_empty() {
            return Err(WorkflowError::EmptyDiff);
        }
        debug!("Staged diff: {} bytes", diff.len());

        let gateway = self.gateway;
        let push = self.options.push;
        let message = DecisionLoop {
            composer: self.composer,
            prompter: self.prompter,
            diff: &diff,
            context: String::new(),
        }
        .run()?;

        gateway
            .commit(&message)
            .map_err(WorkflowError::CommitFailed)?;
        println!("Committed.");

        let pushed = push && push_best_effort(gateway);

        Ok(WorkflowOutcome { message, pushed })
    }
}

/// Push after commit; failure is reported but does not fail the workflow.
fn push_best_effort<G: RepositoryGateway + ?Sized>(gateway: &G) -> bool {
    println!("Pushing to upstream...");
    match gateway.push() {
        Ok(()) => true,
        Err(e) => {
            warn!("Push failed: {}", e);
            eprintln!("Warning: push failed: {}", e);
            false
        }
    }
}

/// Proposing / awaiting-decision states, looping until accept or quit.
struct DecisionLoop<'a, C: ?Sized, P: ?Sized> {
    composer: &'a C,
    prompter: &'a mut P,
    diff: &'a str,
    context: String,
}

impl<C, P> DecisionLoop<'_, C, P>
where
    C: MessageComposer + ?Sized,
    P: Prompter + ?Sized,
{
    /// Returns the accepted message.
    fn run(mut self) -> Result<String, WorkflowError> {
        let mut message = self.composer.generate(self.diff, &self.context);
        let mut show = true;

        loop {
            if show {
                display_message(&message);
            }

            let answer = self.prompter.input(DECISION_PROMPT, "")?;
            let step = match Decision::parse(&answer) {
                Some(Decision::Accept) => {
                    if message.trim().is_empty() {
                        eprintln!("Error: refusing to commit an empty message.");
                        Step::Stay
                    } else {
                        Step::Commit
                    }
                }
                Some(Decision::Regenerate) => self.regenerate(&mut message)?,
                Some(Decision::InlineEdit) => self.edit_inline(&mut message)?,
                Some(Decision::ExternalEdit) => self.edit_external(&mut message)?,
                Some(Decision::Quit) => return Err(WorkflowError::Aborted),
                None => {
                    println!("Unrecognized choice {:?}. Enter a, r, i, e, or q.", answer.trim());
                    Step::Stay
                }
            };

            match step {
                Step::Stay => show = false,
                Step::Show => show = true,
                Step::Commit => return Ok(message),
            }
        }
    }

    fn regenerate(&mut self, message: &mut String) -> Result<Step, WorkflowError> {
        let context = self.prompter.input(CONTEXT_PROMPT, "")?;
        if context.trim().is_empty() {
            println!("No context given; keeping the current message.");
            return Ok(Step::Stay);
        }

        self.context = context;
        *message = self.composer.refine(self.diff, message, &self.context);
        Ok(Step::Show)
    }

    fn edit_inline(&mut self, message: &mut String) -> Result<Step, WorkflowError> {
        let edited = self.prompter.input(EDIT_PROMPT, message)?;
        if edited.trim().is_empty() {
            eprintln!("Error: commit message cannot be empty.");
            return Ok(Step::Stay);
        }

        *message = edited;
        Ok(Step::Show)
    }

    fn edit_external(&mut self, message: &mut String) -> Result<Step, WorkflowError> {
        let edited = match self.prompter.edit_external(message)? {
            Some(text) => text,
            None => {
                println!("No editor available; editing inline.");
                self.prompter.input(EDIT_PROMPT, message)?
            }
        };

        if edited.trim().is_empty() {
            eprintln!("Error: commit message cannot be empty.");
            return Ok(Step::Stay);
        }

        *message = edited;
        display_message(message);

        if self.prompter.confirm(CONFIRM_PROMPT, true)? {
            Ok(Step::Commit)
        } else {
            Ok(Step::Stay)
        }
    }
}

fn display_message(message: &str) {
    println!();
    println!("Proposed commit message:");
    println!();
    for line in message.lines() {
        println!("  {}", line);
    }
    println!();

    if let Some(table) = summarize(message) {
        println!("{}", table);
    }
}
