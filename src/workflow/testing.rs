//! Scripted operator for driving the workflow in tests.

use std::collections::VecDeque;

use crate::error::PromptError;

use super::prompter::Prompter;

/// Replays canned answers and records the pre-filled text of each input.
pub(crate) struct ScriptedPrompter {
    inputs: VecDeque<String>,
    confirms: VecDeque<bool>,
    editor: Option<Option<String>>,
    initials: Vec<String>,
}

impl ScriptedPrompter {
    pub(crate) fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            confirms: VecDeque::new(),
            editor: None,
            initials: Vec::new(),
        }
    }

    /// What every external edit returns; `None` means no editor is available.
    pub(crate) fn with_editor(mut self, result: Option<&str>) -> Self {
        self.editor = Some(result.map(String::from));
        self
    }

    pub(crate) fn with_confirms(mut self, answers: &[bool]) -> Self {
        self.confirms = answers.iter().copied().collect();
        self
    }

    /// Initial text passed to each `input` call, in order.
    pub(crate) fn initials(&self) -> &[String] {
        &self.initials
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.inputs.is_empty() && self.confirms.is_empty()
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, prompt: &str, initial: &str) -> Result<String, PromptError> {
        self.initials.push(initial.to_string());
        Ok(self
            .inputs
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected prompt: {prompt}")))
    }

    fn confirm(&mut self, prompt: &str, _default: bool) -> Result<bool, PromptError> {
        Ok(self
            .confirms
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected confirmation: {prompt}")))
    }

    fn edit_external(&mut self, _initial: &str) -> Result<Option<String>, PromptError> {
        Ok(self
            .editor
            .clone()
            .unwrap_or_else(|| panic!("unexpected external edit")))
    }

    fn secret(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.input(prompt, "")
    }
}
