//! Staging prompt shown when the index is empty.

use tracing::warn;

use crate::error::WorkflowError;
use crate::git::RepositoryGateway;

use super::prompter::Prompter;
use super::single_char;

const STAGING_PROMPT: &str = "No staged changes. Stage [a]ll, [s]elect files, or [q]uit?";
const SELECTION_PROMPT: &str = "Files to stage (comma-separated numbers)";

/// What the operator wants to do about an empty index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StagingChoice {
    All,
    Select,
    Quit,
}

impl StagingChoice {
    fn parse(input: &str) -> Option<Self> {
        match single_char(input)?.to_ascii_lowercase() {
            'a' => Some(Self::All),
            's' => Some(Self::Select),
            'q' => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Ask the operator how to stage changes, then stage them.
///
/// Staging failures are logged and otherwise ignored; an empty staged diff
/// later in the workflow is what surfaces them.
pub fn prompt_to_stage<G, P>(gateway: &G, prompter: &mut P) -> Result<(), WorkflowError>
where
    G: RepositoryGateway + ?Sized,
    P: Prompter + ?Sized,
{
    loop {
        let answer = prompter.input(STAGING_PROMPT, "")?;
        match StagingChoice::parse(&answer) {
            Some(StagingChoice::All) => {
                if let Err(e) = gateway.stage_all() {
                    warn!("Staging all files failed: {}", e);
                }
                println!("Staged all changes.");
                return Ok(());
            }
            Some(StagingChoice::Select) => return select_and_stage(gateway, prompter),
            Some(StagingChoice::Quit) => return Err(WorkflowError::Aborted),
            None => println!("Please answer a, s, or q."),
        }
    }
}

fn select_and_stage<G, P>(gateway: &G, prompter: &mut P) -> Result<(), WorkflowError>
where
    G: RepositoryGateway + ?Sized,
    P: Prompter + ?Sized,
{
    let files = gateway.list_modified_files()?;
    if files.is_empty() {
        return Err(WorkflowError::NothingToStage);
    }

    println!("Modified files:");
    for (i, file) in files.iter().enumerate() {
        println!("  {}. {}", i + 1, file);
    }

    let answer = prompter.input(SELECTION_PROMPT, "")?;
    let selected = parse_selection(&answer, files.len())?;

    for index in selected {
        let path = &files[index];
        match gateway.stage_file(path) {
            Ok(()) => println!("Staged {}", path),
            Err(e) => warn!("Staging {} failed: {}", path, e),
        }
    }

    Ok(())
}

/// Parse a comma-separated list of 1-based indices into 0-based positions.
///
/// Duplicates are dropped, keeping first-seen order. Blank input, non-numeric
/// tokens, and indices outside `1..=count` are rejected.
pub fn parse_selection(input: &str, count: usize) -> Result<Vec<usize>, WorkflowError> {
    if input.trim().is_empty() {
        return Err(WorkflowError::InvalidSelection("no files selected".into()));
    }

    let mut selected = Vec::new();
    for token in input.split(',') {
        let token = token.trim();
        let number: usize = token
            .parse()
            .map_err(|_| WorkflowError::InvalidSelection(format!("'{}' is not a number", token)))?;

        if number == 0 || number > count {
            return Err(WorkflowError::InvalidSelection(format!(
                "{} is out of range 1-{}",
                number, count
            )));
        }

        let index = number - 1;
        if !selected.contains(&index) {
            selected.push(index);
        }
    }

    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection_single_and_multiple() {
        assert_eq!(parse_selection("2", 3).unwrap(), vec![1]);
        assert_eq!(parse_selection("1, 3", 3).unwrap(), vec![0, 2]);
    }

    #[test]
    fn test_parse_selection_dedups_in_order() {
        assert_eq!(parse_selection("3,1,3", 3).unwrap(), vec![2, 0]);
    }

    #[test]
    fn test_parse_selection_rejects_non_numeric() {
        let err = parse_selection("1,x", 3).unwrap_err();
        assert!(matches!(err, WorkflowError::InvalidSelection(ref m) if m.contains("'x'")));
    }

    #[test]
    fn test_parse_selection_rejects_out_of_range() {
        assert!(parse_selection("0", 3).is_err());
        assert!(parse_selection("4", 3).is_err());
        assert!(parse_selection("-1", 3).is_err());
    }

    #[test]
    fn test_parse_selection_rejects_blank_and_empty_tokens() {
        assert!(parse_selection("", 3).is_err());
        assert!(parse_selection("   ", 3).is_err());
        assert!(parse_selection("1,,2", 3).is_err());
    }

    #[test]
    fn test_staging_choice_is_case_insensitive() {
        assert_eq!(StagingChoice::parse("A"), Some(StagingChoice::All));
        assert_eq!(StagingChoice::parse(" s "), Some(StagingChoice::Select));
        assert_eq!(StagingChoice::parse("Q"), Some(StagingChoice::Quit));
        assert_eq!(StagingChoice::parse("x"), None);
        assert_eq!(StagingChoice::parse(""), None);
    }

    #[test]
    fn test_staging_choice_rejects_words() {
        assert_eq!(StagingChoice::parse("all"), None);
        assert_eq!(StagingChoice::parse("select"), None);
        assert_eq!(StagingChoice::parse("quit"), None);
    }
}
