//! Prompt construction for model-backed commit message generation.

/// Maximum length for sanitized diff text.
pub const MAX_PROMPT_DIFF_LENGTH: usize = 30_000;

/// Build the prompt asking for a bracket-tagged commit message.
///
/// Includes the sanitized diff and, when non-empty, the operator's context.
pub fn build_commit_prompt(diff: &str, context: &str) -> String {
    let sanitized_diff = sanitize_diff(diff, MAX_PROMPT_DIFF_LENGTH);

    let mut prompt = format!(
        "You are an expert software engineer.\n\
         Generate a Conventional Commit message based on the following git diff.\n\n\
         GIT DIFF:\n{sanitized_diff}\n\n"
    );

    if !context.is_empty() {
        prompt.push_str(&format!("ADDITIONAL CONTEXT:\n{context}\n\n"));
    }

    prompt.push_str(
        "Rules:\n\
         - Use Conventional Commits format\n\
         - For each change type, use the matching prefix: [FEAT], [FIX], [DOCS], [STYLE], [REFACTOR], [PERF], [TEST], [CI], [CHORE]\n\
         - Be concise\n\
         - If multiple change types are present, put each on its own line\n\
         - Example with several change types:\n\
         [FEAT]: add user login feature\n\
         [FIX]: resolve crash on startup\n\
         [DOCS]: update README with setup instructions\n\
         - Use present tense\n\
         - Do not include explanations\n\
         - If no changes are detected, respond with '[CHORE]: no changes detected'\n\
         - Added blank lines, stylistic changes, and whitespace changes are [CHORE]\n\
         - If additional context is given, use it to write a more specific message\n\
         - Cap each line at 100 characters\n",
    );

    prompt
}

/// Sanitize diff text for inclusion in a prompt.
///
/// Removes control characters (keeping newlines and tabs) and ANSI escape
/// sequences, then truncates to `max_len` bytes on a char boundary.
pub fn sanitize_diff(text: &str, max_len: usize) -> String {
    let mut result = remove_control_chars(&remove_ansi_escapes(text));

    if result.len() > max_len {
        let mut end = max_len;
        while end > 0 && !result.is_char_boundary(end) {
            end -= 1;
        }
        result.truncate(end);
    }

    result
}

fn remove_control_chars(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect()
}

/// Strip CSI sequences (`ESC [ ... final-byte`) and lone escapes.
fn remove_ansi_escapes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }
        if chars.peek() == Some(&'[') {
            chars.next();
            // Parameters and intermediates run until a byte in '@'..='~'.
            for next in chars.by_ref() {
                if ('@'..='~').contains(&next) {
                    break;
                }
            }
        }
    }

    out
}
