//! Per-type breakdown of bracket-tagged commit messages.

use console::style;

/// One `[TAG]: description` line of a commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEntry {
    pub tag: String,
    pub description: String,
}

/// Minimum number of tagged lines before the breakdown table is shown.
pub const SUMMARY_THRESHOLD: usize = 2;

/// Parse a single line as a tagged change entry.
///
/// A line qualifies when it starts with `[`, has a later `]`, and at least two
/// characters follow that `]`. The tag is the text between the brackets; the
/// description is what follows the separator character after `]`, with
/// leading whitespace removed.
pub fn parse_change_entry(line: &str) -> Option<ChangeEntry> {
    let line = line.trim_end();
    let rest = line.strip_prefix('[')?;
    let close = rest.find(']')?;

    let tag = &rest[..close];
    let after = &rest[close + 1..];
    if after.chars().count() < 2 {
        return None;
    }

    let mut chars = after.chars();
    chars.next();

    Some(ChangeEntry {
        tag: tag.to_string(),
        description: chars.as_str().trim_start().to_string(),
    })
}

/// Parse every qualifying line of `message`, in order.
pub fn parse_change_entries(message: &str) -> Vec<ChangeEntry> {
    message.lines().filter_map(parse_change_entry).collect()
}

/// Render entries as a two-column `Type | Description` table.
pub fn render_summary_table(entries: &[ChangeEntry]) -> String {
    const TYPE_HEADER: &str = "Type";
    const DESCRIPTION_HEADER: &str = "Description";

    let tag_width = entries
        .iter()
        .map(|e| e.tag.chars().count())
        .chain(std::iter::once(TYPE_HEADER.len()))
        .max()
        .unwrap_or(TYPE_HEADER.len());
    let description_width = entries
        .iter()
        .map(|e| e.description.chars().count())
        .chain(std::iter::once(DESCRIPTION_HEADER.len()))
        .max()
        .unwrap_or(DESCRIPTION_HEADER.len());

    let mut table = String::new();
    table.push_str(&format!(
        "{}  {}\n",
        style(format!("{:<tag_width$}", TYPE_HEADER)).bold(),
        style(DESCRIPTION_HEADER).bold()
    ));
    table.push_str(&format!(
        "{}  {}\n",
        "-".repeat(tag_width),
        "-".repeat(description_width)
    ));

    for entry in entries {
        table.push_str(&format!(
            "{}  {}\n",
            style(format!("{:<tag_width$}", entry.tag)).cyan(),
            entry.description
        ));
    }

    table
}

/// The breakdown table for `message`, if it has enough tagged lines.
pub fn summarize(message: &str) -> Option<String> {
    let entries = parse_change_entries(message);
    (entries.len() >= SUMMARY_THRESHOLD).then(|| render_summary_table(&entries))
}
