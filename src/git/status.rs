//! Parsing of `git status --porcelain -z` output.

/// Extract the paths reported by `git status --porcelain -z`, in tool order.
///
/// Each record is `XY <path>` terminated by NUL. Renames and copies carry a
/// second NUL-terminated record holding the source path, which is skipped so
/// only the destination is returned.
pub fn parse_porcelain_paths(output: &str) -> Vec<String> {
    let mut paths = Vec::new();
    let mut records = output.split('\0');

    while let Some(record) = records.next() {
        if record.len() < 4 {
            continue;
        }

        let (status, path) = record.split_at(3);
        let path = path.trim_end_matches(['\n', '\r']);
        if !path.is_empty() {
            paths.push(path.to_string());
        }

        if status.contains('R') || status.contains('C') {
            records.next();
        }
    }

    paths
}
