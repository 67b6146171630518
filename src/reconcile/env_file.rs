//! `.env` reconciliation: presence is decided by key only, values are never
//! compared or rewritten.

use std::collections::HashSet;

/// Fragment lines worth reconciling: non-blank, not a `#` comment.
fn fragment_lines(fragment: &str) -> impl Iterator<Item = &str> {
    fragment.split('\n').filter(|line| {
        let trimmed = line.trim();
        !trimmed.is_empty() && !trimmed.starts_with('#')
    })
}

fn key_of(line: &str) -> &str {
    line.split('=').next().unwrap_or_default()
}

pub fn already_applied(existing: &str, fragment: &str) -> bool {
    let existing_lines: Vec<&str> = existing.split('\n').map(str::trim).collect();

    fragment_lines(fragment).all(|line| {
        let prefix = format!("{}=", key_of(line.trim()));
        existing_lines.iter().any(|current| current.starts_with(&prefix))
    })
}

/// Append the fragment lines whose key is missing, separated by a blank line.
/// Returns `existing` untouched when every key is already defined.
pub fn apply(existing: &str, fragment: &str) -> String {
    let existing_keys: HashSet<&str> = existing
        .split('\n')
        .filter(|line| line.contains('='))
        .map(|line| key_of(line).trim())
        .collect();

    let missing: Vec<&str> = fragment_lines(fragment)
        .filter(|line| !existing_keys.contains(key_of(line).trim()))
        .collect();

    if missing.is_empty() {
        return existing.to_string();
    }

    format!("{}\n\n{}", existing, missing.join("\n"))
}
