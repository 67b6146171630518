//! Free-text reconciliation. No semantic merge: the fragment is either found
//! (whitespace-insensitively) or appended / written over the file.

use crate::core::types::InsertType;

/// Trim and collapse every whitespace run to one space.
pub fn normalize(content: &str) -> String {
    content.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn already_applied(existing: &str, fragment: &str) -> bool {
    normalize(existing).contains(&normalize(fragment))
}

pub fn apply(existing: &str, fragment: &str, insert_type: InsertType) -> String {
    match insert_type {
        InsertType::Replace => fragment.to_string(),
        InsertType::Append | InsertType::Merge => format!("{}\n\n{}", existing, fragment),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existence_is_whitespace_insensitive() {
        assert!(already_applied("a   b\nc", "a b c"));
        assert!(already_applied("x\n\texport const a = 1;\n", "export   const a = 1;"));
    }

    #[test]
    fn existence_is_substring_based() {
        assert!(!already_applied("import a from 'a'", "import b from 'b'"));
    }

    #[test]
    fn replace_overwrites() {
        assert_eq!(apply("old", "new", InsertType::Replace), "new");
    }

    #[test]
    fn append_and_merge_concatenate_with_blank_line() {
        assert_eq!(apply("a", "b", InsertType::Append), "a\n\nb");
        assert_eq!(apply("a", "b", InsertType::Merge), "a\n\nb");
    }
}
