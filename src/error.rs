use std::fmt;
use std::io;

use thiserror::Error;

/// Files sharing one byte size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    pub size: u64,
    pub files: Vec<String>,
}

impl fmt::Display for DuplicateGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ({}B)", self.files.join(", "), self.size)
    }
}

#[derive(Debug, Error)]
pub enum FindError {
    #[error("Need to supply arguments")]
    NoArguments,

    #[error(
        "Only a single argument is provided. Provide names file in first argument and additional arguments of files to search in."
    )]
    SingleArgument,

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("File not readable: {0}")]
    FileUnreadable(String),

    #[error("Duplicate files found: {}", render_groups(.0))]
    DuplicateFiles(Vec<DuplicateGroup>),

    #[error("Names file is empty")]
    EmptyNamesFile,

    #[error("Error converting file to string: {path}: {source}")]
    ReadFailure {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl FindError {
    /// Argument-count errors are followed by the manual page.
    pub fn wants_usage(&self) -> bool {
        matches!(self, Self::NoArguments | Self::SingleArgument)
    }
}

fn render_groups(groups: &[DuplicateGroup]) -> String {
    groups
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

pub type Result<T> = std::result::Result<T, FindError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_duplicate_groups_in_order() {
        let err = FindError::DuplicateFiles(vec![
            DuplicateGroup {
                size: 5,
                files: vec!["a.txt".into(), "b.txt".into()],
            },
            DuplicateGroup {
                size: 12,
                files: vec!["c.txt".into(), "d.txt".into(), "e.txt".into()],
            },
        ]);
        assert_eq!(
            err.to_string(),
            "Duplicate files found: [a.txt, b.txt] (5B) [c.txt, d.txt, e.txt] (12B)"
        );
    }

    #[test]
    fn only_argument_count_errors_want_usage() {
        assert!(FindError::NoArguments.wants_usage());
        assert!(FindError::SingleArgument.wants_usage());
        assert!(!FindError::EmptyNamesFile.wants_usage());
        assert!(!FindError::FileNotFound("x".into()).wants_usage());
    }
}
