use super::Library;
use crate::error::LibraryIssue;

/// Advisory check of a library. An empty result means nothing worth reporting.
pub fn validate_library(library: &Library) -> Vec<LibraryIssue> {
    let mut issues = Vec::new();

    if library.name.trim().is_empty() {
        issues.push(LibraryIssue::MissingName);
    }

    if library.functions.is_empty() && library.classes.is_empty() {
        issues.push(LibraryIssue::NoCallables);
    }

    issues
}
