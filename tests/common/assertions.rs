//! Common assertion helpers for validating binary output

#![allow(dead_code)]

use predicates::prelude::*;

pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("Not in a git repository")
}

pub fn no_staged_files() -> impl Predicate<str> {
    predicates::str::contains("No staged files found")
}

pub fn config_parse_error() -> impl Predicate<str> {
    predicates::str::contains("Failed to parse config file")
}

pub fn duplicate_option(code: &str) -> impl Predicate<str> {
    predicates::str::contains("more than once").and(predicates::str::contains(format!("'{code}'")))
}

/// Errors are printed with the shared error prefix
pub fn error_prefix() -> impl Predicate<str> {
    predicates::str::contains("Error:")
}
