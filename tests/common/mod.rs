//! Shared test utilities for git-commands integration tests
//!
//! Tests run the real binaries against temporary git repositories. Interactive
//! screens are never driven; only the paths that end before the UI starts.

pub mod assertions;
pub mod fixtures;
pub mod repository;
