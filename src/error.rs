// ==============================================================================
// error.rs - Report Error Kinds
// ==============================================================================
// Description: Recoverable error kinds surfaced through the session error slot
// Author: Matt Barham
// Created: 2026-06-02
// Modified: 2026-08-19
// Version: 1.0.0
// ==============================================================================

use thiserror::Error;

/// Errors that can occur while loading inputs or answering a search.
///
/// All variants are recoverable at the boundary: they are surfaced as a
/// single user-visible message and the user re-attempts with new input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("Invalid file type: expected {expected}, got '{file_name}'")]
    InvalidFileType {
        expected: &'static str,
        file_name: String,
    },

    #[error("Parse failure: {0}")]
    ParseFailure(String),

    #[error("Missing input: {0}")]
    MissingInput(&'static str),

    #[error("No match found for '{0}'")]
    NoMatch(String),
}
