//! Typed error definitions for bulk_rename.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::plan::{Phase, Step};

#[derive(Debug, Error)]
pub enum BulkRenameError {
    #[error("Usage: {0} [directory|file]...")]
    Usage(String),

    #[error("Number of new files ({new}) does not match the number of old files ({old}).")]
    CountMismatch { old: usize, new: usize },

    #[error("No renaming to be done.")]
    NoChange,

    #[error("Error in parsing review file at line {line}: {content:?} (expected `<old> -> <new>`)")]
    MalformedPair { line: usize, content: String },

    #[error("New name on line {line} is empty")]
    EmptyName { line: usize },

    #[error("Path is not valid UTF-8 and cannot be edited as text: {0}")]
    NonUtf8Path(PathBuf),

    #[error("Path contains a line break and cannot be edited one-per-line: {0:?}")]
    NewlineInName(String),

    #[error("Editor '{command}' failed: {reason}")]
    EditorFailed { command: String, reason: String },

    #[error("Invalid configuration in {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error("Operation interrupted by user")]
    Interrupted,

    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

impl BulkRenameError {
    /// Stable short code for structured logs.
    pub fn code(&self) -> &'static str {
        match self {
            BulkRenameError::Usage(_) => "usage",
            BulkRenameError::CountMismatch { .. } => "count_mismatch",
            BulkRenameError::NoChange => "no_change",
            BulkRenameError::MalformedPair { .. } => "malformed_pair",
            BulkRenameError::EmptyName { .. } => "empty_name",
            BulkRenameError::NonUtf8Path(_) => "non_utf8_path",
            BulkRenameError::NewlineInName(_) => "newline_in_name",
            BulkRenameError::EditorFailed { .. } => "editor_failed",
            BulkRenameError::Config { .. } => "config",
            BulkRenameError::Io { .. } => "io",
            BulkRenameError::Interrupted => "interrupted",
            BulkRenameError::Execution(_) => "execution",
        }
    }

    /// Process exit status for this failure. Every failure exits with 1.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Wrap an io::Error with a short description of what was being attempted.
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        BulkRenameError::Io {
            context: context.into(),
            source,
        }
    }
}

/// A step of a rename plan failed. Steps before `number` already took effect.
#[derive(Debug, Error)]
#[error("{phase} step {number} of {total} failed ({step}): {source}")]
pub struct ExecutionError {
    /// One-based position of the failing step in the whole plan.
    pub number: usize,
    pub total: usize,
    pub phase: Phase,
    pub step: Step,
    #[source]
    pub source: io::Error,
    /// Entries moved to a staging path whose final move never ran: (staging, old).
    pub stranded: Vec<(PathBuf, PathBuf)>,
}

impl ExecutionError {
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}
