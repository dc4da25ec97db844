//! External editor invocation.
//! One blocking child process per edit; the exit status is checked.

use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use crate::errors::BulkRenameError;

/// Something that lets the user modify a text file in place.
pub trait Editor {
    fn edit(&self, file: &Path) -> Result<(), BulkRenameError>;
}

impl<E: Editor + ?Sized> Editor for &E {
    fn edit(&self, file: &Path) -> Result<(), BulkRenameError> {
        (**self).edit(file)
    }
}

/// Runs a command line such as `vim` or `code --wait`, with the file appended.
#[derive(Debug, Clone)]
pub struct CommandEditor {
    command: String,
}

impl CommandEditor {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    fn failed(&self, reason: impl Into<String>) -> BulkRenameError {
        BulkRenameError::EditorFailed {
            command: self.command.clone(),
            reason: reason.into(),
        }
    }
}

impl Editor for CommandEditor {
    fn edit(&self, file: &Path) -> Result<(), BulkRenameError> {
        let mut parts = self.command.split_ascii_whitespace();
        let program = parts.next().ok_or_else(|| self.failed("empty editor command"))?;

        info!(editor = %self.command, file = %file.display(), "Opening editor");
        let status = Command::new(program)
            .args(parts)
            .arg(file)
            .status()
            .map_err(|e| self.failed(format!("could not start '{program}': {e}")))?;
        debug!(?status, "Editor exited");

        if status.success() {
            Ok(())
        } else {
            Err(self.failed(format!("exited with {status}")))
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn true_succeeds() {
        let f = tempfile::NamedTempFile::new().unwrap();
        CommandEditor::new("true").edit(f.path()).unwrap();
    }

    #[test]
    fn nonzero_exit_is_reported() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let err = CommandEditor::new("false").edit(f.path()).unwrap_err();
        assert_eq!(err.code(), "editor_failed");
    }

    #[test]
    fn arguments_are_split_from_program() {
        let f = tempfile::NamedTempFile::new().unwrap();
        // Runs `env true <file>`; only works if "true" is passed as an argument.
        CommandEditor::new("env  true").edit(f.path()).unwrap();
        assert!(CommandEditor::new("env false").edit(f.path()).is_err());
    }

    #[test]
    fn missing_program_is_reported() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let err = CommandEditor::new("definitely-not-an-editor-xyz")
            .edit(f.path())
            .unwrap_err();
        assert!(err.to_string().contains("could not start"));
    }

    #[test]
    fn empty_command_rejected() {
        let f = tempfile::NamedTempFile::new().unwrap();
        assert!(CommandEditor::new("   ").edit(f.path()).is_err());
    }
}
