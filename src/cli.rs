//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - Paths are optional at the clap level so a bare invocation can print the
//!   short usage line and exit 1 instead of clap's usage error (exit 2).
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};

/// Rename files and directories by editing their names in a text editor.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Bulk-rename files by editing their names in $EDITOR"
)]
pub struct Args {
    /// Files or directories to rename.
    #[arg(value_name = "PATH", value_hint = ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Editor command (overrides config file and $EDITOR).
    #[arg(long, value_name = "CMD", help = "Editor command, e.g. \"code --wait\"")]
    pub editor: Option<String>,

    /// Dry-run: print the plan and script, but rename nothing.
    #[arg(
        short = 'n',
        long,
        help = "Show what would be renamed, but do not modify files/directories"
    )]
    pub dry_run: bool,

    /// Write the equivalent shell script to FILE (audit trail).
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub script: Option<PathBuf>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(
        long,
        value_name = "LEVEL",
        value_parser = parse_log_level,
        help = "Set log level: quiet, normal, info, debug"
    )]
    pub log_level: Option<LogLevel>,

    /// Print where bulk_rename will look for the config file, then exit.
    #[arg(long, help = "Print the config file location used by bulk_rename and exit")]
    pub print_config: bool,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.clone()
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(editor) = self.editor.as_ref().filter(|e| !e.trim().is_empty()) {
            cfg.editor = editor.clone();
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
        if let Some(script) = &self.script {
            cfg.script_path = Some(script.clone());
        }
    }
}

fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    s.parse()
}

pub fn parse() -> Args {
    Args::parse()
}
