//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.
//! - Environment is the one place process environment variables are read.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::{CONFIG_ENV, DEFAULT_EDITOR, EDITOR_ENV, HOME_ENV};

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration for one rename session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Editor command line; the file to edit is appended as the last argument
    pub editor: String,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// If true, plan and print but do not touch the filesystem
    pub dry_run: bool,
    /// Where to write the equivalent shell script, if anywhere
    pub script_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            editor: DEFAULT_EDITOR.to_string(),
            log_level: LogLevel::Normal,
            log_file: None,
            dry_run: false,
            script_path: None,
        }
    }
}

/// Environment values captured once at start-up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// `$EDITOR`, if set and not blank
    pub editor: Option<String>,
    /// `$BULK_RENAME_CONFIG`: explicit config file path
    pub config_path: Option<PathBuf>,
    /// `$HOME`, used when the platform has no config directory
    pub home: Option<PathBuf>,
}

impl Environment {
    pub fn capture() -> Self {
        Self {
            editor: env::var(EDITOR_ENV).ok().filter(|s| !s.trim().is_empty()),
            config_path: env::var_os(CONFIG_ENV)
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
            home: env::var_os(HOME_ENV)
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
        }
    }
}
