//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - A missing file is not an error; unknown fields are.
//!
//! Format:
//! <config>
//!   <editor>nvim</editor>
//!   <log_level>normal</log_level>
//!   <log_file>/path/to/bulk_rename.log</log_file>
//! </config>

use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::types::{Config, LogLevel};
use crate::errors::BulkRenameError;

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    #[serde(rename = "editor")]
    editor: Option<String>,
    #[serde(rename = "log_level")]
    log_level: Option<String>,
    #[serde(rename = "log_file")]
    log_file: Option<String>,
}

/// Settings read from a config file; `None` means "not set there".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileConfig {
    pub editor: Option<String>,
    pub log_level: Option<LogLevel>,
    pub log_file: Option<PathBuf>,
}

impl FileConfig {
    /// Overwrite the fields this file sets.
    pub fn apply(&self, cfg: &mut Config) {
        if let Some(editor) = &self.editor {
            cfg.editor = editor.clone();
        }
        if let Some(level) = &self.log_level {
            cfg.log_level = level.clone();
        }
        if let Some(file) = &self.log_file {
            cfg.log_file = Some(file.clone());
        }
    }
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Parse config XML text. `path` is only used for error messages.
pub fn parse_config_xml(path: &Path, content: &str) -> Result<FileConfig, BulkRenameError> {
    let invalid = |reason: String| BulkRenameError::Config {
        path: path.to_path_buf(),
        reason,
    };
    let parsed: XmlConfig = from_xml_str(content).map_err(|e| invalid(e.to_string()))?;

    let log_level = match non_empty(parsed.log_level) {
        Some(s) => Some(s.parse::<LogLevel>().map_err(invalid)?),
        None => None,
    };

    Ok(FileConfig {
        editor: non_empty(parsed.editor),
        log_level,
        log_file: non_empty(parsed.log_file).map(PathBuf::from),
    })
}

/// Load a config file; `Ok(None)` if it does not exist.
pub fn load_config_file(path: &Path) -> Result<Option<FileConfig>, BulkRenameError> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "No config file");
            return Ok(None);
        }
        Err(e) => {
            return Err(BulkRenameError::io(
                format!("read config '{}'", path.display()),
                e,
            ));
        }
    };
    let cfg = parse_config_xml(path, &content)?;
    debug!(path = %path.display(), ?cfg, "Loaded config file");
    Ok(Some(cfg))
}
