//! Configuration: types, default paths, XML loading and layering.
//!
//! Precedence (highest first): CLI flags, config file, `$EDITOR`, built-in defaults.
//! CLI flags are applied by the caller (see `cli::Args::apply_overrides`).

pub mod paths;
pub mod types;
pub mod xml;

pub use paths::{default_config_path, path_has_symlink_ancestor};
pub use types::{Config, Environment, LogLevel};
pub use xml::{FileConfig, load_config_file, parse_config_xml};

use std::path::PathBuf;

use crate::errors::BulkRenameError;

/// Editor used when nothing else is configured.
pub const DEFAULT_EDITOR: &str = "vim";
pub const EDITOR_ENV: &str = "EDITOR";
pub const CONFIG_ENV: &str = "BULK_RENAME_CONFIG";
pub const HOME_ENV: &str = "HOME";

/// Build a Config from defaults, the environment and the config file.
/// Returns the config path that was consulted, if any.
pub fn load(env: &Environment) -> Result<(Config, Option<PathBuf>), BulkRenameError> {
    let mut cfg = Config::default();
    if let Some(editor) = &env.editor {
        cfg.editor = editor.clone();
    }

    let path = default_config_path(env);
    if let Some(p) = &path
        && let Some(file) = load_config_file(p)?
    {
        file.apply(&mut cfg);
    }
    Ok((cfg, path))
}
