//! Default path helpers and symlink checks.

use dirs::config_dir;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::types::Environment;

/// Config file location: `$BULK_RENAME_CONFIG` if set, else the OS config dir,
/// else `$HOME/.config`.
pub fn default_config_path(env: &Environment) -> Option<PathBuf> {
    resolve_config_path(env, config_dir())
}

fn resolve_config_path(env: &Environment, os_config_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = &env.config_path {
        return Some(p.clone());
    }
    let base = os_config_dir.or_else(|| env.home.as_ref().map(|h| h.join(".config")))?;
    Some(base.join("bulk_rename").join("config.xml"))
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.as_os_str().is_empty() {
            break;
        }
        if anc.exists() {
            let meta = fs::symlink_metadata(anc)?;
            if meta.file_type().is_symlink() {
                return Ok(true);
            }
        }
        p = anc.parent();
    }
    Ok(false)
}
