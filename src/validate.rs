//! Structural checks run before any plan is built.
//! Nothing here touches the filesystem; failures leave the tree untouched.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::errors::BulkRenameError;
use crate::plan::RenamePair;

/// Turn CLI paths into editable list entries.
///
/// Entries must be UTF-8 and must not contain a line break (`\n` or `\r`),
/// since the list is edited as plain text with one name per line and a
/// trailing `\r` is stripped as a CRLF line ending when it is read back.
pub fn names_from_paths(paths: &[PathBuf]) -> Result<Vec<String>, BulkRenameError> {
    paths
        .iter()
        .map(|p| {
            let s = p
                .to_str()
                .ok_or_else(|| BulkRenameError::NonUtf8Path(p.clone()))?;
            if s.contains(['\n', '\r']) {
                return Err(BulkRenameError::NewlineInName(s.to_string()));
            }
            Ok(s.to_string())
        })
        .collect()
}

/// Pair up the original and edited lists, keeping only changed entries.
pub fn validate(
    old: &[impl AsRef<str>],
    new: &[impl AsRef<str>],
) -> Result<Vec<RenamePair>, BulkRenameError> {
    if old.len() != new.len() {
        return Err(BulkRenameError::CountMismatch {
            old: old.len(),
            new: new.len(),
        });
    }

    if old.iter().zip(new).all(|(a, b)| a.as_ref() == b.as_ref()) {
        return Err(BulkRenameError::NoChange);
    }

    let mut pairs = Vec::new();
    for (i, (a, b)) in old.iter().zip(new).enumerate() {
        let (a, b) = (a.as_ref(), b.as_ref());
        if b.is_empty() {
            return Err(BulkRenameError::EmptyName { line: i + 1 });
        }
        if a == b {
            continue;
        }
        pairs.push(RenamePair::new(a, b));
    }

    warn_duplicate_targets(&pairs);
    debug!(changed = pairs.len(), total = old.len(), "validated rename lists");
    Ok(pairs)
}

/// Duplicate targets are allowed through; the second move will fail at execution.
pub(crate) fn warn_duplicate_targets(pairs: &[RenamePair]) {
    let mut seen = std::collections::HashSet::new();
    for p in pairs {
        if !seen.insert(&p.new) {
            warn!(new = %p.new.display(), "Several entries are renamed to the same path; only the first can succeed");
        }
    }
}
