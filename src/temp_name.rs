//! Staging name generation.
//! Produces sibling paths that do not exist yet, for parking entries between
//! the stage and commit phases of a rename plan.
//!
//! Notes:
//! - Nothing is created on disk; absence is only guaranteed at check time.
//! - A process-wide counter keeps repeated calls distinct even within the same nanosecond.
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Upper bound on candidates tried before giving up on a directory.
const MAX_ATTEMPTS: u32 = 1000;

/// Supplies candidate file names (not paths) for staging entries.
pub trait NameSource {
    fn candidate(&mut self) -> OsString;
}

/// Default source. Pattern: .bulk_rename.<pid>.<nanos>.<seq>
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessNames;

impl NameSource for ProcessNames {
    fn candidate(&mut self) -> OsString {
        let pid = std::process::id();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
        OsString::from(format!(".bulk_rename.{pid}.{nanos}.{seq}"))
    }
}

/// True if nothing at all (including a dangling symlink) lives at `p`.
fn is_vacant(p: &Path) -> io::Result<bool> {
    match fs::symlink_metadata(p) {
        Ok(_) => Ok(false),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(true),
        Err(e) => Err(e),
    }
}

/// Return `dir/<candidate>` for a candidate that does not exist in `dir`.
pub fn fresh_name(dir: &Path) -> io::Result<PathBuf> {
    fresh_name_with(&mut ProcessNames, dir, |_| false)
}

/// Like [`fresh_name`], drawing candidates from `source` and also skipping
/// any path for which `reserved` returns true.
pub fn fresh_name_with<N, F>(source: &mut N, dir: &Path, reserved: F) -> io::Result<PathBuf>
where
    N: NameSource + ?Sized,
    F: Fn(&Path) -> bool,
{
    for _ in 0..MAX_ATTEMPTS {
        let candidate = dir.join(source.candidate());
        if reserved(&candidate) {
            continue;
        }
        if is_vacant(&candidate)? {
            return Ok(candidate);
        }
    }
    Err(io::Error::new(
        io::ErrorKind::AlreadyExists,
        format!(
            "no free staging name in '{}' after {MAX_ATTEMPTS} attempts",
            dir.display()
        ),
    ))
}
