//! Windows implementations of platform helpers (best-effort).
//!
//! Notes:
//! - No POSIX modes; log files get default ACLs.
//! - The no-overwrite rename is check-then-rename.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

/// Open log file for appending (no symlink defense available via std on Windows).
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Rename `src` to `dst`, failing with `AlreadyExists` if `dst` is taken.
pub fn rename_noreplace(src: &Path, dst: &Path) -> io::Result<()> {
    match fs::symlink_metadata(dst) {
        Ok(_) => Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "destination already exists",
        )),
        Err(e) if e.kind() == io::ErrorKind::NotFound => fs::rename(src, dst),
        Err(e) => Err(e),
    }
}

/// ERROR_NOT_SAME_DEVICE
pub fn is_cross_device(e: &io::Error) -> bool {
    e.raw_os_error() == Some(17)
}

/// No-op; directory handles cannot be fsynced through std here.
pub fn fsync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}
