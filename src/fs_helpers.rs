//! I/O error helpers.
//!
//! Adds the operation, the path and a short platform-aware hint to an
//! io::Error, keeping its ErrorKind so callers can still branch on it.
//!
//! Usage:
//!   fs::create_dir_all(dir).map_err(with_hint("create directory", dir))?;

use std::io;
use std::path::Path;

/// Short advice for a failed rename/mkdir, keyed on the OS error.
fn hint(e: &io::Error) -> Option<&'static str> {
    #[cfg(unix)]
    if let Some(code) = e.raw_os_error() {
        let h = match code {
            libc::EACCES | libc::EPERM => "permission denied; check write permission on both directories",
            libc::EXDEV => "cross-filesystem; rename cannot move entries between filesystems",
            libc::EEXIST | libc::ENOTEMPTY => "target already exists; it is left untouched",
            libc::ENOENT => "path not found; it may have been moved or deleted since the list was written",
            libc::ENOTDIR => "a path component is not a directory",
            libc::EISDIR => "cannot replace a directory with a file",
            libc::EBUSY => "resource busy; close programs using it",
            libc::EROFS => "read-only filesystem",
            libc::ENOSPC => "insufficient space on device",
            libc::ENAMETOOLONG => "filename or path too long",
            libc::ELOOP => "too many symbolic link levels",
            _ => return None,
        };
        return Some(h);
    }
    #[cfg(windows)]
    if let Some(code) = e.raw_os_error() {
        let h = match code {
            5 => "access denied; check permissions",
            17 => "not same device; rename cannot cross volumes",
            32 => "sharing violation; file is in use",
            2 | 3 => "path not found",
            80 | 183 => "target already exists; it is left untouched",
            _ => return None,
        };
        return Some(h);
    }
    match e.kind() {
        io::ErrorKind::PermissionDenied => Some("permission denied"),
        io::ErrorKind::NotFound => Some("path not found"),
        io::ErrorKind::AlreadyExists => Some("target already exists; it is left untouched"),
        io::ErrorKind::Interrupted => Some("stopped before this step ran"),
        _ => None,
    }
}

/// Human-friendly message with op/path plus hint and OS code.
pub fn describe(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);
    if let Some(h) = hint(e) {
        msg.push_str(" (");
        msg.push_str(h);
        msg.push(')');
    }
    msg
}

/// Returns a closure for `.map_err(...)` that enriches the message and keeps the ErrorKind.
pub fn with_hint<'a>(op: &'a str, path: &'a Path) -> impl FnOnce(io::Error) -> io::Error + 'a {
    move |e: io::Error| io::Error::new(e.kind(), describe(op, path, &e))
}
