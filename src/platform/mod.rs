//! Platform-specific helpers.
//! This module hides OS differences (Unix/Windows) behind a uniform API so
//! the rest of the codebase can remain platform-agnostic.

#[cfg(unix)]
mod unix;
#[cfg(not(unix))]
mod windows;

#[cfg(unix)]
pub use unix::{fsync_dir, is_cross_device, open_log_file_secure_append, rename_noreplace};

#[cfg(not(unix))]
pub use windows::{fsync_dir, is_cross_device, open_log_file_secure_append, rename_noreplace};
