//! Process-wide cancellation flag.
//! The Ctrl-C handler sets it; the session checks it after each edit and the
//! executor before each step, so an interrupt never lands mid-rename.
//!
//! Relaxed atomics are sufficient for a one-way "stop" flag.
use std::sync::atomic::{AtomicBool, Ordering};

static SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// Request a cooperative stop (idempotent, signal-handler safe).
#[inline]
pub fn request() {
    SHUTDOWN.store(true, Ordering::Relaxed);
}

#[inline]
pub fn is_requested() -> bool {
    SHUTDOWN.load(Ordering::Relaxed)
}

/// Test-only: clear the flag.
#[cfg(test)]
#[inline]
pub fn reset() {
    SHUTDOWN.store(false, Ordering::Relaxed);
}
