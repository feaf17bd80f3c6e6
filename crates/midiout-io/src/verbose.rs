//! Process-wide verbose diagnostics switch.
//!
//! When enabled, port lifecycle events (open, close) are logged at `info`
//! level. Errors are always logged regardless of this flag.

use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Enable or disable verbose port logging for every `Output` in the process.
pub fn set_verbose(on: bool) {
    VERBOSE.store(on, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}
