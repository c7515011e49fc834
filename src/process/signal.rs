use nix::sys::signal::{signal, SigHandler, Signal};

use crate::process::ProcessError;

/// The Rust runtime ignores SIGPIPE and exec'd programs would inherit that,
/// so pipe writers would see EPIPE instead of terminating.
pub fn restore_default_dispositions() -> Result<(), ProcessError> {
    unsafe { signal(Signal::SIGPIPE, SigHandler::SigDfl) }
        .map(drop)
        .map_err(|e| ProcessError::os("signal", e))
}
