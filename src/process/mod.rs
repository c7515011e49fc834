use std::ffi::CStr;
use std::fmt;
use std::io;
use std::path::PathBuf;

use nix::errno::Errno;
use nix::sys::wait::WaitStatus;

pub mod executor;
pub mod signal;
pub mod sys;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_SYNTAX: i32 = 2;
pub const EXIT_NOT_FOUND: i32 = 127;
const SIGNAL_BASE: i32 = 128;

#[derive(Debug)]
pub enum ProcessError {
    /// A system call failed; rendered like `perror(call)`.
    Os { call: &'static str, source: io::Error },
    Open { path: PathBuf, source: io::Error },
    InvalidArgument(String),
}

impl ProcessError {
    pub fn os(call: &'static str, errno: Errno) -> Self {
        ProcessError::Os {
            call,
            source: io::Error::from(errno),
        }
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Os { call, source } => write!(f, "{}: {}", call, describe(source)),
            ProcessError::Open { path, source } => {
                write!(f, "{}: {}", path.display(), describe(source))
            }
            ProcessError::InvalidArgument(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ProcessError {}

/// `strerror` text for OS errors, without the `(os error N)` suffix std adds.
pub fn describe(err: &io::Error) -> String {
    match err.raw_os_error() {
        Some(code) => {
            let message = unsafe { libc::strerror(code) };
            if message.is_null() {
                err.to_string()
            } else {
                unsafe { CStr::from_ptr(message) }.to_string_lossy().into_owned()
            }
        }
        None => err.to_string(),
    }
}

/// Shell status for a finished child: exit code, 128+signal, else 1.
pub fn translate_wait_status(status: WaitStatus) -> i32 {
    match status {
        WaitStatus::Exited(_, code) => code,
        WaitStatus::Signaled(_, signal, _) => SIGNAL_BASE + signal as i32,
        _ => EXIT_FAILURE,
    }
}

/// Exit code for a normal exit, 1 for any other termination.
pub fn exit_code_or_failure(status: WaitStatus) -> i32 {
    match status {
        WaitStatus::Exited(_, code) => code,
        _ => EXIT_FAILURE,
    }
}
