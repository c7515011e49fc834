//! Process and descriptor calls used by the shell's forking operators.

use std::ffi::CString;
use std::io::{self, Write};
use std::os::unix::io::{IntoRawFd, RawFd};

use nix::errno::Errno;
use nix::fcntl::{fcntl, FcntlArg, FdFlag};
use nix::sys::wait::{waitpid, WaitStatus};
use nix::unistd::{self, ForkResult, Pid};

use super::ProcessError;

pub enum Fork {
    Parent(Pid),
    Child,
}

/// Forks after flushing std's buffered streams so no pending output is
/// written twice.
pub fn fork() -> Result<Fork, ProcessError> {
    flush_std_streams();
    match unsafe { unistd::fork() }.map_err(|e| ProcessError::os("fork", e))? {
        ForkResult::Parent { child } => {
            log::trace!("forked child {}", child);
            Ok(Fork::Parent(child))
        }
        ForkResult::Child => Ok(Fork::Child),
    }
}

/// Forks and runs `body` in the child, which then exits with its status.
/// Returns the child's pid in the parent.
pub fn fork_child<F>(body: F) -> Result<Pid, ProcessError>
where
    F: FnOnce() -> i32,
{
    match fork()? {
        Fork::Parent(pid) => Ok(pid),
        Fork::Child => exit_child(body()),
    }
}

/// Terminates a forked child without running the parent's exit handlers.
pub fn exit_child(status: i32) -> ! {
    flush_std_streams();
    unsafe { libc::_exit(status) }
}

/// Blocks until `pid` terminates.
pub fn wait(pid: Pid) -> Result<WaitStatus, ProcessError> {
    let status = syscall(|| waitpid(pid, None)).map_err(|e| ProcessError::os("waitpid", e))?;
    log::trace!("child {} finished: {:?}", pid, status);
    Ok(status)
}

/// Returns `(read_end, write_end)`. Both ends are closed explicitly by the
/// caller in every process that holds them.
pub fn pipe() -> Result<(RawFd, RawFd), ProcessError> {
    let (read_end, write_end) = unistd::pipe().map_err(|e| ProcessError::os("pipe", e))?;
    Ok((read_end.into_raw_fd(), write_end.into_raw_fd()))
}

pub fn dup2(src: RawFd, dest: RawFd) -> Result<(), ProcessError> {
    unistd::dup2(src, dest)
        .map(drop)
        .map_err(|e| ProcessError::os("dup2", e))
}

pub fn close(fd: RawFd) -> Result<(), ProcessError> {
    unistd::close(fd).map_err(|e| ProcessError::os("close", e))
}

/// Lets `fd` survive a later exec.
pub fn clear_cloexec(fd: RawFd) -> Result<(), ProcessError> {
    let raw = fcntl(fd, FcntlArg::F_GETFD).map_err(|e| ProcessError::os("fcntl", e))?;
    let mut flags = FdFlag::from_bits_truncate(raw);
    flags.remove(FdFlag::FD_CLOEXEC);
    fcntl(fd, FcntlArg::F_SETFD(flags))
        .map(drop)
        .map_err(|e| ProcessError::os("fcntl", e))
}

/// Replaces the process image with `argv[0]`. Only returns on failure.
pub fn execvp(argv: &[CString]) -> io::Error {
    let Some(program) = argv.first() else {
        return io::Error::from(Errno::EINVAL);
    };
    flush_std_streams();
    match unistd::execvp(program, argv) {
        Ok(never) => match never {},
        Err(errno) => io::Error::from(errno),
    }
}

/// Retries `f` until it is not interrupted by a signal.
fn syscall<F, T>(mut f: F) -> nix::Result<T>
where
    F: FnMut() -> nix::Result<T>,
{
    loop {
        match f() {
            Err(Errno::EINTR) => continue,
            result => return result,
        }
    }
}

fn flush_std_streams() {
    let _ = io::stdout().flush();
    let _ = io::stderr().flush();
}
