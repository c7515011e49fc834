use std::os::unix::io::RawFd;

use super::Session;
use crate::parser::Chain;
use crate::process::{sys, translate_wait_status, ProcessError, EXIT_FAILURE};

/// Runs `left | right`. Both stages are forked before either is awaited;
/// the status is the right stage's.
pub(crate) fn run_pipe(
    session: &mut Session,
    left: &Chain,
    right: &Chain,
) -> Result<i32, ProcessError> {
    let (read_end, write_end) = sys::pipe()?;

    let left_pid = match sys::fork_child(|| {
        if let Err(e) = wire_stage(read_end, write_end, libc::STDOUT_FILENO) {
            eprintln!("{}", e);
            return EXIT_FAILURE;
        }
        session.evaluate(left)
    }) {
        Ok(pid) => pid,
        Err(e) => {
            close_both(read_end, write_end);
            return Err(e);
        }
    };

    let right_pid = match sys::fork_child(|| {
        if let Err(e) = wire_stage(write_end, read_end, libc::STDIN_FILENO) {
            eprintln!("{}", e);
            return EXIT_FAILURE;
        }
        session.evaluate(right)
    }) {
        Ok(pid) => pid,
        Err(e) => {
            close_both(read_end, write_end);
            let _ = sys::wait(left_pid);
            return Err(e);
        }
    };
    log::debug!("pipe stages running as {} | {}", left_pid, right_pid);

    close_both(read_end, write_end);

    // The left stage's status never matters, only that it is reaped.
    if let Err(e) = sys::wait(left_pid) {
        log::warn!("couldn't reap left pipe stage {}: {}", left_pid, e);
    }
    let raw = sys::wait(right_pid)?;
    Ok(translate_wait_status(raw))
}

/// In a stage child: drop the unused end, move `keep` onto `target`.
fn wire_stage(unused: RawFd, keep: RawFd, target: RawFd) -> Result<(), ProcessError> {
    sys::close(unused)?;
    if keep != target {
        sys::dup2(keep, target)?;
        sys::close(keep)?;
    }
    Ok(())
}

fn close_both(read_end: RawFd, write_end: RawFd) {
    let _ = sys::close(read_end);
    let _ = sys::close(write_end);
}
