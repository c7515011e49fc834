use std::os::unix::io::IntoRawFd;

use super::Session;
use crate::parser::{Chain, Redirect, RedirectTarget};
use crate::process::{exit_code_or_failure, sys, ProcessError, EXIT_FAILURE};

/// Evaluates `chain` in a child whose `dest_fd` has been rewired.
pub(crate) fn run_redirect(
    session: &mut Session,
    chain: &Chain,
    redirect: &Redirect,
) -> Result<i32, ProcessError> {
    let pid = sys::fork_child(|| {
        if let Err(e) = apply(redirect) {
            eprintln!("{}", e);
            return EXIT_FAILURE;
        }
        session.evaluate(chain)
    })?;
    log::debug!("redirect child {} for fd {}", pid, redirect.dest_fd);

    let raw = sys::wait(pid)?;
    Ok(exit_code_or_failure(raw))
}

fn apply(redirect: &Redirect) -> Result<(), ProcessError> {
    let dest = redirect.dest_fd;
    match &redirect.target {
        RedirectTarget::Close => sys::close(dest),
        RedirectTarget::Duplicate(src) => sys::dup2(*src, dest),
        RedirectTarget::Path(path) => {
            let file = redirect
                .mode
                .open_options()
                .open(path)
                .map_err(|source| ProcessError::Open {
                    path: path.clone(),
                    source,
                })?;
            let fd = file.into_raw_fd();
            if fd == dest {
                // std opens with O_CLOEXEC; the descriptor must reach the exec'd program.
                sys::clear_cloexec(fd)
            } else {
                sys::dup2(fd, dest)?;
                sys::close(fd)
            }
        }
    }
}
