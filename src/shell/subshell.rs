use super::Session;
use crate::parser::Chain;
use crate::process::{sys, translate_wait_status, ProcessError};

/// Evaluates `inner` in a forked copy of the shell, so `cd` and other
/// builtin side effects stay inside the parentheses.
pub(crate) fn run_subshell(session: &mut Session, inner: &Chain) -> Result<i32, ProcessError> {
    let pid = sys::fork_child(|| session.evaluate(inner))?;
    log::debug!("subshell running as pid {}", pid);
    let raw = sys::wait(pid)?;
    Ok(translate_wait_status(raw))
}
