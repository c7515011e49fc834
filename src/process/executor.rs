use super::{describe, sys, translate_wait_status, ProcessError, EXIT_NOT_FOUND, EXIT_SUCCESS};
use crate::parser::ArgVector;

/// Runs an external program in a forked child and waits for it.
pub fn run(argv: &ArgVector) -> Result<i32, ProcessError> {
    let Some(program) = argv.program() else {
        return Ok(EXIT_SUCCESS);
    };
    let c_argv = match argv.to_c_argv() {
        Ok(c_argv) => c_argv,
        Err(_) => {
            eprintln!("{}: invalid argument", program);
            return Ok(EXIT_NOT_FOUND);
        }
    };

    let pid = sys::fork_child(|| {
        let err = sys::execvp(&c_argv);
        eprintln!("{}: {}", program, describe(&err));
        EXIT_NOT_FOUND
    })?;
    log::debug!("started {} as pid {}", program, pid);

    let raw = sys::wait(pid)?;
    Ok(translate_wait_status(raw))
}

/// Replaces the shell itself with `argv`. Returns only if the exec failed.
pub fn replace(argv: &ArgVector) -> ProcessError {
    let Some(program) = argv.program() else {
        return ProcessError::InvalidArgument("exec: missing program".to_string());
    };
    match argv.to_c_argv() {
        Ok(c_argv) => {
            let err = sys::execvp(&c_argv);
            ProcessError::InvalidArgument(format!("{}: {}", program, describe(&err)))
        }
        Err(_) => ProcessError::InvalidArgument(format!("{}: invalid argument", program)),
    }
}
