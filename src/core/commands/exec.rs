use super::{Command, CommandError};
use crate::parser::ArgVector;
use crate::process::{executor, EXIT_NOT_FOUND};
use crate::shell::Session;

/// `exec prog [args...]` replaces the shell. There is no fork, so a failed
/// exec ends the shell with 127.
#[derive(Clone, Copy, Default)]
pub struct ExecCommand;

impl Command for ExecCommand {
    fn execute(&self, args: &[String], _session: &mut Session) -> Result<i32, CommandError> {
        if args.is_empty() {
            return Err(CommandError::InvalidArguments("exec prog [args...]"));
        }

        let argv = ArgVector::from(args.to_vec());
        log::debug!("replacing shell with {:?}", argv.tokens());
        let err = executor::replace(&argv);
        eprintln!("{}", err);
        std::process::exit(EXIT_NOT_FOUND)
    }
}
