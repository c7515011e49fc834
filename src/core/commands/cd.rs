use super::{Command, CommandError};
use crate::shell::Session;
use std::env;

/// `cd <dir>` or `cd -`.
#[derive(Clone, Copy, Default)]
pub struct CdCommand;

impl Command for CdCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> Result<i32, CommandError> {
        let [target] = args else {
            return Err(CommandError::InvalidArguments("cd <dir|->"));
        };
        let cwd = env::current_dir()?;

        if target == "-" {
            // With nothing recorded yet, `cd -` only reports where we are.
            let Some(previous) = session.previous_dir.clone() else {
                println!("{}", cwd.display());
                return Ok(0);
            };
            env::set_current_dir(&previous).map_err(CommandError::ChangeDir)?;
            session.previous_dir = Some(cwd);
            println!("{}", env::current_dir()?.display());
            return Ok(0);
        }

        env::set_current_dir(target).map_err(CommandError::ChangeDir)?;
        session.previous_dir = Some(cwd);
        Ok(0)
    }
}
