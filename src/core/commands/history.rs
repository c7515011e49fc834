use super::{Command, CommandError};
use crate::shell::Session;

/// `history` prints numbered entries, `history -c` clears them.
#[derive(Clone, Copy, Default)]
pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> Result<i32, CommandError> {
        match args {
            [] => {
                let stdout = std::io::stdout();
                session.history.print_numbered(&mut stdout.lock())?;
                Ok(0)
            }
            [flag] if flag == "-c" => {
                session.history.clear()?;
                Ok(0)
            }
            _ => Err(CommandError::InvalidArguments("history [-c]")),
        }
    }
}
