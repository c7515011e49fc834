use std::io::Write;

use super::{Command, CommandError};
use crate::shell::Session;

/// `exit [code]`. Terminates the current process, which is the shell itself
/// or, inside a pipe stage or subshell, only that child.
#[derive(Clone, Copy, Default)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(&self, args: &[String], session: &mut Session) -> Result<i32, CommandError> {
        match args {
            [] => terminate(session.last_status),
            [code] => match parse_exit_code(code) {
                Some(value) => terminate((value & 0xff) as i32),
                None => Err(CommandError::NumericArgument("exit")),
            },
            _ => Err(CommandError::InvalidArguments("exit [code]")),
        }
    }
}

fn terminate(status: i32) -> ! {
    let _ = std::io::stdout().flush();
    std::process::exit(status)
}

/// Decimal with optional sign. Out-of-range values saturate.
pub(crate) fn parse_exit_code(text: &str) -> Option<i64> {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(text.parse().unwrap_or(if text.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    }))
}
