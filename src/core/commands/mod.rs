mod cd;
mod exec;
mod exit;
mod history;

pub use cd::CdCommand;
pub use exec::ExecCommand;
pub use exit::ExitCommand;
pub use history::HistoryCommand;

use crate::error::ShellError;
use crate::process::{describe, EXIT_FAILURE, EXIT_SYNTAX};
use crate::shell::Session;

#[derive(Debug)]
pub enum CommandError {
    InvalidArguments(&'static str),
    NumericArgument(&'static str),
    ChangeDir(std::io::Error),
    IoError(std::io::Error),
    HistoryError(ShellError),
}

impl CommandError {
    /// Status the failed builtin contributes to its chain.
    pub fn status(&self) -> i32 {
        match self {
            CommandError::NumericArgument(_) => EXIT_SYNTAX,
            _ => EXIT_FAILURE,
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::InvalidArguments(_) => write!(f, "pish: Usage error"),
            CommandError::NumericArgument(cmd) => {
                write!(f, "pish: {}: numeric argument required", cmd)
            }
            CommandError::ChangeDir(err) => write!(f, "cd: {}", describe(err)),
            CommandError::IoError(err) => write!(f, "pish: {}", describe(err)),
            CommandError::HistoryError(ShellError::Io(err)) => {
                write!(f, "history: {}", describe(err))
            }
            CommandError::HistoryError(err) => write!(f, "{}", err),
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<ShellError> for CommandError {
    fn from(err: ShellError) -> Self {
        CommandError::HistoryError(err)
    }
}

pub trait Command {
    fn execute(&self, args: &[String], session: &mut Session) -> Result<i32, CommandError>;
}

/// Commands run inside the shell process instead of being exec'd.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Cd,
    Exit,
    History,
    Exec,
}

impl Builtin {
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "cd" => Some(Builtin::Cd),
            "exit" => Some(Builtin::Exit),
            "history" => Some(Builtin::History),
            "exec" => Some(Builtin::Exec),
            _ => None,
        }
    }
}

impl Command for Builtin {
    fn execute(&self, args: &[String], session: &mut Session) -> Result<i32, CommandError> {
        match self {
            Builtin::Cd => CdCommand.execute(args, session),
            Builtin::Exit => ExitCommand.execute(args, session),
            Builtin::History => HistoryCommand.execute(args, session),
            Builtin::Exec => ExecCommand.execute(args, session),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_command_detection() {
        assert_eq!(Builtin::lookup("cd"), Some(Builtin::Cd));
        assert_eq!(Builtin::lookup("exit"), Some(Builtin::Exit));
        assert_eq!(Builtin::lookup("history"), Some(Builtin::History));
        assert_eq!(Builtin::lookup("exec"), Some(Builtin::Exec));
        assert_eq!(Builtin::lookup("ls"), None);
        assert_eq!(Builtin::lookup(""), None);
        assert_eq!(Builtin::lookup("CD"), None);
    }

    #[test]
    fn test_error_statuses() {
        assert_eq!(CommandError::InvalidArguments("cd <dir>").status(), 1);
        assert_eq!(CommandError::NumericArgument("exit").status(), 2);
        let err = std::io::Error::from_raw_os_error(libc::ENOENT);
        assert_eq!(CommandError::ChangeDir(err).status(), 1);
    }

    #[test]
    fn test_command_error_display() {
        let errors = vec![
            CommandError::InvalidArguments("history [-c]"),
            CommandError::NumericArgument("exit"),
            CommandError::ChangeDir(std::io::Error::from_raw_os_error(libc::ENOENT)),
            CommandError::IoError(std::io::Error::new(std::io::ErrorKind::Other, "io error")),
        ];

        for error in errors {
            assert!(!error.to_string().is_empty());
        }
        assert_eq!(
            CommandError::ChangeDir(std::io::Error::from_raw_os_error(libc::ENOENT)).to_string(),
            "cd: No such file or directory"
        );
    }

    #[test]
    fn test_history_error_has_one_prefix() {
        let err = CommandError::from(ShellError::Io(std::io::Error::from_raw_os_error(
            libc::EACCES,
        )));
        assert_eq!(err.to_string(), "history: Permission denied");

        let err = CommandError::from(ShellError::HomeDirNotFound);
        assert!(err.to_string().starts_with("pish: "));
        assert!(!err.to_string().contains("history: pish"));
    }
}
