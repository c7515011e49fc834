use std::path::PathBuf;

use crate::process::{describe, ProcessError};

#[derive(Debug)]
pub enum ShellError {
    Readline(rustyline::error::ReadlineError),
    Io(std::io::Error),
    HomeDirNotFound,
    Script(PathBuf, std::io::Error),
    ProcessError(ProcessError),
    FlagError(String),
    Usage,
    CtrlC(String),
}

impl From<rustyline::error::ReadlineError> for ShellError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        ShellError::Readline(err)
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<ctrlc::Error> for ShellError {
    fn from(err: ctrlc::Error) -> Self {
        ShellError::CtrlC(err.to_string())
    }
}

impl From<ProcessError> for ShellError {
    fn from(err: ProcessError) -> Self {
        ShellError::ProcessError(err)
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Readline(e) => write!(f, "pish: readline error: {}", e),
            ShellError::Io(e) => write!(f, "pish: {}", describe(e)),
            ShellError::HomeDirNotFound => {
                write!(f, "pish: home directory not found; set PISH_HISTFILE")
            }
            ShellError::Script(path, e) => write!(f, "{}: {}", path.display(), describe(e)),
            ShellError::ProcessError(e) => write!(f, "{}", e),
            ShellError::FlagError(msg) => write!(f, "pish: {}", msg),
            ShellError::Usage => write!(f, "pish: Usage error"),
            ShellError::CtrlC(msg) => write!(f, "pish: ctrl-c handler: {}", msg),
        }
    }
}

impl std::error::Error for ShellError {}
