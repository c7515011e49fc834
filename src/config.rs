use std::env;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use crate::error::ShellError;
use crate::flags::Flags;

const HISTORY_ENV: &str = "PISH_HISTFILE";
const HISTORY_FILE: &str = ".pish_history";

/// Where commands come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Terminal on stdin: line editing, prompts, history.
    Interactive,
    /// Non-terminal stdin: no prompts, history still recorded.
    Piped,
    Script(PathBuf),
    Command(String),
}

impl InputMode {
    /// Script mode commands are never written to history.
    pub fn is_script(&self) -> bool {
        matches!(self, InputMode::Script(_) | InputMode::Command(_))
    }
}

#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub mode: InputMode,
    pub history_path: PathBuf,
    pub quiet: bool,
}

impl ShellConfig {
    pub fn from_flags(flags: &Flags) -> Result<Self, ShellError> {
        let mode = match (flags.get_value("command"), flags.positional()) {
            (Some(command), []) => InputMode::Command(command.clone()),
            (None, [script]) => InputMode::Script(PathBuf::from(script)),
            (None, []) if io::stdin().is_terminal() => InputMode::Interactive,
            (None, []) => InputMode::Piped,
            _ => return Err(ShellError::Usage),
        };

        Ok(ShellConfig {
            mode,
            history_path: history_path()?,
            quiet: flags.is_set("quiet"),
        })
    }
}

fn history_path() -> Result<PathBuf, ShellError> {
    if let Some(path) = env::var_os(HISTORY_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    dirs::home_dir()
        .map(|home| home.join(HISTORY_FILE))
        .ok_or(ShellError::HomeDirNotFound)
}
