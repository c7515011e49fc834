use std::path::PathBuf;

use crate::input::History;

/// Process-wide shell state. A forked child works on its own copy, so
/// nothing it changes here reaches the parent.
pub struct Session {
    pub(crate) last_status: i32,
    pub(crate) previous_dir: Option<PathBuf>,
    pub(crate) history: History,
}

impl Session {
    pub fn new(history: History) -> Self {
        Self {
            last_status: 0,
            previous_dir: None,
            history,
        }
    }

    pub fn last_status(&self) -> i32 {
        self.last_status
    }

    pub fn set_last_status(&mut self, status: i32) {
        self.last_status = status;
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}
