/// Why an assembled command needs another line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    Complete,
    /// Trailing `\`: dropped, next line joined directly.
    Escape,
    /// Trailing `&&`, `||`, `|` or a redirection operator: joined with a space.
    Operator,
}

pub fn check_continuation(command: &str) -> Continuation {
    let trimmed = command.trim();
    if trimmed.ends_with('\\') {
        Continuation::Escape
    } else if trimmed.ends_with("&&")
        || trimmed.ends_with('|')
        || trimmed.ends_with('>')
        || trimmed.ends_with('<')
    {
        Continuation::Operator
    } else {
        Continuation::Complete
    }
}

/// Joins physical lines into one chain.
#[derive(Debug, Default)]
pub struct Assembler {
    command: Option<String>,
    pending: Option<Continuation>,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one physical line. Returns `true` when more input is needed.
    pub fn push(&mut self, line: &str) -> bool {
        let line = line.trim();
        let command = match (self.command.take(), self.pending) {
            (None, _) => line.to_string(),
            (Some(mut command), Some(Continuation::Escape)) => {
                command.pop();
                command.push_str(line);
                command
            }
            (Some(mut command), _) => {
                command.push(' ');
                command.push_str(line);
                command
            }
        };

        let continuation = check_continuation(&command);
        self.command = Some(command);
        self.pending = Some(continuation);
        continuation != Continuation::Complete
    }

    /// Returns whatever has been assembled and resets.
    pub fn finish(&mut self) -> Option<String> {
        self.pending = None;
        self.command.take()
    }

    pub fn discard(&mut self) {
        self.command = None;
        self.pending = None;
    }
}
