use std::io::{self, BufRead, Write};

use rustyline::{error::ReadlineError, DefaultEditor};

use crate::error::ShellError;

pub enum Line {
    Text(String),
    /// Ctrl-C at the prompt.
    Interrupted,
    Eof,
}

pub trait LineSource {
    /// Reads one physical line, showing `prompt` first when there is one.
    fn read_line(&mut self, prompt: Option<&str>) -> Result<Line, ShellError>;
}

/// Interactive terminal input with line editing.
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    pub fn new() -> Result<Self, ShellError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: Option<&str>) -> Result<Line, ShellError> {
        match self.editor.readline(prompt.unwrap_or("")) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        log::warn!("couldn't add line to editor history: {}", e);
                    }
                }
                Ok(Line::Text(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Line::Interrupted),
            Err(ReadlineError::Eof) => Ok(Line::Eof),
            Err(e) => Err(e.into()),
        }
    }
}

/// Script files, `-c` strings and piped standard input.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self, prompt: Option<&str>) -> Result<Line, ShellError> {
        if let Some(prompt) = prompt {
            print!("{}", prompt);
            io::stdout().flush()?;
        }

        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(Line::Eof);
        }
        if bytes.last() == Some(&b'\n') {
            bytes.pop();
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
        }
        // Invalid UTF-8 is replaced rather than ending the input.
        Ok(Line::Text(String::from_utf8_lossy(&bytes).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn text(line: Line) -> Option<String> {
        match line {
            Line::Text(s) => Some(s),
            _ => None,
        }
    }

    #[test]
    fn test_reader_source_strips_newlines() {
        let mut source = ReaderSource::new(Cursor::new("echo a\r\necho b\nlast"));
        assert_eq!(text(source.read_line(None).unwrap()).as_deref(), Some("echo a"));
        assert_eq!(text(source.read_line(None).unwrap()).as_deref(), Some("echo b"));
        assert_eq!(text(source.read_line(None).unwrap()).as_deref(), Some("last"));
        assert!(matches!(source.read_line(None).unwrap(), Line::Eof));
    }

    #[test]
    fn test_reader_source_keeps_blank_lines() {
        let mut source = ReaderSource::new(Cursor::new("\n\n"));
        assert_eq!(text(source.read_line(None).unwrap()).as_deref(), Some(""));
        assert_eq!(text(source.read_line(None).unwrap()).as_deref(), Some(""));
        assert!(matches!(source.read_line(None).unwrap(), Line::Eof));
    }

    #[test]
    fn test_reader_source_replaces_invalid_utf8() {
        let mut source = ReaderSource::new(Cursor::new(&b"echo caf\xe9\necho after\n"[..]));
        assert_eq!(
            text(source.read_line(None).unwrap()).as_deref(),
            Some("echo caf\u{fffd}")
        );
        assert_eq!(text(source.read_line(None).unwrap()).as_deref(), Some("echo after"));
        assert!(matches!(source.read_line(None).unwrap(), Line::Eof));
    }
}
