mod file_ops;

use std::{io::Write, path::PathBuf};

use crate::error::ShellError;
use self::file_ops::FileOps;

/// Append-only command log, one entry per line. Numbers are assigned when
/// printing and never stored.
pub struct History {
    file_ops: FileOps,
}

impl History {
    pub fn new(history_file: PathBuf) -> Self {
        History {
            file_ops: FileOps::new(history_file),
        }
    }

    pub fn add(&self, entry: &str) -> Result<(), ShellError> {
        let entry = entry.trim();
        if entry.is_empty() {
            return Ok(());
        }
        self.file_ops.append_entry(entry)
    }

    pub fn entries(&self) -> Result<Vec<String>, ShellError> {
        self.file_ops.load_entries()
    }

    pub fn print_numbered<W: Write>(&self, out: &mut W) -> Result<(), ShellError> {
        for (index, entry) in self.entries()?.iter().enumerate() {
            writeln!(out, "{} {}", index + 1, entry)?;
        }
        out.flush()?;
        Ok(())
    }

    pub fn clear(&self) -> Result<(), ShellError> {
        self.file_ops.truncate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn history_in(dir: &TempDir) -> History {
        History::new(dir.path().join(".pish_history"))
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let history = history_in(&dir);
        assert!(history.entries().unwrap().is_empty());

        let mut out = Vec::new();
        history.print_numbered(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_numbered_in_submission_order() {
        let dir = TempDir::new().unwrap();
        let history = history_in(&dir);
        history.add("echo one").unwrap();
        history.add("  ls -l | wc -l  ").unwrap();
        history.add("cd /tmp && pwd").unwrap();

        let mut out = Vec::new();
        history.print_numbered(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1 echo one\n2 ls -l | wc -l\n3 cd /tmp && pwd\n"
        );
    }

    #[test]
    fn test_blank_entries_skipped() {
        let dir = TempDir::new().unwrap();
        let history = history_in(&dir);
        history.add("   ").unwrap();
        assert!(history.entries().unwrap().is_empty());
    }

    #[test]
    fn test_clear_then_append() {
        let dir = TempDir::new().unwrap();
        let history = history_in(&dir);
        history.add("first").unwrap();
        history.clear().unwrap();
        assert!(history.entries().unwrap().is_empty());

        history.add("second").unwrap();
        assert_eq!(history.entries().unwrap(), vec!["second".to_string()]);
    }

    #[test]
    fn test_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        history_in(&dir).add("echo persisted").unwrap();
        assert_eq!(
            history_in(&dir).entries().unwrap(),
            vec!["echo persisted".to_string()]
        );
    }
}
