use std::{
    fs::{File, OpenOptions},
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
};

use crate::error::ShellError;

pub struct FileOps {
    file_path: PathBuf,
}

impl FileOps {
    pub fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    /// Lines in file order. A missing file has no entries.
    pub fn load_entries(&self) -> Result<Vec<String>, ShellError> {
        let file = match File::open(&self.file_path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut entries = Vec::new();
        for line in BufReader::new(file).lines() {
            entries.push(line?);
        }
        Ok(entries)
    }

    pub fn append_entry(&self, entry: &str) -> Result<(), ShellError> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.file_path)?;

        writeln!(file, "{}", entry)?;
        Ok(())
    }

    pub fn truncate(&self) -> Result<(), ShellError> {
        File::create(&self.file_path)?;
        Ok(())
    }
}
