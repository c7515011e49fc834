#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// A scratch directory used as cwd, HOME and history location.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create sandbox"),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().canonicalize().expect("canonical sandbox path")
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.file(name);
        fs::write(&path, contents).expect("write sandbox file");
        path
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.file(name)).expect("read sandbox file")
    }

    pub fn history_path(&self) -> PathBuf {
        self.file(".pish_history")
    }

    fn command(&self) -> Command {
        let mut command = Command::new(env!("CARGO_BIN_EXE_pish"));
        command
            .current_dir(self.dir.path())
            .env("HOME", self.dir.path())
            .env("PISH_HISTFILE", self.history_path())
            .env_remove("RUST_LOG")
            .stdin(Stdio::null());
        command
    }

    /// `pish -c <chain>`
    pub fn run(&self, chain: &str) -> Output {
        self.command()
            .arg("-c")
            .arg(chain)
            .output()
            .expect("run pish -c")
    }

    /// `pish <script>`
    pub fn script(&self, contents: impl AsRef<[u8]>) -> Output {
        let path = self.write("script.pish", contents);
        self.command().arg(path).output().expect("run pish script")
    }

    /// `pish` reading commands from a (non-terminal) pipe.
    pub fn piped(&self, input: &str) -> Output {
        let mut child = self
            .command()
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("spawn pish");
        child
            .stdin
            .take()
            .expect("pish stdin")
            .write_all(input.as_bytes())
            .expect("feed pish stdin");
        child.wait_with_output().expect("wait for pish")
    }

    pub fn exists(&self, name: &str) -> bool {
        self.file(name).exists()
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

pub fn status(output: &Output) -> i32 {
    output.status.code().expect("pish exited normally")
}
