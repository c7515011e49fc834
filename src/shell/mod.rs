use std::fs::File;
use std::io::{self, BufReader, Cursor};

mod eval;
mod pipeline;
mod redirect;
mod session;
mod subshell;

pub use session::Session;

use crate::{
    config::{InputMode, ShellConfig},
    error::ShellError,
    input::{Assembler, EditorSource, History, Line, LineSource, ReaderSource},
    prompt::{PromptRenderer, CONTINUATION},
};

pub struct Shell {
    pub(crate) source: Box<dyn LineSource>,
    pub(crate) session: Session,
    pub(crate) config: ShellConfig,
    pub(crate) prompt: PromptRenderer,
    eof: bool,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Result<Self, ShellError> {
        let source: Box<dyn LineSource> = match &config.mode {
            InputMode::Interactive => {
                // The shell outlives Ctrl-C; foreground children get the
                // default action back when they exec.
                ctrlc::set_handler(|| {})?;
                Box::new(EditorSource::new()?)
            }
            InputMode::Piped => Box::new(ReaderSource::new(BufReader::new(io::stdin()))),
            InputMode::Script(path) => {
                let file = File::open(path).map_err(|e| ShellError::Script(path.clone(), e))?;
                Box::new(ReaderSource::new(BufReader::new(file)))
            }
            InputMode::Command(text) => {
                Box::new(ReaderSource::new(Cursor::new(text.clone().into_bytes())))
            }
        };

        let session = Session::new(History::new(config.history_path.clone()));
        log::debug!(
            "starting in {:?} mode, history at {}",
            config.mode,
            config.history_path.display()
        );

        Ok(Shell {
            source,
            session,
            config,
            prompt: PromptRenderer::new(),
            eof: false,
        })
    }

    /// Runs until end of input. Returns the process exit status: the last
    /// status for `-c`, otherwise 0.
    pub fn run(&mut self) -> Result<i32, ShellError> {
        while let Some(chain) = self.read_chain()? {
            self.submit(&chain);
        }

        match self.config.mode {
            InputMode::Interactive => {
                println!();
                Ok(0)
            }
            InputMode::Command(_) => Ok(self.session.last_status()),
            _ => Ok(0),
        }
    }

    /// Assembles the next logical command from one or more physical lines.
    fn read_chain(&mut self) -> Result<Option<String>, ShellError> {
        if self.eof {
            return Ok(None);
        }

        let mut assembler = Assembler::new();
        let mut prompt = self.primary_prompt();
        loop {
            match self.source.read_line(prompt.as_deref())? {
                Line::Text(line) => {
                    if !assembler.push(&line) {
                        return Ok(assembler.finish());
                    }
                    prompt = self.continuation_prompt();
                }
                Line::Interrupted => {
                    assembler.discard();
                    prompt = self.primary_prompt();
                }
                Line::Eof => {
                    self.eof = true;
                    // Whatever was assembled still runs.
                    return Ok(assembler.finish());
                }
            }
        }
    }

    fn submit(&mut self, chain: &str) {
        if chain.is_empty() {
            self.session.set_last_status(0);
            return;
        }

        if !self.config.mode.is_script() {
            if let Err(e) = self.session.history().add(chain) {
                if !self.config.quiet {
                    eprintln!("pish: warning: couldn't add to history: {}", e);
                }
            }
        }

        let status = self.session.execute_chain(chain);
        self.session.set_last_status(status);
    }

    fn prompts_enabled(&self) -> bool {
        self.config.mode == InputMode::Interactive && !self.config.quiet
    }

    fn primary_prompt(&self) -> Option<String> {
        self.prompts_enabled().then(|| self.prompt.render())
    }

    fn continuation_prompt(&self) -> Option<String> {
        self.prompts_enabled().then(|| CONTINUATION.to_string())
    }
}
