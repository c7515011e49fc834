use super::{pipeline, redirect, subshell, Session};
use crate::core::commands::{Builtin, Command};
use crate::parser::{self, ArgVector, Chain};
use crate::process::{executor, ProcessError, EXIT_FAILURE, EXIT_SUCCESS, EXIT_SYNTAX};

impl Session {
    /// Evaluates one fully assembled command line and returns its status.
    pub fn execute_chain(&mut self, text: &str) -> i32 {
        let chain = parser::parse(text);
        log::debug!("parsed {:?} as {:?}", text, chain);
        self.evaluate(&chain)
    }

    pub(crate) fn evaluate(&mut self, chain: &Chain) -> i32 {
        match chain {
            Chain::Empty => EXIT_SUCCESS,
            Chain::Command(argv) => self.dispatch(argv),
            Chain::Sequence(left, right) => {
                self.evaluate(left);
                self.evaluate(right)
            }
            Chain::And(left, right) => match self.evaluate(left) {
                EXIT_SUCCESS => self.evaluate(right),
                status => status,
            },
            Chain::Or(left, right) => match self.evaluate(left) {
                EXIT_SUCCESS => EXIT_SUCCESS,
                _ => self.evaluate(right),
            },
            Chain::Pipe(left, right) => {
                let result = pipeline::run_pipe(self, left, right);
                resolve(result)
            }
            Chain::Redirect(inner, rewire) => {
                let result = redirect::run_redirect(self, inner, rewire);
                resolve(result)
            }
            Chain::Negate(inner) => match self.evaluate(inner) {
                EXIT_SUCCESS => EXIT_FAILURE,
                _ => EXIT_SUCCESS,
            },
            Chain::Subshell(inner) => {
                let result = subshell::run_subshell(self, inner);
                resolve(result)
            }
            Chain::Malformed(err) => {
                eprintln!("pish: {}", err);
                EXIT_SYNTAX
            }
        }
    }

    fn dispatch(&mut self, argv: &ArgVector) -> i32 {
        let Some(name) = argv.program() else {
            return EXIT_SUCCESS;
        };

        if let Some(builtin) = Builtin::lookup(name) {
            return match builtin.execute(argv.args(), self) {
                Ok(status) => status,
                Err(e) => {
                    eprintln!("{}", e);
                    e.status()
                }
            };
        }

        let status = resolve(executor::run(argv));
        self.last_status = status;
        status
    }
}

/// Reports a failed branch and turns it into status 1.
fn resolve(result: Result<i32, ProcessError>) -> i32 {
    result.unwrap_or_else(|e| {
        eprintln!("{}", e);
        EXIT_FAILURE
    })
}
