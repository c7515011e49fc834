use std::ffi::{CString, NulError};

/// Tokens of one atomic command: program name first, then its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArgVector {
    tokens: Vec<String>,
}

impl ArgVector {
    /// Splits on runs of spaces and tabs. Nothing else is special.
    pub fn tokenize(command: &str) -> Self {
        let tokens = command
            .split([' ', '\t'])
            .filter(|token| !token.is_empty())
            .map(String::from)
            .collect();
        Self { tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn program(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }

    /// Arguments after the program name.
    pub fn args(&self) -> &[String] {
        self.tokens.get(1..).unwrap_or(&[])
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The tokens as C strings, program first, ready for `execvp`.
    pub fn to_c_argv(&self) -> Result<Vec<CString>, NulError> {
        self.tokens
            .iter()
            .map(|token| CString::new(token.as_bytes()))
            .collect()
    }
}

impl From<Vec<String>> for ArgVector {
    fn from(tokens: Vec<String>) -> Self {
        Self { tokens }
    }
}
