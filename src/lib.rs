pub mod config;
pub mod error;
pub mod flags;
pub mod shell;

pub mod core;
pub mod input;
pub mod parser;
pub mod process;
pub mod prompt;
