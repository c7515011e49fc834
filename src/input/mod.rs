pub mod continuation;
pub mod history;
mod source;

pub use continuation::{Assembler, Continuation};
pub use history::History;
pub use source::{EditorSource, Line, LineSource, ReaderSource};
