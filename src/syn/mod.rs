mod lexer;
mod parser;

pub use lexer::*;
pub use parser::*;

type Result<T> = std::result::Result<T, error::Error>;

pub(crate) mod error {
    use snafu::Snafu;

    /// Errors raised while classifying and consuming input lines. Every
    /// variant is fatal to the parse that raised it and carries the 1-based
    /// number of the offending line.
    #[derive(Snafu, Debug, Clone, PartialEq, Eq)]
    #[snafu(visibility(pub(crate)))]
    pub enum Error {
        #[snafu(display("line {line} - key-value pair appears before any section header"))]
        NoSection { line: usize },
        #[snafu(display("line {line} - malformed section header '{text}'"))]
        MalformedSection { line: usize, text: String },
        #[snafu(display("line {line} - assignment is missing a key"))]
        MissingKey { line: usize },
        #[snafu(display("line {line} - assignment is missing a value"))]
        MissingValue { line: usize },
        #[snafu(display("line {line} - unrecognized syntax '{text}'"))]
        Syntax { line: usize, text: String },
    }
}
