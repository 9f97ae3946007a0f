//! Error types for the packet encoder.
//!
//! Every syntax condition the firmware stream format can reject gets its
//! own variant; the messages are the exact strings the firmware tooling
//! has always reported.

/// A lexical/syntactic problem in one line of G-code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("invalid command letter")]
    InvalidCommandLetter,

    #[error("invalid command number")]
    InvalidCommandNumber,

    #[error("too many parameters")]
    TooManyParameters,

    #[error("invalid parameter letter")]
    InvalidParameterLetter,

    #[error("invalid command argument")]
    InvalidCommandArgument,
}

/// Errors that can occur while encoding a whole stream or file.
///
/// Syntax errors carry the 1-based line number they were raised on;
/// I/O errors pass through untouched.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("line {line}: {source}")]
    Syntax { line: usize, source: SyntaxError },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SyntaxError {
    /// Attaches a 1-based line number for stream-level reporting.
    pub fn at_line(self, line: usize) -> EncodeError {
        EncodeError::Syntax { line, source: self }
    }
}
