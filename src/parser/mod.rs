//! GCode Parser
//!
//! Tokenization and line-shape parsing, separated from byte encoding.
//! Everything here is per-line; stream concerns live in the encoder.

pub mod ast;
pub mod lexer;

pub use ast::{Command, MAX_PARAMETERS, ParamValue, Parameter, ParsedLine};
pub use lexer::tokenize_line;

use crate::error::SyntaxError;

/// Parse a single line of GCode into structured data.
///
/// This is the main entry point for parsing. It strips comments,
/// tokenizes the line, and classifies the command and parameter values.
pub fn parse_line(line: &str) -> Result<ParsedLine, SyntaxError> {
    let tokens = lexer::tokenize_line(line);
    ast::tokens_to_parsed_line(&tokens)
}
