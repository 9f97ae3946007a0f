//! GCode Packet Encoder
//!
//! Encodes line-oriented G-code text into the compact binary packet
//! stream consumed by the firmware's G-code parser.
//!
//! This library provides:
//! - GCode tokenization and line parsing
//! - Bit-exact packet encoding (headers, index bytes, payloads)
//! - Whole-stream and file encoding with line-numbered errors

pub mod config;
pub mod encoder;
pub mod error;
pub mod parser;

// Re-exports for clean public API
pub use encoder::{TERMINATOR, encode_file, encode_lines, encode_str};
pub use error::{EncodeError, SyntaxError};
pub use parser::{ParsedLine, parse_line};
