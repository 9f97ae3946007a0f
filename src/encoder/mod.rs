//! Wire Encoder
//!
//! Turns parsed GCode lines into the firmware's binary packet stream.
//! Layout per line: header byte(s), one index byte per parameter, then
//! the parameter payloads, all little-endian, no delimiters. The stream
//! ends with a single terminator byte.

pub mod command;
pub mod packet;
pub mod param;
pub mod stream;

pub use packet::encode_packet;
pub use stream::{encode_file, encode_lines, encode_str};

/// End-of-stream marker, also emitted for `E`-letter lines.
pub const TERMINATOR: u8 = 0xE0;
