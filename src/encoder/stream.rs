//! Stream Driver
//!
//! Drives the per-line encoder over a whole input: lines in order, one
//! packet each, a single terminator byte after the last line. The first
//! syntax error aborts the run, annotated with its 1-based line number.

use std::fs;
use std::path::Path;

use log::debug;

use crate::encoder::{TERMINATOR, packet};
use crate::error::EncodeError;
use crate::parser;

/// Encode a sequence of lines into one terminated packet stream.
pub fn encode_lines<'a, I>(lines: I) -> Result<Vec<u8>, EncodeError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut output = Vec::new();
    let mut line_count = 0usize;

    for (idx, line) in lines.into_iter().enumerate() {
        let line_num = idx + 1;
        line_count = line_num;
        let parsed = parser::parse_line(line).map_err(|e| e.at_line(line_num))?;
        output.extend_from_slice(&packet::encode_packet(&parsed));
    }

    output.push(TERMINATOR);
    debug!(
        "encoded {} lines into {} bytes",
        line_count,
        output.len()
    );
    Ok(output)
}

/// Encode a whole source text.
pub fn encode_str(text: &str) -> Result<Vec<u8>, EncodeError> {
    encode_lines(text.lines())
}

/// Encode a G-code text file into a binary packet file.
///
/// I/O errors propagate as-is; syntax errors carry the offending line
/// number. On error nothing is written to the output path.
pub fn encode_file(input: &Path, output: &Path) -> Result<(), EncodeError> {
    let text = fs::read_to_string(input)?;
    let encoded = encode_str(&text)?;
    fs::write(output, &encoded)?;
    Ok(())
}
