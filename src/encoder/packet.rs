//! Packet Assembly
//!
//! Builds the per-line packet: header byte(s), then all index bytes in
//! parameter order, then all payload bytes in the same order. No padding
//! or alignment anywhere.

use crate::encoder::{TERMINATOR, command, param};
use crate::parser::ParsedLine;

/// Encode one parsed line into its wire packet.
///
/// Empty lines produce no bytes at all; an `E`-letter line produces the
/// lone terminator byte.
pub fn encode_packet(line: &ParsedLine) -> Vec<u8> {
    let cmd = match line {
        ParsedLine::Empty => return Vec::new(),
        ParsedLine::Stop => return vec![TERMINATOR],
        ParsedLine::Command(cmd) => cmd,
    };

    let mut packet = Vec::new();
    command::encode_header(cmd, &mut packet);

    let mut payload = Vec::new();
    for p in &cmd.parameters {
        param::encode_parameter(p, &mut packet, &mut payload);
    }
    packet.extend_from_slice(&payload);

    packet
}
