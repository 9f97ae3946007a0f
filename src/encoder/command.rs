//! Command Classification
//!
//! Maps a parsed command to its wire header: a handful of hot commands
//! get a 3-bit "small" type code and a single header byte, everything
//! else uses the extended form with two extra bytes for letter + number.

use crate::parser::Command;

/// Command type code marking the extended (3-byte) header form.
pub const EXTENDED_TYPE_CODE: u8 = 15;

/// Look up the small-command type code for a (letter, number) pair.
///
/// The table is fixed by the firmware decoder and never changes at
/// runtime.
pub fn small_command_code(letter: char, number: u16) -> Option<u8> {
    match (letter, number) {
        ('G', 0) => Some(1),
        ('G', 1) => Some(2),
        ('G', 92) => Some(3),
        _ => None,
    }
}

/// Append the header byte(s) for a command.
///
/// The control byte packs the command type code in the top nibble and
/// the parameter count in the bottom nibble. Extended commands follow
/// with `(letterOffset << 3) | (number >> 8)` and `number & 0xFF`.
pub fn encode_header(cmd: &Command, out: &mut Vec<u8>) {
    let num_params = cmd.parameters.len() as u8;

    match small_command_code(cmd.letter, cmd.number) {
        Some(code) => {
            out.push((code << 4) | num_params);
        }
        None => {
            let letter_offset = (cmd.letter as u8) - b'A';
            out.push((EXTENDED_TYPE_CODE << 4) | num_params);
            out.push((letter_offset << 3) | (cmd.number >> 8) as u8);
            out.push((cmd.number & 0xFF) as u8);
        }
    }
}
