//! Parameter Encoding
//!
//! Serializes classified parameter values into the wire form: one index
//! byte per parameter (type code + letter offset) and a fixed-width
//! little-endian payload whose length is implied by the type code.

use crate::parser::{ParamValue, Parameter};

/// 3-bit type codes for parameter values. Codes 0 and 2 are reserved
/// by the firmware and never emitted.
const TYPE_REAL: u8 = 1;
const TYPE_UINT32: u8 = 3;
const TYPE_UINT64: u8 = 4;
const TYPE_VOID: u8 = 5;

/// The wire type code for a classified value.
pub fn type_code(value: ParamValue) -> u8 {
    match value {
        ParamValue::Real(_) => TYPE_REAL,
        ParamValue::UInt(v) if v < 1 << 32 => TYPE_UINT32,
        ParamValue::UInt(_) => TYPE_UINT64,
        ParamValue::Void => TYPE_VOID,
    }
}

/// Append one parameter's index byte and payload bytes.
///
/// The index byte packs the type code into the top 3 bits and the letter
/// offset (`letter - 'A'`) into the bottom 5. Payload width follows the
/// type: 0 for void, 4 for real and small integers, 8 for large integers.
pub fn encode_parameter(param: &Parameter, index: &mut Vec<u8>, payload: &mut Vec<u8>) {
    let letter_offset = (param.letter as u8) - b'A';
    index.push((type_code(param.value) << 5) | letter_offset);

    match param.value {
        ParamValue::Void => {}
        ParamValue::UInt(v) if v < 1 << 32 => {
            payload.extend_from_slice(&(v as u32).to_le_bytes());
        }
        ParamValue::UInt(v) => {
            payload.extend_from_slice(&v.to_le_bytes());
        }
        ParamValue::Real(v) => {
            payload.extend_from_slice(&v.to_le_bytes());
        }
    }
}
