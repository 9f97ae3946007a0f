//! Parsed representation of a GCode line
//!
//! Minimal types representing the shape of one line as the wire format
//! sees it: a command letter/number plus letter-keyed parameter values.
//! Byte layout concerns live in the encoder, not here.

use crate::error::SyntaxError;

/// Parameters per command the wire header can describe (4-bit count,
/// value 15 reserved for the extended-command marker).
pub const MAX_PARAMETERS: usize = 14;

/// A parsed line of GCode
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine {
    /// A GCode command with its parameters
    Command(Command),
    /// A line whose command letter is `E`: encodes as the stream
    /// terminator, with the rest of the line deliberately ignored
    Stop,
    /// An empty or comment-only line; contributes nothing to the stream
    Empty,
}

/// A GCode command like "G1" or "M104"
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    /// Command letter, `A`-`Z`
    pub letter: char,
    /// Command number, in `[0, 2048)`
    pub number: u16,
    /// Command parameters in source order
    pub parameters: Vec<Parameter>,
}

/// A command parameter like "X10" or "F"
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// Parameter letter, `A`-`Z`
    pub letter: char,
    /// Classified parameter value
    pub value: ParamValue,
}

/// A parameter value, classified by the integer-then-float attempt chain.
///
/// A token is an unsigned integer if it parses as one below 2^64;
/// otherwise it must parse as a float literal (negative and oversized
/// integers land here). The float is narrowed to the 32-bit wire width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    /// Bare letter, no value text
    Void,
    /// Non-negative integer literal below 2^64
    UInt(u64),
    /// Any other valid numeric literal, stored at wire precision
    Real(f32),
}

/// Convert tokens into a parsed line.
///
/// The first token is the command; the rest are parameters. A command
/// letter of `E` short-circuits to [`ParsedLine::Stop`] before any other
/// validation, matching the firmware's escape shortcut.
pub fn tokens_to_parsed_line(tokens: &[&str]) -> Result<ParsedLine, SyntaxError> {
    let Some((&cmd_token, param_tokens)) = tokens.split_first() else {
        return Ok(ParsedLine::Empty);
    };

    let letter = cmd_token.chars().next().unwrap_or_default();
    if letter == 'E' {
        return Ok(ParsedLine::Stop);
    }
    if !letter.is_ascii_uppercase() {
        return Err(SyntaxError::InvalidCommandLetter);
    }

    let number = parse_command_number(&cmd_token[1..])?;

    if param_tokens.len() > MAX_PARAMETERS {
        return Err(SyntaxError::TooManyParameters);
    }
    let parameters = param_tokens
        .iter()
        .map(|t| parse_parameter_token(t))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ParsedLine::Command(Command {
        letter,
        number,
        parameters,
    }))
}

/// Parse the digits after the command letter into a number in `[0, 2048)`.
fn parse_command_number(text: &str) -> Result<u16, SyntaxError> {
    let number: i64 = text
        .parse()
        .map_err(|_| SyntaxError::InvalidCommandNumber)?;
    if !(0..2048).contains(&number) {
        return Err(SyntaxError::InvalidCommandNumber);
    }
    Ok(number as u16)
}

/// Parse a parameter token like "X10.5" into a [`Parameter`].
fn parse_parameter_token(text: &str) -> Result<Parameter, SyntaxError> {
    let letter = text.chars().next().unwrap_or_default();
    if !letter.is_ascii_uppercase() {
        return Err(SyntaxError::InvalidParameterLetter);
    }

    let value_text = &text[1..];
    let value = if value_text.is_empty() {
        ParamValue::Void
    } else if let Ok(v) = value_text.parse::<u64>() {
        ParamValue::UInt(v)
    } else if let Ok(v) = value_text.parse::<f64>() {
        // Narrowing to f32 here is the wire width the firmware expects.
        ParamValue::Real(v as f32)
    } else {
        return Err(SyntaxError::InvalidCommandArgument);
    };

    Ok(Parameter { letter, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_to_command() {
        let result = tokens_to_parsed_line(&["G1", "X10", "Y20"]).unwrap();

        if let ParsedLine::Command(cmd) = result {
            assert_eq!(cmd.letter, 'G');
            assert_eq!(cmd.number, 1);
            assert_eq!(cmd.parameters.len(), 2);
            assert_eq!(cmd.parameters[0].letter, 'X');
            assert_eq!(cmd.parameters[0].value, ParamValue::UInt(10));
        } else {
            panic!("Expected command");
        }
    }

    #[test]
    fn test_empty_token_list() {
        let result = tokens_to_parsed_line(&[]).unwrap();
        assert_eq!(result, ParsedLine::Empty);
    }

    #[test]
    fn test_stop_shortcut_ignores_rest_of_line() {
        assert_eq!(tokens_to_parsed_line(&["E"]).unwrap(), ParsedLine::Stop);
        // Trailing garbage after an E command is skipped without validation.
        assert_eq!(
            tokens_to_parsed_line(&["E99999", "!!bad", "tokens"]).unwrap(),
            ParsedLine::Stop
        );
    }

    #[test]
    fn test_invalid_command_letter() {
        assert_eq!(
            tokens_to_parsed_line(&["g1"]),
            Err(SyntaxError::InvalidCommandLetter)
        );
        assert_eq!(
            tokens_to_parsed_line(&["1X"]),
            Err(SyntaxError::InvalidCommandLetter)
        );
    }

    #[test]
    fn test_invalid_command_number() {
        assert_eq!(
            tokens_to_parsed_line(&["G"]),
            Err(SyntaxError::InvalidCommandNumber)
        );
        assert_eq!(
            tokens_to_parsed_line(&["G2048"]),
            Err(SyntaxError::InvalidCommandNumber)
        );
        assert_eq!(
            tokens_to_parsed_line(&["G-1"]),
            Err(SyntaxError::InvalidCommandNumber)
        );
        assert_eq!(
            tokens_to_parsed_line(&["Gx"]),
            Err(SyntaxError::InvalidCommandNumber)
        );
    }

    #[test]
    fn test_command_number_boundary() {
        let result = tokens_to_parsed_line(&["M2047"]).unwrap();
        if let ParsedLine::Command(cmd) = result {
            assert_eq!(cmd.number, 2047);
        } else {
            panic!("Expected command");
        }
    }

    #[test]
    fn test_void_parameter() {
        let result = tokens_to_parsed_line(&["G28", "X", "Y"]).unwrap();
        if let ParsedLine::Command(cmd) = result {
            assert_eq!(cmd.parameters[0].value, ParamValue::Void);
            assert_eq!(cmd.parameters[1].value, ParamValue::Void);
        } else {
            panic!("Expected command");
        }
    }

    #[test]
    fn test_negative_value_classifies_as_real() {
        let result = tokens_to_parsed_line(&["G1", "X-5"]).unwrap();
        if let ParsedLine::Command(cmd) = result {
            assert_eq!(cmd.parameters[0].value, ParamValue::Real(-5.0));
        } else {
            panic!("Expected command");
        }
    }

    #[test]
    fn test_oversized_integer_falls_back_to_real() {
        // 2^64 does not fit the integer encoding; it is still a valid
        // float literal, so classification falls through.
        let result = tokens_to_parsed_line(&["G1", "X18446744073709551616"]).unwrap();
        if let ParsedLine::Command(cmd) = result {
            assert!(matches!(cmd.parameters[0].value, ParamValue::Real(_)));
        } else {
            panic!("Expected command");
        }
    }

    #[test]
    fn test_invalid_parameter_letter() {
        assert_eq!(
            tokens_to_parsed_line(&["G1", "x10"]),
            Err(SyntaxError::InvalidParameterLetter)
        );
    }

    #[test]
    fn test_invalid_parameter_value() {
        assert_eq!(
            tokens_to_parsed_line(&["G1", "X10q"]),
            Err(SyntaxError::InvalidCommandArgument)
        );
    }

    #[test]
    fn test_too_many_parameters() {
        let mut tokens = vec!["G1"];
        tokens.extend(std::iter::repeat_n("X1", 15));
        assert_eq!(
            tokens_to_parsed_line(&tokens),
            Err(SyntaxError::TooManyParameters)
        );

        // 14 is the last accepted count.
        tokens.pop();
        assert!(tokens_to_parsed_line(&tokens).is_ok());
    }
}
