//! GCode Tokenizer
//!
//! Fast, simple tokenization of GCode lines for the wire encoder.
//! Focus: strip comments and split into tokens with minimal allocations.

/// Tokenize a line of GCode into raw tokens.
///
/// Everything from the first `;` onward is a comment and is discarded.
/// The remainder is split on runs of whitespace. A blank or comment-only
/// line yields no tokens. No escaping or quoting is supported.
pub fn tokenize_line(line: &str) -> Vec<&str> {
    let code = match line.find(';') {
        Some(idx) => &line[..idx],
        None => line,
    };

    code.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_simple_command() {
        let tokens = tokenize_line("G1 X10 Y20");
        assert_eq!(tokens, vec!["G1", "X10", "Y20"]);
    }

    #[test]
    fn test_tokenize_strips_semicolon_comment() {
        let tokens = tokenize_line("G1 X10 ; move to X10");
        assert_eq!(tokens, vec!["G1", "X10"]);
    }

    #[test]
    fn test_tokenize_comment_only() {
        let tokens = tokenize_line("; this is a comment");
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_tokenize_empty_line() {
        assert!(tokenize_line("").is_empty());
        assert!(tokenize_line("   \t ").is_empty());
    }

    #[test]
    fn test_tokenize_collapses_whitespace_runs() {
        let tokens = tokenize_line("  G92   X0\tY0  ");
        assert_eq!(tokens, vec!["G92", "X0", "Y0"]);
    }

    #[test]
    fn test_tokenize_float_parameters() {
        let tokens = tokenize_line("G1 X10.5 Y-2.3 Z+1.0");
        assert_eq!(tokens, vec!["G1", "X10.5", "Y-2.3", "Z+1.0"]);
    }
}
