//! Line-to-bytes transforms for the two input file formats.

use thiserror::Error;

/// Why a single input line could not be turned into bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// Two separators in a row, or a separator at either end of the line.
    #[error("empty hex token at position {position}")]
    EmptyToken {
        /// 1-based token position within the line.
        position: usize,
    },

    /// A token contains something other than `0-9`, `a-f`, `A-F`.
    #[error("invalid hex token {token:?}")]
    InvalidHex {
        /// The offending token.
        token: String,
    },

    /// A token is valid hex but larger than `FF`.
    #[error("hex token {token:?} exceeds FF")]
    OutOfRange {
        /// The offending token.
        token: String,
    },

    /// A character has no single-byte (ISO-8859-1) encoding.
    #[error("character {ch:?} at column {column} is not a single-byte character")]
    Unencodable {
        /// The offending character.
        ch: char,
        /// 1-based character column.
        column: usize,
    },
}

/// Encode an ASCII record: trailing whitespace is stripped and each
/// remaining character becomes the byte with the same code point.
///
/// # Errors
///
/// Returns [`RecordError::Unencodable`] for characters above U+00FF.
pub fn ascii_record(line: &str) -> Result<Vec<u8>, RecordError> {
    line.trim_end()
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            u8::try_from(u32::from(ch))
                .map_err(|_| RecordError::Unencodable { ch, column: i + 1 })
        })
        .collect()
}

/// Parse a hex record such as `DE AD BE EF` into its bytes.
///
/// Tokens are separated by exactly one ASCII space. Trailing whitespace is
/// stripped first; anything else (leading spaces, doubled spaces, tabs) is
/// rejected rather than guessed at.
///
/// # Errors
///
/// Returns a [`RecordError`] describing the first bad token.
pub fn hex_record(line: &str) -> Result<Vec<u8>, RecordError> {
    line.trim_end()
        .split(' ')
        .enumerate()
        .map(|(i, token)| parse_hex_token(token, i + 1))
        .collect()
}

fn parse_hex_token(token: &str, position: usize) -> Result<u8, RecordError> {
    if token.is_empty() {
        return Err(RecordError::EmptyToken { position });
    }
    // from_str_radix alone would accept a leading '+'
    if !token.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(RecordError::InvalidHex { token: token.to_string() });
    }
    u8::from_str_radix(token, 16).map_err(|_| RecordError::OutOfRange { token: token.to_string() })
}
