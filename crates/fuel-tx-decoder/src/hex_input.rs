//! Normalization of the user supplied transaction string.

use crate::error::InputFormatError;
use hex::FromHexError;

/// Strips surrounding whitespace and an optional `0x`/`0X` prefix, then
/// decodes the remaining hex digits.
///
/// Returns the hex digits as given (without prefix) next to the bytes they
/// encode. Character indices in errors refer to the digits after the prefix.
pub(crate) fn normalize(hash: &str) -> Result<(&str, Vec<u8>), InputFormatError> {
    let trimmed = hash.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if digits.is_empty() {
        return Err(InputFormatError::Empty);
    }
    let bytes = hex::decode(digits).map_err(|err| match err {
        FromHexError::InvalidHexCharacter { c, index } => {
            InputFormatError::InvalidCharacter { ch: c, index }
        }
        FromHexError::OddLength | FromHexError::InvalidStringLength => {
            InputFormatError::OddLength(digits.len())
        }
    })?;
    Ok((digits, bytes))
}
