//! Decoder error types.

use thiserror::Error;

/// The input string is not a usable hex encoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputFormatError {
    #[error("empty input")]
    Empty,
    #[error("odd number of hex digits ({0})")]
    OddLength(usize),
    #[error("invalid hex character {ch:?} at index {index}")]
    InvalidCharacter { ch: char, index: usize },
}

/// Error returned by [`decode`](crate::decode) and friends.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid transaction hex: {0}")]
    InputFormat(#[from] InputFormatError),
    #[error("Unsupported transaction type: {0}")]
    UnsupportedType(u64),
    #[error("truncated input: {field} at byte {offset} needs {declared} bytes but only {remaining} remain")]
    TruncatedInput {
        field: String,
        offset: usize,
        declared: u64,
        remaining: usize,
    },
    #[error("failed to decode {context}: {source}")]
    Internal {
        context: String,
        source: Box<DecodeError>,
    },
}

/// Coarse classification of a [`DecodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InputFormat,
    UnsupportedType,
    TruncatedInput,
    Internal,
}

impl DecodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::InputFormat(_) => ErrorKind::InputFormat,
            DecodeError::UnsupportedType(_) => ErrorKind::UnsupportedType,
            DecodeError::TruncatedInput { .. } => ErrorKind::TruncatedInput,
            DecodeError::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// Follows `Internal` wrappers down to the error that started it.
    pub fn root_cause(&self) -> &DecodeError {
        let mut err = self;
        while let DecodeError::Internal { source, .. } = err {
            err = source;
        }
        err
    }

    /// Wraps the error with the sub-structure it was raised in.
    pub(crate) fn within(self, context: impl Into<String>) -> DecodeError {
        DecodeError::Internal {
            context: context.into(),
            source: Box::new(self),
        }
    }
}
