//! Byte-level primitives for the Fuel transaction decoder.
//!
//! # Overview
//!
//! - [`Reader`] - Reads big-endian integers and byte ranges from a slice,
//!   clamping every read to the available input
//! - [`Uint`] - An integer read together with its width and clamping flags
//! - [`preview`] - Short hex rendering of a byte range
//!
//! # Example
//!
//! ```
//! use fuel_tx_buffers::Reader;
//!
//! let data = [0, 0, 0, 0, 0, 0, 0, 5, 0xaa, 0xbb];
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.uint(8).value, 5);
//! assert_eq!(reader.buf(2), &[0xaa, 0xbb]);
//! assert_eq!(reader.size(), 0);
//! ```

mod preview;
mod reader;

pub use preview::preview;
pub use reader::{Reader, Uint};

/// Size of a word in the Fuel canonical encoding.
pub const WORD_SIZE: usize = 8;

/// Number of zero bytes the canonical encoding appends after a byte array of
/// `len` bytes so the next field starts on a word boundary.
///
/// ```
/// use fuel_tx_buffers::padding;
///
/// assert_eq!(padding(0), 0);
/// assert_eq!(padding(141), 3);
/// assert_eq!(padding(64), 0);
/// ```
pub fn padding(len: usize) -> usize {
    (WORD_SIZE - len % WORD_SIZE) % WORD_SIZE
}
