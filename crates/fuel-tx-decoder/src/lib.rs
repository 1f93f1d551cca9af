//! Fuel transaction decoder.
//!
//! Turns a hex-encoded Fuel transaction into two views produced in one pass:
//!
//! - a typed [`Transaction`] tree (script, create, mint, upgrade, upload or
//!   blob, with its policies, inputs, outputs and witnesses), and
//! - a flat list of [`DecodedField`]s recording, for every value read, the
//!   byte range it came from and the group it belongs to, so raw bytes can
//!   be highlighted and labelled.
//!
//! ```
//! use fuel_tx_decoder::{decode, TransactionKind, SAMPLE_SCRIPT_TX};
//!
//! let decoded = decode(SAMPLE_SCRIPT_TX).unwrap();
//! assert_eq!(decoded.transaction.kind(), TransactionKind::Script);
//! assert_eq!(decoded.transaction.inputs().len(), 5);
//!
//! let err = decode("0x06").unwrap_err();
//! assert_eq!(err.to_string(), "Unsupported transaction type: 6");
//! ```

mod bytes;
mod config;
mod context;
mod decoded;
mod error;
mod field;
mod hex_input;
mod policy;
mod witness;

pub mod input;
pub mod output;
pub mod transaction;

pub use bytes::HexBytes;
pub use config::{DecoderConfig, Layout, MAX_SAFE_INTEGER};
pub use decoded::DecodedTransaction;
pub use error::{DecodeError, ErrorKind, InputFormatError};
pub use field::{DecodedField, FieldRecorder, FieldValue, GroupHandle, GroupId};
pub use input::{Input, InputKind, TxPointer};
pub use output::{Output, OutputKind};
pub use policy::{Policy, PolicyKind};
pub use transaction::{Transaction, TransactionKind, TransactionSummary};
pub use witness::Witness;

use context::DecodeContext;
use serde_json::{json, Value};
use tracing::debug;

/// Script transaction in the canonical encoding: five inputs, five outputs,
/// one witness and a max fee policy.
pub const SAMPLE_SCRIPT_TX: &str = include_str!("../data/sample_script_tx.hex");

/// Decodes a transaction with the default configuration.
pub fn decode(hash: &str) -> Result<DecodedTransaction, DecodeError> {
    decode_with(hash, &DecoderConfig::default())
}

/// Decodes a transaction.
///
/// `hash` is hex, case-insensitive, optionally `0x`-prefixed and surrounded
/// by whitespace. Bytes left after a complete transaction are kept as a
/// root-level "Trailing Bytes" field.
pub fn decode_with(hash: &str, config: &DecoderConfig) -> Result<DecodedTransaction, DecodeError> {
    let (digits, bytes) = hex_input::normalize(hash)?;
    debug!(len = bytes.len(), layout = ?config.layout, "decoding transaction hex");

    let mut ctx = DecodeContext::new(&bytes, config);
    let transaction = transaction::decode_transaction(&mut ctx)?;
    ctx.trailing_bytes();

    let truncated = ctx.truncated();
    let (fields, skips) = ctx.into_recorder().into_parts();
    debug!(fields = fields.len(), skips = skips.len(), truncated, "decoded transaction");
    Ok(DecodedTransaction {
        transaction,
        fields,
        skips,
        raw_hex: digits.to_ascii_lowercase(),
        truncated,
    })
}

/// Decodes a transaction into its JSON form, or `{"error": "<message>"}`.
pub fn decode_to_json(hash: &str, config: &DecoderConfig) -> Value {
    let result = decode_with(hash, config).map_err(|err| err.to_string());
    let result = result.and_then(|decoded| serde_json::to_value(&decoded).map_err(|err| err.to_string()));
    match result {
        Ok(value) => value,
        Err(error) => json!({ "error": error }),
    }
}
