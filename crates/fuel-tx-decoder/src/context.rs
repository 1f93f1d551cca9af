//! Per-call decode state.

use crate::bytes::HexBytes;
use crate::config::{DecoderConfig, Layout};
use crate::error::DecodeError;
use crate::field::{FieldRecorder, FieldValue};
use fuel_tx_buffers::{preview, Reader, Uint};
use std::ops::Range;
use tracing::warn;

pub(crate) type Result<T> = std::result::Result<T, DecodeError>;

/// Cursor, field recorder and configuration of a single decode pass.
///
/// A context is created for every top-level call and dropped at the end, so
/// concurrent or successive decodes never share state.
pub(crate) struct DecodeContext<'a> {
    input: &'a [u8],
    reader: Reader<'a>,
    recorder: FieldRecorder,
    config: DecoderConfig,
    truncated: bool,
}

impl<'a> DecodeContext<'a> {
    pub fn new(input: &'a [u8], config: &DecoderConfig) -> Self {
        Self {
            input,
            reader: Reader::new(input).with_ceiling(config.uint_ceiling),
            recorder: FieldRecorder::new(),
            config: config.clone(),
            truncated: false,
        }
    }

    pub fn layout(&self) -> Layout {
        self.config.layout
    }

    pub fn position(&self) -> usize {
        self.reader.position()
    }

    pub fn remaining(&self) -> usize {
        self.reader.size()
    }

    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// Reads an integer of logical width `logical`, encoded as the layout
    /// dictates, and records it as a number.
    pub fn uint(&mut self, name: &str, logical: usize) -> Result<u64> {
        let (value, span) = self.read_uint(name, self.layout().uint_width(logical), Reader::uint)?;
        self.record(name, FieldValue::Number(value), span);
        Ok(value)
    }

    /// Reads a bit set of logical width `logical`. Bit sets are never
    /// clamped to the integer ceiling.
    pub fn bitmask(&mut self, name: &str, logical: usize) -> Result<u64> {
        let (value, span) = self.read_uint(name, self.layout().uint_width(logical), Reader::bits)?;
        self.record(name, FieldValue::Number(value), span);
        Ok(value)
    }

    /// Reads a variant discriminant and records it under the name `label`
    /// gives it.
    pub fn discriminant(&mut self, name: &str, label: impl FnOnce(u64) -> String) -> Result<u64> {
        let (code, span) = self.read_uint(name, self.layout().discriminant_width(), Reader::bits)?;
        self.record(name, FieldValue::Text(label(code)), span);
        Ok(code)
    }

    /// Returns the next discriminant without consuming it. Short input
    /// yields whatever partial value is there.
    pub fn peek_discriminant(&self) -> u64 {
        self.reader
            .clone()
            .bits(self.layout().discriminant_width())
            .value
    }

    /// The byte under the cursor, if any.
    pub fn peek_byte(&self) -> Option<u8> {
        self.reader.peek()
    }

    /// Reads a fixed-width byte array such as an id or a root.
    pub fn bytes(&mut self, name: &str, len: usize) -> Result<HexBytes> {
        let start = self.position();
        let slice = self.reader.buf(len);
        if slice.len() < len {
            self.short_read(name, start, len, slice.len())?;
        }
        let bytes = HexBytes::from(slice);
        self.record(name, FieldValue::Text(bytes.to_string()), start..self.position());
        self.pad(name, len)?;
        Ok(bytes)
    }

    /// Reads a byte array whose length was declared by an earlier field.
    ///
    /// A declared length larger than the remaining input is always an error:
    /// the count comes from the data itself, so the input is inconsistent.
    pub fn blob(&mut self, name: &str, declared: u64) -> Result<HexBytes> {
        let len = self.ensure_len(name, declared)?;
        let start = self.position();
        let bytes = HexBytes::from(self.reader.buf(len));
        self.record(name, FieldValue::Text(bytes.to_string()), start..self.position());
        self.pad(name, len)?;
        Ok(bytes)
    }

    /// Checks that `count` elements of at least `min_size` bytes each can
    /// still be present, before anything is allocated for them.
    pub fn ensure_elements(&self, name: &str, count: u64, min_size: usize) -> Result<usize> {
        let needed = count.saturating_mul(min_size.max(1) as u64);
        self.ensure_len(name, needed)?;
        usize::try_from(count).map_err(|_| self.truncated_error(name, count))
    }

    /// Runs `f` inside a named group.
    pub fn group<T>(&mut self, name: &str, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.recorder.start_group(name, self.position());
        let result = f(self);
        self.recorder.end_group();
        result
    }

    /// Records whatever input is left as a single trailing field.
    pub fn trailing_bytes(&mut self) {
        let remaining = self.remaining();
        if remaining == 0 {
            return;
        }
        let start = self.position();
        let rest = self.reader.buf(remaining);
        warn!(
            offset = start,
            len = remaining,
            bytes = %preview(rest, 16),
            "trailing bytes after transaction"
        );
        let text = HexBytes::from(rest).to_string();
        self.record("Trailing Bytes", FieldValue::Text(text), start..self.position());
    }

    pub fn into_recorder(self) -> FieldRecorder {
        self.recorder
    }

    fn read_uint(
        &mut self,
        name: &str,
        width: usize,
        read: fn(&mut Reader<'a>, usize) -> Uint,
    ) -> Result<(u64, Range<usize>)> {
        let start = self.position();
        let uint = read(&mut self.reader, width);
        if uint.is_short() {
            self.short_read(name, start, width, uint.width)?;
        }
        if uint.clamped {
            warn!(
                field = name,
                offset = start,
                ceiling = uint.value,
                "integer exceeds ceiling, clamped"
            );
        }
        Ok((uint.value, start..self.position()))
    }

    fn pad(&mut self, name: &str, len: usize) -> Result<()> {
        let padding = self.layout().padding(len);
        if padding == 0 {
            return Ok(());
        }
        let start = self.position();
        let skipped = self.reader.skip(padding);
        if skipped < padding {
            self.short_read(name, start, padding, skipped)?;
        }
        self.recorder.skip(start..self.position());
        Ok(())
    }

    fn short_read(&mut self, name: &str, offset: usize, wanted: usize, got: usize) -> Result<()> {
        if self.config.strict {
            return Err(DecodeError::TruncatedInput {
                field: name.to_string(),
                offset,
                declared: wanted as u64,
                remaining: got,
            });
        }
        warn!(field = name, offset, wanted, got, "input ended early, read clamped");
        self.truncated = true;
        Ok(())
    }

    fn ensure_len(&self, name: &str, declared: u64) -> Result<usize> {
        match usize::try_from(declared) {
            Ok(len) if len <= self.remaining() => Ok(len),
            _ => Err(self.truncated_error(name, declared)),
        }
    }

    fn truncated_error(&self, name: &str, declared: u64) -> DecodeError {
        DecodeError::TruncatedInput {
            field: name.to_string(),
            offset: self.position(),
            declared,
            remaining: self.remaining(),
        }
    }

    fn record(&mut self, name: &str, value: FieldValue, span: Range<usize>) {
        let hex = hex::encode(&self.input[span.clone()]);
        self.recorder.record(name, value, span, hex);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn canonical() -> DecoderConfig {
        DecoderConfig::default()
    }

    #[test]
    fn blob_records_padding_as_skip() {
        let input = [0xaa, 0xbb, 0xcc, 0, 0, 0, 0, 0, 0x01];
        let mut ctx = DecodeContext::new(&input, &canonical());
        let blob = ctx.blob("Data", 3).unwrap();
        assert_eq!(blob.as_slice(), &[0xaa, 0xbb, 0xcc]);
        assert_eq!(ctx.position(), 8);
        let recorder = ctx.into_recorder();
        assert_eq!(recorder.skips(), &[3..8]);
        assert_eq!(recorder.fields()[0].hex, "aabbcc");
    }

    #[test]
    fn oversized_blob_is_an_error() {
        let input = [0u8; 4];
        let mut ctx = DecodeContext::new(&input, &canonical());
        let err = ctx.blob("Predicate", 64).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TruncatedInput {
                field: "Predicate".into(),
                offset: 0,
                declared: 64,
                remaining: 4,
            }
        );
    }

    #[test]
    fn short_uint_is_lenient_by_default() {
        let input = [0, 0, 1];
        let mut ctx = DecodeContext::new(&input, &canonical());
        assert_eq!(ctx.uint("Amount", 8).unwrap(), 1);
        assert!(ctx.truncated());

        let strict = canonical().with_strict(true);
        let mut ctx = DecodeContext::new(&input, &strict);
        let err = ctx.uint("Amount", 8).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TruncatedInput);
    }

    #[test]
    fn tags_and_bit_sets_skip_the_ceiling() {
        let input = [0x80, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff];
        let mut ctx = DecodeContext::new(&input, &canonical());
        assert_eq!(ctx.peek_discriminant(), 1 << 63);
        assert_eq!(ctx.bitmask("Policy Types", 8).unwrap(), 1 << 63);
        assert_eq!(ctx.uint("Amount", 8).unwrap(), crate::MAX_SAFE_INTEGER);
    }

    #[test]
    fn huge_counts_are_rejected_before_allocation() {
        let input = [0u8; 16];
        let ctx = DecodeContext::new(&input, &canonical());
        assert_eq!(ctx.ensure_elements("Inputs", 2, 8).unwrap(), 2);
        assert!(ctx.ensure_elements("Inputs", u64::MAX, 8).is_err());
    }

    #[test]
    fn group_closes_on_error() {
        let input = [0u8; 8];
        let mut ctx = DecodeContext::new(&input, &canonical());
        let result: Result<()> = ctx.group("Inputs", |ctx| {
            ctx.uint("Count", 8)?;
            Err(ctx.truncated_error("Input", 1))
        });
        assert!(result.is_err());
        assert_eq!(ctx.into_recorder().level(), 0);
    }
}
