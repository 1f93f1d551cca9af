#![allow(dead_code)]

use fuel_tx_decoder::DecodedTransaction;

pub const WORD: usize = 8;

/// Builds transaction bytes field by field.
#[derive(Debug, Clone, Default)]
pub struct TxBytes {
    bytes: Vec<u8>,
}

impl TxBytes {
    pub fn new() -> Self {
        Self::default()
    }

    /// One canonical 8-byte big-endian word.
    pub fn word(self, value: u64) -> Self {
        self.uint(value, WORD)
    }

    /// Big-endian integer over `width` bytes (at most 8).
    pub fn uint(mut self, value: u64, width: usize) -> Self {
        let be = value.to_be_bytes();
        self.bytes.extend_from_slice(&be[WORD - width..]);
        self
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    /// 32 bytes of `fill`.
    pub fn b256(self, fill: u8) -> Self {
        self.raw(&[fill; 32])
    }

    /// Bytes followed by zero padding up to the next word boundary.
    pub fn padded(self, bytes: &[u8]) -> Self {
        let padding = (WORD - bytes.len() % WORD) % WORD;
        self.raw(bytes).raw(&vec![0; padding])
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn hex(&self) -> String {
        format!("0x{}", hex::encode(&self.bytes))
    }
}

/// Non-header fields plus skips cover the input exactly once.
pub fn assert_coverage(decoded: &DecodedTransaction) {
    let mut spans: Vec<(usize, usize)> = decoded
        .data_fields()
        .iter()
        .map(|f| (f.start, f.end))
        .chain(decoded.skips.iter().map(|s| (s.start, s.end)))
        .filter(|(start, end)| end > start)
        .collect();
    spans.sort_unstable();
    let mut cursor = 0;
    for (start, end) in spans {
        assert_eq!(start, cursor, "gap or overlap at byte {cursor}");
        cursor = end;
    }
    assert_eq!(cursor, decoded.byte_len());
}

/// Field positions never move backwards and stay inside the input.
pub fn assert_monotonic(decoded: &DecodedTransaction) {
    let limit = decoded.raw_hex.len();
    let mut last_end = 0;
    for field in decoded.fields.iter().filter(|f| !f.is_group_header) {
        assert!(field.start_pos() >= last_end, "{} starts before {last_end}", field.name);
        assert!(field.end_pos() >= field.start_pos());
        assert!(field.end_pos() <= limit);
        last_end = field.end_pos();
    }
}

/// Values of all non-header fields called `name`.
pub fn values_of(decoded: &DecodedTransaction, name: &str) -> Vec<String> {
    decoded
        .fields
        .iter()
        .filter(|f| !f.is_group_header && f.name == name)
        .map(|f| f.value.to_string())
        .collect()
}
