//! Clamping byte reader with cursor tracking.

/// A big-endian unsigned integer read by [`Reader::uint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uint {
    /// Decoded value, or the reader's ceiling when `clamped` is set.
    pub value: u64,
    /// Number of bytes requested by the caller.
    pub requested: usize,
    /// Number of bytes actually consumed. Smaller than `requested` when the
    /// input ran out.
    pub width: usize,
    /// The encoded value did not fit under the ceiling.
    pub clamped: bool,
}

impl Uint {
    /// Returns `true` if fewer bytes than requested were available.
    pub fn is_short(&self) -> bool {
        self.width < self.requested
    }
}

/// A byte reader that never reads past the end of its input.
///
/// Every read is clamped to the bytes that remain: asking for more than is
/// available returns what is there and leaves the cursor at the end. This
/// keeps partially malformed input decodable, which is what an inspection
/// tool wants. Callers that need strictness compare the returned length (or
/// [`Uint::width`]) against what they asked for.
///
/// # Example
///
/// ```
/// use fuel_tx_buffers::Reader;
///
/// let data = [0x00, 0x01, 0x02, 0x03, 0x04];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.uint(2).value, 0x0001);
/// assert_eq!(reader.buf(2), &[0x02, 0x03]);
/// // Only one byte left: the read is clamped.
/// assert_eq!(reader.buf(4), &[0x04]);
/// assert!(reader.is_eof());
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    uint8: &'a [u8],
    x: usize,
    ceiling: u64,
}

impl<'a> Reader<'a> {
    /// Creates a new reader for the given byte slice.
    pub fn new(uint8: &'a [u8]) -> Self {
        Self {
            uint8,
            x: 0,
            ceiling: u64::MAX,
        }
    }

    /// Sets the largest value [`Reader::uint`] returns unclamped.
    pub fn with_ceiling(mut self, ceiling: u64) -> Self {
        self.ceiling = ceiling;
        self
    }

    pub fn ceiling(&self) -> u64 {
        self.ceiling
    }

    /// Current cursor position in bytes.
    pub fn position(&self) -> usize {
        self.x
    }

    /// Total input length in bytes.
    pub fn len(&self) -> usize {
        self.uint8.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uint8.is_empty()
    }

    /// Returns the number of remaining bytes.
    pub fn size(&self) -> usize {
        self.uint8.len() - self.x
    }

    pub fn is_eof(&self) -> bool {
        self.x == self.uint8.len()
    }

    /// Peeks at the current byte without advancing the cursor.
    pub fn peek(&self) -> Option<u8> {
        self.uint8.get(self.x).copied()
    }

    /// Advances the cursor by up to `length` bytes and returns how many were
    /// actually skipped.
    pub fn skip(&mut self, length: usize) -> usize {
        let n = length.min(self.size());
        self.x += n;
        n
    }

    /// Returns up to `size` bytes and advances the cursor past them.
    pub fn buf(&mut self, size: usize) -> &'a [u8] {
        let x = self.x;
        let end = x + size.min(self.size());
        self.x = end;
        &self.uint8[x..end]
    }

    /// Reads a big-endian unsigned integer spanning `size` bytes.
    ///
    /// `size` may exceed 8; leading bytes then have to be zero for the value
    /// to fit. Anything above the ceiling comes back as the ceiling with
    /// [`Uint::clamped`] set.
    pub fn uint(&mut self, size: usize) -> Uint {
        self.read_uint(size, self.ceiling)
    }

    /// Like [`Reader::uint`] but ignores the ceiling, for values that are
    /// bit patterns or tags rather than quantities. Only values wider than
    /// 64 bits come back clamped (to `u64::MAX`).
    pub fn bits(&mut self, size: usize) -> Uint {
        self.read_uint(size, u64::MAX)
    }

    fn read_uint(&mut self, size: usize, ceiling: u64) -> Uint {
        let bytes = self.buf(size);
        let mut value: u64 = 0;
        let mut overflow = false;
        for &byte in bytes {
            match value
                .checked_mul(256)
                .and_then(|v| v.checked_add(byte as u64))
            {
                Some(v) => value = v,
                None => {
                    overflow = true;
                    break;
                }
            }
        }
        let clamped = overflow || value > ceiling;
        Uint {
            value: if clamped { ceiling } else { value },
            requested: size,
            width: bytes.len(),
            clamped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uint_big_endian() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.uint(2).value, 0x0102);
        assert_eq!(reader.uint(2).value, 0x0304);
    }

    #[test]
    fn test_uint_word() {
        let data = [0, 0, 0, 0, 0, 0x01, 0xab, 0x46];
        let mut reader = Reader::new(&data);
        let read = reader.uint(8);
        assert_eq!(read.value, 109_382);
        assert_eq!(read.width, 8);
        assert!(!read.clamped);
        assert!(reader.is_eof());
    }

    #[test]
    fn test_buf_clamps_at_end() {
        let data = [0x01, 0x02, 0x03];
        let mut reader = Reader::new(&data);
        reader.skip(1);
        assert_eq!(reader.buf(32), &[0x02, 0x03]);
        assert_eq!(reader.position(), 3);
        assert_eq!(reader.buf(1), &[] as &[u8]);
    }

    #[test]
    fn test_short_uint() {
        let data = [0x06];
        let mut reader = Reader::new(&data);
        let read = reader.uint(8);
        assert_eq!(read.value, 6);
        assert_eq!(read.width, 1);
        assert!(read.is_short());
    }

    #[test]
    fn test_ceiling() {
        let max_safe = (1u64 << 53) - 1;
        let data = [0xff; 8];
        let mut reader = Reader::new(&data).with_ceiling(max_safe);
        let read = reader.uint(8);
        assert!(read.clamped);
        assert_eq!(read.value, max_safe);

        let data = [0x00, 0x1f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff];
        let mut reader = Reader::new(&data).with_ceiling(max_safe);
        let read = reader.uint(8);
        assert!(!read.clamped);
        assert_eq!(read.value, max_safe);
    }

    #[test]
    fn test_bits_ignore_ceiling() {
        let max_safe = (1u64 << 53) - 1;
        let data = [0x80, 0, 0, 0, 0, 0, 0, 0x01];
        let mut reader = Reader::new(&data).with_ceiling(max_safe);
        let read = reader.bits(8);
        assert!(!read.clamped);
        assert_eq!(read.value, (1 << 63) | 1);

        let mut reader = Reader::new(&data).with_ceiling(max_safe);
        assert_eq!(reader.uint(8).value, max_safe);
    }

    #[test]
    fn test_wide_uint_overflow() {
        let mut data = [0u8; 9];
        data[0] = 1;
        let mut reader = Reader::new(&data);
        let read = reader.uint(9);
        assert!(read.clamped);
        assert_eq!(read.value, u64::MAX);

        let mut data = [0u8; 12];
        data[11] = 7;
        let mut reader = Reader::new(&data);
        assert_eq!(reader.uint(12).value, 7);
    }

    #[test]
    fn test_skip() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.skip(2), 2);
        assert_eq!(reader.peek(), Some(0x03));
        assert_eq!(reader.skip(8), 2);
        assert_eq!(reader.peek(), None);
    }
}
