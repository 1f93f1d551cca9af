//! Hex previews for log lines and field tables.

/// Formats at most `max` bytes as lowercase hex, noting how many were left
/// out.
///
/// # Example
///
/// ```
/// use fuel_tx_buffers::preview;
///
/// assert_eq!(preview(&[0x01, 0x02, 0x0a, 0xff], 16), "01020aff");
/// assert_eq!(preview(&[0xab; 6], 4), "abababab… (+2 bytes)");
/// assert_eq!(preview(&[], 16), "");
/// ```
pub fn preview(octets: &[u8], max: usize) -> String {
    let shown = octets.len().min(max);
    let mut result = String::with_capacity(shown * 2 + 16);
    for byte in &octets[..shown] {
        result.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        result.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
    }
    if octets.len() > max {
        result.push_str(&format!("… (+{} bytes)", octets.len() - max));
    }
    result
}

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";
