//! Roland 7-bit checksum.
//!
//! The checksum covers every byte from the address through the last payload
//! byte. Header bytes and the `F7h` terminator are not included.

/// Checksum that makes `(sum(bytes) + checksum) % 128 == 0`.
///
/// Total over any slice. Bytes above `7Fh` are summed like any other, the
/// parser rejects them separately.
pub fn checksum(bytes: &[u8]) -> u8 {
    let sum = bytes.iter().fold(0u8, |acc, &byte| acc.wrapping_add(byte)) & 0x7F;
    (0x80 - sum) & 0x7F
}

/// True if the address, payload and trailing checksum byte sum to zero mod 128.
pub fn validate_checksum(data_including_checksum: &[u8]) -> bool {
    data_including_checksum
        .iter()
        .fold(0u8, |acc, &byte| acc.wrapping_add(byte))
        & 0x7F
        == 0
}
