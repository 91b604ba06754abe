//! Byte <-> bit conversion shared by the encoder and decoder.
//!
//! Bits are represented as `u8` values that are always 0 or 1, ordered most
//! significant first.

pub const BITS_PER_BYTE: usize = 8;

/// Expand a byte into its big-endian (MSB first) bits.
pub fn byte_to_bits(byte: u8) -> [u8; BITS_PER_BYTE] {
    let mut bits = [0u8; BITS_PER_BYTE];
    for (k, bit) in bits.iter_mut().enumerate() {
        *bit = (byte >> (7 - k)) & 1;
    }
    bits
}

/// Fold the first eight bits of `bits` (MSB first) back into a byte.
///
/// Only the low bit of each entry is used. Shorter input is treated as if it
/// were right-padded with zeros.
pub fn bits_to_byte(bits: &[u8]) -> u8 {
    bits.iter()
        .take(BITS_PER_BYTE)
        .enumerate()
        .fold(0u8, |acc, (k, bit)| acc | ((bit & 1) << (7 - k)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_to_bits_is_msb_first() {
        assert_eq!(byte_to_bits(0x41), [0, 1, 0, 0, 0, 0, 0, 1]);
        assert_eq!(byte_to_bits(0x21), [0, 0, 1, 0, 0, 0, 0, 1]);
        assert_eq!(byte_to_bits(0x00), [0; 8]);
        assert_eq!(byte_to_bits(0xFF), [1; 8]);
    }

    #[test]
    fn test_bits_to_byte() {
        assert_eq!(bits_to_byte(&[0, 1, 0, 0, 0, 0, 0, 1]), 0x41);
        assert_eq!(bits_to_byte(&[1, 1, 1, 1, 1, 1, 1, 1]), 0xFF);
        // Entries beyond the eighth are ignored (RGB pad slot).
        assert_eq!(bits_to_byte(&[0, 0, 1, 0, 0, 0, 0, 1, 1]), 0x21);
    }

    #[test]
    fn test_every_byte_survives_conversion() {
        for byte in 0..=255u8 {
            assert_eq!(bits_to_byte(&byte_to_bits(byte)), byte);
        }
    }
}
