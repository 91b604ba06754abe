//! # Decoder
//!
//! Reads channel LSBs back in the same slot order the encoder wrote them and
//! reassembles the message.
//!
//! Scanning collects one bit per used channel per pixel (the RGB pad slot is
//! read too) and stops at the first byte group whose eight data bits are all
//! zero, or when the buffer runs out. Groups are then folded into bytes; the
//! first zero byte ends the message and an incomplete trailing group is
//! dropped.
//!
//! Decoding with a mode other than the one used to encode never fails, it
//! just returns whatever the bits happen to spell.

use log::debug;

use super::bits::{bits_to_byte, BITS_PER_BYTE};
use super::channel_mode::ChannelMode;
use super::pixels::Pixel;

/// Decode the hidden message as a string.
///
/// Every byte maps to the `char` with the same code point, so garbage from a
/// mismatched mode still produces a valid (if meaningless) string.
pub fn decode(pixels: &[Pixel], mode: ChannelMode) -> String {
    decode_bytes(pixels, mode).into_iter().map(char::from).collect()
}

/// Decode the hidden message as raw bytes, terminator excluded.
pub fn decode_bytes(pixels: &[Pixel], mode: ChannelMode) -> Vec<u8> {
    let bits = collect_bits(pixels, mode);
    pack_bytes(&bits, mode)
}

/// Read LSBs in slot order until a zero sentinel group completes.
fn collect_bits(pixels: &[Pixel], mode: ChannelMode) -> Vec<u8> {
    let group = mode.slots_per_byte();
    let mut bits = Vec::with_capacity(pixels.len().min(1 << 16) * mode.channels().len());

    'scan: for pixel in pixels {
        for &channel in mode.channels() {
            bits.push(pixel.lsb(channel));

            if bits.len() % group == 0 {
                let start = bits.len() - group;
                if bits[start..start + BITS_PER_BYTE].iter().all(|&b| b == 0) {
                    break 'scan;
                }
            }
        }
    }

    debug!("Scanned {} bits in {} mode", bits.len(), mode);
    bits
}

/// Fold bit groups into bytes, stopping at the first zero byte.
fn pack_bytes(bits: &[u8], mode: ChannelMode) -> Vec<u8> {
    bits.chunks_exact(mode.slots_per_byte())
        .map(bits_to_byte)
        .take_while(|&byte| byte != 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::encoder::encode;
    use crate::processing::pixels::{normalize, Channel};

    fn black(len: usize) -> Vec<Pixel> {
        vec![Pixel::default(); len]
    }

    #[test]
    fn test_decode_rgb_scenario() {
        let mut pixels = black(8);
        pixels[0] = Pixel::new(0, 1, 0);
        pixels[2] = Pixel::new(0, 1, 0);

        assert_eq!(decode(&pixels, ChannelMode::Rgb), "A");
    }

    #[test]
    fn test_decode_two_channel_scenario_without_terminator_room() {
        // (R,G) = (0,0) (1,0) (0,0) (0,1): '!' with the buffer ending right after it.
        let pixels = vec![
            Pixel::new(0, 0, 0),
            Pixel::new(1, 0, 0),
            Pixel::new(0, 0, 0),
            Pixel::new(0, 1, 0),
        ];
        assert_eq!(decode(&pixels, ChannelMode::Rg), "!");
    }

    #[test]
    fn test_decode_ignores_rgb_pad_bit() {
        let mut pixels = black(9);
        pixels[0] = Pixel::new(0, 1, 0);
        pixels[2] = Pixel::new(0, 1, 1);

        assert_eq!(decode(&pixels, ChannelMode::Rgb), "A");
    }

    #[test]
    fn test_zero_run_across_byte_boundary_is_not_a_sentinel() {
        // '@' ends in six zeros and ' ' starts with two.
        for mode in ChannelMode::ALL {
            let mut pixels = black(mode.pixels_per_byte() * 4);
            encode(&mut pixels, b"@ @", mode).unwrap();
            assert_eq!(decode(&pixels, mode), "@ @", "mode {mode}");
        }
    }

    #[test]
    fn test_scan_stops_at_sentinel() {
        let mut pixels = black(32);
        encode(&mut pixels, b"hi", ChannelMode::R).unwrap();
        // Pixels 16..24 hold the zero terminator; anything after it is ignored.
        for p in &mut pixels[24..] {
            p.set_lsb(Channel::Red);
        }

        assert_eq!(decode(&pixels, ChannelMode::R), "hi");
    }

    #[test]
    fn test_incomplete_trailing_group_is_dropped() {
        let mut pixels = black(5);
        pixels[0] = Pixel::new(0, 1, 0);
        pixels[2] = Pixel::new(0, 1, 0);
        pixels[3] = Pixel::new(1, 1, 1);
        pixels[4] = Pixel::new(1, 1, 1);

        assert_eq!(decode(&pixels, ChannelMode::Rgb), "A");
    }

    #[test]
    fn test_empty_and_blank_buffers_decode_to_empty() {
        assert_eq!(decode(&[], ChannelMode::Rgb), "");
        assert_eq!(decode(&black(64), ChannelMode::Gb), "");
    }

    #[test]
    fn test_mode_mismatch_terminates() {
        let mut pixels: Vec<Pixel> = (0..300u32)
            .map(|i| Pixel::new((i * 7) as u8, (i * 13) as u8, (i * 31) as u8))
            .collect();
        normalize(&mut pixels);
        encode(&mut pixels, b"The quick brown fox", ChannelMode::Rgb).unwrap();

        for mode in [ChannelMode::R, ChannelMode::G, ChannelMode::B, ChannelMode::Rb] {
            let garbage = decode(&pixels, mode);
            assert!(garbage.chars().count() <= pixels.len());
        }
    }

    #[test]
    fn test_high_bytes_decode_to_latin1_chars() {
        let mut pixels = black(16);
        pixels[0].set_lsb(Channel::Red);
        pixels[7].set_lsb(Channel::Red);

        assert_eq!(decode_bytes(&pixels, ChannelMode::R), vec![0x81]);
        assert_eq!(decode(&pixels, ChannelMode::R), "\u{81}");
    }
}
