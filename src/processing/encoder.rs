//! # Encoder
//!
//! Writes message bits into the least significant bits of a normalized pixel
//! buffer.
//!
//! Byte `i` of the message owns pixels `[i * p, (i + 1) * p)` where `p` is
//! [`ChannelMode::pixels_per_byte`]. Bit `k` (MSB first) lands in pixel
//! `i * p + k / n`, channel `channels[k % n]`, with `n` the number of channels
//! in the mode. For RGB this gives the slot order R,G,B,R,G,B,R,G and leaves
//! the blue channel of the third pixel as an unwritten pad.
//!
//! Only 1 bits are written. A 0 bit relies on the channel already being 0,
//! which is why [`normalize`](super::pixels::normalize) must run first. No
//! terminator is written either: the untouched pixels after the message read
//! back as zero bytes.

use log::debug;

use super::bits::byte_to_bits;
use super::channel_mode::ChannelMode;
use super::error::{Result, StegoError};
use super::pixels::Pixel;

/// Largest byte value the encoder accepts (7-bit ASCII).
const MAX_ASCII: u8 = 0x7F;

/// Check that `message` can be written into `pixel_count` pixels under `mode`.
///
/// Nothing is mutated, so callers can validate before copying or normalizing
/// a buffer.
///
/// # Errors
/// - [`StegoError::UndefinedByteEncoding`] for a zero byte (reserved as the
///   terminator) or a byte above 127.
/// - [`StegoError::EncodingCapacityExceeded`] when the message and its
///   terminator need more byte slots than the buffer provides.
pub fn check_message(message: &[u8], pixel_count: usize, mode: ChannelMode) -> Result<()> {
    if let Some((position, &byte)) = message
        .iter()
        .enumerate()
        .find(|(_, &b)| b == 0 || b > MAX_ASCII)
    {
        return Err(StegoError::UndefinedByteEncoding { byte, position });
    }

    let capacity = mode.capacity(pixel_count);
    let required = message.len() + 1;
    if required > capacity {
        return Err(StegoError::EncodingCapacityExceeded { required, capacity });
    }

    Ok(())
}

/// Encode `message` into `pixels` using `mode`, in place.
///
/// `pixels` is expected to be normalized. All validation happens before the
/// first write, so on error the buffer is exactly as it was.
///
/// Returns the number of pixels the message occupies.
pub fn encode(pixels: &mut [Pixel], message: &[u8], mode: ChannelMode) -> Result<usize> {
    check_message(message, pixels.len(), mode)?;

    let channels = mode.channels();
    let stride = mode.pixels_per_byte();

    for (i, &byte) in message.iter().enumerate() {
        let base = i * stride;
        for (k, bit) in byte_to_bits(byte).into_iter().enumerate() {
            if bit == 1 {
                let channel = channels[k % channels.len()];
                pixels[base + k / channels.len()].set_lsb(channel);
            }
        }
    }

    let consumed = message.len() * stride;
    debug!(
        "Encoding {} bytes into {} pixels ({} mode)",
        message.len(),
        consumed,
        mode
    );
    Ok(consumed)
}
