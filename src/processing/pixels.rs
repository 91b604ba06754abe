//! # Pixel Model
//!
//! The core works on a flat, row-major slice of [`Pixel`]s. There is no 2-D
//! addressing here: the index into the slice is the only coordinate.
//!
//! This module also owns the normalizer, which clears the least significant
//! bit of every channel so that encoding only ever needs to set bits.

use log::debug;

/// Mask that clears bit 0 of a channel value (`0b1111_1110`).
const LSB_CLEAR_MASK: u8 = 0xFE;

/// One of the three color channels of a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Position of the channel inside an RGB triple.
    pub const fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// A single RGB pixel. Alpha is never read or written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    pub channels: [u8; 3],
}

impl Pixel {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self {
            channels: [red, green, blue],
        }
    }

    pub fn red(&self) -> u8 {
        self.channels[0]
    }

    pub fn green(&self) -> u8 {
        self.channels[1]
    }

    pub fn blue(&self) -> u8 {
        self.channels[2]
    }

    pub fn get(&self, channel: Channel) -> u8 {
        self.channels[channel.index()]
    }

    /// Least significant bit of `channel`, as 0 or 1.
    pub fn lsb(&self, channel: Channel) -> u8 {
        self.get(channel) & 1
    }

    /// Set bit 0 of `channel` to 1.
    pub fn set_lsb(&mut self, channel: Channel) {
        self.channels[channel.index()] |= 1;
    }
}

impl From<[u8; 3]> for Pixel {
    fn from(channels: [u8; 3]) -> Self {
        Self { channels }
    }
}

impl From<Pixel> for [u8; 3] {
    fn from(pixel: Pixel) -> Self {
        pixel.channels
    }
}

/// Clear bit 0 of all three channels of every pixel.
///
/// Every channel is normalized, not only the ones a mode writes to, so unused
/// channels also sit at a known baseline. Running this twice is the same as
/// running it once.
pub fn normalize(pixels: &mut [Pixel]) {
    for pixel in pixels.iter_mut() {
        for value in pixel.channels.iter_mut() {
            *value &= LSB_CLEAR_MASK;
        }
    }
    debug!("Normalized {} pixels", pixels.len());
}
