//! # Channel Modes
//!
//! A [`ChannelMode`] decides which color channels carry message bits and how a
//! message byte is laid out over consecutive pixels.
//!
//! | Mode | Channels | Pixels per byte | Slots per byte |
//! |------|----------|-----------------|----------------|
//! | RGB  | R, G, B  | 3               | 9 (last is pad) |
//! | RG/RB/GB | 2    | 4               | 8              |
//! | R/G/B | 1       | 8               | 8              |
//!
//! Modes are selected from a flag token such as `-rgb`, `bg` or `R`. Letter
//! order and case do not matter; channels are always used in R, G, B order.

use std::fmt;
use std::str::FromStr;

use super::bits::BITS_PER_BYTE;
use super::error::StegoError;
use super::pixels::Channel;

const RGB: &[Channel] = &[Channel::Red, Channel::Green, Channel::Blue];
const RG: &[Channel] = &[Channel::Red, Channel::Green];
const RB: &[Channel] = &[Channel::Red, Channel::Blue];
const GB: &[Channel] = &[Channel::Green, Channel::Blue];
const R: &[Channel] = &[Channel::Red];
const G: &[Channel] = &[Channel::Green];
const B: &[Channel] = &[Channel::Blue];

/// The seven supported channel layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChannelMode {
    #[default]
    Rgb,
    Rg,
    Rb,
    Gb,
    R,
    G,
    B,
}

impl ChannelMode {
    pub const ALL: [ChannelMode; 7] = [
        ChannelMode::Rgb,
        ChannelMode::Rg,
        ChannelMode::Rb,
        ChannelMode::Gb,
        ChannelMode::R,
        ChannelMode::G,
        ChannelMode::B,
    ];

    /// Parse a channel flag token.
    ///
    /// A single leading `-` is allowed. The rest must be a non-empty set of
    /// distinct letters from `r`, `g`, `b` in any order and case.
    ///
    /// # Errors
    /// [`StegoError::InvalidChannelFlags`] for anything else, e.g. `-xy`,
    /// `rr`, `rgba` or the empty string.
    pub fn from_flags(flags: &str) -> Result<Self, StegoError> {
        let invalid = || StegoError::InvalidChannelFlags(flags.to_string());

        let letters = flags.strip_prefix('-').unwrap_or(flags);
        if letters.is_empty() || letters.len() > 3 {
            return Err(invalid());
        }

        let (mut red, mut green, mut blue) = (false, false, false);
        for c in letters.chars() {
            let seen = match c.to_ascii_lowercase() {
                'r' => &mut red,
                'g' => &mut green,
                'b' => &mut blue,
                _ => return Err(invalid()),
            };
            if *seen {
                return Err(invalid());
            }
            *seen = true;
        }

        Ok(match (red, green, blue) {
            (true, true, true) => ChannelMode::Rgb,
            (true, true, false) => ChannelMode::Rg,
            (true, false, true) => ChannelMode::Rb,
            (false, true, true) => ChannelMode::Gb,
            (true, false, false) => ChannelMode::R,
            (false, true, false) => ChannelMode::G,
            (false, false, true) => ChannelMode::B,
            (false, false, false) => return Err(invalid()),
        })
    }

    /// Channels carrying data, in the order bits are written and read.
    pub fn channels(self) -> &'static [Channel] {
        match self {
            ChannelMode::Rgb => RGB,
            ChannelMode::Rg => RG,
            ChannelMode::Rb => RB,
            ChannelMode::Gb => GB,
            ChannelMode::R => R,
            ChannelMode::G => G,
            ChannelMode::B => B,
        }
    }

    /// Whether each byte is followed by one unused slot. Only RGB pads.
    pub fn has_pad(self) -> bool {
        matches!(self, ChannelMode::Rgb)
    }

    /// Channel slots consumed by one message byte, pad included.
    pub fn slots_per_byte(self) -> usize {
        if self.has_pad() {
            BITS_PER_BYTE + 1
        } else {
            BITS_PER_BYTE
        }
    }

    /// Pixels the encoder cursor advances for each message byte.
    pub fn pixels_per_byte(self) -> usize {
        self.slots_per_byte() / self.channels().len()
    }

    /// Number of bytes (terminator included) a buffer of `pixel_count`
    /// pixels can hold under this mode.
    pub fn capacity(self, pixel_count: usize) -> usize {
        pixel_count * self.channels().len() / self.slots_per_byte()
    }

    /// Canonical flag spelling, without the leading hyphen.
    pub fn as_flag(self) -> &'static str {
        match self {
            ChannelMode::Rgb => "rgb",
            ChannelMode::Rg => "rg",
            ChannelMode::Rb => "rb",
            ChannelMode::Gb => "gb",
            ChannelMode::R => "r",
            ChannelMode::G => "g",
            ChannelMode::B => "b",
        }
    }
}

impl fmt::Display for ChannelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_flag())
    }
}

impl FromStr for ChannelMode {
    type Err = StegoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChannelMode::from_flags(s)
    }
}
