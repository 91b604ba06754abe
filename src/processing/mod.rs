//! # Image Processing and Steganography
//!
//! This module hides ASCII messages in the least significant bits of image
//! pixels and reads them back.
//!
//! ## Modules
//!
//! - [`channel_mode`]: Flag parsing and the per-mode slot layout
//! - [`pixels`]: Pixel model and the LSB normalizer
//! - [`bits`]: Byte <-> bit helpers
//! - [`encoder`] / [`decoder`]: The bit protocol itself
//! - [`steganography`]: Image loading, self-check and lossless saving
//! - [`format`], [`report`], [`error`]: Supporting types

pub mod bits;
pub mod channel_mode;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod format;
pub mod pixels;
pub mod report;
pub mod steganography;

// Re-export main functions for convenience
pub use channel_mode::ChannelMode;
pub use decoder::{decode, decode_bytes};
pub use encoder::{check_message, encode};
pub use error::StegoError;
pub use format::OutputFormat;
pub use pixels::{normalize, Channel, Pixel};
pub use report::ConcealReport;
pub use steganography::{
    conceal_pixels, embed_text, embed_text_bytes, extract_text, extract_text_bytes,
    reveal_pixels, ConcealOptions, Concealed,
};
