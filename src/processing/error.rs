//! # Error Types
//!
//! A single error enum covers every failure the steganography layer can
//! report, from flag parsing through image persistence. Callers can match on
//! the variant; binaries usually just bubble it up through `anyhow`.

/// Errors raised while concealing or revealing a message.
#[derive(Debug, thiserror::Error)]
pub enum StegoError {
    /// The channel flag token is not a permutation of a subset of `rgb`.
    #[error("invalid set of channel flags: {0:?}")]
    InvalidChannelFlags(String),

    /// The message plus its terminator does not fit under the chosen mode.
    #[error("message needs {required} byte slots but the image only holds {capacity}")]
    EncodingCapacityExceeded { required: usize, capacity: usize },

    /// The message contains a byte that has no encoding (zero or non-ASCII).
    #[error("byte 0x{byte:02x} at position {position} cannot be encoded (expected ASCII 1-127)")]
    UndefinedByteEncoding { byte: u8, position: usize },

    /// The requested output format would destroy the hidden bits.
    #[error("output format {0:?} is lossy or unsupported; use png, bmp or tiff")]
    LossyOutputFormat(String),

    /// Decoding the freshly encoded pixels did not reproduce the message.
    #[error("self-check failed: concealed {expected:?} but read back {actual:?}")]
    VerificationFailed { expected: String, actual: String },

    /// Pixel data does not match the declared image dimensions.
    #[error("pixel buffer of length {len} does not fit a {width}x{height} image")]
    DimensionMismatch { width: u32, height: u32, len: usize },

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StegoError>;
