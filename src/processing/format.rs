//! Lossless output formats.
//!
//! Hidden bits live in the lowest bit of each channel, so anything that
//! re-quantizes pixels (JPEG, WebP, palette GIF) wipes the message. Only
//! formats that store 8-bit RGB samples verbatim are accepted.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::StegoError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Bmp,
    Tiff,
}

impl OutputFormat {
    /// Parse a format name or file extension, case-insensitively.
    pub fn from_extension(ext: &str) -> Result<Self, StegoError> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "bmp" => Ok(OutputFormat::Bmp),
            "tif" | "tiff" => Ok(OutputFormat::Tiff),
            _ => Err(StegoError::LossyOutputFormat(ext.to_string())),
        }
    }

    /// Pick the format from the extension of `path`, or `fallback` when the
    /// path has none.
    pub fn resolve(path: &Path, fallback: OutputFormat) -> Result<Self, StegoError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => Self::from_extension(ext),
            None => Ok(fallback),
        }
    }

    pub fn image_format(self) -> image::ImageFormat {
        match self {
            OutputFormat::Png => image::ImageFormat::Png,
            OutputFormat::Bmp => image::ImageFormat::Bmp,
            OutputFormat::Tiff => image::ImageFormat::Tiff,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Png => "png",
            OutputFormat::Bmp => "bmp",
            OutputFormat::Tiff => "tiff",
        };
        f.write_str(name)
    }
}
