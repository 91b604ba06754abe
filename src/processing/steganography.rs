//! # LSB Steganography Implementation
//!
//! Ties the bit protocol ([`encoder`](super::encoder) and
//! [`decoder`](super::decoder)) to real image files.
//!
//! ## Algorithm
//!
//! The message is hidden in the least significant bit of the color channels
//! selected by a [`ChannelMode`]. Alpha is dropped: images are converted to
//! 8-bit RGB before processing.
//!
//! ### Encoding Process
//! 1. Validate the message (ASCII 1-127) and check it fits, terminator included
//! 2. Copy the pixels and clear the LSB of every channel
//! 3. Set the LSB of the channel slots that carry a 1 bit
//! 4. Decode the copy again and compare with the message (self-check)
//! 5. Save the modified image in a lossless format (PNG, BMP or TIFF)
//!
//! ### Decoding Process
//! 1. Read the LSBs of the selected channels, pixel by pixel
//! 2. Stop at the first all-zero byte group
//! 3. Convert the groups back to ASCII characters
//!
//! ### Capacity
//! An image holds `pixels / 3` bytes in RGB mode, `pixels / 4` in two channel
//! modes and `pixels / 8` in single channel modes, one of which is taken by
//! the terminator.
//!
//! Example: An 800x600 image can store 159,999 characters in RGB mode.

use std::io::Cursor;
use std::path::Path;

use image::io::Reader as ImageReader;
use image::{DynamicImage, RgbImage};
use log::{debug, info, warn};

use super::channel_mode::ChannelMode;
use super::decoder::decode;
use super::encoder::{check_message, encode};
use super::error::{Result, StegoError};
use super::format::OutputFormat;
use super::pixels::{normalize, Pixel};
use super::report::ConcealReport;

/// Settings for a conceal run.
#[derive(Debug, Clone, Copy)]
pub struct ConcealOptions {
    pub mode: ChannelMode,
    /// Decode the result before handing it back and fail on mismatch.
    pub verify: bool,
    /// Format used when the output path has no extension.
    pub default_format: OutputFormat,
}

impl Default for ConcealOptions {
    fn default() -> Self {
        Self {
            mode: ChannelMode::default(),
            verify: true,
            default_format: OutputFormat::default(),
        }
    }
}

/// Pixels with a message hidden in them, plus encoding diagnostics.
#[derive(Debug, Clone)]
pub struct Concealed {
    pub pixels: Vec<Pixel>,
    pub pixels_consumed: usize,
    pub capacity: usize,
    pub verified: bool,
}

/// Flatten an RGB image into row-major pixels.
pub fn pixels_from_image(img: &RgbImage) -> Vec<Pixel> {
    img.pixels().map(|p| Pixel::from(p.0)).collect()
}

/// Rebuild an RGB image from row-major pixels.
///
/// # Errors
/// [`StegoError::DimensionMismatch`] if `pixels.len() != width * height`.
pub fn image_from_pixels(width: u32, height: u32, pixels: &[Pixel]) -> Result<RgbImage> {
    let raw: Vec<u8> = pixels.iter().flat_map(|p| p.channels).collect();
    RgbImage::from_raw(width, height, raw).ok_or(StegoError::DimensionMismatch {
        width,
        height,
        len: pixels.len(),
    })
}

/// Hide `message` in a copy of `pixels`.
///
/// The input slice is never modified. The copy is normalized and encoded,
/// and when `verify` is set it is decoded again and compared with `message`.
///
/// # Errors
/// - [`StegoError::UndefinedByteEncoding`] / [`StegoError::EncodingCapacityExceeded`]
///   from validation, raised before any copy is made
/// - [`StegoError::VerificationFailed`] if the self-check reads back something else
pub fn conceal_pixels(
    pixels: &[Pixel],
    message: &str,
    mode: ChannelMode,
    verify: bool,
) -> Result<Concealed> {
    check_message(message.as_bytes(), pixels.len(), mode)?;

    let mut stego = pixels.to_vec();
    normalize(&mut stego);
    let pixels_consumed = encode(&mut stego, message.as_bytes(), mode)?;

    if verify {
        let decoded = decode(&stego, mode);
        if decoded != message {
            return Err(StegoError::VerificationFailed {
                expected: message.to_string(),
                actual: decoded,
            });
        }
        debug!("Self-check passed for {} characters", message.len());
    }

    Ok(Concealed {
        pixels: stego,
        pixels_consumed,
        capacity: mode.capacity(pixels.len()),
        verified: verify,
    })
}

/// Recover a message hidden with `mode`.
pub fn reveal_pixels(pixels: &[Pixel], mode: ChannelMode) -> String {
    decode(pixels, mode)
}

fn to_rgb(img: DynamicImage) -> RgbImage {
    if img.color().has_alpha() {
        warn!("Input image has an alpha channel; it will be dropped");
    }
    img.into_rgb8()
}

/// Open an image file, sniffing the format from its contents so that paths
/// without an extension still load.
fn open_rgb(path: &Path) -> Result<RgbImage> {
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(to_rgb(img))
}

/// Embed text into an image held in memory.
///
/// # Arguments
/// - `image_bytes`: Raw bytes of the input image (any format supported by `image` crate)
/// - `text`: ASCII text to embed into the image
/// - `mode`: Channels that carry the message
/// - `format`: Lossless format of the returned image
///
/// # Returns
/// - `Ok(Vec<u8>)`: Encoded image bytes with embedded text
/// - `Err`: If the image can't be loaded, the text doesn't fit or isn't ASCII,
///   or encoding fails
///
/// # Example
/// ```ignore
/// let image_data = std::fs::read("input.jpg")?;
/// let stego = embed_text_bytes(&image_data, "Secret message", ChannelMode::Rgb, OutputFormat::Png)?;
/// std::fs::write("output.png", stego)?;
/// ```
pub fn embed_text_bytes(
    image_bytes: &[u8],
    text: &str,
    mode: ChannelMode,
    format: OutputFormat,
) -> Result<Vec<u8>> {
    let img = to_rgb(image::load_from_memory(image_bytes)?);
    let (width, height) = img.dimensions();

    let concealed = conceal_pixels(&pixels_from_image(&img), text, mode, true)?;
    let img = image_from_pixels(width, height, &concealed.pixels)?;

    let mut output_bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut output_bytes), format.image_format())?;

    Ok(output_bytes)
}

/// Extract text embedded in an image held in memory.
///
/// # Errors
/// Only if the image can't be decoded. A wrong `mode` yields garbage text,
/// not an error.
pub fn extract_text_bytes(image_bytes: &[u8], mode: ChannelMode) -> Result<String> {
    let img = to_rgb(image::load_from_memory(image_bytes)?);
    Ok(reveal_pixels(&pixels_from_image(&img), mode))
}

/// Embed text into the image at `image_path` and save it to `output_path`.
///
/// The output format comes from the extension of `output_path`, or
/// `options.default_format` when there is none. Nothing is written unless
/// encoding (and the self-check, if enabled) succeeded.
pub fn embed_text<P: AsRef<Path>, Q: AsRef<Path>>(
    image_path: P,
    text: &str,
    output_path: Q,
    options: &ConcealOptions,
) -> Result<ConcealReport> {
    let image_path = image_path.as_ref();
    let output_path = output_path.as_ref();
    let format = OutputFormat::resolve(output_path, options.default_format)?;

    let img = open_rgb(image_path)?;
    let (width, height) = img.dimensions();

    let concealed = conceal_pixels(&pixels_from_image(&img), text, options.mode, options.verify)?;
    info!(
        "Encoding {} characters into {} of {} pixels ({} mode)",
        text.len(),
        concealed.pixels_consumed,
        width as usize * height as usize,
        options.mode
    );

    let img = image_from_pixels(width, height, &concealed.pixels)?;
    img.save_with_format(output_path, format.image_format())?;
    info!("Saved image to {}", output_path.display());

    Ok(ConcealReport {
        input_path: image_path.display().to_string(),
        output_path: output_path.display().to_string(),
        output_format: format.to_string(),
        width,
        height,
        mode: options.mode.to_string(),
        message_length: text.len(),
        capacity: concealed.capacity,
        pixels_consumed: concealed.pixels_consumed,
        verified: concealed.verified,
        created_at: chrono::Local::now().to_rfc3339(),
    })
}

/// Extract text from the image at `image_path`.
pub fn extract_text<P: AsRef<Path>>(image_path: P, mode: ChannelMode) -> Result<String> {
    let image_path = image_path.as_ref();
    let img = open_rgb(image_path)?;
    let message = reveal_pixels(&pixels_from_image(&img), mode);
    debug!(
        "Revealed {} characters from {}",
        message.len(),
        image_path.display()
    );
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(len: usize) -> Vec<Pixel> {
        (0..len)
            .map(|i| Pixel::new(i as u8, (i * 3) as u8, 255 - i as u8))
            .collect()
    }

    #[test]
    fn test_conceal_pixels_leaves_input_untouched() {
        let pixels = gradient(120);
        let original = pixels.clone();

        let concealed = conceal_pixels(&pixels, "hello", ChannelMode::Gb, true).unwrap();

        assert_eq!(pixels, original);
        assert_eq!(concealed.pixels_consumed, 20);
        assert_eq!(concealed.capacity, 30);
        assert!(concealed.verified);
        assert_eq!(reveal_pixels(&concealed.pixels, ChannelMode::Gb), "hello");
    }

    #[test]
    fn test_conceal_pixels_only_moves_values_by_one() {
        let pixels = gradient(200);
        let concealed = conceal_pixels(&pixels, "drift", ChannelMode::Rgb, false).unwrap();

        for (before, after) in pixels.iter().zip(&concealed.pixels) {
            for c in 0..3 {
                assert!(before.channels[c].abs_diff(after.channels[c]) <= 1);
            }
        }
    }

    #[test]
    fn test_conceal_pixels_rejects_before_copying() {
        let pixels = gradient(9);
        let err = conceal_pixels(&pixels, "too long", ChannelMode::Rgb, true).unwrap_err();
        assert!(matches!(err, StegoError::EncodingCapacityExceeded { .. }));

        let err = conceal_pixels(&pixels, "é", ChannelMode::Rgb, true).unwrap_err();
        assert!(matches!(err, StegoError::UndefinedByteEncoding { .. }));
    }

    #[test]
    fn test_image_pixel_conversion() {
        let img = RgbImage::from_fn(4, 2, |x, y| image::Rgb([x as u8, y as u8, 7]));
        let pixels = pixels_from_image(&img);

        assert_eq!(pixels.len(), 8);
        assert_eq!(pixels[5], Pixel::new(1, 1, 7));
        assert_eq!(image_from_pixels(4, 2, &pixels).unwrap(), img);
    }

    #[test]
    fn test_image_from_pixels_checks_dimensions() {
        let err = image_from_pixels(3, 3, &gradient(8)).unwrap_err();
        assert!(matches!(
            err,
            StegoError::DimensionMismatch { width: 3, height: 3, len: 8 }
        ));
    }

    #[test]
    fn test_embed_and_extract_bytes() {
        let img = RgbImage::from_fn(16, 16, |x, y| image::Rgb([(x * 9) as u8, (y * 5) as u8, 200]));
        let mut png = Vec::new();
        img.write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();

        for format in [OutputFormat::Png, OutputFormat::Bmp, OutputFormat::Tiff] {
            let stego = embed_text_bytes(&png, "in memory", ChannelMode::Rb, format).unwrap();
            assert_eq!(
                extract_text_bytes(&stego, ChannelMode::Rb).unwrap(),
                "in memory"
            );
        }
    }

    #[test]
    fn test_extract_text_bytes_rejects_garbage() {
        assert!(matches!(
            extract_text_bytes(b"not an image", ChannelMode::Rgb),
            Err(StegoError::Image(_))
        ));
    }
}
