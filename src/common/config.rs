//! # Configuration Utilities
//!
//! TOML configuration for the `steg` binary. Every field has a default, so an
//! empty file (or no file at all) gives self-check on, PNG output and `info`
//! logging. The channel mode always comes from the command line.
//!
//! ```toml
//! [steganography]
//! verify = true
//! output_format = "png"
//!
//! [logging]
//! level = "info"
//! ```

use anyhow::Result;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::processing::{ChannelMode, ConcealOptions, OutputFormat};

/// Load a TOML configuration file and deserialize it into the specified type.
///
/// # Arguments
/// - `path`: Path to the TOML configuration file
///
/// # Returns
/// - `Ok(T)`: Successfully loaded and parsed configuration
/// - `Err`: File I/O or parsing error
///
/// # Example
/// ```ignore
/// let config: StegoConfig = load_config("config/steg.toml")?;
/// ```
pub fn load_config<T>(path: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Top-level configuration for the `steg` binary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StegoConfig {
    pub steganography: SteganographyConfig,
    pub logging: LoggingConfig,
}

/// Defaults for conceal/reveal runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SteganographyConfig {
    /// Decode the result before saving and refuse to save on mismatch
    pub verify: bool,
    /// Format used when the output path has no extension
    pub output_format: OutputFormat,
}

impl Default for SteganographyConfig {
    fn default() -> Self {
        Self {
            verify: true,
            output_format: OutputFormat::default(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of: off, error, warn, info, debug, trace
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed log level; unknown names fall back to `Info`.
    pub fn level_filter(&self) -> LevelFilter {
        self.level.parse().unwrap_or(LevelFilter::Info)
    }
}

impl StegoConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        load_config(path)
    }

    /// Build conceal options for `mode` from the configured defaults.
    pub fn conceal_options(&self, mode: ChannelMode) -> ConcealOptions {
        ConcealOptions {
            mode,
            verify: self.steganography.verify,
            default_format: self.steganography.output_format,
        }
    }
}
