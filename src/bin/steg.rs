//! # steg Binary Entry Point
//!
//! Hides a message in an image or reveals one.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin steg -- conceal -rgb input.png output.png "Secret message"
//! cargo run --bin steg -- reveal -rgb output.png
//! ```
//!
//! Channel flags: `-rgb`, `-rg`, `-rb`, `-gb`, `-r`, `-g`, `-b` (any letter
//! order, any case). The same flags must be used to reveal.
//!
//! The output image is always written in a lossless format (PNG, BMP or
//! TIFF). Saving to JPEG would destroy the hidden bits, so it is refused.

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};

// Import from the library crate
use lsb_steg::common::config::StegoConfig;
use lsb_steg::processing::{embed_text, extract_text, ChannelMode};
use lsb_steg::utils::logging::init_logger;

/// Command-line arguments for the steg binary
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a configuration file (TOML format)
    ///
    /// Example: config/steg.toml
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Log at debug level regardless of the configured level
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hide a message in an image
    Conceal {
        /// Channels to hide the message in, e.g. -rgb, -rg, -b
        #[arg(allow_hyphen_values = true)]
        flags: String,
        /// Image to hide the message in
        input: String,
        /// Where to write the image holding the message
        output: String,
        /// ASCII message to hide
        message: String,
        /// Write a JSON report of the run to this path
        #[arg(long)]
        report: Option<String>,
        /// Skip decoding the result before saving
        #[arg(long)]
        no_verify: bool,
    },
    /// Print the message hidden in an image
    Reveal {
        /// Channels the message was hidden in
        #[arg(allow_hyphen_values = true)]
        flags: String,
        /// Image holding the message
        input: String,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration from TOML file if one was given
    let config = match &args.config {
        Some(path) => StegoConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path))?,
        None => StegoConfig::default(),
    };

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        config.logging.level_filter()
    };
    init_logger(level);

    match args.command {
        Command::Conceal {
            flags,
            input,
            output,
            message,
            report,
            no_verify,
        } => {
            let mode = ChannelMode::from_flags(&flags)?;
            let mut options = config.conceal_options(mode);
            if no_verify {
                options.verify = false;
            }

            let summary = embed_text(&input, &message, &output, &options)?;
            info!(
                "Concealed {} characters in {} pixels ({} byte slots available)",
                summary.message_length, summary.pixels_consumed, summary.capacity
            );
            println!("The image has been saved to: {}", output);

            if let Some(report_path) = report {
                summary.export_to_json(&report_path)?;
                println!("Report exported to: {}", report_path);
            }
        }
        Command::Reveal { flags, input } => {
            let mode = ChannelMode::from_flags(&flags)?;
            let message = extract_text(&input, mode)?;
            println!("{}", message);
        }
    }

    Ok(())
}
