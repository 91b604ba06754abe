pub mod common;
pub mod processing;
pub mod utils;

pub use processing::{ChannelMode, Pixel, StegoError};
