//! Compression and storage of electrolyzer hydrogen.

mod compressor;
mod config;
mod error;
mod tank;

pub use compressor::{CompressorOutput, compress};
pub use config::{BeattieBridgeman, CompressorConfig, TankConfig};
pub use error::{StorageConfigError, StorageError};
pub use tank::{balance, tank_pressure};
