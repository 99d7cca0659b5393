//! Compression module.
//!
//! Provides a unified interface over the GZip and raw Deflate formats. Both
//! adapters hand the actual work to flate2 and only marshal buffers.

use flate2::Compression;
use serde::{Deserialize, Serialize};

pub mod deflate;
pub mod gzip;
pub mod traits;

/// Compression level used when none is given.
pub const DEFAULT_LEVEL: CompressionLevel = CompressionLevel::Optimal;

/// Speed/size trade-off hint forwarded to the encoder.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompressionLevel {
    /// Finish as quickly as possible, even if the output is larger.
    Fastest,
    /// Balance speed and size.
    #[default]
    Optimal,
    /// Store the data without compressing it. The output is still a valid container.
    NoCompression,
    /// Produce the smallest output, however long it takes.
    SmallestSize,
}

impl From<CompressionLevel> for Compression {
    fn from(level: CompressionLevel) -> Self {
        match level {
            CompressionLevel::Fastest => Compression::fast(),
            CompressionLevel::Optimal => Compression::default(),
            CompressionLevel::NoCompression => Compression::none(),
            CompressionLevel::SmallestSize => Compression::best(),
        }
    }
}
