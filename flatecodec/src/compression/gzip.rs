//! Gzip compression implementation.
//!
//! Produces and consumes the gzip container (RFC 1952) using the flate2 library.

use std::io::{Read, Write};

use flate2::{read::MultiGzDecoder, write::GzEncoder};

use crate::compression::{CompressionLevel, traits::Codec};
use crate::error::{CodecError, Result};

/// Gzip codec.
///
/// Stateless: the level is chosen per call, so one value can be shared freely
/// between threads.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Gzip;

impl Gzip {
    const NAME: &'static str = "gzip";
}

impl Codec for Gzip {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn compress(&self, data: &[u8], level: CompressionLevel) -> Result<Vec<u8>> {
        if data.is_empty() {
            return Ok(Vec::new());
        }

        let mut encoder = GzEncoder::new(Vec::new(), level.into());
        encoder
            .write_all(data)
            .map_err(|e| CodecError::compress(Self::NAME, e))?;
        let output = encoder
            .finish()
            .map_err(|e| CodecError::compress(Self::NAME, e))?;

        debug!(
            "gzip: compressed {} bytes into {} bytes ({:?})",
            data.len(),
            output.len(),
            level
        );
        Ok(output)
    }

    fn decompress(&self, compressed_data: &[u8]) -> Result<Vec<u8>> {
        if compressed_data.is_empty() {
            return Ok(Vec::new());
        }

        // Concatenated members decode as one payload.
        let mut decoder = MultiGzDecoder::new(compressed_data);
        let mut buffer = Vec::new();
        decoder.read_to_end(&mut buffer).map_err(|e| {
            warn!("gzip: rejecting {} byte input: {}", compressed_data.len(), e);
            CodecError::decompress(Self::NAME, e)
        })?;

        debug!(
            "gzip: decompressed {} bytes into {} bytes",
            compressed_data.len(),
            buffer.len()
        );
        Ok(buffer)
    }
}
