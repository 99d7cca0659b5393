//! Raw deflate compression implementation.
//!
//! Produces and consumes bare deflate streams (RFC 1951) with no zlib or
//! gzip framing, using the flate2 library.

use std::io::{self, Write};

use flate2::{Decompress, FlushDecompress, Status, write::DeflateEncoder};

use crate::compression::{CompressionLevel, traits::Codec};
use crate::error::{CodecError, Result};

/// Growth step for the inflate output buffer.
const CHUNK: usize = 32 * 1024;

/// Raw deflate codec.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Deflate;

impl Deflate {
    const NAME: &'static str = "deflate";
}

impl Codec for Deflate {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn compress(&self, data: &[u8], level: CompressionLevel) -> Result<Vec<u8>> {
        if data.is_empty() {
            return Ok(Vec::new());
        }

        let mut encoder = DeflateEncoder::new(Vec::new(), level.into());
        encoder
            .write_all(data)
            .map_err(|e| CodecError::compress(Self::NAME, e))?;
        let output = encoder
            .finish()
            .map_err(|e| CodecError::compress(Self::NAME, e))?;

        debug!(
            "deflate: compressed {} bytes into {} bytes ({:?})",
            data.len(),
            output.len(),
            level
        );
        Ok(output)
    }

    /// Inflates until the final block has been decoded.
    ///
    /// A raw deflate stream carries no length or checksum, so the end-of-stream
    /// marker is the only proof that nothing was cut off. Bytes after it are
    /// ignored.
    fn decompress(&self, compressed_data: &[u8]) -> Result<Vec<u8>> {
        if compressed_data.is_empty() {
            return Ok(Vec::new());
        }

        let mut inflater = Decompress::new(false);
        let mut buffer = Vec::with_capacity(compressed_data.len().saturating_mul(2).max(CHUNK));
        loop {
            if buffer.len() == buffer.capacity() {
                buffer.reserve(buffer.len().max(CHUNK));
            }

            let consumed = inflater.total_in();
            let produced = inflater.total_out();
            let status = inflater
                .decompress_vec(
                    &compressed_data[consumed as usize..],
                    &mut buffer,
                    FlushDecompress::None,
                )
                .map_err(|e| {
                    warn!("deflate: rejecting {} byte input: {}", compressed_data.len(), e);
                    CodecError::decompress(Self::NAME, io::Error::new(io::ErrorKind::InvalidData, e))
                })?;

            if status == Status::StreamEnd {
                break;
            }

            let stalled = inflater.total_in() == consumed && inflater.total_out() == produced;
            if stalled && buffer.len() < buffer.capacity() {
                warn!(
                    "deflate: input ended after {} bytes without a final block",
                    compressed_data.len()
                );
                return Err(CodecError::Truncated { codec: Self::NAME });
            }
        }

        debug!(
            "deflate: decompressed {} bytes into {} bytes",
            compressed_data.len(),
            buffer.len()
        );
        Ok(buffer)
    }
}
