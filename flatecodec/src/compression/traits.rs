//! Codec interface definitions.
//!
//! Defines the contract shared by the GZip and Deflate adapters. An
//! implementor only supplies the byte-level [`Codec::compress`] and
//! [`Codec::decompress`]; the text and Base64 forms are provided on top.

use base64::{Engine, engine::general_purpose::STANDARD};

use crate::compression::CompressionLevel;
use crate::error::Result;
use crate::options::CodecOptions;
use crate::text::TextEncoding;

/// Codec interface trait.
///
/// Empty input is a no-op in every direction: it yields an empty output and
/// never an error.
pub trait Codec {
    /// Returns the name of the container format.
    fn name(&self) -> &'static str;

    /// Compresses binary data.
    ///
    /// # Arguments
    ///
    /// * `data` - The raw data to compress
    /// * `level` - Speed/size hint forwarded to the encoder
    fn compress(&self, data: &[u8], level: CompressionLevel) -> Result<Vec<u8>>;

    /// Decompresses binary data.
    ///
    /// # Errors
    ///
    /// Fails if `compressed_data` is not a complete, well-formed stream.
    fn decompress(&self, compressed_data: &[u8]) -> Result<Vec<u8>>;

    /// Encodes `text` with `options.encoding` and compresses it at `options.level`.
    fn compress_str(&self, text: &str, options: &CodecOptions) -> Result<Vec<u8>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }
        let data = options.encoding.encode(text)?;
        self.compress(&data, options.level)
    }

    /// Compresses binary data and returns it as standard Base64 text.
    fn compress_to_base64(&self, data: &[u8], level: CompressionLevel) -> Result<String> {
        let compressed = self.compress(data, level)?;
        Ok(STANDARD.encode(compressed))
    }

    /// Compresses `text` and returns the result as standard Base64 text.
    fn compress_str_to_base64(&self, text: &str, options: &CodecOptions) -> Result<String> {
        let compressed = self.compress_str(text, options)?;
        Ok(STANDARD.encode(compressed))
    }

    /// Decompresses binary data and decodes the result with `encoding`.
    fn decompress_to_string(&self, compressed_data: &[u8], encoding: TextEncoding) -> Result<String> {
        let data = self.decompress(compressed_data)?;
        encoding.decode(&data)
    }

    /// Decodes standard Base64 text and decompresses the bytes it carries.
    ///
    /// # Errors
    ///
    /// Fails on characters outside the Base64 alphabet or bad padding, before
    /// any decompression is attempted.
    fn decompress_from_base64(&self, source: &str) -> Result<Vec<u8>> {
        if source.is_empty() {
            return Ok(Vec::new());
        }
        let compressed = STANDARD.decode(source)?;
        self.decompress(&compressed)
    }

    /// Decodes standard Base64 text, decompresses it and decodes the result with `encoding`.
    fn decompress_str_from_base64(&self, source: &str, encoding: TextEncoding) -> Result<String> {
        if source.is_empty() {
            return Ok(String::new());
        }
        let compressed = STANDARD.decode(source)?;
        self.decompress_to_string(&compressed, encoding)
    }
}
