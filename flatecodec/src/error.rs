//! Error types for codec operations.

use thiserror::Error;

/// Result alias used throughout flatecodec.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors raised while compressing, decompressing or converting payloads.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The encoder rejected the input or failed to finish the container.
    #[error("{codec} compression failed: {source}")]
    Compress {
        codec: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// The compressed stream is malformed.
    #[error("{codec} decompression failed: {source}")]
    Decompress {
        codec: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// The compressed stream ended before its final block.
    #[error("{codec} stream is truncated")]
    Truncated { codec: &'static str },

    /// The Base64 text uses characters or padding outside the standard alphabet.
    #[error("invalid base64 input: {0}")]
    Base64(#[from] base64::DecodeError),

    /// A character cannot be represented in the requested encoding.
    #[error("character {ch:?} at index {position} is not representable in {encoding}")]
    Encode {
        encoding: &'static str,
        position: usize,
        ch: char,
    },

    /// A byte sequence is invalid under the requested encoding.
    #[error("invalid {encoding} data at byte {position}: {reason}")]
    Decode {
        encoding: &'static str,
        position: usize,
        reason: String,
    },

    /// The encoding label is not one of the supported encodings.
    #[error("unknown text encoding: {0:?}")]
    UnknownEncoding(String),

    /// Options could not be parsed from TOML.
    #[error("invalid codec options: {0}")]
    Config(#[from] toml::de::Error),

    /// An options file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CodecError {
    pub(crate) fn compress(codec: &'static str, source: std::io::Error) -> Self {
        Self::Compress { codec, source }
    }

    pub(crate) fn decompress(codec: &'static str, source: std::io::Error) -> Self {
        Self::Decompress { codec, source }
    }

    pub(crate) fn decode(encoding: &'static str, position: usize, reason: impl Into<String>) -> Self {
        Self::Decode {
            encoding,
            position,
            reason: reason.into(),
        }
    }
}
