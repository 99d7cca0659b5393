//! Codec options.
//!
//! Options are plain values passed to each call. They can also be read from
//! a TOML table, where every key is optional:
//!
//! ```toml
//! encoding = "utf-16le"
//! level = "smallest-size"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::compression::{CompressionLevel, DEFAULT_LEVEL};
use crate::error::Result;
use crate::text::{DEFAULT_ENCODING, TextEncoding};

/// Text encoding and compression level applied by the text and Base64 forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecOptions {
    /// Encoding used to turn text into bytes and back.
    pub encoding: TextEncoding,
    /// Level forwarded to the encoder.
    pub level: CompressionLevel,
}

impl CodecOptions {
    /// UTF-8 text at the optimal level.
    pub const DEFAULT: CodecOptions = CodecOptions {
        encoding: DEFAULT_ENCODING,
        level: DEFAULT_LEVEL,
    };

    /// Returns these options with `encoding` in place of the current one.
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Returns these options with `level` in place of the current one.
    pub fn with_level(mut self, level: CompressionLevel) -> Self {
        self.level = level;
        self
    }

    /// Parses options from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Reads options from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains unknown keys,
    /// an unknown encoding label or an unknown level.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let options = Self::from_toml_str(&content)?;
        debug!("loaded codec options from {}: {:?}", path.display(), options);
        Ok(options)
    }
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}
