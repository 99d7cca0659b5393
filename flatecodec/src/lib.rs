//! # flatecodec - GZip and Deflate helpers
//!
//! Thin adapters over the flate2 codecs that add the conversions callers
//! usually end up writing by hand: text to bytes, bytes to Base64, and back.
//!
//! ## Features
//!
//! - Gzip container (RFC 1952) and raw deflate stream (RFC 1951)
//! - Text payloads in UTF-8, UTF-16LE/BE, ASCII or Latin-1, strictly checked
//! - Standard Base64 (RFC 4648, padded) transport forms
//! - Options as plain values, optionally loaded from TOML
//!
//! ## Quick Start
//!
//! ```rust
//! use flatecodec::{Codec, CodecOptions, Gzip};
//!
//! let packed = Gzip
//!     .compress_str_to_base64("Hello World! 你好！", &CodecOptions::DEFAULT)
//!     .unwrap();
//! let text = Gzip
//!     .decompress_str_from_base64(&packed, CodecOptions::DEFAULT.encoding)
//!     .unwrap();
//! assert_eq!(text, "Hello World! 你好！");
//! ```
//!
//! Empty input is a no-op: every operation returns an empty value for it.
//!
//! ## Modules
//!
//! - [`compression`] - The codec trait and the gzip/deflate adapters
//! - [`text`] - Text encodings
//! - [`options`] - Per-call options
//! - [`error`] - Error types and result definitions

#[macro_use]
extern crate log;

/// Compression adapters (gzip, deflate).
pub mod compression;

/// Error types and result definitions for codec operations.
pub mod error;

/// Options for the text and Base64 forms.
pub mod options;

/// Text encodings for string payloads.
pub mod text;

pub use compression::deflate::Deflate;
pub use compression::gzip::Gzip;
pub use compression::traits::Codec;
pub use compression::{CompressionLevel, DEFAULT_LEVEL};
pub use error::{CodecError, Result};
pub use options::CodecOptions;
pub use text::{DEFAULT_ENCODING, TextEncoding};

/// Current version of the flatecodec implementation
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
