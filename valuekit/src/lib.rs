//! # valuekit
//!
//! Small conversions that should not depend on ambient process state:
//!
//! - [`timestamp`] - Unix timestamps from `chrono` date-times, in UTC or
//!   wall-clock semantics
//! - [`number`] - Float parsing against an explicit [`NumberFormat`]
//! - [`error`] - Error types and result definitions
//!
//! ```rust
//! use valuekit::{NumberFormat, parse_f32};
//!
//! assert_eq!(parse_f32("0.123", &NumberFormat::INVARIANT).unwrap(), 0.123);
//! ```

#[macro_use]
extern crate log;

/// Error types for number parsing.
pub mod error;

/// Locale-independent float parsing.
pub mod number;

/// Unix timestamp conversions.
pub mod timestamp;

pub use error::{NumberFormatError, Result};
pub use number::{NumberFormat, parse_f32, parse_f64, try_parse_f32, try_parse_f64};
pub use timestamp::{
    TimestampExt, UNIX_EPOCH, to_timestamp, to_timestamp_in, to_timestamp_millis,
    to_timestamp_millis_in, to_utc_timestamp, to_utc_timestamp_millis,
};
