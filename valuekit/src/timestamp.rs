//! Unix timestamp conversions.
//!
//! Elapsed time is measured from [`UNIX_EPOCH`] and truncated toward zero,
//! so an instant half a second before the epoch is `0` seconds and `-500`
//! milliseconds.
//!
//! The UTC forms measure real elapsed time. The local forms compare wall
//! clocks instead: the local time of the instant minus the local time of the
//! epoch, both in the same zone. When the zone's offset today differs from
//! its offset in 1970 (daylight saving, legislated changes) the two forms
//! differ by that amount.

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};

/// 1970-01-01T00:00:00 UTC.
pub const UNIX_EPOCH: DateTime<Utc> = DateTime::<Utc>::UNIX_EPOCH;

/// Whole seconds elapsed since the epoch.
pub fn to_utc_timestamp<Tz: TimeZone>(dt: &DateTime<Tz>) -> i64 {
    utc_elapsed(dt).num_seconds()
}

/// Whole milliseconds elapsed since the epoch.
pub fn to_utc_timestamp_millis<Tz: TimeZone>(dt: &DateTime<Tz>) -> i64 {
    utc_elapsed(dt).num_milliseconds()
}

/// Wall-clock seconds since the epoch in the process's local zone.
pub fn to_timestamp<Tz: TimeZone>(dt: &DateTime<Tz>) -> i64 {
    to_timestamp_in(dt, &Local)
}

/// Wall-clock milliseconds since the epoch in the process's local zone.
pub fn to_timestamp_millis<Tz: TimeZone>(dt: &DateTime<Tz>) -> i64 {
    to_timestamp_millis_in(dt, &Local)
}

/// Wall-clock seconds since the epoch, both read in `zone`.
pub fn to_timestamp_in<Tz: TimeZone, Z: TimeZone>(dt: &DateTime<Tz>, zone: &Z) -> i64 {
    wall_clock_elapsed(dt, zone).num_seconds()
}

/// Wall-clock milliseconds since the epoch, both read in `zone`.
pub fn to_timestamp_millis_in<Tz: TimeZone, Z: TimeZone>(dt: &DateTime<Tz>, zone: &Z) -> i64 {
    wall_clock_elapsed(dt, zone).num_milliseconds()
}

fn utc_elapsed<Tz: TimeZone>(dt: &DateTime<Tz>) -> TimeDelta {
    dt.with_timezone(&Utc) - UNIX_EPOCH
}

fn wall_clock_elapsed<Tz: TimeZone, Z: TimeZone>(dt: &DateTime<Tz>, zone: &Z) -> TimeDelta {
    dt.with_timezone(zone).naive_local() - UNIX_EPOCH.with_timezone(zone).naive_local()
}

/// Timestamp conversions as methods on any [`DateTime`].
pub trait TimestampExt {
    /// See [`to_timestamp`].
    fn to_timestamp(&self) -> i64;
    /// See [`to_timestamp_millis`].
    fn to_timestamp_millis(&self) -> i64;
    /// See [`to_utc_timestamp`].
    fn to_utc_timestamp(&self) -> i64;
    /// See [`to_utc_timestamp_millis`].
    fn to_utc_timestamp_millis(&self) -> i64;
}

impl<Tz: TimeZone> TimestampExt for DateTime<Tz> {
    fn to_timestamp(&self) -> i64 {
        to_timestamp(self)
    }

    fn to_timestamp_millis(&self) -> i64 {
        to_timestamp_millis(self)
    }

    fn to_utc_timestamp(&self) -> i64 {
        to_utc_timestamp(self)
    }

    fn to_utc_timestamp_millis(&self) -> i64 {
        to_utc_timestamp_millis(self)
    }
}
