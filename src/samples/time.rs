//! Timestamp granularity checks and optional-bound clamping.
//!
//! Unbounded period ends are explicit `Option<DateTime<Utc>>` values (`None`
//! = earliest resp. latest possible). The helpers here centralize the
//! comparison semantics so no sentinel min/max timestamps appear anywhere in
//! the crate.

use chrono::{DateTime, Timelike, Utc};

/// Whether `timestamp` has whole-second granularity (no sub-second part).
///
/// Interpolation and all query bounds require whole seconds; sub-second
/// timestamps are contract violations.
pub fn is_whole_second(timestamp: DateTime<Utc>) -> bool {
    timestamp.nanosecond() == 0
}

/// Whether `timestamp` falls exactly on a clock hour (zero minutes, seconds,
/// and sub-second part).
///
/// Hour-aligned query ranges qualify for the aggregate development fast
/// path.
pub fn is_clock_hour(timestamp: DateTime<Utc>) -> bool {
    timestamp.minute() == 0 && timestamp.second() == 0 && timestamp.nanosecond() == 0
}

/// Clamp `timestamp` to an optional lower bound (`None` = unbounded below).
pub fn clamp_start(bound: Option<DateTime<Utc>>, timestamp: DateTime<Utc>) -> DateTime<Utc> {
    match bound {
        Some(b) => b.max(timestamp),
        None => timestamp,
    }
}

/// Clamp `timestamp` to an optional upper bound (`None` = unbounded above).
pub fn clamp_end(bound: Option<DateTime<Utc>>, timestamp: DateTime<Utc>) -> DateTime<Utc> {
    match bound {
        Some(b) => b.min(timestamp),
        None => timestamp,
    }
}

/// Whether `timestamp` lies at or after an optional lower bound.
pub fn at_or_after_start(bound: Option<DateTime<Utc>>, timestamp: DateTime<Utc>) -> bool {
    match bound {
        Some(b) => timestamp >= b,
        None => true,
    }
}

/// Whether `timestamp` lies at or before an optional upper bound.
pub fn at_or_before_end(bound: Option<DateTime<Utc>>, timestamp: DateTime<Utc>) -> bool {
    match bound {
        Some(b) => timestamp <= b,
        None => true,
    }
}
