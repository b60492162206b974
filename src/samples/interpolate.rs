//! Exact rational interpolation and constant-value extrapolation.
//!
//! Purpose
//! -------
//! Provide the two primitives every boundary sample in the crate is built
//! from: linear interpolation between two dated readings, evaluated in exact
//! rational arithmetic so repeated calls are bit-identical, and
//! constant-value extrapolation from a single reading, explicitly marked as
//! not authoritative.
//!
//! Invariants & assumptions
//! ------------------------
//! - `interpolate(t, a, b)` requires `a.timestamp <= t < b.timestamp` and
//!   whole-second timestamps throughout; violations are [`SampleError`]s.
//! - No floating point participates; the result is
//!   `a.value + (b.value - a.value) * (t - a.timestamp) / (b.timestamp -
//!   a.timestamp)` over [`Fraction`]s.
//! - Extrapolated samples are flagged `extrapolated = true, cachable =
//!   false`; later-arriving data could change them.

use chrono::{DateTime, Utc};

use crate::samples::{
    errors::{SampleError, SampleResult},
    point::RawDataPoint,
    quantity::Fraction,
    sample::Sample,
    time::is_whole_second,
};

/// Linearly interpolate between two readings at `timestamp`, exactly.
///
/// Parameters
/// ----------
/// - `timestamp`: evaluation point; must satisfy
///   `before.timestamp <= timestamp < after.timestamp`.
/// - `before`, `after`: anchor readings; strictly ordered.
///
/// Returns
/// -------
/// `SampleResult<Fraction>`
///   The exact rational value of the line through `before` and `after` at
///   `timestamp`.
///
/// Errors
/// ------
/// - `SampleError::SubSecondTimestamp` if any involved timestamp carries a
///   sub-second component.
/// - `SampleError::PointsOutOfOrder` if `before.timestamp >=
///   after.timestamp`.
/// - `SampleError::TimestampOutsideSpan` if `timestamp` lies outside
///   `[before.timestamp, after.timestamp)`.
///
/// Notes
/// -----
/// - Evaluation is deterministic: the same inputs always produce the same
///   numerator/denominator pair, so cached interpolations never drift.
pub fn interpolate(
    timestamp: DateTime<Utc>, before: &RawDataPoint, after: &RawDataPoint,
) -> SampleResult<Fraction> {
    for ts in [timestamp, before.timestamp, after.timestamp] {
        if !is_whole_second(ts) {
            return Err(SampleError::SubSecondTimestamp { timestamp: ts });
        }
    }
    if before.timestamp >= after.timestamp {
        return Err(SampleError::PointsOutOfOrder {
            before: before.timestamp,
            after: after.timestamp,
        });
    }
    if timestamp < before.timestamp || timestamp >= after.timestamp {
        return Err(SampleError::TimestampOutsideSpan {
            timestamp,
            before: before.timestamp,
            after: after.timestamp,
        });
    }

    let elapsed = (timestamp - before.timestamp).num_seconds() as i128;
    let span = (after.timestamp - before.timestamp).num_seconds() as i128;
    let progress = Fraction::new(elapsed, span);
    Ok(before.quantity() + (after.quantity() - before.quantity()) * progress)
}

/// Interpolate between two readings and wrap the result in a cachable point
/// sample at `timestamp`.
pub fn interpolated_sample(
    timestamp: DateTime<Utc>, before: &RawDataPoint, after: &RawDataPoint,
) -> SampleResult<Sample> {
    Ok(Sample::point(timestamp, interpolate(timestamp, before, after)?))
}

/// Hold a reading's value constant at `timestamp`.
///
/// The result is an extrapolated, non-cachable point sample: it marks a
/// value synthesized beyond real data.
pub fn extrapolated_sample(timestamp: DateTime<Utc>, point: &RawDataPoint) -> Sample {
    Sample::extrapolated_point(timestamp, point.quantity())
}
