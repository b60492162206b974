//! Errors for sample primitives (interpolation contracts and timestamp
//! granularity).
//!
//! This module defines [`SampleError`], the error type for the value-level
//! primitives in [`crate::samples`]. All variants are contract violations:
//! the design favors loud, detectable failure over silently producing
//! plausible-but-wrong numbers, so none of these are recovered internally.
//!
//! ## Conventions
//! - Timestamps entering interpolation must be whole seconds.
//! - The interpolation span is half-open: `before.timestamp <= t <
//!   after.timestamp`.

use chrono::{DateTime, Utc};

/// Result alias for sample-primitive operations that may produce
/// [`SampleError`].
pub type SampleResult<T> = Result<T, SampleError>;

/// Contract violations in the sample primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleError {
    /// The two interpolation anchor points are not strictly ordered.
    PointsOutOfOrder { before: DateTime<Utc>, after: DateTime<Utc> },

    /// The interpolation timestamp falls outside `[before, after)`.
    TimestampOutsideSpan {
        timestamp: DateTime<Utc>,
        before: DateTime<Utc>,
        after: DateTime<Utc>,
    },

    /// A timestamp carries a sub-second component.
    SubSecondTimestamp { timestamp: DateTime<Utc> },
}

impl std::error::Error for SampleError {}

impl std::fmt::Display for SampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SampleError::PointsOutOfOrder { before, after } => {
                write!(f, "Interpolation anchors out of order: {before} is not before {after}")
            }
            SampleError::TimestampOutsideSpan { timestamp, before, after } => {
                write!(
                    f,
                    "Interpolation timestamp {timestamp} outside span [{before}, {after})"
                )
            }
            SampleError::SubSecondTimestamp { timestamp } => {
                write!(f, "Timestamp must have whole-second granularity; got {timestamp}")
            }
        }
    }
}
