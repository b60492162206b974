//! Errors for the data model (period/sequence construction) and the raw
//! data source boundary.
//!
//! Two error types live here:
//! - [`SequenceError`] covers construction-time validation of periods and
//!   data sequences (bounds, units, conversion parameters). These are
//!   configuration bugs and fail fast.
//! - [`SourceError`] wraps failures of the external raw data source. The
//!   engine never retries or maps these; they propagate unchanged to the
//!   caller.

use chrono::{DateTime, Utc};

use crate::{datasequence::source::StreamId, samples::quantity::Unit};

/// Result alias for data-model construction paths.
pub type SequenceResult<T> = Result<T, SequenceError>;

/// Result alias for raw-data-source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Construction-time validation failures for periods and sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// Period bounds are both set but not strictly ordered.
    InvalidPeriodBounds { from: DateTime<Utc>, to: DateTime<Utc> },

    /// A period bound carries a sub-second component.
    SubSecondBound { timestamp: DateTime<Utc> },

    /// A period's output unit differs from the sequence unit.
    UnitMismatch { expected: Unit, actual: Unit },

    /// Pulse conversion requires a strictly positive pulse quantity.
    InvalidPulseConversion { pulse_quantity: i64 },
}

impl std::error::Error for SequenceError {}

impl std::fmt::Display for SequenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SequenceError::InvalidPeriodBounds { from, to } => {
                write!(f, "Period bounds must satisfy from < to; got [{from}, {to})")
            }
            SequenceError::SubSecondBound { timestamp } => {
                write!(f, "Period bounds must be whole seconds; got {timestamp}")
            }
            SequenceError::UnitMismatch { expected, actual } => {
                write!(f, "Period output unit {actual} does not match sequence unit {expected}")
            }
            SequenceError::InvalidPulseConversion { pulse_quantity } => {
                write!(f, "Pulse conversion requires pulse_quantity > 0; got {pulse_quantity}")
            }
        }
    }
}

/// Failures of the external raw data source.
///
/// The reconstruction engine treats these as opaque: no retry, no timeout,
/// no mapping. They surface unchanged inside `AdapterError::Source`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The requested stream is unknown to the source.
    StreamMissing { stream: StreamId },

    /// The backing store failed; `detail` is the backend's own description.
    Backend { detail: String },
}

impl std::error::Error for SourceError {}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::StreamMissing { stream } => {
                write!(f, "Raw data stream {stream} is unknown to the source")
            }
            SourceError::Backend { detail } => {
                write!(f, "Raw data source failed: {detail}")
            }
        }
    }
}
