//! Errors for the adapter layer (query contracts and propagated collaborator
//! failures).
//!
//! [`AdapterError`] unifies what a reconstruction query can fail with:
//! contract violations on the query itself (reversed range, sub-second
//! bounds, range escaping the period), unsupported operations, and failures
//! propagated unchanged from the sample primitives and the raw data source.
//!
//! ## Conventions
//! - Contract violations fail fast; the two expected degraded cases
//!   (unsupported period kinds, ambiguous sequence naming) are recovered
//!   locally in the adapters and never surface here.

use chrono::{DateTime, Utc};

use crate::{
    datasequence::{
        errors::{SequenceError, SourceError},
        sequence::SequenceKind,
    },
    samples::errors::SampleError,
};

/// Result alias for adapter-layer operations.
pub type AdapterResult<T> = Result<T, AdapterError>;

/// Unified error type for reconstruction queries.
#[derive(Debug, Clone, PartialEq)]
pub enum AdapterError {
    /// Query range is reversed (`from > to`).
    InvalidRange { from: DateTime<Utc>, to: DateTime<Utc> },

    /// A period adapter was asked for a range escaping its period's bounds.
    RangeOutsidePeriod { from: DateTime<Utc>, to: DateTime<Utc> },

    /// Development reporting is only defined for accumulation sequences.
    DevelopmentUnsupported { kind: SequenceKind },

    /// Contract violation in the sample primitives.
    Sample(SampleError),

    /// Data-model validation failure surfaced at query time.
    Sequence(SequenceError),

    /// External raw-data-source failure, propagated unchanged.
    Source(SourceError),
}

impl std::error::Error for AdapterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AdapterError::Sample(err) => Some(err),
            AdapterError::Sequence(err) => Some(err),
            AdapterError::Source(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for AdapterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdapterError::InvalidRange { from, to } => {
                write!(f, "Query range must satisfy from <= to; got [{from}, {to}]")
            }
            AdapterError::RangeOutsidePeriod { from, to } => {
                write!(f, "Query range [{from}, {to}] escapes the period bounds")
            }
            AdapterError::DevelopmentUnsupported { kind } => {
                write!(f, "Development is not defined for {kind:?} sequences")
            }
            AdapterError::Sample(err) => write!(f, "{err}"),
            AdapterError::Sequence(err) => write!(f, "{err}"),
            AdapterError::Source(err) => write!(f, "{err}"),
        }
    }
}

impl From<SampleError> for AdapterError {
    fn from(err: SampleError) -> AdapterError {
        AdapterError::Sample(err)
    }
}

impl From<SequenceError> for AdapterError {
    fn from(err: SequenceError) -> AdapterError {
        AdapterError::Sequence(err)
    }
}

impl From<SourceError> for AdapterError {
    fn from(err: SourceError) -> AdapterError {
        AdapterError::Source(err)
    }
}
