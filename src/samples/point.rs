//! Raw data points as delivered by the external raw data source.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::samples::quantity::{fraction, Fraction};

/// `RawDataPoint` — one externally supplied meter reading.
///
/// Purpose
/// -------
/// Carry a single `{timestamp, value}` reading from a raw data stream.
/// Points are immutable; within one stream their timestamps are strictly
/// ordered, unique, and whole seconds (supplied by the source, assumed
/// here).
///
/// Fields
/// ------
/// - `timestamp`: whole-second UTC timestamp of the reading.
/// - `value`: the raw counter value; cumulative for accumulation streams,
///   instantaneous for non-accumulation streams. Pulse streams count pulses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDataPoint {
    /// Whole-second UTC timestamp of the reading.
    pub timestamp: DateTime<Utc>,
    /// Raw counter value at `timestamp`.
    pub value: i64,
}

impl RawDataPoint {
    /// Construct a raw data point.
    pub fn new(timestamp: DateTime<Utc>, value: i64) -> RawDataPoint {
        RawDataPoint { timestamp, value }
    }

    /// The reading as an exact rational quantity.
    pub fn quantity(&self) -> Fraction {
        fraction(self.value)
    }
}
