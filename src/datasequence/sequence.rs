//! Data sequences: ordered periods sharing one unit.
//!
//! Purpose
//! -------
//! A [`DataSequence`] is the query entry point of the data model: the
//! time-ordered, non-overlapping periods describing one logical consumption
//! or production series, together with the unit every reconstructed sample
//! is expressed in.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every known-kind period's output unit must equal the sequence unit;
//!   [`DataSequence::new`] enforces this (unsupported periods are exempt,
//!   their conversion rules are unknown by definition).
//! - Construction sorts periods by start bound (`None` first). Non-overlap
//!   is assumed, not enforced.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    datasequence::{
        errors::{SequenceError, SequenceResult},
        period::{Period, PeriodKind},
    },
    samples::quantity::Unit,
};

/// Reconstruction family of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SequenceKind {
    /// Raw values are cumulative meter readings; consumption is differences.
    Accumulation,
    /// Raw values are instantaneous readings (temperatures, power, ...).
    Nonaccumulation,
}

/// `DataSequence` — ordered periods sharing a unit; the query entry point.
///
/// Fields
/// ------
/// - `name`: caller-facing name; the fallback display representation when
///   the bound data source is ambiguous.
/// - `unit`: unit of every sample reconstructed from this sequence.
/// - `kind`: reconstruction family, see [`SequenceKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSequence {
    name: String,
    unit: Unit,
    kind: SequenceKind,
    periods: Vec<Period>,
}

impl DataSequence {
    /// Construct a validated sequence.
    ///
    /// Periods are sorted by start bound (unbounded starts first). Every
    /// known-kind period must convert into the sequence unit.
    ///
    /// Errors
    /// ------
    /// - `SequenceError::UnitMismatch` if a pulse, non-pulse accumulation,
    ///   or non-accumulation period's output unit differs from `unit`.
    pub fn new(
        name: impl Into<String>, unit: Unit, kind: SequenceKind, mut periods: Vec<Period>,
    ) -> SequenceResult<DataSequence> {
        for period in &periods {
            if matches!(period.kind, PeriodKind::Unsupported) {
                continue;
            }
            if period.output_unit() != &unit {
                return Err(SequenceError::UnitMismatch {
                    expected: unit.clone(),
                    actual: period.output_unit().clone(),
                });
            }
        }
        // Option's ordering puts `None` (earliest possible) first.
        periods.sort_by_key(|period| period.from_timestamp);
        Ok(DataSequence { name: name.into(), unit, kind, periods })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn kind(&self) -> SequenceKind {
        self.kind
    }

    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// The periods intersecting the query range `[from, to)`, in timeline
    /// order.
    pub fn periods_in_range(
        &self, from: DateTime<Utc>, to: DateTime<Utc>,
    ) -> impl Iterator<Item = &Period> {
        self.periods.iter().filter(move |period| period.intersects(from, to))
    }
}
