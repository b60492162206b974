//! Periods: bounded sub-intervals of a sequence's timeline.
//!
//! Purpose
//! -------
//! A [`Period`] binds part of a sequence's timeline to one raw data stream
//! and one conversion rule. When a meter is swapped or rewired, a new period
//! starts; the reconstruction engine stitches across the transition so
//! reported consumption stays continuous.
//!
//! Key behaviors
//! -------------
//! - Half-open interval `[from, to)` with explicit optional bounds: `None`
//!   means earliest resp. latest possible. No sentinel timestamps.
//! - [`PeriodKind`] is a tagged variant over the supported period flavors;
//!   unsupported flavors are carried as [`PeriodKind::Unsupported`] and
//!   degrade to an empty contribution at query time rather than failing the
//!   whole query.
//! - [`PulseConversion`] validates its factor (`output_quantity /
//!   pulse_quantity`) eagerly; a non-positive pulse quantity is a
//!   configuration error, not a query-time surprise.
//!
//! Invariants & assumptions
//! ------------------------
//! - Bounds are whole seconds and strictly ordered when both are set
//!   (enforced by [`Period::new`]).
//! - Periods of one sequence are time-ordered and non-overlapping; that is
//!   assumed, not enforced here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    datasequence::{
        errors::{SequenceError, SequenceResult},
        source::StreamId,
    },
    samples::{
        quantity::{Fraction, Unit},
        time::{at_or_after_start, at_or_before_end, clamp_end, clamp_start, is_whole_second},
    },
};

/// `PulseConversion` — fixed factor from pulse counts to an output quantity.
///
/// A pulse stream counts `pulse_quantity` pulses per `output_quantity` of
/// `output_unit`; every reconstructed quantity is multiplied by
/// `output_quantity / pulse_quantity` before leaving the period adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PulseConversion {
    /// Pulses per `output_quantity`; must be strictly positive.
    pub pulse_quantity: i64,
    /// Output amount corresponding to `pulse_quantity` pulses.
    pub output_quantity: i64,
    /// Unit of the converted output.
    pub output_unit: Unit,
}

impl PulseConversion {
    /// Construct a validated conversion.
    ///
    /// Errors
    /// ------
    /// - `SequenceError::InvalidPulseConversion` if `pulse_quantity <= 0`.
    pub fn new(
        pulse_quantity: i64, output_quantity: i64, output_unit: Unit,
    ) -> SequenceResult<PulseConversion> {
        if pulse_quantity <= 0 {
            return Err(SequenceError::InvalidPulseConversion { pulse_quantity });
        }
        Ok(PulseConversion { pulse_quantity, output_quantity, output_unit })
    }

    /// The exact conversion factor `output_quantity / pulse_quantity`.
    pub fn factor(&self) -> Fraction {
        Fraction::new(self.output_quantity as i128, self.pulse_quantity as i128)
    }
}

/// Kind of a period, as a tagged variant.
///
/// One handler per variant replaces the original's instance-type dispatch;
/// see `adapters::period::classify`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodKind {
    /// Accumulation readings in pulse counts, converted via a fixed factor.
    PulseAccumulation(PulseConversion),
    /// Accumulation readings already in the output unit.
    NonpulseAccumulation,
    /// Instantaneous (non-cumulative) readings.
    Nonaccumulation,
    /// A period flavor this engine does not reconstruct; contributes no
    /// samples instead of failing the query.
    Unsupported,
}

/// `Period` — half-open interval `[from, to)` bound to one stream and unit.
///
/// Fields
/// ------
/// - `stream`: the raw data stream backing this period.
/// - `unit`: unit of the raw readings (`"impulse"` for pulse periods).
/// - `from_timestamp`, `to_timestamp`: optional bounds; `None` = earliest
///   resp. latest possible.
/// - `kind`: reconstruction flavor, see [`PeriodKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub stream: StreamId,
    pub unit: Unit,
    pub from_timestamp: Option<DateTime<Utc>>,
    pub to_timestamp: Option<DateTime<Utc>>,
    pub kind: PeriodKind,
}

impl Period {
    /// Construct a validated period.
    ///
    /// Errors
    /// ------
    /// - `SequenceError::SubSecondBound` if a set bound carries a sub-second
    ///   component.
    /// - `SequenceError::InvalidPeriodBounds` if both bounds are set and not
    ///   strictly ordered.
    pub fn new(
        stream: StreamId, unit: Unit, from_timestamp: Option<DateTime<Utc>>,
        to_timestamp: Option<DateTime<Utc>>, kind: PeriodKind,
    ) -> SequenceResult<Period> {
        for bound in [from_timestamp, to_timestamp].into_iter().flatten() {
            if !is_whole_second(bound) {
                return Err(SequenceError::SubSecondBound { timestamp: bound });
            }
        }
        if let (Some(from), Some(to)) = (from_timestamp, to_timestamp) {
            if from >= to {
                return Err(SequenceError::InvalidPeriodBounds { from, to });
            }
        }
        Ok(Period { stream, unit, from_timestamp, to_timestamp, kind })
    }

    /// The unit samples leave this period in: the conversion output unit for
    /// pulse periods, the raw unit otherwise.
    pub fn output_unit(&self) -> &Unit {
        match &self.kind {
            PeriodKind::PulseAccumulation(conversion) => &conversion.output_unit,
            _ => &self.unit,
        }
    }

    /// Whether this period intersects the query range `[from, to)`.
    ///
    /// A period intersects when `period.from < to` and `period.to > from`,
    /// with unset bounds comparing as ∓∞. A period starting exactly at the
    /// query's `to` does not intersect.
    pub fn intersects(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> bool {
        let starts_before_end = match self.from_timestamp {
            Some(period_from) => period_from < to,
            None => true,
        };
        let ends_after_start = match self.to_timestamp {
            Some(period_to) => period_to > from,
            None => true,
        };
        starts_before_end && ends_after_start
    }

    /// Clamp a query start into this period (`max(period.from, from)`).
    pub fn clamp_from(&self, from: DateTime<Utc>) -> DateTime<Utc> {
        clamp_start(self.from_timestamp, from)
    }

    /// Clamp a query end into this period (`min(period.to, to)`).
    pub fn clamp_to(&self, to: DateTime<Utc>) -> DateTime<Utc> {
        clamp_end(self.to_timestamp, to)
    }

    /// Whether `[from, to]` lies entirely within this period's bounds.
    pub fn contains_range(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> bool {
        at_or_after_start(self.from_timestamp, from) && at_or_before_end(self.to_timestamp, to)
    }

    /// Whether this period starts strictly after `timestamp`.
    ///
    /// An unbounded start never starts after anything.
    pub fn starts_after(&self, timestamp: DateTime<Utc>) -> bool {
        match self.from_timestamp {
            Some(period_from) => period_from > timestamp,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Period construction validation (bound ordering, whole seconds).
    // - Intersection semantics against the half-open query range, including
    //   unbounded ends.
    // - Pulse conversion validation and factor exactness.
    // -------------------------------------------------------------------------

    fn ts(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 4, 5, h, 0, 0).unwrap()
    }

    fn bounded_period(from: u32, to: u32) -> Period {
        Period::new(
            StreamId(1),
            Unit::new("milliwatt*hour"),
            Some(ts(from)),
            Some(ts(to)),
            PeriodKind::NonpulseAccumulation,
        )
        .unwrap()
    }

    #[test]
    fn new_rejects_reversed_bounds() {
        let result = Period::new(
            StreamId(1),
            Unit::new("milliwatt*hour"),
            Some(ts(10)),
            Some(ts(8)),
            PeriodKind::NonpulseAccumulation,
        );

        assert_eq!(result.unwrap_err(), SequenceError::InvalidPeriodBounds {
            from: ts(10),
            to: ts(8)
        });
    }

    #[test]
    fn new_rejects_sub_second_bound() {
        let sub_second = ts(10) + chrono::Duration::milliseconds(1);
        let result = Period::new(
            StreamId(1),
            Unit::new("milliwatt*hour"),
            Some(sub_second),
            None,
            PeriodKind::NonpulseAccumulation,
        );

        assert_eq!(result.unwrap_err(), SequenceError::SubSecondBound { timestamp: sub_second });
    }

    #[test]
    fn new_accepts_unbounded_ends() {
        let period = Period::new(
            StreamId(1),
            Unit::new("milliwatt*hour"),
            None,
            None,
            PeriodKind::NonpulseAccumulation,
        )
        .unwrap();

        assert!(period.intersects(ts(0), ts(23)));
        assert_eq!(period.clamp_from(ts(3)), ts(3));
        assert_eq!(period.clamp_to(ts(20)), ts(20));
    }

    #[test]
    // Purpose
    // -------
    // Intersection follows the half-open query range: a period starting
    // exactly at the query end is excluded, a period ending exactly at the
    // query start is excluded.
    fn intersects_is_half_open() {
        let period = bounded_period(10, 12);

        assert!(period.intersects(ts(9), ts(11)));
        assert!(period.intersects(ts(11), ts(13)));
        assert!(!period.intersects(ts(8), ts(10)));
        assert!(!period.intersects(ts(12), ts(14)));
    }

    #[test]
    fn clamping_pulls_query_range_into_bounds() {
        let period = bounded_period(10, 12);

        assert_eq!(period.clamp_from(ts(9)), ts(10));
        assert_eq!(period.clamp_to(ts(13)), ts(12));
        assert!(period.contains_range(ts(10), ts(12)));
        assert!(!period.contains_range(ts(9), ts(12)));
    }

    #[test]
    fn starts_after_treats_unbounded_start_as_earliest() {
        assert!(bounded_period(10, 12).starts_after(ts(9)));
        assert!(!bounded_period(10, 12).starts_after(ts(10)));
        let unbounded = Period::new(
            StreamId(1),
            Unit::new("milliwatt*hour"),
            None,
            Some(ts(12)),
            PeriodKind::NonpulseAccumulation,
        )
        .unwrap();
        assert!(!unbounded.starts_after(ts(0)));
    }

    #[test]
    fn pulse_conversion_rejects_non_positive_pulse_quantity() {
        let result = PulseConversion::new(0, 1, Unit::new("kilowatt*hour"));

        assert_eq!(result.unwrap_err(), SequenceError::InvalidPulseConversion {
            pulse_quantity: 0
        });
    }

    #[test]
    fn pulse_conversion_factor_is_exact() {
        let conversion = PulseConversion::new(1000, 1, Unit::new("kilowatt*hour")).unwrap();

        assert_eq!(conversion.factor(), Fraction::new(1, 1000));
    }

    #[test]
    fn output_unit_is_conversion_unit_for_pulse_periods() {
        let conversion = PulseConversion::new(1, 1, Unit::new("kilowatt*hour")).unwrap();
        let period = Period::new(
            StreamId(1),
            Unit::new("impulse"),
            None,
            None,
            PeriodKind::PulseAccumulation(conversion),
        )
        .unwrap();

        assert_eq!(period.output_unit(), &Unit::new("kilowatt*hour"));
    }
}
