//! Immutable sample values.
//!
//! Purpose
//! -------
//! Define [`Sample`], the unit of everything the reconstruction engine
//! emits: a quantity attached to a single timestamp (point sample) or a time
//! range (ranged sample, used for developments), plus the cachability and
//! extrapolation flags downstream caches rely on.
//!
//! Key behaviors
//! -------------
//! - Samples are immutable values; [`Sample::translated`],
//!   [`Sample::scaled`], and [`Sample::held_at`] return new samples.
//! - Extrapolated samples are always non-cachable: values synthesized beyond
//!   real data could change once later readings arrive. Constructors and
//!   transforms maintain this invariant.
//!
//! Conventions
//! -----------
//! - Point samples have `from_timestamp == to_timestamp`.
//! - Quantities are exact rationals; unit bookkeeping lives on the owning
//!   sequence, not on the sample.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::samples::quantity::Fraction;

/// `Sample` — one reconstructed quantity at a point or over a range.
///
/// Fields
/// ------
/// - `from_timestamp`, `to_timestamp`: covered range; equal for point
///   samples.
/// - `quantity`: exact rational quantity in the owning sequence's unit.
/// - `cachable`: whether downstream caches may persist this sample.
/// - `extrapolated`: whether the value was synthesized beyond real data.
///
/// Invariants
/// ----------
/// - `from_timestamp <= to_timestamp`.
/// - `extrapolated` implies `!cachable`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub from_timestamp: DateTime<Utc>,
    pub to_timestamp: DateTime<Utc>,
    pub quantity: Fraction,
    pub cachable: bool,
    pub extrapolated: bool,
}

impl Sample {
    /// Construct a cachable, non-extrapolated point sample.
    pub fn point(timestamp: DateTime<Utc>, quantity: Fraction) -> Sample {
        Sample {
            from_timestamp: timestamp,
            to_timestamp: timestamp,
            quantity,
            cachable: true,
            extrapolated: false,
        }
    }

    /// Construct an extrapolated (and therefore non-cachable) point sample.
    pub fn extrapolated_point(timestamp: DateTime<Utc>, quantity: Fraction) -> Sample {
        Sample {
            from_timestamp: timestamp,
            to_timestamp: timestamp,
            quantity,
            cachable: false,
            extrapolated: true,
        }
    }

    /// Construct a ranged sample.
    ///
    /// Used for developments (consumption over `[from, to]`). `extrapolated`
    /// forces `cachable` off.
    pub fn ranged(
        from_timestamp: DateTime<Utc>, to_timestamp: DateTime<Utc>, quantity: Fraction,
        cachable: bool, extrapolated: bool,
    ) -> Sample {
        debug_assert!(from_timestamp <= to_timestamp);
        Sample {
            from_timestamp,
            to_timestamp,
            quantity,
            cachable: cachable && !extrapolated,
            extrapolated,
        }
    }

    /// Whether this is a point sample (`from_timestamp == to_timestamp`).
    pub fn is_point(&self) -> bool {
        self.from_timestamp == self.to_timestamp
    }

    /// A copy with `delta` added to the quantity; timestamps and flags are
    /// preserved.
    ///
    /// Offset subtraction and continuity-carry addition are both expressed
    /// through this transform.
    pub fn translated(&self, delta: &Fraction) -> Sample {
        Sample { quantity: &self.quantity + delta, ..self.clone() }
    }

    /// A copy with the quantity multiplied by `factor`; timestamps and flags
    /// are preserved.
    ///
    /// Used for pulse-to-output unit conversion.
    pub fn scaled(&self, factor: &Fraction) -> Sample {
        Sample { quantity: &self.quantity * factor, ..self.clone() }
    }

    /// A synthetic point sample holding this sample's quantity constant at
    /// `timestamp`.
    ///
    /// The result is marked extrapolated and non-cachable regardless of this
    /// sample's flags; it stands in for data that does not (yet) exist.
    pub fn held_at(&self, timestamp: DateTime<Utc>) -> Sample {
        Sample::extrapolated_point(timestamp, self.quantity.clone())
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
    // - Constructor flag defaults (point vs extrapolated point vs ranged).
    // - The extrapolated-implies-non-cachable invariant.
    // - Quantity transforms preserving timestamps and flags.
    // -------------------------------------------------------------------------

    fn ts(s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 4, 5, 10, 0, s).unwrap()
    }

    #[test]
    fn point_sample_is_cachable_and_not_extrapolated() {
        let sample = Sample::point(ts(0), Fraction::new(5, 2));
        assert!(sample.is_point());
        assert!(sample.cachable);
        assert!(!sample.extrapolated);
    }

    #[test]
    fn extrapolated_point_is_never_cachable() {
        let sample = Sample::extrapolated_point(ts(0), Fraction::new(5, 2));
        assert!(sample.extrapolated);
        assert!(!sample.cachable);
    }

    #[test]
    fn ranged_sample_forces_cachable_off_when_extrapolated() {
        let sample = Sample::ranged(ts(0), ts(30), Fraction::new(1, 1), true, true);
        assert!(!sample.cachable);
        assert!(!sample.is_point());
    }

    #[test]
    fn translated_adds_delta_and_preserves_everything_else() {
        let sample = Sample::point(ts(0), Fraction::new(3, 1));
        let moved = sample.translated(&Fraction::new(-1, 2));
        assert_eq!(moved.quantity, Fraction::new(5, 2));
        assert_eq!(moved.from_timestamp, sample.from_timestamp);
        assert_eq!(moved.cachable, sample.cachable);
        assert_eq!(moved.extrapolated, sample.extrapolated);
    }

    #[test]
    fn scaled_multiplies_quantity() {
        let sample = Sample::point(ts(0), Fraction::new(100, 1));
        let converted = sample.scaled(&Fraction::new(1, 4));
        assert_eq!(converted.quantity, Fraction::new(25, 1));
    }

    #[test]
    fn held_at_produces_extrapolated_copy_at_new_timestamp() {
        let sample = Sample::point(ts(0), Fraction::new(7, 1));
        let held = sample.held_at(ts(30));
        assert_eq!(held.from_timestamp, ts(30));
        assert_eq!(held.quantity, sample.quantity);
        assert!(held.extrapolated);
        assert!(!held.cachable);
    }
}
