//! Exact rational quantities and measurement units.
//!
//! - [`Fraction`] is the scalar type for every quantity and offset in the
//!   crate; arithmetic on it is exact, so reconstruction never accumulates
//!   rounding drift.
//! - [`Unit`] is a lightweight unit symbol; equality is symbol equality.
//!
//! Notes
//! -----
//! - `Fraction` is metadata-free; unit bookkeeping lives on periods and
//!   sequences, not on individual scalars.

use serde::{Deserialize, Serialize};

/// Exact rational scalar used for sample quantities, offsets, and conversion
/// factors.
///
/// `i128` numerator/denominator leave ample headroom: raw meter readings are
/// `i64` and interpolation multiplies by second-granularity time deltas.
pub type Fraction = num_rational::Ratio<i128>;

/// Build a [`Fraction`] from an integral raw reading.
pub fn fraction(value: i64) -> Fraction {
    Fraction::from_integer(value as i128)
}

/// `Unit` — measurement unit symbol.
///
/// Purpose
/// -------
/// Tag periods, conversions, and sequences with the unit their quantities
/// are expressed in (e.g. `"milliwatt*hour"`, `"impulse"`). This type does
/// no dimensional analysis; it exists so unit mismatches between a sequence
/// and its periods are detectable at construction time rather than showing
/// up as silently wrong numbers.
///
/// Invariants
/// ----------
/// - Equality is exact symbol equality; `"kWh"` and `"kilowatt*hour"` are
///   different units to this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Unit(String);

impl Unit {
    /// Construct a unit from its symbol.
    pub fn new(symbol: impl Into<String>) -> Unit {
        Unit(symbol.into())
    }

    /// The unit symbol.
    pub fn symbol(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Unit {
    fn from(symbol: &str) -> Unit {
        Unit::new(symbol)
    }
}
