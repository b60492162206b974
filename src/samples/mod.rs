//! samples — value-level primitives for sample reconstruction.
//!
//! Purpose
//! -------
//! Collect the small, exact building blocks the reconstruction adapters are
//! made of: rational quantities and units, raw data points, immutable sample
//! values, whole-second timestamp helpers, and the interpolation /
//! extrapolation primitives.
//!
//! Key behaviors
//! -------------
//! - All quantities are exact rationals ([`Fraction`]); repeated evaluation
//!   of the same interpolation is bit-identical.
//! - [`Sample`] values are immutable; every transformation produces a new
//!   sample and preserves the cachability rules (extrapolated samples are
//!   never cachable).
//! - Contract violations (reversed point order, sub-second timestamps) are
//!   loud [`SampleError`]s, never silently recovered.
//!
//! Downstream usage
//! ----------------
//! - The adapter layer builds its cursors out of these primitives; external
//!   callers mostly consume [`Sample`] values and rarely need anything else
//!   from this module directly.

pub mod errors;
pub mod interpolate;
pub mod point;
pub mod quantity;
pub mod sample;
pub mod time;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{SampleError, SampleResult};
pub use self::interpolate::{extrapolated_sample, interpolate, interpolated_sample};
pub use self::point::RawDataPoint;
pub use self::quantity::{Fraction, Unit};
pub use self::sample::Sample;
pub use self::time::{is_clock_hour, is_whole_second};
