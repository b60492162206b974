//! meterseries — time-series reconstruction for sparse metering data.
//!
//! Purpose
//! -------
//! Reconstruct dense, continuous sample sequences from sparse,
//! irregularly-sampled raw meter readings. Raw readings are partitioned into
//! a time-ordered sequence of non-overlapping periods (one per physical data
//! source configuration); this crate fills range boundaries by exact rational
//! interpolation, bridges gaps inside raw data, converts pulse counts to
//! physical units, and stitches consecutive periods into one continuous
//! accumulation view so that an instrument swap never appears as a drop or
//! jump in reported consumption.
//!
//! Key behaviors
//! -------------
//! - Exact rational linear interpolation and constant-value extrapolation
//!   over whole-second timestamps ([`samples::interpolate`]); results are
//!   bit-identical across repeated evaluation.
//! - Per-period sample generation with boundary filling and pulse-to-output
//!   unit conversion ([`adapters::period`]).
//! - Cumulative-offset stitching of consecutive accumulation periods with
//!   carried-forward continuity offsets ([`adapters::accumulation`]).
//! - Independent per-period replay with join deduplication for
//!   non-accumulation sequences ([`adapters::nonaccumulation`]).
//! - A top-level sequence adapter with a fast aggregate path for
//!   whole-clock-hour-aligned development queries ([`adapters::sequence`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - Raw data points carry strictly ordered, unique, whole-second timestamps
//!   per stream; this is supplied by the [`datasequence::RawDataSource`]
//!   collaborator and assumed, not re-validated, here.
//! - Periods of one sequence are time-ordered and non-overlapping; sequence
//!   construction sorts by start bound but does not reject overlaps.
//! - Sample quantities are exact rationals ([`samples::Fraction`]); no
//!   floating point participates in reconstruction.
//! - Extrapolated samples are never cachable: later-arriving data could
//!   change them.
//!
//! Conventions
//! -----------
//! - All timestamps are `chrono::DateTime<Utc>` at whole-second granularity.
//! - Unbounded period ends are explicit `Option` bounds (`None` = earliest
//!   resp. latest possible), never sentinel timestamps.
//! - Every sample cursor is lazy, finite, forward-only, and non-restartable;
//!   all raw-data-source calls happen during cursor construction, iteration
//!   itself performs no I/O.
//! - Errors are reported through per-domain enums and `Result` aliases;
//!   external source failures propagate unchanged.
//!
//! Downstream usage
//! ----------------
//! - Implement [`datasequence::RawDataSource`] over the backing store (or use
//!   [`datasequence::InMemorySource`]), describe the metering configuration
//!   as a [`datasequence::DataSequence`] of [`datasequence::Period`]s, and
//!   query through [`adapters::SequenceAdapter`].
//! - Consumption/production reporting should prefer
//!   [`adapters::SequenceAdapter::develop`], which takes the aggregate fast
//!   path for hour-aligned ranges (daily/monthly billing windows).
//!
//! Testing notes
//! -------------
//! - Unit tests live in `#[cfg(test)]` modules next to the code they cover;
//!   the end-to-end reconstruction pipeline is exercised by the integration
//!   test in `tests/`.

pub mod adapters;
pub mod condense;
pub mod datasequence;
pub mod samples;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use meterseries::prelude::*;
//
// to import the main reconstruction surface in a single line.

pub mod prelude {
    pub use crate::adapters::{
        AccumulationAdapter, AdapterError, AdapterResult, NonaccumulationAdapter, SequenceAdapter,
    };
    pub use crate::condense::Resolution;
    pub use crate::datasequence::{
        DataSequence, InMemorySource, Period, PeriodKind, PulseConversion, RawDataSource,
        SequenceKind, StreamId,
    };
    pub use crate::samples::{Fraction, RawDataPoint, Sample, Unit};
}
