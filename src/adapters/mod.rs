//! adapters — the reconstruction engine.
//!
//! Purpose
//! -------
//! Turn the sparse raw readings behind a [`DataSequence`] into dense,
//! continuous sample series and range developments. The layering mirrors
//! the data model: per-period generators fill one period's window,
//! family-specific adapters stitch or join periods, and
//! [`SequenceAdapter`] dispatches on the sequence kind.
//!
//! Downstream usage
//! ----------------
//! - Construct a [`SequenceAdapter`] from a validated sequence and a raw
//!   data source, then call `samples` or `develop`. The per-period types
//!   are exported for callers that operate on single periods.
//!
//! [`DataSequence`]: crate::datasequence::DataSequence

pub mod accumulation;
pub mod errors;
pub mod nonaccumulation;
pub mod period;
pub mod sequence;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::accumulation::{AccumulationAdapter, AccumulationSamples};
pub use self::errors::{AdapterError, AdapterResult};
pub use self::nonaccumulation::{NonaccumulationAdapter, NonaccumulationSamples};
pub use self::period::{
    classify, AccumulationPeriodAdapter, ClassifiedPeriod, NonaccumulationPeriodAdapter,
    PeriodSamples,
};
pub use self::sequence::{SequenceAdapter, SequenceSamples};
