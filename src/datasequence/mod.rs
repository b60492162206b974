//! datasequence — the metering data model and the raw-data-source boundary.
//!
//! Purpose
//! -------
//! Describe metering configurations the reconstruction engine can query:
//! raw data streams (external, behind [`RawDataSource`]), periods binding
//! timeline intervals to streams and conversion rules, and data sequences
//! tying ordered periods to a shared unit.
//!
//! Key behaviors
//! -------------
//! - Construction-time validation of bounds, units, and pulse conversion
//!   parameters; configuration errors fail loudly before any query runs.
//! - Explicit optional period bounds (`None` = earliest/latest possible)
//!   with documented comparison semantics; no sentinel timestamps.
//! - An in-memory source implementation for tests and embedders.
//!
//! Downstream usage
//! ----------------
//! - Build [`Period`]s and a [`DataSequence`], implement or instantiate a
//!   [`RawDataSource`], then query through `adapters::SequenceAdapter`.

pub mod errors;
pub mod memory;
pub mod period;
pub mod sequence;
pub mod source;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{SequenceError, SequenceResult, SourceError, SourceResult};
pub use self::memory::InMemorySource;
pub use self::period::{Period, PeriodKind, PulseConversion};
pub use self::sequence::{DataSequence, SequenceKind};
pub use self::source::{RawDataSource, StreamId};
