//! The external raw-data-source boundary.
//!
//! Purpose
//! -------
//! Define the collaborator interface the reconstruction engine pulls raw
//! readings through. Persistence, indexing, and ingest formats are out of
//! scope for this crate; anything that can answer the point lookups and
//! ordered range scans below can back the engine.
//!
//! Conventions
//! -----------
//! - Every method is keyed by [`StreamId`]: one stream is one physical
//!   data source's reading series in one unit.
//! - Calls are synchronous; failures are [`SourceError`]s and propagate
//!   unchanged through the adapter layer. The engine performs no retries
//!   and holds no timeouts.
//! - Returned points are strictly ordered by timestamp with unique,
//!   whole-second timestamps; the engine assumes this and does not
//!   re-validate it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    datasequence::errors::SourceResult,
    samples::{point::RawDataPoint, quantity::Fraction},
};

/// Identifier of one raw data stream (one physical input's reading series).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StreamId(pub u64);

impl std::fmt::Display for StreamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "stream {}", self.0)
    }
}

/// Point lookups and ordered range scans over raw readings.
///
/// Purpose
/// -------
/// The engine's only suspension points are calls into this trait. All calls
/// for one query happen while a sample cursor is being constructed;
/// iteration of the cursor performs no further I/O.
///
/// Notes
/// -----
/// - Implementations must tolerate concurrent reads if callers issue
///   concurrent queries; the engine itself shares no state between queries.
pub trait RawDataSource {
    /// The nearest point strictly before `timestamp`, if any.
    fn point_before(
        &self, stream: StreamId, timestamp: DateTime<Utc>,
    ) -> SourceResult<Option<RawDataPoint>>;

    /// The nearest point strictly after `timestamp`, if any.
    fn point_after(
        &self, stream: StreamId, timestamp: DateTime<Utc>,
    ) -> SourceResult<Option<RawDataPoint>>;

    /// All points with `from <= timestamp <= to`, ordered by timestamp.
    fn range_scan(
        &self, stream: StreamId, from: DateTime<Utc>, to: DateTime<Utc>,
    ) -> SourceResult<Vec<RawDataPoint>>;

    /// The first point within optionally unbounded inclusive bounds
    /// (`None` = unbounded on that side).
    ///
    /// Offset computation evaluates this against period bounds, which may be
    /// open-ended; everything else in the engine works with concrete
    /// timestamps.
    fn first_in_range(
        &self, stream: StreamId, from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>,
    ) -> SourceResult<Option<RawDataPoint>>;

    /// Pre-aggregated development (value delta) over `[from, to]`, if the
    /// source maintains one.
    ///
    /// `Ok(None)` means "not available"; the engine then falls back to
    /// per-sample reconstruction. The default implementation never answers.
    fn development_sum(
        &self, stream: StreamId, from: DateTime<Utc>, to: DateTime<Utc>,
    ) -> SourceResult<Option<Fraction>> {
        let _ = (stream, from, to);
        Ok(None)
    }
}
