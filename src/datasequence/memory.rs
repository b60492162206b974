//! In-memory raw data source.
//!
//! Purpose
//! -------
//! A complete [`RawDataSource`] over per-stream point vectors. It backs the
//! crate's unit and integration tests and is useful to embedders that
//! already hold readings in memory; real deployments put a database behind
//! the trait instead.
//!
//! Key behaviors
//! -------------
//! - Lookups are binary searches over timestamp-sorted vectors.
//! - `development_sum` answers exactly: the boundary value at `to` minus the
//!   boundary value at `from`, each reconstructed the same way the sample
//!   path does (exact point, else interpolation between neighbors, else the
//!   nearest point's value).
//!
//! Invariants & assumptions
//! ------------------------
//! - Inserted points are sorted on insertion; unique whole-second timestamps
//!   are assumed (the crate-wide raw data contract), not re-validated.
//! - Unknown streams are reported as [`SourceError::StreamMissing`]; a
//!   stream with no readings is inserted empty instead.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::{
    datasequence::{
        errors::{SourceError, SourceResult},
        source::{RawDataSource, StreamId},
    },
    samples::{interpolate::interpolate, point::RawDataPoint, quantity::Fraction},
};

/// `InMemorySource` — sorted per-stream point vectors behind
/// [`RawDataSource`].
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    streams: BTreeMap<StreamId, Vec<RawDataPoint>>,
}

impl InMemorySource {
    pub fn new() -> InMemorySource {
        InMemorySource::default()
    }

    /// Insert (or replace) a stream's readings; points are sorted by
    /// timestamp.
    pub fn insert_stream(&mut self, stream: StreamId, mut points: Vec<RawDataPoint>) {
        points.sort_by_key(|point| point.timestamp);
        self.streams.insert(stream, points);
    }

    /// Builder-style variant of [`InMemorySource::insert_stream`].
    pub fn with_stream(mut self, stream: StreamId, points: Vec<RawDataPoint>) -> InMemorySource {
        self.insert_stream(stream, points);
        self
    }

    fn points(&self, stream: StreamId) -> SourceResult<&[RawDataPoint]> {
        self.streams
            .get(&stream)
            .map(Vec::as_slice)
            .ok_or(SourceError::StreamMissing { stream })
    }

    /// Reconstruct the stream's value at `timestamp`: exact point if one
    /// sits there, interpolation between the neighbors if surrounded, the
    /// nearest point's value at the edges, `None` on an empty stream.
    fn boundary_value(
        points: &[RawDataPoint], timestamp: DateTime<Utc>,
    ) -> SourceResult<Option<Fraction>> {
        if points.is_empty() {
            return Ok(None);
        }
        let idx = points.partition_point(|point| point.timestamp < timestamp);
        if idx < points.len() && points[idx].timestamp == timestamp {
            return Ok(Some(points[idx].quantity()));
        }
        if idx == 0 {
            return Ok(Some(points[0].quantity()));
        }
        if idx == points.len() {
            return Ok(Some(points[idx - 1].quantity()));
        }
        interpolate(timestamp, &points[idx - 1], &points[idx])
            .map(Some)
            .map_err(|err| SourceError::Backend { detail: err.to_string() })
    }
}

impl RawDataSource for InMemorySource {
    fn point_before(
        &self, stream: StreamId, timestamp: DateTime<Utc>,
    ) -> SourceResult<Option<RawDataPoint>> {
        let points = self.points(stream)?;
        let idx = points.partition_point(|point| point.timestamp < timestamp);
        Ok(idx.checked_sub(1).map(|i| points[i]))
    }

    fn point_after(
        &self, stream: StreamId, timestamp: DateTime<Utc>,
    ) -> SourceResult<Option<RawDataPoint>> {
        let points = self.points(stream)?;
        let idx = points.partition_point(|point| point.timestamp <= timestamp);
        Ok(points.get(idx).copied())
    }

    fn range_scan(
        &self, stream: StreamId, from: DateTime<Utc>, to: DateTime<Utc>,
    ) -> SourceResult<Vec<RawDataPoint>> {
        let points = self.points(stream)?;
        let start = points.partition_point(|point| point.timestamp < from);
        let end = points.partition_point(|point| point.timestamp <= to);
        Ok(points[start..end].to_vec())
    }

    fn first_in_range(
        &self, stream: StreamId, from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>,
    ) -> SourceResult<Option<RawDataPoint>> {
        let points = self.points(stream)?;
        let start = match from {
            Some(from) => points.partition_point(|point| point.timestamp < from),
            None => 0,
        };
        let first = points.get(start).copied();
        Ok(first.filter(|point| match to {
            Some(to) => point.timestamp <= to,
            None => true,
        }))
    }

    fn development_sum(
        &self, stream: StreamId, from: DateTime<Utc>, to: DateTime<Utc>,
    ) -> SourceResult<Option<Fraction>> {
        let points = self.points(stream)?;
        let start = match Self::boundary_value(points, from)? {
            Some(value) => value,
            None => return Ok(None),
        };
        let end = match Self::boundary_value(points, to)? {
            Some(value) => value,
            None => return Ok(None),
        };
        Ok(Some(end - start))
    }
}
