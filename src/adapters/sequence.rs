//! The sequence-level adapter: one query surface over both reconstruction
//! families.
//!
//! Purpose
//! -------
//! [`SequenceAdapter`] binds a [`DataSequence`] to a [`RawDataSource`] and
//! dispatches queries on the sequence kind, so callers hold a single type
//! whether the series is cumulative or instantaneous.
//!
//! Key behaviors
//! -------------
//! - `samples` returns a kind-tagged cursor; `develop` is only defined for
//!   accumulation sequences and fails typed otherwise.
//! - `display_name` prefers the bound stream's identity when it is
//!   unambiguous (exactly one period) and falls back to the sequence's own
//!   name.

use chrono::{DateTime, Utc};

use crate::{
    adapters::{
        accumulation::{AccumulationAdapter, AccumulationSamples},
        errors::{AdapterError, AdapterResult},
        nonaccumulation::{NonaccumulationAdapter, NonaccumulationSamples},
    },
    condense::{self, Resolution},
    datasequence::{
        sequence::{DataSequence, SequenceKind},
        source::RawDataSource,
    },
    samples::sample::Sample,
};

/// `SequenceAdapter` — the crate's main query entry point.
pub struct SequenceAdapter<'a, S: RawDataSource + ?Sized> {
    sequence: &'a DataSequence,
    source: &'a S,
}

/// Kind-tagged sample cursor returned by [`SequenceAdapter::samples`].
#[derive(Debug)]
pub enum SequenceSamples {
    Accumulation(AccumulationSamples),
    Nonaccumulation(NonaccumulationSamples),
}

impl Iterator for SequenceSamples {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        match self {
            SequenceSamples::Accumulation(cursor) => cursor.next(),
            SequenceSamples::Nonaccumulation(cursor) => cursor.next(),
        }
    }
}

impl<'a, S: RawDataSource + ?Sized> SequenceAdapter<'a, S> {
    pub fn new(sequence: &'a DataSequence, source: &'a S) -> SequenceAdapter<'a, S> {
        SequenceAdapter { sequence, source }
    }

    pub fn sequence(&self) -> &DataSequence {
        self.sequence
    }

    /// Reconstructed samples over `[from, to]`, dispatched on the sequence
    /// kind.
    pub fn samples(
        &self, from: DateTime<Utc>, to: DateTime<Utc>,
    ) -> AdapterResult<SequenceSamples> {
        match self.sequence.kind() {
            SequenceKind::Accumulation => {
                let cursor =
                    AccumulationAdapter::new(self.sequence, self.source).samples(from, to)?;
                Ok(SequenceSamples::Accumulation(cursor))
            }
            SequenceKind::Nonaccumulation => {
                let cursor =
                    NonaccumulationAdapter::new(self.sequence, self.source).samples(from, to)?;
                Ok(SequenceSamples::Nonaccumulation(cursor))
            }
        }
    }

    /// Consumption over `[from, to]` as one ranged sample.
    ///
    /// Errors
    /// ------
    /// - `AdapterError::DevelopmentUnsupported` for nonaccumulation
    ///   sequences; instantaneous readings have no meaningful difference
    ///   over a range.
    pub fn develop(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> AdapterResult<Sample> {
        match self.sequence.kind() {
            SequenceKind::Accumulation => {
                AccumulationAdapter::new(self.sequence, self.source).develop(from, to)
            }
            kind => Err(AdapterError::DevelopmentUnsupported { kind }),
        }
    }

    /// A caller-facing name: the bound stream when exactly one period makes
    /// it unambiguous, else the sequence's own name.
    pub fn display_name(&self) -> String {
        match self.sequence.periods() {
            [only] => only.stream.to_string(),
            _ => self.sequence.name().to_owned(),
        }
    }

    /// See [`condense::recursive_condensation_resolution`].
    pub fn recursive_condensation_resolution(
        &self, resolution: Resolution,
    ) -> Option<Resolution> {
        condense::recursive_condensation_resolution(resolution)
    }
}
