//! Joining nonaccumulation periods.
//!
//! Purpose
//! -------
//! Chain the per-period cursors of an instantaneous-readings sequence into
//! one series. There is no offset or carry: values are meaningful as is, so
//! joining only has to deduplicate the shared boundary timestamp where two
//! adjacent periods meet.
//!
//! Key behaviors
//! -------------
//! - Every period is wrapped regardless of its declared kind; a
//!   misclassified period degrades to whatever its raw readings say rather
//!   than failing the query.
//! - A period's sample at its own (clamped) end is dropped unless that end
//!   is the query end; the next period re-emits the boundary.

use chrono::{DateTime, Utc};

use crate::{
    adapters::{
        errors::{AdapterError, AdapterResult},
        period::{NonaccumulationPeriodAdapter, PeriodSamples},
    },
    datasequence::{sequence::DataSequence, source::RawDataSource},
    samples::{errors::SampleError, sample::Sample, time::is_whole_second},
};

/// `NonaccumulationAdapter` — reconstruction over an instantaneous-readings
/// sequence.
pub struct NonaccumulationAdapter<'a, S: RawDataSource + ?Sized> {
    sequence: &'a DataSequence,
    source: &'a S,
}

impl<'a, S: RawDataSource + ?Sized> NonaccumulationAdapter<'a, S> {
    pub fn new(sequence: &'a DataSequence, source: &'a S) -> NonaccumulationAdapter<'a, S> {
        NonaccumulationAdapter { sequence, source }
    }

    /// The joined series over `[from, to]`; raw data is read here, the
    /// returned cursor iterates without I/O.
    pub fn samples(
        &self, from: DateTime<Utc>, to: DateTime<Utc>,
    ) -> AdapterResult<NonaccumulationSamples> {
        if from > to {
            return Err(AdapterError::InvalidRange { from, to });
        }
        for bound in [from, to] {
            if !is_whole_second(bound) {
                return Err(AdapterError::Sample(SampleError::SubSecondTimestamp {
                    timestamp: bound,
                }));
            }
        }

        let mut cursors = Vec::new();
        for period in self.sequence.periods_in_range(from, to) {
            let end = period.clamp_to(to);
            let adapter = NonaccumulationPeriodAdapter::new(period, self.source);
            cursors.push((end, adapter.samples(period.clamp_from(from), end)?));
        }
        Ok(NonaccumulationSamples { cursors: cursors.into_iter(), current: None, to })
    }
}

/// The joined sample cursor.
#[derive(Debug)]
pub struct NonaccumulationSamples {
    cursors: std::vec::IntoIter<(DateTime<Utc>, PeriodSamples)>,
    current: Option<(DateTime<Utc>, PeriodSamples)>,
    to: DateTime<Utc>,
}

impl Iterator for NonaccumulationSamples {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        loop {
            let (end, cursor) = match self.current.as_mut() {
                Some(current) => current,
                None => {
                    self.current = Some(self.cursors.next()?);
                    continue;
                }
            };
            match cursor.next() {
                Some(sample) => {
                    if sample.from_timestamp == *end && *end != self.to {
                        // The next period re-emits this boundary.
                        continue;
                    }
                    return Some(sample);
                }
                None => self.current = None,
            }
        }
    }
}
