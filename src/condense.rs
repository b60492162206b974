//! Condensation resolutions.
//!
//! Purpose
//! -------
//! Name the sample resolutions the platform condenses reconstructed series
//! into, and decide which coarser resolution a cache may be built from.
//! Calendar-dependent resolutions (months and up) have no fixed span, so
//! the recursive ladder stops below them.

use serde::{Deserialize, Serialize};

/// Condensation resolution, ordered fine to coarse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Resolution {
    FiveMinutes,
    Hours,
    Days,
    Months,
    Quarters,
    Years,
}

impl Resolution {
    /// The next coarser resolution, `None` at the top of the ladder.
    pub fn next(self) -> Option<Resolution> {
        match self {
            Resolution::FiveMinutes => Some(Resolution::Hours),
            Resolution::Hours => Some(Resolution::Days),
            Resolution::Days => Some(Resolution::Months),
            Resolution::Months => Some(Resolution::Quarters),
            Resolution::Quarters => Some(Resolution::Years),
            Resolution::Years => None,
        }
    }
}

/// The resolution to recursively condense `resolution` from, `None` when
/// condensation at `resolution` must be computed from raw samples.
///
/// Days is the coarsest fixed-span resolution; everything above it depends
/// on the calendar and is condensed directly.
pub fn recursive_condensation_resolution(resolution: Resolution) -> Option<Resolution> {
    if resolution >= Resolution::Days {
        None
    } else {
        resolution.next()
    }
}
