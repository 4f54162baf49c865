//! Access Traces
//!
//! A trace is the ordered list of accesses a tracker folds over. Replaying
//! one pairs every access with the clock it produced.

use super::clock::VectorClock;
use super::tracker::{AccessKind, AccessTracker, ProcessorId, TrackerError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// One entry of an access trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Access<L = String> {
    /// Issuing processor
    pub processor: ProcessorId,
    /// Touched location; `None` for a synchronization event
    pub location: Option<L>,
    /// Read or write
    pub kind: AccessKind,
}

impl<L> Access<L> {
    /// Read of `location` by `processor`
    pub fn read(processor: usize, location: L) -> Self {
        Self {
            processor: ProcessorId(processor),
            location: Some(location),
            kind: AccessKind::Read,
        }
    }

    /// Write of `location` by `processor`
    pub fn write(processor: usize, location: L) -> Self {
        Self {
            processor: ProcessorId(processor),
            location: Some(location),
            kind: AccessKind::Write,
        }
    }

    /// Location-less event by `processor`
    pub fn sync(processor: usize) -> Self {
        Self {
            processor: ProcessorId(processor),
            location: None,
            kind: AccessKind::Read,
        }
    }
}

/// An access together with the clock it produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceRecord<L = String> {
    /// The recorded access
    pub access: Access<L>,
    /// Clock returned by the tracker for this access
    pub clock: VectorClock,
}

/// `<processor> <location|None> <is_write>: <clock>`
impl<L: fmt::Display> fmt::Display for TraceRecord<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.access.processor.as_usize())?;
        match &self.access.location {
            Some(loc) => write!(f, "{loc}")?,
            None => write!(f, "None")?,
        }
        write!(f, " {}: {}", self.access.kind.is_write(), self.clock)
    }
}

impl<L: Eq + Hash + Clone> AccessTracker<L> {
    /// Record every access of `trace` in order
    ///
    /// # Errors
    /// Stops at the first access that fails; accesses before it stay recorded.
    pub fn replay<I>(&mut self, trace: I) -> Result<Vec<TraceRecord<L>>, TrackerError>
    where
        I: IntoIterator<Item = Access<L>>,
    {
        trace
            .into_iter()
            .map(|access| {
                let clock = self.record_access(access.processor, access.location.clone(), access.kind)?;
                Ok(TraceRecord { access, clock })
            })
            .collect()
    }
}

/// The two-processor reference trace
///
/// P0 reads and writes `A`, writes `B`, then P1 reads both and writes `A`,
/// finishing with a location-less event.
pub fn reference_trace() -> Vec<Access> {
    vec![
        Access::read(0, "A".to_string()),
        Access::write(0, "A".to_string()),
        Access::write(0, "B".to_string()),
        Access::read(0, "A".to_string()),
        Access::read(1, "B".to_string()),
        Access::read(1, "A".to_string()),
        Access::write(1, "A".to_string()),
        Access::sync(1),
    ]
}
