//! Sequential Access Tracker
//!
//! Owns plain collections and takes `&mut self` per access. This is the
//! deployment for replaying a captured or interleaved trace: calls are
//! strictly ordered, so no locking is involved.

use super::step::advance;
use super::types::{AccessKind, ProcessorId, TrackerConfig, TrackerError};
use crate::domain::clock::VectorClock;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use tracing::{debug, trace};

/// Happens-before tracker for a fixed set of processors
///
/// # Type Parameters
/// - `L`: memory-location identifier (an address, a variable name, ...)
///
/// # Example
///
/// ```rust
/// use smartstop::{AccessKind, AccessTracker, ProcessorId};
///
/// let mut tracker: AccessTracker<&str> = AccessTracker::new(2).unwrap();
///
/// let w = tracker.record_access(ProcessorId(0), Some("x"), AccessKind::Write).unwrap();
/// assert_eq!(w.to_string(), "[0, -1]");
///
/// // P1 reads x and absorbs P0's write
/// let r = tracker.record_access(ProcessorId(1), Some("x"), AccessKind::Read).unwrap();
/// assert_eq!(r.to_string(), "[0, 0]");
/// assert!(w.happens_before(&r).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct AccessTracker<L = String> {
    /// Current clock of each processor, indexed by processor id
    processor_clocks: Vec<VectorClock>,

    /// Clock of the last write to each location
    location_clocks: HashMap<L, VectorClock>,
}

impl<L: Eq + Hash + Clone> AccessTracker<L> {
    /// Create a tracker for `num_processors` processors
    ///
    /// # Errors
    /// - `NoProcessors` if `num_processors` is zero
    pub fn new(num_processors: usize) -> Result<Self, TrackerError> {
        Self::with_config(&TrackerConfig::new(num_processors))
    }

    /// Create a tracker from a configuration
    ///
    /// # Errors
    /// - `NoProcessors` if the configuration names zero processors
    pub fn with_config(config: &TrackerConfig) -> Result<Self, TrackerError> {
        config.validate()?;

        let n = config.num_processors;
        debug!(num_processors = n, "access tracker initialized");

        Ok(Self {
            processor_clocks: vec![VectorClock::initial(n); n],
            location_clocks: HashMap::new(),
        })
    }

    pub(crate) fn from_parts(
        processor_clocks: Vec<VectorClock>,
        location_clocks: HashMap<L, VectorClock>,
    ) -> Self {
        Self {
            processor_clocks,
            location_clocks,
        }
    }

    /// Record one memory access and return the resulting clock
    ///
    /// `location == None` is a synchronization or no-op event: the processor
    /// still advances but no location state is read or written.
    ///
    /// # Algorithm
    /// 1. Increment the processor's own coordinate
    /// 2. Write: the new clock becomes the location's last-write clock
    ///    Read: merge in the location's last-write clock
    /// 3. Store the result as the processor's clock
    ///
    /// # Errors
    /// - `InvalidProcessor` if `processor` is outside the processor set
    /// - `Clock` on an internal length inconsistency
    ///
    /// Nothing is mutated when an error is returned.
    pub fn record_access(
        &mut self,
        processor: ProcessorId,
        location: Option<L>,
        kind: AccessKind,
    ) -> Result<VectorClock, TrackerError> {
        let current = self.processor_clock(processor)?;
        let observed = match (&location, kind) {
            (Some(loc), AccessKind::Read) => self.location_clocks.get(loc),
            _ => None,
        };
        let vc = advance(current, processor, observed)?;

        trace!(
            processor = processor.as_usize(),
            kind = %kind,
            has_location = location.is_some(),
            clock = %vc,
            "access recorded"
        );

        if let (Some(loc), AccessKind::Write) = (location, kind) {
            self.location_clocks.insert(loc, vc.clone());
        }
        self.processor_clocks[processor.as_usize()] = vc.clone();

        Ok(vc)
    }

    /// Current clock of `processor`
    ///
    /// # Errors
    /// - `InvalidProcessor` if `processor` is outside the processor set
    pub fn processor_clock(&self, processor: ProcessorId) -> Result<&VectorClock, TrackerError> {
        self.processor_clocks
            .get(processor.as_usize())
            .ok_or(TrackerError::InvalidProcessor {
                processor,
                num_processors: self.num_processors(),
            })
    }

    /// Clock of the last write to `location`
    ///
    /// An unseen location yields the all-sentinel clock. The lookup never
    /// creates an entry.
    pub fn location_clock<Q>(&self, location: &Q) -> VectorClock
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.last_write(location)
            .cloned()
            .unwrap_or_else(|| VectorClock::initial(self.num_processors()))
    }

    /// Clock of the last write to `location`, `None` if never written
    pub fn last_write<Q>(&self, location: &Q) -> Option<&VectorClock>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.location_clocks.get(location)
    }

    /// Size of the processor set
    #[inline]
    pub fn num_processors(&self) -> usize {
        self.processor_clocks.len()
    }

    /// Number of locations that have been written
    #[inline]
    pub fn location_count(&self) -> usize {
        self.location_clocks.len()
    }

    /// Locations that have been written, in no particular order
    pub fn locations(&self) -> impl Iterator<Item = &L> {
        self.location_clocks.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker(n: usize) -> AccessTracker<&'static str> {
        AccessTracker::new(n).unwrap()
    }

    #[test]
    fn test_new_rejects_zero_processors() {
        assert_eq!(
            AccessTracker::<String>::new(0).unwrap_err(),
            TrackerError::NoProcessors
        );
    }

    #[test]
    fn test_initial_clocks_are_unseen() {
        let t = tracker(3);
        for p in 0..3 {
            assert_eq!(t.processor_clock(ProcessorId(p)).unwrap(), &VectorClock::initial(3));
        }
        assert_eq!(t.location_count(), 0);
    }

    #[test]
    fn test_write_sets_location_clock() {
        let mut t = tracker(2);
        let vc = t.record_access(ProcessorId(0), Some("a"), AccessKind::Write).unwrap();
        assert_eq!(t.last_write("a"), Some(&vc));
        assert_eq!(t.processor_clock(ProcessorId(0)).unwrap(), &vc);
    }

    #[test]
    fn test_read_of_unwritten_location() {
        let mut t = tracker(2);
        let vc = t.record_access(ProcessorId(1), Some("a"), AccessKind::Read).unwrap();
        assert_eq!(vc.as_slice(), &[-1, 0]);
        assert_eq!(t.location_count(), 0);
        assert_eq!(t.location_clock("a"), VectorClock::initial(2));
    }

    #[test]
    fn test_read_does_not_change_location_clock() {
        let mut t = tracker(2);
        let w = t.record_access(ProcessorId(0), Some("a"), AccessKind::Write).unwrap();
        t.record_access(ProcessorId(1), Some("a"), AccessKind::Read).unwrap();
        t.record_access(ProcessorId(1), Some("a"), AccessKind::Read).unwrap();
        assert_eq!(t.last_write("a"), Some(&w));
    }

    #[test]
    fn test_write_overwrites_without_merging() {
        let mut t = tracker(2);
        t.record_access(ProcessorId(0), Some("a"), AccessKind::Write).unwrap();
        let second = t.record_access(ProcessorId(1), Some("a"), AccessKind::Write).unwrap();
        // P1 never read "a", so P0's history is not part of the new reference
        assert_eq!(second.as_slice(), &[-1, 0]);
        assert_eq!(t.last_write("a"), Some(&second));
    }

    #[test]
    fn test_sync_event_touches_no_location() {
        let mut t = tracker(2);
        let vc = t.record_access(ProcessorId(0), None, AccessKind::Write).unwrap();
        assert_eq!(vc.as_slice(), &[0, -1]);
        assert_eq!(t.location_count(), 0);
    }

    #[test]
    fn test_invalid_processor_leaves_state_untouched() {
        let mut t = tracker(2);
        t.record_access(ProcessorId(0), Some("a"), AccessKind::Write).unwrap();
        let before = t.clone();

        let err = t.record_access(ProcessorId(2), Some("b"), AccessKind::Write).unwrap_err();
        assert_eq!(
            err,
            TrackerError::InvalidProcessor {
                processor: ProcessorId(2),
                num_processors: 2,
            }
        );
        assert_eq!(t.location_count(), before.location_count());
        assert_eq!(t.last_write("b"), None);
        assert_eq!(t.processor_clock(ProcessorId(0)), before.processor_clock(ProcessorId(0)));
    }

    #[test]
    fn test_returned_clocks_are_snapshots() {
        let mut t = tracker(1);
        let first = t.record_access(ProcessorId(0), Some("a"), AccessKind::Write).unwrap();
        t.record_access(ProcessorId(0), Some("a"), AccessKind::Write).unwrap();
        assert_eq!(first.as_slice(), &[0]);
        assert_eq!(t.last_write("a").unwrap().as_slice(), &[1]);
    }

    #[test]
    fn test_string_locations_lookup_by_str() {
        let mut t: AccessTracker = AccessTracker::new(2).unwrap();
        t.record_access(ProcessorId(0), Some("x".to_string()), AccessKind::Write).unwrap();
        assert!(t.last_write("x").is_some());
        assert_eq!(t.locations().collect::<Vec<_>>(), vec!["x"]);
    }
}
