//! Shared Access Tracker - Online Use
//!
//! # Design
//!
//! For real threads that each report their own accesses while running:
//! - `Vec<Mutex<VectorClock>>` for per-processor slots
//! - `DashMap` for the location clocks
//!
//! # Locking
//! - A processor slot is locked for the whole access, so two calls for the
//!   same processor never interleave. Distinct processors never contend on
//!   their slots.
//! - The read-merge and the write-store each run under the `DashMap` guard
//!   of that location, so they are critical sections per location.
//! - Lock order is always slot then location, and a location guard is never
//!   held while acquiring a slot.

use super::sequential::AccessTracker;
use super::step::advance;
use super::types::{AccessKind, ProcessorId, TrackerConfig, TrackerError};
use crate::domain::clock::VectorClock;
use dashmap::DashMap;
use parking_lot::Mutex;
use std::borrow::Borrow;
use std::hash::Hash;
use tracing::{debug, trace};

/// Thread-safe happens-before tracker
///
/// # Memory Layout
/// ```text
/// SharedTracker
/// ├─ processor_clocks: Vec<Mutex<VectorClock>>
/// │   ├─ [0]: Mutex<VectorClock>  (P0's clock)
/// │   ├─ [1]: Mutex<VectorClock>  (P1's clock)
/// │   └─ ...
/// └─ location_clocks: DashMap<L, VectorClock>  (last write per location)
/// ```
///
/// # Example
///
/// ```rust
/// use smartstop::{AccessKind, ProcessorId, SharedTracker};
/// use std::sync::Arc;
/// use std::thread;
///
/// let tracker: Arc<SharedTracker<u64>> = Arc::new(SharedTracker::new(2).unwrap());
///
/// let handles: Vec<_> = (0..2)
///     .map(|p| {
///         let tracker = Arc::clone(&tracker);
///         thread::spawn(move || {
///             tracker
///                 .record_access(ProcessorId(p), Some(0x1000 + p as u64), AccessKind::Write)
///                 .unwrap()
///         })
///     })
///     .collect();
///
/// for handle in handles {
///     handle.join().unwrap();
/// }
/// assert_eq!(tracker.location_count(), 2);
/// ```
pub struct SharedTracker<L = String>
where
    L: Eq + Hash,
{
    /// Per-processor clocks, each behind its own lock
    processor_clocks: Vec<Mutex<VectorClock>>,

    /// Last-write clock per location
    location_clocks: DashMap<L, VectorClock>,
}

impl<L: Eq + Hash + Clone> SharedTracker<L> {
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
        debug!(num_processors = n, "shared access tracker initialized");

        let processor_clocks = (0..n)
            .map(|_| Mutex::new(VectorClock::initial(n)))
            .collect();

        Ok(Self {
            processor_clocks,
            location_clocks: DashMap::new(),
        })
    }

    /// Record one memory access and return the resulting clock
    ///
    /// Same transition as [`AccessTracker::record_access`].
    ///
    /// # Errors
    /// - `InvalidProcessor` if `processor` is outside the processor set
    /// - `Clock` on an internal length inconsistency
    pub fn record_access(
        &self,
        processor: ProcessorId,
        location: Option<L>,
        kind: AccessKind,
    ) -> Result<VectorClock, TrackerError> {
        let mut slot = self.slot(processor)?.lock();

        let vc = match (location, kind) {
            (Some(loc), AccessKind::Write) => {
                let vc = advance(&slot, processor, None)?;
                self.location_clocks.insert(loc, vc.clone());
                vc
            }
            (Some(loc), AccessKind::Read) => {
                let writer = self.location_clocks.get(&loc);
                advance(&slot, processor, writer.as_deref())?
            }
            (None, _) => advance(&slot, processor, None)?,
        };

        trace!(
            processor = processor.as_usize(),
            kind = %kind,
            clock = %vc,
            "shared access recorded"
        );

        *slot = vc.clone();
        Ok(vc)
    }

    /// Current clock of `processor`
    ///
    /// # Errors
    /// - `InvalidProcessor` if `processor` is outside the processor set
    pub fn processor_clock(&self, processor: ProcessorId) -> Result<VectorClock, TrackerError> {
        Ok(self.slot(processor)?.lock().clone())
    }

    /// Clock of the last write to `location`, all-sentinel if never written
    pub fn location_clock<Q>(&self, location: &Q) -> VectorClock
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.last_write(location)
            .unwrap_or_else(|| VectorClock::initial(self.num_processors()))
    }

    /// Clock of the last write to `location`, `None` if never written
    pub fn last_write<Q>(&self, location: &Q) -> Option<VectorClock>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.location_clocks.get(location).map(|r| r.value().clone())
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
    pub fn locations(&self) -> Vec<L> {
        self.location_clocks.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Copy the current state into a sequential tracker
    ///
    /// Slots are locked one at a time, so the copy is only a consistent cut
    /// when no other thread is recording.
    pub fn snapshot(&self) -> AccessTracker<L> {
        let processor_clocks = self
            .processor_clocks
            .iter()
            .map(|slot| slot.lock().clone())
            .collect();
        let location_clocks = self
            .location_clocks
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();

        AccessTracker::from_parts(processor_clocks, location_clocks)
    }

    fn slot(&self, processor: ProcessorId) -> Result<&Mutex<VectorClock>, TrackerError> {
        self.processor_clocks
            .get(processor.as_usize())
            .ok_or(TrackerError::InvalidProcessor {
                processor,
                num_processors: self.num_processors(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_shared_matches_sequential_on_a_trace() {
        let shared: SharedTracker<&str> = SharedTracker::new(2).unwrap();
        let mut sequential: AccessTracker<&str> = AccessTracker::new(2).unwrap();

        let trace = [
            (0, Some("a"), AccessKind::Write),
            (1, Some("a"), AccessKind::Read),
            (1, Some("b"), AccessKind::Write),
            (0, Some("b"), AccessKind::Read),
            (0, None, AccessKind::Read),
        ];

        for (p, loc, kind) in trace {
            let a = shared.record_access(ProcessorId(p), loc, kind).unwrap();
            let b = sequential.record_access(ProcessorId(p), loc, kind).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_shared_invalid_processor() {
        let shared: SharedTracker<u32> = SharedTracker::new(1).unwrap();
        assert!(matches!(
            shared.record_access(ProcessorId(1), Some(0), AccessKind::Write),
            Err(TrackerError::InvalidProcessor { .. })
        ));
        assert_eq!(shared.location_count(), 0);
    }

    #[test]
    fn test_shared_unseen_location() {
        let shared: SharedTracker = SharedTracker::new(3).unwrap();
        assert_eq!(shared.location_clock("nowhere"), VectorClock::initial(3));
        assert_eq!(shared.last_write("nowhere"), None);
        assert!(shared.locations().is_empty());
    }

    #[test]
    fn test_concurrent_processors_advance_independently() {
        let shared: Arc<SharedTracker<usize>> = Arc::new(SharedTracker::new(4).unwrap());

        let handles: Vec<_> = (0..4)
            .map(|p| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    for i in 0..100 {
                        shared
                            .record_access(ProcessorId(p), Some(p * 1000 + i), AccessKind::Write)
                            .unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        for p in 0..4 {
            let clock = shared.processor_clock(ProcessorId(p)).unwrap();
            // Only own writes, no reads: other coordinates stay unseen
            for q in 0..4 {
                let expected = if q == p { 99 } else { -1 };
                assert_eq!(clock.get(q), Some(expected));
            }
        }
        assert_eq!(shared.location_count(), 400);
    }

    #[test]
    fn test_snapshot() {
        let shared: SharedTracker<&str> = SharedTracker::new(2).unwrap();
        shared.record_access(ProcessorId(0), Some("a"), AccessKind::Write).unwrap();

        let snap = shared.snapshot();
        assert_eq!(snap.num_processors(), 2);
        assert_eq!(snap.last_write("a").map(VectorClock::as_slice), Some(&[0, -1][..]));
    }
}
