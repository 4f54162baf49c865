//! Vector Clock Implementation
//!
//! Vector clocks are used to track causality (happens-before relation)
//! between memory accesses issued by a fixed set of processors.
//!
//! # Theory
//!
//! Given events e1 and e2:
//! - e1 happens-before e2 (e1 → e2) if VC(e1) < VC(e2)
//! - e1 and e2 are concurrent if neither happens-before the other
//!
//! # Implementation
//!
//! Value semantics: every operation returns a fresh clock and leaves the
//! receiver untouched. The length is fixed when the clock is built.

use super::types::{CausalOrder, ClockError, UNSEEN};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Vector clock for tracking causality
///
/// # Representation
///
/// One signed counter per processor:
/// - `clock[i]` = number of events of processor i known to this clock, minus one
/// - `clock[i] == UNSEEN` (-1) = processor i has not acted in this history
///
/// # Example
///
/// ```text
/// P0 after 3 events, having read a value P1 wrote at its first event:
///   [2, 0]
/// P1 before doing anything:
///   [-1, -1]
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VectorClock {
    /// Clock values for each processor
    clocks: Vec<i64>,
}

impl VectorClock {
    /// Create the all-sentinel clock for `num_processors` processors
    #[must_use]
    pub fn initial(num_processors: usize) -> Self {
        Self {
            clocks: vec![UNSEEN; num_processors],
        }
    }

    /// Build a clock from explicit coordinates
    #[must_use]
    pub fn from_values(values: Vec<i64>) -> Self {
        Self { clocks: values }
    }

    /// Number of processors this clock covers
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.clocks.len()
    }

    /// True for a zero-processor clock
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clocks.is_empty()
    }

    /// Coordinate for processor `index`, `None` if out of range
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<i64> {
        self.clocks.get(index).copied()
    }

    /// All coordinates in processor order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.clocks
    }

    /// Iterate over coordinates in processor order
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.clocks.iter().copied()
    }

    /// Advance the counter of processor `index`
    ///
    /// Returns a new clock equal to `self` except that coordinate `index` is
    /// one greater.
    ///
    /// # Errors
    /// - `IndexOutOfRange` if `index >= self.len()`
    /// - `Overflow` if the counter is already `i64::MAX`
    ///
    /// # Example
    ///
    /// ```text
    /// [-1, -1].increment(0) = [0, -1]
    /// [ 0, -1].increment(0) = [1, -1]
    /// ```
    pub fn increment(&self, index: usize) -> Result<Self, ClockError> {
        let current = self.get(index).ok_or(ClockError::IndexOutOfRange {
            index,
            len: self.len(),
        })?;
        let next = current
            .checked_add(1)
            .ok_or(ClockError::Overflow { index })?;

        let mut clocks = self.clocks.clone();
        clocks[index] = next;
        Ok(Self { clocks })
    }

    /// Merge with another vector clock (element-wise max)
    ///
    /// This is how causal knowledge propagates: a reader absorbs the history
    /// of the last writer.
    ///
    /// # Errors
    /// - `LengthMismatch` if the clocks cover a different number of processors
    ///
    /// # Example
    ///
    /// ```text
    /// self:  [3, 1, 2]
    /// other: [2, 5, 1]
    /// result:[3, 5, 2]  (max of each position)
    /// ```
    pub fn merge(&self, other: &Self) -> Result<Self, ClockError> {
        self.check_len(other)?;

        let clocks = self
            .clocks
            .iter()
            .zip(&other.clocks)
            .map(|(&a, &b)| a.max(b))
            .collect();
        Ok(Self { clocks })
    }

    /// Compare two clocks in the happens-before partial order
    ///
    /// # Errors
    /// - `LengthMismatch` if the clocks cover a different number of processors
    pub fn causal_order(&self, other: &Self) -> Result<CausalOrder, ClockError> {
        self.check_len(other)?;

        let mut self_le_other = true;
        let mut other_le_self = true;

        for (&a, &b) in self.clocks.iter().zip(&other.clocks) {
            match a.cmp(&b) {
                Ordering::Greater => self_le_other = false,
                Ordering::Less => other_le_self = false,
                Ordering::Equal => {}
            }
            if !self_le_other && !other_le_self {
                return Ok(CausalOrder::Concurrent);
            }
        }

        Ok(match (self_le_other, other_le_self) {
            (true, true) => CausalOrder::Equal,
            (true, false) => CausalOrder::Before,
            (false, true) => CausalOrder::After,
            (false, false) => CausalOrder::Concurrent,
        })
    }

    /// Check if this clock strictly happens-before another
    ///
    /// # Errors
    /// - `LengthMismatch` if the clocks cover a different number of processors
    pub fn happens_before(&self, other: &Self) -> Result<bool, ClockError> {
        Ok(self.causal_order(other)? == CausalOrder::Before)
    }

    /// Check if two clocks are concurrent (neither happens-before the other)
    ///
    /// # Errors
    /// - `LengthMismatch` if the clocks cover a different number of processors
    pub fn is_concurrent_with(&self, other: &Self) -> Result<bool, ClockError> {
        Ok(self.causal_order(other)? == CausalOrder::Concurrent)
    }

    fn check_len(&self, other: &Self) -> Result<(), ClockError> {
        if self.len() == other.len() {
            Ok(())
        } else {
            Err(ClockError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            })
        }
    }
}

impl From<Vec<i64>> for VectorClock {
    fn from(values: Vec<i64>) -> Self {
        Self::from_values(values)
    }
}

/// Partial order for vector clocks.
///
/// Returns `None` for concurrent clocks and for clocks of different lengths.
impl PartialOrd for VectorClock {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.causal_order(other).ok()? {
            CausalOrder::Equal => Some(Ordering::Equal),
            CausalOrder::Before => Some(Ordering::Less),
            CausalOrder::After => Some(Ordering::Greater),
            CausalOrder::Concurrent => None,
        }
    }
}

impl fmt::Display for VectorClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, val) in self.clocks.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{val}")?;
        }
        write!(f, "]")
    }
}

impl fmt::Debug for VectorClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VC{self}")
    }
}
