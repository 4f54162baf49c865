//! Core Types for Access Tracking

use crate::domain::clock::ClockError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Processor identifier (index into the tracker's fixed processor set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessorId(pub usize);

impl ProcessorId {
    /// Create a new processor identifier
    #[inline(always)]
    #[must_use]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the underlying usize value
    #[inline(always)]
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0
    }
}

impl From<usize> for ProcessorId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

impl fmt::Display for ProcessorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

/// Kind of memory access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessKind {
    /// Load: absorbs the last writer's history
    Read,
    /// Store: becomes the location's new causal reference point
    Write,
}

impl AccessKind {
    /// True for [`AccessKind::Write`]
    #[inline]
    #[must_use]
    pub const fn is_write(self) -> bool {
        matches!(self, Self::Write)
    }
}

/// `true` is a write, `false` a read
impl From<bool> for AccessKind {
    fn from(is_write: bool) -> Self {
        if is_write {
            Self::Write
        } else {
            Self::Read
        }
    }
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => f.write_str("read"),
            Self::Write => f.write_str("write"),
        }
    }
}

/// Tracker configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Number of processors; fixed for the tracker's lifetime
    pub num_processors: usize,
}

impl TrackerConfig {
    /// Configuration for `num_processors` processors
    #[must_use]
    pub const fn new(num_processors: usize) -> Self {
        Self { num_processors }
    }

    /// Reject configurations no tracker can be built from
    ///
    /// # Errors
    /// - `NoProcessors` if `num_processors` is zero
    pub const fn validate(&self) -> Result<(), TrackerError> {
        if self.num_processors == 0 {
            return Err(TrackerError::NoProcessors);
        }
        Ok(())
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self { num_processors: 2 }
    }
}

/// Tracker errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackerError {
    /// A tracker needs at least one processor
    #[error("Tracker requires at least one processor")]
    NoProcessors,

    /// Processor ID out of bounds
    #[error("Invalid processor ID: {processor} (tracker has {num_processors} processors)")]
    InvalidProcessor {
        /// Offending processor
        processor: ProcessorId,
        /// Size of the processor set
        num_processors: usize,
    },

    /// Internal clock inconsistency
    #[error(transparent)]
    Clock(#[from] ClockError),
}
