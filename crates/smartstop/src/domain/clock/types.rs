//! Vector Clock Types
//!
//! Shared vocabulary for the clock module: the sentinel coordinate, the
//! causal ordering between two clocks, and the clock error taxonomy.

use std::fmt;

/// Coordinate value meaning "this processor has not acted yet"
///
/// Every clock handed out by a tracker starts from all-`UNSEEN`. The first
/// event of processor `p` therefore moves coordinate `p` to `0`.
pub const UNSEEN: i64 = -1;

/// Causal relationship between two vector clocks
///
/// ```text
/// [1, 2] vs [1, 2]  -> Equal
/// [1, 2] vs [2, 2]  -> Before      (every coordinate <=, one strictly <)
/// [2, 2] vs [1, 2]  -> After
/// [2, 1] vs [1, 2]  -> Concurrent  (neither dominates)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CausalOrder {
    /// Identical coordinates
    Equal,
    /// Left happens-before right
    Before,
    /// Right happens-before left
    After,
    /// Incomparable: no causal relationship either way
    Concurrent,
}

impl CausalOrder {
    /// The same relationship seen from the other side
    #[inline]
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Before => Self::After,
            Self::After => Self::Before,
            other => other,
        }
    }

    /// True unless the clocks are concurrent
    #[inline]
    #[must_use]
    pub const fn is_ordered(self) -> bool {
        !matches!(self, Self::Concurrent)
    }
}

impl fmt::Display for CausalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Equal => "equal",
            Self::Before => "before",
            Self::After => "after",
            Self::Concurrent => "concurrent",
        };
        f.write_str(name)
    }
}

/// Clock primitive failures
///
/// All of these are contract violations by the caller. A tracker that is
/// used correctly never produces them, but they are always checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    /// Processor index past the end of the clock
    #[error("Clock index {index} out of range (clock length {len})")]
    IndexOutOfRange {
        /// Index that was requested
        index: usize,
        /// Length of the clock
        len: usize,
    },

    /// Two clocks of different lengths were combined
    #[error("Clock length mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Length of the receiver
        left: usize,
        /// Length of the argument
        right: usize,
    },

    /// Counter at `index` cannot advance any further
    #[error("Clock counter overflow at index {index}")]
    Overflow {
        /// Index of the saturated counter
        index: usize,
    },
}
