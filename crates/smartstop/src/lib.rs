//! smartstop: happens-before race detection on vector clocks
//!
//! # Overview
//!
//! `smartstop` tracks the causal order of memory accesses issued by a fixed
//! set of processors. Every processor carries a vector clock; every memory
//! location remembers the clock of its last write. Recording an access
//! advances the issuing processor's clock and, for reads, merges in the last
//! writer's clock. The returned clocks are immutable snapshots a caller can
//! compare later: two conflicting accesses whose clocks are concurrent race.
//!
//! # Usage
//!
//! ```rust
//! use smartstop::{AccessKind, AccessTracker, CausalOrder, ProcessorId};
//!
//! let mut tracker: AccessTracker = AccessTracker::new(2).unwrap();
//!
//! let w0 = tracker
//!     .record_access(ProcessorId(0), Some("x".to_string()), AccessKind::Write)
//!     .unwrap();
//! let w1 = tracker
//!     .record_access(ProcessorId(1), Some("x".to_string()), AccessKind::Write)
//!     .unwrap();
//!
//! // P1 never observed P0's write: the two writes are unordered
//! assert_eq!(w0.causal_order(&w1).unwrap(), CausalOrder::Concurrent);
//! ```
//!
//! For threads reporting their own accesses concurrently, use
//! [`SharedTracker`], which takes `&self` and is `Send + Sync`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod domain;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Re-export Primary Types
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

// Clock types
pub use domain::{CausalOrder, ClockError, VectorClock, UNSEEN};

// Tracker types
pub use domain::{
    AccessKind,
    AccessTracker,
    ProcessorId,
    SharedTracker,
    TrackerConfig,
    TrackerError,
};

// Trace types
pub use domain::{reference_trace, Access, TraceRecord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
