//! Domain Layer
//!
//! # Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     Domain Layer                         │
//! ├──────────────────────────────────────────────────────────┤
//! │                                                          │
//! │  Clock Module              Tracker Module                │
//! │  ├─ VectorClock            ├─ AccessTracker<L>  (replay) │
//! │  ├─ CausalOrder            ├─ SharedTracker<L>  (online) │
//! │  └─ ClockError             ├─ TrackerConfig              │
//! │                            └─ TrackerError               │
//! │                                                          │
//! │                    Trace Module                          │
//! │                    ├─ Access / TraceRecord               │
//! │                    └─ AccessTracker::replay              │
//! │                                                          │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The tracker computes clocks and nothing else. Deciding whether two
//! accesses race (and what to do about it) is left to the caller, using
//! [`clock::VectorClock::causal_order`] on the clocks it kept.

pub mod clock;
pub mod trace;
pub mod tracker;

pub use clock::{CausalOrder, ClockError, VectorClock, UNSEEN};
pub use trace::{reference_trace, Access, TraceRecord};
pub use tracker::{AccessKind, AccessTracker, ProcessorId, SharedTracker, TrackerConfig, TrackerError};
