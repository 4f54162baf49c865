//! Vector Clock Module
//!
//! # Overview
//!
//! A vector clock is one logical counter per processor. Two primitives build
//! the happens-before partial order:
//!
//! - `increment(i)`: processor `i` performed its next event
//! - `merge(other)`: element-wise maximum, used when causal knowledge flows
//!   from one processor to another (a read observing a prior write)
//!
//! Both return a new clock. Earlier clocks stay valid snapshots, so callers
//! can keep them around and compare them later with
//! [`VectorClock::causal_order`].
//!
//! ```rust
//! use smartstop::domain::clock::{CausalOrder, VectorClock};
//!
//! let start = VectorClock::initial(2);
//! let a = start.increment(0).unwrap();
//! let b = start.increment(1).unwrap();
//!
//! assert_eq!(a.to_string(), "[0, -1]");
//! assert_eq!(a.causal_order(&b).unwrap(), CausalOrder::Concurrent);
//!
//! let joined = a.merge(&b).unwrap();
//! assert_eq!(joined.to_string(), "[0, 0]");
//! assert!(a.happens_before(&joined).unwrap());
//! ```

mod types;
mod vector_clock;

#[cfg(kani)]
mod proofs;

pub use types::{CausalOrder, ClockError, UNSEEN};
pub use vector_clock::VectorClock;
