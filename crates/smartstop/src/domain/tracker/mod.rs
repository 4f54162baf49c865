//! Access Tracking
//!
//! # Architecture
//!
//! ```text
//! AccessTracker<L>                    SharedTracker<L>
//! ├─ processor_clocks: Vec<VC>        ├─ processor_clocks: Vec<Mutex<VC>>
//! └─ location_clocks: HashMap<L, VC>  └─ location_clocks: DashMap<L, VC>
//!
//!   &mut self, trace replay             &self, one caller thread per processor
//! ```
//!
//! Both apply the same transition per access:
//!
//! 1. `vc = processor_clocks[p].increment(p)`
//! 2. write to `a`: `location_clocks[a] = vc`
//!    read of `a`: `vc = vc.merge(location_clocks[a])`
//!    no location: nothing else
//! 3. `processor_clocks[p] = vc`, return `vc`
//!
//! Location clocks only hold the last write (last-writer-wins). Entries are
//! created on first write and never evicted.

mod sequential;
mod shared;
mod step;
mod types;

pub use sequential::AccessTracker;
pub use shared::SharedTracker;
pub use types::{AccessKind, ProcessorId, TrackerConfig, TrackerError};
