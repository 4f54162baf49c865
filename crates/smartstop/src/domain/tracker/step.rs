//! The single clock transition both trackers apply per access.

use super::types::ProcessorId;
use crate::domain::clock::{ClockError, VectorClock};

/// Clock produced by the next event of `processor`
///
/// `observed` is the last writer's clock when the access is a read of a
/// location that has been written; the reader absorbs it. Every other access
/// passes `None`. A location that was never written holds the all-sentinel
/// clock, and merging with it is the identity, so `None` covers that case.
pub(crate) fn advance(
    current: &VectorClock,
    processor: ProcessorId,
    observed: Option<&VectorClock>,
) -> Result<VectorClock, ClockError> {
    let vc = current.increment(processor.as_usize())?;
    match observed {
        Some(writer) => vc.merge(writer),
        None => Ok(vc),
    }
}
