//! Shared helpers for integration tests.

#![allow(dead_code)]

use proptest::test_runner::Config as ProptestConfig;
use smartstop::{AccessKind, AccessTracker, ProcessorId, VectorClock};
use std::sync::Once;

static INIT_LOGGING: Once = Once::new();

/// Install a test-writer subscriber once per test binary.
pub fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .with_target(true)
            .with_ansi(false)
            .try_init();
    });
}

/// Proptest configuration with a fixed case count.
pub fn test_proptest_config(cases: u32) -> ProptestConfig {
    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

/// Record an access on a tracker keyed by `&str`, panicking on error.
pub fn record(
    tracker: &mut AccessTracker<&'static str>,
    processor: usize,
    location: Option<&'static str>,
    is_write: bool,
) -> VectorClock {
    tracker
        .record_access(ProcessorId(processor), location, AccessKind::from(is_write))
        .expect("access should be recorded")
}

/// Coordinate-wise `a <= b`.
pub fn dominated_by(a: &VectorClock, b: &VectorClock) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| x <= y)
}
