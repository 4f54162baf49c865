//! Kani Proofs for VectorClock
//!
//! Symbolic checks of the clock primitives over two-processor clocks with
//! arbitrary coordinates.

use super::{CausalOrder, ClockError, VectorClock};

fn any_clock() -> VectorClock {
    let a: i64 = kani::any();
    let b: i64 = kani::any();
    VectorClock::from_values(vec![a, b])
}

/// Merging a clock with itself changes nothing
#[kani::proof]
#[kani::unwind(3)]
fn proof_merge_idempotent() {
    let vc = any_clock();
    let merged = vc.merge(&vc);
    assert!(merged == Ok(vc));
}

/// Merge is commutative
#[kani::proof]
#[kani::unwind(3)]
fn proof_merge_commutative() {
    let a = any_clock();
    let b = any_clock();
    assert!(a.merge(&b) == b.merge(&a));
}

/// The merge result dominates both inputs
#[kani::proof]
#[kani::unwind(3)]
fn proof_merge_is_upper_bound() {
    let a = any_clock();
    let b = any_clock();
    if let Ok(joined) = a.merge(&b) {
        let lhs = a.causal_order(&joined);
        let rhs = b.causal_order(&joined);
        assert!(matches!(lhs, Ok(CausalOrder::Before | CausalOrder::Equal)));
        assert!(matches!(rhs, Ok(CausalOrder::Before | CausalOrder::Equal)));
    }
}

/// Increment touches exactly one coordinate, by exactly one
#[kani::proof]
#[kani::unwind(3)]
fn proof_increment_exact() {
    let vc = any_clock();
    let index: usize = kani::any();
    kani::assume(index < 2);
    kani::assume(vc.get(index) != Some(i64::MAX));

    let next = vc.increment(index);
    assert!(next.is_ok());
    if let Ok(next) = next {
        for i in 0..2 {
            if i == index {
                assert!(next.get(i) == vc.get(i).map(|c| c + 1));
            } else {
                assert!(next.get(i) == vc.get(i));
            }
        }
    }
}

/// Out-of-range increments are rejected
#[kani::proof]
#[kani::unwind(3)]
fn proof_increment_out_of_range() {
    let vc = any_clock();
    let index: usize = kani::any();
    kani::assume(index >= 2);
    assert!(vc.increment(index) == Err(ClockError::IndexOutOfRange { index, len: 2 }));
}
