//! Cross-operation properties exercised through the public API.
//!
//! These tests pin the contract-level behaviors rather than individual
//! chunk loops: swap is its own inverse, copy round-trips through
//! compare, and compare honors prefix semantics at every width class.

use chunkmem::{compare, copy, copy_with, swap, FixedBudget, MemOpError, Unbounded};
use proptest::prelude::*;

/// One representative length per width class.
const WIDTH_CLASS_LENS: [usize; 4] = [32, 20, 14, 13];

#[test]
fn swap_is_its_own_inverse_across_widths() {
    for len in WIDTH_CLASS_LENS {
        let orig_a: Vec<u8> = (0..len as u8).map(|v| v.wrapping_mul(7)).collect();
        let orig_b: Vec<u8> = (0..len as u8).map(|v| v.wrapping_mul(13).wrapping_add(1)).collect();
        let (mut a, mut b) = (orig_a.clone(), orig_b.clone());
        swap(&mut a, &mut b, len).unwrap();
        swap(&mut a, &mut b, len).unwrap();
        assert_eq!(a, orig_a, "len {len}");
        assert_eq!(b, orig_b, "len {len}");
    }
}

#[test]
fn copy_then_compare_is_zero_across_widths() {
    for len in WIDTH_CLASS_LENS {
        let src: Vec<u8> = (0..len as u8).map(|v| v.wrapping_mul(31)).collect();
        let dup = copy(&src, len).unwrap();
        assert_eq!(compare(&src, &dup), 0, "len {len}");
    }
}

#[test]
fn identical_buffers_compare_zero() {
    let a = vec![0xABu8; 24];
    let b = vec![0xABu8; 24];
    assert_eq!(compare(&a, &b), 0);
}

#[test]
fn strict_prefix_is_equal_not_less() {
    let short = b"abcd";
    let long = b"abcdefgh";
    assert_eq!(compare(short, long), 0);
    assert_eq!(compare(long, short), 0);
}

#[test]
fn last_byte_difference_at_width_one_orders_correctly() {
    // 5 bytes is indivisible by 2/4/8, forcing the byte-wise loop.
    let a = [9u8, 9, 9, 9, 4];
    let b = [9u8, 9, 9, 9, 5];
    assert!(compare(&a, &b) < 0);
    assert!(compare(&b, &a) > 0);
}

#[test]
fn width4_last_byte_mismatch_orders_correctly() {
    // 4 bytes → width 4; the mismatching word makes a the smaller side
    // at either endianness.
    let a = [1u8, 2, 3, 4];
    let b = [1u8, 2, 3, 5];
    assert!(compare(&a, &b) < 0);
}

#[test]
fn denied_budget_surfaces_out_of_memory() {
    let src = vec![0u8; 1024];
    let err = copy_with(&src, 1024, &FixedBudget { limit: 512 }).unwrap_err();
    assert!(matches!(err, MemOpError::OutOfMemory { .. }));
}

#[test]
fn single_byte_swap_exchanges_values() {
    let mut a = [0xFFu8];
    let mut b = [0x01u8];
    swap(&mut a, &mut b, 1).unwrap();
    assert_eq!((a, b), ([0x01], [0xFF]));
}

proptest! {
    #[test]
    fn copied_buffer_compares_equal_to_source(
        src in proptest::collection::vec(any::<u8>(), 1..1024),
    ) {
        let dup = copy_with(&src, src.len(), &Unbounded).unwrap();
        prop_assert_eq!(compare(&src, &dup), 0);
        prop_assert_eq!(compare(&dup, &src), 0);
    }

    #[test]
    fn double_swap_restores_originals(
        seed in proptest::collection::vec(any::<u8>(), 1..1024),
        delta in any::<u8>(),
    ) {
        let other: Vec<u8> = seed.iter().map(|v| v.wrapping_add(delta)).collect();
        let (mut a, mut b) = (seed.clone(), other.clone());
        swap(&mut a, &mut b, seed.len()).unwrap();
        swap(&mut a, &mut b, seed.len()).unwrap();
        prop_assert_eq!(a, seed);
        prop_assert_eq!(b, other);
    }
}
