//! Tests for deterministic RNG behavior
//!
//! CRITICAL: Determinism is sacred. Same seed MUST produce same sequence.

use proptest::prelude::*;
use util_belt_core_rs::Xorshift32;

#[test]
fn test_rng_new_with_seed() {
    let rng = Xorshift32::new(12345);
    assert_eq!(rng.state(), 12345);
}

#[test]
fn test_rng_next_deterministic() {
    let mut rng1 = Xorshift32::new(12345);
    let mut rng2 = Xorshift32::new(12345);

    // Same seed should produce same sequence
    for i in 0..1000 {
        let val1 = rng1.next();
        let val2 = rng2.next();
        assert_eq!(val1, val2, "RNG not deterministic at step {}", i);
    }
}

#[test]
fn test_rng_different_seeds_different_sequences() {
    let mut rng1 = Xorshift32::new(12345);
    let mut rng2 = Xorshift32::new(54321);

    let val1 = rng1.next();
    let val2 = rng2.next();

    assert_ne!(val1, val2, "Different seeds should produce different values");
}

#[test]
fn test_rng_instances_are_independent() {
    let mut rng1 = Xorshift32::new(344);
    let mut rng2 = Xorshift32::new(344);

    // Advancing rng1 must not affect rng2.
    for _ in 0..50 {
        rng1.next();
    }
    assert_eq!(rng2.next(), Some(88811757), "rng2 was advanced by rng1");
}

#[test]
fn test_rng_limit_yields_exact_count() {
    for limit in [1usize, 2, 10, 100] {
        let count = Xorshift32::with_limit(344, limit).count();
        assert_eq!(count, limit, "expected exactly {} values", limit);
    }
}

#[test]
fn test_rng_first_value_counts_toward_limit() {
    let mut rng = Xorshift32::with_limit(344, 1);
    assert_eq!(rng.next(), Some(88811757));
    assert_eq!(rng.next(), None);
}

#[test]
fn test_rng_no_implicit_reset_between_pulls() {
    // Pulling twice from one handle continues the sequence; it never
    // replays the first value.
    let mut rng = Xorshift32::new(344);
    let first = rng.next();
    let second = rng.next();
    assert_ne!(first, second);
    assert_eq!(second, Some(1786880006));
}

#[test]
fn test_rng_state_advances() {
    let mut rng = Xorshift32::new(12345);
    let initial_state = rng.state();

    rng.next();
    let new_state = rng.state();

    assert_ne!(initial_state, new_state, "RNG state should advance");
}

#[test]
fn test_rng_replay_from_state() {
    let mut rng1 = Xorshift32::new(12345);

    // Generate some values
    for _ in 0..10 {
        rng1.next();
    }

    let checkpoint_state = rng1.state();

    let val1_a = rng1.next();
    let val1_b = rng1.next();

    // Create new RNG from checkpoint
    let mut rng2 = Xorshift32::new(checkpoint_state);

    let val2_a = rng2.next();
    let val2_b = rng2.next();

    // Should produce same values from checkpoint
    assert_eq!(val1_a, val2_a);
    assert_eq!(val1_b, val2_b);
}

proptest! {
    #[test]
    fn prop_determinism_across_seeds(seed in any::<i32>()) {
        let a: Vec<i32> = Xorshift32::with_limit(seed, 64).collect();
        let b: Vec<i32> = Xorshift32::with_limit(seed, 64).collect();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_bounded_yields_exactly_limit(seed in any::<i32>(), limit in 1usize..256) {
        let count = Xorshift32::with_limit(seed, limit).count();
        prop_assert_eq!(count, limit);
    }

    #[test]
    fn prop_yielded_value_equals_state(seed in any::<i32>()) {
        // Every yielded value is the stored state at that step; both are
        // i32 by construction, which is the 32-bit wraparound invariant.
        let mut rng = Xorshift32::new(seed);
        for _ in 0..32 {
            let value = rng.next();
            prop_assert_eq!(value, Some(rng.state()));
        }
    }
}
