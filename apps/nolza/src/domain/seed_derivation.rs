//! RNG seed derivation for reproducible shuffle runs.
//!
//! Batch runs take one base seed and derive an independent-looking seed per
//! streak, so any single streak can be replayed on its own.

/// Derive the seed for streak `streak_no` of a run seeded with `base_seed`.
pub fn derive_streak_seed(base_seed: u64, streak_no: u64) -> u64 {
    // SplitMix64 finalizer over the offset seed
    let mut z = base_seed.wrapping_add(streak_no.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
