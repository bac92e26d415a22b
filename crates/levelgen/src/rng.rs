//! Draw helpers over the injected ChaCha8 stream used by every randomized
//! generation decision.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

/// Uniform value in `[0, 1)` with 24 bits of precision.
pub(crate) fn unit(rng: &mut ChaCha8Rng) -> f32 {
    (rng.next_u32() >> 8) as f32 / (1_u32 << 24) as f32
}

/// Uniform integer in `[min, max_exclusive)`.
pub(crate) fn range_i32(rng: &mut ChaCha8Rng, min: i32, max_exclusive: i32) -> i32 {
    debug_assert!(min < max_exclusive);
    let span = (max_exclusive - min) as u64;
    min + (rng.next_u64() % span) as i32
}

/// Fair coin returning a horizontal step of `-1` or `+1`.
pub(crate) fn coin_direction(rng: &mut ChaCha8Rng) -> i32 {
    if unit(rng) < 0.5 { -1 } else { 1 }
}

/// Uniform index into a non-empty slice.
pub(crate) fn pick_index(rng: &mut ChaCha8Rng, len: usize) -> usize {
    debug_assert!(len > 0);
    rng.next_u64() as usize % len
}
