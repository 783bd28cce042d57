//! Seeded permutation for animation ordering.
//!
//! # Design Decisions
//! - Linear-congruential generator, masked to 31 bits
//! - Fisher-Yates from the top down, one draw per position
//! - Same seed always yields the same permutation

/// Linear-congruential generator producing floats in `[0, 1)`.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(1_103_515_245).wrapping_add(12_345) & 0x7fff_ffff;
        self.0 as f64 / 0x7fff_ffff as f64
    }
}

/// Seed derived from the text being encoded: sum of character codes.
pub fn seed_from_text(text: &str) -> u64 {
    text.chars().map(|c| c as u64).sum()
}

/// Shuffle `items` in place with a Fisher-Yates permutation driven by the
/// seeded generator.
pub fn shuffle<T>(items: &mut [T], seed: u64) {
    let mut rng = Lcg(seed);
    for i in (1..items.len()).rev() {
        // `next` can return exactly 1.0 when the state lands on the mask
        // value, which would put the draw one past `i`.
        let j = ((rng.next() * (i + 1) as f64) as usize).min(i);
        items.swap(i, j);
    }
}
