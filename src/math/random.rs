use rand::Rng;
use std::f64::consts::PI;

/// Source of uniform randomness for weight initialization and shuffling.
///
/// Any `rand::Rng` qualifies, so a seeded `StdRng` gives reproducible runs.
pub trait RandomSource {
    /// A uniform sample in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;

    /// A uniform index in `0..bound`. `bound` must be non-zero.
    ///
    /// The default scales `next_uniform`; `rand` generators override it with
    /// an exact integer draw.
    fn next_index(&mut self, bound: usize) -> usize {
        let j = (self.next_uniform() * bound as f64) as usize;
        j.min(bound - 1)
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_uniform(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Samples a single value from N(0, 1) using the Box-Muller transform.
/// Draws that land exactly on 0 are retried so `ln` stays finite.
pub fn standard_normal<R: RandomSource + ?Sized>(rng: &mut R) -> f64 {
    let mut u = 0.0;
    while u == 0.0 {
        u = rng.next_uniform();
    }
    let mut v = 0.0;
    while v == 0.0 {
        v = rng.next_uniform();
    }
    (-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos()
}

/// In-place Fisher-Yates shuffle.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}
