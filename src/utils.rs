//! Shared utilities: a small seedable wrapper around `rand`.

use rand::distributions::Uniform;
use rand::prelude::*;

/// Uniform integer random-number generator behind the sampler.
///
/// By default this uses an entropy-seeded RNG; tests and reproducible
/// pipelines can construct it from a fixed seed instead. Identical seeds
/// yield identical sample sequences, which makes whole RANSAC runs
/// repeatable.
pub struct UniformRandomGenerator<T>
where
    T: Copy + rand::distributions::uniform::SampleUniform + PartialOrd,
{
    rng: StdRng,
    dist: Option<Uniform<T>>,
}

impl<T> UniformRandomGenerator<T>
where
    T: Copy + rand::distributions::uniform::SampleUniform + PartialOrd,
{
    /// Construct with a random seed (suitable for production use).
    pub fn new() -> Self {
        let rng = StdRng::from_rng(thread_rng()).expect("failed to seed StdRng");
        Self { rng, dist: None }
    }

    /// Construct with a fixed seed (reproducible trial sequences).
    pub fn from_seed(seed: u64) -> Self {
        let rng = StdRng::seed_from_u64(seed);
        Self { rng, dist: None }
    }

    /// Reset the distribution range to `[min, max]` inclusive.
    pub fn reset(&mut self, min: T, max: T) {
        self.dist = Some(Uniform::new_inclusive(min, max));
    }

    /// Draw a single random value using the current distribution.
    pub fn next(&mut self) -> T {
        let dist = self
            .dist
            .as_ref()
            .expect("UniformRandomGenerator: distribution not initialized");
        self.rng.sample(dist)
    }

    /// Fill `out` with unique random integers in `[min, max]`.
    ///
    /// Rejection sampling; suitable for the tiny sample sizes of minimal
    /// solvers. `max - min + 1` must be at least `out.len()`.
    pub fn gen_unique(&mut self, out: &mut [T], min: T, max: T)
    where
        T: Eq,
    {
        self.reset(min, max);
        let n = out.len();
        for i in 0..n {
            loop {
                let candidate = self.next();
                if out[..i].iter().all(|&v| v != candidate) {
                    out[i] = candidate;
                    break;
                }
            }
        }
    }
}

impl<T> Default for UniformRandomGenerator<T>
where
    T: Copy + rand::distributions::uniform::SampleUniform + PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}
