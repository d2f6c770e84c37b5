//! Uniform sampling of minimal 2-point samples from the inlier candidates.

use crate::utils::UniformRandomGenerator;

/// Number of correspondences in a minimal sample.
pub const SAMPLE_SIZE: usize = 2;

/// Draws pairs of distinct indices from an inlier candidate list.
///
/// Sampling is restricted to candidates the tracker already believes are
/// inliers; drawing from the full correspondence set would waste trials on
/// known outliers. Indices may repeat across trials, only within one sample
/// they are guaranteed distinct.
pub struct CandidateSampler {
    rng: UniformRandomGenerator<usize>,
}

impl Default for CandidateSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateSampler {
    /// Construct a sampler with a random seed.
    pub fn new() -> Self {
        Self {
            rng: UniformRandomGenerator::new(),
        }
    }

    /// Construct a sampler from a fixed seed for reproducible trials.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: UniformRandomGenerator::from_seed(seed),
        }
    }

    /// Draw two distinct correspondence indices from `candidates`.
    ///
    /// Returns `None` when fewer than two candidates remain, which the
    /// consensus loop treats as a zero-inlier trial.
    pub fn sample(&mut self, candidates: &[usize]) -> Option<[usize; SAMPLE_SIZE]> {
        if candidates.len() < SAMPLE_SIZE {
            return None;
        }

        let mut positions = [0usize; SAMPLE_SIZE];
        self.rng.gen_unique(&mut positions, 0, candidates.len() - 1);
        Some([candidates[positions[0]], candidates[positions[1]]])
    }
}

#[cfg(test)]
mod tests {
    use super::{CandidateSampler, SAMPLE_SIZE};

    #[test]
    fn samples_are_distinct_and_from_candidate_set() {
        let candidates = [3usize, 5, 9, 14, 21];
        let mut sampler = CandidateSampler::from_seed(9);

        for _ in 0..100 {
            let sample = sampler.sample(&candidates).unwrap();
            assert_ne!(sample[0], sample[1]);
            assert!(candidates.contains(&sample[0]));
            assert!(candidates.contains(&sample[1]));
        }
    }

    #[test]
    fn too_few_candidates_yields_none() {
        let mut sampler = CandidateSampler::from_seed(1);
        assert!(sampler.sample(&[]).is_none());
        assert!(sampler.sample(&[7]).is_none());
        assert!(sampler.sample(&[7, 8]).is_some());
    }

    #[test]
    fn exactly_two_candidates_always_returns_both() {
        let mut sampler = CandidateSampler::from_seed(5);
        let sample = sampler.sample(&[11, 42]).unwrap();
        let mut sorted = sample;
        sorted.sort_unstable();
        assert_eq!(sorted, [11, 42]);
        assert_eq!(sample.len(), SAMPLE_SIZE);
    }
}
