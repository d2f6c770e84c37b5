//! Consensus search: the two-point RANSAC estimator.
//!
//! Orchestrates the sampler, minimal solver, and error metric over a fixed
//! number of trials, keeps the hypothesis with the largest inlier count, and
//! refines the caller's flag vector in place.

use log::debug;
use nalgebra::{Matrix3, Vector3};

use crate::error::RansacError;
use crate::models::EssentialMatrix;
use crate::sampler::CandidateSampler;
use crate::settings::RansacSettings;
use crate::solver::TwoPointSolver;

/// One recorded trial: the hypothesis (if the sample was non-degenerate), the
/// inlier count it achieved over the candidate set, and the two sampled
/// correspondence indices that generated it.
#[derive(Clone, Debug, Default)]
struct Trial {
    hypothesis: Option<EssentialMatrix>,
    inlier_count: usize,
    sample: [usize; 2],
}

impl Trial {
    fn reset(&mut self) {
        self.hypothesis = None;
        self.inlier_count = 0;
        self.sample = [0, 0];
    }
}

/// Two-point RANSAC estimator for rejecting outlier correspondences.
///
/// The estimator owns per-call scratch state (hypothesis bank and candidate
/// index list), preallocated at construction and reused across calls, so a
/// single instance is not re-entrant: use one instance per concurrent caller.
pub struct TwoPointRansac {
    settings: RansacSettings,
    sampler: CandidateSampler,
    solver: TwoPointSolver,
    /// Hypothesis bank, one slot per trial, reset at the start of each call.
    trials: Vec<Trial>,
    /// Indices of correspondences currently flagged as tracker inliers.
    candidates: Vec<usize>,
}

impl TwoPointRansac {
    /// Construct an estimator with an entropy-seeded sampler.
    pub fn new(settings: RansacSettings) -> Self {
        Self::with_sampler(settings, CandidateSampler::new())
    }

    /// Construct an estimator with a fixed sampler seed, making every call
    /// deterministic for identical inputs.
    pub fn with_seed(settings: RansacSettings, seed: u64) -> Self {
        Self::with_sampler(settings, CandidateSampler::from_seed(seed))
    }

    fn with_sampler(mut settings: RansacSettings, sampler: CandidateSampler) -> Self {
        // The trial floor holds even for settings built from struct literals.
        settings.iterations = settings.iterations.max(crate::settings::MIN_ITERATIONS);
        let trials = vec![Trial::default(); settings.iterations];
        Self {
            settings,
            sampler,
            solver: TwoPointSolver::new(),
            trials,
            candidates: Vec::new(),
        }
    }

    pub fn settings(&self) -> &RansacSettings {
        &self.settings
    }

    /// Refine a tracker's inlier flags against a two-point essential-matrix
    /// consensus.
    ///
    /// `points_a` and `points_b` are index-aligned normalized homogeneous
    /// image points in the two frames; `rotation` is the frame-A-to-frame-B
    /// rotation prior; `flags` holds the tracker's inlier decisions and is
    /// rewritten in place. A flag survives only if it was set on input and
    /// the correspondence scores at or below the inlier threshold under the
    /// winning hypothesis; no flag is ever promoted. Returns the number of
    /// flags set after refinement.
    ///
    /// Degenerate geometry (fewer than two candidates, or every trial
    /// degenerate) clears all flags and returns `Ok(0)`; only mismatched
    /// input lengths are an error.
    pub fn find_inliers(
        &mut self,
        points_a: &[Vector3<f64>],
        points_b: &[Vector3<f64>],
        rotation: &Matrix3<f64>,
        flags: &mut [bool],
    ) -> Result<usize, RansacError> {
        if points_a.len() != points_b.len() || points_a.len() != flags.len() {
            return Err(RansacError::LengthMismatch {
                points_a: points_a.len(),
                points_b: points_b.len(),
                flags: flags.len(),
            });
        }

        self.rebuild_candidates(flags);
        for trial in &mut self.trials {
            trial.reset();
        }

        if self.candidates.len() < 2 {
            debug!(
                "two-point ransac: {} inlier candidates, cannot sample",
                self.candidates.len()
            );
            flags.iter_mut().for_each(|f| *f = false);
            return Ok(0);
        }

        for k in 0..self.settings.iterations {
            let Some(sample) = self.sampler.sample(&self.candidates) else {
                continue;
            };
            self.trials[k].sample = sample;

            let [i, j] = sample;
            let Some(hypothesis) = self.solver.solve(
                &points_a[i],
                &points_b[i],
                &points_a[j],
                &points_b[j],
                rotation,
            ) else {
                // Degenerate sample: the trial stays at zero inliers.
                continue;
            };

            let count = self.count_inliers(points_a, points_b, &hypothesis);
            self.trials[k].inlier_count = count;
            self.trials[k].hypothesis = Some(hypothesis);
        }

        // First-found maximum wins ties, so a fixed seed gives a fixed result.
        let best = self
            .trials
            .iter()
            .enumerate()
            .filter_map(|(k, trial)| {
                trial.hypothesis.as_ref().map(|h| (k, trial.inlier_count, h))
            })
            .max_by(|(ka, ca, _), (kb, cb, _)| ca.cmp(cb).then(kb.cmp(ka)));

        let Some((best_k, best_count, winning)) = best else {
            debug!("two-point ransac: no valid hypothesis in any trial");
            flags.iter_mut().for_each(|f| *f = false);
            return Ok(0);
        };

        let refined = self.refine_flags(points_a, points_b, winning, flags);
        debug!(
            "two-point ransac: trial {} of {} wins with {} inliers, {} of {} flags kept",
            best_k,
            self.settings.iterations,
            best_count,
            refined,
            flags.len()
        );
        Ok(refined)
    }

    /// Rebuild the candidate index list from the tracker's flags.
    fn rebuild_candidates(&mut self, flags: &[bool]) {
        self.candidates.clear();
        self.candidates
            .extend(flags.iter().enumerate().filter(|(_, &f)| f).map(|(i, _)| i));
    }

    /// Count candidates whose error under `hypothesis` is within threshold.
    ///
    /// Evaluates every inlier candidate, including the two that generated the
    /// hypothesis.
    fn count_inliers(
        &self,
        points_a: &[Vector3<f64>],
        points_b: &[Vector3<f64>],
        hypothesis: &EssentialMatrix,
    ) -> usize {
        self.candidates
            .iter()
            .filter(|&&p| {
                self.settings
                    .error_metric
                    .evaluate(&points_a[p], &points_b[p], hypothesis)
                    <= self.settings.inlier_threshold
            })
            .count()
    }

    /// Rewrite `flags` under the winning hypothesis and return the new count.
    fn refine_flags(
        &self,
        points_a: &[Vector3<f64>],
        points_b: &[Vector3<f64>],
        winning: &EssentialMatrix,
        flags: &mut [bool],
    ) -> usize {
        let mut kept = 0;
        for (p, flag) in flags.iter_mut().enumerate() {
            if !*flag {
                continue;
            }
            let error = self
                .settings
                .error_metric
                .evaluate(&points_a[p], &points_b[p], winning);
            if error <= self.settings.inlier_threshold {
                kept += 1;
            } else {
                *flag = false;
            }
        }
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{ErrorMetric, MIN_ITERATIONS};
    use approx::assert_relative_eq;
    use nalgebra::{Rotation3, Unit};

    #[test]
    fn trial_bank_respects_iteration_floor() {
        let settings = RansacSettings {
            error_metric: ErrorMetric::Sampson,
            inlier_threshold: 1e-4,
            iterations: 1,
        };
        let ransac = TwoPointRansac::with_seed(settings, 0);
        assert_eq!(ransac.settings().iterations, MIN_ITERATIONS);
        assert_eq!(ransac.trials.len(), MIN_ITERATIONS);
    }

    #[test]
    fn candidate_list_is_rebuilt_from_flags() {
        let mut ransac = TwoPointRansac::with_seed(RansacSettings::default(), 0);
        ransac.rebuild_candidates(&[true, false, true, true, false]);
        assert_eq!(ransac.candidates, vec![0, 2, 3]);

        // A later call with different flags fully replaces the scratch list.
        ransac.rebuild_candidates(&[false, true, false, false, false]);
        assert_eq!(ransac.candidates, vec![1]);
    }

    #[test]
    fn recorded_sample_reproduces_recorded_hypothesis() {
        // Each bank slot must depend only on the two indices it recorded:
        // re-solving from the stored pair has to give back the stored matrix.
        let rotation = Rotation3::from_axis_angle(
            &Unit::new_normalize(Vector3::new(0.3, 0.1, 1.0)),
            0.06,
        )
        .into_inner();
        let translation = Vector3::new(0.1, -0.2, 0.05);

        let mut points_a = Vec::new();
        let mut points_b = Vec::new();
        for i in 0..8 {
            let landmark = Vector3::new(
                ((i as f64) * 0.9).sin() * 1.4,
                ((i as f64) * 0.4).cos(),
                5.0 + (i as f64) * 0.5,
            );
            let moved = rotation * landmark + translation;
            points_a.push(landmark / landmark.z);
            points_b.push(moved / moved.z);
        }
        let mut flags = vec![true; 8];

        let mut ransac = TwoPointRansac::with_seed(RansacSettings::default(), 19);
        ransac
            .find_inliers(&points_a, &points_b, &rotation, &mut flags)
            .unwrap();

        let mut checked = 0;
        for trial in &ransac.trials {
            let Some(hypothesis) = &trial.hypothesis else {
                continue;
            };
            let [i, j] = trial.sample;
            let resolved = ransac
                .solver
                .solve(&points_a[i], &points_b[i], &points_a[j], &points_b[j], &rotation)
                .unwrap();
            assert_relative_eq!(hypothesis.e, resolved.e, epsilon = 1e-12);
            checked += 1;
        }
        assert!(checked > 0, "no trial produced a hypothesis");
    }
}
