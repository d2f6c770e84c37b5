//! Configuration for the two-point RANSAC estimator.
//!
//! Settings are fixed at construction of [`crate::TwoPointRansac`] and stay
//! immutable for the lifetime of the estimator.

/// Hard floor on the number of RANSAC trials.
///
/// Fewer trials materially reduce the probability of drawing an outlier-free
/// pair, so constructors clamp any requested count up to this value.
pub const MIN_ITERATIONS: usize = 16;

/// Geometric error metric used to score correspondences against a hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorMetric {
    /// First-order approximation of reprojection error. More accurate, and
    /// the default. Threshold units: squared normalized-pixel error, so the
    /// default threshold of 1e-6 tolerates roughly a milliradian of
    /// epipolar-line distance.
    Sampson,
    /// Raw magnitude of the epipolar residual `|pb^T E pa|`. Cheaper but
    /// scale-sensitive and biased toward points near the image center.
    Algebraic,
}

/// Configuration of the estimator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RansacSettings {
    /// Error metric used for inlier classification.
    pub error_metric: ErrorMetric,
    /// Inlier threshold in the units of the chosen metric.
    pub inlier_threshold: f64,
    /// Number of trials per call, never below [`MIN_ITERATIONS`].
    pub iterations: usize,
}

impl RansacSettings {
    pub fn new(error_metric: ErrorMetric, inlier_threshold: f64) -> Self {
        Self {
            error_metric,
            inlier_threshold,
            iterations: MIN_ITERATIONS,
        }
    }

    /// Request a trial count; values below [`MIN_ITERATIONS`] are clamped up.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations.max(MIN_ITERATIONS);
        self
    }
}

impl Default for RansacSettings {
    fn default() -> Self {
        Self {
            error_metric: ErrorMetric::Sampson,
            inlier_threshold: 1e-6,
            iterations: MIN_ITERATIONS,
        }
    }
}
