//! Interchangeable geometric error metrics for hypothesis evaluation.
//!
//! The consensus loop stays metric-agnostic: the metric is selected once at
//! estimator construction through [`ErrorMetric`] and dispatched here.

use nalgebra::Vector3;

use crate::models::EssentialMatrix;
use crate::settings::ErrorMetric;

/// Magnitude of the raw epipolar residual `|pb^T E pa|`.
///
/// Cheap but scale-sensitive: the residual grows with the distance of the
/// epipolar line from the image center, so a fixed threshold treats central
/// points more leniently.
pub fn algebraic_error(
    pa: &Vector3<f64>,
    pb: &Vector3<f64>,
    hypothesis: &EssentialMatrix,
) -> f64 {
    pb.dot(&(hypothesis.e * pa)).abs()
}

/// Sampson error: first-order approximation of the geometric reprojection
/// error.
///
/// The squared algebraic residual is normalized by the gradient magnitude of
/// the epipolar line in both images, using only the first two components of
/// `E pa` and `E^T pb`.
pub fn sampson_error(
    pa: &Vector3<f64>,
    pb: &Vector3<f64>,
    hypothesis: &EssentialMatrix,
) -> f64 {
    let line_b = hypothesis.e * pa;
    let line_a = hypothesis.e.transpose() * pb;
    let residual = pb.dot(&line_b);

    let gradient_sq =
        line_b.x * line_b.x + line_b.y * line_b.y + line_a.x * line_a.x + line_a.y * line_a.y;
    if gradient_sq <= f64::EPSILON {
        // Epipolar line gradient vanished; fall back to the squared residual
        // so that an exact match still scores zero.
        return residual * residual;
    }

    residual * residual / gradient_sq
}

impl ErrorMetric {
    /// Evaluate one correspondence against a hypothesis under this metric.
    pub fn evaluate(
        &self,
        pa: &Vector3<f64>,
        pb: &Vector3<f64>,
        hypothesis: &EssentialMatrix,
    ) -> f64 {
        match self {
            ErrorMetric::Sampson => sampson_error(pa, pb, hypothesis),
            ErrorMetric::Algebraic => algebraic_error(pa, pb, hypothesis),
        }
    }
}
