//! Minimal solver: essential matrix from two correspondences and a known
//! rotation.
//!
//! With the inter-frame rotation `R` supplied by gyroscope propagation, the
//! epipolar constraint `pb^T [t]x (R pa) = 0` becomes linear in the three
//! components of the translation direction `t`. Each correspondence
//! contributes one equation `c^T t = 0` with coefficient vector
//! `c = (R pa) × pb`, so two correspondences pin `t` down (up to sign and
//! scale) as the cross product of their coefficient vectors. The hypothesis
//! is then `E = [t]x R`.

use log::trace;
use nalgebra::{Matrix3, Vector3};

use crate::models::{EssentialMatrix, TranslationDirection};

/// Cross products below this norm are treated as a degenerate sample.
const DEGENERACY_TOLERANCE: f64 = 1e-9;

/// Two-point essential-matrix solver with a known rotation prior.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoPointSolver;

impl TwoPointSolver {
    pub fn new() -> Self {
        Self
    }

    /// Coefficient vector of the single linear constraint a correspondence
    /// places on the translation direction.
    fn constraint_row(
        pa: &Vector3<f64>,
        pb: &Vector3<f64>,
        rotation: &Matrix3<f64>,
    ) -> Vector3<f64> {
        (rotation * pa).cross(pb)
    }

    /// Recover the translation direction from two correspondences.
    ///
    /// Returns `None` when the two constraint rows are near-parallel (for
    /// example under pure rotation, where every row degenerates toward zero)
    /// rather than propagating an ill-conditioned solution.
    pub fn solve_translation(
        &self,
        pa1: &Vector3<f64>,
        pb1: &Vector3<f64>,
        pa2: &Vector3<f64>,
        pb2: &Vector3<f64>,
        rotation: &Matrix3<f64>,
    ) -> Option<TranslationDirection> {
        let c1 = Self::constraint_row(pa1, pb1, rotation);
        let c2 = Self::constraint_row(pa2, pb2, rotation);

        let t = c1.cross(&c2);
        let direction = TranslationDirection::from_vector(t, DEGENERACY_TOLERANCE);
        if direction.is_none() {
            trace!("sample rejected: near-parallel epipolar constraints");
        }
        direction
    }

    /// Build the essential-matrix hypothesis for a sampled pair, or `None`
    /// for a degenerate sample.
    pub fn solve(
        &self,
        pa1: &Vector3<f64>,
        pb1: &Vector3<f64>,
        pa2: &Vector3<f64>,
        pb2: &Vector3<f64>,
        rotation: &Matrix3<f64>,
    ) -> Option<EssentialMatrix> {
        let t = self.solve_translation(pa1, pb1, pa2, pb2, rotation)?;
        Some(EssentialMatrix::from_rotation_translation(
            rotation,
            t.as_vector(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Rotation3, Unit};

    fn project(point: &Vector3<f64>) -> Vector3<f64> {
        Vector3::new(point.x / point.z, point.y / point.z, 1.0)
    }

    /// Synthesize a correspondence from a 3D landmark and a camera motion.
    fn correspondence(
        landmark: &Vector3<f64>,
        rotation: &Matrix3<f64>,
        translation: &Vector3<f64>,
    ) -> (Vector3<f64>, Vector3<f64>) {
        (project(landmark), project(&(rotation * landmark + translation)))
    }

    fn test_motion() -> (Matrix3<f64>, Vector3<f64>) {
        let rotation = Rotation3::from_axis_angle(
            &Unit::new_normalize(Vector3::new(0.1, -0.3, 1.0)),
            0.05,
        )
        .into_inner();
        (rotation, Vector3::new(0.2, -0.1, 0.05))
    }

    #[test]
    fn recovers_translation_direction_up_to_sign() {
        let (rotation, translation) = test_motion();
        let (pa1, pb1) = correspondence(&Vector3::new(0.5, -0.2, 4.0), &rotation, &translation);
        let (pa2, pb2) = correspondence(&Vector3::new(-1.0, 0.8, 6.0), &rotation, &translation);

        let t = TwoPointSolver::new()
            .solve_translation(&pa1, &pb1, &pa2, &pb2, &rotation)
            .unwrap();

        let expected = translation.normalize();
        let aligned = t.as_vector().dot(&expected).abs();
        assert_relative_eq!(aligned, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn hypothesis_satisfies_epipolar_constraint_for_other_points() {
        let (rotation, translation) = test_motion();
        let (pa1, pb1) = correspondence(&Vector3::new(0.5, -0.2, 4.0), &rotation, &translation);
        let (pa2, pb2) = correspondence(&Vector3::new(-1.0, 0.8, 6.0), &rotation, &translation);
        let (pa3, pb3) = correspondence(&Vector3::new(1.4, 1.1, 5.0), &rotation, &translation);

        let hypothesis = TwoPointSolver::new()
            .solve(&pa1, &pb1, &pa2, &pb2, &rotation)
            .unwrap();

        let residual = pb3.dot(&(hypothesis.e * pa3));
        assert_relative_eq!(residual, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_translation_is_detected_as_degenerate() {
        let (rotation, _) = test_motion();
        let zero = Vector3::zeros();
        let (pa1, pb1) = correspondence(&Vector3::new(0.5, -0.2, 4.0), &rotation, &zero);
        let (pa2, pb2) = correspondence(&Vector3::new(-1.0, 0.8, 6.0), &rotation, &zero);

        let solved = TwoPointSolver::new().solve(&pa1, &pb1, &pa2, &pb2, &rotation);
        assert!(solved.is_none());
    }

    #[test]
    fn duplicated_correspondence_is_degenerate() {
        let (rotation, translation) = test_motion();
        let (pa, pb) = correspondence(&Vector3::new(0.5, -0.2, 4.0), &rotation, &translation);

        let solved = TwoPointSolver::new().solve(&pa, &pb, &pa, &pb, &rotation);
        assert!(solved.is_none());
    }
}
