//! Geometric model types produced by the two-point solver.

use nalgebra::{Matrix3, Vector3};

/// Essential matrix relating two calibrated views.
#[derive(Clone, Debug)]
pub struct EssentialMatrix {
    pub e: Matrix3<f64>,
}

impl EssentialMatrix {
    pub fn new(e: Matrix3<f64>) -> Self {
        Self { e }
    }

    /// Build `E = [t]x * R` from a rotation prior and a translation direction.
    ///
    /// `t` is used as given; callers that need a direction-only essential
    /// matrix should normalize first (see [`TranslationDirection`]).
    pub fn from_rotation_translation(r: &Matrix3<f64>, t: &Vector3<f64>) -> Self {
        Self::new(skew_symmetric(t) * r)
    }
}

/// Unit-norm translation direction between two views.
///
/// The two-point solver recovers translation only up to sign and scale, so the
/// stored vector is normalized and either sign is equally valid.
#[derive(Clone, Copy, Debug)]
pub struct TranslationDirection(Vector3<f64>);

impl TranslationDirection {
    /// Normalize `t` into a direction, rejecting near-zero vectors.
    pub fn from_vector(t: Vector3<f64>, tolerance: f64) -> Option<Self> {
        let norm = t.norm();
        if norm <= tolerance {
            return None;
        }
        Some(Self(t / norm))
    }

    pub fn as_vector(&self) -> &Vector3<f64> {
        &self.0
    }
}

/// Skew-symmetric cross-product matrix `[t]x` such that `[t]x v = t × v`.
pub fn skew_symmetric(t: &Vector3<f64>) -> Matrix3<f64> {
    Matrix3::new(
        0.0, -t.z, t.y, //
        t.z, 0.0, -t.x, //
        -t.y, t.x, 0.0,
    )
}
