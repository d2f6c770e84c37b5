//! Error taxonomy for the estimator.
//!
//! Only API misuse is a hard error. Degenerate geometry (too few inlier
//! candidates, near-parallel samples, all trials invalid) is a normal
//! zero-inlier outcome and never surfaces through this type.

use thiserror::Error;

/// Errors returned by [`crate::TwoPointRansac::find_inliers`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RansacError {
    /// The two point sequences and the flag vector must be equal-length.
    #[error("input length mismatch: {points_a} points in frame A, {points_b} in frame B, {flags} flags")]
    LengthMismatch {
        points_a: usize,
        points_b: usize,
        flags: usize,
    },
}
