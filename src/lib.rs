//! # two-point-ransac — rotation-aided outlier rejection
//!
//! A two-point RANSAC estimator for the epipolar essential matrix between two
//! camera views. It refines the inlier/outlier flags produced by an
//! optical-flow feature tracker before the correspondences reach a
//! visual-inertial state estimator.
//!
//! Because the inter-frame rotation is supplied externally (integrated from a
//! gyroscope), the epipolar constraint becomes linear in the translation
//! direction and a minimal sample of **two** correspondences suffices,
//! instead of the classical five or eight. Each trial draws two candidates,
//! solves for the translation direction, forms the hypothesis `E = [t]x R`,
//! and scores every candidate with either the Sampson or the algebraic error
//! metric; the hypothesis with the largest consensus wins and the flag vector
//! is rewritten in place.
//!
//! ## Quick start
//!
//! ```rust
//! use nalgebra::{Matrix3, Vector3};
//! use two_point_ransac::{RansacSettings, TwoPointRansac};
//!
//! // Normalized homogeneous image points from the tracker, index-aligned.
//! let points_a = vec![
//!     Vector3::new(0.10, -0.05, 1.0),
//!     Vector3::new(-0.20, 0.15, 1.0),
//!     Vector3::new(0.05, 0.30, 1.0),
//! ];
//! // Static camera: identical observations in the second frame.
//! let points_b = points_a.clone();
//! let rotation = Matrix3::identity();
//! let mut flags = vec![true, true, true];
//!
//! let mut ransac = TwoPointRansac::with_seed(RansacSettings::default(), 42);
//! let inliers = ransac
//!     .find_inliers(&points_a, &points_b, &rotation, &mut flags)
//!     .unwrap();
//!
//! // Pure rotation carries no translation signal: every trial is degenerate
//! // and the call reports a zero-confidence result instead of failing.
//! assert_eq!(inliers, 0);
//! ```
//!
//! ## Modules
//!
//! - **[`ransac`](ransac)**: the consensus search and the [`TwoPointRansac`]
//!   entry point
//! - **[`solver`](solver)**: the 2-point minimal solver with a rotation prior
//! - **[`sampler`](sampler)**: uniform sampling over the inlier candidates
//! - **[`scoring`](scoring)**: Sampson and algebraic error metrics
//! - **[`models`](models)**: essential-matrix and translation-direction types
//! - **[`settings`](settings)**: estimator configuration
//! - **[`error`](error)**: the (small) hard-error taxonomy

pub mod error;
pub mod models;
pub mod ransac;
pub mod sampler;
pub mod scoring;
pub mod settings;
pub mod solver;
pub mod utils;

pub use error::RansacError;
pub use models::{EssentialMatrix, TranslationDirection};
pub use ransac::TwoPointRansac;
pub use sampler::CandidateSampler;
pub use scoring::{algebraic_error, sampson_error};
pub use settings::{ErrorMetric, RansacSettings, MIN_ITERATIONS};
pub use solver::TwoPointSolver;
