//! Example: rejecting optical-flow outliers with two-point RANSAC
//!
//! Simulates one processing cycle of a visual-inertial frontend: a set of
//! tracked correspondences between two frames, a gyroscope-integrated
//! rotation prior, and a tracker flag vector contaminated with outliers.

use nalgebra::{Matrix3, Rotation3, Unit, Vector3};
use rand::Rng;
use two_point_ransac::{RansacSettings, TwoPointRansac};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Two-Point RANSAC Outlier Rejection ===\n");

    let n_inliers = 40;
    let n_outliers = 10;
    let n_total = n_inliers + n_outliers;

    // Known inter-frame motion; the rotation doubles as the gyro prior.
    let rotation: Matrix3<f64> = Rotation3::from_axis_angle(
        &Unit::new_normalize(Vector3::new(0.1, -0.2, 1.0)),
        0.03,
    )
    .into_inner();
    let translation = Vector3::new(0.2, -0.05, 0.1);

    let mut rng = rand::thread_rng();
    let mut points_a = Vec::with_capacity(n_total);
    let mut points_b = Vec::with_capacity(n_total);

    // Tracked features consistent with the motion, lightly noisy.
    for _ in 0..n_inliers {
        let landmark = Vector3::new(
            rng.gen_range(-2.0..2.0),
            rng.gen_range(-1.5..1.5),
            rng.gen_range(3.0..8.0),
        );
        let pa = landmark / landmark.z;
        let moved = rotation * landmark + translation;
        let mut pb = moved / moved.z;
        pb.x += rng.gen_range(-1e-4..1e-4);
        pb.y += rng.gen_range(-1e-4..1e-4);
        points_a.push(Vector3::new(pa.x, pa.y, 1.0));
        points_b.push(pb);
    }

    // Mistracked features: random correspondences.
    for _ in 0..n_outliers {
        points_a.push(Vector3::new(
            rng.gen_range(-0.8..0.8),
            rng.gen_range(-0.6..0.6),
            1.0,
        ));
        points_b.push(Vector3::new(
            rng.gen_range(-0.8..0.8),
            rng.gen_range(-0.6..0.6),
            1.0,
        ));
    }

    // The tracker believed everything it tracked.
    let mut flags = vec![true; n_total];

    println!("Tracked {n_total} correspondences ({n_inliers} good, {n_outliers} mistracked)\n");

    let mut ransac = TwoPointRansac::new(RansacSettings::default().with_iterations(32));
    let kept = ransac.find_inliers(&points_a, &points_b, &rotation, &mut flags)?;

    let cleared = flags[n_inliers..].iter().filter(|&&f| !f).count();
    println!("Refined inlier count: {kept}");
    println!("Mistracked correspondences rejected: {cleared}/{n_outliers}");

    Ok(())
}
