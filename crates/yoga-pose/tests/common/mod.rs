#![allow(dead_code)]

use yoga_base::Vec3;
use yoga_pose::{AngleKey, LandmarkName, LandmarkSet, PoseAngles};

/// Left arm straight out to the side, right arm bent forward, left leg straight,
/// right shin pointing forward.
pub fn body() -> LandmarkSet {
    use LandmarkName::*;
    LandmarkSet::new()
        .with(LeftShoulder, Vec3::new(0.2, 1.4, 0.0))
        .with(LeftElbow, Vec3::new(0.5, 1.4, 0.0))
        .with(LeftWrist, Vec3::new(0.8, 1.4, 0.0))
        .with(LeftHip, Vec3::new(0.2, 0.9, 0.0))
        .with(LeftKnee, Vec3::new(0.2, 0.4, 0.0))
        .with(LeftAnkle, Vec3::new(0.2, -0.1, 0.0))
        .with(RightShoulder, Vec3::new(-0.2, 1.4, 0.0))
        .with(RightElbow, Vec3::new(-0.5, 1.4, 0.0))
        .with(RightWrist, Vec3::new(-0.5, 1.4, 0.3))
        .with(RightHip, Vec3::new(-0.2, 0.9, 0.0))
        .with(RightKnee, Vec3::new(-0.2, 0.4, 0.0))
        .with(RightAnkle, Vec3::new(-0.2, 0.4, 0.5))
}

/// Joint angles of [`body`].
pub fn expected(key: AngleKey) -> f64 {
    match key {
        AngleKey::LeftElbow | AngleKey::LeftKnee => 180.0,
        _ => 90.0,
    }
}

pub fn angles(values: [f64; 6]) -> PoseAngles {
    AngleKey::ALL
        .into_iter()
        .zip(values)
        .fold(PoseAngles::undetected(), |angles, (key, d)| angles.with(key, d))
}

pub fn temp_path(tag: &str) -> std::path::PathBuf {
    std::env::temp_dir()
        .join(format!("yoga-pose-test-{}-{}", std::process::id(), tag))
}
