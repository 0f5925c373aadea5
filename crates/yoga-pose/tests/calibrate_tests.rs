mod common;

use std::fs;
use yoga_pose::{
    AngleKey, AngleReading, Calibrator, DEFAULT_TOLERANCE, PoseAngles, PoseError, PoseTemplate,
    TemplateStore, ToleranceRange, build_template, commit_template, extract_angles, match_template,
    reference_image_path,
};

fn sample() -> PoseAngles {
    common::angles([165.0, 172.4, 85.0, 5.0, 48.0, 179.0])
}

#[test]
fn test_ranges_are_reference_plus_minus_tolerance() {
    let template = build_template("Tree_Pose", &sample(), DEFAULT_TOLERANCE).unwrap();
    assert_eq!(template.name(), "Tree_Pose");
    assert_eq!(template.range(AngleKey::LeftElbow), ToleranceRange::new(155.0, 175.0).unwrap());
    assert_eq!(template.range(AngleKey::LeftKnee), ToleranceRange::new(38.0, 58.0).unwrap());
    // lower bound never goes negative
    assert_eq!(template.range(AngleKey::RightShoulder), ToleranceRange::new(0.0, 15.0).unwrap());
    // upper bound is not capped at 180
    assert_eq!(template.range(AngleKey::RightKnee).max(), 189.0);
}

#[test]
fn test_calibrated_angles_match_their_own_template() {
    for tolerance in [0.0, 2.5, DEFAULT_TOLERANCE] {
        let angles = extract_angles(&common::body());
        let template = build_template("Self", &angles, tolerance).unwrap();
        let result = match_template(&angles, &template);
        assert!(result.is_correct(), "tolerance {tolerance}");
        assert!(result.verdicts().all(|(_, ok)| ok));
    }
}

#[test]
fn test_undetected_joints_are_left_unconstrained() {
    let mut angles = sample();
    angles.set(AngleKey::RightElbow, AngleReading::Undetected);
    let template = build_template("Partial", &angles, 5.0).unwrap();
    assert_eq!(template.explicit_range(AngleKey::RightElbow), None);
    assert_eq!(template.range(AngleKey::RightElbow), ToleranceRange::PERMISSIVE);
    assert_eq!(template.explicit_ranges().count(), 5);
}

#[test]
fn test_refuses_without_any_angle() {
    assert!(matches!(
        build_template("Ghost", &PoseAngles::undetected(), 10.0),
        Err(PoseError::NoDetectedAngles)
    ));
}

#[test]
fn test_refuses_when_no_reading_gives_a_range() {
    let nan = PoseAngles::undetected().with(AngleKey::LeftKnee, f64::NAN);
    let below_zero = PoseAngles::undetected().with(AngleKey::LeftKnee, -50.0);
    let infinite = PoseAngles::undetected().with(AngleKey::RightElbow, f64::INFINITY);
    for angles in [nan, below_zero, infinite] {
        assert!(matches!(
            build_template("Ghost", &angles, 10.0),
            Err(PoseError::NoDetectedAngles)
        ));
    }

    let dir = common::temp_path("calibrator-unusable");
    let _ = fs::remove_dir_all(&dir);
    let path = dir.join("pose_details.toml");
    let calibrator = Calibrator::new(&path, dir.join("refs"));
    let mut store = TemplateStore::new();
    let nan = PoseAngles::undetected().with(AngleKey::LeftKnee, f64::NAN);
    let result = calibrator.calibrate(&mut store, "Ghost", &nan, |_| true);
    assert!(matches!(result, Err(PoseError::NoDetectedAngles)));
    assert!(store.is_empty());
    assert!(!path.exists());
}

#[test]
fn test_unusable_readings_are_skipped_beside_good_ones() {
    let angles = PoseAngles::undetected()
        .with(AngleKey::LeftKnee, f64::NAN)
        .with(AngleKey::RightKnee, 90.0);
    let template = build_template("Half", &angles, 10.0).unwrap();
    assert_eq!(template.explicit_range(AngleKey::LeftKnee), None);
    assert_eq!(template.explicit_ranges().count(), 1);
}

#[test]
fn test_refuses_path_separators_in_name() {
    for name in ["../../x", "poses/tree", "a\\b"] {
        assert!(matches!(
            build_template(name, &sample(), 10.0),
            Err(PoseError::InvalidPoseName(_))
        ));
    }
}

#[test]
fn test_refuses_blank_name() {
    for name in ["", "   ", "\t\n"] {
        assert!(matches!(build_template(name, &sample(), 10.0), Err(PoseError::EmptyPoseName)));
    }
    let trimmed = build_template("  Cobra ", &sample(), 10.0).unwrap();
    assert_eq!(trimmed.name(), "Cobra");
}

#[test]
fn test_refuses_bad_tolerance() {
    for tolerance in [-1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            build_template("Cobra", &sample(), tolerance),
            Err(PoseError::InvalidTolerance(_))
        ));
    }
}

#[test]
fn test_overwrite_needs_confirmation() {
    let mut store = TemplateStore::new();
    store.replace(PoseTemplate::new("Cobra"));
    let template = build_template("Cobra", &sample(), 10.0).unwrap();

    let mut asked = None;
    let declined = commit_template(&mut store, template.clone(), |name| {
        asked = Some(name.to_string());
        false
    });
    assert!(matches!(declined, Err(PoseError::OverwriteDeclined(ref n)) if n == "Cobra"));
    assert_eq!(asked.as_deref(), Some("Cobra"));
    assert_eq!(store.get("Cobra").unwrap().explicit_ranges().count(), 0);

    let previous = commit_template(&mut store, template, |_| true).unwrap();
    assert!(previous.is_some());
    assert_eq!(store.get("Cobra").unwrap().explicit_ranges().count(), 6);
}

#[test]
fn test_new_pose_is_not_confirmed() {
    let mut store = TemplateStore::new();
    let template = build_template("Plank", &sample(), 10.0).unwrap();
    let previous =
        commit_template(&mut store, template, |_| panic!("nothing to overwrite")).unwrap();
    assert!(previous.is_none());
    assert!(store.contains("Plank"));
}

#[test]
fn test_calibrator_persists_and_requests_snapshot() {
    let dir = common::temp_path("calibrator");
    let _ = fs::remove_dir_all(&dir);
    let path = dir.join("pose_details.toml");
    let calibrator = Calibrator::new(&path, dir.join("static/poses")).with_tolerance(5.0);

    let mut store = TemplateStore::new();
    let snapshot = calibrator
        .calibrate(&mut store, "Tree_Pose", &sample(), |_| false)
        .unwrap();
    assert_eq!(snapshot.pose_name, "Tree_Pose");
    assert_eq!(snapshot.path, dir.join("static/poses/tree_pose.png"));

    let on_disk = TemplateStore::load(&path).unwrap();
    assert_eq!(
        on_disk.get("Tree_Pose").unwrap().range(AngleKey::LeftKnee),
        ToleranceRange::new(43.0, 53.0).unwrap()
    );
    assert!(store.contains("Tree_Pose"));

    // declining leaves memory and disk alone
    let before = fs::read_to_string(&path).unwrap();
    let result =
        calibrator.calibrate(&mut store, "Tree_Pose", &common::angles([1.0; 6]), |_| false);
    assert!(matches!(result, Err(PoseError::OverwriteDeclined(_))));
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
    assert_eq!(
        store.get("Tree_Pose").unwrap().range(AngleKey::LeftKnee),
        ToleranceRange::new(43.0, 53.0).unwrap()
    );

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_failed_save_leaves_store_untouched() {
    let calibrator = Calibrator::new("/proc/nonexistent/poses.toml", "/proc/nonexistent/poses");
    let mut store = TemplateStore::new();
    let result = calibrator.calibrate(&mut store, "Cobra", &sample(), |_| true);
    assert!(matches!(result, Err(PoseError::Io(_))));
    assert!(store.is_empty());
}

#[test]
fn test_reference_image_path_is_lowercase() {
    let path = reference_image_path("static/poses", "Warrior_II");
    assert_eq!(path, std::path::Path::new("static/poses/warrior_ii.png"));
}
