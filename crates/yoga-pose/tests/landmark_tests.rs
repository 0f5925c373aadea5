use yoga_base::{Vec2, Vec3};
use yoga_pose::{AngleKey, BODY_LANDMARK_COUNT, LandmarkFrame, LandmarkName, LandmarkSet};

#[test]
fn test_landmark_index_round_trip() {
    assert_eq!(usize::from(LandmarkName::Nose), 0);
    assert_eq!(usize::from(LandmarkName::LeftShoulder), 11);
    assert_eq!(usize::from(LandmarkName::RightAnkle), 28);
    assert_eq!(usize::from(LandmarkName::RightFootIndex), 32);
    for (i, name) in LandmarkName::ALL.into_iter().enumerate() {
        assert_eq!(usize::from(name), i);
        assert_eq!(LandmarkName::try_from(i).unwrap(), name);
    }
}

#[test]
fn test_landmark_index_out_of_range() {
    assert!(LandmarkName::try_from(BODY_LANDMARK_COUNT).is_err());
    assert!(LandmarkName::try_from(100).is_err());
}

#[test]
fn test_angle_key_triples() {
    assert_eq!(
        AngleKey::LeftElbow.landmarks(),
        [LandmarkName::LeftShoulder, LandmarkName::LeftElbow, LandmarkName::LeftWrist]
    );
    assert_eq!(
        AngleKey::RightShoulder.landmarks(),
        [LandmarkName::RightElbow, LandmarkName::RightShoulder, LandmarkName::RightHip]
    );
    assert_eq!(AngleKey::LeftKnee.vertex(), LandmarkName::LeftKnee);
    for key in AngleKey::ALL {
        assert_eq!(key.vertex().as_str(), key.as_str());
    }
}

#[test]
fn test_angle_key_names_parse() {
    for key in AngleKey::ALL {
        assert_eq!(key.as_str().parse::<AngleKey>().unwrap(), key);
        assert_eq!(key.to_string(), key.as_str());
    }
    assert!("left_hip".parse::<AngleKey>().is_err());
}

#[test]
fn test_from_indexed_skips_unresolved() {
    let mut points = vec![None; BODY_LANDMARK_COUNT];
    points[usize::from(LandmarkName::LeftHip)] = Some(Vec3::new(0.1, 0.9, 0.0));
    points[usize::from(LandmarkName::LeftKnee)] = Some(Vec3::new(0.1, 0.5, 0.0));
    let set = LandmarkSet::from_indexed(points);
    assert_eq!(set.len(), 2);
    assert_eq!(set.get(LandmarkName::LeftKnee), Some(Vec3::new(0.1, 0.5, 0.0)));
    assert_eq!(set.get(LandmarkName::LeftAnkle), None);
}

#[test]
fn test_frame_from_json() {
    let json = r#"{
        "world": {"left_hip": [0.1, 0.9, 0.0], "left_knee": [0.1, 0.5, -0.05]},
        "image": {"left_knee": [0.4, 0.7]}
    }"#;
    let frame = LandmarkFrame::from_json(json).unwrap();
    let world = frame.world_landmarks();
    assert_eq!(world.len(), 2);
    assert_eq!(world.get(LandmarkName::LeftKnee), Some(Vec3::new(0.1, 0.5, -0.05)));
    let image = frame.image_landmarks();
    assert_eq!(image.get(LandmarkName::LeftKnee), Some(Vec2::new(0.4, 0.7)));
    assert_eq!(image.get(LandmarkName::LeftHip), None);
}

#[test]
fn test_frame_without_image_section() {
    let frame = LandmarkFrame::from_json(r#"{"world": {}}"#).unwrap();
    assert!(frame.world_landmarks().is_empty());
    assert!(frame.image_landmarks().is_empty());
}

#[test]
fn test_frame_with_unknown_landmark_is_rejected() {
    assert!(LandmarkFrame::from_json(r#"{"world": {"tail": [0, 0, 0]}}"#).is_err());
}
