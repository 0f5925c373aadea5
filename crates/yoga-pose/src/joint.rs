use {
    crate::LandmarkName,
    std::{fmt, str::FromStr},
};

/// Number of tracked joint angles
pub const ANGLE_KEY_COUNT: usize = 6;

/// The joints whose interior angle is tracked for every pose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AngleKey {
    LeftElbow = 0,
    RightElbow = 1,
    LeftShoulder = 2,
    RightShoulder = 3,
    LeftKnee = 4,
    RightKnee = 5,
}

impl AngleKey {
    pub const ALL: [AngleKey; ANGLE_KEY_COUNT] = [
        AngleKey::LeftElbow,
        AngleKey::RightElbow,
        AngleKey::LeftShoulder,
        AngleKey::RightShoulder,
        AngleKey::LeftKnee,
        AngleKey::RightKnee,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AngleKey::LeftElbow => "left_elbow",
            AngleKey::RightElbow => "right_elbow",
            AngleKey::LeftShoulder => "left_shoulder",
            AngleKey::RightShoulder => "right_shoulder",
            AngleKey::LeftKnee => "left_knee",
            AngleKey::RightKnee => "right_knee",
        }
    }

    /// The three landmarks spanning this joint; the middle one is the vertex.
    pub fn landmarks(self) -> [LandmarkName; 3] {
        use LandmarkName::*;
        match self {
            AngleKey::LeftElbow => [LeftShoulder, LeftElbow, LeftWrist],
            AngleKey::RightElbow => [RightShoulder, RightElbow, RightWrist],
            AngleKey::LeftShoulder => [LeftElbow, LeftShoulder, LeftHip],
            AngleKey::RightShoulder => [RightElbow, RightShoulder, RightHip],
            AngleKey::LeftKnee => [LeftHip, LeftKnee, LeftAnkle],
            AngleKey::RightKnee => [RightHip, RightKnee, RightAnkle],
        }
    }

    pub fn vertex(self) -> LandmarkName {
        self.landmarks()[1]
    }
}

impl fmt::Display for AngleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AngleKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AngleKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown angle key: {s}"))
    }
}
