use {
    crate::PoseError,
    serde::{Deserialize, Serialize},
    std::collections::{BTreeMap, HashMap},
    yoga_base::{Vec2, Vec3},
};

/// Number of landmarks in the BlazePose body vocabulary
pub const BODY_LANDMARK_COUNT: usize = 33;

/// BlazePose body landmark names, in estimator index order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandmarkName {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl LandmarkName {
    pub const ALL: [LandmarkName; BODY_LANDMARK_COUNT] = [
        LandmarkName::Nose,
        LandmarkName::LeftEyeInner,
        LandmarkName::LeftEye,
        LandmarkName::LeftEyeOuter,
        LandmarkName::RightEyeInner,
        LandmarkName::RightEye,
        LandmarkName::RightEyeOuter,
        LandmarkName::LeftEar,
        LandmarkName::RightEar,
        LandmarkName::MouthLeft,
        LandmarkName::MouthRight,
        LandmarkName::LeftShoulder,
        LandmarkName::RightShoulder,
        LandmarkName::LeftElbow,
        LandmarkName::RightElbow,
        LandmarkName::LeftWrist,
        LandmarkName::RightWrist,
        LandmarkName::LeftPinky,
        LandmarkName::RightPinky,
        LandmarkName::LeftIndex,
        LandmarkName::RightIndex,
        LandmarkName::LeftThumb,
        LandmarkName::RightThumb,
        LandmarkName::LeftHip,
        LandmarkName::RightHip,
        LandmarkName::LeftKnee,
        LandmarkName::RightKnee,
        LandmarkName::LeftAnkle,
        LandmarkName::RightAnkle,
        LandmarkName::LeftHeel,
        LandmarkName::RightHeel,
        LandmarkName::LeftFootIndex,
        LandmarkName::RightFootIndex,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LandmarkName::Nose => "nose",
            LandmarkName::LeftEyeInner => "left_eye_inner",
            LandmarkName::LeftEye => "left_eye",
            LandmarkName::LeftEyeOuter => "left_eye_outer",
            LandmarkName::RightEyeInner => "right_eye_inner",
            LandmarkName::RightEye => "right_eye",
            LandmarkName::RightEyeOuter => "right_eye_outer",
            LandmarkName::LeftEar => "left_ear",
            LandmarkName::RightEar => "right_ear",
            LandmarkName::MouthLeft => "mouth_left",
            LandmarkName::MouthRight => "mouth_right",
            LandmarkName::LeftShoulder => "left_shoulder",
            LandmarkName::RightShoulder => "right_shoulder",
            LandmarkName::LeftElbow => "left_elbow",
            LandmarkName::RightElbow => "right_elbow",
            LandmarkName::LeftWrist => "left_wrist",
            LandmarkName::RightWrist => "right_wrist",
            LandmarkName::LeftPinky => "left_pinky",
            LandmarkName::RightPinky => "right_pinky",
            LandmarkName::LeftIndex => "left_index",
            LandmarkName::RightIndex => "right_index",
            LandmarkName::LeftThumb => "left_thumb",
            LandmarkName::RightThumb => "right_thumb",
            LandmarkName::LeftHip => "left_hip",
            LandmarkName::RightHip => "right_hip",
            LandmarkName::LeftKnee => "left_knee",
            LandmarkName::RightKnee => "right_knee",
            LandmarkName::LeftAnkle => "left_ankle",
            LandmarkName::RightAnkle => "right_ankle",
            LandmarkName::LeftHeel => "left_heel",
            LandmarkName::RightHeel => "right_heel",
            LandmarkName::LeftFootIndex => "left_foot_index",
            LandmarkName::RightFootIndex => "right_foot_index",
        }
    }
}

impl From<LandmarkName> for usize {
    fn from(name: LandmarkName) -> usize {
        name as usize
    }
}

impl TryFrom<usize> for LandmarkName {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        LandmarkName::ALL.get(value).copied().ok_or_else(|| {
            format!(
                "Invalid landmark index: {}. Must be in range 0-{}.",
                value,
                BODY_LANDMARK_COUNT - 1
            )
        })
    }
}

/// World-space (3D) landmarks of one frame. Unresolved landmarks are simply absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LandmarkSet {
    points: HashMap<LandmarkName, Vec3<f64>>,
}

impl LandmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from estimator output in index order; `None` entries are unresolved.
    /// Entries past the vocabulary are ignored.
    pub fn from_indexed<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Option<Vec3<f64>>>,
    {
        let points = LandmarkName::ALL
            .into_iter()
            .zip(points)
            .filter_map(|(name, point)| point.map(|p| (name, p)))
            .collect();
        Self { points }
    }

    pub fn insert(&mut self, name: LandmarkName, point: Vec3<f64>) {
        self.points.insert(name, point);
    }

    pub fn with(mut self, name: LandmarkName, point: Vec3<f64>) -> Self {
        self.insert(name, point);
        self
    }

    pub fn remove(&mut self, name: LandmarkName) -> Option<Vec3<f64>> {
        self.points.remove(&name)
    }

    pub fn get(&self, name: LandmarkName) -> Option<Vec3<f64>> {
        self.points.get(&name).copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl FromIterator<(LandmarkName, Vec3<f64>)> for LandmarkSet {
    fn from_iter<I: IntoIterator<Item = (LandmarkName, Vec3<f64>)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// Image-space landmarks of one frame, normalised to 0.0..=1.0. Used only for placing labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageLandmarks {
    points: HashMap<LandmarkName, Vec2<f32>>,
}

impl ImageLandmarks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: LandmarkName, point: Vec2<f32>) {
        self.points.insert(name, point);
    }

    pub fn with(mut self, name: LandmarkName, point: Vec2<f32>) -> Self {
        self.insert(name, point);
        self
    }

    pub fn get(&self, name: LandmarkName) -> Option<Vec2<f32>> {
        self.points.get(&name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One estimator frame as exchanged in JSON:
/// `{"world": {"left_hip": [x, y, z], ...}, "image": {"left_hip": [x, y], ...}}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandmarkFrame {
    pub world: BTreeMap<LandmarkName, [f64; 3]>,
    #[serde(default)]
    pub image: BTreeMap<LandmarkName, [f32; 2]>,
}

impl LandmarkFrame {
    pub fn from_json(json: &str) -> Result<Self, PoseError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn world_landmarks(&self) -> LandmarkSet {
        self.world
            .iter()
            .map(|(&name, &point)| (name, Vec3::from(point)))
            .collect()
    }

    pub fn image_landmarks(&self) -> ImageLandmarks {
        let mut landmarks = ImageLandmarks::new();
        for (&name, &point) in &self.image {
            landmarks.insert(name, Vec2::from(point));
        }
        landmarks
    }
}
