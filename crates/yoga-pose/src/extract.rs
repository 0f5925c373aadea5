use crate::{ANGLE_KEY_COUNT, AngleKey, AngleReading, LandmarkSet, joint_angle};

/// Joint angle readings for one frame, one slot per [`AngleKey`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseAngles {
    readings: [AngleReading; ANGLE_KEY_COUNT],
}

impl Default for PoseAngles {
    fn default() -> Self {
        Self {
            readings: [AngleReading::Undetected; ANGLE_KEY_COUNT],
        }
    }
}

impl PoseAngles {
    /// All keys undetected.
    pub fn undetected() -> Self {
        Self::default()
    }

    pub fn get(&self, key: AngleKey) -> AngleReading {
        self.readings[key.index()]
    }

    pub fn set(&mut self, key: AngleKey, reading: AngleReading) {
        self.readings[key.index()] = reading;
    }

    pub fn with(mut self, key: AngleKey, degrees: f64) -> Self {
        self.set(key, AngleReading::Degrees(degrees));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (AngleKey, AngleReading)> + '_ {
        AngleKey::ALL.into_iter().map(|key| (key, self.get(key)))
    }

    /// Keys with a defined reading, paired with their angle in degrees.
    pub fn detected(&self) -> impl Iterator<Item = (AngleKey, f64)> + '_ {
        self.iter()
            .filter_map(|(key, reading)| reading.degrees().map(|d| (key, d)))
    }

    pub fn detected_count(&self) -> usize {
        self.detected().count()
    }
}

impl FromIterator<(AngleKey, AngleReading)> for PoseAngles {
    fn from_iter<I: IntoIterator<Item = (AngleKey, AngleReading)>>(iter: I) -> Self {
        let mut angles = PoseAngles::default();
        for (key, reading) in iter {
            angles.set(key, reading);
        }
        angles
    }
}

/// Angle reading for one joint; undetected when any of its three landmarks is missing.
pub fn extract_angle(landmarks: &LandmarkSet, key: AngleKey) -> AngleReading {
    let [a, vertex, c] = key.landmarks();
    match (landmarks.get(a), landmarks.get(vertex), landmarks.get(c)) {
        (Some(a), Some(vertex), Some(c)) => joint_angle(a, vertex, c),
        _ => AngleReading::Undetected,
    }
}

/// Evaluate every joint independently for one frame.
pub fn extract_angles(landmarks: &LandmarkSet) -> PoseAngles {
    let angles: PoseAngles = AngleKey::ALL
        .into_iter()
        .map(|key| (key, extract_angle(landmarks, key)))
        .collect();
    log::debug!(
        "extracted {}/{} joint angles from {} landmarks",
        angles.detected_count(),
        ANGLE_KEY_COUNT,
        landmarks.len()
    );
    angles
}
