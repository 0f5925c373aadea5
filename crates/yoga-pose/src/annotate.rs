use {
    crate::{AngleKey, ImageLandmarks, MatchResult, PoseAngles},
    yoga_base::Vec2,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    /// BGR color the overlay draws this verdict in.
    pub fn bgr(self) -> [u8; 3] {
        match self {
            Verdict::Pass => [0, 255, 0],
            Verdict::Fail => [0, 0, 255],
        }
    }
}

/// Angle label drawn next to one joint.
#[derive(Debug, Clone, PartialEq)]
pub struct JointAnnotation {
    pub key: AngleKey,
    /// Pixel position of the joint's vertex in the frame
    pub position: Vec2<i32>,
    /// Whole degrees, truncated
    pub text: String,
    pub verdict: Verdict,
}

/// Labels for every detected joint whose vertex is visible in the image.
///
/// Angles come from the 3D readings; the 2D landmarks only place the text.
pub fn annotate(
    angles: &PoseAngles,
    result: &MatchResult,
    image: &ImageLandmarks,
    width: u32,
    height: u32,
) -> Vec<JointAnnotation> {
    angles
        .detected()
        .filter_map(|(key, degrees)| {
            let vertex = image.get(key.vertex())?;
            Some(JointAnnotation {
                key,
                position: vertex.to_pixel(width, height),
                text: format!("{}", degrees as i32),
                verdict: if result.passed(key) { Verdict::Pass } else { Verdict::Fail },
            })
        })
        .collect()
}
