use yoga_base::Vec3;

/// Bone vectors shorter than this are treated as collapsed.
pub const MIN_BONE_LENGTH: f64 = 1e-9;

/// How far rounding may push a cosine past ±1 before the geometry is rejected.
pub const COSINE_SLACK: f64 = 1e-6;

/// Angle at one joint for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AngleReading {
    /// Interior angle in degrees, 0.0..=180.0.
    Degrees(f64),
    /// A required landmark was missing or the geometry was degenerate.
    Undetected,
}

impl AngleReading {
    pub fn degrees(self) -> Option<f64> {
        match self {
            AngleReading::Degrees(d) => Some(d),
            AngleReading::Undetected => None,
        }
    }

    pub fn is_detected(self) -> bool {
        matches!(self, AngleReading::Degrees(_))
    }
}

impl From<Option<f64>> for AngleReading {
    fn from(value: Option<f64>) -> Self {
        value.map_or(AngleReading::Undetected, AngleReading::Degrees)
    }
}

/// Angle at `vertex` between the rays towards `a` and `c`.
///
/// cos(θ) = (ba · bc) / (|ba| |bc|), returned in degrees.
pub fn joint_angle(a: Vec3<f64>, vertex: Vec3<f64>, c: Vec3<f64>) -> AngleReading {
    let ba = a - vertex;
    let bc = c - vertex;

    let len_ba = ba.length();
    let len_bc = bc.length();
    if !(len_ba.is_finite() && len_bc.is_finite())
        || len_ba < MIN_BONE_LENGTH
        || len_bc < MIN_BONE_LENGTH
    {
        return AngleReading::Undetected;
    }

    let cosine = ba.dot(bc) / (len_ba * len_bc);
    if !cosine.is_finite() || cosine.abs() > 1.0 + COSINE_SLACK {
        return AngleReading::Undetected;
    }

    AngleReading::Degrees(cosine.clamp(-1.0, 1.0).acos().to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_past_one_is_clamped() {
        // nearly parallel rays whose cosine rounds to exactly 1 or a hair above
        let a = Vec3::new(1.0, 1e-9, 0.0);
        let b = Vec3::new(0.0, 0.0, 0.0);
        let c = Vec3::new(3.0, 3e-9, 0.0);
        let angle = joint_angle(a, b, c).degrees().unwrap();
        assert!(angle.abs() < 1e-3);
    }

    #[test]
    fn test_infinite_input_is_undetected() {
        let a = Vec3::new(f64::INFINITY, 0.0, 0.0);
        let b = Vec3::new(0.0, 0.0, 0.0);
        let c = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(joint_angle(a, b, c), AngleReading::Undetected);
    }
}
