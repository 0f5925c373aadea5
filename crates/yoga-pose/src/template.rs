use crate::{ANGLE_KEY_COUNT, AngleKey};

/// Inclusive range of acceptable angles, in degrees. Always `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceRange {
    min: f64,
    max: f64,
}

impl ToleranceRange {
    /// Range used for joints a template does not constrain.
    pub const PERMISSIVE: ToleranceRange = ToleranceRange { min: 0.0, max: 360.0 };

    /// `None` when the bounds are not finite or `min > max`.
    pub fn new(min: f64, max: f64) -> Option<Self> {
        if min.is_finite() && max.is_finite() && min <= max {
            Some(Self { min, max })
        } else {
            None
        }
    }

    /// `reference ± tolerance`, with the lower bound floored at zero.
    pub fn around(reference: f64, tolerance: f64) -> Option<Self> {
        Self::new((reference - tolerance).max(0.0), reference + tolerance)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Both bounds pass.
    pub fn contains(&self, degrees: f64) -> bool {
        self.min <= degrees && degrees <= self.max
    }
}

impl Default for ToleranceRange {
    fn default() -> Self {
        Self::PERMISSIVE
    }
}

/// Named pose with per-joint tolerance ranges. Unconstrained joints accept [0, 360].
#[derive(Debug, Clone, PartialEq)]
pub struct PoseTemplate {
    name: String,
    ranges: [Option<ToleranceRange>; ANGLE_KEY_COUNT],
}

impl PoseTemplate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ranges: [None; ANGLE_KEY_COUNT],
        }
    }

    pub fn with_range(mut self, key: AngleKey, range: ToleranceRange) -> Self {
        self.set_range(key, range);
        self
    }

    pub fn set_range(&mut self, key: AngleKey, range: ToleranceRange) {
        self.ranges[key.index()] = Some(range);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Effective range for `key`, falling back to [`ToleranceRange::PERMISSIVE`].
    pub fn range(&self, key: AngleKey) -> ToleranceRange {
        self.ranges[key.index()].unwrap_or_default()
    }

    /// Range explicitly stored for `key`, if any.
    pub fn explicit_range(&self, key: AngleKey) -> Option<ToleranceRange> {
        self.ranges[key.index()]
    }

    pub fn explicit_ranges(&self) -> impl Iterator<Item = (AngleKey, ToleranceRange)> + '_ {
        AngleKey::ALL
            .into_iter()
            .filter_map(|key| self.explicit_range(key).map(|range| (key, range)))
    }
}
