use {
    crate::{
        AngleKey, CoachConfig, PoseAngles, PoseError, PoseTemplate, TemplateStore, ToleranceRange,
    },
    std::{
        path::{Path, PathBuf},
        sync::Arc,
    },
};

/// Degrees added to and subtracted from each captured angle.
pub const DEFAULT_TOLERANCE: f64 = 10.0;

/// Build a template from one observation of a correctly held pose.
///
/// Each detected joint gets `[max(0, angle - tolerance), angle + tolerance]`;
/// undetected joints are left unconstrained. A reading with no valid range
/// around it (not finite or entirely below zero) counts as undetected.
pub fn build_template(
    name: &str,
    angles: &PoseAngles,
    tolerance: f64,
) -> Result<PoseTemplate, PoseError> {
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(PoseError::InvalidTolerance(tolerance));
    }
    let ranges: Vec<(AngleKey, ToleranceRange)> = angles
        .detected()
        .filter_map(|(key, degrees)| match ToleranceRange::around(degrees, tolerance) {
            Some(range) => Some((key, range)),
            None => {
                log::warn!("{}: no usable range around {} degrees, skipping", key, degrees);
                None
            }
        })
        .collect();
    if ranges.is_empty() {
        return Err(PoseError::NoDetectedAngles);
    }
    let name = name.trim();
    if name.is_empty() {
        return Err(PoseError::EmptyPoseName);
    }
    if name.contains(['/', '\\']) {
        return Err(PoseError::InvalidPoseName(name.to_string()));
    }

    let mut template = PoseTemplate::new(name);
    for (key, range) in ranges {
        template.set_range(key, range);
    }
    Ok(template)
}

/// Put `template` into `store`. An existing pose of the same name is replaced only
/// when `confirm_overwrite` agrees; otherwise the store is untouched.
pub fn commit_template(
    store: &mut TemplateStore,
    template: PoseTemplate,
    confirm_overwrite: impl FnOnce(&str) -> bool,
) -> Result<Option<Arc<PoseTemplate>>, PoseError> {
    if store.contains(template.name()) && !confirm_overwrite(template.name()) {
        return Err(PoseError::OverwriteDeclined(template.name().to_string()));
    }
    Ok(store.replace(template))
}

/// Where the reference image for `pose_name` is kept.
pub fn reference_image_path(reference_dir: impl AsRef<Path>, pose_name: &str) -> PathBuf {
    reference_dir
        .as_ref()
        .join(format!("{}.png", pose_name.trim().to_lowercase()))
}

/// Ask to store the calibration frame as the pose's reference image.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotRequest {
    pub pose_name: String,
    pub path: PathBuf,
}

/// Turns a captured pose into a persisted template.
#[derive(Debug, Clone)]
pub struct Calibrator {
    templates_path: PathBuf,
    reference_dir: PathBuf,
    tolerance: f64,
}

impl Calibrator {
    pub fn new(templates_path: impl Into<PathBuf>, reference_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_path: templates_path.into(),
            reference_dir: reference_dir.into(),
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    pub fn from_config(config: &CoachConfig) -> Self {
        Self::new(&config.templates_path, &config.reference_dir).with_tolerance(config.tolerance)
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn templates_path(&self) -> &Path {
        &self.templates_path
    }

    /// Build, commit and save a template for `pose_name`.
    ///
    /// On any refusal or I/O failure neither `store` nor the file on disk changes.
    pub fn calibrate(
        &self,
        store: &mut TemplateStore,
        pose_name: &str,
        angles: &PoseAngles,
        confirm_overwrite: impl FnOnce(&str) -> bool,
    ) -> Result<SnapshotRequest, PoseError> {
        let template = build_template(pose_name, angles, self.tolerance)?;
        let pose_name = template.name().to_string();

        let mut updated = store.clone();
        let previous = commit_template(&mut updated, template, confirm_overwrite)?;
        updated.save(&self.templates_path)?;
        *store = updated;

        log::info!(
            "{} pose '{}' with tolerance {}",
            if previous.is_some() { "recalibrated" } else { "calibrated" },
            pose_name,
            self.tolerance
        );
        Ok(SnapshotRequest {
            path: reference_image_path(&self.reference_dir, &pose_name),
            pose_name,
        })
    }
}
