use {
    crate::{DEFAULT_TOLERANCE, PoseError},
    serde::Deserialize,
    std::{fs, path::{Path, PathBuf}},
    yoga_base::{LogConfig, log::LevelFilter, logging::default_level},
};

/// Settings for calibration and practice sessions, read from TOML.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CoachConfig {
    /// Pose template file
    #[serde(default = "default_templates_path")]
    pub templates_path: PathBuf,
    /// Directory holding one reference image per pose
    #[serde(default = "default_reference_dir")]
    pub reference_dir: PathBuf,
    /// Calibration tolerance in degrees
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_poses_per_session")]
    pub poses_per_session: usize,
    #[serde(default = "default_calories_per_pose")]
    pub calories_per_pose: u32,
    /// Bytes sent to the feedback device when a pose is held wrong
    #[serde(default = "default_wrong_pose_signal")]
    pub wrong_pose_signal: String,
    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct LogSettings {
    /// `error`, `warn`, `info`, `debug`, `trace` or `off`; build default when absent
    pub level: Option<String>,
    /// Log directory; stdout when absent
    pub dir: Option<PathBuf>,
}

fn default_templates_path() -> PathBuf { PathBuf::from("pose_details.toml") }
fn default_reference_dir() -> PathBuf { PathBuf::from("static/poses") }
fn default_tolerance() -> f64 { DEFAULT_TOLERANCE }
fn default_poses_per_session() -> usize { 3 }
fn default_calories_per_pose() -> u32 { 5 }
fn default_wrong_pose_signal() -> String { "*0#".to_string() }

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            templates_path: default_templates_path(),
            reference_dir: default_reference_dir(),
            tolerance: default_tolerance(),
            poses_per_session: default_poses_per_session(),
            calories_per_pose: default_calories_per_pose(),
            wrong_pose_signal: default_wrong_pose_signal(),
            log: LogSettings::default(),
        }
    }
}

impl CoachConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PoseError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Like [`CoachConfig::load`], but any failure falls back to the defaults.
    ///
    /// The failure is returned with the defaults for the caller to report.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<PoseError>) {
        match Self::load(path) {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    pub fn with_templates_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.templates_path = path.into();
        self
    }

    pub fn with_reference_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.reference_dir = dir.into();
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_poses_per_session(mut self, count: usize) -> Self {
        self.poses_per_session = count;
        self
    }

    pub fn with_calories_per_pose(mut self, calories: u32) -> Self {
        self.calories_per_pose = calories;
        self
    }

    pub fn with_wrong_pose_signal(mut self, signal: impl Into<String>) -> Self {
        self.wrong_pose_signal = signal.into();
        self
    }

    /// Logger settings; an unrecognised level name falls back to the build default.
    pub fn log_config(&self) -> LogConfig {
        let level = self
            .log
            .level
            .as_deref()
            .and_then(|level| level.parse::<LevelFilter>().ok())
            .unwrap_or_else(default_level);
        LogConfig {
            level,
            dir: self.log.dir.clone(),
        }
    }
}
