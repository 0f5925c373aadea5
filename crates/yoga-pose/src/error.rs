use std::fmt;

/// Failures that cross the crate boundary: persistence I/O and calibration refusals.
///
/// Per-frame anomalies (missing landmarks, unknown pose names) are never errors;
/// they show up as undetected readings and failing verdicts instead.
#[derive(Debug)]
pub enum PoseError {
    Io(std::io::Error),
    Parse(String),
    EmptyPoseName,
    InvalidPoseName(String),
    NoDetectedAngles,
    InvalidTolerance(f64),
    OverwriteDeclined(String),
}

impl fmt::Display for PoseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoseError::Io(err) => write!(f, "io error: {err}"),
            PoseError::Parse(msg) => write!(f, "parse error: {msg}"),
            PoseError::EmptyPoseName => write!(f, "pose name cannot be empty"),
            PoseError::InvalidPoseName(name) => {
                write!(f, "pose name '{name}' cannot contain path separators")
            }
            PoseError::NoDetectedAngles => {
                write!(f, "no joint angle was detected in the captured pose")
            }
            PoseError::InvalidTolerance(t) => {
                write!(f, "tolerance must be a finite, non-negative number of degrees (got {t})")
            }
            PoseError::OverwriteDeclined(name) => {
                write!(f, "pose '{name}' already exists and overwrite was declined")
            }
        }
    }
}

impl std::error::Error for PoseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PoseError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PoseError {
    fn from(err: std::io::Error) -> Self {
        PoseError::Io(err)
    }
}

impl From<toml::de::Error> for PoseError {
    fn from(err: toml::de::Error) -> Self {
        PoseError::Parse(err.to_string())
    }
}

impl From<toml::ser::Error> for PoseError {
    fn from(err: toml::ser::Error) -> Self {
        PoseError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for PoseError {
    fn from(err: serde_json::Error) -> Self {
        PoseError::Parse(err.to_string())
    }
}
