//! Joint-angle pose checking.
//!
//! Turns per-frame 3D body landmarks into six joint angles, compares them with
//! calibrated per-pose tolerance ranges, and reports per-joint and overall
//! verdicts. Calibration captures a correctly held pose into a new template.

pub mod angle;
pub mod annotate;
pub mod calibrate;
pub mod config;
pub mod error;
pub mod extract;
pub mod joint;
pub mod landmark;
pub mod matcher;
pub mod session;
pub mod store;
pub mod template;
pub mod verdict;

pub use angle::{AngleReading, joint_angle};
pub use annotate::{JointAnnotation, Verdict, annotate};
pub use calibrate::{
    Calibrator, DEFAULT_TOLERANCE, SnapshotRequest, build_template, commit_template,
    reference_image_path,
};
pub use config::{CoachConfig, LogSettings};
pub use error::PoseError;
pub use extract::{PoseAngles, extract_angle, extract_angles};
pub use joint::{ANGLE_KEY_COUNT, AngleKey};
pub use landmark::{BODY_LANDMARK_COUNT, ImageLandmarks, LandmarkFrame, LandmarkName, LandmarkSet};
pub use matcher::{MatchResult, PoseMatcher, TemplateSource, match_pose, match_template};
pub use session::{
    DietPlan, HardwareSignal, NoSignal, SerialSignal, Session, SessionPlan, SessionSummary,
};
pub use store::{SharedTemplateStore, TemplateStore};
pub use template::{PoseTemplate, ToleranceRange};
pub use verdict::LastVerdict;
