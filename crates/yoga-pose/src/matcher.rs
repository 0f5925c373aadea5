use {
    crate::{
        ANGLE_KEY_COUNT, AngleKey, LastVerdict, PoseAngles, PoseTemplate, SharedTemplateStore,
        TemplateStore,
    },
    std::sync::Arc,
};

/// Anything the matcher can look pose templates up in.
pub trait TemplateSource {
    fn template(&self, name: &str) -> Option<Arc<PoseTemplate>>;
}

impl TemplateSource for TemplateStore {
    fn template(&self, name: &str) -> Option<Arc<PoseTemplate>> {
        self.get(name)
    }
}

impl TemplateSource for SharedTemplateStore {
    fn template(&self, name: &str) -> Option<Arc<PoseTemplate>> {
        self.get(name)
    }
}

/// Per-joint pass/fail for one frame plus the aggregate verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    verdicts: [bool; ANGLE_KEY_COUNT],
    correct: bool,
}

impl MatchResult {
    /// Aggregate is the AND of all joints.
    pub fn from_verdicts(verdicts: [bool; ANGLE_KEY_COUNT]) -> Self {
        Self {
            verdicts,
            correct: verdicts.iter().all(|&v| v),
        }
    }

    /// Every joint failing; the result for unknown poses.
    pub fn all_fail() -> Self {
        Self::from_verdicts([false; ANGLE_KEY_COUNT])
    }

    pub fn is_correct(&self) -> bool {
        self.correct
    }

    pub fn passed(&self, key: AngleKey) -> bool {
        self.verdicts[key.index()]
    }

    pub fn verdicts(&self) -> impl Iterator<Item = (AngleKey, bool)> + '_ {
        AngleKey::ALL.into_iter().map(|key| (key, self.passed(key)))
    }

    pub fn failed_keys(&self) -> impl Iterator<Item = AngleKey> + '_ {
        self.verdicts().filter(|(_, ok)| !ok).map(|(key, _)| key)
    }
}

/// Judge every joint against `template`. Undetected joints fail.
pub fn match_template(angles: &PoseAngles, template: &PoseTemplate) -> MatchResult {
    let mut verdicts = [false; ANGLE_KEY_COUNT];
    for key in AngleKey::ALL {
        verdicts[key.index()] = angles
            .get(key)
            .degrees()
            .is_some_and(|degrees| template.range(key).contains(degrees));
    }
    MatchResult::from_verdicts(verdicts)
}

/// Judge `angles` against the pose named `pose_name`; an unknown name fails every joint.
pub fn match_pose(
    angles: &PoseAngles,
    pose_name: &str,
    templates: &impl TemplateSource,
) -> MatchResult {
    match templates.template(pose_name) {
        Some(template) => match_template(angles, &template),
        None => MatchResult::all_fail(),
    }
}

/// Frame-by-frame matcher that publishes each aggregate to a [`LastVerdict`].
pub struct PoseMatcher {
    verdict: LastVerdict,
    missing_pose: Option<String>,
}

impl PoseMatcher {
    pub fn new(verdict: LastVerdict) -> Self {
        Self {
            verdict,
            missing_pose: None,
        }
    }

    /// Handle for pollers of the most recent verdict.
    pub fn last_verdict(&self) -> LastVerdict {
        self.verdict.clone()
    }

    pub fn evaluate(
        &mut self,
        angles: &PoseAngles,
        pose_name: &str,
        templates: &impl TemplateSource,
    ) -> MatchResult {
        let result = match templates.template(pose_name) {
            Some(template) => {
                self.missing_pose = None;
                match_template(angles, &template)
            }
            None => {
                // once per name, not once per frame
                if self.missing_pose.as_deref() != Some(pose_name) {
                    log::warn!("pose '{}' is not in the template store", pose_name);
                    self.missing_pose = Some(pose_name.to_string());
                }
                MatchResult::all_fail()
            }
        };
        log::debug!(
            "pose '{}': correct={} failing={:?}",
            pose_name,
            result.is_correct(),
            result.failed_keys().collect::<Vec<_>>()
        );
        self.verdict.publish(&result);
        result
    }
}
