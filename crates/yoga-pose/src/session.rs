use {
    crate::{CoachConfig, TemplateStore},
    std::io::{self, Write},
};

/// Which poses are practised today and which wait for the next day.
///
/// Today takes the first poses in store order; the rest carry over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPlan {
    today: Vec<String>,
    next_day: Vec<String>,
}

impl SessionPlan {
    pub fn from_store(store: &TemplateStore, per_session: usize) -> Self {
        let mut today: Vec<String> = store.names().map(str::to_string).collect();
        let next_day = today.split_off(per_session.min(today.len()));
        Self { today, next_day }
    }

    pub fn today(&self) -> &[String] {
        &self.today
    }

    pub fn next_day(&self) -> &[String] {
        &self.next_day
    }
}

/// Feedback device told when a pose was held wrong.
pub trait HardwareSignal {
    fn signal_wrong_pose(&mut self) -> io::Result<()>;
}

/// Writes a fixed payload to a serial port (or any other writer).
pub struct SerialSignal<W: Write> {
    port: W,
    payload: Vec<u8>,
}

impl<W: Write> SerialSignal<W> {
    pub fn new(port: W, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            port,
            payload: payload.into(),
        }
    }

    pub fn from_config(port: W, config: &CoachConfig) -> Self {
        Self::new(port, config.wrong_pose_signal.as_bytes())
    }

    pub fn into_inner(self) -> W {
        self.port
    }
}

impl<W: Write> HardwareSignal for SerialSignal<W> {
    fn signal_wrong_pose(&mut self) -> io::Result<()> {
        log::debug!("writing {:?} to feedback device", String::from_utf8_lossy(&self.payload));
        self.port.write_all(&self.payload)?;
        self.port.flush()
    }
}

/// Stand-in when no feedback device could be opened.
pub struct NoSignal;

impl HardwareSignal for NoSignal {
    fn signal_wrong_pose(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::NotConnected, "feedback device not open"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DietPlan {
    HighProteinLowCarb,
    Balanced,
    HighFiber,
}

impl DietPlan {
    pub fn for_correct_poses(correct: usize) -> Self {
        match correct {
            0 | 1 => DietPlan::HighProteinLowCarb,
            2 => DietPlan::Balanced,
            _ => DietPlan::HighFiber,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DietPlan::HighProteinLowCarb => "High-protein, low-carb diet plan.",
            DietPlan::Balanced => "Balanced diet with moderate calories.",
            DietPlan::HighFiber => "High-fiber, moderate-protein diet.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub total: usize,
    pub correct: usize,
    pub wrong: usize,
    pub calories: u32,
    pub diet: DietPlan,
    pub next_day_poses: Vec<String>,
}

/// One day's practice: walks today's poses and tallies the outcomes.
#[derive(Debug, Clone)]
pub struct Session {
    plan: SessionPlan,
    index: usize,
    correct: usize,
    wrong: usize,
    calories_per_pose: u32,
}

impl Session {
    pub fn new(plan: SessionPlan, calories_per_pose: u32) -> Self {
        Self {
            plan,
            index: 0,
            correct: 0,
            wrong: 0,
            calories_per_pose,
        }
    }

    pub fn from_config(store: &TemplateStore, config: &CoachConfig) -> Self {
        Self::new(
            SessionPlan::from_store(store, config.poses_per_session),
            config.calories_per_pose,
        )
    }

    pub fn plan(&self) -> &SessionPlan {
        &self.plan
    }

    pub fn current_pose(&self) -> Option<&str> {
        self.plan.today.get(self.index).map(String::as_str)
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.plan.today.len()
    }

    /// Record the outcome of the current pose and move on. A wrong pose fires
    /// `signal`; a signal failure is logged and otherwise ignored.
    ///
    /// Returns the next pose, or `None` when the session is over.
    pub fn complete(&mut self, correct: bool, signal: &mut dyn HardwareSignal) -> Option<&str> {
        let Some(pose) = self.current_pose() else {
            log::warn!("pose completed after the session finished");
            return None;
        };
        log::info!("pose '{}' finished {}", pose, if correct { "correct" } else { "wrong" });

        if correct {
            self.correct += 1;
        } else {
            self.wrong += 1;
            if let Err(err) = signal.signal_wrong_pose() {
                log::warn!("could not signal wrong pose: {}", err);
            }
        }
        self.index += 1;
        self.current_pose()
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            total: self.plan.today.len(),
            correct: self.correct,
            wrong: self.wrong,
            calories: self.correct as u32 * self.calories_per_pose,
            diet: DietPlan::for_correct_poses(self.correct),
            next_day_poses: self.plan.next_day.clone(),
        }
    }
}
