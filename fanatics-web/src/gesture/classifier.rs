//! Pose → game action classifier
//!
//! One call per frame. Three independent reads of the pose:
//! - hands joined / apart (drives calibration)
//! - vertical: hip height against the calibrated baseline (jump / crouch)
//! - lateral: shoulder midpoint against the left/right bands
//!
//! Every candidate action passes its own cooldown gate. If a vertical and a
//! lateral action both fire on one frame, both timers are updated but the
//! lateral one is the emitted action (it is evaluated last and overwrites).

use tracing::{debug, warn};

use super::calibration::{CalibrationState, CalibrationStep};
use super::config::GestureConfig;
use super::cooldown::CooldownRegistry;
use super::smoothing::PoseSmoother;
use super::types::{Action, PoseSample, PostureTag};

// ============================================================================
// RESULT
// ============================================================================

/// Calibration window in progress
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalibrationStatus {
    /// Fraction of the window elapsed, 0..1
    pub progress: f32,
}

impl CalibrationStatus {
    pub fn message(&self) -> String {
        format!(
            "Calibrating posture... Hold hands joined ({:.0}%)",
            self.progress * 100.0
        )
    }
}

/// Averages the thresholds were applied to (after optional smoothing)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameMeasurements {
    pub avg_shoulder_x: f32,
    pub avg_hip_y: f32,
}

/// Output of one `classify` call
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassifierResult {
    /// Hands state, then vertical state (once calibrated), then lateral state
    pub posture: Vec<PostureTag>,
    /// Action for the sink, at most one per frame
    pub action: Option<Action>,
    /// Set while the calibration window is open
    pub calibration: Option<CalibrationStatus>,
    /// `None` when nothing was classified
    pub measurements: Option<FrameMeasurements>,
    pub baseline_hip_y: Option<f32>,
    /// Frame dropped for a non-finite or non-increasing timestamp
    pub stale: bool,
}

impl ClassifierResult {
    /// Nothing detected this frame
    pub fn is_empty(&self) -> bool {
        self.posture.is_empty()
    }

    pub fn has_tag(&self, tag: PostureTag) -> bool {
        self.posture.contains(&tag)
    }

    /// Posture tags joined with " | "
    pub fn posture_text(&self) -> String {
        self.posture
            .iter()
            .map(PostureTag::as_str)
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

// ============================================================================
// CLASSIFIER
// ============================================================================

/// Stateful gesture classifier for a single player
pub struct GestureClassifier {
    config: GestureConfig,
    calibration: CalibrationState,
    cooldowns: CooldownRegistry,
    smoother: Option<PoseSmoother>,
    /// Timestamp of the last classified frame
    last_frame: Option<f64>,
}

impl GestureClassifier {
    /// Build a classifier; `config` is expected to be validated
    pub fn new(config: GestureConfig) -> Self {
        let smoother = config.smoothing.map(PoseSmoother::new);
        Self {
            config,
            calibration: CalibrationState::Idle,
            cooldowns: CooldownRegistry::new(),
            smoother,
            last_frame: None,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn calibration(&self) -> &CalibrationState {
        &self.calibration
    }

    pub fn cooldowns(&self) -> &CooldownRegistry {
        &self.cooldowns
    }

    pub fn is_calibrated(&self) -> bool {
        self.calibration.is_calibrated()
    }

    /// Back to the freshly constructed state
    pub fn reset(&mut self) {
        debug!("classifier reset");
        self.calibration = CalibrationState::Idle;
        self.cooldowns.clear();
        if let Some(smoother) = self.smoother.as_mut() {
            smoother.reset();
        }
        self.last_frame = None;
    }

    /// Classify one frame
    ///
    /// `now` is in seconds and must be finite and increase strictly between
    /// detected frames; a stale frame is ignored like a missing detection
    /// and flagged with `stale`.
    ///
    /// On the frame that completes calibration only `space` is emitted:
    /// vertical and lateral tags are reported, but their actions are neither
    /// emitted nor recorded in the cooldowns. The desktop version pressed
    /// those keys too on that frame.
    pub fn classify(&mut self, sample: &PoseSample, now: f64) -> ClassifierResult {
        let Some(joints) = sample.joints() else {
            return ClassifierResult::default();
        };

        // NaN fails every comparison, so check finiteness explicitly
        if !now.is_finite() || self.last_frame.is_some_and(|last| now <= last) {
            warn!(now, last = ?self.last_frame, "out-of-order frame ignored");
            return ClassifierResult {
                stale: true,
                ..Default::default()
            };
        }
        self.last_frame = Some(now);

        let joints = if self.config.mirror_input {
            joints.mirrored()
        } else {
            *joints
        };

        let mut result = ClassifierResult::default();

        // Hands
        let hands_joined = joints.hands_joined(self.config.hands_joined_threshold);
        result.posture.push(if hands_joined {
            PostureTag::HandsJoined
        } else {
            PostureTag::HandsApart
        });

        let (avg_shoulder_x, avg_hip_y) = match self.smoother.as_mut() {
            Some(smoother) => smoother.filter(now, joints.avg_shoulder_x(), joints.avg_hip_y()),
            None => (joints.avg_shoulder_x(), joints.avg_hip_y()),
        };
        result.measurements = Some(FrameMeasurements {
            avg_shoulder_x,
            avg_hip_y,
        });

        // Calibration
        let step = self.calibration.advance(
            hands_joined,
            avg_hip_y,
            now,
            self.config.calibration_secs,
        );
        match step {
            CalibrationStep::Collecting { progress } => {
                result.calibration = Some(CalibrationStatus { progress });
            }
            CalibrationStep::Completed { .. } => {
                // One-shot start signal, not subject to the cooldown gate
                self.cooldowns.record(Action::Space, now);
                result.action = Some(Action::Space);
                debug!(now, "start action emitted");
            }
            CalibrationStep::Inactive => {}
        }
        // The start signal owns the completion frame
        let gate_open = !matches!(step, CalibrationStep::Completed { .. });

        // Vertical
        result.baseline_hip_y = self.calibration.baseline();
        if let Some(baseline) = result.baseline_hip_y {
            let (tag, candidate) = self.classify_vertical(baseline, avg_hip_y);
            result.posture.push(tag);
            if let Some(action) = candidate {
                if gate_open && self.cooldowns.try_fire(action, now, self.config.cooldown_secs) {
                    debug!(action = action.as_str(), now, "vertical action");
                    result.action = Some(action);
                }
            }
        }

        // Lateral
        let (tag, candidate) = self.classify_lateral(avg_shoulder_x);
        result.posture.push(tag);
        if let Some(action) = candidate {
            if gate_open && self.cooldowns.try_fire(action, now, self.config.cooldown_secs) {
                debug!(action = action.as_str(), now, "lateral action");
                result.action = Some(action);
            }
        }

        result
    }

    /// Jump is checked before crouch; a value matching neither is standing
    fn classify_vertical(&self, baseline_hip_y: f32, avg_hip_y: f32) -> (PostureTag, Option<Action>) {
        // y grows downward: positive delta = hips above baseline
        let delta = baseline_hip_y - avg_hip_y;
        if delta > self.config.jump_threshold {
            (PostureTag::Jumping, Some(Action::Up))
        } else if -delta > self.config.crouch_threshold {
            (PostureTag::Crouching, Some(Action::Down))
        } else {
            (PostureTag::Standing, None)
        }
    }

    fn classify_lateral(&self, avg_shoulder_x: f32) -> (PostureTag, Option<Action>) {
        if avg_shoulder_x < self.config.left_bound {
            (PostureTag::Left, Some(Action::Left))
        } else if avg_shoulder_x > self.config.right_bound {
            (PostureTag::Right, Some(Action::Right))
        } else {
            (PostureTag::Center, None)
        }
    }
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

// ============================================================================
// TESTS
// ============================================================================
