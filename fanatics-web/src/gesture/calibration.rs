//! Hands-joined calibration
//!
//! The player holds both wrists together for a full calibration window.
//! Hip height is sampled throughout; the smallest y (most upright stance)
//! becomes the baseline for jump/crouch detection. Any break in the
//! gesture before the window ends restarts from scratch.

use tracing::debug;

/// Calibration lifecycle
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CalibrationState {
    #[default]
    Idle,
    Collecting {
        start_time: f64,
        /// Average hip y, oldest first
        samples: Vec<f32>,
    },
    Calibrated {
        baseline_hip_y: f32,
    },
}

/// Outcome of feeding one frame into calibration
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CalibrationStep {
    /// Not calibrating (hands apart, or already calibrated)
    Inactive,
    /// Inside the window; `progress` in 0..1
    Collecting { progress: f32 },
    /// Window completed on this frame
    Completed { baseline_hip_y: f32 },
}

impl CalibrationState {
    pub fn baseline(&self) -> Option<f32> {
        match self {
            CalibrationState::Calibrated { baseline_hip_y } => Some(*baseline_hip_y),
            _ => None,
        }
    }

    pub fn is_calibrated(&self) -> bool {
        matches!(self, CalibrationState::Calibrated { .. })
    }

    /// Advance with one detected frame
    ///
    /// Once `Calibrated` this is a no-op; there is no automatic re-calibration.
    pub fn advance(
        &mut self,
        hands_joined: bool,
        avg_hip_y: f32,
        now: f64,
        window_secs: f64,
    ) -> CalibrationStep {
        if self.is_calibrated() {
            return CalibrationStep::Inactive;
        }

        if !hands_joined {
            if matches!(self, CalibrationState::Collecting { .. }) {
                debug!("hands separated, calibration restarted");
            }
            *self = CalibrationState::Idle;
            return CalibrationStep::Inactive;
        }

        if let CalibrationState::Idle = self {
            debug!(start_time = now, "calibration started");
            *self = CalibrationState::Collecting {
                start_time: now,
                samples: Vec::new(),
            };
        }

        let CalibrationState::Collecting { start_time, samples } = self else {
            return CalibrationStep::Inactive;
        };

        let elapsed = now - *start_time;
        if elapsed < window_secs {
            samples.push(avg_hip_y);
            let progress = (elapsed / window_secs).clamp(0.0, 1.0) as f32;
            return CalibrationStep::Collecting { progress };
        }

        // Always at least one sample (the frame that opened the window);
        // fall back to the current frame regardless.
        let baseline_hip_y = samples
            .iter()
            .copied()
            .fold(None, |min: Option<f32>, y| Some(min.map_or(y, |m| m.min(y))))
            .unwrap_or(avg_hip_y);

        debug!(baseline_hip_y, samples = samples.len(), "calibration complete");
        *self = CalibrationState::Calibrated { baseline_hip_y };
        CalibrationStep::Completed { baseline_hip_y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        assert_eq!(CalibrationState::default(), CalibrationState::Idle);
    }

    #[test]
    fn test_baseline_is_minimum_sample() {
        let mut state = CalibrationState::Idle;
        state.advance(true, 0.50, 0.0, 1.0);
        state.advance(true, 0.48, 0.4, 1.0);
        state.advance(true, 0.52, 0.8, 1.0);

        let step = state.advance(true, 0.70, 1.0, 1.0);
        assert_eq!(step, CalibrationStep::Completed { baseline_hip_y: 0.48 });
        assert_eq!(state.baseline(), Some(0.48));
    }

    #[test]
    fn test_break_resets_to_idle() {
        let mut state = CalibrationState::Idle;
        for i in 0..10 {
            state.advance(true, 0.5, i as f64 * 0.1, 1.0);
        }
        assert!(matches!(state, CalibrationState::Collecting { .. }));

        state.advance(false, 0.5, 0.95, 1.0);
        assert_eq!(state, CalibrationState::Idle);

        // Restarted window needs a full second again
        assert!(matches!(
            state.advance(true, 0.5, 1.0, 1.0),
            CalibrationStep::Collecting { .. }
        ));
        assert!(matches!(
            state.advance(true, 0.5, 1.5, 1.0),
            CalibrationStep::Collecting { .. }
        ));
    }

    #[test]
    fn test_progress() {
        let mut state = CalibrationState::Idle;
        state.advance(true, 0.5, 10.0, 1.0);
        match state.advance(true, 0.5, 10.25, 1.0) {
            CalibrationStep::Collecting { progress } => assert!((progress - 0.25).abs() < 1e-6),
            other => panic!("unexpected step {:?}", other),
        }
    }

    #[test]
    fn test_calibrated_is_terminal() {
        let mut state = CalibrationState::Calibrated { baseline_hip_y: 0.5 };
        assert_eq!(state.advance(false, 0.9, 5.0, 1.0), CalibrationStep::Inactive);
        assert_eq!(state.advance(true, 0.9, 6.0, 1.0), CalibrationStep::Inactive);
        assert_eq!(state.baseline(), Some(0.5));
    }
}
