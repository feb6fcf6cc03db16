//! Gesture module - pose samples in, game actions out
//!
//! Re-exports only. All logic in submodules.

mod types;
mod config;
mod cooldown;
mod calibration;
mod smoothing;
mod classifier;
mod sink;

pub use types::{Action, Point2, PoseJoints, PoseSample, PostureTag, ACTIONS};
pub use config::{ConfigError, GestureConfig, SmoothingConfig};
pub use cooldown::CooldownRegistry;
pub use calibration::{CalibrationState, CalibrationStep};
pub use smoothing::{OneEuroFilter, PoseSmoother};
pub use classifier::{CalibrationStatus, ClassifierResult, FrameMeasurements, GestureClassifier};
pub use sink::{dispatch, ActionSink};
