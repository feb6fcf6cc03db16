//! Gesture thresholds and timing
//!
//! Defaults are the values tuned on a 1280x720 webcam feed.
//! Can be loaded from JSON (missing fields keep their defaults).

use std::fmt;
use serde::{Deserialize, Serialize};

// ============================================================================
// CONFIG
// ============================================================================

/// Classifier configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Max per-axis wrist distance for "hands joined"
    pub hands_joined_threshold: f32,
    /// Hip rise above baseline that counts as a jump
    pub jump_threshold: f32,
    /// Hip drop below baseline that counts as a crouch
    pub crouch_threshold: f32,
    /// Average shoulder x below this is "Left"
    pub left_bound: f32,
    /// Average shoulder x above this is "Right"
    pub right_bound: f32,
    /// Minimum seconds between two emissions of the same action
    pub cooldown_secs: f64,
    /// Seconds hands must stay joined to calibrate
    pub calibration_secs: f64,
    /// Joints below this visibility are treated as missing (0 = off)
    pub min_visibility: f32,
    /// Flip x before classifying (camera feed not mirrored upstream)
    pub mirror_input: bool,
    /// Optional jitter filter on the tracked averages
    pub smoothing: Option<SmoothingConfig>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            hands_joined_threshold: 0.05,
            jump_threshold: 0.04,
            crouch_threshold: 0.05,
            left_bound: 0.4,
            right_bound: 0.6,
            cooldown_secs: 1.0,
            calibration_secs: 1.0,
            min_visibility: 0.0,
            mirror_input: false,
            smoothing: None,
        }
    }
}

/// One Euro filter parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Cutoff (Hz) at rest - lower = smoother
    pub min_cutoff: f32,
    /// Speed coefficient - higher = less lag on fast moves
    pub beta: f32,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            min_cutoff: 1.0,
            beta: 0.15,
        }
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Errors from loading or validating a config
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Parse(String),
    NotFinite(&'static str),
    Negative(&'static str),
    NonPositive(&'static str),
    OutOfRange(&'static str),
    InvertedBounds { left: f32, right: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "Invalid gesture config: {}", e),
            ConfigError::NotFinite(field) => write!(f, "{} must be a finite number", field),
            ConfigError::Negative(field) => write!(f, "{} must not be negative", field),
            ConfigError::NonPositive(field) => write!(f, "{} must be greater than zero", field),
            ConfigError::OutOfRange(field) => write!(f, "{} must be within 0..=1", field),
            ConfigError::InvertedBounds { left, right } => write!(
                f,
                "left_bound ({}) must be below right_bound ({})",
                left, right
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

fn check_threshold(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite(name));
    }
    if value < 0.0 {
        return Err(ConfigError::Negative(name));
    }
    Ok(())
}

fn check_unit(name: &'static str, value: f32) -> Result<(), ConfigError> {
    check_threshold(name, value)?;
    if value > 1.0 {
        return Err(ConfigError::OutOfRange(name));
    }
    Ok(())
}

fn check_duration(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite(name));
    }
    if value <= 0.0 {
        return Err(ConfigError::NonPositive(name));
    }
    Ok(())
}

impl GestureConfig {
    /// Parse a JSON document and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GestureConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        // Plain data with no maps or non-string keys; serialization cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Reject values the classifier cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_threshold("hands_joined_threshold", self.hands_joined_threshold)?;
        check_threshold("jump_threshold", self.jump_threshold)?;
        check_threshold("crouch_threshold", self.crouch_threshold)?;
        check_unit("left_bound", self.left_bound)?;
        check_unit("right_bound", self.right_bound)?;
        check_unit("min_visibility", self.min_visibility)?;
        check_duration("cooldown_secs", self.cooldown_secs)?;
        check_duration("calibration_secs", self.calibration_secs)?;

        if self.left_bound >= self.right_bound {
            return Err(ConfigError::InvertedBounds {
                left: self.left_bound,
                right: self.right_bound,
            });
        }

        if let Some(smoothing) = &self.smoothing {
            check_threshold("smoothing.beta", smoothing.beta)?;
            if !smoothing.min_cutoff.is_finite() {
                return Err(ConfigError::NotFinite("smoothing.min_cutoff"));
            }
            if smoothing.min_cutoff <= 0.0 {
                return Err(ConfigError::NonPositive("smoothing.min_cutoff"));
            }
        }

        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
