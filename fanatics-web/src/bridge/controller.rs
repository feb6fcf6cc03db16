//! Controller bridge - per-frame classification for JavaScript
//!
//! JS runs MediaPipe, calls `process_frame` with the flat landmark array,
//! and dispatches a key event for whatever action token comes back.
//! The classifier lives here for the lifetime of the page.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;
use std::fmt;

use crate::gesture::{
    Action, ClassifierResult, ConfigError, GestureClassifier, GestureConfig, PoseSample,
};
use crate::overlay::{action_label, calibration_text, posture_line, GuideLines};
use super::landmarks::{parse_pose, LandmarkError};

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Why a frame was dropped before reaching the HUD
#[derive(Debug, Clone, PartialEq)]
enum FrameError {
    Landmarks(LandmarkError),
    /// Non-finite timestamp or not after the previous frame
    Stale { now: f64 },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::Landmarks(e) => write!(f, "{}", e),
            FrameError::Stale { now } => {
                write!(f, "Frame at {}s dropped: timestamp not after the previous frame", now)
            }
        }
    }
}

impl From<LandmarkError> for FrameError {
    fn from(err: LandmarkError) -> Self {
        FrameError::Landmarks(err)
    }
}

/// Classifier plus the last frame's result (for HUD getters)
#[derive(Default)]
struct ControllerState {
    classifier: GestureClassifier,
    last_result: ClassifierResult,
}

impl ControllerState {
    fn with_config(config: GestureConfig) -> Self {
        Self {
            classifier: GestureClassifier::new(config),
            last_result: ClassifierResult::default(),
        }
    }

    /// Parse + classify one frame; a dropped frame keeps the previous HUD
    fn process(&mut self, data: &[f32], now: f64) -> Result<Option<Action>, FrameError> {
        let min_visibility = self.classifier.config().min_visibility;
        let sample = parse_pose(data, min_visibility)?;

        let result = self.classifier.classify(&sample, now);
        if result.stale {
            return Err(FrameError::Stale { now });
        }
        self.last_result = result;
        Ok(self.last_result.action)
    }
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static CONTROLLER: RefCell<ControllerState> = RefCell::new(ControllerState::default());
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// (Re)create the classifier from a JSON config; "" = defaults
#[wasm_bindgen]
pub fn init_controller(config_json: &str) -> Result<(), JsValue> {
    let config = if config_json.trim().is_empty() {
        GestureConfig::default()
    } else {
        GestureConfig::from_json(config_json)?
    };

    CONTROLLER.with(|cell| {
        *cell.borrow_mut() = ControllerState::with_config(config);
    });
    web_sys::console::log_1(&"✅ Gesture controller ready - join hands to calibrate".into());
    Ok(())
}

/// Classify a frame stamped with the current wall clock
///
/// Returns the action token to press, if any.
#[wasm_bindgen]
pub fn process_frame(data: &[f32]) -> Option<String> {
    process_frame_at(data, js_sys::Date::now() / 1000.0)
}

/// Classify a frame with an explicit timestamp (seconds)
///
/// A dropped frame (bad payload, stale timestamp) is reported on the
/// console and leaves the HUD showing the previous result.
#[wasm_bindgen]
pub fn process_frame_at(data: &[f32], now: f64) -> Option<String> {
    let outcome = CONTROLLER.with(|cell| {
        let mut state = cell.borrow_mut();
        let was_calibrated = state.classifier.is_calibrated();
        let outcome = state.process(data, now);
        if !was_calibrated && state.classifier.is_calibrated() {
            if let Some(baseline) = state.classifier.calibration().baseline() {
                web_sys::console::log_1(
                    &format!("🧍 Calibrated - baseline hip y {:.3}", baseline).into(),
                );
            }
        }
        outcome
    });

    match outcome {
        Ok(action) => action.map(|a| a.as_str().to_string()),
        Err(e) => {
            web_sys::console::warn_1(&e.to_string().into());
            None
        }
    }
}

/// Frame with no pose
#[wasm_bindgen]
pub fn process_no_detection() {
    CONTROLLER.with(|cell| {
        let mut state = cell.borrow_mut();
        // Timestamp is irrelevant when nothing is detected
        state.last_result = state
            .classifier
            .classify(&PoseSample::NotDetected, 0.0);
    });
}

/// Drop calibration and cooldowns (keeps the config)
#[wasm_bindgen]
pub fn reset_controller() {
    CONTROLLER.with(|cell| {
        let mut state = cell.borrow_mut();
        state.classifier.reset();
        state.last_result = ClassifierResult::default();
    });
    web_sys::console::log_1(&"ℹ️ Gesture controller reset".into());
}

#[wasm_bindgen]
pub fn is_calibrated() -> bool {
    CONTROLLER.with(|cell| cell.borrow().classifier.is_calibrated())
}

/// "Posture: Hands Apart | Standing | Center"
#[wasm_bindgen]
pub fn get_posture_text() -> String {
    CONTROLLER.with(|cell| posture_line(&cell.borrow().last_result))
}

/// Flash label for the action fired on the last frame, "" if none
#[wasm_bindgen]
pub fn get_action_text() -> String {
    with_last_action(|a| action_label(a).text.to_string())
}

/// CSS colour for the flash label
#[wasm_bindgen]
pub fn get_action_color() -> String {
    with_last_action(|a| action_label(a).color.css())
}

/// `KeyboardEvent.key` for the action fired on the last frame
#[wasm_bindgen]
pub fn get_action_key() -> String {
    with_last_action(|a| a.key().to_string())
}

#[wasm_bindgen]
pub fn get_calibration_text() -> Option<String> {
    CONTROLLER.with(|cell| calibration_text(&cell.borrow().last_result))
}

/// Guide lines in pixels:
/// [center_x, reference_y, hip_y, baseline_y, left_bound, right_bound],
/// -1 for a line that is not shown
#[wasm_bindgen]
pub fn get_guide_lines(width: u32, height: u32) -> Vec<i32> {
    CONTROLLER.with(|cell| {
        let state = cell.borrow();
        let config = state.classifier.config();
        let px = GuideLines::from_result(&state.last_result, config.left_bound, config.right_bound)
            .to_pixels(width, height);
        vec![
            px.center_x,
            px.reference_y,
            px.hip_y.unwrap_or(-1),
            px.baseline_y.unwrap_or(-1),
            px.left_bound,
            px.right_bound,
        ]
    })
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

fn with_last_action(f: impl FnOnce(Action) -> String) -> String {
    CONTROLLER.with(|cell| cell.borrow().last_result.action.map(f).unwrap_or_default())
}

/// Copy of the last frame's result (for native callers / tests)
pub fn last_result() -> ClassifierResult {
    CONTROLLER.with(|cell| cell.borrow().last_result.clone())
}
