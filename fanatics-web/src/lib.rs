//! Fitness Fanatics - body-pose game controller
//!
//! JavaScript runs MediaPipe Pose on the webcam feed and hands each frame's
//! landmarks to this module. Rust classifies the pose (calibration, jump,
//! crouch, lean) and returns the key to press. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

pub mod gesture;
pub mod overlay;
pub mod bridge;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    init_controller, process_frame, process_frame_at, process_no_detection, reset_controller,
    is_calibrated, get_posture_text, get_action_text, get_action_color, get_action_key,
    get_calibration_text, get_guide_lines,
};
pub use bridge::{last_result, parse_pose, Landmark, LandmarkError};
pub use gesture::{Action, ClassifierResult, GestureClassifier, GestureConfig, PoseSample};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
