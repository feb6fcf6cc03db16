//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod landmarks;
mod controller;

pub use landmarks::{
    parse_pose,
    Landmark,
    LandmarkError,
    // Constants
    LANDMARK_COUNT, STRIDE_XYZ, STRIDE_XYZV,
    LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_WRIST, RIGHT_WRIST,
    LEFT_HIP, RIGHT_HIP,
    REQUIRED_LANDMARKS,
};

pub use controller::{
    // WASM entry points
    init_controller,
    process_frame,
    process_frame_at,
    process_no_detection,
    reset_controller,
    is_calibrated,
    get_posture_text,
    get_action_text,
    get_action_color,
    get_action_key,
    get_calibration_text,
    get_guide_lines,
    // Internal API
    last_result,
};
