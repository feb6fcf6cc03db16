//! MediaPipe landmark parsing
//!
//! JavaScript hands over the pose as a flat Float32Array. This module turns
//! it into a `PoseSample`, degrading anything unusable to `NotDetected`.

use std::fmt;
use crate::gesture::{Point2, PoseJoints, PoseSample};

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const LANDMARK_COUNT: usize = 33;

pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;

/// Joints the classifier needs
pub const REQUIRED_LANDMARKS: [usize; 6] = [
    LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_WRIST, RIGHT_WRIST,
    LEFT_HIP, RIGHT_HIP,
];

/// Floats per landmark without / with the visibility channel
pub const STRIDE_XYZ: usize = 3;
pub const STRIDE_XYZV: usize = 4;

// ============================================================================
// LANDMARK DATA STRUCTURE
// ============================================================================

/// A single landmark as MediaPipe reports it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Landmark {
    pub x: f32,  // 0-1 normalized
    pub y: f32,  // 0-1 normalized
    pub z: f32,  // Relative depth (unused by the classifier)
    pub visibility: f32,
}

impl Landmark {
    fn point(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

/// Malformed payload from JavaScript
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LandmarkError {
    InvalidLength(usize),
}

impl fmt::Display for LandmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LandmarkError::InvalidLength(len) => write!(
                f,
                "Invalid landmark data length: {} (expected {} or {})",
                len,
                LANDMARK_COUNT * STRIDE_XYZ,
                LANDMARK_COUNT * STRIDE_XYZV
            ),
        }
    }
}

// ============================================================================
// PARSING
// ============================================================================

/// Read landmark `index` from a flat array with the given stride
fn landmark_at(data: &[f32], stride: usize, index: usize) -> Landmark {
    let base = index * stride;
    Landmark {
        x: data[base],
        y: data[base + 1],
        z: data[base + 2],
        visibility: if stride == STRIDE_XYZV { data[base + 3] } else { 1.0 },
    }
}

/// Parse a flat landmark array into a pose sample
///
/// - empty array: no person detected
/// - 33×3 (x, y, z) or 33×4 (x, y, z, visibility) floats
/// - a required joint below `min_visibility` makes the pose incomplete,
///   which is reported as `NotDetected`
pub fn parse_pose(data: &[f32], min_visibility: f32) -> Result<PoseSample, LandmarkError> {
    if data.is_empty() {
        return Ok(PoseSample::NotDetected);
    }

    let stride = match data.len() {
        n if n == LANDMARK_COUNT * STRIDE_XYZ => STRIDE_XYZ,
        n if n == LANDMARK_COUNT * STRIDE_XYZV => STRIDE_XYZV,
        n => return Err(LandmarkError::InvalidLength(n)),
    };

    let visible = REQUIRED_LANDMARKS
        .iter()
        .all(|&i| landmark_at(data, stride, i).visibility >= min_visibility);
    if !visible {
        return Ok(PoseSample::NotDetected);
    }

    let point = |i| landmark_at(data, stride, i).point();
    Ok(PoseSample::from_joints(PoseJoints {
        left_shoulder: point(LEFT_SHOULDER),
        right_shoulder: point(RIGHT_SHOULDER),
        left_wrist: point(LEFT_WRIST),
        right_wrist: point(RIGHT_WRIST),
        left_hip: point(LEFT_HIP),
        right_hip: point(RIGHT_HIP),
    }))
}
