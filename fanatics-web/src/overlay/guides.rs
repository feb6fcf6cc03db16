//! Guide lines drawn over the camera feed
//!
//! Normalized positions; `to_pixels` maps them onto a frame.

use crate::gesture::ClassifierResult;

/// Fixed horizontal reference line (half the frame height)
pub const REFERENCE_LINE_Y: f32 = 0.5;

/// Vertical centre line
const CENTER_LINE_X: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GuideLines {
    pub center_x: f32,
    pub reference_y: f32,
    /// Current hip height (dashed line), when a pose was classified
    pub hip_y: Option<f32>,
    /// Calibrated standing height
    pub baseline_y: Option<f32>,
    /// Lateral band edges
    pub left_bound: f32,
    pub right_bound: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelGuides {
    pub center_x: i32,
    pub reference_y: i32,
    pub hip_y: Option<i32>,
    pub baseline_y: Option<i32>,
    pub left_bound: i32,
    pub right_bound: i32,
}

impl GuideLines {
    pub fn from_result(result: &ClassifierResult, left_bound: f32, right_bound: f32) -> Self {
        Self {
            center_x: CENTER_LINE_X,
            reference_y: REFERENCE_LINE_Y,
            hip_y: result.measurements.map(|m| m.avg_hip_y),
            baseline_y: result.baseline_hip_y,
            left_bound,
            right_bound,
        }
    }

    pub fn to_pixels(&self, width: u32, height: u32) -> PixelGuides {
        let px = |v: f32, size: u32| (v * size as f32) as i32;
        PixelGuides {
            center_x: px(self.center_x, width),
            reference_y: px(self.reference_y, height),
            hip_y: self.hip_y.map(|y| px(y, height)),
            baseline_y: self.baseline_y.map(|y| px(y, height)),
            left_bound: px(self.left_bound, width),
            right_bound: px(self.right_bound, width),
        }
    }
}
