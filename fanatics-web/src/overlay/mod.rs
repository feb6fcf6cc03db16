//! Overlay module - text and guide geometry for whoever draws the HUD
//!
//! Re-exports only. All logic in submodules.

mod labels;
mod guides;

pub use labels::{action_label, calibration_text, posture_line, ActionLabel, Rgb};
pub use guides::{GuideLines, PixelGuides, REFERENCE_LINE_Y};
