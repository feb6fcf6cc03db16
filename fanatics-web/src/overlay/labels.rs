//! HUD strings
//!
//! Display-only. Nothing here feeds back into classification.

use crate::gesture::{Action, ClassifierResult};

/// 8-bit RGB colour
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const GREEN: Rgb = Rgb(0, 255, 0);
    pub const YELLOW: Rgb = Rgb(255, 255, 0);
    pub const ORANGE: Rgb = Rgb(255, 128, 0);
    pub const CYAN: Rgb = Rgb(0, 255, 255);

    /// CSS hex form, e.g. `#ff8000`
    pub fn css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Flash text shown when an action fires
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionLabel {
    pub text: &'static str,
    pub color: Rgb,
}

pub fn action_label(action: Action) -> ActionLabel {
    let (text, color) = match action {
        Action::Space => ("START GAME (SPACE)", Rgb::GREEN),
        Action::Up => ("JUMP (UP)", Rgb::YELLOW),
        Action::Down => ("CROUCH (DOWN)", Rgb::ORANGE),
        Action::Left => ("MOVE LEFT", Rgb::CYAN),
        Action::Right => ("MOVE RIGHT", Rgb::GREEN),
    };
    ActionLabel { text, color }
}

/// "Posture: ..." line, empty when nothing was detected
pub fn posture_line(result: &ClassifierResult) -> String {
    if result.is_empty() {
        return String::new();
    }
    format!("Posture: {}", result.posture_text())
}

/// Calibration prompt while the window is open
pub fn calibration_text(result: &ClassifierResult) -> Option<String> {
    result.calibration.map(|status| status.message())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::{CalibrationStatus, PostureTag};

    #[test]
    fn test_posture_line() {
        let result = ClassifierResult {
            posture: vec![PostureTag::HandsApart, PostureTag::Standing, PostureTag::Center],
            ..Default::default()
        };
        assert_eq!(posture_line(&result), "Posture: Hands Apart | Standing | Center");
        assert_eq!(posture_line(&ClassifierResult::default()), "");
    }

    #[test]
    fn test_action_labels() {
        assert_eq!(action_label(Action::Space).text, "START GAME (SPACE)");
        assert_eq!(action_label(Action::Down).color.css(), "#ff8000");
        assert_eq!(action_label(Action::Left).color, Rgb::CYAN);
    }

    #[test]
    fn test_calibration_text() {
        let result = ClassifierResult {
            calibration: Some(CalibrationStatus { progress: 0.5 }),
            ..Default::default()
        };
        assert_eq!(
            calibration_text(&result).as_deref(),
            Some("Calibrating posture... Hold hands joined (50%)")
        );
        assert_eq!(calibration_text(&ClassifierResult::default()), None);
    }
}
