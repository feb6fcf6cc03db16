//! Core data types shared by the classifier, overlay and bridge
//!
//! Coordinates are normalized to the frame: (0,0) top-left, (1,1) bottom-right.

// ============================================================================
// POSE SAMPLE
// ============================================================================

/// A 2D point in normalized frame coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2 {
    pub x: f32,  // 0-1, left to right
    pub y: f32,  // 0-1, top to bottom
}

impl Point2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// The six joints the classifier reads
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoseJoints {
    pub left_shoulder: Point2,
    pub right_shoulder: Point2,
    pub left_wrist: Point2,
    pub right_wrist: Point2,
    pub left_hip: Point2,
    pub right_hip: Point2,
}

impl PoseJoints {
    /// Midpoint of the shoulders on the x axis
    pub fn avg_shoulder_x(&self) -> f32 {
        (self.left_shoulder.x + self.right_shoulder.x) / 2.0
    }

    /// Midpoint of the hips on the y axis
    pub fn avg_hip_y(&self) -> f32 {
        (self.left_hip.y + self.right_hip.y) / 2.0
    }

    /// Both wrists within `threshold` of each other on each axis
    pub fn hands_joined(&self, threshold: f32) -> bool {
        (self.left_wrist.x - self.right_wrist.x).abs() < threshold
            && (self.left_wrist.y - self.right_wrist.y).abs() < threshold
    }

    /// Flip horizontally (x -> 1 - x), for un-mirrored camera input
    pub fn mirrored(&self) -> Self {
        let flip = |p: Point2| Point2::new(1.0 - p.x, p.y);
        Self {
            left_shoulder: flip(self.left_shoulder),
            right_shoulder: flip(self.right_shoulder),
            left_wrist: flip(self.left_wrist),
            right_wrist: flip(self.right_wrist),
            left_hip: flip(self.left_hip),
            right_hip: flip(self.right_hip),
        }
    }

    fn all(&self) -> [Point2; 6] {
        [
            self.left_shoulder, self.right_shoulder,
            self.left_wrist, self.right_wrist,
            self.left_hip, self.right_hip,
        ]
    }

    pub fn is_finite(&self) -> bool {
        self.all().iter().all(Point2::is_finite)
    }
}

/// One frame's worth of pose input
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PoseSample {
    Detected(PoseJoints),
    /// No person found, or required joints missing
    NotDetected,
}

impl PoseSample {
    /// Wrap joints, degrading to `NotDetected` on NaN/inf coordinates
    pub fn from_joints(joints: PoseJoints) -> Self {
        if joints.is_finite() {
            PoseSample::Detected(joints)
        } else {
            PoseSample::NotDetected
        }
    }

    pub fn joints(&self) -> Option<&PoseJoints> {
        match self {
            PoseSample::Detected(joints) => Some(joints),
            PoseSample::NotDetected => None,
        }
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Discrete game commands
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Left,
    Right,
    Up,
    Down,
    Space,
}

/// All actions, in registry order
pub const ACTIONS: [Action; 5] = [
    Action::Left,
    Action::Right,
    Action::Up,
    Action::Down,
    Action::Space,
];

impl Action {
    pub fn index(&self) -> usize {
        match self {
            Action::Left => 0,
            Action::Right => 1,
            Action::Up => 2,
            Action::Down => 3,
            Action::Space => 4,
        }
    }

    /// Literal token handed to the action sink
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Left => "left",
            Action::Right => "right",
            Action::Up => "up",
            Action::Down => "down",
            Action::Space => "space",
        }
    }

    /// DOM `KeyboardEvent.key` value for this action
    pub fn key(&self) -> &'static str {
        match self {
            Action::Left => "ArrowLeft",
            Action::Right => "ArrowRight",
            Action::Up => "ArrowUp",
            Action::Down => "ArrowDown",
            Action::Space => " ",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ACTIONS.iter().copied().find(|a| a.as_str() == name)
    }
}

// ============================================================================
// POSTURE TAGS
// ============================================================================

/// Descriptive posture tags, one per axis per frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostureTag {
    HandsJoined,
    HandsApart,
    Jumping,
    Crouching,
    Standing,
    Left,
    Right,
    Center,
}

impl PostureTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostureTag::HandsJoined => "Hands Joined",
            PostureTag::HandsApart => "Hands Apart",
            PostureTag::Jumping => "Jumping",
            PostureTag::Crouching => "Crouching",
            PostureTag::Standing => "Standing",
            PostureTag::Left => "Left",
            PostureTag::Right => "Right",
            PostureTag::Center => "Center",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pose(shoulder_x: f32, hip_y: f32) -> PoseJoints {
        PoseJoints {
            left_shoulder: Point2::new(shoulder_x - 0.1, 0.3),
            right_shoulder: Point2::new(shoulder_x + 0.1, 0.3),
            left_wrist: Point2::new(0.2, 0.6),
            right_wrist: Point2::new(0.8, 0.6),
            left_hip: Point2::new(shoulder_x - 0.05, hip_y),
            right_hip: Point2::new(shoulder_x + 0.05, hip_y),
        }
    }

    #[test]
    fn test_averages() {
        let joints = pose(0.5, 0.6);
        assert!((joints.avg_shoulder_x() - 0.5).abs() < 1e-6);
        assert!((joints.avg_hip_y() - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_hands_joined_is_strict() {
        let mut joints = pose(0.5, 0.6);
        joints.left_wrist = Point2::new(0.50, 0.40);
        joints.right_wrist = Point2::new(0.52, 0.41);
        assert!(joints.hands_joined(0.05));

        // Far apart on y only
        joints.right_wrist = Point2::new(0.50, 0.50);
        assert!(!joints.hands_joined(0.05));
    }

    #[test]
    fn test_mirrored_flips_x_only() {
        let joints = pose(0.3, 0.6).mirrored();
        assert!((joints.avg_shoulder_x() - 0.7).abs() < 1e-6);
        assert!((joints.avg_hip_y() - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_non_finite_is_not_detected() {
        let mut joints = pose(0.5, 0.6);
        joints.left_hip.y = f32::NAN;
        assert_eq!(PoseSample::from_joints(joints), PoseSample::NotDetected);
    }

    #[test]
    fn test_action_tokens() {
        for action in ACTIONS {
            assert_eq!(Action::from_name(action.as_str()), Some(action));
            assert_eq!(ACTIONS[action.index()], action);
        }
        assert_eq!(Action::Space.key(), " ");
        assert_eq!(Action::from_name("jump"), None);
    }
}
