use serde::Deserialize;

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_TIP: usize = 12;
pub const RING_TIP: usize = 16;
pub const PINKY_TIP: usize = 20;

/// Joint indices of a finger, base to tip: `[mcp, pip, dip, tip]`.
pub const INDEX_FINGER: [usize; 4] = [5, 6, 7, 8];
pub const MIDDLE_FINGER: [usize; 4] = [9, 10, 11, 12];
pub const RING_FINGER: [usize; 4] = [13, 14, 15, 16];
pub const PINKY_FINGER: [usize; 4] = [17, 18, 19, 20];

/// A hand joint in normalized image space. `x`/`y` are in `[0, 1]`, `z` is
/// depth relative to the wrist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn distance(&self, other: &Landmark) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    pub fn label(&self) -> &'static str {
        match self {
            Handedness::Left => "Left",
            Handedness::Right => "Right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraFacing {
    /// User-facing camera; the image is mirrored relative to the display.
    Front,
    Back,
}

impl CameraFacing {
    /// Converts an image x coordinate into display-facing orientation.
    pub fn display_x(&self, x: f32) -> f32 {
        match self {
            CameraFacing::Front => 1.0 - x,
            CameraFacing::Back => x,
        }
    }

    pub fn to_display(&self, landmark: &Landmark) -> Landmark {
        Landmark {
            x: self.display_x(landmark.x),
            ..*landmark
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HandObservation {
    pub handedness: Handedness,
    pub landmarks: Vec<Landmark>,
}

impl HandObservation {
    pub fn wrist(&self) -> Option<&Landmark> {
        self.landmarks.get(WRIST)
    }
}

/// Hand observations detected in one camera frame.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FrameResult {
    #[serde(default)]
    pub hands: Vec<HandObservation>,
    pub width: u32,
    pub height: u32,
}

impl FrameResult {
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            hands: Vec::new(),
            width,
            height,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackSource {
    Hook,
    Circle,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GestureEvent {
    CursorMoved { x: i32, y: i32 },
    Click { x: i32, y: i32 },
    Home,
    Back { source: BackSource },
    /// No hand this frame; the cursor and overlay should be hidden.
    NoHand,
    /// The controlling hand changed; `message` is meant for a transient notice.
    HandSwitched { active: Handedness, message: String },
}

impl GestureEvent {
    pub fn is_action(&self) -> bool {
        matches!(
            self,
            GestureEvent::Click { .. } | GestureEvent::Home | GestureEvent::Back { .. }
        )
    }
}
