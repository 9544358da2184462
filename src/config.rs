use std::time::Duration;

use crate::{
    error::EngineError,
    types::{CameraFacing, Handedness},
};

/// Tunable thresholds for gesture detection and debouncing.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureConfig {
    /// Maximum pairwise fingertip distance (thumb, index, middle) for a pinch.
    pub pinch_threshold: f32,
    /// Maximum fingertip-to-wrist distance for every finger in a fist.
    pub fist_threshold: f32,
    pub click_debounce: Duration,
    pub home_debounce: Duration,
    /// Shared by the hook and circle back gestures.
    pub back_debounce: Duration,
    /// Number of raw samples the median smoother keeps per axis.
    pub smoothing_window: usize,
    pub circle: CircleConfig,
    /// A left hand left of this display x hands control to the right hand.
    pub edge_switch_low: f32,
    /// A right hand right of this display x hands control to the left hand.
    pub edge_switch_high: f32,
    pub camera_facing: CameraFacing,
    pub initial_hand: Handedness,
    /// The session stops after this long without a frame.
    pub idle_timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CircleConfig {
    /// Closure is only evaluated once the path holds more than this many points.
    pub min_points: usize,
    pub max_points: usize,
    pub min_radius: f32,
    /// Maximum start-to-end distance for the path to count as closed.
    pub completion_threshold: f32,
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            min_points: 10,
            max_points: 50,
            min_radius: 0.05,
            completion_threshold: 0.05,
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            pinch_threshold: 0.06,
            fist_threshold: 0.2,
            click_debounce: Duration::from_millis(1_000),
            home_debounce: Duration::from_millis(1_000),
            back_debounce: Duration::from_millis(1_000),
            smoothing_window: 7,
            circle: CircleConfig::default(),
            edge_switch_low: 0.3,
            edge_switch_high: 0.7,
            camera_facing: CameraFacing::Front,
            initial_hand: Handedness::Right,
            idle_timeout: Duration::from_secs(60),
        }
    }
}

impl GestureConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if !positive(self.pinch_threshold) {
            return Err(EngineError::InvalidConfig("pinch threshold must be positive"));
        }
        if !positive(self.fist_threshold) {
            return Err(EngineError::InvalidConfig("fist threshold must be positive"));
        }
        if self.smoothing_window == 0 {
            return Err(EngineError::InvalidConfig("smoothing window must not be empty"));
        }
        if !positive(self.circle.min_radius) || !positive(self.circle.completion_threshold) {
            return Err(EngineError::InvalidConfig("circle thresholds must be positive"));
        }
        if self.circle.max_points <= self.circle.min_points {
            return Err(EngineError::InvalidConfig(
                "circle path capacity must exceed the minimum point count",
            ));
        }
        if !(0.0..=1.0).contains(&self.edge_switch_low)
            || !(0.0..=1.0).contains(&self.edge_switch_high)
            || self.edge_switch_low >= self.edge_switch_high
        {
            return Err(EngineError::InvalidConfig(
                "edge switch bands must satisfy 0 <= low < high <= 1",
            ));
        }
        Ok(())
    }
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub fn from_degrees(degrees: u32) -> Option<Self> {
        match degrees % 360 {
            0 => Some(Rotation::Deg0),
            90 => Some(Rotation::Deg90),
            180 => Some(Rotation::Deg180),
            270 => Some(Rotation::Deg270),
            _ => None,
        }
    }

    pub fn is_landscape(&self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}

/// Screen size in pixels in the current orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenConfig {
    pub width: u32,
    pub height: u32,
}

impl ScreenConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Orients a physical display size: landscape rotations put the long
    /// side horizontally, portrait rotations put it vertically.
    pub fn oriented(width: u32, height: u32, rotation: Rotation) -> Self {
        let (short, long) = (width.min(height), width.max(height));
        if rotation.is_landscape() {
            Self::new(long, short)
        } else {
            Self::new(short, long)
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.width == 0 || self.height == 0 {
            return Err(EngineError::InvalidScreenSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0
            && y >= 0
            && i64::from(x) <= i64::from(self.width)
            && i64::from(y) <= i64::from(self.height)
    }
}
