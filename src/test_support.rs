//! Synthetic right-hand poses in display orientation (y grows downward).

use crate::types::{FrameResult, HandObservation, Handedness, Landmark};

fn lm(x: f32, y: f32) -> Landmark {
    Landmark::new(x, y, 0.0)
}

/// All fingers extended and spread, thumb out to the side.
pub fn open_hand() -> Vec<Landmark> {
    vec![
        lm(0.50, 0.90),
        // thumb
        lm(0.42, 0.85),
        lm(0.37, 0.80),
        lm(0.33, 0.75),
        lm(0.30, 0.70),
        // index
        lm(0.45, 0.60),
        lm(0.45, 0.50),
        lm(0.45, 0.45),
        lm(0.45, 0.40),
        // middle
        lm(0.50, 0.60),
        lm(0.50, 0.50),
        lm(0.50, 0.44),
        lm(0.50, 0.38),
        // ring
        lm(0.55, 0.62),
        lm(0.55, 0.52),
        lm(0.55, 0.47),
        lm(0.55, 0.42),
        // pinky
        lm(0.60, 0.66),
        lm(0.60, 0.58),
        lm(0.60, 0.54),
        lm(0.60, 0.50),
    ]
}

fn tuck_thumb(points: &mut [Landmark]) {
    points[4] = lm(0.40, 0.72);
}

/// Thumb, index and middle tips pressed together.
pub fn pinch_hand() -> Vec<Landmark> {
    let mut points = open_hand();
    points[4] = lm(0.44, 0.50);
    points[8] = lm(0.46, 0.50);
    points[12] = lm(0.45, 0.52);
    points
}

/// Every fingertip pulled in next to the wrist.
pub fn fist_hand() -> Vec<Landmark> {
    let mut points = open_hand();
    points[8] = lm(0.45, 0.75);
    points[12] = lm(0.50, 0.76);
    points[16] = lm(0.55, 0.77);
    points[20] = lm(0.60, 0.78);
    points
}

/// Index extended, middle, ring and pinky bent, thumb tucked.
pub fn pointing_hand() -> Vec<Landmark> {
    let mut points = open_hand();
    points[12] = lm(0.50, 0.55);
    points[16] = lm(0.55, 0.57);
    points[20] = lm(0.60, 0.63);
    tuck_thumb(&mut points);
    points
}

/// Index, middle and ring extended with pinky curled and thumb tucked.
pub fn hook_ready_hand() -> Vec<Landmark> {
    let mut points = open_hand();
    points[20] = lm(0.60, 0.63);
    tuck_thumb(&mut points);
    points
}

/// Index, middle and ring tips folded below their knuckles.
pub fn hook_curled_hand() -> Vec<Landmark> {
    let mut points = hook_ready_hand();
    points[8] = lm(0.45, 0.65);
    points[12] = lm(0.50, 0.65);
    points[16] = lm(0.55, 0.67);
    points
}

pub fn observation(handedness: Handedness, landmarks: Vec<Landmark>) -> HandObservation {
    HandObservation {
        handedness,
        landmarks,
    }
}

pub fn frame_with(hands: Vec<HandObservation>) -> FrameResult {
    FrameResult {
        hands,
        width: 640,
        height: 480,
    }
}

pub fn right_hand_frame(landmarks: Vec<Landmark>) -> FrameResult {
    frame_with(vec![observation(Handedness::Right, landmarks)])
}
