use std::time::Duration;

use crate::{
    clock::Debounce,
    config::GestureConfig,
    trajectory::TrajectoryTracker,
    types::{
        BackSource, GestureEvent, INDEX_FINGER, INDEX_TIP, LANDMARK_COUNT, Landmark,
        MIDDLE_FINGER, MIDDLE_TIP, PINKY_FINGER, PINKY_TIP, RING_FINGER, RING_TIP, THUMB_IP,
        THUMB_TIP, WRIST,
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HookState {
    Idle,
    /// Index, middle and ring are extended with pinky and thumb tucked; a
    /// curl from here fires the back action.
    Ready,
}

/// Per-frame gesture state machines for the controlling hand.
///
/// Evaluation order is fixed: hook, then the pointing pose (circle path),
/// then pinch and fist. A completed hook consumes the frame and the pointing
/// pose suppresses pinch and fist.
pub struct GestureClassifier {
    pinch_threshold: f32,
    fist_threshold: f32,
    pinching: bool,
    fist_closed: bool,
    hook: HookState,
    click: Debounce,
    home: Debounce,
    back: Debounce,
    trajectory: TrajectoryTracker,
}

impl GestureClassifier {
    pub fn new(config: &GestureConfig) -> Self {
        Self {
            pinch_threshold: config.pinch_threshold,
            fist_threshold: config.fist_threshold,
            pinching: false,
            fist_closed: false,
            hook: HookState::Idle,
            click: Debounce::new(config.click_debounce),
            home: Debounce::new(config.home_debounce),
            back: Debounce::new(config.back_debounce),
            trajectory: TrajectoryTracker::new(config.circle.clone()),
        }
    }

    /// Classifies one display-oriented landmark set.
    ///
    /// `pointer` is the smoothed normalized fingertip and `cursor` its pixel
    /// position; clicks land on `cursor`. Fewer than 21 landmarks is a no-op.
    pub fn classify(
        &mut self,
        landmarks: &[Landmark],
        pointer: (f32, f32),
        cursor: (i32, i32),
        now: Duration,
    ) -> Vec<GestureEvent> {
        let mut actions = Vec::new();
        if landmarks.len() < LANDMARK_COUNT {
            return actions;
        }

        if let Some(fired) = self.update_hook(landmarks, now) {
            if fired {
                actions.push(GestureEvent::Back {
                    source: BackSource::Hook,
                });
            }
            return actions;
        }

        if is_pointing(landmarks) {
            if self.trajectory.feed(pointer, &mut self.back, now) {
                log::debug!("circle gesture closed");
                actions.push(GestureEvent::Back {
                    source: BackSource::Circle,
                });
            }
            return actions;
        }
        self.trajectory.clear();

        if self.is_pinch(landmarks) {
            if !self.pinching && self.click.ready(now) {
                self.pinching = true;
                self.click.mark(now);
                actions.push(GestureEvent::Click {
                    x: cursor.0,
                    y: cursor.1,
                });
            }
        } else {
            self.pinching = false;
        }

        if self.is_fist(landmarks) {
            if !self.fist_closed && self.home.ready(now) {
                self.fist_closed = true;
                self.home.mark(now);
                actions.push(GestureEvent::Home);
            }
        } else {
            self.fist_closed = false;
        }

        actions
    }

    /// Clears latches and the circle path. Debounce clocks keep running.
    pub fn reset(&mut self) {
        self.pinching = false;
        self.fist_closed = false;
        self.hook = HookState::Idle;
        self.trajectory.clear();
    }

    pub fn is_pinching(&self) -> bool {
        self.pinching
    }

    pub fn is_fist_closed(&self) -> bool {
        self.fist_closed
    }

    pub fn hook_state(&self) -> HookState {
        self.hook
    }

    pub fn trajectory_len(&self) -> usize {
        self.trajectory.len()
    }

    /// `Some(fired)` when a curl completed the hook this frame (the frame is
    /// consumed even if the back cooldown suppressed the action), `None`
    /// otherwise.
    fn update_hook(&mut self, points: &[Landmark], now: Duration) -> Option<bool> {
        let straight = is_straight(points, INDEX_FINGER)
            && is_straight(points, MIDDLE_FINGER)
            && is_straight(points, RING_FINGER);

        if straight && !is_straight(points, PINKY_FINGER) && thumb_tucked(points) {
            self.hook = HookState::Ready;
        }

        if self.hook == HookState::Ready {
            let hooked = is_hooked(points, INDEX_FINGER)
                && is_hooked(points, MIDDLE_FINGER)
                && is_hooked(points, RING_FINGER);
            if hooked {
                self.hook = HookState::Idle;
                if self.back.ready(now) {
                    self.back.mark(now);
                    log::debug!("hook gesture completed");
                    return Some(true);
                }
                return Some(false);
            }
        }

        if !straight {
            self.hook = HookState::Idle;
        }

        None
    }

    fn is_pinch(&self, points: &[Landmark]) -> bool {
        let thumb = &points[THUMB_TIP];
        let index = &points[INDEX_TIP];
        let middle = &points[MIDDLE_TIP];

        thumb.distance(index) < self.pinch_threshold
            && thumb.distance(middle) < self.pinch_threshold
            && index.distance(middle) < self.pinch_threshold
    }

    fn is_fist(&self, points: &[Landmark]) -> bool {
        let wrist = &points[WRIST];
        [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP]
            .iter()
            .all(|&tip| points[tip].distance(wrist) < self.fist_threshold)
    }
}

/// Index extended, the other three fingers bent, thumb tucked.
fn is_pointing(points: &[Landmark]) -> bool {
    is_straight(points, INDEX_FINGER)
        && !is_straight(points, MIDDLE_FINGER)
        && !is_straight(points, RING_FINGER)
        && !is_straight(points, PINKY_FINGER)
        && thumb_tucked(points)
}

// Image y grows downward: a tip above its PIP joint is extended.
fn is_straight(points: &[Landmark], finger: [usize; 4]) -> bool {
    points[finger[3]].y < points[finger[1]].y
}

fn is_hooked(points: &[Landmark], finger: [usize; 4]) -> bool {
    points[finger[3]].y > points[finger[0]].y
}

fn thumb_tucked(points: &[Landmark]) -> bool {
    points[THUMB_TIP].x > points[THUMB_IP].x
}
