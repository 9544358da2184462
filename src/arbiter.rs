use crate::types::{CameraFacing, HandObservation, Handedness};

/// A change of the controlling hand, with the notice shown to the user.
#[derive(Clone, Debug, PartialEq)]
pub struct HandSwitch {
    pub from: Handedness,
    pub to: Handedness,
    pub message: String,
}

/// Chooses which visible hand drives the cursor.
///
/// The favored hand only changes when a hand drifts into the far edge zone
/// on its own side: a right hand beyond `high` gives control to the left
/// hand, a left hand below `low` gives it back. Between the two bands
/// nothing changes, so a hand hovering near the center cannot make the
/// cursor flip between hands.
#[derive(Clone, Debug)]
pub struct HandArbiter {
    active: Handedness,
    low: f32,
    high: f32,
}

impl HandArbiter {
    pub fn new(initial: Handedness, low: f32, high: f32) -> Self {
        Self {
            active: initial,
            low,
            high,
        }
    }

    pub fn active(&self) -> Handedness {
        self.active
    }

    pub fn set_active(&mut self, hand: Handedness) {
        self.active = hand;
    }

    /// Applies the edge-switch rule to every observation in order.
    pub fn update(&mut self, hands: &[HandObservation], facing: CameraFacing) -> Vec<HandSwitch> {
        let mut switches = Vec::new();

        for hand in hands {
            let Some(wrist) = hand.wrist() else {
                continue;
            };
            let x = facing.display_x(wrist.x);

            let target = match hand.handedness {
                Handedness::Right if x > self.high && self.active != Handedness::Left => Some((
                    Handedness::Left,
                    "Right hand at the screen edge, switching to left-hand control",
                )),
                Handedness::Left if x < self.low && self.active != Handedness::Right => Some((
                    Handedness::Right,
                    "Left hand at the screen edge, switching to right-hand control",
                )),
                _ => None,
            };

            if let Some((to, message)) = target {
                log::info!("active hand {} -> {}", self.active.label(), to.label());
                switches.push(HandSwitch {
                    from: self.active,
                    to,
                    message: message.to_string(),
                });
                self.active = to;
            }
        }

        switches
    }

    /// The observation labeled with the active hand, otherwise the first one.
    pub fn select<'a>(&self, hands: &'a [HandObservation]) -> Option<&'a HandObservation> {
        hands
            .iter()
            .find(|hand| hand.handedness == self.active)
            .or_else(|| hands.first())
    }
}
