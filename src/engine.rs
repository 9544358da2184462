use crate::{
    arbiter::HandArbiter,
    clock::{Clock, SystemClock},
    config::{GestureConfig, ScreenConfig},
    error::EngineError,
    gesture::GestureClassifier,
    mapping::MappedRegion,
    smoothing::MedianSmoother,
    types::{
        CameraFacing, FrameResult, GestureEvent, Handedness, INDEX_TIP, LANDMARK_COUNT, Landmark,
    },
};

/// Owns every piece of per-session gesture state and turns one frame of
/// hand observations into the events for that frame.
pub struct GestureEngine<C: Clock = SystemClock> {
    config: GestureConfig,
    screen: ScreenConfig,
    clock: C,
    arbiter: HandArbiter,
    smoother: MedianSmoother,
    classifier: GestureClassifier,
}

impl GestureEngine<SystemClock> {
    pub fn with_system_clock(
        config: GestureConfig,
        screen: ScreenConfig,
    ) -> Result<Self, EngineError> {
        Self::new(config, screen, SystemClock::new())
    }
}

impl<C: Clock> GestureEngine<C> {
    pub fn new(config: GestureConfig, screen: ScreenConfig, clock: C) -> Result<Self, EngineError> {
        config.validate()?;
        screen.validate()?;

        Ok(Self {
            arbiter: HandArbiter::new(
                config.initial_hand,
                config.edge_switch_low,
                config.edge_switch_high,
            ),
            smoother: MedianSmoother::new(config.smoothing_window),
            classifier: GestureClassifier::new(&config),
            config,
            screen,
            clock,
        })
    }

    /// Processes one frame.
    ///
    /// Events come out in a fixed order: hand-switch notices, the cursor
    /// update, then any actions. A frame with no hands yields a single
    /// [`GestureEvent::NoHand`] and clears the gesture latches. A frame with
    /// zero image dimensions is rejected without touching any state.
    pub fn process(&mut self, frame: &FrameResult) -> Result<Vec<GestureEvent>, EngineError> {
        let region = MappedRegion::compute(frame.width, frame.height, &self.screen)?;
        let facing = self.config.camera_facing;
        let mut events = Vec::new();

        for switch in self.arbiter.update(&frame.hands, facing) {
            events.push(GestureEvent::HandSwitched {
                active: switch.to,
                message: switch.message,
            });
        }

        let Some(hand) = self.arbiter.select(&frame.hands) else {
            self.classifier.reset();
            events.push(GestureEvent::NoHand);
            return Ok(events);
        };

        if hand.landmarks.len() < LANDMARK_COUNT {
            log::warn!(
                "skipping {} hand with {} landmarks",
                hand.handedness.label(),
                hand.landmarks.len()
            );
            return Ok(events);
        }

        let landmarks: Vec<Landmark> = hand
            .landmarks
            .iter()
            .map(|point| facing.to_display(point))
            .collect();

        let tip = landmarks[INDEX_TIP];
        let pointer = self.smoother.smooth(tip.x, tip.y);
        let cursor = region.to_pixel(pointer.0, pointer.1);
        events.push(GestureEvent::CursorMoved {
            x: cursor.0,
            y: cursor.1,
        });

        let actions = self
            .classifier
            .classify(&landmarks, pointer, cursor, self.clock.now());
        for action in &actions {
            log::debug!("gesture action: {action:?}");
        }
        events.extend(actions);

        Ok(events)
    }

    /// Returns the engine to a fresh-session state.
    pub fn reset(&mut self) {
        self.arbiter.set_active(self.config.initial_hand);
        self.smoother.clear();
        self.classifier = GestureClassifier::new(&self.config);
    }

    pub fn active_hand(&self) -> Handedness {
        self.arbiter.active()
    }

    pub fn camera_facing(&self) -> CameraFacing {
        self.config.camera_facing
    }

    pub fn set_camera_facing(&mut self, facing: CameraFacing) {
        if facing != self.config.camera_facing {
            log::info!("camera facing changed to {facing:?}");
            self.config.camera_facing = facing;
        }
    }

    pub fn screen(&self) -> ScreenConfig {
        self.screen
    }

    pub fn set_screen(&mut self, screen: ScreenConfig) -> Result<(), EngineError> {
        screen.validate()?;
        self.screen = screen;
        Ok(())
    }

    pub fn classifier(&self) -> &GestureClassifier {
        &self.classifier
    }
}
