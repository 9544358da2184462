use crate::{config::ScreenConfig, types::GestureEvent};

/// Consumer of engine output: the cursor overlay, the system input
/// injector and the notification surface sit behind this trait.
pub trait ActionDispatcher {
    fn dispatch(&mut self, event: &GestureEvent);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DispatchStats {
    pub cursor_updates: usize,
    pub clicks: usize,
    pub dropped_clicks: usize,
    pub homes: usize,
    pub backs: usize,
    pub no_hand: usize,
    pub hand_switches: usize,
}

/// Writes every event to the log. Clicks that land outside the screen are
/// dropped, the way the input injector refuses them.
pub struct LogDispatcher {
    screen: ScreenConfig,
    cursor_visible: bool,
    stats: DispatchStats,
}

impl LogDispatcher {
    pub fn new(screen: ScreenConfig) -> Self {
        Self {
            screen,
            cursor_visible: false,
            stats: DispatchStats::default(),
        }
    }

    pub fn stats(&self) -> DispatchStats {
        self.stats
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }
}

impl ActionDispatcher for LogDispatcher {
    fn dispatch(&mut self, event: &GestureEvent) {
        match event {
            GestureEvent::CursorMoved { x, y } => {
                self.cursor_visible = true;
                self.stats.cursor_updates += 1;
                log::trace!("cursor ({x}, {y})");
            }
            GestureEvent::Click { x, y } => {
                if self.screen.contains(*x, *y) {
                    self.stats.clicks += 1;
                    log::info!("click at ({x}, {y})");
                } else {
                    self.stats.dropped_clicks += 1;
                    log::warn!("ignoring click outside the screen at ({x}, {y})");
                }
            }
            GestureEvent::Home => {
                self.stats.homes += 1;
                log::info!("home");
            }
            GestureEvent::Back { source } => {
                self.stats.backs += 1;
                log::info!("back ({source:?})");
            }
            GestureEvent::NoHand => {
                if self.cursor_visible {
                    log::debug!("hand lost, hiding cursor");
                }
                self.cursor_visible = false;
                self.stats.no_hand += 1;
            }
            GestureEvent::HandSwitched { message, .. } => {
                self.stats.hand_switches += 1;
                log::info!("{message}");
            }
        }
    }
}
