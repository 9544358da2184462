use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::{Duration, Instant},
};

/// Monotonic time source for debounce bookkeeping, measured from an
/// arbitrary per-clock origin.
pub trait Clock: Send + 'static {
    fn now(&self) -> Duration;
}

#[derive(Clone, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven clock. Clones share the same reading, so a test can keep one
/// handle while the engine owns another.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    millis: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.millis.fetch_add(by.as_millis() as u64, Ordering::SeqCst);
    }

    pub fn set(&self, at: Duration) {
        self.millis.store(at.as_millis() as u64, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_millis(self.millis.load(Ordering::SeqCst))
    }
}

/// Minimum spacing between two firings of the same action.
#[derive(Clone, Debug)]
pub struct Debounce {
    interval: Duration,
    last_fired: Option<Duration>,
}

impl Debounce {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fired: None,
        }
    }

    /// True once strictly more than the interval has passed since the last firing.
    pub fn ready(&self, now: Duration) -> bool {
        match self.last_fired {
            Some(last) => now.saturating_sub(last) > self.interval,
            None => true,
        }
    }

    /// True while still inside the window opened by the last firing.
    pub fn cooling_down(&self, now: Duration) -> bool {
        match self.last_fired {
            Some(last) => now.saturating_sub(last) < self.interval,
            None => false,
        }
    }

    pub fn mark(&mut self, now: Duration) {
        self.last_fired = Some(now);
    }
}
