mod source;
mod worker;

pub use source::{LandmarkSource, ReplaySource, SourceStream, start_source_stream};
pub use worker::{SessionEvent, WorkerOptions, start_engine};

/// How frames travel from a source to the engine worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    /// Live capture: a frame that arrives while the worker is busy replaces
    /// the stale one, so the cursor never lags behind the hand.
    Latest,
    /// Recorded input: the producer waits and every frame is processed in order.
    Every,
}
