//! Touchless pointing engine: turns per-frame hand landmarks into a smoothed
//! screen cursor and debounced click, home and back actions.

pub mod arbiter;
pub mod clock;
pub mod config;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod gesture;
pub mod mapping;
pub mod pipeline;
pub mod smoothing;
pub mod trajectory;
pub mod types;

#[cfg(test)]
mod test_support;

pub use config::{GestureConfig, Rotation, ScreenConfig};
pub use engine::GestureEngine;
pub use error::EngineError;
pub use types::{FrameResult, GestureEvent, HandObservation, Handedness, Landmark};
