use std::{thread, time::Duration};

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};

use super::Delivery;
use crate::{
    clock::Clock,
    engine::GestureEngine,
    types::{FrameResult, GestureEvent},
};

#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    /// Events produced by one processed frame.
    Frame(Vec<GestureEvent>),
    /// No frame arrived within the idle timeout; the session has stopped.
    IdleTimeout,
}

#[derive(Clone, Copy, Debug)]
pub struct WorkerOptions {
    pub delivery: Delivery,
    pub idle_timeout: Duration,
}

/// Runs the engine on a dedicated thread. Frames are processed one at a time
/// to completion; the engine is handed back when the session ends.
pub fn start_engine<C: Clock>(
    engine: GestureEngine<C>,
    frame_rx: Receiver<FrameResult>,
    event_tx: Sender<SessionEvent>,
    options: WorkerOptions,
) -> thread::JoinHandle<GestureEngine<C>> {
    log::info!(
        "starting gesture session ({:?} delivery, idle timeout {:?})",
        options.delivery,
        options.idle_timeout
    );
    thread::spawn(move || run_worker_loop(engine, frame_rx, event_tx, options))
}

fn run_worker_loop<C: Clock>(
    mut engine: GestureEngine<C>,
    frame_rx: Receiver<FrameResult>,
    event_tx: Sender<SessionEvent>,
    options: WorkerOptions,
) -> GestureEngine<C> {
    loop {
        let frame = match next_frame(&frame_rx, options) {
            Ok(frame) => frame,
            Err(RecvTimeoutError::Timeout) => {
                log::info!("no frames for {:?}, stopping gesture session", options.idle_timeout);
                let _ = event_tx.send(SessionEvent::IdleTimeout);
                break;
            }
            Err(RecvTimeoutError::Disconnected) => break,
        };

        match engine.process(&frame) {
            Ok(events) if events.is_empty() => {}
            Ok(events) => {
                if event_tx.send(SessionEvent::Frame(events)).is_err() {
                    break;
                }
            }
            Err(err) => {
                log::warn!("rejected frame: {err}");
            }
        }
    }

    log::info!("gesture session stopped");
    engine
}

fn next_frame(
    frame_rx: &Receiver<FrameResult>,
    options: WorkerOptions,
) -> Result<FrameResult, RecvTimeoutError> {
    match options.delivery {
        Delivery::Latest => recv_latest_frame(frame_rx, options.idle_timeout),
        Delivery::Every => frame_rx.recv_timeout(options.idle_timeout),
    }
}

fn recv_latest_frame(
    frame_rx: &Receiver<FrameResult>,
    timeout: Duration,
) -> Result<FrameResult, RecvTimeoutError> {
    let mut frame = frame_rx.recv_timeout(timeout)?;
    while let Ok(newer) = frame_rx.try_recv() {
        frame = newer;
    }
    Ok(frame)
}
