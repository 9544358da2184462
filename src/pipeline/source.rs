use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
    time::Duration,
};

use anyhow::{Context, Result};
use crossbeam_channel::{Receiver, SendTimeoutError, Sender, TrySendError};
use serde::Deserialize;

use super::Delivery;
use crate::types::FrameResult;

const SEND_POLL: Duration = Duration::from_millis(100);

/// Producer of per-frame hand observations, e.g. a hand-pose model running
/// on camera frames or a recording of one.
pub trait LandmarkSource: Send + 'static {
    /// `Ok(None)` once the source is exhausted.
    fn next_frame(&mut self) -> Result<Option<FrameResult>>;
}

#[derive(Deserialize)]
struct ReplayLine {
    #[serde(flatten)]
    frame: FrameResult,
    /// Pause before this frame is handed out, to reproduce capture pacing.
    #[serde(default)]
    delay_ms: u64,
}

/// Recorded frames in JSON Lines form, one `FrameResult` object per line:
///
/// ```json
/// {"width":640,"height":480,"delay_ms":33,"hands":[{"handedness":"Right","landmarks":[{"x":0.5,"y":0.9,"z":0.0}]}]}
/// ```
pub struct ReplaySource<R> {
    reader: R,
    line_no: usize,
    finished: bool,
}

impl ReplaySource<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open replay file {}", path.display()))?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> ReplaySource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            finished: false,
        }
    }
}

impl<R: BufRead + Send + 'static> LandmarkSource for ReplaySource<R> {
    fn next_frame(&mut self) -> Result<Option<FrameResult>> {
        let mut line = String::new();
        while !self.finished {
            line.clear();
            let read = match self.reader.read_line(&mut line) {
                Ok(read) => read,
                Err(err) => {
                    self.finished = true;
                    return Err(err).context("failed to read replay input");
                }
            };
            if read == 0 {
                self.finished = true;
                break;
            }
            self.line_no += 1;

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let parsed: ReplayLine = serde_json::from_str(trimmed)
                .with_context(|| format!("invalid frame on replay line {}", self.line_no))?;
            if parsed.delay_ms > 0 {
                thread::sleep(Duration::from_millis(parsed.delay_ms));
            }
            return Ok(Some(parsed.frame));
        }
        Ok(None)
    }
}

#[derive(Debug)]
pub struct SourceStream {
    stop: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
}

impl SourceStream {
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for SourceStream {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Pumps `source` on its own thread into `frame_tx` until the source is
/// exhausted, the receiver goes away, or the stream is stopped.
///
/// `frame_rx` is the worker's end of the same channel. Under
/// [`Delivery::Latest`] the producer keeps it to evict a frame the worker
/// has not picked up yet; holding it means a departed worker is only noticed
/// through [`SourceStream::stop`]. Under [`Delivery::Every`] it is dropped.
pub fn start_source_stream<S: LandmarkSource>(
    mut source: S,
    frame_tx: Sender<FrameResult>,
    frame_rx: Receiver<FrameResult>,
    delivery: Delivery,
) -> SourceStream {
    let stop = Arc::new(AtomicBool::new(false));
    let stop_flag = stop.clone();
    let stale_rx = match delivery {
        Delivery::Latest => Some(frame_rx),
        Delivery::Every => None,
    };

    let handle = thread::spawn(move || {
        while !stop_flag.load(Ordering::Relaxed) {
            let frame = match source.next_frame() {
                Ok(Some(frame)) => frame,
                Ok(None) => {
                    log::info!("landmark source exhausted");
                    break;
                }
                Err(err) => {
                    log::warn!("landmark source read failed: {err:?}");
                    continue;
                }
            };

            let delivered = match &stale_rx {
                Some(stale_rx) => send_latest(&frame_tx, stale_rx, frame),
                None => send_blocking(&frame_tx, frame, &stop_flag),
            };
            if !delivered {
                break;
            }
        }
    });

    SourceStream {
        stop,
        handle: Some(handle),
    }
}

fn send_latest(
    frame_tx: &Sender<FrameResult>,
    stale_rx: &Receiver<FrameResult>,
    frame: FrameResult,
) -> bool {
    match frame_tx.try_send(frame) {
        Ok(()) => true,
        Err(TrySendError::Full(frame)) => {
            // Worker is busy: replace the queued frame. The slot may already
            // be empty if the worker took it in between.
            let _ = stale_rx.try_recv();
            !matches!(frame_tx.try_send(frame), Err(TrySendError::Disconnected(_)))
        }
        Err(TrySendError::Disconnected(_)) => false,
    }
}

fn send_blocking(frame_tx: &Sender<FrameResult>, frame: FrameResult, stop: &AtomicBool) -> bool {
    let mut pending = frame;
    loop {
        match frame_tx.send_timeout(pending, SEND_POLL) {
            Ok(()) => return true,
            Err(SendTimeoutError::Timeout(frame)) => {
                if stop.load(Ordering::Relaxed) {
                    return false;
                }
                pending = frame;
            }
            Err(SendTimeoutError::Disconnected(_)) => return false,
        }
    }
}
