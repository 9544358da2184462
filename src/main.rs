use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result, anyhow, bail};
use crossbeam_channel::{bounded, unbounded};
use touchless_pointer::{
    GestureConfig, GestureEngine, Rotation, ScreenConfig,
    dispatch::{ActionDispatcher, LogDispatcher},
    pipeline::{
        Delivery, ReplaySource, SessionEvent, WorkerOptions, start_engine, start_source_stream,
    },
    types::CameraFacing,
};

const USAGE: &str = "usage: touchless-pointer [--screen WxH] [--rotation DEG] [--back-camera] [--idle-timeout SECS] <recording.jsonl>";

#[derive(Debug, PartialEq)]
struct CliOptions {
    recording: PathBuf,
    screen: ScreenConfig,
    camera_facing: CameraFacing,
    idle_timeout: Option<Duration>,
}

fn main() -> Result<()> {
    env_logger::init();

    let options = parse_args(std::env::args().skip(1))?;
    let config = GestureConfig {
        camera_facing: options.camera_facing,
        idle_timeout: options.idle_timeout.unwrap_or(GestureConfig::default().idle_timeout),
        ..GestureConfig::default()
    };
    let idle_timeout = config.idle_timeout;

    let engine = GestureEngine::with_system_clock(config, options.screen)?;
    let source = ReplaySource::open(&options.recording)?;

    let (frame_tx, frame_rx) = bounded(1);
    let (event_tx, event_rx) = unbounded();

    let stream = start_source_stream(source, frame_tx, frame_rx.clone(), Delivery::Every);
    let worker = start_engine(
        engine,
        frame_rx,
        event_tx,
        WorkerOptions {
            delivery: Delivery::Every,
            idle_timeout,
        },
    );

    let mut dispatcher = LogDispatcher::new(options.screen);
    for event in event_rx.iter() {
        match event {
            SessionEvent::Frame(events) => {
                for event in &events {
                    dispatcher.dispatch(event);
                }
            }
            SessionEvent::IdleTimeout => break,
        }
    }

    stream.stop();
    worker
        .join()
        .map_err(|_| anyhow!("gesture worker panicked"))?;

    let stats = dispatcher.stats();
    log::info!(
        "replay finished: {} cursor updates, {} clicks ({} dropped), {} home, {} back, {} hand switches",
        stats.cursor_updates,
        stats.clicks,
        stats.dropped_clicks,
        stats.homes,
        stats.backs,
        stats.hand_switches
    );

    Ok(())
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<CliOptions> {
    let mut args = args;
    let mut recording = None;
    let mut size = (1080, 2400);
    let mut rotation = Rotation::Deg0;
    let mut camera_facing = CameraFacing::Front;
    let mut idle_timeout = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--screen" => {
                let value = args.next().context("--screen needs WxH")?;
                size = parse_size(&value)?;
            }
            "--rotation" => {
                let value = args.next().context("--rotation needs degrees")?;
                let degrees: u32 = value
                    .parse()
                    .with_context(|| format!("invalid rotation {value}"))?;
                rotation = Rotation::from_degrees(degrees)
                    .with_context(|| format!("rotation must be a multiple of 90, got {degrees}"))?;
            }
            "--back-camera" => camera_facing = CameraFacing::Back,
            "--idle-timeout" => {
                let value = args.next().context("--idle-timeout needs seconds")?;
                let secs: u64 = value
                    .parse()
                    .with_context(|| format!("invalid idle timeout {value}"))?;
                idle_timeout = Some(Duration::from_secs(secs));
            }
            "-h" | "--help" => bail!(USAGE),
            other if other.starts_with("--") => bail!("unknown flag {other}\n{USAGE}"),
            other => {
                if recording.replace(PathBuf::from(other)).is_some() {
                    bail!("only one recording may be given\n{USAGE}");
                }
            }
        }
    }

    Ok(CliOptions {
        recording: recording.ok_or_else(|| anyhow!(USAGE))?,
        screen: ScreenConfig::oriented(size.0, size.1, rotation),
        camera_facing,
        idle_timeout,
    })
}

fn parse_size(value: &str) -> Result<(u32, u32)> {
    let (w, h) = value
        .split_once(['x', 'X'])
        .with_context(|| format!("screen size must look like 1080x2400, got {value}"))?;
    let width = w.parse().with_context(|| format!("invalid screen width {w}"))?;
    let height = h.parse().with_context(|| format!("invalid screen height {h}"))?;
    Ok((width, height))
}
