use std::{io::Cursor, time::Duration};

use crossbeam_channel::{bounded, unbounded};
use touchless_pointer::{
    GestureConfig, GestureEngine, GestureEvent, ScreenConfig,
    clock::ManualClock,
    dispatch::{ActionDispatcher, LogDispatcher},
    pipeline::{
        Delivery, ReplaySource, SessionEvent, WorkerOptions, start_engine, start_source_stream,
    },
    types::CameraFacing,
};

// Right hand, back camera: all fingers extended, thumb out.
const OPEN: [(f32, f32); 21] = [
    (0.50, 0.90),
    (0.42, 0.85),
    (0.37, 0.80),
    (0.33, 0.75),
    (0.30, 0.70),
    (0.45, 0.60),
    (0.45, 0.50),
    (0.45, 0.45),
    (0.45, 0.40),
    (0.50, 0.60),
    (0.50, 0.50),
    (0.50, 0.44),
    (0.50, 0.38),
    (0.55, 0.62),
    (0.55, 0.52),
    (0.55, 0.47),
    (0.55, 0.42),
    (0.60, 0.66),
    (0.60, 0.58),
    (0.60, 0.54),
    (0.60, 0.50),
];

fn pinch() -> [(f32, f32); 21] {
    let mut points = OPEN;
    points[4] = (0.44, 0.50);
    points[8] = (0.46, 0.50);
    points[12] = (0.45, 0.52);
    points
}

fn fist() -> [(f32, f32); 21] {
    let mut points = OPEN;
    points[8] = (0.45, 0.75);
    points[12] = (0.50, 0.76);
    points[16] = (0.55, 0.77);
    points[20] = (0.60, 0.78);
    points
}

fn hand_line(points: &[(f32, f32)]) -> String {
    let landmarks: Vec<String> = points
        .iter()
        .map(|(x, y)| format!("{{\"x\":{x},\"y\":{y},\"z\":0.0}}"))
        .collect();
    format!(
        "{{\"width\":640,\"height\":480,\"hands\":[{{\"handedness\":\"Right\",\"landmarks\":[{}]}}]}}\n",
        landmarks.join(",")
    )
}

fn empty_line() -> String {
    "{\"width\":640,\"height\":480,\"hands\":[]}\n".to_string()
}

fn run_session(recording: String) -> (Vec<GestureEvent>, LogDispatcher) {
    let screen = ScreenConfig::new(1080, 2400);
    let config = GestureConfig {
        camera_facing: CameraFacing::Back,
        ..GestureConfig::default()
    };
    let engine = GestureEngine::new(config, screen, ManualClock::new()).unwrap();

    let (frame_tx, frame_rx) = bounded(1);
    let (event_tx, event_rx) = unbounded();
    let stream = start_source_stream(
        ReplaySource::new(Cursor::new(recording)),
        frame_tx,
        frame_rx.clone(),
        Delivery::Every,
    );
    let worker = start_engine(
        engine,
        frame_rx,
        event_tx,
        WorkerOptions {
            delivery: Delivery::Every,
            idle_timeout: Duration::from_secs(5),
        },
    );

    let mut dispatcher = LogDispatcher::new(screen);
    let mut all = Vec::new();
    for event in event_rx.iter() {
        if let SessionEvent::Frame(events) = event {
            for event in events {
                dispatcher.dispatch(&event);
                all.push(event);
            }
        }
    }

    stream.stop();
    worker.join().unwrap();
    (all, dispatcher)
}

#[test]
fn test_recorded_session_dispatches_actions() {
    let mut recording = String::new();
    recording.push_str(&hand_line(&OPEN));
    recording.push_str(&hand_line(&pinch()));
    recording.push_str(&hand_line(&pinch()));
    recording.push_str(&hand_line(&OPEN));
    recording.push_str(&hand_line(&fist()));
    recording.push_str(&empty_line());

    let (events, dispatcher) = run_session(recording);

    let actions: Vec<&GestureEvent> = events.iter().filter(|e| e.is_action()).collect();
    assert_eq!(actions.len(), 2);
    assert!(matches!(actions[0], GestureEvent::Click { .. }));
    assert_eq!(actions[1], &GestureEvent::Home);
    assert_eq!(events.last(), Some(&GestureEvent::NoHand));

    let stats = dispatcher.stats();
    assert_eq!(stats.cursor_updates, 5);
    assert_eq!(stats.clicks, 1);
    assert_eq!(stats.homes, 1);
    assert_eq!(stats.no_hand, 1);
    assert!(!dispatcher.cursor_visible());
}

#[test]
fn test_malformed_lines_do_not_stop_the_session() {
    let mut recording = String::from("not json\n");
    recording.push_str("{\"width\":0,\"height\":480,\"hands\":[]}\n");
    recording.push_str(&empty_line());

    let (events, _) = run_session(recording);
    assert_eq!(events, vec![GestureEvent::NoHand]);
}
