use std::collections::HashMap;

use handwave_engine::poses::{self, Pose};
use handwave_engine::{
    CooldownCategory, EngineConfig, GestureEngine, GestureEvent, LandmarkFrame, ScreenSize,
};

fn engine() -> GestureEngine {
    GestureEngine::new(EngineConfig::default(), ScreenSize::new(1920, 1080)).unwrap()
}

#[test]
fn test_held_pinch_clicks_once_per_cooldown() {
    let engine = engine();
    let mut state = engine.new_state();
    let pinch = poses::pinch();

    assert_eq!(engine.process(&mut state, Some(&pinch), 0.0), GestureEvent::Click);
    assert_eq!(engine.process(&mut state, Some(&pinch), 0.3), GestureEvent::Idle);
    assert_eq!(engine.process(&mut state, Some(&pinch), 0.7), GestureEvent::Click);
}

#[test]
fn test_rightward_sweep_skips_track_and_clears_history() {
    let engine = engine();
    let mut state = engine.new_state();
    let fist = poses::fist();
    let xs = [0.10, 0.12, 0.15, 0.20, 0.30];

    let mut events = Vec::new();
    for (i, x) in xs.iter().enumerate() {
        let frame = poses::with_index_at(&fist, *x, 0.72);
        events.push(engine.process(&mut state, Some(&frame), i as f64 * 0.1));
    }

    assert!(events[..4].iter().all(GestureEvent::is_idle));
    assert_eq!(events[4], GestureEvent::NextTrack);
    assert_eq!(state.swipe.len(), 0);
}

#[test]
fn test_leftward_sweep_goes_back() {
    let engine = engine();
    let mut state = engine.new_state();
    let frames = poses::sweep(&poses::fist(), 0.8, 0.5, 5);

    let last = frames
        .iter()
        .enumerate()
        .map(|(i, frame)| engine.process(&mut state, Some(frame), i as f64 * 0.1))
        .last();
    assert_eq!(last, Some(GestureEvent::PrevTrack));
}

#[test]
fn test_small_drift_is_not_a_swipe() {
    let engine = engine();
    let mut state = engine.new_state();
    for (i, frame) in poses::sweep(&poses::fist(), 0.40, 0.55, 10).iter().enumerate() {
        assert_eq!(
            engine.process(&mut state, Some(frame), i as f64 * 0.1),
            GestureEvent::Idle
        );
    }
}

#[test]
fn test_swipe_outranks_pinch() {
    let engine = engine();
    let mut state = engine.new_state();
    let frames = poses::sweep(&poses::pinch(), 0.10, 0.30, 5);

    let events: Vec<_> = frames
        .iter()
        .enumerate()
        .map(|(i, frame)| engine.process(&mut state, Some(frame), i as f64 * 0.1))
        .collect();

    assert_eq!(events[0], GestureEvent::Click);
    assert_eq!(events[4], GestureEvent::NextTrack);
}

#[test]
fn test_missing_hand_does_not_disturb_debounce() {
    let engine = engine();
    let mut state = engine.new_state();
    let pinch = poses::pinch();

    assert_eq!(engine.process(&mut state, Some(&pinch), 0.0), GestureEvent::Click);
    assert_eq!(engine.process(&mut state, None, 0.3), GestureEvent::Idle);
    assert_eq!(engine.process(&mut state, None, 0.5), GestureEvent::Idle);
    assert_eq!(engine.process(&mut state, Some(&pinch), 0.65), GestureEvent::Click);
}

#[test]
fn test_cursor_follows_index_smoothly() {
    let engine = engine();
    let mut state = engine.new_state();
    let point = poses::point();

    let first = poses::with_index_at(&point, 0.1, 0.1);
    let second = poses::with_index_at(&point, 0.2, 0.1);

    match engine.process(&mut state, Some(&first), 0.0) {
        GestureEvent::Cursor { x, y } => {
            assert!((x - 192.0).abs() < 1e-6);
            assert!((y - 108.0).abs() < 1e-6);
        }
        other => panic!("expected cursor, got {other:?}"),
    }

    match engine.process(&mut state, Some(&second), 0.033) {
        GestureEvent::Cursor { x, y } => {
            assert!((x - 230.4).abs() < 1e-6);
            assert!((y - 108.0).abs() < 1e-6);
        }
        other => panic!("expected cursor, got {other:?}"),
    }
}

#[test]
fn test_cooldowns_hold_over_long_session() {
    let engine = engine();
    let mut state = engine.new_state();
    let intervals: HashMap<CooldownCategory, f64> = CooldownCategory::ALL
        .iter()
        .map(|category| (*category, state.cooldowns.interval(*category)))
        .collect();

    let mut last_seen: HashMap<CooldownCategory, f64> = HashMap::new();
    let mut fired = 0;

    // 30 fps for ten seconds, changing pose every seven frames
    for tick in 0..300 {
        let now = tick as f64 / 30.0;
        let pose = Pose::ALL[(tick / 7) % Pose::ALL.len()];
        let frame: LandmarkFrame = pose.frame();
        let event = engine.process(&mut state, Some(&frame), now);

        if let Some(category) = event.category() {
            if let Some(previous) = last_seen.insert(category, now) {
                assert!(
                    now - previous > intervals[&category],
                    "{category:?} fired again after {:.3}s",
                    now - previous
                );
            }
            fired += 1;
        }
    }

    assert!(fired > 0);
}

#[test]
fn test_back_and_forth_sweeps_respect_swipe_cooldown() {
    let engine = engine();
    let mut state = engine.new_state();
    let fist = poses::fist();
    let interval = state.cooldowns.interval(CooldownCategory::Swipe);

    let mut swipes = Vec::new();
    // Index tip oscillates 0.2 <-> 0.8 in 0.05 steps, 30 fps for ten seconds
    for tick in 0..300usize {
        let now = tick as f64 / 30.0;
        let step = tick % 24;
        let x = if step <= 12 {
            0.2 + 0.05 * step as f64
        } else {
            0.8 - 0.05 * (step - 12) as f64
        };
        let frame = poses::with_index_at(&fist, x, 0.72);
        let event = engine.process(&mut state, Some(&frame), now);
        if event.swipe_direction().is_some() {
            swipes.push((now, event));
        }
    }

    assert!(swipes.len() >= 5, "only {} swipes fired", swipes.len());
    assert!(swipes.iter().any(|(_, e)| *e == GestureEvent::NextTrack));
    assert!(swipes.iter().any(|(_, e)| *e == GestureEvent::PrevTrack));
    for pair in swipes.windows(2) {
        let gap = pair[1].0 - pair[0].0;
        assert!(gap > interval, "swipes {:.3}s apart", gap);
    }
}

#[test]
fn test_shorter_swipe_window_from_config() {
    let mut config = EngineConfig::default();
    config.swipe.history_len = 3;
    let engine = GestureEngine::new(config, ScreenSize::default()).unwrap();
    let mut state = engine.new_state();

    let frames = poses::sweep(&poses::fist(), 0.2, 0.45, 3);
    let events: Vec<_> = frames
        .iter()
        .enumerate()
        .map(|(i, frame)| engine.process(&mut state, Some(frame), i as f64 * 0.1))
        .collect();
    assert_eq!(events, vec![GestureEvent::Idle, GestureEvent::Idle, GestureEvent::NextTrack]);
}
