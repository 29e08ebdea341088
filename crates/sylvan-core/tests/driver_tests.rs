// Host-side tests for the frame driver: reveal staging, layer gating, click
// routing and lifecycle.

use rand::rngs::StdRng;
use sylvan_core::constants::{BEAM_COUNT, REVEAL_INTERVAL_MS, WAVE_SEGMENTS};
use sylvan_core::random::seeded;
use sylvan_core::{
    ClickOutcome, DrawCommand, FrameDriver, FrameStatus, RecordingSurface, SceneConfig, SceneError,
    SceneVariant,
};

const W: f32 = 800.0;
const H: f32 = 600.0;

fn forest() -> FrameDriver<RecordingSurface, StdRng> {
    FrameDriver::create(Some(RecordingSurface::new(W, H)), SceneConfig::default(), seeded(42))
        .expect("forest scene")
}

fn lettering() -> FrameDriver<RecordingSurface, StdRng> {
    let config = SceneConfig::default().with_variant(SceneVariant::Lettering);
    FrameDriver::create(Some(RecordingSurface::new(W, H)), config, seeded(42)).expect("lettering scene")
}

fn stage(driver: &FrameDriver<RecordingSurface, StdRng>) -> u8 {
    driver.forest().map(|f| f.reveal().get()).unwrap_or(u8::MAX)
}

#[test]
fn missing_surface_refuses_to_start() {
    let result = FrameDriver::<RecordingSurface, StdRng>::create(None, SceneConfig::default(), seeded(1));
    assert!(matches!(result, Err(SceneError::MissingSurface)));
}

#[test]
fn degenerate_surface_is_rejected() {
    let result = FrameDriver::create(Some(RecordingSurface::new(0.0, 10.0)), SceneConfig::default(), seeded(1));
    assert!(matches!(result, Err(SceneError::InvalidDimensions { .. })));
}

#[test]
fn reveal_steps_once_per_interval_and_saturates() {
    let mut driver = forest();
    let mut history = Vec::new();
    let mut t = 1000.0;
    while t < 1000.0 + REVEAL_INTERVAL_MS * 12.0 {
        driver.on_frame(t);
        history.push(stage(&driver));
        t += 16.0;
    }
    assert_eq!(history[0], 0);
    for pair in history.windows(2) {
        assert!(pair[1] == pair[0] || pair[1] == pair[0] + 1, "jump {pair:?}");
    }
    assert_eq!(*history.last().unwrap_or(&0), 4);
    assert!(history.iter().all(|s| *s <= 4));

    // a long stall still only reaches the ceiling
    driver.on_frame(t + REVEAL_INTERVAL_MS * 50.0);
    assert_eq!(stage(&driver), 4);
}

#[test]
fn first_frame_shows_only_background_and_beams() {
    let mut driver = forest();
    driver.on_frame(0.0);
    let surface = driver.surface();
    assert_eq!(surface.commands[0], DrawCommand::Clear);
    // sky + floor + beams
    assert_eq!(surface.primitive_count(), 2 + BEAM_COUNT);
}

#[test]
fn layers_appear_as_the_reveal_progresses() {
    let mut driver = forest();
    let mut counts = Vec::new();
    for k in 0..=4 {
        driver.surface_mut().take();
        driver.on_frame(k as f64 * REVEAL_INTERVAL_MS);
        counts.push(driver.surface().primitive_count());
    }
    for pair in counts.windows(2) {
        assert!(pair[1] > pair[0], "{counts:?}");
    }
}

#[test]
fn spawned_trees_draw_before_the_reveal_completes() {
    let mut driver = forest();
    driver.on_frame(0.0);
    assert_eq!(driver.on_pointer_click(100.0, 200.0), ClickOutcome::Spawned { slot: 0 });
    driver.surface_mut().take();
    driver.on_frame(16.0);
    assert_eq!(stage(&driver), 0);

    let surface = driver.surface();
    let translate = surface
        .commands
        .iter()
        .position(|c| matches!(c, DrawCommand::Translate(p) if p.x == 100.0 && p.y == 200.0));
    assert!(translate.is_some());
    assert_eq!(surface.depth(), 0);
    let tree = driver.forest().and_then(|f| f.grove.get(0)).expect("tree");
    assert!(tree.scale > 0.0);
}

#[test]
fn clicks_outside_the_surface_are_ignored() {
    let mut driver = forest();
    assert_eq!(driver.on_pointer_click(-1.0, 10.0), ClickOutcome::Ignored);
    assert_eq!(driver.on_pointer_click(10.0, H), ClickOutcome::Ignored);
    assert_eq!(driver.forest().map(|f| f.grove.len()), Some(0));
}

#[test]
fn lettering_click_toggles_pause_and_waves_keep_moving() {
    let mut driver = lettering();
    driver.on_frame(0.0);
    assert_eq!(driver.on_pointer_click(10.0, 10.0), ClickOutcome::Paused);

    let waves = |driver: &FrameDriver<RecordingSurface, StdRng>| -> Vec<Vec<glam::Vec2>> {
        driver
            .surface()
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::StrokePolyline(pts, _) if pts.len() == WAVE_SEGMENTS + 1 => Some(pts.clone()),
                _ => None,
            })
            .collect()
    };

    driver.surface_mut().take();
    driver.on_frame(500.0);
    let first = waves(&driver);
    assert!(driver.surface().commands.iter().any(
        |c| matches!(c, DrawCommand::FillText { text, .. } if text.starts_with("paused"))
    ));
    driver.surface_mut().take();
    driver.on_frame(900.0);
    let second = waves(&driver);
    assert_eq!(first.len(), 6);
    assert_eq!(second.len(), 6);
    assert_ne!(first, second);

    assert_eq!(driver.lettering().map(|l| l.shown(sylvan_core::words::Row::Top)), Some("+*-/".to_string()));
    assert_eq!(driver.on_pointer_click(10.0, 10.0), ClickOutcome::Resumed);
}

#[test]
fn words_rotate_through_the_driver() {
    let mut driver = lettering();
    driver.on_frame(5000.0);
    driver.on_frame(7000.0);
    let rotation = driver.lettering().map(|l| (l.rotation().top(), l.rotation().bottom()));
    assert_eq!(rotation, Some((1, 2)));
}

#[test]
fn disposed_driver_stops_and_ignores_input() {
    let mut driver = forest();
    assert_eq!(driver.on_frame(0.0), FrameStatus::Continue);
    driver.dispose();
    driver.dispose();
    assert!(driver.is_disposed());
    assert_eq!(driver.on_frame(16.0), FrameStatus::Stopped);
    assert_eq!(driver.on_pointer_click(5.0, 5.0), ClickOutcome::Ignored);
    assert_eq!(driver.frame_count(), 1);
}
