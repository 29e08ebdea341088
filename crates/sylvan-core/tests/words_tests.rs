// Host-side tests for the word rotation state machine.

use sylvan_core::words::{filler, RotationState, Row, WordRotation};

fn words() -> Vec<String> {
    ["GROW", "BLOOM", "MOSS"].iter().map(|w| w.to_string()).collect()
}

#[test]
fn both_indices_advance_after_exactly_one_interval() {
    let mut r = WordRotation::new(3, 2000.0);
    assert_eq!((r.top(), r.bottom()), (0, 1));
    assert!(!r.update(0.0));
    assert!(!r.update(1999.0));
    assert_eq!((r.top(), r.bottom()), (0, 1));
    assert!(r.update(2000.0));
    assert_eq!((r.top(), r.bottom()), (1, 2));
}

#[test]
fn indices_wrap_around_the_word_list() {
    let mut r = WordRotation::new(3, 2000.0);
    r.update(0.0);
    let mut seen = Vec::new();
    for k in 1..=4 {
        r.update(k as f64 * 2000.0);
        seen.push((r.top(), r.bottom()));
    }
    assert_eq!(seen, vec![(1, 2), (2, 0), (0, 1), (1, 2)]);
}

#[test]
fn paused_rotation_freezes_until_resumed() {
    let mut r = WordRotation::new(3, 2000.0);
    r.update(0.0);
    r.update(2000.0);
    assert_eq!(r.toggle_pause(), RotationState::Paused);
    for t in [4000.0, 10_000.0, 100_000.0] {
        assert!(!r.update(t));
        assert_eq!((r.top(), r.bottom()), (1, 2));
    }
    assert_eq!(r.toggle_pause(), RotationState::Running);
    // the interval restarts from the last paused frame
    assert!(!r.update(101_000.0));
    assert!(r.update(102_000.0));
    assert_eq!((r.top(), r.bottom()), (2, 0));
}

#[test]
fn paused_display_substitutes_filler_of_equal_length() {
    let words = words();
    let mut r = WordRotation::new(words.len(), 2000.0);
    assert_eq!(r.display(&words, Row::Top), "GROW");
    assert_eq!(r.display(&words, Row::Bottom), "BLOOM");
    r.toggle_pause();
    assert_eq!(r.display(&words, Row::Top), filler(4));
    assert_eq!(r.display(&words, Row::Bottom), "+*-/+");
}

#[test]
fn bobbing_stops_while_paused() {
    let mut r = WordRotation::new(2, 2000.0);
    let moving = (0..20).any(|i| r.bob_offset(1234.0, i).abs() > 0.5);
    assert!(moving);
    r.toggle_pause();
    for i in 0..20 {
        assert_eq!(r.bob_offset(1234.0 + i as f64 * 37.0, i), 0.0);
    }
}
