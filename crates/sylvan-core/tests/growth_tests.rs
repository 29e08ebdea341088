// Host-side tests for growth entities, their sparkle bursts and the tree pool.

use glam::Vec2;
use proptest::prelude::*;
use std::collections::HashMap;
use sylvan_core::constants::{SPARKLES_PER_SPAWN, SPARKLE_DECAY_MIN};
use sylvan_core::random::seeded;
use sylvan_core::{DrawCommand, Grove, GrowthEntity, RecordingSurface, TreeCapacity};

#[test]
fn spawn_creates_a_full_burst_of_fresh_sparkles() {
    let mut rng = seeded(2024);
    let mut grove = Grove::new(TreeCapacity::Unbounded);
    let slot = grove.spawn(Vec2::new(100.0, 200.0), &mut rng);
    let tree = grove.get(slot).expect("spawned tree");

    assert_eq!(tree.anchor, Vec2::new(100.0, 200.0));
    assert_eq!(tree.scale, 0.0);
    assert_eq!(tree.target_scale, 1.0);
    assert!(tree.growing);
    assert_eq!(tree.sparkles.len(), SPARKLES_PER_SPAWN);
    assert_eq!(tree.sparkles.len(), 8);
    for s in &tree.sparkles {
        assert_eq!(s.life, 1.0);
        assert!(s.decay >= SPARKLE_DECAY_MIN);
        assert!((s.pos - tree.anchor).length() < 40.0);
    }
}

#[test]
fn sparkles_are_gone_once_their_life_runs_out() {
    let mut rng = seeded(7);
    let mut grove = Grove::new(TreeCapacity::Unbounded);
    let slot = grove.spawn(Vec2::new(100.0, 200.0), &mut rng);

    let slowest = grove
        .get(slot)
        .map(|t| t.sparkles.iter().map(|s| s.decay).fold(f32::MAX, f32::min))
        .unwrap_or(SPARKLE_DECAY_MIN);
    let ticks = (1.0 / slowest).ceil() as usize + 2;
    for _ in 0..ticks {
        grove.tick();
    }
    assert!(grove.get(slot).map(|t| t.sparkles.is_empty()).unwrap_or(false));
}

#[test]
fn sparkle_life_only_decreases_and_dead_ones_are_never_drawn() {
    let mut rng = seeded(99);
    let mut grove = Grove::new(TreeCapacity::Unbounded);
    grove.spawn(Vec2::new(300.0, 400.0), &mut rng);

    // sparkles keep their x while drifting up, so x identifies them
    let mut last: HashMap<u32, f32> = HashMap::new();
    for _ in 0..150 {
        grove.tick();
        let tree = grove.get(0).expect("tree");
        let mut surface = RecordingSurface::new(800.0, 600.0);
        tree.draw(&mut surface, 1, 0);
        for s in &tree.sparkles {
            assert!(s.life > 0.0, "dead sparkle still listed");
            if let Some(prev) = last.insert(s.pos.x.to_bits(), s.life) {
                assert!(s.life <= prev);
            }
        }
    }
}

#[test]
fn draw_scales_around_the_anchor() {
    let mut rng = seeded(1);
    let mut grove = Grove::new(TreeCapacity::Unbounded);
    grove.spawn(Vec2::new(120.0, 340.0), &mut rng);
    grove.tick();

    let mut surface = RecordingSurface::new(640.0, 480.0);
    grove.draw(&mut surface, 3);
    let scale = grove.get(0).map(|t| t.scale).unwrap_or_default();
    assert_eq!(surface.commands[0], DrawCommand::Save);
    assert_eq!(surface.commands[1], DrawCommand::Translate(Vec2::new(120.0, 340.0)));
    assert_eq!(surface.commands[2], DrawCommand::Scale(scale));
    assert_eq!(surface.depth(), 0);
}

#[test]
fn unscaled_tree_draws_only_its_sparkles() {
    let mut rng = seeded(1);
    let tree = GrowthEntity::sprout(Vec2::new(50.0, 50.0), &mut rng);
    let mut surface = RecordingSurface::new(100.0, 100.0);
    tree.draw(&mut surface, 0, 0);
    assert!(!surface.commands.contains(&DrawCommand::Save));
    assert!(surface.primitive_count() >= SPARKLES_PER_SPAWN);
}

#[test]
fn capped_pool_replaces_the_oldest_tree() {
    let mut rng = seeded(5);
    let mut grove = Grove::new(TreeCapacity::Capped(3));
    for i in 0..3 {
        assert_eq!(grove.spawn(Vec2::new(i as f32 * 10.0, 0.0), &mut rng), i);
    }
    assert_eq!(grove.spawn(Vec2::new(99.0, 0.0), &mut rng), 0);
    assert_eq!(grove.spawn(Vec2::new(98.0, 0.0), &mut rng), 1);
    assert_eq!(grove.len(), 3);

    let order: Vec<f32> = grove.iter().map(|t| t.anchor.x).collect();
    assert_eq!(order, vec![20.0, 99.0, 98.0]);
}

#[test]
fn unbounded_pool_keeps_everything() {
    let mut rng = seeded(5);
    let mut grove = Grove::new(TreeCapacity::Unbounded);
    for i in 0..500 {
        grove.spawn(Vec2::new(i as f32, 0.0), &mut rng);
    }
    assert_eq!(grove.len(), 500);
    assert_eq!(grove.iter().next().map(|t| t.anchor.x), Some(0.0));
}

proptest! {
    #[test]
    fn scale_is_monotonic_and_stops_at_target(seed in any::<u64>(), rate in 0.001f32..0.6, ticks in 1usize..400) {
        let mut rng = seeded(seed);
        let mut tree = GrowthEntity::sprout(Vec2::new(10.0, 10.0), &mut rng);
        tree.growth_rate = rate;
        let mut prev = tree.scale;
        let mut finished = false;
        for _ in 0..ticks {
            tree.tick();
            prop_assert!(tree.scale >= prev);
            prop_assert!(tree.scale <= tree.target_scale);
            if finished {
                prop_assert!(!tree.growing);
                prop_assert_eq!(tree.scale, tree.target_scale);
            }
            if tree.scale == tree.target_scale {
                prop_assert!(!tree.growing);
                finished = true;
            }
            prev = tree.scale;
        }
    }
}
