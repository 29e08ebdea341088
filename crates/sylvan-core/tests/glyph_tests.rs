// Host-side tests for the stroke font renderer.

use glam::Vec2;
use sylvan_core::color::INK;
use sylvan_core::glyph::{draw_glyph, draw_text, strokes};
use sylvan_core::{DrawCommand, RecordingSurface, StrokeStyle};

fn ink() -> StrokeStyle {
    StrokeStyle::new(INK, 2.0)
}

#[test]
fn unknown_characters_draw_nothing() {
    let mut surface = RecordingSurface::new(100.0, 100.0);
    for ch in ['7', '0', '#', 'é', '\n'] {
        assert_eq!(draw_glyph(&mut surface, ch, Vec2::ZERO, Vec2::splat(10.0), &ink()), 0);
    }
    assert!(surface.commands.is_empty());
}

#[test]
fn segments_become_lines_and_single_points_become_dots() {
    let mut surface = RecordingSurface::new(100.0, 100.0);
    assert_eq!(draw_glyph(&mut surface, '!', Vec2::ZERO, Vec2::splat(10.0), &ink()), 2);
    assert!(matches!(&surface.commands[0], DrawCommand::StrokePolyline(pts, _) if pts.len() == 2));
    assert!(matches!(&surface.commands[1], DrawCommand::FillArc(..)));

    let mut surface = RecordingSurface::new(100.0, 100.0);
    draw_glyph(&mut surface, 'A', Vec2::ZERO, Vec2::splat(10.0), &ink());
    assert_eq!(surface.primitive_count(), 3);
    assert!(surface
        .commands
        .iter()
        .all(|c| matches!(c, DrawCommand::StrokePolyline(..))));
}

#[test]
fn strokes_are_scaled_into_the_box() {
    let mut surface = RecordingSurface::new(200.0, 200.0);
    draw_glyph(&mut surface, 'T', Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0), &ink());
    match &surface.commands[0] {
        DrawCommand::StrokePolyline(pts, _) => {
            assert_eq!(pts[0], Vec2::new(10.0, 20.0));
            assert_eq!(pts[1], Vec2::new(40.0, 20.0));
        }
        other => panic!("unexpected {other:?}"),
    }
    match &surface.commands[1] {
        DrawCommand::StrokePolyline(pts, _) => assert_eq!(pts[1], Vec2::new(25.0, 60.0)),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn lower_case_draws_like_upper_case() {
    let mut lower = RecordingSurface::new(100.0, 100.0);
    let mut upper = RecordingSurface::new(100.0, 100.0);
    draw_glyph(&mut lower, 'g', Vec2::ONE, Vec2::splat(12.0), &ink());
    draw_glyph(&mut upper, 'G', Vec2::ONE, Vec2::splat(12.0), &ink());
    assert_eq!(lower.commands, upper.commands);
}

#[test]
fn text_skips_unknown_letters_and_applies_offsets() {
    let mut surface = RecordingSurface::new(400.0, 100.0);
    let drawn = draw_text(
        &mut surface,
        "L7L",
        Vec2::ZERO,
        Vec2::new(10.0, 20.0),
        5.0,
        &ink(),
        |i| i as f32 * 100.0,
    );
    let expected = strokes('L').map(|t| t.len() * 2).unwrap_or_default();
    assert_eq!(drawn, expected);
    // third letter starts two advances to the right and two offsets down
    match &surface.commands[2] {
        DrawCommand::StrokePolyline(pts, _) => assert_eq!(pts[0], Vec2::new(30.0, 200.0)),
        other => panic!("unexpected {other:?}"),
    }
}
