use crate::constants::WAVE_SEGMENTS;
use crate::surface::{StrokeStyle, Surface};
use glam::Vec2;
use std::f32::consts::PI;

/// Parameters of one oscillating guide line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wave {
    pub x0: f32,
    pub x1: f32,
    pub y: f32,
    pub phase: f32,
    pub amplitude: f32,
    pub frequency: f32,
}

impl Wave {
    /// Height of the wave at `progress` in [0, 1] along the span.
    #[inline]
    pub fn sample(&self, progress: f32) -> f32 {
        self.y + self.amplitude * (self.phase + progress * PI * self.frequency).sin()
    }

    pub fn points(&self) -> Vec<Vec2> {
        (0..=WAVE_SEGMENTS)
            .map(|i| {
                let t = i as f32 / WAVE_SEGMENTS as f32;
                Vec2::new(self.x0 + (self.x1 - self.x0) * t, self.sample(t))
            })
            .collect()
    }
}

/// Strokes the wave as a single open polyline of `WAVE_SEGMENTS` segments.
pub fn draw_wave_line(surface: &mut dyn Surface, wave: &Wave, stroke: &StrokeStyle) {
    surface.stroke_polyline(&wave.points(), stroke);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::INK;
    use crate::surface::{DrawCommand, RecordingSurface};

    fn wave() -> Wave {
        Wave {
            x0: 10.0,
            x1: 110.0,
            y: 50.0,
            phase: 0.3,
            amplitude: 8.0,
            frequency: 2.0,
        }
    }

    #[test]
    fn polyline_spans_the_range_with_fixed_segments() {
        let pts = wave().points();
        assert_eq!(pts.len(), WAVE_SEGMENTS + 1);
        assert_eq!(pts[0].x, 10.0);
        assert!((pts[WAVE_SEGMENTS].x - 110.0).abs() < 1e-4);
        for p in &pts {
            assert!((p.y - 50.0).abs() <= 8.0 + 1e-4);
        }
    }

    #[test]
    fn drawing_is_a_single_primitive_and_deterministic() {
        let mut a = RecordingSurface::new(200.0, 100.0);
        let mut b = RecordingSurface::new(200.0, 100.0);
        let stroke = StrokeStyle::new(INK, 1.0);
        draw_wave_line(&mut a, &wave(), &stroke);
        draw_wave_line(&mut b, &wave(), &stroke);
        assert_eq!(a.primitive_count(), 1);
        assert!(matches!(a.commands[0], DrawCommand::StrokePolyline(..)));
        assert_eq!(a.commands, b.commands);
    }
}
