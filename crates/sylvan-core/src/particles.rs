//! Fixed population of drifting glow particles.

use crate::color::{Rgba, PARTICLE_COLORS};
use crate::constants::*;
use crate::random::Entropy;
use crate::surface::{Arc, Paint, Surface};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub radius: f32,
    pub phase: f32,
    pub speed: f32,
    pub color: Rgba,
}

#[derive(Clone, Debug)]
pub struct AmbientField {
    particles: Vec<Particle>,
    width: f32,
    band_min: f32,
    band_max: f32,
}

impl AmbientField {
    pub fn new(count: usize, width: f32, height: f32, rng: &mut impl Entropy) -> Self {
        let band_min = height * PARTICLE_BAND_TOP;
        let band_max = height * PARTICLE_BAND_BOTTOM;
        let particles = (0..count)
            .map(|_| Particle {
                pos: Vec2::new(rng.range(0.0, width), rng.range(band_min, band_max)),
                radius: rng.range(PARTICLE_RADIUS_MIN, PARTICLE_RADIUS_MAX),
                phase: rng.range(0.0, std::f32::consts::TAU),
                speed: rng.range(PARTICLE_SPEED_MIN, PARTICLE_SPEED_MAX),
                color: rng.pick(PARTICLE_COLORS).copied().unwrap_or(Rgba::rgb(255, 255, 255)),
            })
            .collect();
        Self {
            particles,
            width,
            band_min,
            band_max,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Vertical band `(min, max)` every particle stays inside.
    pub fn band(&self) -> (f32, f32) {
        (self.band_min, self.band_max)
    }

    /// One frame of drift. Particles leaving the band are reseeded inside it,
    /// so the population never changes.
    pub fn update(&mut self, rng: &mut impl Entropy) {
        let span = self.band_max - self.band_min;
        for p in &mut self.particles {
            p.phase += PARTICLE_PHASE_STEP * p.speed;
            p.pos.x += p.phase.sin() * p.speed * PARTICLE_DRIFT_X;
            p.pos.y += (p.phase * 0.5).cos() * p.speed * PARTICLE_DRIFT_Y;
            p.pos.x = wrap(p.pos.x, self.width);
            if p.pos.y < self.band_min {
                p.pos.y = self.band_min + span * rng.range(0.7, 1.0);
            } else if p.pos.y > self.band_max {
                p.pos.y = self.band_min + span * rng.range(0.2, 0.5);
            }
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface, frame: u64) {
        let t = frame as f32;
        for p in &self.particles {
            let radius = p.radius * (1.0 + 0.3 * (t * 0.05 + p.phase).sin());
            let alpha = 0.45 + 0.35 * (t * 0.03 + p.phase * 1.3).sin();
            let halo = radius * 3.0;
            surface.fill_arc(
                Arc::circle(p.pos, halo),
                &Paint::glow(p.pos, halo, p.color.with_alpha(alpha)),
            );
        }
    }
}

/// Wraps `x` into `[0, width)`.
#[inline]
fn wrap(x: f32, width: f32) -> f32 {
    let w = x.rem_euclid(width);
    if w >= width {
        0.0
    } else {
        w
    }
}
