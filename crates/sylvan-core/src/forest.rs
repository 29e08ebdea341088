//! Static forest backdrop: sky gradient, light beams, bushes, trees and
//! flowers. Layout is generated once and only the breathing of the beams and
//! the sway of the flowers depend on the frame counter.

use crate::color::*;
use crate::constants::GROUND_LINE;
use crate::random::Entropy;
use crate::surface::{Arc, Paint, Rect, StrokeStyle, Surface};
use glam::Vec2;
use std::f32::consts::TAU;

#[derive(Clone, Debug)]
struct Beam {
    x: f32,
    top_width: f32,
    bottom_width: f32,
    skew: f32,
    phase: f32,
}

#[derive(Clone, Debug)]
struct Bush {
    center: Vec2,
    radius: f32,
    color: Rgba,
}

#[derive(Clone, Debug)]
struct ForestTree {
    base: Vec2,
    height: f32,
    spread: f32,
    color: Rgba,
}

#[derive(Clone, Debug)]
struct Flower {
    base: Vec2,
    stem: f32,
    petal: f32,
    color: Rgba,
    phase: f32,
}

#[derive(Clone, Debug)]
pub struct Backdrop {
    width: f32,
    height: f32,
    ground_y: f32,
    beams: Vec<Beam>,
    bushes: Vec<Bush>,
    trees: Vec<ForestTree>,
    flowers: Vec<Flower>,
}

/// How many of each static element to scatter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackdropCounts {
    pub beams: usize,
    pub bushes: usize,
    pub trees: usize,
    pub flowers: usize,
}

impl Backdrop {
    pub fn generate(width: f32, height: f32, counts: BackdropCounts, rng: &mut impl Entropy) -> Self {
        let ground_y = height * GROUND_LINE;
        let beams = (0..counts.beams)
            .map(|i| {
                let slot = width / counts.beams.max(1) as f32;
                Beam {
                    x: slot * i as f32 + rng.range(0.0, slot * 0.5),
                    top_width: rng.range(width * 0.03, width * 0.07),
                    bottom_width: rng.range(width * 0.10, width * 0.18),
                    skew: rng.range(-width * 0.12, width * 0.05),
                    phase: rng.range(0.0, TAU),
                }
            })
            .collect();
        let bushes = (0..counts.bushes)
            .map(|_| {
                let radius = rng.range(height * 0.025, height * 0.05);
                Bush {
                    center: Vec2::new(rng.range(0.0, width), ground_y + rng.range(-radius * 0.2, radius * 0.4)),
                    radius,
                    color: rng.pick(BUSH_COLORS).copied().unwrap_or(FOREST_FLOOR),
                }
            })
            .collect();
        let mut trees: Vec<ForestTree> = (0..counts.trees)
            .map(|_| ForestTree {
                base: Vec2::new(rng.range(0.0, width), ground_y + rng.range(0.0, height * 0.03)),
                height: rng.range(height * 0.25, height * 0.45),
                spread: rng.range(height * 0.06, height * 0.1),
                color: rng.pick(FOREST_TREE_COLORS).copied().unwrap_or(FOREST_FLOOR),
            })
            .collect();
        // far (higher base) trees first so nearer ones overlap them
        trees.sort_by(|a, b| a.base.y.total_cmp(&b.base.y));
        let flowers = (0..counts.flowers)
            .map(|_| Flower {
                base: Vec2::new(rng.range(0.0, width), rng.range(ground_y + height * 0.02, height * 0.98)),
                stem: rng.range(height * 0.015, height * 0.035),
                petal: rng.range(2.5, 5.0),
                color: rng.pick(FLOWER_COLORS).copied().unwrap_or(INK),
                phase: rng.range(0.0, TAU),
            })
            .collect();
        Self {
            width,
            height,
            ground_y,
            beams,
            bushes,
            trees,
            flowers,
        }
    }

    pub fn ground_y(&self) -> f32 {
        self.ground_y
    }

    /// Sky gradient, forest floor and light beams; drawn every frame.
    pub fn draw_background(&self, surface: &mut dyn Surface, frame: u64) {
        let sky = Paint::linear(
            Vec2::ZERO,
            Vec2::new(0.0, self.height),
            &[(0.0, SKY_TOP), (GROUND_LINE * 0.8, SKY_MID), (1.0, FOREST_FLOOR)],
        );
        surface.fill_rect(Rect::new(0.0, 0.0, self.width, self.height), &sky);
        surface.fill_rect(
            Rect::new(0.0, self.ground_y, self.width, self.height - self.ground_y),
            &Paint::Solid(FOREST_FLOOR.with_alpha(0.85)),
        );

        let t = frame as f32;
        for beam in &self.beams {
            let alpha = 0.06 + 0.04 * (t * 0.01 + beam.phase).sin();
            let bottom_x = beam.x + beam.skew;
            let points = [
                Vec2::new(beam.x, 0.0),
                Vec2::new(beam.x + beam.top_width, 0.0),
                Vec2::new(bottom_x + beam.bottom_width, self.ground_y),
                Vec2::new(bottom_x, self.ground_y),
            ];
            let paint = Paint::linear(
                Vec2::ZERO,
                Vec2::new(0.0, self.ground_y),
                &[(0.0, BEAM.with_alpha(alpha)), (1.0, BEAM.with_alpha(0.0))],
            );
            surface.fill_polygon(&points, &paint);
        }
    }

    pub fn draw_bushes(&self, surface: &mut dyn Surface) {
        for bush in &self.bushes {
            let r = bush.radius;
            let paint = Paint::Solid(bush.color);
            surface.fill_ellipse(bush.center + Vec2::new(-r * 0.6, r * 0.1), Vec2::new(r * 0.8, r * 0.6), &paint);
            surface.fill_ellipse(bush.center + Vec2::new(r * 0.6, r * 0.1), Vec2::new(r * 0.8, r * 0.6), &paint);
            surface.fill_ellipse(bush.center, Vec2::new(r, r * 0.8), &paint);
        }
    }

    pub fn draw_trees(&self, surface: &mut dyn Surface) {
        for tree in &self.trees {
            let trunk_w = tree.spread * 0.18;
            let trunk_h = tree.height * 0.25;
            surface.fill_rect(
                Rect::new(tree.base.x - trunk_w * 0.5, tree.base.y - trunk_h, trunk_w, trunk_h),
                &Paint::Solid(TRUNK),
            );
            // three stacked tiers, widest at the bottom
            for tier in 0..3 {
                let k = tier as f32;
                let bottom = tree.base.y - trunk_h * 0.8 - k * tree.height * 0.2;
                let half = tree.spread * (1.0 - k * 0.22);
                let apex = bottom - tree.height * 0.38;
                let shade = tree.color.with_alpha(1.0 - k * 0.08);
                surface.fill_polygon(
                    &[
                        Vec2::new(tree.base.x - half, bottom),
                        Vec2::new(tree.base.x, apex),
                        Vec2::new(tree.base.x + half, bottom),
                    ],
                    &Paint::Solid(shade),
                );
            }
        }
    }

    pub fn draw_flowers(&self, surface: &mut dyn Surface, frame: u64) {
        let t = frame as f32;
        let stem_style = StrokeStyle::new(BUSH_COLORS[0], 1.2);
        for flower in &self.flowers {
            let sway = (t * 0.03 + flower.phase).sin() * 1.5;
            let head = flower.base + Vec2::new(sway, -flower.stem);
            surface.stroke_line(flower.base, head, &stem_style);
            for k in 0..5 {
                let angle = k as f32 / 5.0 * TAU + flower.phase;
                let offset = Vec2::new(angle.cos(), angle.sin()) * flower.petal;
                surface.fill_ellipse(
                    head + offset,
                    Vec2::splat(flower.petal * 0.7),
                    &Paint::Solid(flower.color.with_alpha(0.9)),
                );
            }
            surface.fill_arc(Arc::circle(head, flower.petal * 0.55), &Paint::Solid(Rgba::rgb(255, 230, 140)));
        }
    }
}
