//! User-spawned trees that grow from the ground up, each with a sparkle burst.

use crate::color::{Rgba, GROWTH_TREE_COLORS, SPARKLE_COLORS, TRUNK};
use crate::constants::*;
use crate::random::Entropy;
use crate::surface::{Arc, Paint, Rect, StrokeStyle, Surface};
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq)]
pub struct Sparkle {
    pub pos: Vec2,
    /// Remaining life, 1 at spawn; removed once it reaches 0.
    pub life: f32,
    pub decay: f32,
    pub color: Rgba,
    pub size: f32,
}

impl Sparkle {
    fn tick(&mut self) {
        self.life -= self.decay;
        self.pos.y -= SPARKLE_RISE;
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let life = self.life.clamp(0.0, 1.0);
        let size = self.size * life;
        let color = self.color.with_alpha(life);
        surface.fill_arc(
            Arc::circle(self.pos, size * 2.5),
            &Paint::glow(self.pos, size * 2.5, color),
        );
        if life > 0.5 {
            surface.stroke_arc(
                Arc::circle(self.pos, size * 1.5),
                &StrokeStyle::new(color.with_alpha(life - 0.5), 0.8),
            );
        }
    }
}

pub type Sparkles = SmallVec<[Sparkle; SPARKLES_PER_SPAWN]>;

#[derive(Clone, Debug, PartialEq)]
pub struct GrowthEntity {
    /// Ground point the tree grows from; scaling pivots here.
    pub anchor: Vec2,
    pub scale: f32,
    pub target_scale: f32,
    pub growth_rate: f32,
    pub color: Rgba,
    pub trunk_height: f32,
    pub crown_radius: f32,
    pub growing: bool,
    pub sparkles: Sparkles,
}

impl GrowthEntity {
    pub fn sprout(anchor: Vec2, rng: &mut impl Entropy) -> Self {
        let sparkles = (0..SPARKLES_PER_SPAWN)
            .map(|_| Sparkle {
                pos: anchor
                    + Vec2::new(
                        rng.range(-SPARKLE_SPREAD, SPARKLE_SPREAD),
                        rng.range(-SPARKLE_SPREAD, SPARKLE_SPREAD * 0.25),
                    ),
                life: 1.0,
                decay: rng.range(SPARKLE_DECAY_MIN, SPARKLE_DECAY_MAX),
                color: rng.pick(SPARKLE_COLORS).copied().unwrap_or(Rgba::rgb(255, 255, 255)),
                size: rng.range(SPARKLE_SIZE_MIN, SPARKLE_SIZE_MAX),
            })
            .collect();
        Self {
            anchor,
            scale: 0.0,
            target_scale: 1.0,
            growth_rate: TREE_GROWTH_RATE,
            color: rng.pick(GROWTH_TREE_COLORS).copied().unwrap_or(Rgba::rgb(96, 200, 120)),
            trunk_height: rng.range(TREE_TRUNK_MIN, TREE_TRUNK_MAX),
            crown_radius: rng.range(TREE_CROWN_MIN, TREE_CROWN_MAX),
            growing: true,
            sparkles,
        }
    }

    pub fn is_grown(&self) -> bool {
        !self.growing
    }

    pub fn tick(&mut self) {
        if self.growing {
            self.scale = (self.scale + self.growth_rate).min(self.target_scale);
            if self.scale >= self.target_scale {
                self.growing = false;
            }
        }
        for sparkle in &mut self.sparkles {
            sparkle.tick();
        }
        self.sparkles.retain(|s| s.life > 0.0);
    }

    /// `index` desynchronises the crown sway between neighbouring trees.
    pub fn draw(&self, surface: &mut dyn Surface, frame: u64, index: usize) {
        if self.scale > 0.0 {
            surface.save();
            surface.translate(self.anchor);
            surface.scale(self.scale);

            let trunk_w = self.crown_radius * 0.28;
            surface.fill_rect(
                Rect::new(-trunk_w * 0.5, -self.trunk_height, trunk_w, self.trunk_height),
                &Paint::Solid(TRUNK),
            );

            let sway = (frame as f32 * 0.04 + index as f32).sin() * TREE_WOBBLE;
            let r = self.crown_radius;
            let crown = Vec2::new(sway, -self.trunk_height - r * 0.6);
            let crown_paint = |center: Vec2, radius: f32| {
                Paint::radial(
                    center,
                    0.0,
                    radius,
                    &[
                        (0.0, self.color),
                        (0.75, self.color.with_alpha(0.9)),
                        (1.0, self.color.with_alpha(0.6)),
                    ],
                )
            };
            surface.fill_ellipse(crown, Vec2::new(r, r * 1.15), &crown_paint(crown, r * 1.15));
            let top = crown + Vec2::new(sway * 0.5, -r * 0.7);
            surface.fill_ellipse(top, Vec2::new(r * 0.7, r * 0.75), &crown_paint(top, r * 0.75));

            surface.restore();
        }
        for sparkle in &self.sparkles {
            sparkle.draw(surface);
        }
    }
}

/// How many growth entities a scene keeps alive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreeCapacity {
    Unbounded,
    /// Fixed pool; a spawn into a full pool replaces the oldest tree.
    Capped(usize),
}

impl Default for TreeCapacity {
    fn default() -> Self {
        TreeCapacity::Capped(TREE_CAPACITY)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Grove {
    entities: Vec<GrowthEntity>,
    capacity: TreeCapacity,
    /// Slot of the oldest entity once a capped pool has filled up.
    oldest: usize,
}

impl Grove {
    pub fn new(capacity: TreeCapacity) -> Self {
        Self {
            entities: Vec::new(),
            capacity,
            oldest: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn capacity(&self) -> TreeCapacity {
        self.capacity
    }

    /// Entity stored in `slot`, as returned by [`Grove::spawn`].
    pub fn get(&self, slot: usize) -> Option<&GrowthEntity> {
        self.entities.get(slot)
    }

    /// Adds a tree at `pos` and returns its slot.
    pub fn spawn(&mut self, pos: Vec2, rng: &mut impl Entropy) -> usize {
        let entity = GrowthEntity::sprout(pos, rng);
        match self.capacity {
            TreeCapacity::Capped(limit) if limit > 0 && self.entities.len() >= limit => {
                let slot = self.oldest;
                self.entities[slot] = entity;
                self.oldest = (slot + 1) % limit;
                log::debug!("tree pool full ({limit}), replaced slot {slot}");
                slot
            }
            _ => {
                self.entities.push(entity);
                log::debug!("spawned tree #{} at ({:.0},{:.0})", self.entities.len(), pos.x, pos.y);
                self.entities.len() - 1
            }
        }
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &GrowthEntity> {
        let (newer, older) = self.entities.split_at(self.oldest);
        older.iter().chain(newer.iter())
    }

    pub fn tick(&mut self) {
        for entity in &mut self.entities {
            entity.tick();
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface, frame: u64) {
        for (i, entity) in self.iter().enumerate() {
            entity.draw(surface, frame, i);
        }
    }
}
