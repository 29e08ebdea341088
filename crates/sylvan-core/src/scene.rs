use crate::config::SceneConfig;
use crate::constants::*;
use crate::forest::Backdrop;
use crate::growth::Grove;
use crate::lettering::Lettering;
use crate::particles::AmbientField;
use crate::random::Entropy;
use crate::reveal::{IntervalClock, RevealStage};
use crate::surface::Surface;
use glam::Vec2;

/// Forest variant: staged backdrop, ambient particles and user-grown trees.
#[derive(Clone, Debug)]
pub struct ForestScene {
    pub backdrop: Backdrop,
    pub field: AmbientField,
    pub grove: Grove,
    reveal: RevealStage,
    reveal_clock: IntervalClock,
}

impl ForestScene {
    pub fn new(width: f32, height: f32, config: &SceneConfig, rng: &mut impl Entropy) -> Self {
        Self {
            backdrop: Backdrop::generate(width, height, config.backdrop, rng),
            field: AmbientField::new(config.particle_count, width, height, rng),
            grove: Grove::new(config.tree_capacity),
            reveal: RevealStage::default(),
            reveal_clock: IntervalClock::new(config.reveal_interval_ms),
        }
    }

    pub fn reveal(&self) -> RevealStage {
        self.reveal
    }

    pub fn advance_reveal(&mut self) -> bool {
        let moved = self.reveal.advance();
        if moved {
            log::debug!("reveal stage {}", self.reveal.get());
        }
        moved
    }

    pub fn spawn(&mut self, at: Vec2, rng: &mut impl Entropy) -> usize {
        self.grove.spawn(at, rng)
    }

    /// Advances and draws every layer in back-to-front order. Each component
    /// is updated right before it is drawn.
    pub fn frame(&mut self, surface: &mut dyn Surface, now_ms: f64, frame: u64, rng: &mut impl Entropy) {
        for _ in 0..self.reveal_clock.poll(now_ms) {
            if !self.advance_reveal() {
                break;
            }
        }

        self.backdrop.draw_background(surface, frame);
        if self.reveal.shows(REVEAL_BUSHES) {
            self.backdrop.draw_bushes(surface);
        }
        if self.reveal.shows(REVEAL_FOREST_TREES) {
            self.backdrop.draw_trees(surface);
        }
        if self.reveal.shows(REVEAL_FLOWERS) {
            self.backdrop.draw_flowers(surface, frame);
        }
        self.field.update(rng);
        if self.reveal.shows(REVEAL_PARTICLES) {
            self.field.draw(surface, frame);
        }
        // never gated: user-spawned trees show from the first frame
        self.grove.tick();
        self.grove.draw(surface, frame);
    }
}

#[derive(Clone, Debug)]
pub enum Composition {
    Forest(ForestScene),
    Lettering(Lettering),
}
