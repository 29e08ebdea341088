//! Per-frame entry point owning the surface and all animation state.

use crate::config::{SceneConfig, SceneVariant};
use crate::error::SceneError;
use crate::lettering::Lettering;
use crate::random::Entropy;
use crate::scene::{Composition, ForestScene};
use crate::surface::Surface;
use crate::words::RotationState;
use glam::Vec2;

/// Whether the host should schedule another frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Stopped,
}

/// What a pointer click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Spawned { slot: usize },
    Paused,
    Resumed,
    Ignored,
}

pub struct FrameDriver<S: Surface, R: Entropy> {
    surface: S,
    rng: R,
    composition: Composition,
    frame: u64,
    last_timestamp_ms: Option<f64>,
    disposed: bool,
}

impl<S: Surface, R: Entropy> FrameDriver<S, R> {
    /// Builds the scene for `surface`. A host that could not obtain a drawing
    /// context passes `None` and gets [`SceneError::MissingSurface`].
    pub fn create(surface: Option<S>, config: SceneConfig, mut rng: R) -> Result<Self, SceneError> {
        let surface = surface.ok_or(SceneError::MissingSurface)?;
        let (width, height) = (surface.width(), surface.height());
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(SceneError::InvalidDimensions { width, height });
        }
        config.validate()?;

        let composition = match config.variant {
            SceneVariant::Forest => Composition::Forest(ForestScene::new(width, height, &config, &mut rng)),
            SceneVariant::Lettering => {
                Composition::Lettering(Lettering::new(config.words.clone(), config.word_interval_ms))
            }
        };
        log::info!(
            "scene created: variant={} size={}x{} particles={} capacity={:?}",
            config.variant,
            width,
            height,
            config.particle_count,
            config.tree_capacity
        );
        Ok(Self {
            surface,
            rng,
            composition,
            frame: 0,
            last_timestamp_ms: None,
            disposed: false,
        })
    }

    /// Advances all state by one tick and redraws the surface.
    pub fn on_frame(&mut self, timestamp_ms: f64) -> FrameStatus {
        if self.disposed {
            return FrameStatus::Stopped;
        }
        // hosts promise monotonic timestamps; hold the clock if one slips back
        let now = match self.last_timestamp_ms {
            Some(last) if timestamp_ms < last => last,
            _ => timestamp_ms,
        };
        self.last_timestamp_ms = Some(now);
        self.frame += 1;

        self.surface.clear();
        match &mut self.composition {
            Composition::Forest(forest) => forest.frame(&mut self.surface, now, self.frame, &mut self.rng),
            Composition::Lettering(lettering) => {
                lettering.update(now);
                lettering.draw(&mut self.surface, now);
            }
        }
        FrameStatus::Continue
    }

    /// Routes a click in surface coordinates to the active variant.
    pub fn on_pointer_click(&mut self, x: f32, y: f32) -> ClickOutcome {
        let at = Vec2::new(x, y);
        if self.disposed || !self.surface.bounds().contains(at) {
            return ClickOutcome::Ignored;
        }
        match &mut self.composition {
            Composition::Forest(forest) => ClickOutcome::Spawned {
                slot: forest.spawn(at, &mut self.rng),
            },
            Composition::Lettering(lettering) => match lettering.rotation_mut().toggle_pause() {
                RotationState::Paused => ClickOutcome::Paused,
                RotationState::Running => ClickOutcome::Resumed,
            },
        }
    }

    /// Stops the scene. Later frames report [`FrameStatus::Stopped`] and
    /// clicks are ignored.
    pub fn dispose(&mut self) {
        if !self.disposed {
            self.disposed = true;
            log::info!("scene disposed after {} frames", self.frame);
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    pub fn forest(&self) -> Option<&ForestScene> {
        match &self.composition {
            Composition::Forest(forest) => Some(forest),
            Composition::Lettering(_) => None,
        }
    }

    pub fn lettering(&self) -> Option<&Lettering> {
        match &self.composition {
            Composition::Lettering(lettering) => Some(lettering),
            Composition::Forest(_) => None,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
