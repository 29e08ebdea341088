//! Platform-independent core of the sylvan scene animator.
//!
//! A [`FrameDriver`] owns a [`Surface`] and every piece of animation state.
//! Hosts call [`FrameDriver::on_frame`] once per display refresh and forward
//! clicks to [`FrameDriver::on_pointer_click`].

pub mod color;
pub mod config;
pub mod constants;
pub mod driver;
pub mod error;
pub mod forest;
pub mod glyph;
pub mod growth;
pub mod lettering;
pub mod particles;
pub mod random;
pub mod reveal;
pub mod scene;
pub mod surface;
pub mod wave;
pub mod words;

pub use color::Rgba;
pub use config::{SceneConfig, SceneVariant};
pub use driver::{ClickOutcome, FrameDriver, FrameStatus};
pub use error::SceneError;
pub use growth::{Grove, GrowthEntity, Sparkle, TreeCapacity};
pub use random::Entropy;
pub use reveal::RevealStage;
pub use scene::{Composition, ForestScene};
pub use surface::{
    Arc, ColorStop, DrawCommand, LinearGradient, Paint, RadialGradient, RecordingSurface, Rect,
    StrokeStyle, Surface,
};
