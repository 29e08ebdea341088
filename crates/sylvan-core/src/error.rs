use thiserror::Error;

/// Failures that stop a scene from starting. Once a scene runs, per-frame work
/// cannot fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("no 2D drawing surface is available")]
    MissingSurface,
    #[error("surface dimensions {width}x{height} are not drawable")]
    InvalidDimensions { width: f32, height: f32 },
    #[error("the lettering scene needs at least one word")]
    EmptyWordList,
    #[error("interval `{name}` must be a positive number of milliseconds, got {value}")]
    InvalidInterval { name: &'static str, value: f64 },
    #[error("a capped tree pool needs room for at least one tree")]
    ZeroCapacity,
    #[error("unknown scene variant `{0}` (expected `forest` or `lettering`)")]
    UnknownVariant(String),
}
