use crate::constants::*;
use crate::error::SceneError;
use crate::forest::BackdropCounts;
use crate::glyph::has_glyph;
use crate::growth::TreeCapacity;
use std::fmt;
use std::str::FromStr;

/// Which scene the driver composes and where clicks are routed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SceneVariant {
    /// Staged forest backdrop; a click spawns a growing tree.
    #[default]
    Forest,
    /// Rotating stroke-font words over wave guides; a click toggles pause.
    Lettering,
}

impl FromStr for SceneVariant {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forest" => Ok(SceneVariant::Forest),
            "lettering" | "words" => Ok(SceneVariant::Lettering),
            _ => Err(SceneError::UnknownVariant(s.to_owned())),
        }
    }
}

impl fmt::Display for SceneVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SceneVariant::Forest => "forest",
            SceneVariant::Lettering => "lettering",
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub variant: SceneVariant,
    pub particle_count: usize,
    pub tree_capacity: TreeCapacity,
    pub words: Vec<String>,
    pub word_interval_ms: f64,
    pub reveal_interval_ms: f64,
    pub backdrop: BackdropCounts,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            variant: SceneVariant::default(),
            particle_count: PARTICLE_COUNT,
            tree_capacity: TreeCapacity::default(),
            words: DEFAULT_WORDS.iter().map(|w| (*w).to_owned()).collect(),
            word_interval_ms: WORD_INTERVAL_MS,
            reveal_interval_ms: REVEAL_INTERVAL_MS,
            backdrop: BackdropCounts {
                beams: BEAM_COUNT,
                bushes: BUSH_COUNT,
                trees: FOREST_TREE_COUNT,
                flowers: FLOWER_COUNT,
            },
        }
    }
}

impl SceneConfig {
    pub fn with_variant(mut self, variant: SceneVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        check_interval("word_interval_ms", self.word_interval_ms)?;
        check_interval("reveal_interval_ms", self.reveal_interval_ms)?;
        if self.tree_capacity == TreeCapacity::Capped(0) {
            return Err(SceneError::ZeroCapacity);
        }
        if self.variant == SceneVariant::Lettering && self.words.is_empty() {
            return Err(SceneError::EmptyWordList);
        }
        for word in &self.words {
            if let Some(ch) = word.chars().find(|c| !has_glyph(*c)) {
                log::warn!("word {word:?} contains {ch:?} which has no glyph; it will be skipped");
            }
        }
        Ok(())
    }
}

fn check_interval(name: &'static str, value: f64) -> Result<(), SceneError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SceneError::InvalidInterval { name, value })
    }
}
