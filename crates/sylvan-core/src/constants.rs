// Shared timing, layout and tuning constants used by the scene and both frontends.

// Timing (milliseconds of host timestamp)
pub const WORD_INTERVAL_MS: f64 = 2000.0; // word rotation period while running
pub const REVEAL_INTERVAL_MS: f64 = 900.0; // one reveal stage per interval
pub const REVEAL_STAGE_MAX: u8 = 4;

// Reveal thresholds for the static layers
pub const REVEAL_BUSHES: u8 = 1;
pub const REVEAL_FOREST_TREES: u8 = 2;
pub const REVEAL_FLOWERS: u8 = 3;
pub const REVEAL_PARTICLES: u8 = 4;

// Backdrop composition
pub const GROUND_LINE: f32 = 0.82; // fraction of height where the forest floor starts
pub const BEAM_COUNT: usize = 4;
pub const BUSH_COUNT: usize = 14;
pub const FOREST_TREE_COUNT: usize = 9;
pub const FLOWER_COUNT: usize = 24;

// Ambient particle field
pub const PARTICLE_COUNT: usize = 60;
pub const PARTICLE_PHASE_STEP: f32 = 0.02; // phase advance per frame at speed 1
pub const PARTICLE_DRIFT_X: f32 = 0.6; // px per frame at speed 1
pub const PARTICLE_DRIFT_Y: f32 = 0.4;
pub const PARTICLE_BAND_TOP: f32 = 0.15; // fraction of height
pub const PARTICLE_BAND_BOTTOM: f32 = 0.85;
pub const PARTICLE_RADIUS_MIN: f32 = 1.5;
pub const PARTICLE_RADIUS_MAX: f32 = 4.0;
pub const PARTICLE_SPEED_MIN: f32 = 0.3;
pub const PARTICLE_SPEED_MAX: f32 = 1.2;

// Growth entities
pub const TREE_CAPACITY: usize = 256;
pub const TREE_GROWTH_RATE: f32 = 0.02; // scale gained per frame
pub const TREE_TRUNK_MIN: f32 = 40.0;
pub const TREE_TRUNK_MAX: f32 = 70.0;
pub const TREE_CROWN_MIN: f32 = 28.0;
pub const TREE_CROWN_MAX: f32 = 44.0;
pub const TREE_WOBBLE: f32 = 2.5; // crown sway in px at full scale

// Sparkle burst attached to each spawned tree
pub const SPARKLES_PER_SPAWN: usize = 8;
pub const SPARKLE_SPREAD: f32 = 24.0; // max offset from the spawn point
pub const SPARKLE_RISE: f32 = 0.6; // upward drift per frame
pub const SPARKLE_DECAY_MIN: f32 = 0.01;
pub const SPARKLE_DECAY_MAX: f32 = 0.03;
pub const SPARKLE_SIZE_MIN: f32 = 2.0;
pub const SPARKLE_SIZE_MAX: f32 = 5.0;

// Lettering
pub const WAVE_SEGMENTS: usize = 60;
pub const BOB_AMPLITUDE: f32 = 6.0; // px
pub const BOB_SPEED: f64 = 0.003; // radians per ms
pub const BOB_LETTER_PHASE: f64 = 0.6; // radians between neighbouring letters
pub const FILLER_GLYPHS: &[char] = &['+', '*', '-', '/'];
pub const DEFAULT_WORDS: &[&str] = &[
    "GROW", "BLOOM", "DRIFT", "GLOW", "ROOTS", "MOSS", "FERN", "QUIET", "WILD", "HAZY",
];
