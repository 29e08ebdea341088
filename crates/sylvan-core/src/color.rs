/// 8-bit RGB colour with a floating point opacity, matching what both the
/// Canvas 2D API and tiny-skia accept.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same colour with `alpha` clamped into [0, 1].
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn to_css(self) -> String {
        format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a)
    }
}

pub const TRANSPARENT: Rgba = Rgba {
    r: 0,
    g: 0,
    b: 0,
    a: 0.0,
};

// Backdrop
pub const SKY_TOP: Rgba = Rgba::rgb(10, 28, 38);
pub const SKY_MID: Rgba = Rgba::rgb(24, 64, 62);
pub const FOREST_FLOOR: Rgba = Rgba::rgb(18, 40, 26);
pub const BEAM: Rgba = Rgba::rgb(255, 244, 200);
pub const TRUNK: Rgba = Rgba::rgb(78, 52, 38);
pub const INK: Rgba = Rgba::rgb(236, 240, 226);
pub const INK_DIM: Rgba = Rgba::rgb(120, 150, 140);
pub const PAPER: Rgba = Rgba::rgb(16, 20, 26);

pub const BUSH_COLORS: &[Rgba] = &[
    Rgba::rgb(34, 84, 52),
    Rgba::rgb(44, 98, 58),
    Rgba::rgb(28, 72, 50),
];

pub const FOREST_TREE_COLORS: &[Rgba] = &[
    Rgba::rgb(30, 90, 64),
    Rgba::rgb(38, 104, 70),
    Rgba::rgb(24, 78, 60),
];

pub const FLOWER_COLORS: &[Rgba] = &[
    Rgba::rgb(255, 182, 193),
    Rgba::rgb(255, 226, 120),
    Rgba::rgb(190, 160, 255),
    Rgba::rgb(255, 150, 120),
];

pub const GROWTH_TREE_COLORS: &[Rgba] = &[
    Rgba::rgb(96, 200, 120),
    Rgba::rgb(120, 220, 160),
    Rgba::rgb(160, 230, 110),
    Rgba::rgb(90, 190, 170),
];

pub const SPARKLE_COLORS: &[Rgba] = &[
    Rgba::rgb(255, 250, 200),
    Rgba::rgb(200, 255, 220),
    Rgba::rgb(255, 220, 250),
];

pub const PARTICLE_COLORS: &[Rgba] = &[
    Rgba::rgb(220, 255, 200),
    Rgba::rgb(255, 240, 170),
    Rgba::rgb(180, 240, 255),
];
