//! Two rows of rotating words drawn with the stroke font over wave guides.

use crate::color::{INK, INK_DIM, PAPER};
use crate::glyph::{draw_text, text_width};
use crate::surface::{Paint, StrokeStyle, Surface};
use crate::wave::{draw_wave_line, Wave};
use crate::words::{Row, WordRotation};
use glam::Vec2;

const CELL_ASPECT: f32 = 0.6; // glyph cell width / height
const TRACKING: f32 = 0.18; // letter gap as a fraction of cell height
const ROW_Y: [f32; 2] = [0.22, 0.54]; // fraction of height for the top of each row
const GUIDES_PER_ROW: usize = 3;

#[derive(Clone, Debug)]
pub struct Lettering {
    words: Vec<String>,
    rotation: WordRotation,
}

impl Lettering {
    pub fn new(words: Vec<String>, interval_ms: f64) -> Self {
        let rotation = WordRotation::new(words.len(), interval_ms);
        Self { words, rotation }
    }

    pub fn rotation(&self) -> &WordRotation {
        &self.rotation
    }

    pub fn rotation_mut(&mut self) -> &mut WordRotation {
        &mut self.rotation
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Text currently shown on `row`, filler while paused.
    pub fn shown(&self, row: Row) -> String {
        self.rotation.display(&self.words, row).into_owned()
    }

    pub fn update(&mut self, now_ms: f64) {
        self.rotation.update(now_ms);
    }

    pub fn draw(&self, surface: &mut dyn Surface, time_ms: f64) {
        let bounds = surface.bounds();
        let (w, h) = (bounds.w, bounds.h);
        surface.fill_rect(bounds, &Paint::Solid(PAPER));

        let longest = self
            .words
            .iter()
            .map(|word| word.chars().count())
            .max()
            .unwrap_or(1)
            .max(1) as f32;
        // fit the longest word into 84% of the width
        let fit = w * 0.84 / (longest * CELL_ASPECT + (longest - 1.0) * TRACKING);
        let cell_h = (h * 0.16).min(fit);
        let cell = Vec2::new(cell_h * CELL_ASPECT, cell_h);
        let tracking = cell_h * TRACKING;
        let ink = StrokeStyle::new(INK, (cell_h * 0.06).max(1.0));
        let guide = StrokeStyle::new(INK_DIM.with_alpha(0.6), 1.0);
        let phase = (time_ms * 0.002) as f32;

        for (row, top_frac) in [Row::Top, Row::Bottom].into_iter().zip(ROW_Y) {
            let top = h * top_frac;
            for k in 0..GUIDES_PER_ROW {
                let kf = k as f32;
                let wave = Wave {
                    x0: w * 0.08,
                    x1: w * 0.92,
                    y: top + cell_h + 10.0 + kf * 8.0,
                    phase: phase + kf * 1.1,
                    amplitude: 3.0 + kf * 2.0,
                    frequency: 2.0 + kf,
                };
                draw_wave_line(surface, &wave, &guide);
            }

            let text = self.rotation.display(&self.words, row);
            let width = text_width(text.chars().count(), cell, tracking);
            let origin = Vec2::new((w - width) * 0.5, top);
            let row_shift = if row == Row::Top { 0 } else { 3 };
            draw_text(surface, &text, origin, cell, tracking, &ink, |i| {
                self.rotation.bob_offset(time_ms, i + row_shift)
            });
        }

        let caption = if self.rotation.is_paused() {
            "paused - click to resume"
        } else {
            "click to pause"
        };
        surface.fill_text(caption, Vec2::new(w * 0.08, h * 0.92), (h * 0.03).max(10.0), INK_DIM);
    }
}
