//! Stroke font used by the lettering scene.
//!
//! Every glyph lives in a unit cell with the origin at the top-left and y
//! growing downwards. A stroke with an end point is a line segment; a stroke
//! without one is a dot.

use crate::surface::{Arc, Paint, StrokeStyle, Surface};
use glam::Vec2;

pub type GlyphPoint = [f32; 2];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphStroke {
    pub from: GlyphPoint,
    pub to: Option<GlyphPoint>,
}

const fn s(x0: f32, y0: f32, x1: f32, y1: f32) -> GlyphStroke {
    GlyphStroke {
        from: [x0, y0],
        to: Some([x1, y1]),
    }
}

const fn d(x: f32, y: f32) -> GlyphStroke {
    GlyphStroke {
        from: [x, y],
        to: None,
    }
}

const A: &[GlyphStroke] = &[s(0.0, 1.0, 0.5, 0.0), s(0.5, 0.0, 1.0, 1.0), s(0.22, 0.6, 0.78, 0.6)];
const B: &[GlyphStroke] = &[
    s(0.0, 0.0, 0.0, 1.0),
    s(0.0, 0.0, 0.7, 0.0),
    s(0.7, 0.0, 0.9, 0.15),
    s(0.9, 0.15, 0.9, 0.35),
    s(0.9, 0.35, 0.7, 0.5),
    s(0.0, 0.5, 0.7, 0.5),
    s(0.7, 0.5, 0.95, 0.65),
    s(0.95, 0.65, 0.95, 0.85),
    s(0.95, 0.85, 0.75, 1.0),
    s(0.75, 1.0, 0.0, 1.0),
];
const C: &[GlyphStroke] = &[
    s(1.0, 0.1, 0.7, 0.0),
    s(0.7, 0.0, 0.3, 0.0),
    s(0.3, 0.0, 0.0, 0.3),
    s(0.0, 0.3, 0.0, 0.7),
    s(0.0, 0.7, 0.3, 1.0),
    s(0.3, 1.0, 0.7, 1.0),
    s(0.7, 1.0, 1.0, 0.9),
];
const D: &[GlyphStroke] = &[
    s(0.0, 0.0, 0.0, 1.0),
    s(0.0, 0.0, 0.6, 0.0),
    s(0.6, 0.0, 1.0, 0.35),
    s(1.0, 0.35, 1.0, 0.65),
    s(1.0, 0.65, 0.6, 1.0),
    s(0.6, 1.0, 0.0, 1.0),
];
const E: &[GlyphStroke] = &[
    s(0.0, 0.0, 0.0, 1.0),
    s(0.0, 0.0, 1.0, 0.0),
    s(0.0, 0.5, 0.75, 0.5),
    s(0.0, 1.0, 1.0, 1.0),
];
const F: &[GlyphStroke] = &[s(0.0, 0.0, 0.0, 1.0), s(0.0, 0.0, 1.0, 0.0), s(0.0, 0.5, 0.75, 0.5)];
const G: &[GlyphStroke] = &[
    s(1.0, 0.1, 0.7, 0.0),
    s(0.7, 0.0, 0.3, 0.0),
    s(0.3, 0.0, 0.0, 0.3),
    s(0.0, 0.3, 0.0, 0.7),
    s(0.0, 0.7, 0.3, 1.0),
    s(0.3, 1.0, 0.7, 1.0),
    s(0.7, 1.0, 1.0, 0.75),
    s(1.0, 0.75, 1.0, 0.55),
    s(1.0, 0.55, 0.55, 0.55),
];
const H: &[GlyphStroke] = &[s(0.0, 0.0, 0.0, 1.0), s(1.0, 0.0, 1.0, 1.0), s(0.0, 0.5, 1.0, 0.5)];
const I: &[GlyphStroke] = &[s(0.5, 0.0, 0.5, 1.0), s(0.2, 0.0, 0.8, 0.0), s(0.2, 1.0, 0.8, 1.0)];
const J: &[GlyphStroke] = &[
    s(0.2, 0.0, 1.0, 0.0),
    s(0.7, 0.0, 0.7, 0.8),
    s(0.7, 0.8, 0.5, 1.0),
    s(0.5, 1.0, 0.2, 1.0),
    s(0.2, 1.0, 0.0, 0.8),
];
const K: &[GlyphStroke] = &[s(0.0, 0.0, 0.0, 1.0), s(1.0, 0.0, 0.0, 0.55), s(0.3, 0.4, 1.0, 1.0)];
const L: &[GlyphStroke] = &[s(0.0, 0.0, 0.0, 1.0), s(0.0, 1.0, 1.0, 1.0)];
const M: &[GlyphStroke] = &[
    s(0.0, 1.0, 0.0, 0.0),
    s(0.0, 0.0, 0.5, 0.55),
    s(0.5, 0.55, 1.0, 0.0),
    s(1.0, 0.0, 1.0, 1.0),
];
const N: &[GlyphStroke] = &[s(0.0, 1.0, 0.0, 0.0), s(0.0, 0.0, 1.0, 1.0), s(1.0, 1.0, 1.0, 0.0)];
const O: &[GlyphStroke] = &[
    s(0.3, 0.0, 0.7, 0.0),
    s(0.7, 0.0, 1.0, 0.3),
    s(1.0, 0.3, 1.0, 0.7),
    s(1.0, 0.7, 0.7, 1.0),
    s(0.7, 1.0, 0.3, 1.0),
    s(0.3, 1.0, 0.0, 0.7),
    s(0.0, 0.7, 0.0, 0.3),
    s(0.0, 0.3, 0.3, 0.0),
];
const P: &[GlyphStroke] = &[
    s(0.0, 1.0, 0.0, 0.0),
    s(0.0, 0.0, 0.75, 0.0),
    s(0.75, 0.0, 1.0, 0.2),
    s(1.0, 0.2, 1.0, 0.35),
    s(1.0, 0.35, 0.75, 0.55),
    s(0.75, 0.55, 0.0, 0.55),
];
const Q: &[GlyphStroke] = &[
    s(0.3, 0.0, 0.7, 0.0),
    s(0.7, 0.0, 1.0, 0.3),
    s(1.0, 0.3, 1.0, 0.7),
    s(1.0, 0.7, 0.7, 1.0),
    s(0.7, 1.0, 0.3, 1.0),
    s(0.3, 1.0, 0.0, 0.7),
    s(0.0, 0.7, 0.0, 0.3),
    s(0.0, 0.3, 0.3, 0.0),
    s(0.6, 0.7, 1.0, 1.0),
];
const R: &[GlyphStroke] = &[
    s(0.0, 1.0, 0.0, 0.0),
    s(0.0, 0.0, 0.75, 0.0),
    s(0.75, 0.0, 1.0, 0.2),
    s(1.0, 0.2, 1.0, 0.35),
    s(1.0, 0.35, 0.75, 0.55),
    s(0.75, 0.55, 0.0, 0.55),
    s(0.45, 0.55, 1.0, 1.0),
];
const S: &[GlyphStroke] = &[
    s(1.0, 0.1, 0.75, 0.0),
    s(0.75, 0.0, 0.25, 0.0),
    s(0.25, 0.0, 0.0, 0.2),
    s(0.0, 0.2, 0.0, 0.35),
    s(0.0, 0.35, 0.25, 0.5),
    s(0.25, 0.5, 0.75, 0.5),
    s(0.75, 0.5, 1.0, 0.65),
    s(1.0, 0.65, 1.0, 0.8),
    s(1.0, 0.8, 0.75, 1.0),
    s(0.75, 1.0, 0.25, 1.0),
    s(0.25, 1.0, 0.0, 0.9),
];
const T: &[GlyphStroke] = &[s(0.0, 0.0, 1.0, 0.0), s(0.5, 0.0, 0.5, 1.0)];
const U: &[GlyphStroke] = &[
    s(0.0, 0.0, 0.0, 0.7),
    s(0.0, 0.7, 0.3, 1.0),
    s(0.3, 1.0, 0.7, 1.0),
    s(0.7, 1.0, 1.0, 0.7),
    s(1.0, 0.7, 1.0, 0.0),
];
const V: &[GlyphStroke] = &[s(0.0, 0.0, 0.5, 1.0), s(0.5, 1.0, 1.0, 0.0)];
const W: &[GlyphStroke] = &[
    s(0.0, 0.0, 0.25, 1.0),
    s(0.25, 1.0, 0.5, 0.45),
    s(0.5, 0.45, 0.75, 1.0),
    s(0.75, 1.0, 1.0, 0.0),
];
const X: &[GlyphStroke] = &[s(0.0, 0.0, 1.0, 1.0), s(1.0, 0.0, 0.0, 1.0)];
const Y: &[GlyphStroke] = &[s(0.0, 0.0, 0.5, 0.5), s(1.0, 0.0, 0.5, 0.5), s(0.5, 0.5, 0.5, 1.0)];
const Z: &[GlyphStroke] = &[s(0.0, 0.0, 1.0, 0.0), s(1.0, 0.0, 0.0, 1.0), s(0.0, 1.0, 1.0, 1.0)];

const PLUS: &[GlyphStroke] = &[s(0.5, 0.2, 0.5, 0.8), s(0.2, 0.5, 0.8, 0.5)];
const STAR: &[GlyphStroke] = &[s(0.5, 0.15, 0.5, 0.85), s(0.2, 0.3, 0.8, 0.7), s(0.8, 0.3, 0.2, 0.7)];
const DASH: &[GlyphStroke] = &[s(0.2, 0.5, 0.8, 0.5)];
const SLASH: &[GlyphStroke] = &[s(0.85, 0.0, 0.15, 1.0)];
const PERIOD: &[GlyphStroke] = &[d(0.5, 0.92)];
const BANG: &[GlyphStroke] = &[s(0.5, 0.0, 0.5, 0.7), d(0.5, 0.95)];
const QUESTION: &[GlyphStroke] = &[
    s(0.1, 0.2, 0.3, 0.0),
    s(0.3, 0.0, 0.7, 0.0),
    s(0.7, 0.0, 0.9, 0.2),
    s(0.9, 0.2, 0.9, 0.35),
    s(0.9, 0.35, 0.5, 0.55),
    s(0.5, 0.55, 0.5, 0.72),
    d(0.5, 0.95),
];
const APOSTROPHE: &[GlyphStroke] = &[s(0.5, 0.0, 0.45, 0.25)];
const SPACE: &[GlyphStroke] = &[];

/// Strokes for `ch`, folding lower case to upper case first.
pub fn strokes(ch: char) -> Option<&'static [GlyphStroke]> {
    let table = match ch.to_ascii_uppercase() {
        'A' => A,
        'B' => B,
        'C' => C,
        'D' => D,
        'E' => E,
        'F' => F,
        'G' => G,
        'H' => H,
        'I' => I,
        'J' => J,
        'K' => K,
        'L' => L,
        'M' => M,
        'N' => N,
        'O' => O,
        'P' => P,
        'Q' => Q,
        'R' => R,
        'S' => S,
        'T' => T,
        'U' => U,
        'V' => V,
        'W' => W,
        'X' => X,
        'Y' => Y,
        'Z' => Z,
        '+' => PLUS,
        '*' => STAR,
        '-' => DASH,
        '/' => SLASH,
        '.' => PERIOD,
        '!' => BANG,
        '?' => QUESTION,
        '\'' => APOSTROPHE,
        ' ' => SPACE,
        _ => return None,
    };
    Some(table)
}

#[inline]
pub fn has_glyph(ch: char) -> bool {
    strokes(ch).is_some()
}

/// Draws `ch` scaled into the box at `origin` with the given `size`.
///
/// Returns the number of primitives issued; unknown characters issue none.
pub fn draw_glyph(
    surface: &mut dyn Surface,
    ch: char,
    origin: Vec2,
    size: Vec2,
    stroke: &StrokeStyle,
) -> usize {
    let Some(table) = strokes(ch) else {
        return 0;
    };
    let place = |p: GlyphPoint| origin + Vec2::new(p[0] * size.x, p[1] * size.y);
    let dot_paint = Paint::Solid(stroke.color);
    for glyph_stroke in table {
        let from = place(glyph_stroke.from);
        match glyph_stroke.to {
            Some(to) => surface.stroke_line(from, place(to), stroke),
            None => surface.fill_arc(Arc::circle(from, stroke.width * 0.8), &dot_paint),
        }
    }
    table.len()
}

/// Horizontal advance of `count` glyph cells.
#[inline]
pub fn text_width(count: usize, cell: Vec2, tracking: f32) -> f32 {
    if count == 0 {
        return 0.0;
    }
    count as f32 * cell.x + (count - 1) as f32 * tracking
}

/// Lays `text` out left to right, shifting each letter vertically by
/// `offset(index)`.
pub fn draw_text(
    surface: &mut dyn Surface,
    text: &str,
    origin: Vec2,
    cell: Vec2,
    tracking: f32,
    stroke: &StrokeStyle,
    offset: impl Fn(usize) -> f32,
) -> usize {
    text.chars()
        .enumerate()
        .map(|(i, ch)| {
            let at = origin + Vec2::new(i as f32 * (cell.x + tracking), offset(i));
            draw_glyph(&mut *surface, ch, at, cell, stroke)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_letter_is_in_the_table() {
        for ch in 'A'..='Z' {
            let table = strokes(ch).unwrap_or_else(|| panic!("missing {ch}"));
            assert!(!table.is_empty(), "{ch} has no strokes");
        }
    }

    #[test]
    fn table_points_are_normalized() {
        let chars = ('A'..='Z').chain("+*-/.!?'".chars());
        for ch in chars {
            for st in strokes(ch).unwrap_or_default() {
                let mut pts = vec![st.from];
                pts.extend(st.to);
                for p in pts {
                    assert!((0.0..=1.0).contains(&p[0]) && (0.0..=1.0).contains(&p[1]), "{ch}");
                }
            }
        }
    }

    #[test]
    fn lower_case_folds() {
        assert_eq!(strokes('q'), strokes('Q'));
        assert!(strokes('7').is_none());
    }

    #[test]
    fn width_of_empty_text_is_zero() {
        assert_eq!(text_width(0, Vec2::new(10.0, 20.0), 4.0), 0.0);
        assert_eq!(text_width(3, Vec2::new(10.0, 20.0), 4.0), 38.0);
    }
}
