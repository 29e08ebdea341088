//! Drawing capability the scene renders against.
//!
//! The scene never talks to a concrete rasterizer. Frontends implement
//! [`Surface`] over a browser canvas or a software pixmap, and tests use
//! [`RecordingSurface`] to inspect what a frame issued.

use crate::color::Rgba;
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.x + self.w && p.y >= self.y && p.y < self.y + self.h
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

pub type ColorStops = SmallVec<[ColorStop; 4]>;

#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: ColorStops,
}

/// Concentric radial gradient; stop offsets run from `inner_radius` to
/// `outer_radius`.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub stops: ColorStops,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Linear(LinearGradient),
    Radial(RadialGradient),
}

impl Paint {
    pub fn linear(start: Vec2, end: Vec2, stops: &[(f32, Rgba)]) -> Self {
        Paint::Linear(LinearGradient {
            start,
            end,
            stops: collect_stops(stops),
        })
    }

    pub fn radial(center: Vec2, inner_radius: f32, outer_radius: f32, stops: &[(f32, Rgba)]) -> Self {
        Paint::Radial(RadialGradient {
            center,
            inner_radius,
            outer_radius,
            stops: collect_stops(stops),
        })
    }

    /// Soft round glow fading from `color` at the centre to transparent.
    pub fn glow(center: Vec2, radius: f32, color: Rgba) -> Self {
        Self::radial(
            center,
            0.0,
            radius,
            &[(0.0, color), (0.4, color.with_alpha(color.a * 0.5)), (1.0, color.with_alpha(0.0))],
        )
    }
}

fn collect_stops(stops: &[(f32, Rgba)]) -> ColorStops {
    stops
        .iter()
        .map(|&(offset, color)| ColorStop {
            offset: offset.clamp(0.0, 1.0),
            color,
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgba,
    pub width: f32,
}

impl StrokeStyle {
    pub const fn new(color: Rgba, width: f32) -> Self {
        Self { color, width }
    }
}

/// Circular arc, angles in radians measured clockwise from +x in surface space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc {
    pub center: Vec2,
    pub radius: f32,
    pub start: f32,
    pub end: f32,
}

impl Arc {
    pub fn circle(center: Vec2, radius: f32) -> Self {
        Self {
            center,
            radius,
            start: 0.0,
            end: std::f32::consts::TAU,
        }
    }
}

/// Primitive 2D drawing operations with a canvas-style state stack.
///
/// `save`/`restore` bracket `translate`/`scale`; every draw call is affected by
/// the current transform.
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    fn clear(&mut self);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn scale(&mut self, factor: f32);

    fn fill_rect(&mut self, rect: Rect, paint: &Paint);
    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, paint: &Paint);
    fn fill_arc(&mut self, arc: Arc, paint: &Paint);
    fn stroke_arc(&mut self, arc: Arc, stroke: &StrokeStyle);
    fn fill_polygon(&mut self, points: &[Vec2], paint: &Paint);
    fn stroke_polyline(&mut self, points: &[Vec2], stroke: &StrokeStyle);
    fn fill_text(&mut self, text: &str, at: Vec2, size: f32, color: Rgba);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: &StrokeStyle) {
        self.stroke_polyline(&[from, to], stroke);
    }

    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width(), self.height())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Save,
    Restore,
    Translate(Vec2),
    Scale(f32),
    FillRect(Rect, Paint),
    FillEllipse { center: Vec2, radii: Vec2, paint: Paint },
    FillArc(Arc, Paint),
    StrokeArc(Arc, StrokeStyle),
    FillPolygon(Vec<Vec2>, Paint),
    StrokePolyline(Vec<Vec2>, StrokeStyle),
    FillText { text: String, at: Vec2, size: f32, color: Rgba },
}

impl DrawCommand {
    /// True for commands that put pixels on the surface.
    pub fn is_primitive(&self) -> bool {
        !matches!(
            self,
            DrawCommand::Clear
                | DrawCommand::Save
                | DrawCommand::Restore
                | DrawCommand::Translate(_)
                | DrawCommand::Scale(_)
        )
    }
}

/// Surface that records every call instead of rasterizing.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    depth: usize,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            depth: 0,
            commands: Vec::new(),
        }
    }

    pub fn primitive_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_primitive()).count()
    }

    /// Current `save` nesting; zero after a well-formed frame.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn save(&mut self) {
        self.depth += 1;
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.commands.push(DrawCommand::Translate(offset));
    }

    fn scale(&mut self, factor: f32) {
        self.commands.push(DrawCommand::Scale(factor));
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        self.commands.push(DrawCommand::FillRect(rect, paint.clone()));
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, paint: &Paint) {
        self.commands.push(DrawCommand::FillEllipse {
            center,
            radii,
            paint: paint.clone(),
        });
    }

    fn fill_arc(&mut self, arc: Arc, paint: &Paint) {
        self.commands.push(DrawCommand::FillArc(arc, paint.clone()));
    }

    fn stroke_arc(&mut self, arc: Arc, stroke: &StrokeStyle) {
        self.commands.push(DrawCommand::StrokeArc(arc, *stroke));
    }

    fn fill_polygon(&mut self, points: &[Vec2], paint: &Paint) {
        self.commands
            .push(DrawCommand::FillPolygon(points.to_vec(), paint.clone()));
    }

    fn stroke_polyline(&mut self, points: &[Vec2], stroke: &StrokeStyle) {
        self.commands
            .push(DrawCommand::StrokePolyline(points.to_vec(), *stroke));
    }

    fn fill_text(&mut self, text: &str, at: Vec2, size: f32, color: Rgba) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_owned(),
            at,
            size,
            color,
        });
    }
}
