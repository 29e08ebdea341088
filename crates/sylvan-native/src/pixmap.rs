use glam::Vec2;
use std::f32::consts::TAU;
use std::path::Path;
use sylvan_core::surface::ColorStop;
use sylvan_core::{Arc, Paint, Rect, Rgba, StrokeStyle, Surface};
use tiny_skia::{
    Color, FillRule, GradientStop, LineCap, LineJoin, LinearGradient, PathBuilder, Pixmap, Point,
    RadialGradient, SpreadMode, Stroke, Transform,
};

/// Software framebuffer implementing [`Surface`] with tiny-skia.
pub struct PixmapSurface {
    pixmap: Pixmap,
    transform: Transform,
    stack: Vec<Transform>,
    text_skipped: bool,
}

impl PixmapSurface {
    /// `None` for a zero-sized framebuffer.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Some(Self {
            pixmap: Pixmap::new(width, height)?,
            transform: Transform::identity(),
            stack: Vec::new(),
            text_skipped: false,
        })
    }

    pub fn save_png(&self, path: &Path) -> anyhow::Result<()> {
        self.pixmap.save_png(path)?;
        Ok(())
    }
}

fn color(c: Rgba) -> Color {
    Color::from_rgba8(c.r, c.g, c.b, (c.a.clamp(0.0, 1.0) * 255.0).round() as u8)
}

fn point(v: Vec2) -> Point {
    Point::from_xy(v.x, v.y)
}

/// Stops remapped so offset 0 lands at `inner` of the gradient length.
fn gradient_stops(stops: &[ColorStop], inner: f32) -> Vec<GradientStop> {
    stops
        .iter()
        .map(|s| GradientStop::new(inner + s.offset * (1.0 - inner), color(s.color)))
        .collect()
}

fn first_stop(stops: &[ColorStop]) -> Color {
    stops
        .first()
        .map(|s| color(s.color))
        .unwrap_or(Color::TRANSPARENT)
}

fn skia_paint(paint: &Paint) -> tiny_skia::Paint<'static> {
    let mut out = tiny_skia::Paint::default();
    out.anti_alias = true;
    match paint {
        Paint::Solid(c) => out.set_color(color(*c)),
        Paint::Linear(g) => {
            match LinearGradient::new(
                point(g.start),
                point(g.end),
                gradient_stops(&g.stops, 0.0),
                SpreadMode::Pad,
                Transform::identity(),
            ) {
                Some(shader) => out.shader = shader,
                None => out.set_color(first_stop(&g.stops)),
            }
        }
        Paint::Radial(g) => {
            let inner = if g.outer_radius > 0.0 {
                (g.inner_radius / g.outer_radius).clamp(0.0, 1.0)
            } else {
                0.0
            };
            match RadialGradient::new(
                point(g.center),
                point(g.center),
                g.outer_radius,
                gradient_stops(&g.stops, inner),
                SpreadMode::Pad,
                Transform::identity(),
            ) {
                Some(shader) => out.shader = shader,
                None => out.set_color(first_stop(&g.stops)),
            }
        }
    }
    out
}

fn arc_points(arc: &Arc) -> Vec<Vec2> {
    let sweep = arc.end - arc.start;
    let segments = ((sweep.abs() * arc.radius / 3.0).ceil() as usize).clamp(8, 96);
    (0..=segments)
        .map(|i| {
            let a = arc.start + sweep * i as f32 / segments as f32;
            arc.center + Vec2::new(a.cos(), a.sin()) * arc.radius
        })
        .collect()
}

fn polyline(points: &[Vec2], close: bool) -> Option<tiny_skia::Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for p in rest {
        pb.line_to(p.x, p.y);
    }
    if close {
        pb.close();
    }
    pb.finish()
}

impl Surface for PixmapSurface {
    fn width(&self) -> f32 {
        self.pixmap.width() as f32
    }

    fn height(&self) -> f32 {
        self.pixmap.height() as f32
    }

    fn clear(&mut self) {
        self.pixmap.fill(Color::BLACK);
    }

    fn save(&mut self) {
        self.stack.push(self.transform);
    }

    fn restore(&mut self) {
        self.transform = self.stack.pop().unwrap_or_default();
    }

    fn translate(&mut self, offset: Vec2) {
        self.transform = self.transform.pre_translate(offset.x, offset.y);
    }

    fn scale(&mut self, factor: f32) {
        self.transform = self.transform.pre_scale(factor, factor);
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        if let Some(r) = tiny_skia::Rect::from_xywh(rect.x, rect.y, rect.w, rect.h) {
            self.pixmap
                .fill_rect(r, &skia_paint(paint), self.transform, None);
        }
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, paint: &Paint) {
        let oval = tiny_skia::Rect::from_xywh(
            center.x - radii.x,
            center.y - radii.y,
            radii.x * 2.0,
            radii.y * 2.0,
        );
        if let Some(path) = oval.and_then(PathBuilder::from_oval) {
            self.pixmap.fill_path(
                &path,
                &skia_paint(paint),
                FillRule::Winding,
                self.transform,
                None,
            );
        }
    }

    fn fill_arc(&mut self, arc: Arc, paint: &Paint) {
        let path = if (arc.end - arc.start).abs() >= TAU {
            PathBuilder::from_circle(arc.center.x, arc.center.y, arc.radius)
        } else {
            polyline(&arc_points(&arc), true)
        };
        if let Some(path) = path {
            self.pixmap.fill_path(
                &path,
                &skia_paint(paint),
                FillRule::Winding,
                self.transform,
                None,
            );
        }
    }

    fn stroke_arc(&mut self, arc: Arc, stroke: &StrokeStyle) {
        let closed = (arc.end - arc.start).abs() >= TAU;
        if let Some(path) = polyline(&arc_points(&arc), closed) {
            self.stroke_path(&path, stroke);
        }
    }

    fn fill_polygon(&mut self, points: &[Vec2], paint: &Paint) {
        if let Some(path) = polyline(points, true) {
            self.pixmap.fill_path(
                &path,
                &skia_paint(paint),
                FillRule::Winding,
                self.transform,
                None,
            );
        }
    }

    fn stroke_polyline(&mut self, points: &[Vec2], stroke: &StrokeStyle) {
        if points.len() < 2 {
            return;
        }
        if let Some(path) = polyline(points, false) {
            self.stroke_path(&path, stroke);
        }
    }

    fn fill_text(&mut self, text: &str, _at: Vec2, _size: f32, _color: Rgba) {
        // tiny-skia has no text shaping
        if !self.text_skipped {
            log::debug!("text is not rasterized natively (first skipped: {text:?})");
            self.text_skipped = true;
        }
    }
}

impl PixmapSurface {
    fn stroke_path(&mut self, path: &tiny_skia::Path, style: &StrokeStyle) {
        let mut paint = tiny_skia::Paint::default();
        paint.anti_alias = true;
        paint.set_color(color(style.color));
        let stroke = Stroke {
            width: style.width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(path, &paint, &stroke, self.transform, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_framebuffer_is_refused() {
        assert!(PixmapSurface::new(0, 10).is_none());
        assert!(PixmapSurface::new(4, 4).is_some());
    }

    #[test]
    fn restore_without_save_falls_back_to_identity() {
        let mut s = PixmapSurface::new(8, 8).expect("pixmap");
        s.translate(Vec2::new(3.0, 4.0));
        s.save();
        s.scale(2.0);
        s.restore();
        assert_eq!(s.transform, Transform::from_translate(3.0, 4.0));
        s.restore();
        assert_eq!(s.transform, Transform::identity());
    }

    #[test]
    fn solid_fill_reaches_the_pixels() {
        let mut s = PixmapSurface::new(8, 8).expect("pixmap");
        s.clear();
        s.fill_rect(Rect::new(0.0, 0.0, 8.0, 8.0), &Paint::Solid(Rgba::rgb(255, 0, 0)));
        let px = s.pixmap.pixel(4, 4).expect("pixel");
        assert_eq!((px.red(), px.green(), px.blue()), (255, 0, 0));
    }
}
