use glam::Vec2;
use std::f64::consts::TAU;
use sylvan_core::{Arc, Paint, Rect, Rgba, StrokeStyle, Surface};
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Surface`] over a browser `CanvasRenderingContext2d`.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    width: f32,
    height: f32,
}

impl CanvasSurface {
    /// `None` when the canvas cannot hand out a 2D context.
    pub fn from_canvas(canvas: &web::HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            width: canvas.width() as f32,
            height: canvas.height() as f32,
        })
    }

    fn set_fill(&self, paint: &Paint) {
        match paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(&color.to_css()),
            Paint::Linear(g) => {
                let gradient = self.ctx.create_linear_gradient(
                    g.start.x as f64,
                    g.start.y as f64,
                    g.end.x as f64,
                    g.end.y as f64,
                );
                for stop in &g.stops {
                    let _ = gradient.add_color_stop(stop.offset, &stop.color.to_css());
                }
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
            Paint::Radial(g) => {
                let (cx, cy) = (g.center.x as f64, g.center.y as f64);
                match self.ctx.create_radial_gradient(
                    cx,
                    cy,
                    g.inner_radius as f64,
                    cx,
                    cy,
                    g.outer_radius as f64,
                ) {
                    Ok(gradient) => {
                        for stop in &g.stops {
                            let _ = gradient.add_color_stop(stop.offset, &stop.color.to_css());
                        }
                        self.ctx.set_fill_style_canvas_gradient(&gradient);
                    }
                    // negative radii are rejected by the browser; fall back to the first stop
                    Err(_) => {
                        let color = g.stops.first().map(|s| s.color).unwrap_or(sylvan_core::color::TRANSPARENT);
                        self.ctx.set_fill_style_str(&color.to_css());
                    }
                }
            }
        }
    }

    fn set_stroke(&self, stroke: &StrokeStyle) {
        self.ctx.set_stroke_style_str(&stroke.color.to_css());
        self.ctx.set_line_width(stroke.width as f64);
        self.ctx.set_line_cap("round");
        self.ctx.set_line_join("round");
    }

    fn arc_path(&self, arc: &Arc) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            arc.center.x as f64,
            arc.center.y as f64,
            arc.radius.max(0.0) as f64,
            arc.start as f64,
            arc.end as f64,
        );
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        let _ = self.ctx.translate(offset.x as f64, offset.y as f64);
    }

    fn scale(&mut self, factor: f32) {
        let _ = self.ctx.scale(factor as f64, factor as f64);
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        self.set_fill(paint);
        self.ctx
            .fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, paint: &Paint) {
        self.set_fill(paint);
        self.ctx.begin_path();
        let _ = self.ctx.ellipse(
            center.x as f64,
            center.y as f64,
            radii.x.max(0.0) as f64,
            radii.y.max(0.0) as f64,
            0.0,
            0.0,
            TAU,
        );
        self.ctx.fill();
    }

    fn fill_arc(&mut self, arc: Arc, paint: &Paint) {
        self.set_fill(paint);
        self.arc_path(&arc);
        self.ctx.fill();
    }

    fn stroke_arc(&mut self, arc: Arc, stroke: &StrokeStyle) {
        self.set_stroke(stroke);
        self.arc_path(&arc);
        self.ctx.stroke();
    }

    fn fill_polygon(&mut self, points: &[Vec2], paint: &Paint) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.set_fill(paint);
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn stroke_polyline(&mut self, points: &[Vec2], stroke: &StrokeStyle) {
        if points.len() < 2 {
            return;
        }
        self.set_stroke(stroke);
        self.ctx.begin_path();
        self.ctx.move_to(points[0].x as f64, points[0].y as f64);
        for p in &points[1..] {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.stroke();
    }

    fn fill_text(&mut self, text: &str, at: Vec2, size: f32, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.set_font(&format!("{:.0}px sans-serif", size));
        let _ = self.ctx.fill_text(text, at.x as f64, at.y as f64);
    }
}
