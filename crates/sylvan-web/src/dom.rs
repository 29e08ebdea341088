use web_sys as web;

// Backing store is twice the CSS size so strokes stay crisp on dense displays.
pub const BACKING_SCALE: f64 = 2.0;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() * BACKING_SCALE) as u32;
    let h_px = (rect.height() * BACKING_SCALE) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
}
