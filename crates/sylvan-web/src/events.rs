use crate::frame::SharedDriver;
use crate::input;
use sylvan_core::ClickOutcome;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer-down handler registered on the scene canvas; removed by `detach`.
pub struct ClickListener {
    canvas: web::HtmlCanvasElement,
    closure: Closure<dyn FnMut(web::PointerEvent)>,
}

impl ClickListener {
    pub fn attach(canvas: &web::HtmlCanvasElement, driver: SharedDriver) -> anyhow::Result<Self> {
        let canvas_for_click = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let pos = input::pointer_canvas_px(&ev, &canvas_for_click);
            let outcome = driver.borrow_mut().on_pointer_click(pos.x, pos.y);
            if outcome != ClickOutcome::Ignored {
                log::debug!("click at ({:.0},{:.0}) -> {:?}", pos.x, pos.y, outcome);
            }
        }) as Box<dyn FnMut(web::PointerEvent)>);
        canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("pointerdown listener: {:?}", e))?;
        Ok(Self {
            canvas: canvas.clone(),
            closure,
        })
    }

    pub fn detach(&self) {
        let _ = self
            .canvas
            .remove_event_listener_with_callback("pointerdown", self.closure.as_ref().unchecked_ref());
    }
}
