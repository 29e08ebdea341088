#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use sylvan_core::random::from_os;
use sylvan_core::{FrameDriver, SceneConfig, SceneVariant};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod dom;
mod events;
mod frame;
mod input;

use canvas::CanvasSurface;
use events::ClickListener;
use frame::{FrameLoop, SharedDriver};

/// Running scene attached to a canvas. Dropping or disposing it stops the
/// animation loop and removes the pointer handler.
#[wasm_bindgen]
pub struct SceneHandle {
    driver: SharedDriver,
    frames: FrameLoop,
    clicks: ClickListener,
}

#[wasm_bindgen]
impl SceneHandle {
    pub fn dispose(&mut self) {
        self.frames.cancel();
        self.clicks.detach();
        self.driver.borrow_mut().dispose();
    }

    #[wasm_bindgen(js_name = frameCount)]
    pub fn frame_count(&self) -> f64 {
        self.driver.borrow().frame_count() as f64
    }
}

impl Drop for SceneHandle {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sylvan-web starting");
    Ok(())
}

/// Starts `variant` ("forest" or "lettering") on the canvas with id `canvas_id`.
#[wasm_bindgen]
pub fn mount(canvas_id: &str, variant: &str) -> Result<SceneHandle, JsValue> {
    mount_scene(canvas_id, variant).map_err(|e| {
        log::error!("mount error: {:?}", e);
        JsValue::from_str(&format!("{e:#}"))
    })
}

fn mount_scene(canvas_id: &str, variant: &str) -> anyhow::Result<SceneHandle> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{canvas_id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::sync_canvas_backing_size(&canvas);

    let variant: SceneVariant = variant.parse()?;
    let config = SceneConfig::default().with_variant(variant);
    let driver = FrameDriver::create(CanvasSurface::from_canvas(&canvas), config, from_os())?;
    let driver: SharedDriver = Rc::new(RefCell::new(driver));

    let clicks = ClickListener::attach(&canvas, driver.clone())?;
    let frames = FrameLoop::start(driver.clone());
    Ok(SceneHandle {
        driver,
        frames,
        clicks,
    })
}
