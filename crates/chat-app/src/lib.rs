//! Chat App — WASM entry point.
//!
//! Composition root: resolves configuration, builds the controller and the
//! HTTP backend, and mounts the egui UI on the page canvas.

mod app;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

const CANVAS_ID: &str = "chat_canvas";

/// WASM entry point — called from index.html
#[wasm_bindgen(start)]
pub async fn main() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Laptop Intelligence chat starting...");

    let canvas = find_canvas()?;

    wasm_bindgen_futures::spawn_local(async move {
        let started = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(Box::new(app::ChatApp::new(cc)))),
            )
            .await;
        if let Err(err) = started {
            log::error!("Failed to start eframe: {:?}", err);
        }
    });

    Ok(())
}

fn find_canvas() -> Result<HtmlCanvasElement, JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;
    document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str(&format!("no canvas element with id '{}'", CANVAS_ID)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("element '{}' is not a canvas", CANVAS_ID)))
}
