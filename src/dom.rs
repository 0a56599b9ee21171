use crate::constants::{canvas_filter, CANVAS_LAYER_STYLE, PREFERS_DARK_QUERY};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let document = window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", id, e))
}

/// Window inner size in CSS pixels. Pointer events report client
/// coordinates in the same space, so no devicePixelRatio scaling is applied.
pub fn viewport_size() -> (u32, u32) {
    let Some(w) = web::window() else {
        return (0, 0);
    };
    let px = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
    };
    (px(w.inner_width()), px(w.inner_height()))
}

/// Match the canvas backing store to the viewport; returns the new size.
pub fn fit_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let (w, h) = viewport_size();
    canvas.set_width(w);
    canvas.set_height(h);
    (w, h)
}

/// Full-viewport layer behind page content that never takes pointer input.
pub fn style_as_backdrop(canvas: &web::HtmlCanvasElement) {
    let style = canvas.style();
    for (prop, value) in CANVAS_LAYER_STYLE {
        _ = style.set_property(prop, value);
    }
}

pub fn apply_theme_filter(canvas: &web::HtmlCanvasElement, is_dark: bool) {
    _ = canvas.style().set_property("filter", canvas_filter(is_dark));
}

pub fn prefers_dark() -> bool {
    web::window()
        .and_then(|w| w.match_media(PREFERS_DARK_QUERY).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(true)
}
