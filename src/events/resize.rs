use super::WindowListener;
use crate::dom;
use glowfield_core::Field;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Keep the canvas sized to the viewport; every resize reseeds the field.
pub fn wire_resize(canvas: web::HtmlCanvasElement, field: Rc<RefCell<Field>>) -> WindowListener {
    WindowListener::add("resize", move |_ev: web::Event| {
        let (w, h) = dom::fit_canvas_to_viewport(&canvas);
        log::debug!("[resize] {}x{}", w, h);
        field.borrow_mut().resize(w, h);
    })
}
