use super::WindowListener;
use glam::Vec2;
use glowfield_core::Signals;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer in client coordinates. The canvas covers the viewport at
/// CSS-pixel resolution, so client coordinates are canvas coordinates.
pub fn wire_pointermove(signals: Rc<RefCell<Signals>>) -> WindowListener {
    WindowListener::add("mousemove", move |ev: web::Event| {
        let Ok(ev) = ev.dyn_into::<web::MouseEvent>() else {
            return;
        };
        signals.borrow_mut().pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
    })
}
