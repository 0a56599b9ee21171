pub mod pointer;
pub mod resize;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A window listener that stays registered until [`WindowListener::remove`]
/// or drop.
pub struct WindowListener {
    event: &'static str,
    closure: Option<Closure<dyn FnMut(web::Event)>>,
}

impl WindowListener {
    pub fn add(event: &'static str, handler: impl FnMut(web::Event) + 'static) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        if let Some(window) = web::window() {
            if let Err(e) =
                window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            {
                log::warn!("[events] failed to add {} listener: {:?}", event, e);
            }
        }
        Self {
            event,
            closure: Some(closure),
        }
    }

    pub fn remove(&mut self) {
        if let Some(closure) = self.closure.take() {
            if let Some(window) = web::window() {
                _ = window.remove_event_listener_with_callback(
                    self.event,
                    closure.as_ref().unchecked_ref(),
                );
            }
        }
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        self.remove();
    }
}
