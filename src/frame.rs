use crate::render::CanvasRenderer;
use glowfield_core::{Field, Signals};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: Rc<RefCell<Field>>,
    pub signals: Rc<RefCell<Signals>>,
    pub renderer: CanvasRenderer,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        // Copy signals out so a setter firing mid-frame lands next frame.
        let signals = *self.signals.borrow();
        let mut field = self.field.borrow_mut();
        field.step(dt, &signals);
        if let Err(e) = self.renderer.draw(&field) {
            log::error!("render error: {:?}", e);
        }
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Owns the requestAnimationFrame chain. [`FrameLoop::stop`] cancels the
/// pending frame and drops the tick closure, so nothing runs afterwards.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: Tick,
}

fn request_frame(tick: &Tick, pending: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => pending.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }
}

pub fn start_loop(mut frame_ctx: FrameContext) -> FrameLoop {
    let running = Rc::new(Cell::new(true));
    let pending = Rc::new(Cell::new(None));
    let tick: Tick = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let running_tick = running.clone();
    let pending_tick = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        if !running_tick.get() {
            return;
        }
        frame_ctx.frame();
        request_frame(&tick_clone, &pending_tick);
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &pending);

    FrameLoop {
        running,
        pending,
        tick,
    }
}

impl FrameLoop {
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // Breaks the closure's self-reference.
        self.tick.borrow_mut().take();
        log::info!("[frame] loop stopped");
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
