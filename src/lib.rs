#![cfg(target_arch = "wasm32")]
use glowfield_core::{Field, FieldParams, Section, Signals, ThemeMode};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod render;
mod textures;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("glowfield-web loaded");
    Ok(())
}

fn js_err(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", e))
}

/// Particle backdrop mounted on a page canvas. The host page pushes theme,
/// section, scroll and hover changes through the setters; each takes effect
/// on the next animation frame.
#[wasm_bindgen]
pub struct GlowCanvas {
    canvas: web::HtmlCanvasElement,
    signals: Rc<RefCell<Signals>>,
    // Texture loading only holds a weak handle to this.
    field: Rc<RefCell<Field>>,
    frame_loop: frame::FrameLoop,
    listeners: Vec<events::WindowListener>,
}

#[wasm_bindgen]
impl GlowCanvas {
    /// Mount on `<canvas id=canvas_id>`. Without `is_dark` the system color
    /// scheme decides.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, is_dark: Option<bool>) -> Result<GlowCanvas, JsValue> {
        mount(canvas_id, is_dark).map_err(js_err)
    }

    #[wasm_bindgen(js_name = setTheme)]
    pub fn set_theme(&self, is_dark: bool) {
        self.signals.borrow_mut().is_dark = is_dark;
        dom::apply_theme_filter(&self.canvas, is_dark);
    }

    /// Unknown section names are logged and ignored.
    #[wasm_bindgen(js_name = setActiveSection)]
    pub fn set_active_section(&self, section: &str) {
        match section.parse::<Section>() {
            Ok(s) => self.signals.borrow_mut().section = s,
            Err(e) => log::warn!("[host] {}", e),
        }
    }

    #[wasm_bindgen(js_name = setScrollProgress)]
    pub fn set_scroll_progress(&self, progress: f32) {
        self.signals.borrow_mut().scroll_progress = progress;
    }

    #[wasm_bindgen(js_name = setHoverState)]
    pub fn set_hover_state(&self, hovering: bool) {
        self.signals.borrow_mut().hovering = hovering;
    }

    /// Halt the animation loop, detach listeners and freeze the field so a
    /// texture load still in flight leaves it alone. Safe to call twice.
    pub fn stop(&mut self) {
        self.frame_loop.stop();
        self.field.borrow_mut().halt();
        for l in &mut self.listeners {
            l.remove();
        }
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }
}

fn mount(canvas_id: &str, is_dark: Option<bool>) -> anyhow::Result<GlowCanvas> {
    let canvas = dom::canvas_by_id(canvas_id)?;
    let is_dark = is_dark.unwrap_or_else(dom::prefers_dark);
    dom::style_as_backdrop(&canvas);
    dom::apply_theme_filter(&canvas, is_dark);

    let signals = Rc::new(RefCell::new(Signals {
        is_dark,
        ..Signals::default()
    }));
    let mut field = Field::new(
        FieldParams::default(),
        ThemeMode::from_dark(is_dark),
        Section::Hero,
        rand::random(),
    )?;
    // Random placement until textures arrive.
    let (w, h) = dom::fit_canvas_to_viewport(&canvas);
    field.resize(w, h);
    log::info!(
        "[mount] #{} {}x{} particles={} dark={}",
        canvas_id,
        w,
        h,
        field.particles().len(),
        is_dark
    );
    let field = Rc::new(RefCell::new(field));

    spawn_local(textures::load_section_textures(Rc::downgrade(&field)));

    let listeners = vec![
        events::pointer::wire_pointermove(signals.clone()),
        events::resize::wire_resize(canvas.clone(), field.clone()),
    ];

    let renderer = render::CanvasRenderer::new(&canvas)?;
    let frame_loop = frame::start_loop(frame::FrameContext {
        field: field.clone(),
        signals: signals.clone(),
        renderer,
        last_instant: Instant::now(),
    });

    Ok(GlowCanvas {
        canvas,
        signals,
        field,
        frame_loop,
        listeners,
    })
}
