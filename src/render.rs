use glowfield_core::{glow_stops, Field, Glow, Theme};
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Draws a [`Field`]'s frame plan onto a 2D canvas.
pub struct CanvasRenderer {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        // Opaque backing store; the trail fill always covers it.
        let opts = js_sys::Object::new();
        js_sys::Reflect::set(&opts, &"alpha".into(), &JsValue::FALSE)
            .map_err(|e| anyhow::anyhow!("context options: {:?}", e))?;
        let ctx = canvas
            .get_context_with_context_options("2d", &opts)
            .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("not a 2d context: {:?}", e))?;
        Ok(Self { ctx })
    }

    #[allow(deprecated)]
    pub fn draw(&self, field: &Field) -> Result<(), JsValue> {
        let (w, h) = field.size();
        if w == 0 || h == 0 {
            return Ok(());
        }
        let ctx = &self.ctx;

        let backdrop = field.backdrop();
        ctx.set_global_composite_operation("source-over")?;
        ctx.set_fill_style(&JsValue::from_str(&backdrop.color.rgba(backdrop.alpha)));
        ctx.fill_rect(0.0, 0.0, w as f64, h as f64);

        ctx.set_global_composite_operation(field.blend_mode().composite_op())?;
        let theme = field.theme();
        for glow in field.glows() {
            self.draw_glow(theme, glow)?;
        }
        Ok(())
    }

    #[allow(deprecated)]
    fn draw_glow(&self, theme: &Theme, glow: &Glow) -> Result<(), JsValue> {
        let (x, y, r) = (glow.position.x as f64, glow.position.y as f64, glow.radius as f64);
        if r <= 0.0 {
            return Ok(());
        }
        let gradient = self.ctx.create_radial_gradient(x, y, 0.0, x, y, r)?;
        for stop in glow_stops(theme, glow.color, glow.opacity) {
            gradient.add_color_stop(stop.offset, &stop.color.rgba(stop.alpha))?;
        }
        self.ctx.set_fill_style(gradient.as_ref());
        self.ctx.begin_path();
        self.ctx.arc(x, y, r, 0.0, TAU)?;
        self.ctx.fill();
        Ok(())
    }
}
