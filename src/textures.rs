use crate::constants::SECTION_TEXTURES;
use fnv::FnvHashMap;
use glowfield_core::{texture_from_rgba, Field, RgbaImage, Section};
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// An image element whose `decode()` is already running in the browser.
struct PendingImage {
    url: &'static str,
    img: web::HtmlImageElement,
    decoded: JsFuture,
}

fn begin_decode(url: &'static str) -> anyhow::Result<PendingImage> {
    let img = web::HtmlImageElement::new()
        .map_err(|e| anyhow::anyhow!("create <img> for {}: {:?}", url, e))?;
    img.set_src(url);
    let decoded = JsFuture::from(img.decode());
    Ok(PendingImage { url, img, decoded })
}

/// Read a decoded image back as RGBA through a detached canvas.
fn read_pixels(img: &web::HtmlImageElement) -> anyhow::Result<RgbaImage> {
    let (w, h) = (img.natural_width(), img.natural_height());
    let document = crate::dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let scratch = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("scratch canvas: {:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("scratch canvas: {:?}", e))?;
    scratch.set_width(w);
    scratch.set_height(h);
    let ctx = scratch
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("scratch context: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("scratch 2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("scratch context: {:?}", e))?;
    ctx.draw_image_with_html_image_element(img, 0.0, 0.0)
        .map_err(|e| anyhow::anyhow!("drawImage: {:?}", e))?;
    let data = ctx
        .get_image_data(0.0, 0.0, w as f64, h as f64)
        .map_err(|e| anyhow::anyhow!("getImageData: {:?}", e))?;
    Ok(texture_from_rgba(w, h, data.data().0)?)
}

async fn finish(pending: PendingImage) -> anyhow::Result<RgbaImage> {
    pending
        .decoded
        .await
        .map_err(|e| anyhow::anyhow!("decode {}: {:?}", pending.url, e))?;
    read_pixels(&pending.img)
}

/// Load every section texture and reseed so particles settle on the anchors.
///
/// The browser decodes all distinct URLs concurrently and off the frame loop;
/// this task only copies pixels out once each decode resolves. Failures are
/// logged and skipped, leaving random placement for that section. Only a
/// weak handle is held, and a halted field is left alone.
pub async fn load_section_textures(field: Weak<RefCell<Field>>) {
    let mut urls: Vec<&'static str> = SECTION_TEXTURES.iter().map(|(_, url)| *url).collect();
    urls.sort_unstable();
    urls.dedup();

    let mut pending = Vec::with_capacity(urls.len());
    for url in urls {
        match begin_decode(url) {
            Ok(p) => pending.push(p),
            Err(e) => log::warn!("[texture] {} unavailable: {:#}", url, e),
        }
    }

    let mut ready: FnvHashMap<&'static str, RgbaImage> = FnvHashMap::default();
    for p in pending {
        let url = p.url;
        match finish(p).await {
            Ok(img) => {
                ready.insert(url, img);
            }
            Err(e) => log::warn!("[texture] {} unavailable: {:#}", url, e),
        }
    }

    let Some(strong) = field.upgrade() else {
        return;
    };
    let mut state = strong.borrow_mut();
    if state.is_halted() {
        log::debug!("[texture] view torn down; dropping {} textures", ready.len());
        return;
    }
    for (name, url) in SECTION_TEXTURES {
        let section: Section = match name.parse() {
            Ok(s) => s,
            Err(e) => {
                log::warn!("[texture] {}", e);
                continue;
            }
        };
        if let Some(img) = ready.get(url) {
            state.insert_texture(section, img.clone());
        }
    }
    state.reseed();
}
