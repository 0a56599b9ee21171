//! Texture sampling: turns a reference image into canvas-space anchor points.
//!
//! The image is cover-fitted onto the canvas (scaled to cover it fully,
//! centred, overflow clipped) so anchors line up with what a viewer would see
//! if the image were drawn as a full-bleed background. Sampling walks the
//! canvas on a fixed stride and keeps every point whose mapped pixel is darker
//! than the luminance threshold.

use crate::error::{FieldError, Result};
use crate::params::SamplerParams;
use glam::Vec2;
use image::RgbaImage;

/// Where the image lands in canvas space. May extend past the canvas edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Cover-fit rectangle for an `image_w x image_h` image on the canvas.
pub fn cover_rect(image_w: u32, image_h: u32, canvas_w: u32, canvas_h: u32) -> DrawRect {
    let (iw, ih) = (image_w.max(1) as f32, image_h.max(1) as f32);
    let (cw, ch) = (canvas_w as f32, canvas_h as f32);
    let image_ratio = iw / ih;
    let canvas_ratio = cw / ch.max(1.0);
    if canvas_ratio > image_ratio {
        let height = cw / image_ratio;
        DrawRect {
            x: 0.0,
            y: (ch - height) / 2.0,
            width: cw,
            height,
        }
    } else {
        let width = ch * image_ratio;
        DrawRect {
            x: (cw - width) / 2.0,
            y: 0.0,
            width,
            height: ch,
        }
    }
}

/// Decode PNG/JPEG bytes into an RGBA bitmap.
pub fn decode_texture(bytes: &[u8]) -> Result<RgbaImage> {
    let img = image::load_from_memory(bytes)?.into_rgba8();
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(FieldError::EmptyTexture { width, height });
    }
    Ok(img)
}

/// Wrap RGBA8 pixels the host already decoded (a canvas `getImageData`
/// readback, for instance). The buffer must hold exactly `width * height`
/// texels.
pub fn texture_from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<RgbaImage> {
    if width == 0 || height == 0 {
        return Err(FieldError::EmptyTexture { width, height });
    }
    let len = data.len();
    RgbaImage::from_raw(width, height, data).ok_or(FieldError::PixelBuffer { width, height, len })
}

#[inline]
fn luminance(px: &image::Rgba<u8>) -> f32 {
    let [r, g, b, a] = px.0;
    // Transparent texels read back as black from a cleared offscreen canvas.
    if a == 0 {
        return 0.0;
    }
    (r as f32 + g as f32 + b as f32) / 3.0
}

/// Anchor points for `image` on a `canvas_w x canvas_h` canvas.
///
/// Pure: the same image and dimensions always yield the same points, in
/// row-major order. Returns an empty set for zero-sized inputs.
pub fn sample_anchors(
    image: &RgbaImage,
    canvas_w: u32,
    canvas_h: u32,
    params: &SamplerParams,
) -> Vec<Vec2> {
    let (img_w, img_h) = image.dimensions();
    if canvas_w == 0 || canvas_h == 0 || img_w == 0 || img_h == 0 || params.stride == 0 {
        return Vec::new();
    }
    let rect = cover_rect(img_w, img_h, canvas_w, canvas_h);
    let sx = img_w as f32 / rect.width;
    let sy = img_h as f32 / rect.height;
    let stride = params.stride as usize;

    let mut anchors = Vec::new();
    for y in (0..canvas_h).step_by(stride) {
        let v = (((y as f32 - rect.y) * sy) as i64).clamp(0, img_h as i64 - 1) as u32;
        for x in (0..canvas_w).step_by(stride) {
            let u = (((x as f32 - rect.x) * sx) as i64).clamp(0, img_w as i64 - 1) as u32;
            if luminance(image.get_pixel(u, v)) < params.luminance_threshold {
                anchors.push(Vec2::new(x as f32, y as f32));
            }
        }
    }
    anchors
}
