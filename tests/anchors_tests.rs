// Host-side tests for texture decoding and anchor sampling.

use glowfield_core::{
    cover_rect, decode_texture, sample_anchors, texture_from_rgba, FieldError, SamplerParams,
};
use image::{Rgba, RgbaImage};
use std::io::Cursor;

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Left `dark_cols` columns black, the rest white.
fn split_image(w: u32, h: u32, dark_cols: u32) -> RgbaImage {
    RgbaImage::from_fn(w, h, |x, _| if x < dark_cols { BLACK } else { WHITE })
}

#[test]
fn sampling_is_deterministic() {
    let img = RgbaImage::from_fn(40, 30, |x, y| {
        if (x * 7 + y * 3) % 5 == 0 {
            BLACK
        } else {
            WHITE
        }
    });
    let params = SamplerParams::default();
    let a = sample_anchors(&img, 320, 200, &params);
    let b = sample_anchors(&img, 320, 200, &params);
    assert!(!a.is_empty());
    assert_eq!(a, b);
}

#[test]
fn black_image_yields_every_stride_point() {
    let img = RgbaImage::from_pixel(10, 10, BLACK);
    let anchors = sample_anchors(&img, 40, 22, &SamplerParams::default());
    // x in 0,4,..,36 (10 columns), y in 0,4,..,20 (6 rows)
    assert_eq!(anchors.len(), 10 * 6);
    assert!(anchors.iter().all(|p| p.x < 40.0 && p.y < 22.0));
    assert_eq!(anchors[0], glam::Vec2::ZERO);
}

#[test]
fn white_image_yields_nothing() {
    let img = RgbaImage::from_pixel(10, 10, WHITE);
    assert!(sample_anchors(&img, 64, 64, &SamplerParams::default()).is_empty());
}

#[test]
fn threshold_is_strict_on_mean_luminance() {
    // mean(150, 150, 150) == 150 is not below the threshold
    let at = RgbaImage::from_pixel(4, 4, Rgba([150, 150, 150, 255]));
    assert!(sample_anchors(&at, 16, 16, &SamplerParams::default()).is_empty());
    // mean(200, 200, 47) == 149 is
    let below = RgbaImage::from_pixel(4, 4, Rgba([200, 200, 47, 255]));
    assert_eq!(sample_anchors(&below, 16, 16, &SamplerParams::default()).len(), 16);
}

#[test]
fn transparent_pixels_read_as_dark() {
    let img = RgbaImage::from_pixel(8, 8, Rgba([255, 255, 255, 0]));
    assert_eq!(sample_anchors(&img, 8, 8, &SamplerParams::default()).len(), 4);
}

#[test]
fn anchors_follow_dark_region_in_canvas_space() {
    let img = split_image(32, 32, 16);
    let anchors = sample_anchors(&img, 64, 64, &SamplerParams::default());
    assert_eq!(anchors.len(), 8 * 16);
    assert!(anchors.iter().all(|p| p.x < 32.0));
}

#[test]
fn larger_stride_trades_density() {
    let img = RgbaImage::from_pixel(16, 16, BLACK);
    let fine = sample_anchors(&img, 64, 64, &SamplerParams::default());
    let coarse = sample_anchors(
        &img,
        64,
        64,
        &SamplerParams {
            stride: 8,
            ..SamplerParams::default()
        },
    );
    assert_eq!(fine.len(), 256);
    assert_eq!(coarse.len(), 64);
}

#[test]
fn zero_dimensions_yield_nothing() {
    let img = RgbaImage::from_pixel(4, 4, BLACK);
    assert!(sample_anchors(&img, 0, 100, &SamplerParams::default()).is_empty());
    assert!(sample_anchors(&img, 100, 0, &SamplerParams::default()).is_empty());
}

#[test]
fn cover_rect_fills_wide_canvas() {
    let r = cover_rect(100, 100, 200, 100);
    assert_eq!(r.width, 200.0);
    assert_eq!(r.height, 200.0);
    assert_eq!(r.x, 0.0);
    assert_eq!(r.y, -50.0);
}

#[test]
fn cover_rect_fills_tall_canvas() {
    let r = cover_rect(100, 100, 100, 200);
    assert_eq!(r.width, 200.0);
    assert_eq!(r.height, 200.0);
    assert_eq!(r.x, -50.0);
    assert_eq!(r.y, 0.0);
}

#[test]
fn cover_fit_crops_overflow() {
    // Dark band in the top quarter of a square image; on a wide canvas the
    // image is scaled up and the top is cropped away.
    let img = RgbaImage::from_fn(100, 100, |_, y| if y < 25 { BLACK } else { WHITE });
    let anchors = sample_anchors(&img, 200, 100, &SamplerParams::default());
    assert!(anchors.is_empty());
}

#[test]
fn decode_rejects_garbage() {
    let err = decode_texture(b"definitely not a png").unwrap_err();
    assert!(matches!(err, FieldError::Decode(_)));
}

#[test]
fn decode_round_trips_png() {
    let img = split_image(12, 6, 6);
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    let decoded = decode_texture(&bytes).unwrap();
    assert_eq!(decoded.dimensions(), (12, 6));
    assert_eq!(decoded.get_pixel(0, 0), &BLACK);
    assert_eq!(decoded.get_pixel(11, 5), &WHITE);
}

#[test]
fn host_pixels_wrap_into_texture() {
    // 2x1: one black texel, one white texel, as a canvas readback delivers them
    let data = vec![0, 0, 0, 255, 255, 255, 255, 255];
    let tex = texture_from_rgba(2, 1, data).unwrap();
    assert_eq!(tex.get_pixel(0, 0), &BLACK);
    assert_eq!(tex.get_pixel(1, 0), &WHITE);

    let anchors = sample_anchors(&tex, 8, 4, &SamplerParams::default());
    assert!(!anchors.is_empty());
    assert!(anchors.iter().all(|a| a.x < 4.0));
}

#[test]
fn host_pixels_must_match_dimensions() {
    assert!(matches!(
        texture_from_rgba(4, 4, vec![0; 12]),
        Err(FieldError::PixelBuffer { len: 12, .. })
    ));
    assert!(matches!(
        texture_from_rgba(0, 4, Vec::new()),
        Err(FieldError::EmptyTexture { .. })
    ));
}
