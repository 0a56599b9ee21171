use crate::params::FieldParams;
use crate::theme::Rgb;
use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub color: Rgb,
    pub base_brightness: f32,
    /// Anchor the particle drifts to after a section change.
    pub home: Vec2,
}

/// Population size for a viewport of the given width.
#[inline]
pub fn particle_count(viewport_width: u32, params: &FieldParams) -> usize {
    if viewport_width <= params.mobile_breakpoint {
        params.mobile_count
    } else {
        params.desktop_count
    }
}

#[inline]
fn clamp_into(v: f32, extent: f32) -> f32 {
    let max = extent - f32::EPSILON * extent.max(1.0);
    v.max(0.0).min(max.max(0.0))
}

/// A home point: a random anchor nudged by up to half a stride on each axis,
/// or a uniformly random canvas point when there are no anchors.
///
/// Callers guarantee `width > 0 && height > 0`.
pub fn pick_home<R: Rng + ?Sized>(
    anchors: &[Vec2],
    width: f32,
    height: f32,
    stride: u32,
    rng: &mut R,
) -> Vec2 {
    match anchors.choose(rng) {
        Some(anchor) => {
            let s = stride as f32;
            let jx = (rng.gen::<f32>() - 0.5) * s;
            let jy = (rng.gen::<f32>() - 0.5) * s;
            Vec2::new(clamp_into(anchor.x + jx, width), clamp_into(anchor.y + jy, height))
        }
        None => Vec2::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height)),
    }
}

#[inline]
fn sample_range<R: Rng + ?Sized>(range: &std::ops::RangeInclusive<f32>, rng: &mut R) -> f32 {
    let (lo, hi) = (*range.start(), *range.end());
    lo + rng.gen::<f32>() * (hi - lo)
}

/// Seed a fresh population. Each particle starts at rest on its own home.
///
/// Returns an empty store when the canvas has no area.
pub fn create_particles<R: Rng + ?Sized>(
    count: usize,
    width: f32,
    height: f32,
    anchors: &[Vec2],
    palette: &[Rgb; 2],
    params: &FieldParams,
    rng: &mut R,
) -> Vec<Particle> {
    if !(width > 0.0 && height > 0.0) {
        return Vec::new();
    }
    let speed = params.initial_speed;
    (0..count)
        .map(|_| {
            let home = pick_home(anchors, width, height, params.sampler.stride, rng);
            let velocity = Vec2::new(
                (rng.gen::<f32>() - 0.5) * 2.0 * speed,
                (rng.gen::<f32>() - 0.5) * 2.0 * speed,
            );
            let color = palette[rng.gen_range(0..palette.len())];
            Particle {
                position: home,
                velocity,
                size: sample_range(&params.size_range, rng),
                color,
                base_brightness: sample_range(&params.brightness_range, rng),
                home,
            }
        })
        .collect()
}

/// Point every particle at a new home without touching its position; the
/// transition then pulls it there.
pub fn retarget_homes<R: Rng + ?Sized>(
    particles: &mut [Particle],
    width: f32,
    height: f32,
    anchors: &[Vec2],
    stride: u32,
    rng: &mut R,
) {
    if !(width > 0.0 && height > 0.0) {
        return;
    }
    for p in particles.iter_mut() {
        p.home = pick_home(anchors, width, height, stride, rng);
    }
}
