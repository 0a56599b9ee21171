//! Per-frame particle update.
//!
//! Forces are expressed per nominal frame; `frame_scale` stretches them for
//! longer or shorter frames. Order matters: pointer impulse, homing or
//! integration, friction, jitter, wraparound, then lighting.

use crate::params::FieldParams;
use crate::particle::Particle;
use crate::render::Glow;
use crate::theme::Rgb;
use glam::Vec2;
use rand::Rng;

/// Read-only values shared by every particle in one frame.
#[derive(Clone, Copy, Debug)]
pub struct StepInputs<'a> {
    pub params: &'a FieldParams,
    pub width: f32,
    pub height: f32,
    pub pointer: Vec2,
    pub hovering: bool,
    pub transitioning: bool,
    pub scroll_progress: f32,
    pub base_opacity: f32,
    pub accent: Rgb,
    /// Elapsed time in nominal frames (1.0 at 60 Hz).
    pub frame_scale: f32,
}

/// Fold `value` into `[0, extent)`.
#[inline]
pub fn wrap(value: f32, extent: f32) -> f32 {
    if !(extent > 0.0) || !value.is_finite() {
        return 0.0;
    }
    if (0.0..extent).contains(&value) {
        return value;
    }
    let w = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if w >= extent || w < 0.0 {
        0.0
    } else {
        w
    }
}

/// Centre spotlight: 1.0 outside the lit disc, rising linearly to
/// `1 + illumination_boost` at the centre.
pub fn illumination(position: Vec2, width: f32, height: f32, params: &FieldParams) -> f32 {
    let centre = Vec2::new(width / 2.0, height / 2.0);
    let radius = width.min(height) * params.illumination_radius_fraction;
    let dist = position.distance(centre);
    if radius > 0.0 && dist < radius {
        1.0 + (1.0 - dist / radius) * params.illumination_boost
    } else {
        1.0
    }
}

/// Friction factor for one particle this frame.
#[inline]
pub fn friction(params: &FieldParams, hovering: bool, in_reach: bool, scroll_progress: f32) -> f32 {
    if hovering && in_reach {
        params.vortex_friction
    } else {
        params.scroll_friction_at(scroll_progress)
    }
}

/// Advance one particle by one frame and return its sprite.
pub fn advance<R: Rng + ?Sized>(p: &mut Particle, s: &StepInputs<'_>, rng: &mut R) -> Glow {
    let params = s.params;
    let k = s.frame_scale;

    let from_pointer = p.position - s.pointer;
    let distance = from_pointer.length();
    let to_home = p.home - p.position;
    let near_home = to_home.length() < params.near_home_radius;

    let radius = params.interaction_radius(s.hovering);
    let in_reach = distance < radius;

    if in_reach && (!s.transitioning || near_home) {
        let force = (radius - distance) / radius;
        let radial = Vec2::from_angle(from_pointer.y.atan2(from_pointer.x));
        if s.hovering {
            // tangential swirl plus a weak pull keeps particles orbiting
            p.velocity += radial.perp() * force * params.swirl_strength * k;
            p.velocity -= radial * force * params.vortex_pull * k;
        } else {
            p.velocity += radial * force * params.repulsion_strength * k;
        }
    }

    if s.transitioning && !near_home {
        let lerp = 1.0 - (1.0 - params.homing_rate).powf(k);
        p.position += to_home * lerp;
    } else {
        p.position += p.velocity * k;
    }

    p.velocity *= friction(params, s.hovering, in_reach, s.scroll_progress).powf(k);

    let jitter = Vec2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5);
    p.velocity += jitter * params.jitter * k;

    p.position.x = wrap(p.position.x, s.width);
    p.position.y = wrap(p.position.y, s.height);

    let lit = illumination(p.position, s.width, s.height, params);
    let color = if s.hovering && in_reach {
        s.accent
    } else {
        p.color
    };
    Glow {
        position: p.position,
        radius: p.size * params.glow_radius_scale,
        color,
        opacity: p.base_brightness * s.base_opacity * lit,
        illumination: lit,
    }
}
