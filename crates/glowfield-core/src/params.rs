use crate::constants::*;
use crate::error::{FieldError, Result};
use std::ops::RangeInclusive;

/// Texture sampling knobs, split out so the sampler can be used without a
/// full parameter set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplerParams {
    pub stride: u32,
    pub luminance_threshold: f32,
}

impl Default for SamplerParams {
    fn default() -> Self {
        Self {
            stride: SAMPLE_STRIDE,
            luminance_threshold: LUMINANCE_THRESHOLD,
        }
    }
}

/// Every tunable of the field. The force constants are visually tuned rather
/// than derived, so hosts are free to adjust them.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub sampler: SamplerParams,

    pub mobile_breakpoint: u32,
    pub mobile_count: usize,
    pub desktop_count: usize,
    pub initial_speed: f32,
    pub size_range: RangeInclusive<f32>,
    pub brightness_range: RangeInclusive<f32>,

    pub transition_rate: f32,
    pub near_home_radius: f32,
    pub homing_rate: f32,

    pub repulsion_radius: f32,
    pub vortex_radius: f32,
    pub repulsion_strength: f32,
    pub swirl_strength: f32,
    pub vortex_pull: f32,

    pub base_friction: f32,
    pub scroll_friction: f32,
    pub vortex_friction: f32,
    pub jitter: f32,

    pub illumination_radius_fraction: f32,
    pub illumination_boost: f32,
    pub glow_radius_scale: f32,

    pub max_frame_scale: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            sampler: SamplerParams::default(),
            mobile_breakpoint: MOBILE_BREAKPOINT,
            mobile_count: MOBILE_PARTICLE_COUNT,
            desktop_count: DESKTOP_PARTICLE_COUNT,
            initial_speed: INITIAL_SPEED,
            size_range: SIZE_MIN..=SIZE_MAX,
            brightness_range: BRIGHTNESS_MIN..=BRIGHTNESS_MAX,
            transition_rate: TRANSITION_RATE,
            near_home_radius: NEAR_HOME_RADIUS,
            homing_rate: HOMING_RATE,
            repulsion_radius: REPULSION_RADIUS,
            vortex_radius: VORTEX_RADIUS,
            repulsion_strength: REPULSION_STRENGTH,
            swirl_strength: SWIRL_STRENGTH,
            vortex_pull: VORTEX_PULL,
            base_friction: BASE_FRICTION,
            scroll_friction: SCROLL_FRICTION,
            vortex_friction: VORTEX_FRICTION,
            jitter: JITTER,
            illumination_radius_fraction: ILLUMINATION_RADIUS_FRACTION,
            illumination_boost: ILLUMINATION_BOOST,
            glow_radius_scale: GLOW_RADIUS_SCALE,
            max_frame_scale: MAX_FRAME_SCALE,
        }
    }
}

fn invalid(name: &'static str, reason: impl Into<String>) -> FieldError {
    FieldError::InvalidParams {
        name,
        reason: reason.into(),
    }
}

fn check_non_negative(name: &'static str, v: f32) -> Result<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(invalid(name, format!("must be finite and >= 0, got {v}")))
    }
}

fn check_unit_rate(name: &'static str, v: f32) -> Result<()> {
    if v > 0.0 && v <= 1.0 {
        Ok(())
    } else {
        Err(invalid(name, format!("must lie in (0, 1], got {v}")))
    }
}

fn check_damping(name: &'static str, v: f32) -> Result<()> {
    if v > 0.0 && v < 1.0 {
        Ok(())
    } else {
        Err(invalid(name, format!("must lie in (0, 1), got {v}")))
    }
}

fn check_range(name: &'static str, r: &RangeInclusive<f32>) -> Result<()> {
    let (lo, hi) = (*r.start(), *r.end());
    if lo.is_finite() && hi.is_finite() && lo >= 0.0 && lo <= hi {
        Ok(())
    } else {
        Err(invalid(name, format!("expected 0 <= start <= end, got {lo}..={hi}")))
    }
}

impl FieldParams {
    /// Rejects parameter sets that could stall the field or let velocities
    /// grow without bound.
    pub fn validate(&self) -> Result<()> {
        if self.sampler.stride == 0 {
            return Err(invalid("sampler.stride", "must be at least 1"));
        }
        check_non_negative("sampler.luminance_threshold", self.sampler.luminance_threshold)?;
        if self.mobile_count == 0 || self.desktop_count == 0 {
            return Err(invalid("particle count", "mobile and desktop counts must be > 0"));
        }
        check_non_negative("initial_speed", self.initial_speed)?;
        check_range("size_range", &self.size_range)?;
        check_range("brightness_range", &self.brightness_range)?;

        check_unit_rate("transition_rate", self.transition_rate)?;
        check_unit_rate("homing_rate", self.homing_rate)?;
        check_non_negative("near_home_radius", self.near_home_radius)?;

        check_non_negative("repulsion_radius", self.repulsion_radius)?;
        check_non_negative("vortex_radius", self.vortex_radius)?;
        check_non_negative("repulsion_strength", self.repulsion_strength)?;
        check_non_negative("swirl_strength", self.swirl_strength)?;
        check_non_negative("vortex_pull", self.vortex_pull)?;

        // Both ends of the scroll-modulated friction must stay a contraction.
        check_non_negative("scroll_friction", self.scroll_friction)?;
        check_damping("base_friction", self.base_friction)?;
        check_damping(
            "base_friction - scroll_friction",
            self.base_friction - self.scroll_friction,
        )?;
        check_damping("vortex_friction", self.vortex_friction)?;
        check_non_negative("jitter", self.jitter)?;

        check_non_negative("illumination_radius_fraction", self.illumination_radius_fraction)?;
        check_non_negative("illumination_boost", self.illumination_boost)?;
        check_non_negative("glow_radius_scale", self.glow_radius_scale)?;
        if !(self.max_frame_scale.is_finite() && self.max_frame_scale >= 1.0) {
            return Err(invalid("max_frame_scale", "must be finite and >= 1"));
        }
        Ok(())
    }

    /// Friction factor for a particle outside any vortex, given scroll depth.
    #[inline]
    pub fn scroll_friction_at(&self, scroll_progress: f32) -> f32 {
        self.base_friction - scroll_progress.clamp(0.0, 1.0) * self.scroll_friction
    }

    /// Pointer reach for the current hover state.
    #[inline]
    pub fn interaction_radius(&self, hovering: bool) -> f32 {
        if hovering {
            self.vortex_radius
        } else {
            self.repulsion_radius
        }
    }
}
