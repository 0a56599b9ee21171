//! Platform-free description of a frame: what to fade the canvas with and
//! which glow sprites to draw. The web crate turns this into Canvas 2D calls.

use crate::theme::{GlowStyle, Rgb, Theme};
use glam::Vec2;
use smallvec::{smallvec, SmallVec};

/// One particle's sprite for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub position: Vec2,
    /// Outer radius of the radial gradient.
    pub radius: f32,
    /// Palette color, or the accent while caught in a vortex.
    pub color: Rgb,
    /// Core opacity: brightness x theme opacity x illumination.
    pub opacity: f32,
    pub illumination: f32,
}

/// Low-alpha fill drawn over the previous frame to leave motion trails.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Backdrop {
    pub color: Rgb,
    pub alpha: f32,
}

impl Backdrop {
    pub fn for_theme(theme: &Theme) -> Self {
        Self {
            color: theme.background,
            alpha: theme.trail_alpha,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgb,
    pub alpha: f32,
}

/// Gradient stops for a glow sprite, centre first.
pub fn glow_stops(theme: &Theme, color: Rgb, opacity: f32) -> SmallVec<[ColorStop; 3]> {
    let stop = |offset, alpha| ColorStop {
        offset,
        color,
        alpha,
    };
    match theme.glow {
        GlowStyle::Luminous => smallvec![
            stop(0.0, opacity),
            stop(0.4, opacity * 0.4),
            stop(1.0, 0.0)
        ],
        GlowStyle::Soft => smallvec![stop(0.0, opacity), stop(1.0, 0.0)],
    }
}
