//! Per-theme colors and blending.
//!
//! Light mode reads as drifting pollen: low opacity, normal blending and a
//! soft two-stop sprite. Dark mode reads as fireflies: high opacity, `screen`
//! blending so overlapping glows brighten, and a three-stop sprite with a
//! hot core.

use crate::constants::TRAIL_ALPHA;

/// 8-bit sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// CSS `rgba(...)` string; alpha is clamped to [0, 1].
    pub fn rgba(&self, alpha: f32) -> String {
        let a = if alpha.is_finite() { alpha.clamp(0.0, 1.0) } else { 0.0 };
        format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, a)
    }
}

/// Hover accent (emerald), shared by both themes.
pub const ACCENT: Rgb = Rgb(16, 185, 129);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    #[inline]
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    #[inline]
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

/// Canvas composite operation used while drawing particles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
    SourceOver,
    Screen,
}

impl BlendMode {
    /// Value for `CanvasRenderingContext2D.globalCompositeOperation`.
    pub fn composite_op(self) -> &'static str {
        match self {
            BlendMode::SourceOver => "source-over",
            BlendMode::Screen => "screen",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlowStyle {
    /// Core, mid falloff, transparent edge.
    Luminous,
    /// Core straight to transparent edge.
    Soft,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub background: Rgb,
    pub palette: [Rgb; 2],
    pub base_opacity: f32,
    pub blend: BlendMode,
    pub glow: GlowStyle,
    pub trail_alpha: f32,
}

pub static LIGHT: Theme = Theme {
    mode: ThemeMode::Light,
    background: Rgb(248, 250, 245),
    palette: [Rgb(181, 164, 139), Rgb(210, 190, 160)], // golden tan, soft wheat
    base_opacity: 0.25,
    blend: BlendMode::SourceOver,
    glow: GlowStyle::Soft,
    trail_alpha: TRAIL_ALPHA,
};

pub static DARK: Theme = Theme {
    mode: ThemeMode::Dark,
    background: Rgb(2, 13, 6),
    palette: [Rgb(3, 25, 226), Rgb(0, 8, 74)], // electric blue, deep navy
    base_opacity: 0.8,
    blend: BlendMode::Screen,
    glow: GlowStyle::Luminous,
    trail_alpha: TRAIL_ALPHA,
};

impl Theme {
    #[inline]
    pub fn for_mode(mode: ThemeMode) -> &'static Theme {
        match mode {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }
}
