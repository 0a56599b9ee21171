//! Image-anchored particle field: texture sampling, particle store, per-frame
//! simulation and a platform-free render plan.
//!
//! Nothing here touches a browser API, so the whole engine runs and tests on
//! the host. The web crate owns the canvas, the frame loop and the listeners.

pub mod anchors;
pub mod constants;
pub mod error;
pub mod field;
pub mod params;
pub mod particle;
pub mod render;
pub mod section;
pub mod sim;
pub mod theme;

pub use anchors::{cover_rect, decode_texture, sample_anchors, texture_from_rgba, DrawRect};
pub use constants::*;
pub use error::{FieldError, Result};
pub use field::{frame_scale, Field, Signals};
pub use image::RgbaImage;
pub use params::{FieldParams, SamplerParams};
pub use particle::{create_particles, particle_count, pick_home, retarget_homes, Particle};
pub use render::{glow_stops, Backdrop, ColorStop, Glow};
pub use section::Section;
pub use sim::{advance, friction, illumination, wrap, StepInputs};
pub use theme::{BlendMode, GlowStyle, Rgb, Theme, ThemeMode, ACCENT, DARK, LIGHT};
