use std::time::Duration;

// Default tuning constants for the particle field. `FieldParams::default()`
// is built from these; hosts override individual values through the params.

// Nominal frame length; all per-frame rates below are expressed against it
pub const FRAME_DT: Duration = Duration::from_nanos(16_666_667);
pub const MAX_FRAME_SCALE: f32 = 3.0; // clamp for long frames (tab switches, stalls)

// Texture sampling
pub const SAMPLE_STRIDE: u32 = 4; // px between sampled points on both axes
pub const LUMINANCE_THRESHOLD: f32 = 150.0; // mean rgb below this marks an anchor

// Population
pub const MOBILE_BREAKPOINT: u32 = 768; // widths at or below use the mobile count
pub const MOBILE_PARTICLE_COUNT: usize = 80;
pub const DESKTOP_PARTICLE_COUNT: usize = 750;
pub const INITIAL_SPEED: f32 = 0.25; // max |v| per axis at creation
pub const SIZE_MIN: f32 = 1.0;
pub const SIZE_MAX: f32 = 2.8;
pub const BRIGHTNESS_MIN: f32 = 0.6;
pub const BRIGHTNESS_MAX: f32 = 1.0;

// Section transitions
pub const TRANSITION_RATE: f32 = 0.01; // progress gained per frame (~100 frames)
pub const NEAR_HOME_RADIUS: f32 = 20.0;
pub const HOMING_RATE: f32 = 0.08; // fraction of remaining distance closed per frame

// Pointer interaction
pub const REPULSION_RADIUS: f32 = 180.0;
pub const VORTEX_RADIUS: f32 = 300.0;
pub const REPULSION_STRENGTH: f32 = 0.6;
pub const SWIRL_STRENGTH: f32 = 2.5;
pub const VORTEX_PULL: f32 = 0.2;

// Damping
pub const BASE_FRICTION: f32 = 0.96;
pub const SCROLL_FRICTION: f32 = 0.05; // subtracted at full scroll depth
pub const VORTEX_FRICTION: f32 = 0.92;
pub const JITTER: f32 = 0.02; // velocity noise spans +-JITTER/2 per axis

// Lighting
pub const ILLUMINATION_RADIUS_FRACTION: f32 = 0.4; // of min(width, height)
pub const ILLUMINATION_BOOST: f32 = 0.8; // extra brightness at dead centre
pub const GLOW_RADIUS_SCALE: f32 = 5.0; // sprite radius = size * scale
pub const TRAIL_ALPHA: f32 = 0.15; // backdrop fill alpha per frame

// Pointer position used before the first move event
pub const POINTER_OFFSCREEN: [f32; 2] = [-1000.0, -1000.0];
