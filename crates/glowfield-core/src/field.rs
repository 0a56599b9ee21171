//! The simulation context owned by a hosting view.
//!
//! A `Field` holds the particle store, the cached anchor sets and the
//! transition state. Hosts push signals in (theme, section, scroll, hover,
//! pointer, size), call [`Field::step`] once per frame, then draw
//! [`Field::glows`] over [`Field::backdrop`] with [`Field::blend_mode`].

use crate::anchors::sample_anchors;
use crate::constants::{FRAME_DT, POINTER_OFFSCREEN};
use crate::error::Result;
use crate::params::FieldParams;
use crate::particle::{create_particles, particle_count, retarget_homes, Particle};
use crate::render::{Backdrop, Glow};
use crate::section::Section;
use crate::sim::{advance, StepInputs};
use crate::theme::{BlendMode, Theme, ThemeMode, ACCENT};
use fnv::FnvHashMap;
use glam::Vec2;
use image::RgbaImage;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

/// Host-owned inputs, sampled once at the top of each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Signals {
    pub is_dark: bool,
    pub pointer: Vec2,
    pub section: Section,
    pub scroll_progress: f32,
    pub hovering: bool,
}

impl Default for Signals {
    fn default() -> Self {
        Self {
            is_dark: true,
            pointer: Vec2::from(POINTER_OFFSCREEN),
            section: Section::Hero,
            scroll_progress: 0.0,
            hovering: false,
        }
    }
}

pub struct Field {
    params: FieldParams,
    mode: ThemeMode,
    section: Section,
    width: u32,
    height: u32,
    particles: Vec<Particle>,
    glows: Vec<Glow>,
    // 0 right after a section change, 1 once arrived
    transition: f32,
    textures: FnvHashMap<Section, RgbaImage>,
    // anchors for the current canvas size; cleared on resize
    anchors: FnvHashMap<Section, Vec<Vec2>>,
    scroll_progress: f32,
    hovering: bool,
    pointer: Vec2,
    rng: StdRng,
    // set once the hosting view is torn down
    halted: bool,
}

/// Convert a frame delta into nominal frames.
#[inline]
pub fn frame_scale(dt: Duration, max_scale: f32) -> f32 {
    (dt.as_secs_f32() / FRAME_DT.as_secs_f32()).clamp(0.0, max_scale)
}

impl Field {
    pub fn new(params: FieldParams, mode: ThemeMode, section: Section, seed: u64) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            mode,
            section,
            width: 0,
            height: 0,
            particles: Vec::new(),
            glows: Vec::new(),
            transition: 1.0,
            textures: FnvHashMap::default(),
            anchors: FnvHashMap::default(),
            scroll_progress: 0.0,
            hovering: false,
            pointer: Vec2::from(POINTER_OFFSCREEN),
            rng: StdRng::seed_from_u64(seed),
            halted: false,
        })
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn theme(&self) -> &'static Theme {
        Theme::for_mode(self.mode)
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Sprites produced by the last [`Field::step`], one per particle.
    pub fn glows(&self) -> &[Glow] {
        &self.glows
    }

    pub fn transition_progress(&self) -> f32 {
        self.transition
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition < 1.0
    }

    pub fn backdrop(&self) -> Backdrop {
        Backdrop::for_theme(self.theme())
    }

    pub fn blend_mode(&self) -> BlendMode {
        self.theme().blend
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Freeze the field for good. Later steps, reseeds and texture arrivals
    /// are ignored, so async work that outlives the view cannot touch it.
    pub fn halt(&mut self) {
        if self.halted {
            return;
        }
        self.halted = true;
        self.glows.clear();
        log::debug!("[field] halted with {} particles", self.particles.len());
    }

    pub fn has_texture(&self, section: Section) -> bool {
        self.textures.contains_key(&section)
    }

    /// Anchor set for `section` at the current size, sampled on first use.
    pub fn anchors(&mut self, section: Section) -> &[Vec2] {
        self.ensure_anchors(section);
        self.anchors.get(&section).map(Vec::as_slice).unwrap_or(&[])
    }

    fn ensure_anchors(&mut self, section: Section) {
        if self.anchors.contains_key(&section) {
            return;
        }
        let points = match self.textures.get(&section) {
            Some(tex) => {
                let pts = sample_anchors(tex, self.width, self.height, &self.params.sampler);
                log::debug!(
                    "[anchors] {} sampled {} points at {}x{}",
                    section,
                    pts.len(),
                    self.width,
                    self.height
                );
                pts
            }
            None => Vec::new(),
        };
        self.anchors.insert(section, points);
    }

    /// Store a decoded texture. Takes effect at the next reseed or section
    /// change.
    pub fn insert_texture(&mut self, section: Section, texture: RgbaImage) {
        if self.halted {
            return;
        }
        let (w, h) = texture.dimensions();
        log::info!("[texture] {} ready ({}x{})", section, w, h);
        self.textures.insert(section, texture);
        self.anchors.remove(&section);
    }

    /// New canvas size. Anchors live in pixel space, so everything is
    /// resampled and the population is rebuilt.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.halted {
            return;
        }
        self.width = width;
        self.height = height;
        self.anchors.clear();
        self.reseed();
    }

    /// Rebuild the population for the current size, theme and section.
    pub fn reseed(&mut self) {
        if self.halted {
            return;
        }
        self.glows.clear();
        self.transition = 1.0;
        if self.width == 0 || self.height == 0 {
            self.particles.clear();
            log::debug!("[field] zero-sized canvas; store cleared");
            return;
        }
        let count = particle_count(self.width, &self.params);
        self.ensure_anchors(self.section);
        let anchors = self.anchors.get(&self.section).map(Vec::as_slice).unwrap_or(&[]);
        if anchors.is_empty() {
            log::debug!("[field] no anchors for {}; random placement", self.section);
        }
        self.particles = create_particles(
            count,
            self.width as f32,
            self.height as f32,
            anchors,
            &Theme::for_mode(self.mode).palette,
            &self.params,
            &mut self.rng,
        );
        log::debug!(
            "[field] seeded {} particles ({:?}, {}) at {}x{}",
            self.particles.len(),
            self.mode,
            self.section,
            self.width,
            self.height
        );
    }

    /// Theme flips recolor the whole population, so they reseed.
    pub fn set_theme(&mut self, is_dark: bool) {
        let mode = ThemeMode::from_dark(is_dark);
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        self.reseed();
    }

    /// Retarget homes to the new section's anchors and start a transition.
    pub fn set_active_section(&mut self, section: Section) {
        if section == self.section {
            return;
        }
        self.section = section;
        self.transition = 0.0;
        self.ensure_anchors(section);
        let anchors = self.anchors.get(&section).map(Vec::as_slice).unwrap_or(&[]);
        retarget_homes(
            &mut self.particles,
            self.width as f32,
            self.height as f32,
            anchors,
            self.params.sampler.stride,
            &mut self.rng,
        );
        log::debug!("[field] section -> {} ({} anchors)", section, anchors.len());
    }

    /// Only changes friction.
    pub fn set_scroll_progress(&mut self, progress: f32) {
        self.scroll_progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
    }

    /// Switches repulsion to the vortex; no reseed.
    pub fn set_hover_state(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    pub fn set_pointer(&mut self, pointer: Vec2) {
        self.pointer = pointer;
    }

    /// Apply whatever differs between `signals` and the current state.
    pub fn apply_signals(&mut self, signals: &Signals) {
        self.set_theme(signals.is_dark);
        self.set_active_section(signals.section);
        self.set_scroll_progress(signals.scroll_progress);
        self.set_hover_state(signals.hovering);
        self.set_pointer(signals.pointer);
    }

    /// Advance the field by `dt` and refresh [`Field::glows`].
    pub fn step(&mut self, dt: Duration, signals: &Signals) {
        if self.halted {
            return;
        }
        self.apply_signals(signals);
        self.glows.clear();
        if self.width == 0 || self.height == 0 {
            return;
        }

        let k = frame_scale(dt, self.params.max_frame_scale);
        if self.transition < 1.0 {
            self.transition += self.params.transition_rate * k;
            // absorb float drift so ceil(1/rate) frames always arrive
            if self.transition >= 1.0 - 1e-4 {
                self.transition = 1.0;
            }
        }

        let theme = Theme::for_mode(self.mode);
        let inputs = StepInputs {
            params: &self.params,
            width: self.width as f32,
            height: self.height as f32,
            pointer: self.pointer,
            hovering: self.hovering,
            transitioning: self.transition < 1.0,
            scroll_progress: self.scroll_progress,
            base_opacity: theme.base_opacity,
            accent: ACCENT,
            frame_scale: k,
        };
        let rng = &mut self.rng;
        self.glows
            .extend(self.particles.iter_mut().map(|p| advance(p, &inputs, rng)));
    }
}
