// Host-side tests for particle creation and the per-particle step.

use glam::Vec2;
use glowfield_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn quiet_params() -> FieldParams {
    FieldParams {
        jitter: 0.0,
        initial_speed: 0.0,
        ..FieldParams::default()
    }
}

fn resting(position: Vec2, home: Vec2) -> Particle {
    Particle {
        position,
        velocity: Vec2::ZERO,
        size: 2.0,
        color: DARK.palette[0],
        base_brightness: 1.0,
        home,
    }
}

fn inputs(params: &FieldParams) -> StepInputs<'_> {
    StepInputs {
        params,
        width: 800.0,
        height: 600.0,
        pointer: Vec2::from(POINTER_OFFSCREEN),
        hovering: false,
        transitioning: false,
        scroll_progress: 0.0,
        base_opacity: DARK.base_opacity,
        accent: ACCENT,
        frame_scale: 1.0,
    }
}

#[test]
fn particle_count_switches_at_breakpoint() {
    let p = FieldParams::default();
    assert_eq!(particle_count(375, &p), 80);
    assert_eq!(particle_count(768, &p), 80);
    assert_eq!(particle_count(769, &p), 750);
    assert_eq!(particle_count(1024, &p), 750);
}

#[test]
fn created_particles_sit_on_anchors_within_bounds() {
    let params = FieldParams::default();
    let anchors = vec![Vec2::new(100.0, 100.0), Vec2::new(400.0, 300.0)];
    let mut rng = StdRng::seed_from_u64(7);
    let ps = create_particles(200, 800.0, 600.0, &anchors, &DARK.palette, &params, &mut rng);
    assert_eq!(ps.len(), 200);
    let half = params.sampler.stride as f32 / 2.0;
    for p in &ps {
        assert_eq!(p.position, p.home);
        assert!(anchors
            .iter()
            .any(|a| (a.x - p.home.x).abs() <= half && (a.y - p.home.y).abs() <= half));
        assert!(params.size_range.contains(&p.size));
        assert!(params.brightness_range.contains(&p.base_brightness));
        assert!(DARK.palette.contains(&p.color));
        assert!(p.velocity.x.abs() <= params.initial_speed);
        assert!(p.velocity.y.abs() <= params.initial_speed);
    }
}

#[test]
fn jittered_homes_never_leave_the_canvas() {
    let params = FieldParams::default();
    let anchors = vec![Vec2::ZERO, Vec2::new(99.0, 49.0)];
    let mut rng = StdRng::seed_from_u64(11);
    let ps = create_particles(500, 100.0, 50.0, &anchors, &LIGHT.palette, &params, &mut rng);
    for p in &ps {
        assert!(p.home.x >= 0.0 && p.home.x < 100.0);
        assert!(p.home.y >= 0.0 && p.home.y < 50.0);
    }
}

#[test]
fn empty_anchors_fall_back_to_random_placement() {
    let params = FieldParams::default();
    let mut rng = StdRng::seed_from_u64(3);
    let ps = create_particles(750, 1024.0, 768.0, &[], &LIGHT.palette, &params, &mut rng);
    assert_eq!(ps.len(), 750);
    assert!(ps.iter().all(|p| p.position.x >= 0.0
        && p.position.x < 1024.0
        && p.position.y >= 0.0
        && p.position.y < 768.0));
}

#[test]
fn zero_sized_canvas_creates_nothing() {
    let mut rng = StdRng::seed_from_u64(3);
    let ps = create_particles(10, 0.0, 768.0, &[], &LIGHT.palette, &FieldParams::default(), &mut rng);
    assert!(ps.is_empty());
}

#[test]
fn retarget_moves_homes_not_positions() {
    let params = FieldParams::default();
    let mut rng = StdRng::seed_from_u64(5);
    let mut ps = create_particles(50, 800.0, 600.0, &[Vec2::new(10.0, 10.0)], &DARK.palette, &params, &mut rng);
    let before: Vec<Vec2> = ps.iter().map(|p| p.position).collect();
    retarget_homes(&mut ps, 800.0, 600.0, &[Vec2::new(700.0, 500.0)], 4, &mut rng);
    for (p, pos) in ps.iter().zip(before) {
        assert_eq!(p.position, pos);
        assert!(p.home.distance(Vec2::new(700.0, 500.0)) <= 3.0);
    }
}

#[test]
fn wrap_folds_into_half_open_range() {
    assert_eq!(wrap(50.0, 100.0), 50.0);
    assert_eq!(wrap(-0.5, 100.0), 99.5);
    assert_eq!(wrap(100.0, 100.0), 0.0);
    assert_eq!(wrap(250.0, 100.0), 50.0);
    let tiny = wrap(-1e-9, 100.0);
    assert!((0.0..100.0).contains(&tiny));
    assert_eq!(wrap(f32::NAN, 100.0), 0.0);
    assert_eq!(wrap(5.0, 0.0), 0.0);
}

#[test]
fn illumination_peaks_at_centre() {
    let p = FieldParams::default();
    let centre = illumination(Vec2::new(400.0, 300.0), 800.0, 600.0, &p);
    assert!((centre - 1.8).abs() < 1e-5);
    assert_eq!(illumination(Vec2::ZERO, 800.0, 600.0, &p), 1.0);
    // halfway to the lit radius (0.4 * 600 = 240)
    let half = illumination(Vec2::new(520.0, 300.0), 800.0, 600.0, &p);
    assert!((half - 1.4).abs() < 1e-5);
}

#[test]
fn friction_never_injects_energy() {
    let params = quiet_params();
    for scroll in [0.0, 0.5, 1.0] {
        let mut p = resting(Vec2::new(400.0, 300.0), Vec2::new(400.0, 300.0));
        p.velocity = Vec2::new(3.0, -4.0);
        let mut s = inputs(&params);
        s.scroll_progress = scroll;
        let mut rng = StdRng::seed_from_u64(1);
        let mut last = p.velocity.length();
        for _ in 0..400 {
            advance(&mut p, &s, &mut rng);
            let speed = p.velocity.length();
            assert!(speed <= last);
            last = speed;
        }
        assert!(last < 1e-6);
    }
}

#[test]
fn scroll_depth_raises_friction() {
    let p = FieldParams::default();
    assert!(friction(&p, false, false, 1.0) < friction(&p, false, false, 0.0));
    assert_eq!(friction(&p, true, true, 0.0), p.vortex_friction);
    // hovering elsewhere on the page does not tighten distant particles
    assert_eq!(friction(&p, true, false, 0.0), p.base_friction);
    assert_eq!(p.scroll_friction_at(5.0), p.scroll_friction_at(1.0));
}

#[test]
fn pointer_pushes_particles_away() {
    let params = quiet_params();
    let mut p = resting(Vec2::new(110.0, 100.0), Vec2::new(110.0, 100.0));
    let mut s = inputs(&params);
    s.pointer = Vec2::new(100.0, 100.0);
    let mut rng = StdRng::seed_from_u64(1);
    let glow = advance(&mut p, &s, &mut rng);
    assert!(p.velocity.x > 0.0);
    assert!(p.velocity.y.abs() < 1e-5);
    assert_eq!(glow.color, DARK.palette[0]);
}

#[test]
fn hovering_swirls_and_recolors() {
    let params = quiet_params();
    let mut p = resting(Vec2::new(110.0, 100.0), Vec2::new(110.0, 100.0));
    let mut s = inputs(&params);
    s.pointer = Vec2::new(100.0, 100.0);
    s.hovering = true;
    let mut rng = StdRng::seed_from_u64(1);
    let glow = advance(&mut p, &s, &mut rng);
    // tangential (+y) dominates the weak inward (-x) pull
    assert!(p.velocity.y > 0.0);
    assert!(p.velocity.x < 0.0);
    assert!(p.velocity.y > p.velocity.x.abs());
    assert_eq!(glow.color, ACCENT);
}

#[test]
fn vortex_reach_is_wider_than_repulsion() {
    let params = quiet_params();
    // 250 away: outside repulsion (180), inside vortex (300)
    let start = Vec2::new(350.0, 100.0);
    let mut s = inputs(&params);
    s.pointer = Vec2::new(100.0, 100.0);
    let mut rng = StdRng::seed_from_u64(1);

    let mut calm = resting(start, start);
    advance(&mut calm, &s, &mut rng);
    assert_eq!(calm.velocity, Vec2::ZERO);

    s.hovering = true;
    let mut caught = resting(start, start);
    let glow = advance(&mut caught, &s, &mut rng);
    assert!(caught.velocity.length() > 0.0);
    assert_eq!(glow.color, ACCENT);
}

#[test]
fn transitioning_particles_home_and_ignore_pointer() {
    let params = quiet_params();
    let mut p = resting(Vec2::new(110.0, 100.0), Vec2::new(610.0, 100.0));
    let mut s = inputs(&params);
    s.pointer = Vec2::new(100.0, 100.0);
    s.transitioning = true;
    let mut rng = StdRng::seed_from_u64(1);
    advance(&mut p, &s, &mut rng);
    assert_eq!(p.velocity, Vec2::ZERO);
    assert!((p.position.x - 150.0).abs() < 1e-3); // 8% of 500
}

#[test]
fn arrived_particles_react_mid_transition() {
    let params = quiet_params();
    let mut p = resting(Vec2::new(110.0, 100.0), Vec2::new(115.0, 100.0));
    let mut s = inputs(&params);
    s.pointer = Vec2::new(100.0, 100.0);
    s.transitioning = true;
    let mut rng = StdRng::seed_from_u64(1);
    advance(&mut p, &s, &mut rng);
    assert!(p.velocity.x > 0.0);
}

#[test]
fn opacity_combines_brightness_theme_and_light() {
    let params = quiet_params();
    let mut p = resting(Vec2::new(400.0, 300.0), Vec2::new(400.0, 300.0));
    p.base_brightness = 0.7;
    let mut s = inputs(&params);
    s.base_opacity = LIGHT.base_opacity;
    let mut rng = StdRng::seed_from_u64(1);
    let glow = advance(&mut p, &s, &mut rng);
    assert!((glow.opacity - 0.7 * 0.25 * glow.illumination).abs() < 1e-6);
    assert!((glow.illumination - 1.8).abs() < 1e-4);
    assert_eq!(glow.radius, 2.0 * params.glow_radius_scale);
}

#[test]
fn long_frames_are_clamped() {
    assert_eq!(frame_scale(FRAME_DT, MAX_FRAME_SCALE), 1.0);
    assert_eq!(frame_scale(std::time::Duration::from_secs(2), MAX_FRAME_SCALE), MAX_FRAME_SCALE);
    assert_eq!(frame_scale(std::time::Duration::ZERO, MAX_FRAME_SCALE), 0.0);
}
