// Host-side tests for the pure particle field.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod particles {
    include!("../src/core/particles.rs");
}

use glam::Vec2;
use particles::*;

fn make_field(boundary: BoundaryPolicy, count: usize, width: f32, height: f32) -> ParticleField {
    let config = FieldConfig {
        count,
        boundary,
        ..FieldConfig::default()
    };
    ParticleField::new(config, width, height, 7)
}

#[test]
fn life_stays_in_unit_range_and_respawns() {
    let mut field = make_field(BoundaryPolicy::Wrap, 50, 800.0, 600.0);
    let pointer = Vec2::new(400.0, 300.0);
    let mut saw_respawn = false;
    let mut prev: Vec<f32> = field.particles().iter().map(|p| p.life).collect();
    for _ in 0..2000 {
        field.update(pointer);
        for (p, prev_life) in field.particles().iter().zip(&prev) {
            assert!(
                p.life > 0.0 && p.life <= 1.0,
                "life out of range: {}",
                p.life
            );
            if p.life > *prev_life {
                // A respawn resets life to exactly 1.
                assert_eq!(p.life, 1.0);
                saw_respawn = true;
            }
        }
        prev = field.particles().iter().map(|p| p.life).collect();
    }
    assert!(saw_respawn, "expected at least one respawn over 2000 frames");
}

#[test]
fn positions_stay_in_bounds_with_wrap() {
    let mut field = make_field(BoundaryPolicy::Wrap, 50, 800.0, 600.0);
    let pointer = Vec2::new(10.0, 10.0);
    for _ in 0..500 {
        field.update(pointer);
        for p in field.particles() {
            assert!((0.0..=800.0).contains(&p.pos.x), "x out of bounds: {}", p.pos.x);
            assert!((0.0..=600.0).contains(&p.pos.y), "y out of bounds: {}", p.pos.y);
        }
    }
}

#[test]
fn positions_stay_in_bounds_with_bounce() {
    let mut field = make_field(BoundaryPolicy::Bounce, 50, 800.0, 600.0);
    let pointer = Vec2::new(790.0, 590.0);
    for _ in 0..500 {
        field.update(pointer);
        for p in field.particles() {
            assert!((0.0..=800.0).contains(&p.pos.x));
            assert!((0.0..=600.0).contains(&p.pos.y));
        }
    }
}

#[test]
fn field_holds_configured_count() {
    let mut field = make_field(BoundaryPolicy::Wrap, 50, 800.0, 600.0);
    let pointer = Vec2::new(400.0, 300.0);
    for _ in 0..1000 {
        field.update(pointer);
        assert_eq!(field.len(), 50);
    }
}

#[test]
fn burst_particles_expire_back_to_configured_count() {
    let mut field = make_field(BoundaryPolicy::Wrap, 50, 800.0, 600.0);
    field.spawn_burst(Vec2::new(400.0, 300.0), 8);
    assert_eq!(field.len(), 58);
    let pointer = Vec2::new(400.0, 300.0);
    for _ in 0..100 {
        field.update(pointer);
        assert!(field.len() >= 50, "field dropped below configured count");
    }
    assert_eq!(field.len(), 50, "transients should be gone after their decay");
}

#[test]
fn resize_clamps_particles_within_one_update() {
    let mut field = make_field(BoundaryPolicy::Bounce, 50, 800.0, 600.0);
    let pointer = Vec2::new(400.0, 300.0);
    for _ in 0..10 {
        field.update(pointer);
    }
    field.set_bounds(400.0, 300.0);
    field.update(pointer);
    for p in field.particles() {
        assert!((0.0..=400.0).contains(&p.pos.x));
        assert!((0.0..=300.0).contains(&p.pos.y));
    }
}

#[test]
fn resize_wraps_particles_within_one_update() {
    let mut field = make_field(BoundaryPolicy::Wrap, 50, 800.0, 600.0);
    let pointer = Vec2::new(400.0, 300.0);
    for _ in 0..10 {
        field.update(pointer);
    }
    field.set_bounds(400.0, 300.0);
    field.update(pointer);
    for p in field.particles() {
        assert!((0.0..=400.0).contains(&p.pos.x));
        assert!((0.0..=300.0).contains(&p.pos.y));
    }
}

#[test]
fn same_seed_gives_identical_runs() {
    let mut a = make_field(BoundaryPolicy::Wrap, 20, 800.0, 600.0);
    let mut b = make_field(BoundaryPolicy::Wrap, 20, 800.0, 600.0);
    let pointer = Vec2::new(123.0, 456.0);
    for _ in 0..100 {
        a.update(pointer);
        b.update(pointer);
    }
    for (pa, pb) in a.particles().iter().zip(b.particles()) {
        assert_eq!(pa.pos, pb.pos);
        assert_eq!(pa.life, pb.life);
        assert_eq!(pa.category, pb.category);
    }
}

#[test]
fn category_colors_are_hex() {
    for category in Category::ALL {
        let color = category.color();
        assert!(color.starts_with('#') && color.len() == 7, "bad color {color}");
    }
}

#[test]
fn thousand_frames_with_stationary_pointer() {
    let mut field = make_field(BoundaryPolicy::Wrap, 50, 800.0, 600.0);
    let pointer = Vec2::new(400.0, 300.0);
    for _ in 0..1000 {
        field.update(pointer);
        assert_eq!(field.len(), 50);
        for p in field.particles() {
            assert!(p.life > 0.0 && p.life <= 1.0);
            assert!(p.pos.x.is_finite() && p.pos.y.is_finite());
            assert!(p.angle.is_finite() && p.pulse.is_finite());
        }
    }
}
