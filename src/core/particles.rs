// Decorative particle field.
//
// A fixed-size collection of motes with simple per-frame physics: pointer
// attraction, velocity damping, a sinusoidal float term, boundary handling
// and a bounded life that drives periodic respawn. All randomness flows
// through a seeded RNG owned by the field so behavior is reproducible.

use glam::Vec2;
use rand::prelude::*;
use rand::rngs::StdRng;
use std::f32::consts::TAU;

// Per-frame float motion
const FLOAT_PULSE_STEP: f32 = 0.02;
const FLOAT_AMPLITUDE_Y: f32 = 0.3;
const FLOAT_AMPLITUDE_X: f32 = 0.2;
const FLOAT_CROSS_RATE: f32 = 0.7;

// Spawn ranges
const DRIFT_SPEED: f32 = 0.5;
const BURST_SPEED: f32 = 2.0;
const SIZE_MIN: f32 = 1.0;
const SIZE_SPAN: f32 = 3.0;
const SPIN_SPAN: f32 = 0.02;

// Transient burst particles fade much faster than field particles.
const BURST_DECAY: f32 = 0.02;

// Elastic bounce keeps some energy loss on each wall hit.
const BOUNCE_ATTENUATION: f32 = 0.8;

/// Thematic tag fixed at creation; selects color only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Biomedical,
    Wireless,
    Environmental,
    Vehicles,
    Innovation,
    Default,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Biomedical,
        Category::Wireless,
        Category::Environmental,
        Category::Vehicles,
        Category::Innovation,
        Category::Default,
    ];

    pub fn color(self) -> &'static str {
        match self {
            Category::Biomedical => "#0066ff",
            Category::Wireless => "#00bcd4",
            Category::Environmental => "#4caf50",
            Category::Vehicles => "#ff9800",
            Category::Innovation => "#9c27b0",
            Category::Default => "#33828d",
        }
    }
}

/// How a particle that crosses a canvas edge is handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Teleport to the opposite edge.
    Wrap,
    /// Invert and attenuate the offending velocity component, clamp inside.
    Bounce,
}

/// Field tuning. The values that varied across page revisions are named
/// options here instead of being baked into the update code.
#[derive(Clone, Debug)]
pub struct FieldConfig {
    pub count: usize,
    pub decay: f32,
    pub damping: f32,
    pub attract_radius: f32,
    pub attract_strength: f32,
    pub boundary: BoundaryPolicy,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 50,
            decay: 0.003,
            damping: 0.99,
            attract_radius: 100.0,
            attract_strength: 0.02,
            boundary: BoundaryPolicy::Wrap,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Always in [0, 1]; reaching 0 respawns (or removes a transient).
    pub life: f32,
    pub size: f32,
    pub category: Category,
    pub angle: f32,
    pub spin: f32,
    pub pulse: f32,
    decay: f32,
    transient: bool,
}

impl Particle {
    fn spawn(rng: &mut StdRng, bounds: Vec2, decay: f32) -> Self {
        let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];
        Self {
            pos: random_point(rng, bounds),
            vel: random_drift(rng, DRIFT_SPEED),
            life: 1.0,
            size: SIZE_MIN + rng.gen::<f32>() * SIZE_SPAN,
            category,
            angle: rng.gen::<f32>() * TAU,
            spin: (rng.gen::<f32>() - 0.5) * SPIN_SPAN,
            pulse: rng.gen::<f32>() * TAU,
            decay,
            transient: false,
        }
    }

    /// Advance one frame of physics. `pointer` is in canvas pixels.
    fn step(&mut self, pointer: Vec2, cfg: &FieldConfig, bounds: Vec2, rng: &mut StdRng) {
        let to_pointer = pointer - self.pos;
        let dist = to_pointer.length();
        if dist > f32::EPSILON && dist < cfg.attract_radius {
            let force = (cfg.attract_radius - dist) / cfg.attract_radius;
            self.vel += to_pointer / dist * force * cfg.attract_strength;
        }

        self.pos += self.vel;
        self.vel *= cfg.damping;

        // Float displacement independent of velocity.
        self.pulse += FLOAT_PULSE_STEP;
        self.pos.y += self.pulse.sin() * FLOAT_AMPLITUDE_Y;
        self.pos.x += (self.pulse * FLOAT_CROSS_RATE).cos() * FLOAT_AMPLITUDE_X;

        match cfg.boundary {
            BoundaryPolicy::Wrap => {
                if self.pos.x < 0.0 {
                    self.pos.x = bounds.x;
                } else if self.pos.x > bounds.x {
                    self.pos.x = 0.0;
                }
                if self.pos.y < 0.0 {
                    self.pos.y = bounds.y;
                } else if self.pos.y > bounds.y {
                    self.pos.y = 0.0;
                }
            }
            BoundaryPolicy::Bounce => {
                if self.pos.x < 0.0 || self.pos.x > bounds.x {
                    self.vel.x = -self.vel.x * BOUNCE_ATTENUATION;
                }
                if self.pos.y < 0.0 || self.pos.y > bounds.y {
                    self.vel.y = -self.vel.y * BOUNCE_ATTENUATION;
                }
                self.pos = self.pos.clamp(Vec2::ZERO, bounds);
            }
        }

        self.angle += self.spin;
        self.life -= self.decay;
        if self.life <= 0.0 {
            if self.transient {
                self.life = 0.0;
            } else {
                self.life = 1.0;
                self.pos = random_point(rng, bounds);
                self.vel = random_drift(rng, DRIFT_SPEED);
            }
        }
    }
}

pub struct ParticleField {
    particles: Vec<Particle>,
    pub config: FieldConfig,
    bounds: Vec2,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(config: FieldConfig, width: f32, height: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let bounds = Vec2::new(width.max(1.0), height.max(1.0));
        let particles = (0..config.count)
            .map(|_| Particle::spawn(&mut rng, bounds, config.decay))
            .collect();
        Self {
            particles,
            config,
            bounds,
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Resize the field. Particles are left in place; out-of-bounds positions
    /// are wrapped/clamped by the next update.
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width.max(1.0), height.max(1.0));
    }

    /// Add short-lived particles at a click point. They decay fast and are
    /// removed rather than respawned, so the field settles back to
    /// `config.count`.
    pub fn spawn_burst(&mut self, at: Vec2, n: usize) {
        let clamped = at.clamp(Vec2::ZERO, self.bounds);
        for _ in 0..n {
            let mut p = Particle::spawn(&mut self.rng, self.bounds, BURST_DECAY);
            p.pos = clamped;
            p.vel = random_drift(&mut self.rng, BURST_SPEED);
            p.transient = true;
            self.particles.push(p);
        }
    }

    /// Advance every particle one frame, then drop expired transients.
    pub fn update(&mut self, pointer: Vec2) {
        let Self {
            particles,
            config,
            bounds,
            rng,
        } = self;
        for p in particles.iter_mut() {
            p.step(pointer, config, *bounds, rng);
        }
        particles.retain(|p| !(p.transient && p.life <= 0.0));
    }
}

fn random_point(rng: &mut StdRng, bounds: Vec2) -> Vec2 {
    Vec2::new(
        rng.gen::<f32>() * bounds.x,
        rng.gen::<f32>() * bounds.y,
    )
}

fn random_drift(rng: &mut StdRng, speed: f32) -> Vec2 {
    Vec2::new(
        (rng.gen::<f32>() - 0.5) * speed,
        (rng.gen::<f32>() - 0.5) * speed,
    )
}
