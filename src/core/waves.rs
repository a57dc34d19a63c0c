// Synthetic signal traces drawn behind the page content.
//
// Each trace is a closed-form sine/cosine composition keyed by `WaveKind`,
// recomputed every frame from a scrolling phase offset. The generator
// `sample` is pure; the small jitter some kinds carry is added by the band's
// RNG during `update` so host tests can snapshot generator output.

use glam::Vec2;
use rand::prelude::*;
use rand::rngs::StdRng;
use std::f32::consts::PI;

/// Horizontal sample spacing in pixels.
pub const SAMPLE_STEP: f32 = 6.0;
/// Samples extend this far past the visible edges to avoid clipping.
pub const OVERSCAN: f32 = 50.0;
/// Phase-to-pixel scale for the horizontal scroll.
pub const SCROLL_PX_PER_PHASE: f32 = 100.0;

const CARRIER_AMPLITUDE: f32 = 30.0;

// Environmental event burst: a narrow window once per phase cycle.
const EVENT_CYCLE: f32 = 3.0 * PI;
const EVENT_WINDOW_START: f32 = 2.0;
const EVENT_WINDOW_END: f32 = 2.2;
const EVENT_FREQ: f32 = 15.0;
const EVENT_AMPLITUDE: f32 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaveKind {
    Biomedical,
    Wireless,
    Environmental,
    Vehicles,
    Carrier,
}

impl WaveKind {
    pub fn color(self) -> &'static str {
        match self {
            WaveKind::Biomedical => "#0066ff",
            WaveKind::Wireless => "#00bcd4",
            WaveKind::Environmental => "#4caf50",
            WaveKind::Vehicles => "#ff9800",
            WaveKind::Carrier => "#33828d",
        }
    }

    /// Half-range of the additive jitter term; zero for clean traces.
    fn jitter(self) -> f32 {
        match self {
            WaveKind::Biomedical => 2.0,
            WaveKind::Vehicles => 3.0,
            _ => 0.0,
        }
    }
}

/// Pure vertical offset generator. Same `pos` always yields the same value.
pub fn sample(kind: WaveKind, pos: f32) -> f32 {
    match kind {
        WaveKind::Biomedical => (pos * 3.0).sin() * 15.0 + (pos * 7.0).sin() * 8.0,
        WaveKind::Wireless => (pos * 2.0).sin() * 12.0 + (pos * 1.5).sin() * 8.0,
        WaveKind::Environmental => {
            let cycle = pos.rem_euclid(EVENT_CYCLE);
            let mut s = (pos * 0.8).sin() * 6.0;
            if cycle > EVENT_WINDOW_START && cycle < EVENT_WINDOW_END {
                // Transient spike, once per cycle.
                s += ((cycle - EVENT_WINDOW_START) * EVENT_FREQ).sin() * EVENT_AMPLITUDE;
            }
            s
        }
        WaveKind::Vehicles => (pos * 2.5).sin() * 10.0 + (pos * 1.2).cos() * 6.0,
        WaveKind::Carrier => (pos * 2.0).sin() * CARRIER_AMPLITUDE * 0.5,
    }
}

/// Number of samples produced for a given visible width.
pub fn sample_count(width: f32) -> usize {
    ((width + OVERSCAN) / SAMPLE_STEP).floor() as usize + 1
}

pub struct Waveform {
    pub kind: WaveKind,
    pub baseline: f32,
    pub frequency: f32,
    /// Monotonically increasing scroll offset.
    pub phase: f32,
    /// Recomputed every frame; not retained across frames.
    pub points: Vec<Vec2>,
}

impl Waveform {
    pub fn new(kind: WaveKind, baseline: f32, frequency: f32) -> Self {
        Self {
            kind,
            baseline,
            frequency,
            phase: 0.0,
            points: Vec::new(),
        }
    }

    /// Advance the phase and recompute the sample sequence. The pixel scroll
    /// is taken modulo the sample step so points never drift off-screen.
    pub fn update(&mut self, width: f32, rng: &mut StdRng) {
        self.phase += self.frequency;
        let scroll = (self.phase * SCROLL_PX_PER_PHASE) % SAMPLE_STEP;
        let n = sample_count(width);
        self.points.clear();
        self.points.reserve(n);
        let jitter = self.kind.jitter();
        for i in 0..n {
            let x = i as f32 * SAMPLE_STEP - scroll;
            let pos = x * self.frequency + self.phase;
            let mut y = sample(self.kind, pos);
            if jitter > 0.0 {
                y += (rng.gen::<f32>() * 2.0 - 1.0) * jitter;
            }
            self.points.push(Vec2::new(x, self.baseline + y));
        }
    }
}

/// Fixed vertical layout: kind, baseline as a fraction of height, frequency.
const BAND_LAYOUT: &[(WaveKind, f32, f32)] = &[
    (WaveKind::Biomedical, 0.2, 0.008),
    (WaveKind::Wireless, 0.4, 0.010),
    (WaveKind::Environmental, 0.6, 0.006),
    (WaveKind::Vehicles, 0.8, 0.012),
];

pub struct WaveBand {
    pub waves: Vec<Waveform>,
    pub width: f32,
    pub height: f32,
    rng: StdRng,
}

impl WaveBand {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self {
            waves: build_waves(width, height),
            width,
            height,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Rebuild for a new viewport; baselines are recomputed proportionally.
    pub fn rebuild(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.waves = build_waves(width, height);
    }

    pub fn update(&mut self) {
        let Self {
            waves, width, rng, ..
        } = self;
        for wave in waves.iter_mut() {
            wave.update(*width, rng);
        }
    }
}

fn build_waves(_width: f32, height: f32) -> Vec<Waveform> {
    BAND_LAYOUT
        .iter()
        .map(|&(kind, fraction, frequency)| Waveform::new(kind, height * fraction, frequency))
        .collect()
}
