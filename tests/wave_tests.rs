// Host-side tests for the pure waveform generators.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod waves {
    include!("../src/core/waves.rs");
}

use rand::rngs::StdRng;
use rand::SeedableRng;
use waves::*;

const ALL_KINDS: [WaveKind; 5] = [
    WaveKind::Biomedical,
    WaveKind::Wireless,
    WaveKind::Environmental,
    WaveKind::Vehicles,
    WaveKind::Carrier,
];

#[test]
fn sample_is_pure() {
    for kind in ALL_KINDS {
        for i in 0..200 {
            let pos = i as f32 * 0.173;
            assert_eq!(sample(kind, pos), sample(kind, pos));
        }
    }
}

#[test]
fn sample_count_matches_formula() {
    for width in [320.0_f32, 400.0, 800.0, 1920.0] {
        let expected = ((width + OVERSCAN) / SAMPLE_STEP).floor() as usize + 1;
        assert_eq!(sample_count(width), expected);
    }
    assert_eq!(sample_count(800.0), 142);
}

#[test]
fn update_produces_deterministic_point_count() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut wave = Waveform::new(WaveKind::Wireless, 200.0, 0.01);
    for _ in 0..10 {
        wave.update(800.0, &mut rng);
        assert_eq!(wave.points.len(), sample_count(800.0));
    }
}

#[test]
fn environmental_event_burst_fires_inside_window() {
    // Inside the burst window the spike dominates the base trace.
    let spike = sample(WaveKind::Environmental, 2.1);
    assert!(spike.abs() > 10.0, "expected a spike, got {spike}");
    // Outside the window the trace stays within its base amplitude.
    let calm = sample(WaveKind::Environmental, 1.0);
    assert!(calm.abs() <= 6.0 + 1e-3, "expected calm trace, got {calm}");
}

#[test]
fn phase_advances_by_frequency_each_update() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut wave = Waveform::new(WaveKind::Carrier, 100.0, 0.006);
    wave.update(400.0, &mut rng);
    assert!((wave.phase - 0.006).abs() < 1e-6);
    wave.update(400.0, &mut rng);
    assert!((wave.phase - 0.012).abs() < 1e-6);
}

#[test]
fn points_stay_within_overscan_range() {
    let mut rng = StdRng::seed_from_u64(9);
    let width = 800.0_f32;
    let mut wave = Waveform::new(WaveKind::Vehicles, 480.0, 0.012);
    for _ in 0..300 {
        wave.update(width, &mut rng);
        for p in &wave.points {
            assert!(p.x >= -SAMPLE_STEP && p.x <= width + OVERSCAN, "x drifted: {}", p.x);
        }
    }
}

#[test]
fn clean_kinds_ignore_the_rng() {
    let mut rng_a = StdRng::seed_from_u64(1);
    let mut rng_b = StdRng::seed_from_u64(2);
    let mut a = Waveform::new(WaveKind::Wireless, 240.0, 0.01);
    let mut b = Waveform::new(WaveKind::Wireless, 240.0, 0.01);
    for _ in 0..5 {
        a.update(800.0, &mut rng_a);
        b.update(800.0, &mut rng_b);
    }
    assert_eq!(a.points, b.points);
}

#[test]
fn band_baselines_scale_with_height() {
    let mut band = WaveBand::new(800.0, 600.0, 5);
    let baselines: Vec<f32> = band.waves.iter().map(|w| w.baseline).collect();
    assert_eq!(baselines, vec![120.0, 240.0, 360.0, 480.0]);

    band.rebuild(400.0, 300.0);
    let baselines: Vec<f32> = band.waves.iter().map(|w| w.baseline).collect();
    assert_eq!(baselines, vec![60.0, 120.0, 180.0, 240.0]);
    assert_eq!(band.width, 400.0);
    assert_eq!(band.height, 300.0);
}

#[test]
fn band_update_fills_every_wave() {
    let mut band = WaveBand::new(640.0, 480.0, 11);
    band.update();
    assert_eq!(band.waves.len(), 4);
    for wave in &band.waves {
        assert_eq!(wave.points.len(), sample_count(640.0));
        for p in &wave.points {
            assert!(p.y.is_finite());
        }
    }
}
