//! Rendering and interaction tuning constants.

// Field size and click burst
pub const PARTICLE_COUNT: usize = 50;
pub const BURST_SIZE: usize = 8;

// Draw opacity
pub const PARTICLE_ALPHA_SCALE: f64 = 0.6; // scaled by particle life
pub const WAVE_ALPHA: f64 = 0.4;
pub const WAVE_LINE_WIDTH: f64 = 1.5;

// Countdown refresh period
pub const COUNTDOWN_INTERVAL_MS: i32 = 1000;
