// Registration countdown math, parameterized by a target timestamp so the
// calendar date lives in configuration rather than in the tick code.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CountdownParts {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

#[derive(Clone, Copy, Debug)]
pub struct Countdown {
    /// Target instant in milliseconds since the Unix epoch.
    pub target_ms: f64,
}

impl Countdown {
    pub fn new(target_ms: f64) -> Self {
        Self { target_ms }
    }

    /// Time left until the target, or `None` once it has passed.
    pub fn remaining(&self, now_ms: f64) -> Option<CountdownParts> {
        let distance = self.target_ms - now_ms;
        if distance <= 0.0 {
            return None;
        }
        let total_seconds = (distance / 1000.0) as u64;
        Some(CountdownParts {
            days: total_seconds / 86_400,
            hours: total_seconds % 86_400 / 3_600,
            minutes: total_seconds % 3_600 / 60,
            seconds: total_seconds % 60,
        })
    }
}

/// Two-digit display form used by the countdown tiles.
pub fn pad2(value: u64) -> String {
    format!("{value:02}")
}
