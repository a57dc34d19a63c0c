#![allow(dead_code)]
mod countdown {
    include!("../src/core/countdown.rs");
}

use countdown::*;

const TARGET: f64 = 1_757_980_800_000.0;

#[test]
fn remaining_is_none_at_and_after_target() {
    let c = Countdown::new(TARGET);
    assert_eq!(c.remaining(TARGET), None);
    assert_eq!(c.remaining(TARGET + 1.0), None);
    assert_eq!(c.remaining(TARGET + 86_400_000.0), None);
}

#[test]
fn remaining_splits_into_calendar_parts() {
    let c = Countdown::new(TARGET);
    let offset = ((86_400 + 3_600 + 60 + 1) * 1000) as f64;
    let parts = c.remaining(TARGET - offset).unwrap();
    assert_eq!(
        parts,
        CountdownParts {
            days: 1,
            hours: 1,
            minutes: 1,
            seconds: 1,
        }
    );
}

#[test]
fn sub_second_distance_reads_all_zeros() {
    let c = Countdown::new(TARGET);
    let parts = c.remaining(TARGET - 500.0).unwrap();
    assert_eq!(parts, CountdownParts::default());
}

#[test]
fn large_distance_counts_whole_days() {
    let c = Countdown::new(TARGET);
    let parts = c.remaining(TARGET - 10.5 * 86_400_000.0).unwrap();
    assert_eq!(parts.days, 10);
    assert_eq!(parts.hours, 12);
    assert_eq!(parts.minutes, 0);
    assert_eq!(parts.seconds, 0);
}

#[test]
fn pad2_zero_fills_single_digits() {
    assert_eq!(pad2(0), "00");
    assert_eq!(pad2(7), "07");
    assert_eq!(pad2(42), "42");
}
