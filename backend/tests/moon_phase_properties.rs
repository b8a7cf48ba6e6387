//! Invariants of the phase calculator over arbitrary instants.

mod support;

use chrono::{DateTime, Duration, Utc};
use proptest::prelude::*;

use lunar_rust::models::MoonPhase;
use lunar_rust::services::moon_phase::{
    compute_phase, is_full_moon_on_date, is_new_moon_on_date, phase_for_cycle_day,
    LUNAR_CYCLE_DAYS,
};
use lunar_rust::services::phase_theme::classify_theme;

use support::{cycle, days_after_anchor};

/// Roughly 1683..2317 as Unix milliseconds.
const MILLIS_RANGE: std::ops::Range<i64> = -9_000_000_000_000..11_000_000_000_000;

fn instant(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap()
}

proptest! {
    #[test]
    fn prop_outputs_in_range(ms in MILLIS_RANGE) {
        let info = compute_phase(instant(ms));
        prop_assert!(info.day_of_cycle <= 30);
        prop_assert!(info.illumination <= 100);
        prop_assert!(info.cycle_progress <= 100);
        prop_assert!(info.days_until_new_moon <= 30);
        prop_assert!(info.days_until_full_moon <= 30);
    }

    #[test]
    fn prop_periodic_over_one_cycle(ms in MILLIS_RANGE) {
        let t = instant(ms);
        let a = compute_phase(t);
        let b = compute_phase(t + cycle());

        prop_assert_eq!(a.phase, b.phase);
        prop_assert_eq!(a.day_of_cycle, b.day_of_cycle);
        prop_assert_eq!(a.illumination, b.illumination);
        prop_assert_eq!(a.is_new_moon, b.is_new_moon);
        prop_assert_eq!(a.is_full_moon, b.is_full_moon);
        prop_assert_eq!(a.next_new_moon + cycle(), b.next_new_moon);
        prop_assert_eq!(a.next_full_moon + cycle(), b.next_full_moon);
    }

    #[test]
    fn prop_next_new_moon_is_new(ms in MILLIS_RANGE) {
        let t = instant(ms);
        let info = compute_phase(t);
        let at_next = compute_phase(info.next_new_moon);

        prop_assert!(info.next_new_moon >= t);
        prop_assert_eq!(at_next.phase, MoonPhase::New);
        prop_assert_eq!(at_next.day_of_cycle, 0);
        prop_assert!(at_next.is_new_moon);
    }

    #[test]
    fn prop_next_full_moon_is_full(ms in MILLIS_RANGE) {
        let t = instant(ms);
        let info = compute_phase(t);
        let at_next = compute_phase(info.next_full_moon);

        prop_assert!(info.next_full_moon >= t);
        prop_assert_eq!(at_next.phase, MoonPhase::Full);
        prop_assert!(at_next.is_full_moon);
        prop_assert!(at_next.illumination >= 99);
    }

    #[test]
    fn prop_days_until_matches_next_dates(ms in MILLIS_RANGE) {
        let t = instant(ms);
        let info = compute_phase(t);

        let to_new = (info.next_new_moon - t).num_milliseconds() as f64 / 86_400_000.0;
        let to_full = (info.next_full_moon - t).num_milliseconds() as f64 / 86_400_000.0;
        prop_assert!((to_new - info.days_until_new_moon as f64).abs() <= 0.5);
        prop_assert!((to_full - info.days_until_full_moon as f64).abs() <= 0.5);
    }

    #[test]
    fn prop_classification_is_total(day in 0.0..LUNAR_CYCLE_DAYS) {
        let phase = phase_for_cycle_day(day);
        prop_assert!(MoonPhase::ALL.contains(&phase));
        prop_assert!(!classify_theme(phase).suggested_activities.is_empty());
    }

    #[test]
    fn prop_predicates_follow_rounded_day(ms in MILLIS_RANGE) {
        let t = instant(ms);
        let day = compute_phase(t).day_of_cycle;
        prop_assert_eq!(is_new_moon_on_date(t), day <= 1 || day >= 29);
        prop_assert_eq!(is_full_moon_on_date(t), (14..=16).contains(&day));
    }
}

#[test]
fn anchor_is_new_moon() {
    let info = compute_phase(days_after_anchor(0.0));
    assert_eq!(info.phase, MoonPhase::New);
    assert_eq!(info.day_of_cycle, 0);
    assert_eq!(info.illumination, 0);
    assert!(info.is_new_moon);
}

#[test]
fn fourteen_and_three_quarter_days_is_full() {
    let info = compute_phase(days_after_anchor(14.75));
    assert_eq!(info.phase, MoonPhase::Full);
    assert!(info.illumination >= 99);
}

#[test]
fn one_cycle_later_is_new_again() {
    let info = compute_phase(days_after_anchor(29.53));
    assert_eq!(info.phase, MoonPhase::New);
    assert_eq!(info.day_of_cycle, 0);
    assert!(info.is_new_moon);
}

#[test]
fn many_cycles_before_anchor_is_new() {
    let info = compute_phase(days_after_anchor(-29.53 * 1000.0));
    assert_eq!(info.phase, MoonPhase::New);
    assert_eq!(info.day_of_cycle, 0);
}

#[test]
fn sub_millisecond_input_still_lands_on_new_moon() {
    let t = days_after_anchor(3.0) + Duration::nanoseconds(123_456);
    let next = compute_phase(t).next_new_moon;
    assert_eq!(compute_phase(next).phase, MoonPhase::New);
}
