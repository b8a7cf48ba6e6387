//! Moon phase calculation engine.
//!
//! Maps an instant to its position in the lunar cycle using a fixed new-moon
//! anchor and a constant synodic month. The position is reduced with exact
//! integer arithmetic on milliseconds so results are periodic to the
//! millisecond, for any instant chrono can represent.
//!
//! Illumination is a cosine model of cycle position, not photometric data.
//!
//! # Examples
//!
//! ```
//! use lunar_rust::models::MoonPhase;
//! use lunar_rust::services::moon_phase::{compute_phase, epoch_anchor};
//!
//! let info = compute_phase(epoch_anchor());
//! assert_eq!(info.phase, MoonPhase::New);
//! assert_eq!(info.illumination, 0);
//! ```

use std::f64::consts::PI;

use chrono::{DateTime, Duration, Utc};

use crate::error::{LunarError, LunarResult};
use crate::models::{millis_to_days, ModifiedJulianDate, MoonPhase, MoonPhaseInfo};
use crate::services::clock::Clock;

/// Length of the synodic month used by the calculator, in days.
pub const LUNAR_CYCLE_DAYS: f64 = 29.53;

/// [`LUNAR_CYCLE_DAYS`] in milliseconds.
pub const LUNAR_CYCLE_MILLIS: i64 = 2_551_392_000;

/// Day of the cycle the calculator treats as the full moon.
pub const FULL_MOON_DAY: f64 = 14.75;

/// [`FULL_MOON_DAY`] in milliseconds.
pub const FULL_MOON_MILLIS: i64 = 1_274_400_000;

/// Known new moon: 2000-01-06 18:14:00 UTC, as Unix milliseconds.
pub const EPOCH_ANCHOR_MILLIS: i64 = 947_182_440_000;

/// Exclusive upper bounds on the unrounded cycle day, in cycle order.
/// Positions past the last bound are [`MoonPhase::WaningCrescent`].
pub const PHASE_BOUNDARIES: [(f64, MoonPhase); 7] = [
    (1.845625, MoonPhase::New),
    (7.3825, MoonPhase::WaxingCrescent),
    (9.228125, MoonPhase::FirstQuarter),
    (FULL_MOON_DAY, MoonPhase::WaxingGibbous),
    (16.610625, MoonPhase::Full),
    (22.1475, MoonPhase::WaningGibbous),
    (23.993125, MoonPhase::LastQuarter),
];

/// The reference new moon as a UTC instant.
pub fn epoch_anchor() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(EPOCH_ANCHOR_MILLIS).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Milliseconds since the most recent new moon, in `[0, LUNAR_CYCLE_MILLIS)`.
fn cycle_offset_millis(date: DateTime<Utc>) -> i64 {
    (date.timestamp_millis() - EPOCH_ANCHOR_MILLIS).rem_euclid(LUNAR_CYCLE_MILLIS)
}

/// Unrounded position of `date` within its lunar cycle, in `[0, 29.53)` days.
pub fn cycle_position(date: DateTime<Utc>) -> qtty::Days {
    qtty::Days::new(millis_to_days(cycle_offset_millis(date)))
}

/// Classify an unrounded cycle day into one of the eight phases.
pub fn phase_for_cycle_day(day: f64) -> MoonPhase {
    PHASE_BOUNDARIES
        .iter()
        .find(|(upper, _)| day < *upper)
        .map(|(_, phase)| *phase)
        .unwrap_or(MoonPhase::WaningCrescent)
}

/// Cosine illumination model, percent.
pub fn illumination_for_cycle_day(day: f64) -> u32 {
    let angle = 2.0 * PI * day / LUNAR_CYCLE_DAYS;
    (100.0 * (1.0 - angle.cos()) / 2.0).round() as u32
}

fn offset_by_millis(date: DateTime<Utc>, millis: i64) -> DateTime<Utc> {
    date.checked_add_signed(Duration::milliseconds(millis))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Compute the lunar phase information for `date`.
///
/// Total over every representable instant: negative offsets from the anchor
/// wrap into the previous cycle.
pub fn compute_phase(date: DateTime<Utc>) -> MoonPhaseInfo {
    let offset = cycle_offset_millis(date);
    let day = millis_to_days(offset);

    let phase = phase_for_cycle_day(day);

    let until_new = if offset > 0 {
        LUNAR_CYCLE_MILLIS - offset
    } else {
        0
    };
    let until_full = if offset < FULL_MOON_MILLIS {
        FULL_MOON_MILLIS - offset
    } else {
        LUNAR_CYCLE_MILLIS - offset + FULL_MOON_MILLIS
    };

    log::debug!("cycle day {:.4} for {} -> {}", day, date, phase);

    MoonPhaseInfo {
        phase,
        phase_name: phase.display_name().to_string(),
        day_of_cycle: day.round() as u32,
        illumination: illumination_for_cycle_day(day),
        is_new_moon: day < 1.0 || day > 28.5,
        is_full_moon: (14.0..=15.5).contains(&day),
        days_until_new_moon: millis_to_days(until_new).round() as u32,
        days_until_full_moon: millis_to_days(until_full).round() as u32,
        next_new_moon: offset_by_millis(date, until_new),
        next_full_moon: offset_by_millis(date, until_full),
        cycle_progress: (100.0 * day / LUNAR_CYCLE_DAYS).round() as u32,
    }
}

/// Compute the phase for the clock's current instant.
pub fn compute_phase_now(clock: &dyn Clock) -> MoonPhaseInfo {
    compute_phase(clock.now())
}

/// Compute the phase for a Modified Julian Date.
///
/// # Errors
///
/// Returns [`LunarError::InvalidDate`] if `mjd` is not finite or falls outside
/// the range of `DateTime<Utc>`.
pub fn compute_phase_mjd(mjd: ModifiedJulianDate) -> LunarResult<MoonPhaseInfo> {
    mjd.to_datetime()
        .map(compute_phase)
        .ok_or_else(|| LunarError::invalid_date(format!("MJD {}", mjd.value())))
}

/// Day-granular new moon check on the rounded `day_of_cycle`.
///
/// The window (`< 1.5` or `> 28`) is looser than the one behind
/// [`MoonPhaseInfo::is_new_moon`], which uses the unrounded position. Both are
/// kept as-is: calendar views rely on this one, the detail view on the other.
pub fn is_new_moon_on_date(date: DateTime<Utc>) -> bool {
    let day = compute_phase(date).day_of_cycle as f64;
    day < 1.5 || day > 28.0
}

/// Day-granular full moon check: rounded `day_of_cycle` in `[14, 16]`.
///
/// Wider than [`MoonPhaseInfo::is_full_moon`] (`[14, 15.5]` unrounded).
pub fn is_full_moon_on_date(date: DateTime<Utc>) -> bool {
    let day = compute_phase(date).day_of_cycle;
    (14..=16).contains(&day)
}
