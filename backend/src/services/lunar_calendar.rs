//! Lunar calendar views built on the phase calculator.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};

use crate::error::{LunarError, LunarResult};
use crate::models::{CalendarDay, LunarEvent, LunarEventKind};
use crate::services::moon_phase::{
    compute_phase, is_full_moon_on_date, is_new_moon_on_date, LUNAR_CYCLE_MILLIS,
};

/// Upper limit on events returned by [`upcoming_events`].
pub const MAX_UPCOMING_EVENTS: usize = 24;

/// Hour of day (UTC) at which calendar days are evaluated.
const CALENDAR_HOUR: u32 = 12;

/// One [`CalendarDay`] per day of `month` in `year`.
///
/// # Errors
///
/// Returns [`LunarError::InvalidDate`] if `month` is not 1..=12 or `year` is
/// outside chrono's supported range.
pub fn month_calendar(year: i32, month: u32) -> LunarResult<Vec<CalendarDay>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| LunarError::invalid_date(format!("{}-{:02}", year, month)))?;

    let days: Vec<CalendarDay> = first
        .iter_days()
        .take_while(|d| d.month() == month)
        .filter_map(|date| {
            let noon = date.and_hms_opt(CALENDAR_HOUR, 0, 0)?;
            let instant = Utc.from_utc_datetime(&noon);
            let info = compute_phase(instant);
            Some(CalendarDay {
                date,
                phase: info.phase,
                day_of_cycle: info.day_of_cycle,
                illumination: info.illumination,
                is_new_moon_day: is_new_moon_on_date(instant),
                is_full_moon_day: is_full_moon_on_date(instant),
            })
        })
        .collect();

    log::debug!("built {}-{:02} calendar with {} days", year, month, days.len());
    Ok(days)
}

/// The next `count` new and full moons at or after `from`, in order.
///
/// `count` is capped at [`MAX_UPCOMING_EVENTS`]. Stops early if an event
/// would fall past the last representable instant.
pub fn upcoming_events(from: DateTime<Utc>, count: usize) -> Vec<LunarEvent> {
    let count = count.min(MAX_UPCOMING_EVENTS);
    let info = compute_phase(from);
    let cycle = Duration::milliseconds(LUNAR_CYCLE_MILLIS);
    // `compute_phase` saturates at MAX_UTC; that instant is not a real event.
    let representable = |at: DateTime<Utc>| (at < DateTime::<Utc>::MAX_UTC).then_some(at);

    let mut next_new = representable(info.next_new_moon);
    let mut next_full = representable(info.next_full_moon);
    let mut events = Vec::with_capacity(count);

    while events.len() < count {
        let (kind, at) = match (next_new, next_full) {
            (Some(new), Some(full)) if new <= full => (LunarEventKind::NewMoon, new),
            (_, Some(full)) => (LunarEventKind::FullMoon, full),
            (Some(new), None) => (LunarEventKind::NewMoon, new),
            (None, None) => break,
        };
        let advanced = at.checked_add_signed(cycle).and_then(representable);
        match kind {
            LunarEventKind::NewMoon => next_new = advanced,
            LunarEventKind::FullMoon => next_full = advanced,
        }
        events.push(LunarEvent { kind, at });
    }

    events
}
