//! Service layer for the lunar calculations.
//!
//! Everything here is pure apart from [`clock::SystemClock`]. The HTTP layer
//! and library callers share these functions directly.

pub mod clock;
pub mod lunar_calendar;
pub mod moon_phase;
pub mod phase_theme;

pub use clock::{Clock, FixedClock, SystemClock};
pub use lunar_calendar::{month_calendar, upcoming_events, MAX_UPCOMING_EVENTS};
pub use moon_phase::{
    compute_phase, compute_phase_mjd, compute_phase_now, epoch_anchor, is_full_moon_on_date,
    is_new_moon_on_date, LUNAR_CYCLE_DAYS,
};
pub use phase_theme::{classify_theme, classify_theme_str};
