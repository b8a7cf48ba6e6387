use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::phase::MoonPhase;

/// One day of a lunar month view, evaluated at 12:00 UTC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub phase: MoonPhase,
    pub day_of_cycle: u32,
    pub illumination: u32,
    pub is_new_moon_day: bool,
    pub is_full_moon_day: bool,
}

/// Kind of a lunar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LunarEventKind {
    NewMoon,
    FullMoon,
}

/// A new or full moon at an absolute instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LunarEvent {
    pub kind: LunarEventKind,
    pub at: DateTime<Utc>,
}
