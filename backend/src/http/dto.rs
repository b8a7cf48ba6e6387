//! Data Transfer Objects for the HTTP API.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{CalendarDay, LunarEvent, MoonPhaseInfo, PhaseTheme};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Query parameters for the moon phase endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhaseQuery {
    /// RFC 3339 instant or `YYYY-MM-DD` (midnight UTC). Defaults to now.
    #[serde(default)]
    pub date: Option<String>,
}

/// Moon phase with its practice theme and day-granular markers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonPhaseResponse {
    pub date: DateTime<Utc>,
    #[serde(flatten)]
    pub info: MoonPhaseInfo,
    pub theme: PhaseTheme,
    pub is_new_moon_day: bool,
    pub is_full_moon_day: bool,
}

/// One month of calendar days.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthCalendarResponse {
    pub year: i32,
    pub month: u32,
    pub days: Vec<CalendarDay>,
}

/// Query parameters for the events endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventsQuery {
    /// Start of the search, same formats as [`PhaseQuery::date`].
    #[serde(default)]
    pub from: Option<String>,
    /// Number of events; a positive integer. Kept raw so a malformed value
    /// gets the JSON error body.
    #[serde(default)]
    pub count: Option<String>,
}

/// Upcoming new and full moons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsResponse {
    pub from: DateTime<Utc>,
    pub events: Vec<LunarEvent>,
}

/// Parse a request date: RFC 3339, or a bare calendar date at midnight UTC.
pub fn parse_request_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
