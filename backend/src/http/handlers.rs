//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for the lunar computations.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};

use super::dto::{
    parse_request_date, EventsQuery, EventsResponse, HealthResponse, MonthCalendarResponse,
    MoonPhaseResponse, PhaseQuery,
};
use super::error::AppError;
use super::state::AppState;
use crate::error::LunarError;
use crate::models::PhaseTheme;
use crate::services::{lunar_calendar, moon_phase, phase_theme};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Resolve an optional request date against the state's clock.
fn resolve_date(state: &AppState, raw: Option<&str>) -> Result<DateTime<Utc>, AppError> {
    match raw {
        None => Ok(state.clock.now()),
        Some(raw) => parse_request_date(raw)
            .ok_or_else(|| AppError::from(LunarError::invalid_date(raw))),
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
    }))
}

// =============================================================================
// Moon Phase
// =============================================================================

/// GET /v1/moon-phase?date=...
///
/// Phase information and practice theme for a date (defaults to now).
pub async fn get_moon_phase(
    State(state): State<AppState>,
    Query(query): Query<PhaseQuery>,
) -> HandlerResult<MoonPhaseResponse> {
    let date = resolve_date(&state, query.date.as_deref())?;
    let info = moon_phase::compute_phase(date);
    let theme = phase_theme::classify_theme(info.phase);

    tracing::debug!(%date, phase = %info.phase, "computed moon phase");

    Ok(Json(MoonPhaseResponse {
        date,
        theme,
        is_new_moon_day: moon_phase::is_new_moon_on_date(date),
        is_full_moon_day: moon_phase::is_full_moon_on_date(date),
        info,
    }))
}

/// GET /v1/moon-phase/themes/{phase}
///
/// Theme for a phase tag. Unknown tags get the balance theme.
pub async fn get_phase_theme(Path(phase): Path<String>) -> HandlerResult<PhaseTheme> {
    Ok(Json(phase_theme::classify_theme_str(&phase)))
}

// =============================================================================
// Calendar
// =============================================================================

/// GET /v1/calendar/{year}/{month}
pub async fn get_month_calendar(
    Path((year, month)): Path<(i32, u32)>,
) -> HandlerResult<MonthCalendarResponse> {
    let days = lunar_calendar::month_calendar(year, month)?;
    Ok(Json(MonthCalendarResponse { year, month, days }))
}

/// Parse the `count` query parameter. Zero and non-integers are rejected.
fn parse_event_count(raw: Option<&str>) -> Result<Option<usize>, AppError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    match raw.trim().parse::<usize>() {
        Ok(count) if count > 0 => Ok(Some(count)),
        _ => Err(AppError::BadRequest(format!(
            "count must be a positive integer, got '{}'",
            raw
        ))),
    }
}

/// GET /v1/events?from=...&count=...
///
/// Upcoming new and full moons. `count` is clamped to the configured limit.
pub async fn get_upcoming_events(
    State(state): State<AppState>,
    Query(query): Query<EventsQuery>,
) -> HandlerResult<EventsResponse> {
    let from = resolve_date(&state, query.from.as_deref())?;
    let requested = parse_event_count(query.count.as_deref())?;
    let count = state.config.calendar.event_count(requested);
    let events = lunar_calendar::upcoming_events(from, count);
    Ok(Json(EventsResponse { from, events }))
}

/// Fallback for unknown routes.
pub async fn not_found() -> AppError {
    AppError::NotFound("No such endpoint".to_string())
}
