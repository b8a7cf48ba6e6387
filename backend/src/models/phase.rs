//! Phase tags and the computed phase value object.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LunarError;

/// One of the eight named positions in the lunar cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    /// All phases in cycle order, starting at the new moon.
    pub const ALL: [MoonPhase; 8] = [
        MoonPhase::New,
        MoonPhase::WaxingCrescent,
        MoonPhase::FirstQuarter,
        MoonPhase::WaxingGibbous,
        MoonPhase::Full,
        MoonPhase::WaningGibbous,
        MoonPhase::LastQuarter,
        MoonPhase::WaningCrescent,
    ];

    /// Machine tag, as used on the wire.
    pub fn tag(&self) -> &'static str {
        match self {
            MoonPhase::New => "new",
            MoonPhase::WaxingCrescent => "waxing_crescent",
            MoonPhase::FirstQuarter => "first_quarter",
            MoonPhase::WaxingGibbous => "waxing_gibbous",
            MoonPhase::Full => "full",
            MoonPhase::WaningGibbous => "waning_gibbous",
            MoonPhase::LastQuarter => "last_quarter",
            MoonPhase::WaningCrescent => "waning_crescent",
        }
    }

    /// Human-readable label.
    pub fn display_name(&self) -> &'static str {
        match self {
            MoonPhase::New => "New Moon",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::Full => "Full Moon",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::LastQuarter => "Last Quarter",
            MoonPhase::WaningCrescent => "Waning Crescent",
        }
    }

    pub fn is_waxing(&self) -> bool {
        matches!(
            self,
            MoonPhase::WaxingCrescent | MoonPhase::FirstQuarter | MoonPhase::WaxingGibbous
        )
    }

    pub fn is_waning(&self) -> bool {
        matches!(
            self,
            MoonPhase::WaningGibbous | MoonPhase::LastQuarter | MoonPhase::WaningCrescent
        )
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for MoonPhase {
    type Err = LunarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        MoonPhase::ALL
            .into_iter()
            .find(|phase| phase.tag() == normalized)
            .ok_or_else(|| LunarError::UnknownPhase(s.to_string()))
    }
}

/// Snapshot of the lunar cycle at one instant.
///
/// Built fresh by [`crate::services::moon_phase::compute_phase`] and never
/// mutated. Integer fields are rounded from the unrounded cycle position; the
/// `next_*` instants are computed from the unrounded day counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonPhaseInfo {
    pub phase: MoonPhase,
    pub phase_name: String,
    /// Rounded day within the cycle, 0..=30.
    pub day_of_cycle: u32,
    /// Approximate lit fraction of the disk, percent.
    pub illumination: u32,
    pub is_new_moon: bool,
    pub is_full_moon: bool,
    pub days_until_new_moon: u32,
    pub days_until_full_moon: u32,
    pub next_new_moon: DateTime<Utc>,
    pub next_full_moon: DateTime<Utc>,
    /// Position within the cycle, percent.
    pub cycle_progress: u32,
}
