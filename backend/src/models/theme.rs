use serde::{Deserialize, Serialize};

/// Practice guidance attached to a part of the lunar cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseTheme {
    pub theme: &'static str,
    pub energy_description: &'static str,
    pub suggested_activities: &'static [&'static str],
}

/// Which theme bucket a phase belongs to.
///
/// Waxing and waning phases collapse into one bucket each; new and full
/// moons are distinct. `Balance` is the fallback for unrecognized tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeBucket {
    NewBeginnings,
    Growth,
    Culmination,
    Release,
    Balance,
}
