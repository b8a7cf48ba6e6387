//! Phase to practice-theme lookup.

use crate::models::{MoonPhase, PhaseTheme, ThemeBucket};

const NEW_BEGINNINGS: PhaseTheme = PhaseTheme {
    theme: "New Beginnings",
    energy_description: "Quiet, inward energy. A time to rest, reflect and plant intentions for the cycle ahead.",
    suggested_activities: &[
        "Set intentions for the lunar cycle",
        "Restorative yoga",
        "Journaling",
        "Silent meditation",
    ],
};

const GROWTH: PhaseTheme = PhaseTheme {
    theme: "Growth",
    energy_description: "Building, outward energy. Momentum grows as the moon fills; act on your intentions.",
    suggested_activities: &[
        "Vinyasa flow",
        "Goal-focused meditation",
        "Breathwork for energy",
        "Start a new practice habit",
    ],
};

const CULMINATION: PhaseTheme = PhaseTheme {
    theme: "Culmination",
    energy_description: "Peak energy and heightened emotion. Celebrate progress and notice what has come to light.",
    suggested_activities: &[
        "Gratitude practice",
        "Moon salutations",
        "Group meditation",
        "Reflect on the cycle so far",
    ],
};

const RELEASE: PhaseTheme = PhaseTheme {
    theme: "Release",
    energy_description: "Softening, letting-go energy. Clear out what no longer serves and slow the pace.",
    suggested_activities: &[
        "Yin yoga",
        "Forgiveness meditation",
        "Decluttering",
        "Body scan before sleep",
    ],
};

const BALANCE: PhaseTheme = PhaseTheme {
    theme: "Balance",
    energy_description: "Steady, centred energy. Keep a gentle, consistent practice.",
    suggested_activities: &["Mindful breathing", "Gentle stretching", "Walking meditation"],
};

/// Theme bucket for each phase.
pub fn theme_bucket(phase: MoonPhase) -> ThemeBucket {
    match phase {
        MoonPhase::New => ThemeBucket::NewBeginnings,
        MoonPhase::WaxingCrescent | MoonPhase::FirstQuarter | MoonPhase::WaxingGibbous => {
            ThemeBucket::Growth
        }
        MoonPhase::Full => ThemeBucket::Culmination,
        MoonPhase::WaningGibbous | MoonPhase::LastQuarter | MoonPhase::WaningCrescent => {
            ThemeBucket::Release
        }
    }
}

/// Theme record for a bucket.
pub fn theme_for_bucket(bucket: ThemeBucket) -> PhaseTheme {
    match bucket {
        ThemeBucket::NewBeginnings => NEW_BEGINNINGS,
        ThemeBucket::Growth => GROWTH,
        ThemeBucket::Culmination => CULMINATION,
        ThemeBucket::Release => RELEASE,
        ThemeBucket::Balance => BALANCE,
    }
}

/// Theme, energy description and suggested activities for a phase.
pub fn classify_theme(phase: MoonPhase) -> PhaseTheme {
    theme_for_bucket(theme_bucket(phase))
}

/// Like [`classify_theme`], from a raw tag. Unrecognized tags get the
/// "Balance" theme.
pub fn classify_theme_str(tag: &str) -> PhaseTheme {
    match tag.parse::<MoonPhase>() {
        Ok(phase) => classify_theme(phase),
        Err(e) => {
            log::warn!("{}; using balance theme", e);
            BALANCE
        }
    }
}
