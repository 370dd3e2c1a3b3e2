//! Core domain type definitions.
//!
//! Defines [`EngineKind`] (the five fixed life-domains), [`EngineProgress`]
//! (the mutable per-engine record), [`UserProfile`] with its closed
//! preference enums, and [`DailyLog`] (the evening check-in record).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The five fixed daily engines. Closed at compile time — never created or
/// destroyed at runtime.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum EngineKind {
    /// Training, movement quality, recovery.
    Body,
    /// Nutrition, hydration, food quality.
    Diet,
    /// Mental clarity, focus, stress management.
    Mind,
    /// Routine adherence and behavioral hardness.
    Discipline,
    /// Honest logging and streak upkeep.
    Accountability,
}

impl EngineKind {
    /// All five engines, in display order.
    pub const ALL: [EngineKind; 5] = [
        Self::Body,
        Self::Diet,
        Self::Mind,
        Self::Discipline,
        Self::Accountability,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Body => "Body",
            Self::Diet => "Diet",
            Self::Mind => "Mind",
            Self::Discipline => "Discipline",
            Self::Accountability => "Accountability",
        }
    }
}

impl std::fmt::Display for EngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EngineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Body" => Ok(Self::Body),
            "Diet" => Ok(Self::Diet),
            "Mind" => Ok(Self::Mind),
            "Discipline" => Ok(Self::Discipline),
            "Accountability" => Ok(Self::Accountability),
            _ => Err(format!("unknown engine: {s}")),
        }
    }
}

/// Mutable per-engine state, persisted as part of the engine collection.
///
/// Display metadata (`display_name`, `description`, `color`, `icon`) is
/// re-attached from the static definitions on every load, so older stored
/// records that predate those fields deserialize cleanly via the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineProgress {
    #[serde(rename = "type")]
    pub kind: EngineKind,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    /// Informational efficiency metric in 0–100.
    pub score: u8,
    /// Consecutive-completion counter. Un-toggling decrements without a
    /// floor, so it can transiently go negative.
    pub streak: i32,
    pub daily_task: String,
    pub is_complete: bool,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub icon: String,
}

/// Daily completion readout derived from the progress collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readiness {
    pub completed: usize,
    pub total: usize,
}

impl Readiness {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            100.0 * self.completed as f64 / self.total as f64
        }
    }
}

/// Dietary preference, one of four fixed categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum DietPreference {
    Veg,
    NonVeg,
    Vegan,
    Eggetarian,
}

impl DietPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Veg => "Veg",
            Self::NonVeg => "Non-Veg",
            Self::Vegan => "Vegan",
            Self::Eggetarian => "Eggetarian",
        }
    }
}

impl std::fmt::Display for DietPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primary training goal, one of four fixed categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum PrimaryGoal {
    MuscleGain,
    FatLoss,
    MentalClarity,
    Endurance,
}

impl PrimaryGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MuscleGain => "Muscle Gain",
            Self::FatLoss => "Fat Loss",
            Self::MentalClarity => "Mental Clarity",
            Self::Endurance => "Endurance",
        }
    }
}

impl std::fmt::Display for PrimaryGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three independent notification preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfig {
    pub daily_check_in: bool,
    pub morning_brief: bool,
    pub workout_reminders: bool,
}

impl Default for NotificationConfig {
    /// Defaults applied when onboarding completes.
    fn default() -> Self {
        Self {
            daily_check_in: false,
            morning_brief: true,
            workout_reminders: true,
        }
    }
}

/// The single per-device user record. Created at onboarding, mutated by
/// settings changes, never deleted except by a full reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u8,
    #[serde(default)]
    pub weight_kg: Option<f32>,
    #[serde(default)]
    pub height_cm: Option<f32>,
    pub diet_preference: DietPreference,
    pub primary_goal: PrimaryGoal,
    /// Wake-up time as `HH:MM`.
    pub wake_up_time: String,
    pub has_consented: bool,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

/// One evening check-in, keyed by calendar date in the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyLog {
    pub date: chrono::NaiveDate,
    /// Answer per engine to that engine's check-in question.
    pub engines: BTreeMap<EngineKind, bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_kind_roundtrips_through_str() {
        for kind in EngineKind::ALL {
            let parsed: EngineKind = kind.as_str().parse().unwrap();
            assert_eq!(parsed, kind);
        }
        assert!("Chaos".parse::<EngineKind>().is_err());
    }

    #[test]
    fn readiness_percentage() {
        let r = Readiness {
            completed: 2,
            total: 5,
        };
        assert_eq!(r.percent(), 40.0);
        let none = Readiness {
            completed: 0,
            total: 5,
        };
        assert_eq!(none.percent(), 0.0);
        let all = Readiness {
            completed: 5,
            total: 5,
        };
        assert_eq!(all.percent(), 100.0);
    }

    #[test]
    fn progress_deserializes_without_display_metadata() {
        // Stored shape from an older install: no display fields at all.
        let raw = r#"{"type":"Body","score":72,"streak":4,"daily_task":"Run","is_complete":true}"#;
        let p: EngineProgress = serde_json::from_str(raw).unwrap();
        assert_eq!(p.kind, EngineKind::Body);
        assert_eq!(p.score, 72);
        assert_eq!(p.streak, 4);
        assert!(p.is_complete);
        assert!(p.display_name.is_empty());
    }
}
