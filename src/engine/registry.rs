//! Static engine definitions — immutable reference data, one row per
//! [`EngineKind`].

use crate::engine::types::EngineKind;

/// Display metadata and default daily task for one engine.
#[derive(Debug, Clone, Copy)]
pub struct EngineDefinition {
    pub kind: EngineKind,
    pub display_name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub default_task: &'static str,
}

pub const DEFINITIONS: [EngineDefinition; 5] = [
    EngineDefinition {
        kind: EngineKind::Body,
        display_name: "Physical Performance",
        description: "Training standards, movement quality & recovery protocols.",
        color: "blue",
        icon: "activity",
        default_task: "30 min Zone 2 Cardio",
    },
    EngineDefinition {
        kind: EngineKind::Diet,
        display_name: "Metabolic Fuel",
        description: "Nutritional integrity, hydration & food quality control.",
        color: "green",
        icon: "apple",
        default_task: "No sugar, hit protein goal",
    },
    EngineDefinition {
        kind: EngineKind::Mind,
        display_name: "Cognitive Engine",
        description: "Mental clarity, focus training & stress management.",
        color: "purple",
        icon: "brain",
        default_task: "10 min meditation",
    },
    EngineDefinition {
        kind: EngineKind::Discipline,
        display_name: "Executive Control",
        description: "Adherence to routine, wake-up times & behavioral hardness.",
        color: "yellow",
        icon: "zap",
        default_task: "Cold shower / Wake up on time",
    },
    EngineDefinition {
        kind: EngineKind::Accountability,
        display_name: "System Integrity",
        description: "Radical honesty in logging & maintaining streaks.",
        color: "red",
        icon: "users",
        default_task: "Log all meals",
    },
];

/// Look up the definition for an engine. The enumeration is closed, so every
/// kind has exactly one row.
pub fn definition(kind: EngineKind) -> &'static EngineDefinition {
    DEFINITIONS
        .iter()
        .find(|d| d.kind == kind)
        .expect("every engine kind has a definition")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_definition_per_kind() {
        assert_eq!(DEFINITIONS.len(), EngineKind::ALL.len());
        for kind in EngineKind::ALL {
            assert_eq!(definition(kind).kind, kind);
        }
    }

    #[test]
    fn definitions_are_fully_populated() {
        for def in &DEFINITIONS {
            assert!(!def.display_name.is_empty());
            assert!(!def.description.is_empty());
            assert!(!def.default_task.is_empty());
        }
    }
}
