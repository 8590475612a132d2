//! The closed sum over all record kinds.

use schemars::JsonSchema;
use serde::Serialize;

use crate::entities::{Exercise, NutritionGoal, Profile, Workout};
use crate::enums::{BmiCategory, RecordKind};

/// Capability shared by every record: it knows its kind and can describe itself.
pub trait FitnessEntity {
    fn kind(&self) -> RecordKind;

    /// One-line human description.
    fn describe(&self) -> String;
}

impl FitnessEntity for Profile {
    fn kind(&self) -> RecordKind {
        RecordKind::UserProfile
    }

    fn describe(&self) -> String {
        format!(
            "{}, {} y, {} cm, {} kg, goal {}, activity {}",
            self.gender(),
            self.age(),
            self.height(),
            self.weight(),
            self.goal(),
            self.activity()
        )
    }
}

impl FitnessEntity for Exercise {
    fn kind(&self) -> RecordKind {
        RecordKind::Exercise
    }

    fn describe(&self) -> String {
        format!(
            "{}: {}x{} at {} kg",
            self.name(),
            self.sets(),
            self.reps_per_set(),
            self.weight()
        )
    }
}

impl FitnessEntity for Workout {
    fn kind(&self) -> RecordKind {
        RecordKind::Workout
    }

    fn describe(&self) -> String {
        format!(
            "workout on {} lasting {}, {} exercise(s)",
            self.date(),
            self.duration().format("%H:%M"),
            self.exercise_count()
        )
    }
}

impl FitnessEntity for NutritionGoal {
    fn kind(&self) -> RecordKind {
        RecordKind::NutritionGoal
    }

    fn describe(&self) -> String {
        format!(
            "{}: {} kcal, protein {} g, fat {} g, carbs {} g",
            self.goal_type(),
            self.calories(),
            self.protein(),
            self.fat(),
            self.carbs()
        )
    }
}

/// A fully validated record of any kind.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(tag = "kind")]
pub enum DomainRecord {
    UserProfile(Profile),
    Exercise(Exercise),
    Workout(Workout),
    NutritionGoal(NutritionGoal),
}

impl DomainRecord {
    /// Values computed from the record's fields.
    #[must_use]
    pub fn metrics(&self) -> DerivedMetrics {
        match self {
            Self::UserProfile(p) => DerivedMetrics::UserProfile {
                bmi: p.bmi(),
                bmi_category: p.bmi_category(),
            },
            Self::Exercise(e) => DerivedMetrics::Exercise { volume: e.volume() },
            Self::Workout(w) => DerivedMetrics::Workout {
                total_volume: w.total_volume(),
                exercise_count: w.exercise_count(),
            },
            Self::NutritionGoal(n) => DerivedMetrics::NutritionGoal {
                protein_calories: n.protein_calories(),
                fat_calories: n.fat_calories(),
                carbs_calories: n.carbs_calories(),
                macro_calories: n.macro_calories(),
            },
        }
    }

    fn entity(&self) -> &dyn FitnessEntity {
        match self {
            Self::UserProfile(p) => p,
            Self::Exercise(e) => e,
            Self::Workout(w) => w,
            Self::NutritionGoal(n) => n,
        }
    }
}

impl FitnessEntity for DomainRecord {
    fn kind(&self) -> RecordKind {
        self.entity().kind()
    }

    fn describe(&self) -> String {
        self.entity().describe()
    }
}

/// Derived values per record kind.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(tag = "kind")]
pub enum DerivedMetrics {
    UserProfile {
        bmi: f64,
        bmi_category: BmiCategory,
    },
    Exercise {
        volume: f64,
    },
    Workout {
        total_volume: f64,
        exercise_count: usize,
    },
    NutritionGoal {
        protein_calories: f64,
        fat_calories: f64,
        carbs_calories: f64,
        macro_calories: f64,
    },
}
