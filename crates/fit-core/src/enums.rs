//! Record kinds and the enumerations carried by records.
//!
//! All enums use `snake_case` serialization. Enumerations parsed from user
//! text provide `from_literal()`, which accepts the Russian literals users
//! type and the English canonical names, case-insensitively.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

fn normalize_literal(raw: &str) -> String {
    raw.trim().to_lowercase().replace('-', "_")
}

// ---------------------------------------------------------------------------
// RecordKind
// ---------------------------------------------------------------------------

/// The closed set of record kinds a line can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum RecordKind {
    UserProfile,
    Exercise,
    Workout,
    NutritionGoal,
}

impl RecordKind {
    pub const ALL: [Self; 4] = [
        Self::UserProfile,
        Self::Exercise,
        Self::Workout,
        Self::NutritionGoal,
    ];

    /// Resolve the first token of a line. Case-sensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    /// The kind name as it appears at the start of a line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserProfile => "UserProfile",
            Self::Exercise => "Exercise",
            Self::Workout => "Workout",
            Self::NutritionGoal => "NutritionGoal",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Gender
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const LITERALS: &'static [&'static str] = &["мужской", "женский", "male", "female"];

    #[must_use]
    pub fn from_literal(raw: &str) -> Option<Self> {
        match normalize_literal(raw).as_str() {
            "мужской" | "male" => Some(Self::Male),
            "женский" | "female" => Some(Self::Female),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FitnessGoal
// ---------------------------------------------------------------------------

/// Long-term goal stated on a user profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    LoseFat,
    GainMass,
    Maintain,
    Lean,
}

impl FitnessGoal {
    pub const LITERALS: &'static [&'static str] = &[
        "похудение",
        "набор массы",
        "поддержание формы",
        "рельеф",
        "lose_fat",
        "gain_mass",
        "maintain",
        "lean",
    ];

    #[must_use]
    pub fn from_literal(raw: &str) -> Option<Self> {
        match normalize_literal(raw).as_str() {
            "похудение" | "lose_fat" => Some(Self::LoseFat),
            "набор массы" | "gain_mass" => Some(Self::GainMass),
            "поддержание формы" | "maintain" => Some(Self::Maintain),
            "рельеф" | "lean" => Some(Self::Lean),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LoseFat => "lose_fat",
            Self::GainMass => "gain_mass",
            Self::Maintain => "maintain",
            Self::Lean => "lean",
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ActivityLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl ActivityLevel {
    pub const LITERALS: &'static [&'static str] = &[
        "низкая",
        "средняя",
        "высокая",
        "очень высокая",
        "low",
        "medium",
        "high",
        "very_high",
    ];

    #[must_use]
    pub fn from_literal(raw: &str) -> Option<Self> {
        match normalize_literal(raw).as_str() {
            "низкая" | "low" => Some(Self::Low),
            "средняя" | "medium" => Some(Self::Medium),
            "высокая" | "high" => Some(Self::High),
            "очень высокая" | "very_high" => Some(Self::VeryHigh),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::VeryHigh => "very_high",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// NutritionGoalType
// ---------------------------------------------------------------------------

/// Direction of a nutrition plan. Narrower than [`FitnessGoal`]: no `lean`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NutritionGoalType {
    LoseFat,
    Maintain,
    GainMass,
}

impl NutritionGoalType {
    pub const LITERALS: &'static [&'static str] = &[
        "похудение",
        "поддержание",
        "набор массы",
        "lose_fat",
        "maintain",
        "gain_mass",
    ];

    #[must_use]
    pub fn from_literal(raw: &str) -> Option<Self> {
        match normalize_literal(raw).as_str() {
            "похудение" | "lose_fat" => Some(Self::LoseFat),
            "поддержание" | "maintain" => Some(Self::Maintain),
            "набор массы" | "gain_mass" => Some(Self::GainMass),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LoseFat => "lose_fat",
            Self::Maintain => "maintain",
            Self::GainMass => "gain_mass",
        }
    }
}

impl fmt::Display for NutritionGoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// BmiCategory
// ---------------------------------------------------------------------------

/// Four-band body-mass-index classification.
///
/// ```text
/// < 18.5        underweight
/// 18.5 .. 25    normal
/// 25   .. 30    overweight
/// >= 30         obese
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::Obese => "obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
