use schemars::JsonSchema;
use serde::Serialize;

use super::{check_choice, check_range};
use crate::enums::{ActivityLevel, BmiCategory, FitnessGoal, Gender};
use crate::errors::InvariantViolation;

/// A user's body measurements and training intent.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Profile {
    gender: Gender,
    age: i64,
    /// Height in centimetres.
    height: f64,
    /// Weight in kilograms.
    weight: f64,
    goal: FitnessGoal,
    activity: ActivityLevel,
}

impl Profile {
    pub const AGE_RANGE: (i64, i64) = (1, 120);
    pub const HEIGHT_RANGE: (f64, f64) = (50.0, 250.0);
    pub const WEIGHT_RANGE: (f64, f64) = (20.0, 300.0);

    /// Build a profile from the literals of a line.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant, checked in field order.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(
        gender: &str,
        age: i64,
        height: f64,
        weight: f64,
        goal: &str,
        activity: &str,
    ) -> Result<Self, InvariantViolation> {
        let gender = check_choice("gender", gender, Gender::from_literal, Gender::LITERALS)?;
        check_range(
            "age",
            age as f64,
            Self::AGE_RANGE.0 as f64,
            Self::AGE_RANGE.1 as f64,
        )?;
        check_range("height", height, Self::HEIGHT_RANGE.0, Self::HEIGHT_RANGE.1)?;
        check_range("weight", weight, Self::WEIGHT_RANGE.0, Self::WEIGHT_RANGE.1)?;
        let goal = check_choice("goal", goal, FitnessGoal::from_literal, FitnessGoal::LITERALS)?;
        let activity = check_choice(
            "activity_type",
            activity,
            ActivityLevel::from_literal,
            ActivityLevel::LITERALS,
        )?;

        Ok(Self {
            gender,
            age,
            height,
            weight,
            goal,
            activity,
        })
    }

    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    #[must_use]
    pub const fn age(&self) -> i64 {
        self.age
    }

    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    #[must_use]
    pub const fn goal(&self) -> FitnessGoal {
        self.goal
    }

    #[must_use]
    pub const fn activity(&self) -> ActivityLevel {
        self.activity
    }

    /// Body-mass index: weight / (height in metres)².
    #[must_use]
    pub fn bmi(&self) -> f64 {
        let height_m = self.height / 100.0;
        self.weight / (height_m * height_m)
    }

    #[must_use]
    pub fn bmi_category(&self) -> BmiCategory {
        BmiCategory::from_bmi(self.bmi())
    }
}
