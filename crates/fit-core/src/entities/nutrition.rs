use schemars::JsonSchema;
use serde::Serialize;

use super::{check_choice, check_range};
use crate::enums::NutritionGoalType;
use crate::errors::InvariantViolation;

/// kcal per gram of protein and carbohydrate.
const KCAL_PER_GRAM_PROTEIN_CARBS: f64 = 4.0;
/// kcal per gram of fat.
const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Daily calorie and macronutrient targets.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct NutritionGoal {
    goal_type: NutritionGoalType,
    calories: f64,
    /// Grams per day.
    protein: f64,
    /// Grams per day.
    fat: f64,
    /// Grams per day.
    carbs: f64,
}

impl NutritionGoal {
    pub const CALORIES_RANGE: (f64, f64) = (500.0, 5000.0);
    pub const PROTEIN_RANGE: (f64, f64) = (0.0, 500.0);
    pub const FAT_RANGE: (f64, f64) = (0.0, 200.0);
    pub const CARBS_RANGE: (f64, f64) = (0.0, 1000.0);

    /// # Errors
    ///
    /// Returns the first violated invariant: goal type, calories, then macros.
    pub fn new(
        goal_type: &str,
        calories: f64,
        protein: f64,
        fat: f64,
        carbs: f64,
    ) -> Result<Self, InvariantViolation> {
        let goal_type = check_choice(
            "goal_type",
            goal_type,
            NutritionGoalType::from_literal,
            NutritionGoalType::LITERALS,
        )?;
        check_range("calories", calories, Self::CALORIES_RANGE.0, Self::CALORIES_RANGE.1)?;
        check_range("protein", protein, Self::PROTEIN_RANGE.0, Self::PROTEIN_RANGE.1)?;
        check_range("fat", fat, Self::FAT_RANGE.0, Self::FAT_RANGE.1)?;
        check_range("carbs", carbs, Self::CARBS_RANGE.0, Self::CARBS_RANGE.1)?;

        Ok(Self {
            goal_type,
            calories,
            protein,
            fat,
            carbs,
        })
    }

    #[must_use]
    pub const fn goal_type(&self) -> NutritionGoalType {
        self.goal_type
    }

    #[must_use]
    pub const fn calories(&self) -> f64 {
        self.calories
    }

    #[must_use]
    pub const fn protein(&self) -> f64 {
        self.protein
    }

    #[must_use]
    pub const fn fat(&self) -> f64 {
        self.fat
    }

    #[must_use]
    pub const fn carbs(&self) -> f64 {
        self.carbs
    }

    #[must_use]
    pub fn protein_calories(&self) -> f64 {
        self.protein * KCAL_PER_GRAM_PROTEIN_CARBS
    }

    #[must_use]
    pub fn fat_calories(&self) -> f64 {
        self.fat * KCAL_PER_GRAM_FAT
    }

    #[must_use]
    pub fn carbs_calories(&self) -> f64 {
        self.carbs * KCAL_PER_GRAM_PROTEIN_CARBS
    }

    /// Calories implied by the macro targets. Independent of `calories`.
    #[must_use]
    pub fn macro_calories(&self) -> f64 {
        self.protein_calories() + self.fat_calories() + self.carbs_calories()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macro_calories() {
        let goal = NutritionGoal::new("похудение", 1800.0, 120.0, 50.0, 180.0).unwrap();
        assert!((goal.protein_calories() - 480.0).abs() < f64::EPSILON);
        assert!((goal.fat_calories() - 450.0).abs() < f64::EPSILON);
        assert!((goal.carbs_calories() - 720.0).abs() < f64::EPSILON);
        assert!((goal.macro_calories() - 1650.0).abs() < f64::EPSILON);
        assert_eq!(goal.goal_type(), NutritionGoalType::LoseFat);
    }

    #[test]
    fn calorie_bounds() {
        assert!(NutritionGoal::new("поддержание", 499.0, 100.0, 50.0, 200.0).is_err());
        assert!(NutritionGoal::new("поддержание", 5001.0, 100.0, 50.0, 200.0).is_err());
    }

    #[test]
    fn macro_bounds() {
        assert!(NutritionGoal::new("набор массы", 3000.0, 501.0, 50.0, 200.0).is_err());
        assert!(NutritionGoal::new("набор массы", 3000.0, 150.0, 201.0, 200.0).is_err());
        assert!(NutritionGoal::new("набор массы", 3000.0, 150.0, 80.0, 1001.0).is_err());
    }

    #[test]
    fn unknown_goal_type() {
        let err = NutritionGoal::new("рельеф", 2000.0, 100.0, 50.0, 200.0).unwrap_err();
        assert!(matches!(
            err,
            InvariantViolation::InvalidChoice { field: "goal_type", .. }
        ));
    }
}
