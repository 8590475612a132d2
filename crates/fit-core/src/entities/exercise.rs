use schemars::JsonSchema;
use serde::Serialize;

use super::check_range;
use crate::errors::InvariantViolation;

/// One strength exercise: sets × reps at a working weight.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Exercise {
    name: String,
    sets: i64,
    reps_per_set: i64,
    /// Working weight in kilograms. Zero for bodyweight movements.
    weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

impl Exercise {
    pub const SETS_RANGE: (i64, i64) = (1, 20);
    pub const REPS_RANGE: (i64, i64) = (1, 100);
    pub const WEIGHT_RANGE: (f64, f64) = (0.0, 1000.0);

    /// # Errors
    ///
    /// Returns the first violated invariant among sets, reps and weight.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(
        name: impl Into<String>,
        sets: i64,
        reps_per_set: i64,
        weight: f64,
        notes: Option<String>,
    ) -> Result<Self, InvariantViolation> {
        check_range(
            "sets",
            sets as f64,
            Self::SETS_RANGE.0 as f64,
            Self::SETS_RANGE.1 as f64,
        )?;
        check_range(
            "reps_per_set",
            reps_per_set as f64,
            Self::REPS_RANGE.0 as f64,
            Self::REPS_RANGE.1 as f64,
        )?;
        check_range("weight", weight, Self::WEIGHT_RANGE.0, Self::WEIGHT_RANGE.1)?;

        Ok(Self {
            name: name.into(),
            sets,
            reps_per_set,
            weight,
            notes,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn sets(&self) -> i64 {
        self.sets
    }

    #[must_use]
    pub const fn reps_per_set(&self) -> i64 {
        self.reps_per_set
    }

    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Training volume: sets × reps × weight.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn volume(&self) -> f64 {
        (self.sets * self.reps_per_set) as f64 * self.weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_is_sets_times_reps_times_weight() {
        let squat = Exercise::new("Приседания", 4, 10, 60.0, None).unwrap();
        assert!((squat.volume() - 2400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn bodyweight_exercise_has_zero_volume() {
        let pullup = Exercise::new("Подтягивания", 3, 12, 0.0, None).unwrap();
        assert!(pullup.volume().abs() < f64::EPSILON);
    }

    #[test]
    fn sets_reps_weight_bounds() {
        assert!(Exercise::new("x", 0, 10, 60.0, None).is_err());
        assert!(Exercise::new("x", 21, 10, 60.0, None).is_err());
        assert!(Exercise::new("x", 3, 0, 60.0, None).is_err());
        assert!(Exercise::new("x", 3, 101, 60.0, None).is_err());
        assert!(Exercise::new("x", 3, 10, -1.0, None).is_err());
        assert!(Exercise::new("x", 3, 10, 1000.5, None).is_err());
        assert!(Exercise::new("x", 20, 100, 1000.0, None).is_ok());
    }

    #[test]
    fn notes_are_optional() {
        let bench = Exercise::new("Жим", 3, 8, 67.5, Some("пауза на груди".into())).unwrap();
        assert_eq!(bench.notes(), Some("пауза на груди"));
        assert_eq!(bench.name(), "Жим");
    }
}
