use chrono::{NaiveDate, NaiveTime};
use schemars::JsonSchema;
use serde::Serialize;

use super::Exercise;
use crate::errors::InvariantViolation;

/// A training session on one day. Owns its exercises.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Workout {
    date: NaiveDate,
    /// Length of the session, written as a time of day (`01:30`).
    duration: NaiveTime,
    exercises: Vec<Exercise>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

impl Workout {
    /// Build a workout with no exercises.
    ///
    /// `today` is the evaluation date for the "not in the future" rule.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantViolation::FutureDate`] if `date` is after `today`.
    pub fn new(
        date: NaiveDate,
        duration: NaiveTime,
        notes: Option<String>,
        today: NaiveDate,
    ) -> Result<Self, InvariantViolation> {
        if date > today {
            return Err(InvariantViolation::FutureDate { date, today });
        }

        Ok(Self {
            date,
            duration,
            exercises: Vec::new(),
            notes,
        })
    }

    /// Append an exercise. The only way a workout changes after construction.
    pub fn add_exercise(&mut self, exercise: Exercise) {
        self.exercises.push(exercise);
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub const fn duration(&self) -> NaiveTime {
        self.duration
    }

    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    #[must_use]
    pub fn exercise_count(&self) -> usize {
        self.exercises.len()
    }

    /// Sum of the volumes of all exercises.
    #[must_use]
    pub fn total_volume(&self) -> f64 {
        self.exercises.iter().map(Exercise::volume).sum()
    }
}
