//! Build a typed record from a validated descriptor.

use chrono::{NaiveDate, NaiveTime};
use fit_core::entities::{Exercise, NutritionGoal, Profile, Workout};
use fit_core::enums::RecordKind;
use fit_core::errors::{SchemaViolation, SyntaxError, TypeMismatch};
use fit_core::{DomainRecord, FitError, ObjectDescriptor, PrimitiveValue, Properties, ValueTag};

/// Dispatch on the descriptor's kind and run that record's constructor.
///
/// `today` is the evaluation date for the workout "not in the future" rule.
///
/// # Errors
///
/// - [`SyntaxError::UnknownKind`] if the kind is not a record kind
/// - [`SyntaxError::UnexpectedProperty`] for a key the record does not accept
/// - [`SchemaViolation`] if a field is missing or has the wrong tag
/// - [`fit_core::errors::InvariantViolation`] if a value is out of range
pub fn construct(descriptor: ObjectDescriptor, today: NaiveDate) -> Result<DomainRecord, FitError> {
    let Some(kind) = RecordKind::from_name(&descriptor.kind) else {
        return Err(SyntaxError::UnknownKind {
            kind: descriptor.kind,
        }
        .into());
    };

    let mut fields = Fields::new(kind, descriptor.properties);
    let record = match kind {
        RecordKind::UserProfile => {
            let gender = fields.text("gender")?;
            let age = fields.integer("age")?;
            let height = fields.float("height")?;
            let weight = fields.float("weight")?;
            let goal = fields.text("goal")?;
            let activity = fields.text("activity_type")?;
            fields.finish()?;
            DomainRecord::UserProfile(Profile::new(
                &gender, age, height, weight, &goal, &activity,
            )?)
        }
        RecordKind::Exercise => {
            let name = fields.text("name")?;
            let sets = fields.integer("sets")?;
            let reps = fields.integer("reps_per_set")?;
            let weight = fields.float("weight")?;
            let notes = fields.optional_text("notes")?;
            fields.finish()?;
            DomainRecord::Exercise(Exercise::new(name, sets, reps, weight, notes)?)
        }
        RecordKind::Workout => {
            let date = fields.date("date")?;
            let duration = fields.time("duration")?;
            let notes = fields.optional_text("notes")?;
            fields.finish()?;
            DomainRecord::Workout(Workout::new(date, duration, notes, today)?)
        }
        RecordKind::NutritionGoal => {
            let goal_type = fields.text("goal_type")?;
            let calories = fields.float("calories")?;
            let protein = fields.float("protein")?;
            let fat = fields.float("fat")?;
            let carbs = fields.float("carbs")?;
            fields.finish()?;
            DomainRecord::NutritionGoal(NutritionGoal::new(
                &goal_type, calories, protein, fat, carbs,
            )?)
        }
    };

    Ok(record)
}

/// Typed extraction from a property map. Every accepted key is removed, so
/// whatever remains at [`Fields::finish`] was not accepted by the record.
struct Fields {
    kind: RecordKind,
    properties: Properties,
}

impl Fields {
    const fn new(kind: RecordKind, properties: Properties) -> Self {
        Self { kind, properties }
    }

    fn violation(&self, missing: Vec<String>, mismatches: Vec<TypeMismatch>) -> SchemaViolation {
        SchemaViolation {
            kind: self.kind.to_string(),
            missing,
            mismatches,
        }
    }

    fn take<T>(
        &mut self,
        key: &str,
        expected: ValueTag,
        extract: fn(PrimitiveValue) -> Option<T>,
    ) -> Result<Option<T>, SchemaViolation> {
        let Some(value) = self.properties.remove(key) else {
            return Ok(None);
        };
        let actual = value.tag();
        extract(value).map(Some).ok_or_else(|| {
            self.violation(
                Vec::new(),
                vec![TypeMismatch {
                    key: key.to_string(),
                    expected,
                    actual,
                }],
            )
        })
    }

    fn require<T>(
        &mut self,
        key: &str,
        expected: ValueTag,
        extract: fn(PrimitiveValue) -> Option<T>,
    ) -> Result<T, SchemaViolation> {
        self.take(key, expected, extract)?
            .ok_or_else(|| self.violation(vec![key.to_string()], Vec::new()))
    }

    fn text(&mut self, key: &str) -> Result<String, SchemaViolation> {
        self.require(key, ValueTag::Text, PrimitiveValue::into_text)
    }

    fn optional_text(&mut self, key: &str) -> Result<Option<String>, SchemaViolation> {
        self.take(key, ValueTag::Text, PrimitiveValue::into_text)
    }

    fn integer(&mut self, key: &str) -> Result<i64, SchemaViolation> {
        self.require(key, ValueTag::Integer, |v| v.as_integer())
    }

    fn float(&mut self, key: &str) -> Result<f64, SchemaViolation> {
        self.require(key, ValueTag::Float, |v| v.as_float())
    }

    fn date(&mut self, key: &str) -> Result<NaiveDate, SchemaViolation> {
        self.require(key, ValueTag::Date, |v| v.as_date())
    }

    fn time(&mut self, key: &str) -> Result<NaiveTime, SchemaViolation> {
        self.require(key, ValueTag::Time, |v| v.as_time())
    }

    /// Reject any key the record did not take.
    fn finish(self) -> Result<(), SyntaxError> {
        match self.properties.into_keys().next() {
            Some(key) => Err(SyntaxError::UnexpectedProperty {
                kind: self.kind.to_string(),
                key,
            }),
            None => Ok(()),
        }
    }
}
