//! Serialized records must validate against their schemars-generated schemas.

use chrono::{NaiveDate, NaiveTime};
use schemars::schema_for;
use fit_core::entities::{Exercise, NutritionGoal, Profile, Workout};
use fit_core::record::DomainRecord;
use fit_core::responses::RecordSummary;
use fit_core::value::PrimitiveValue;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! serialize_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn squat() -> Exercise {
    Exercise::new("Приседания", 4, 10, 60.0, None).unwrap()
}

fn workout() -> Workout {
    let mut workout = Workout::new(
        NaiveDate::from_ymd_opt(2025, 12, 15).unwrap(),
        NaiveTime::from_hms_opt(1, 30, 0).unwrap(),
        Some("лёгкий день".into()),
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
    )
    .unwrap();
    workout.add_exercise(squat());
    workout
}

serialize_and_validate!(
    profile_schema,
    Profile,
    Profile::new("мужской", 25, 180.5, 75.0, "похудение", "средняя").unwrap()
);

serialize_and_validate!(exercise_schema, Exercise, squat());

serialize_and_validate!(
    exercise_with_notes_schema,
    Exercise,
    Exercise::new("Жим", 3, 8, 67.5, Some("узкий хват".into())).unwrap()
);

serialize_and_validate!(workout_schema, Workout, workout());

serialize_and_validate!(
    nutrition_goal_schema,
    NutritionGoal,
    NutritionGoal::new("похудение", 1800.0, 120.0, 50.0, 180.0).unwrap()
);

serialize_and_validate!(
    domain_record_schema,
    DomainRecord,
    DomainRecord::Workout(workout())
);

serialize_and_validate!(
    record_summary_schema,
    RecordSummary,
    RecordSummary::from(DomainRecord::Exercise(squat()))
);

serialize_and_validate!(
    primitive_value_schema,
    PrimitiveValue,
    PrimitiveValue::Date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
);

#[test]
fn summary_carries_metrics_next_to_record() {
    let summary = RecordSummary::from(DomainRecord::Workout(workout()));
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["record"]["kind"], "Workout");
    assert_eq!(json["record"]["date"], "2025-12-15");
    assert_eq!(json["metrics"]["exercise_count"], 1);
    assert_eq!(json["metrics"]["total_volume"], 2400.0);
}
