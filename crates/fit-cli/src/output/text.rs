//! Human-readable templates for `--format text`.

use std::fmt::Write as _;

use fit_core::DomainRecord;
use fit_core::entities::{Exercise, NutritionGoal, Profile, Workout};
use fit_core::errors::ErrorKind;
use fit_core::record::FitnessEntity;
use fit_core::responses::RecordSummary;

use crate::views::{CommandView, KindView, Reply, SchemaIndex};

/// A response that has a plain-text rendering.
pub trait TextView {
    fn to_text(&self) -> String;
}

const BMI_BANDS: &str = "< 18.5: underweight\n18.5-24.9: normal\n25-29.9: overweight\n>= 30: obese";

impl TextView for Reply {
    fn to_text(&self) -> String {
        match self {
            Self::Created { summary, note } => {
                let mut text = format!("{} created!\n\n{}", label(&summary.record), body(summary));
                if let Some(note) = note {
                    let _ = write!(text, "\n\n{note}");
                }
                text
            }
            Self::Stored { summary } => {
                let heading = match summary.record {
                    DomainRecord::UserProfile(_) => "Your profile",
                    DomainRecord::Workout(_) => "Current workout",
                    _ => label(&summary.record),
                };
                format!("{heading}:\n\n{}", body(summary))
            }
            Self::Bmi { bmi, category } => {
                format!("Body mass index (BMI):\n\n- BMI: {bmi:.1}\n- Category: {category}\n\n{BMI_BANDS}")
            }
            Self::Error {
                kind,
                message,
                examples,
            } => {
                let mut text = match kind {
                    ErrorKind::SemanticInvariantViolation => format!(
                        "Validation error:\n{message}\n\nCheck the values and try again."
                    ),
                    ErrorKind::MalformedSyntax | ErrorKind::SchemaViolation => {
                        format!("Parse error: {message}")
                    }
                };
                if !examples.is_empty() {
                    text.push_str("\n\nExamples:");
                    for line in examples {
                        let _ = write!(text, "\n  {line}");
                    }
                }
                text
            }
            Self::Notice { message } => message.clone(),
            Self::Help { kinds, commands } => {
                let mut text = String::from("Send one record per line:\n  Kind key value [key value ...]\n");
                for kind in kinds {
                    let _ = write!(text, "\n{}", kind.to_text());
                }
                text.push_str("\nCommands:");
                for CommandView { name, about } in commands {
                    let _ = write!(text, "\n  {name:<10} {about}");
                }
                text
            }
            Self::Quit => String::from("Bye!"),
        }
    }
}

impl TextView for KindView {
    fn to_text(&self) -> String {
        let mut text = format!("{}\n", self.kind);
        for property in &self.properties {
            let presence = if property.required { "required" } else { "optional" };
            let _ = write!(text, "  {} ({}, {presence})", property.key, property.tag);
            if !property.aliases.is_empty() {
                let _ = write!(text, ": {}", property.aliases.join(", "));
            }
            text.push('\n');
        }
        let _ = writeln!(text, "  example: {}", self.example);
        text
    }
}

impl TextView for SchemaIndex {
    fn to_text(&self) -> String {
        let mut text = String::new();
        for kind in &self.kinds {
            text.push_str(&kind.to_text());
            text.push('\n');
        }
        let _ = write!(
            text,
            "JSON Schemas (--json NAME): {}",
            self.json_schemas.join(", ")
        );
        text
    }
}

impl TextView for serde_json::Value {
    fn to_text(&self) -> String {
        format!("{self:#}")
    }
}

const fn label(record: &DomainRecord) -> &'static str {
    match record {
        DomainRecord::UserProfile(_) => "Profile",
        DomainRecord::Exercise(_) => "Exercise",
        DomainRecord::Workout(_) => "Workout",
        DomainRecord::NutritionGoal(_) => "Nutrition goal",
    }
}

fn body(summary: &RecordSummary) -> String {
    match &summary.record {
        DomainRecord::UserProfile(profile) => profile_body(profile),
        DomainRecord::Exercise(exercise) => exercise_body(exercise),
        DomainRecord::Workout(workout) => workout_body(workout),
        DomainRecord::NutritionGoal(goal) => nutrition_body(goal),
    }
}

fn profile_body(profile: &Profile) -> String {
    format!(
        "Basics:\n\
         - Gender: {}\n\
         - Age: {} years\n\
         - Height: {:.1} cm\n\
         - Weight: {:.1} kg\n\
         \n\
         Goals:\n\
         - Goal: {}\n\
         - Activity: {}\n\
         \n\
         Body mass index:\n\
         - BMI: {:.1}\n\
         - Category: {}",
        profile.gender(),
        profile.age(),
        profile.height(),
        profile.weight(),
        profile.goal(),
        profile.activity(),
        profile.bmi(),
        profile.bmi_category(),
    )
}

fn exercise_body(exercise: &Exercise) -> String {
    let mut text = format!(
        "Name: {}\nSets: {}\nReps per set: {}\nWeight: {:.1} kg\nVolume: {:.1}",
        exercise.name(),
        exercise.sets(),
        exercise.reps_per_set(),
        exercise.weight(),
        exercise.volume(),
    );
    if let Some(notes) = exercise.notes() {
        let _ = write!(text, "\nNotes: {notes}");
    }
    text
}

fn workout_body(workout: &Workout) -> String {
    let mut text = format!(
        "Date: {}\nDuration: {}\nExercises: {}",
        workout.date(),
        workout.duration().format("%H:%M"),
        workout.exercise_count(),
    );
    for (index, exercise) in workout.exercises().iter().enumerate() {
        let _ = write!(text, "\n  {}. {}", index + 1, exercise.describe());
    }
    if workout.exercise_count() > 0 {
        let _ = write!(text, "\nTotal volume: {:.1}", workout.total_volume());
    }
    if let Some(notes) = workout.notes() {
        let _ = write!(text, "\nNotes: {notes}");
    }
    text
}

fn nutrition_body(goal: &NutritionGoal) -> String {
    format!(
        "Goal type: {}\n\
         Calories: {:.1} kcal\n\
         Protein: {:.1} g ({:.0} kcal)\n\
         Fat: {:.1} g ({:.0} kcal)\n\
         Carbs: {:.1} g ({:.0} kcal)",
        goal.goal_type(),
        goal.calories(),
        goal.protein(),
        goal.protein_calories(),
        goal.fat(),
        goal.fat_calories(),
        goal.carbs(),
        goal.carbs_calories(),
    )
}
