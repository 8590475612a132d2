//! Serializable response shapes printed by the commands.

use fit_core::FitError;
use fit_core::enums::{BmiCategory, RecordKind};
use fit_core::errors::ErrorKind;
use fit_core::responses::RecordSummary;
use fit_parser::AliasTable;
use fit_schema::{KindSchema, PropertySpec, SchemaRegistry};
use serde::Serialize;

/// One example line per record kind.
#[must_use]
pub const fn example_line(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::UserProfile => {
            r#"UserProfile gender "мужской" age 25 height 180.5 weight 75.0 goal "похудение" activity_type "средняя""#
        }
        RecordKind::Exercise => r#"Exercise name "Приседания" sets 4 reps_per_set 10 weight 60.0"#,
        RecordKind::Workout => "Workout date 2025.12.15 duration 01:30",
        RecordKind::NutritionGoal => {
            r#"NutritionGoal goal_type "похудение" calories 1800.0 protein 120.0 fat 50.0 carbs 180.0"#
        }
    }
}

/// What a command or session prints for one input.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "reply", rename_all = "snake_case")]
pub enum Reply {
    /// A line was turned into a record.
    Created {
        summary: RecordSummary,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    /// A record held by the session (`/profile`, `/workout`).
    Stored { summary: RecordSummary },
    Bmi { bmi: f64, category: BmiCategory },
    /// A line was rejected.
    Error {
        kind: ErrorKind,
        message: String,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        examples: Vec<&'static str>,
    },
    Notice { message: String },
    Help {
        kinds: Vec<KindView>,
        commands: Vec<CommandView>,
    },
    Quit,
}

impl Reply {
    #[must_use]
    pub fn created(summary: RecordSummary) -> Self {
        Self::Created {
            summary,
            note: None,
        }
    }

    /// Reply for a rejected line. Syntax and schema errors carry example
    /// lines when `show_examples` is set.
    #[must_use]
    pub fn rejected(error: &FitError, show_examples: bool) -> Self {
        let examples = if show_examples && error.kind() != ErrorKind::SemanticInvariantViolation {
            RecordKind::ALL.iter().copied().map(example_line).collect()
        } else {
            Vec::new()
        };
        Self::Error {
            kind: error.kind(),
            message: error.message(),
            examples,
        }
    }

    #[must_use]
    pub fn notice(message: impl Into<String>) -> Self {
        Self::Notice {
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

/// One property of a kind with its accepted spellings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyView {
    pub key: &'static str,
    pub tag: fit_core::ValueTag,
    pub required: bool,
    pub aliases: Vec<String>,
}

/// The line shape of one record kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindView {
    pub kind: RecordKind,
    pub properties: Vec<PropertyView>,
    pub example: &'static str,
}

impl KindView {
    #[must_use]
    pub fn new(schema: &KindSchema, aliases: &AliasTable) -> Self {
        let property = |spec: &PropertySpec, required: bool| PropertyView {
            key: spec.key,
            tag: spec.tag,
            required,
            aliases: aliases
                .aliases_for(spec.key)
                .into_iter()
                .filter(|alias| *alias != spec.key)
                .map(str::to_string)
                .collect(),
        };
        Self {
            kind: schema.kind,
            properties: schema
                .required
                .iter()
                .map(|spec| property(spec, true))
                .chain(schema.optional.iter().map(|spec| property(spec, false)))
                .collect(),
            example: example_line(schema.kind),
        }
    }

    /// Views of every registered kind, in registry order.
    #[must_use]
    pub fn all(registry: &SchemaRegistry, aliases: &AliasTable) -> Vec<Self> {
        registry
            .kinds()
            .into_iter()
            .filter_map(|kind| registry.get(kind.as_str()))
            .map(|schema| Self::new(schema, aliases))
            .collect()
    }
}

/// A session slash command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandView {
    pub name: &'static str,
    pub about: &'static str,
}

/// Output of `fittrack schema` without arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaIndex {
    pub kinds: Vec<KindView>,
    pub json_schemas: Vec<&'static str>,
}
