//! JSON Schemas of the documents `fittrack` emits.
//!
//! Every schema is generated from its fit-core type and compiled once. The
//! CLI prints the documents with `schema --json NAME`, and its tests check
//! each emitted summary against `record_summary`.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use fit_core::entities::{Exercise, NutritionGoal, Profile, Workout};
use fit_core::record::{DerivedMetrics, DomainRecord};
use fit_core::responses::RecordSummary;
use jsonschema::Validator;
use schemars::{JsonSchema, schema_for};
use serde::Serialize;
use serde_json::Value;

use crate::error::SchemaError;

static BUILTIN: LazyLock<RecordSchemas> = LazyLock::new(|| {
    RecordSchemas::generate().expect("schemas generated from fit-core types compile")
});

/// A generated schema document and its compiled validator.
struct CompiledSchema {
    document: Value,
    validator: Validator,
}

/// Compiled JSON Schemas keyed by document name.
pub struct RecordSchemas {
    schemas: BTreeMap<&'static str, CompiledSchema>,
}

impl RecordSchemas {
    /// The schemas of every record, the summary and its parts.
    ///
    /// # Panics
    ///
    /// Panics on first use if a generated schema does not compile. The set
    /// is fixed at build time and covered by tests.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Generate and compile every schema.
    ///
    /// # Errors
    ///
    /// [`SchemaError::Generation`] naming the schema that failed to compile.
    pub fn generate() -> Result<Self, SchemaError> {
        let mut schemas = BTreeMap::new();
        compile::<Profile>(&mut schemas, "user_profile")?;
        compile::<Exercise>(&mut schemas, "exercise")?;
        compile::<Workout>(&mut schemas, "workout")?;
        compile::<NutritionGoal>(&mut schemas, "nutrition_goal")?;
        compile::<DomainRecord>(&mut schemas, "domain_record")?;
        compile::<DerivedMetrics>(&mut schemas, "derived_metrics")?;
        compile::<RecordSummary>(&mut schemas, "record_summary")?;
        Ok(Self { schemas })
    }

    /// Schema document by name.
    #[must_use]
    pub fn document(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name).map(|schema| &schema.document)
    }

    /// Schema names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.schemas.keys().copied()
    }

    /// Check a JSON document against the named schema, collecting every
    /// validation error.
    ///
    /// # Errors
    ///
    /// [`SchemaError::NotFound`] for an unknown name,
    /// [`SchemaError::ValidationFailed`] otherwise.
    pub fn check(&self, name: &str, instance: &Value) -> Result<(), SchemaError> {
        let schema = self
            .schemas
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let errors: Vec<String> = schema
            .validator
            .iter_errors(instance)
            .map(|e| format!("{}: {e}", e.instance_path))
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed {
                name: name.to_string(),
                errors,
            })
        }
    }

    /// Serialize `value` and check it against the named schema.
    ///
    /// # Errors
    ///
    /// See [`Self::check`]; also [`SchemaError::Serialize`].
    pub fn check_value<T: Serialize>(&self, name: &str, value: &T) -> Result<(), SchemaError> {
        self.check(name, &serde_json::to_value(value)?)
    }
}

fn compile<T: JsonSchema>(
    schemas: &mut BTreeMap<&'static str, CompiledSchema>,
    name: &'static str,
) -> Result<(), SchemaError> {
    let document = serde_json::to_value(schema_for!(T))?;
    let validator = jsonschema::validator_for(&document).map_err(|e| SchemaError::Generation {
        name: name.to_string(),
        reason: e.to_string(),
    })?;
    schemas.insert(name, CompiledSchema { document, validator });
    Ok(())
}
