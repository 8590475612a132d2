//! Static property schemas per record kind.
//!
//! A kind's schema lists the canonical keys a line must carry, each with the
//! value tag it must have been inferred as, plus optional keys that are
//! type-checked only when present. Kinds without an entry are not checked
//! here; record construction rejects them later.

use std::collections::HashSet;
use std::sync::LazyLock;

use fit_core::enums::RecordKind;
use fit_core::errors::{SchemaViolation, TypeMismatch};
use fit_core::{Properties, ValueTag};

use crate::error::RegistryError;

/// One expected property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertySpec {
    pub key: &'static str,
    pub tag: ValueTag,
}

const fn spec(key: &'static str, tag: ValueTag) -> PropertySpec {
    PropertySpec { key, tag }
}

/// Expected properties of one kind, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindSchema {
    pub kind: RecordKind,
    pub required: &'static [PropertySpec],
    pub optional: &'static [PropertySpec],
}

impl KindSchema {
    /// Look up the spec of a required or optional key.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&PropertySpec> {
        self.required
            .iter()
            .chain(self.optional)
            .find(|spec| spec.key == key)
    }
}

const BUILTIN_TABLES: &[KindSchema] = &[
    KindSchema {
        kind: RecordKind::UserProfile,
        required: &[
            spec("gender", ValueTag::Text),
            spec("age", ValueTag::Integer),
            spec("height", ValueTag::Float),
            spec("weight", ValueTag::Float),
            spec("goal", ValueTag::Text),
            spec("activity_type", ValueTag::Text),
        ],
        optional: &[],
    },
    KindSchema {
        kind: RecordKind::Exercise,
        required: &[
            spec("name", ValueTag::Text),
            spec("sets", ValueTag::Integer),
            spec("reps_per_set", ValueTag::Integer),
            spec("weight", ValueTag::Float),
        ],
        optional: &[spec("notes", ValueTag::Text)],
    },
    KindSchema {
        kind: RecordKind::Workout,
        required: &[
            spec("date", ValueTag::Date),
            spec("duration", ValueTag::Time),
        ],
        optional: &[spec("notes", ValueTag::Text)],
    },
    KindSchema {
        kind: RecordKind::NutritionGoal,
        required: &[
            spec("goal_type", ValueTag::Text),
            spec("calories", ValueTag::Float),
            spec("protein", ValueTag::Float),
            spec("fat", ValueTag::Float),
            spec("carbs", ValueTag::Float),
        ],
        optional: &[],
    },
];

static BUILTIN: LazyLock<SchemaRegistry> = LazyLock::new(|| {
    SchemaRegistry::from_tables(BUILTIN_TABLES)
        .expect("built-in property schemas are internally consistent")
});

/// Read-only registry of property schemas, keyed by kind name.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    tables: Vec<KindSchema>,
}

impl SchemaRegistry {
    /// Build a registry, rejecting duplicate kinds and duplicate keys within
    /// a kind (required and optional keys share one namespace).
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found.
    pub fn from_tables(tables: &[KindSchema]) -> Result<Self, RegistryError> {
        let mut kinds = HashSet::new();
        for table in tables {
            if !kinds.insert(table.kind) {
                return Err(RegistryError::DuplicateKind(table.kind.to_string()));
            }
            let mut keys = HashSet::new();
            for spec in table.required.iter().chain(table.optional) {
                if !keys.insert(spec.key) {
                    return Err(RegistryError::DuplicateKey {
                        kind: table.kind.to_string(),
                        key: spec.key.to_string(),
                    });
                }
            }
        }

        Ok(Self {
            tables: tables.to_vec(),
        })
    }

    /// The process-wide registry of built-in record kinds.
    ///
    /// # Panics
    ///
    /// Panics on first use if the built-in tables are inconsistent. The
    /// tables are constants and covered by tests.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Schema for a kind name. `None` for unknown kinds.
    #[must_use]
    pub fn get(&self, kind: &str) -> Option<&KindSchema> {
        self.tables.iter().find(|table| table.kind.as_str() == kind)
    }

    /// Registered kinds in declaration order.
    #[must_use]
    pub fn kinds(&self) -> Vec<RecordKind> {
        self.tables.iter().map(|table| table.kind).collect()
    }

    /// Check `properties` against the schema of `kind`.
    ///
    /// Unknown kinds pass. Otherwise every required key is inspected before
    /// anything is reported, so one error names all missing keys and all
    /// type mismatches.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaViolation`] listing every problem found.
    pub fn validate(&self, kind: &str, properties: &Properties) -> Result<(), SchemaViolation> {
        let Some(table) = self.get(kind) else {
            tracing::debug!(kind, "no property schema registered; skipping validation");
            return Ok(());
        };

        let mut violation = SchemaViolation {
            kind: kind.to_string(),
            missing: Vec::new(),
            mismatches: Vec::new(),
        };

        for spec in table.required {
            match properties.get(spec.key) {
                None => violation.missing.push(spec.key.to_string()),
                Some(value) if value.tag() != spec.tag => {
                    violation.mismatches.push(TypeMismatch {
                        key: spec.key.to_string(),
                        expected: spec.tag,
                        actual: value.tag(),
                    });
                }
                Some(_) => {}
            }
        }

        for spec in table.optional {
            if let Some(value) = properties.get(spec.key) {
                if value.tag() != spec.tag {
                    violation.mismatches.push(TypeMismatch {
                        key: spec.key.to_string(),
                        expected: spec.tag,
                        actual: value.tag(),
                    });
                }
            }
        }

        if violation.is_empty() {
            Ok(())
        } else {
            tracing::debug!(
                kind,
                missing = violation.missing.len(),
                mismatches = violation.mismatches.len(),
                "property schema violated"
            );
            Err(violation)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fit_core::PrimitiveValue;
    use pretty_assertions::assert_eq;

    fn props(entries: &[(&str, PrimitiveValue)]) -> Properties {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn builtin_covers_every_kind() {
        let registry = SchemaRegistry::builtin();
        assert_eq!(registry.kinds(), RecordKind::ALL.to_vec());
    }

    #[test]
    fn builtin_tables_are_consistent() {
        assert!(SchemaRegistry::from_tables(BUILTIN_TABLES).is_ok());
    }

    #[test]
    fn duplicate_key_is_rejected() {
        const BAD: &[KindSchema] = &[KindSchema {
            kind: RecordKind::Exercise,
            required: &[spec("name", ValueTag::Text)],
            optional: &[spec("name", ValueTag::Text)],
        }];
        assert_eq!(
            SchemaRegistry::from_tables(BAD).unwrap_err(),
            RegistryError::DuplicateKey {
                kind: "Exercise".into(),
                key: "name".into(),
            }
        );
    }

    #[test]
    fn duplicate_kind_is_rejected() {
        const BAD: &[KindSchema] = &[
            KindSchema {
                kind: RecordKind::Workout,
                required: &[],
                optional: &[],
            },
            KindSchema {
                kind: RecordKind::Workout,
                required: &[],
                optional: &[],
            },
        ];
        assert!(matches!(
            SchemaRegistry::from_tables(BAD),
            Err(RegistryError::DuplicateKind(_))
        ));
    }

    #[test]
    fn unknown_kind_passes() {
        let registry = SchemaRegistry::builtin();
        let properties = props(&[("x", PrimitiveValue::Integer(1))]);
        assert!(registry.validate("UnknownKind", &properties).is_ok());
    }

    #[test]
    fn collects_all_missing_and_mismatched() {
        let registry = SchemaRegistry::builtin();
        let properties = props(&[
            ("gender", PrimitiveValue::Text("мужской".into())),
            ("age", PrimitiveValue::Text("двадцать пять".into())),
            ("height", PrimitiveValue::Float(180.5)),
        ]);

        let err = registry.validate("UserProfile", &properties).unwrap_err();
        assert_eq!(err.missing, vec!["weight", "goal", "activity_type"]);
        assert_eq!(
            err.mismatches,
            vec![TypeMismatch {
                key: "age".into(),
                expected: ValueTag::Integer,
                actual: ValueTag::Text,
            }]
        );
    }

    #[test]
    fn integer_does_not_satisfy_float() {
        let registry = SchemaRegistry::builtin();
        let properties = props(&[
            ("name", PrimitiveValue::Text("Жим".into())),
            ("sets", PrimitiveValue::Integer(3)),
            ("reps_per_set", PrimitiveValue::Integer(8)),
            ("weight", PrimitiveValue::Integer(60)),
        ]);
        let err = registry.validate("Exercise", &properties).unwrap_err();
        assert!(err.missing.is_empty());
        assert_eq!(err.mismatches[0].key, "weight");
    }

    #[test]
    fn optional_notes_are_type_checked() {
        let registry = SchemaRegistry::builtin();
        let date = chrono::NaiveDate::from_ymd_opt(2025, 12, 15).unwrap();
        let duration = chrono::NaiveTime::from_hms_opt(1, 30, 0).unwrap();
        let mut properties = props(&[
            ("date", PrimitiveValue::Date(date)),
            ("duration", PrimitiveValue::Time(duration)),
        ]);
        assert!(registry.validate("Workout", &properties).is_ok());

        properties.insert("notes".into(), PrimitiveValue::Integer(5));
        let err = registry.validate("Workout", &properties).unwrap_err();
        assert_eq!(err.mismatches[0].key, "notes");
    }

    #[test]
    fn property_lookup_includes_optional() {
        let registry = SchemaRegistry::builtin();
        let exercise = registry.get("Exercise").unwrap();
        assert_eq!(exercise.property("notes").unwrap().tag, ValueTag::Text);
        assert!(exercise.property("color").is_none());
    }
}
