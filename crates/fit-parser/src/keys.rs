//! Property-name translation.
//!
//! Users may name a property in Russian or English. Every spelling in the
//! alias table resolves to one canonical key; the schema registry and record
//! constructors only ever see canonical keys. Canonical keys are shared
//! across kinds (`вес` is `weight` for both profiles and exercises), and the
//! kind's schema decides what a key means.

use std::collections::HashMap;
use std::sync::LazyLock;

use fit_schema::RegistryError;

/// (alias, canonical key). An alias may repeat only with the same target.
const ALIASES: &[(&str, &str)] = &[
    // UserProfile
    ("пол", "gender"),
    ("гендер", "gender"),
    ("возраст", "age"),
    ("рост", "height"),
    ("вес", "weight"),
    ("цель", "goal"),
    ("тип_активности", "activity_type"),
    ("активность", "activity_type"),
    ("уровень_активности", "activity_type"),
    ("activity", "activity_type"),
    ("activity_level", "activity_type"),
    // Exercise
    ("название", "name"),
    ("имя", "name"),
    ("подходы", "sets"),
    ("повторения", "reps_per_set"),
    ("повторы", "reps_per_set"),
    ("повторений", "reps_per_set"),
    ("reps", "reps_per_set"),
    ("вес", "weight"),
    ("масса", "weight"),
    ("примечания", "notes"),
    // Workout
    ("дата", "date"),
    ("длительность", "duration"),
    ("продолжительность", "duration"),
    ("упражнения", "exercises"),
    ("комментарии", "notes"),
    // NutritionGoal
    ("тип_цели", "goal_type"),
    ("калории", "calories"),
    ("kcal", "calories"),
    ("белок", "protein"),
    ("протеин", "protein"),
    ("жиры", "fat"),
    ("углеводы", "carbs"),
    ("карбс", "carbs"),
];

static STANDARD: LazyLock<AliasTable> = LazyLock::new(|| {
    AliasTable::from_entries(ALIASES).expect("built-in alias table has no ambiguous aliases")
});

/// Lower-case, drop surrounding quotes, and join whitespace-separated words
/// with `_`.
#[must_use]
pub fn normalize_key(raw: &str) -> String {
    let unquoted = raw
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw);
    unquoted
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Alias -> canonical key lookup.
#[derive(Debug, Clone)]
pub struct AliasTable {
    aliases: HashMap<String, &'static str>,
}

impl AliasTable {
    /// Build a table from (alias, canonical) pairs. Aliases are normalized
    /// before insertion.
    ///
    /// # Errors
    ///
    /// [`RegistryError::AmbiguousAlias`] if one alias names two canonical keys.
    pub fn from_entries(entries: &[(&str, &'static str)]) -> Result<Self, RegistryError> {
        let mut aliases: HashMap<String, &'static str> = HashMap::new();
        for &(alias, canonical) in entries {
            let alias = normalize_key(alias);
            match aliases.get(&alias) {
                Some(&existing) if existing != canonical => {
                    return Err(RegistryError::AmbiguousAlias {
                        alias,
                        first: existing.to_string(),
                        second: canonical.to_string(),
                    });
                }
                Some(_) => {}
                None => {
                    aliases.insert(alias, canonical);
                }
            }
        }
        Ok(Self { aliases })
    }

    /// The built-in Russian/English alias table.
    ///
    /// # Panics
    ///
    /// Panics on first use if the built-in table is ambiguous. The table is a
    /// constant and covered by tests.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Canonical key for `raw`. A miss returns the normalized input.
    #[must_use]
    pub fn translate(&self, raw: &str) -> String {
        let normalized = normalize_key(raw);
        match self.aliases.get(&normalized) {
            Some(canonical) => (*canonical).to_string(),
            None => normalized,
        }
    }

    /// Every alias that resolves to `canonical`, sorted.
    #[must_use]
    pub fn aliases_for(&self, canonical: &str) -> Vec<&str> {
        let mut found: Vec<&str> = self
            .aliases
            .iter()
            .filter(|(_, target)| **target == canonical)
            .map(|(alias, _)| alias.as_str())
            .collect();
        found.sort_unstable();
        found
    }
}

/// Translate with the built-in table.
#[must_use]
pub fn translate(raw: &str) -> String {
    AliasTable::standard().translate(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("пол", "gender")]
    #[case("ВОЗРАСТ", "age")]
    #[case("вес", "weight")]
    #[case("масса", "weight")]
    #[case("повторения", "reps_per_set")]
    #[case("\"тип цели\"", "goal_type")]
    #[case("уровень_активности", "activity_type")]
    #[case("калории", "calories")]
    fn resolves_aliases(#[case] raw: &str, #[case] canonical: &str) {
        assert_eq!(translate(raw), canonical);
    }

    #[test]
    fn canonical_keys_pass_through() {
        assert_eq!(translate("reps_per_set"), "reps_per_set");
        assert_eq!(translate("Weight"), "weight");
    }

    #[test]
    fn unknown_key_is_normalized_not_rejected() {
        assert_eq!(translate("Favourite Color"), "favourite_color");
        assert_eq!(translate("prop1"), "prop1");
    }

    #[test]
    fn standard_table_builds() {
        assert!(AliasTable::from_entries(ALIASES).is_ok());
    }

    #[test]
    fn repeated_alias_with_same_target_is_fine() {
        let table = AliasTable::from_entries(&[("вес", "weight"), ("вес", "weight")]).unwrap();
        assert_eq!(table.translate("вес"), "weight");
    }

    #[test]
    fn ambiguous_alias_is_rejected() {
        let err = AliasTable::from_entries(&[("вес", "weight"), ("Вес", "mass")]).unwrap_err();
        assert_eq!(
            err,
            RegistryError::AmbiguousAlias {
                alias: "вес".into(),
                first: "weight".into(),
                second: "mass".into(),
            }
        );
    }

    #[test]
    fn lists_aliases_of_a_key() {
        assert_eq!(
            AliasTable::standard().aliases_for("weight"),
            vec!["вес", "масса"]
        );
    }
}
