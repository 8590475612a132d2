//! Record structs for all FitTrack domain objects.
//!
//! Every constructor is fallible and checks all range and enumeration
//! invariants of its record, so a value of these types is always valid.
//! Fields are private; records expose read-only accessors and derived
//! metrics. The only mutation is [`Workout::add_exercise`].

mod exercise;
mod nutrition;
mod profile;
mod workout;

pub use exercise::Exercise;
pub use nutrition::NutritionGoal;
pub use profile::Profile;
pub use workout::Workout;

use crate::errors::InvariantViolation;

/// Inclusive range check.
pub(crate) fn check_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), InvariantViolation> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(InvariantViolation::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// Resolve an enumeration literal or report the accepted spellings.
pub(crate) fn check_choice<T>(
    field: &'static str,
    raw: &str,
    parse: impl FnOnce(&str) -> Option<T>,
    allowed: &'static [&'static str],
) -> Result<T, InvariantViolation> {
    parse(raw).ok_or_else(|| InvariantViolation::InvalidChoice {
        field,
        value: raw.to_string(),
        allowed,
    })
}
