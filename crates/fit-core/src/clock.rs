//! Source of "today" for date invariants.

use chrono::{Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Which calendar decides the current date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Clock {
    #[default]
    Local,
    Utc,
}

impl Clock {
    #[must_use]
    pub fn today(self) -> NaiveDate {
        match self {
            Self::Local => Local::now().date_naive(),
            Self::Utc => Utc::now().date_naive(),
        }
    }
}
