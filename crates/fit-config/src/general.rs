//! General application configuration.

use std::fmt;

use fit_core::Clock;
use serde::{Deserialize, Serialize};

/// Output format used when `--format` is not given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultFormat {
    Json,
    Raw,
    #[default]
    Text,
}

impl DefaultFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Raw => "raw",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for DefaultFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default output format: `json`, `raw` or `text`.
    #[serde(default)]
    pub format: DefaultFormat,

    /// Calendar that decides "today" for the workout date rule: `local` or `utc`.
    #[serde(default)]
    pub clock: Clock,
}
