//! # fit-config
//!
//! Layered configuration loading for FitTrack using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FITTRACK_*` prefix, `__` as separator)
//! 2. Project-level `.fittrack/config.toml`
//! 3. User-level `~/.config/fittrack/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FITTRACK_GENERAL__FORMAT` -> `general.format`,
//! `FITTRACK_SESSION__USER_ID` -> `session.user_id`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use fit_config::FitConfig;
//!
//! let config = FitConfig::load_with_dotenv().expect("config");
//! let today = config.general.clock.today();
//! println!("evaluating workouts against {today}");
//! ```

mod error;
mod general;
mod session;

pub use error::ConfigError;
pub use general::{DefaultFormat, GeneralConfig};
pub use session::SessionConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FitConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl FitConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Figment`] for an unreadable source or a value of the
    /// wrong type or spelling, [`ConfigError::InvalidValue`] for a value that
    /// deserializes but is not allowed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing `.env` is fine; set variables are never overwritten.
        dotenvy::dotenv().ok();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Check constraints that deserialization cannot express.
    ///
    /// # Errors
    ///
    /// The first [`ConfigError::InvalidValue`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.session.validate()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".fittrack/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("FITTRACK_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("fittrack").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = FitConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.general.format, DefaultFormat::Text);
        assert_eq!(config.session.user_id, "local");
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config = FitConfig::from_figment(&FitConfig::figment()).expect("defaults");
            assert_eq!(config.general.clock, fit_core::Clock::Local);
            assert!(config.session.show_examples);
            Ok(())
        });
    }
}
