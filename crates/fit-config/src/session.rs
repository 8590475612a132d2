//! Interactive session configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_user_id() -> String {
    "local".to_string()
}

const fn default_show_examples() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Key under which the session keeps the user's profile.
    #[serde(default = "default_user_id")]
    pub user_id: String,

    /// Append example lines to replies for malformed input.
    #[serde(default = "default_show_examples")]
    pub show_examples: bool,
}

impl SessionConfig {
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] if `user_id` is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.user_id.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "session.user_id".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            show_examples: default_show_examples(),
        }
    }
}
