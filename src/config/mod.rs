//! Tunable settings of the registration schema.
//!
//! Defaults reproduce the form's fixed rules. Settings can be loaded from
//! JSON using the same camelCase keys the form uses on the wire.

use crate::validation::EmailPolicy;
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::ConfigError;

/// Minimum password length when not configured
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

/// Minimum name length when not configured
pub const DEFAULT_MIN_NAME_LENGTH: usize = 1;

/// Settings for [`Schema::registration`](crate::validation::Schema::registration).
///
/// # Example
///
/// ```rust
/// use signup_form::config::SchemaConfig;
///
/// let config = SchemaConfig::from_json_str(r#"{ "minPasswordLength": 10 }"#).unwrap();
/// assert_eq!(config.min_password_length, 10);
///
/// assert!(SchemaConfig::from_json_str(r#"{ "minPasswordLength": 0 }"#).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SchemaConfig {
    pub min_name_length: usize,

    /// Applies to both password fields
    pub min_password_length: usize,

    pub email_policy: EmailPolicy,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            min_name_length: DEFAULT_MIN_NAME_LENGTH,
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            email_policy: EmailPolicy::default(),
        }
    }
}

impl SchemaConfig {
    /// Parse and check a JSON configuration. Missing keys take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_name_length == 0 {
            return Err(ConfigError::Invalid(
                "minNameLength must be at least 1".to_string(),
            ));
        }
        if self.min_password_length == 0 {
            return Err(ConfigError::Invalid(
                "minPasswordLength must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
