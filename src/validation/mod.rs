//! Schema-based validation of the registration form.
//!
//! Rules are evaluated with Stillwater's `Validation` type, which
//! accumulates the failures of every field instead of stopping at the
//! first one. Each field reports at most one error: its first failing rule.
//!
//! # Example
//!
//! ```rust
//! use signup_form::core::{Field, FieldSet};
//! use signup_form::validation::{validate, ValidationResult};
//!
//! let fields = FieldSet::new("Ana", "ana@example.com", "longenough1", "longenough2");
//!
//! match validate(&fields) {
//!     ValidationResult::Accepted(_) => panic!("passwords differ"),
//!     ValidationResult::Rejected(errors) => {
//!         assert_eq!(errors.fields(), vec![Field::ConfirmPassword]);
//!         assert_eq!(
//!             errors.message(Field::ConfirmPassword),
//!             Some("Las contraseñas no coinciden")
//!         );
//!     }
//! }
//! ```
//!
//! Custom schemas are assembled with [`SchemaBuilder`]:
//!
//! ```rust
//! use signup_form::core::{Field, FieldSet};
//! use signup_form::validation::SchemaBuilder;
//!
//! let schema = SchemaBuilder::new()
//!     .required(Field::Name, "Name is required")
//!     .email(Field::Email, "Email is invalid")
//!     .build();
//!
//! let result = schema.validate(&FieldSet::new("Ana", "ana@example", "", ""));
//! assert_eq!(result.errors().unwrap().message(Field::Email), Some("Email is invalid"));
//! ```

pub mod builder;
pub mod errors;
pub mod messages;
pub mod rules;

use crate::config::SchemaConfig;
use crate::core::FieldSet;
use std::sync::OnceLock;

// Re-export commonly used types
pub use builder::SchemaBuilder;
pub use errors::{ErrorKind, FieldError, ValidationErrors, ValidationResult};
pub use rules::{EmailPolicy, FieldRule, Schema};

/// The registration schema with default settings.
pub fn registration_schema() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| Schema::registration(&SchemaConfig::default()))
}

/// Validate a record against the registration schema.
pub fn validate(fields: &FieldSet) -> ValidationResult {
    registration_schema().validate(fields)
}
