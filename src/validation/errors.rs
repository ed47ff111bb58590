//! Field-scoped validation errors and the validation outcome.

use crate::core::{Field, FieldSet};
use serde::Serialize;
use std::collections::btree_map;
use std::collections::BTreeMap;
use thiserror::Error;

/// Which rule a field failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ErrorKind {
    /// Value was empty.
    Required,

    /// Value is not a syntactically valid email address.
    InvalidEmail,

    /// Value has fewer than `min` characters.
    TooShort { min: usize },

    /// Value differs from the field it confirms.
    Mismatch { source: Field },

    /// A custom predicate rejected the record.
    Custom,
}

/// A single failed rule, attached to one field.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: Field,
    pub kind: ErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
        }
    }
}

/// Errors of a rejected submission, at most one per field.
///
/// The first error recorded for a field wins; later ones for the same
/// field are dropped.
#[derive(Debug, Clone, Default, Error, PartialEq, Eq, Serialize)]
#[error("Validation failed for {} field(s)", .errors.len())]
pub struct ValidationErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `error` unless its field already has one.
    /// Returns whether the error was kept.
    pub fn insert(&mut self, error: FieldError) -> bool {
        match self.errors.entry(error.field) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(error);
                true
            }
            btree_map::Entry::Occupied(_) => false,
        }
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Message for `field`, if it failed.
    pub fn message(&self, field: Field) -> Option<&str> {
        self.get(field).map(|error| error.message.as_str())
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failed fields in form order.
    pub fn fields(&self) -> Vec<Field> {
        self.errors.keys().copied().collect()
    }

    /// Errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.values()
    }
}

impl FromIterator<FieldError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut errors = Self::new();
        for error in iter {
            errors.insert(error);
        }
        errors
    }
}

/// Outcome of validating a [`FieldSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Every rule passed; carries the record unchanged.
    Accepted(FieldSet),

    /// At least one rule failed.
    Rejected(ValidationErrors),
}

impl ValidationResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Errors of a rejected result.
    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(errors) => Some(errors),
        }
    }

    pub fn into_result(self) -> Result<FieldSet, ValidationErrors> {
        match self {
            Self::Accepted(fields) => Ok(fields),
            Self::Rejected(errors) => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_error_per_field_wins() {
        let mut errors = ValidationErrors::new();

        assert!(errors.insert(FieldError::new(
            Field::Password,
            ErrorKind::TooShort { min: 8 },
            "too short",
        )));
        assert!(!errors.insert(FieldError::new(
            Field::Password,
            ErrorKind::Custom,
            "second",
        )));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message(Field::Password), Some("too short"));
    }

    #[test]
    fn errors_iterate_in_form_order() {
        let errors: ValidationErrors = vec![
            FieldError::new(Field::ConfirmPassword, ErrorKind::Custom, "c"),
            FieldError::new(Field::Name, ErrorKind::Required, "n"),
            FieldError::new(Field::Email, ErrorKind::InvalidEmail, "e"),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            errors.fields(),
            vec![Field::Name, Field::Email, Field::ConfirmPassword]
        );
        assert!(!errors.contains(Field::Password));
    }

    #[test]
    fn error_messages_render() {
        let error = FieldError::new(Field::Name, ErrorKind::Required, "El nombre es obligatorio");
        assert_eq!(error.to_string(), "name: El nombre es obligatorio");

        let errors: ValidationErrors = std::iter::once(error).collect();
        assert_eq!(errors.to_string(), "Validation failed for 1 field(s)");
    }

    #[test]
    fn result_accessors() {
        let accepted = ValidationResult::Accepted(FieldSet::default());
        assert!(accepted.is_accepted());
        assert!(accepted.errors().is_none());
        assert_eq!(accepted.into_result(), Ok(FieldSet::default()));

        let rejected = ValidationResult::Rejected(ValidationErrors::new());
        assert!(rejected.is_rejected());
        assert!(rejected.errors().is_some());
        assert!(rejected.into_result().is_err());
    }
}
