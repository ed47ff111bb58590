//! The four-field input record.

use super::field::Field;
use serde::{Deserialize, Serialize};

/// Raw string values of the registration form.
///
/// A `FieldSet` always holds exactly the four form fields. Values are
/// stored as typed in; nothing is trimmed or normalized.
///
/// # Example
///
/// ```rust
/// use signup_form::core::{Field, FieldSet};
///
/// let mut fields = FieldSet::default();
/// fields.set_name("Ana");
/// fields.set(Field::Email, "ana@example.com");
///
/// assert_eq!(fields.name(), "Ana");
/// assert_eq!(fields.get(Field::Email), "ana@example.com");
/// assert_eq!(fields.password(), "");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSet {
    name: String,
    email: String,
    password: String,
    confirm_password: String,
}

const REDACTED: &str = "[redacted]";

impl FieldSet {
    /// Create a filled record.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    pub fn confirm_password(&self) -> &str {
        &self.confirm_password
    }

    pub fn set_confirm_password(&mut self, value: impl Into<String>) {
        self.confirm_password = value.into();
    }

    /// Value of `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => self.name(),
            Field::Email => self.email(),
            Field::Password => self.password(),
            Field::ConfirmPassword => self.confirm_password(),
        }
    }

    /// Replace the value of `field`.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        match field {
            Field::Name => self.set_name(value),
            Field::Email => self.set_email(value),
            Field::Password => self.set_password(value),
            Field::ConfirmPassword => self.set_confirm_password(value),
        }
    }

    /// True when every field is empty.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    /// Copy with password fields replaced by a placeholder, for logging.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        for field in Field::ALL {
            if field.input_kind().is_masked() && !copy.get(field).is_empty() {
                copy.set(field, REDACTED);
            }
        }
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let fields = FieldSet::default();
        assert!(fields.is_empty());
        for field in Field::ALL {
            assert_eq!(fields.get(field), "");
        }
    }

    #[test]
    fn typed_and_generic_accessors_agree() {
        let mut fields = FieldSet::default();
        fields.set(Field::ConfirmPassword, "secret123");
        fields.set_password("secret123");

        assert_eq!(fields.confirm_password(), "secret123");
        assert_eq!(fields.get(Field::Password), "secret123");
        assert!(!fields.is_empty());
    }

    #[test]
    fn set_replaces_only_the_named_field() {
        let mut fields = FieldSet::new("Ana", "ana@example.com", "pw", "pw");
        fields.set(Field::Email, "other@example.com");

        assert_eq!(fields.name(), "Ana");
        assert_eq!(fields.email(), "other@example.com");
        assert_eq!(fields.password(), "pw");
    }

    #[test]
    fn serializes_with_wire_keys() {
        let fields = FieldSet::new("Ana", "ana@example.com", "longenough1", "longenough1");
        let json = serde_json::to_value(&fields).unwrap();

        assert_eq!(json["name"], "Ana");
        assert_eq!(json["confirmPassword"], "longenough1");

        let back: FieldSet = serde_json::from_value(json).unwrap();
        assert_eq!(back, fields);
    }

    #[test]
    fn redacted_hides_passwords_only() {
        let fields = FieldSet::new("Ana", "ana@example.com", "longenough1", "");
        let redacted = fields.redacted();

        assert_eq!(redacted.name(), "Ana");
        assert_eq!(redacted.email(), "ana@example.com");
        assert_eq!(redacted.password(), REDACTED);
        assert_eq!(redacted.confirm_password(), "");
        assert_eq!(fields.password(), "longenough1");
    }
}
