//! Field rules and the schema that evaluates them using Validation.

use crate::config::SchemaConfig;
use crate::core::{Field, FieldSet};
use crate::validation::builder::SchemaBuilder;
use crate::validation::errors::{ErrorKind, FieldError, ValidationResult};
use crate::validation::messages;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use validator::ValidateEmail;

/// Type alias for custom record predicates
pub type Predicate = Box<dyn Fn(&FieldSet) -> bool + Send + Sync>;

/// Address shape accepted by `EmailPolicy::Strict`: local part from
/// `[A-Za-z0-9_'+.-]` not ending in `.` or `'`, dot-separated domain labels
/// starting with an alphanumeric, alphabetic TLD of two or more letters.
static STRICT_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]",
        r"@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$",
    ))
    .expect("invalid strict email pattern")
});

/// How strictly email addresses are checked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmailPolicy {
    /// No leading dot or `..`, no IP-literal domains, alphabetic
    /// top-level domain of at least two letters.
    #[default]
    Strict,

    /// HTML5 syntax only; also accepts single-label domains such as `localhost`.
    AllowDotlessDomain,
}

impl EmailPolicy {
    pub fn accepts(&self, value: &str) -> bool {
        if !value.validate_email() {
            return false;
        }
        match self {
            Self::Strict => is_strict_email(value),
            Self::AllowDotlessDomain => true,
        }
    }
}

fn is_strict_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && STRICT_EMAIL.is_match(value)
}

/// Length in characters, not bytes.
fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub(crate) enum CheckKind {
    Required,
    Email(EmailPolicy),
    MinLength(usize),
    Predicate(Predicate),
}

/// One rule on a field's value and the message shown when it fails.
pub(crate) struct Check {
    pub(crate) kind: CheckKind,
    pub(crate) message: String,
}

impl Check {
    fn violation(&self, field: Field, fields: &FieldSet) -> Option<FieldError> {
        let value = fields.get(field);
        let kind = match &self.kind {
            CheckKind::Required => value.is_empty().then_some(ErrorKind::Required),
            CheckKind::Email(policy) => {
                (!policy.accepts(value)).then_some(ErrorKind::InvalidEmail)
            }
            CheckKind::MinLength(min) => {
                (char_len(value) < *min).then_some(ErrorKind::TooShort { min: *min })
            }
            CheckKind::Predicate(predicate) => (!predicate(fields)).then_some(ErrorKind::Custom),
        }?;
        Some(FieldError::new(field, kind, self.message.clone()))
    }
}

/// Marks a field as the confirmation of another one.
pub(crate) struct Confirmation {
    pub(crate) source: Field,
    pub(crate) message: String,
}

/// All rules attached to one field.
///
/// Checks run in the order they were added and the first failure wins.
/// A confirmation check runs after all others and only fails when the
/// values differ.
pub struct FieldRule {
    pub(crate) field: Field,
    pub(crate) checks: Vec<Check>,
    pub(crate) confirms: Option<Confirmation>,
}

impl FieldRule {
    pub(crate) fn new(field: Field) -> Self {
        Self {
            field,
            checks: Vec::new(),
            confirms: None,
        }
    }

    pub fn field(&self) -> Field {
        self.field
    }

    /// The field this one must equal, if any.
    pub fn confirms(&self) -> Option<Field> {
        self.confirms.as_ref().map(|confirmation| confirmation.source)
    }

    /// True when this field confirms another and holds the same value.
    fn mirrors_source(&self, fields: &FieldSet) -> Option<Field> {
        self.confirms()
            .filter(|source| fields.get(self.field) == fields.get(*source))
    }

    /// First failing rule of this field, looked at in isolation.
    pub fn violation(&self, fields: &FieldSet) -> Option<FieldError> {
        let own = self
            .checks
            .iter()
            .find_map(|check| check.violation(self.field, fields));
        if own.is_some() {
            return own;
        }

        let confirmation = self.confirms.as_ref()?;
        if fields.get(self.field) == fields.get(confirmation.source) {
            return None;
        }
        Some(FieldError::new(
            self.field,
            ErrorKind::Mismatch {
                source: confirmation.source,
            },
            confirmation.message.clone(),
        ))
    }

    /// Evaluate this field's rules against the record.
    pub fn check(&self, fields: &FieldSet) -> Validation<(), NonEmptyVec<FieldError>> {
        match self.violation(fields) {
            Some(error) => Validation::fail(error),
            None => Validation::success(()),
        }
    }
}

/// Ordered set of field rules.
pub struct Schema {
    pub(crate) rules: Vec<FieldRule>,
}

impl Schema {
    /// The registration form's rules.
    ///
    /// - `name`: required, then minimum length
    /// - `email`: email syntax
    /// - `password`: minimum length
    /// - `confirmPassword`: minimum length, then equal to `password`
    pub fn registration(config: &SchemaConfig) -> Self {
        let min = config.min_password_length;
        SchemaBuilder::new()
            .required(Field::Name, messages::NAME_REQUIRED)
            .min_length(Field::Name, config.min_name_length, messages::NAME_REQUIRED)
            .email_with_policy(Field::Email, config.email_policy, messages::EMAIL_INVALID)
            .min_length(Field::Password, min, messages::password_too_short(min))
            .min_length(Field::ConfirmPassword, min, messages::password_too_short(min))
            .confirms(
                Field::ConfirmPassword,
                Field::Password,
                messages::PASSWORDS_MISMATCH,
            )
            .build()
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Validate a record, accumulating one error per failing field.
    ///
    /// A confirming field that holds the same value as its source stays
    /// silent when the source already failed, so the shared value is
    /// reported once, on the source.
    pub fn validate(&self, fields: &FieldSet) -> ValidationResult {
        let violations: Vec<Option<FieldError>> =
            self.rules.iter().map(|rule| rule.violation(fields)).collect();

        let source_failed = |source: Field| {
            self.rules
                .iter()
                .zip(&violations)
                .any(|(rule, violation)| rule.field == source && violation.is_some())
        };

        let checks: Vec<Validation<(), NonEmptyVec<FieldError>>> = self
            .rules
            .iter()
            .zip(&violations)
            .map(|(rule, violation)| match violation {
                Some(_) if rule.mirrors_source(fields).is_some_and(|s| source_failed(s)) => {
                    Validation::success(())
                }
                Some(error) => Validation::fail(error.clone()),
                None => Validation::success(()),
            })
            .collect();

        match Validation::all_vec(checks) {
            Validation::Success(_) => ValidationResult::Accepted(fields.clone()),
            Validation::Failure(errors) => {
                ValidationResult::Rejected(errors.iter().cloned().collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> Schema {
        Schema::registration(&SchemaConfig::default())
    }

    fn valid() -> FieldSet {
        FieldSet::new("Ana", "ana@example.com", "longenough1", "longenough1")
    }

    #[test]
    fn valid_record_is_accepted_unchanged() {
        let fields = valid();
        assert_eq!(
            registration().validate(&fields),
            ValidationResult::Accepted(fields)
        );
    }

    #[test]
    fn empty_name_fails_only_name() {
        let mut fields = valid();
        fields.set_name("");

        let result = registration().validate(&fields);
        let errors = result.errors().unwrap();

        assert_eq!(errors.fields(), vec![Field::Name]);
        assert_eq!(errors.message(Field::Name), Some(messages::NAME_REQUIRED));
        assert_eq!(errors.get(Field::Name).unwrap().kind, ErrorKind::Required);
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in [
            "",
            "ana",
            "ana@",
            "@example.com",
            "ana example.com",
            "ana@localhost",
            "ana@example.c",
            "ana@example.c0m",
            "a!b@example.com",
            "ana@[127.0.0.1]",
            ".ana@example.com",
            "an..a@example.com",
            "ana@-example.com",
            "ana@example..com",
        ] {
            let mut fields = valid();
            fields.set_email(email);

            let result = registration().validate(&fields);
            let errors = result.errors().unwrap();
            assert_eq!(errors.fields(), vec![Field::Email], "email {email:?}");
            assert_eq!(errors.message(Field::Email), Some(messages::EMAIL_INVALID));
        }
    }

    #[test]
    fn well_formed_emails_are_accepted() {
        for email in [
            "ana@example.com",
            "o'neil+news@mail.example.co",
            "ana.maria_1-x@sub-domain.example.org",
            "ANA@EXAMPLE.COM",
        ] {
            let mut fields = valid();
            fields.set_email(email);

            assert!(registration().validate(&fields).is_accepted(), "email {email:?}");
        }
    }

    #[test]
    fn dotless_domain_allowed_when_configured() {
        let config = SchemaConfig {
            email_policy: EmailPolicy::AllowDotlessDomain,
            ..SchemaConfig::default()
        };
        let mut fields = valid();
        fields.set_email("ana@localhost");

        assert!(Schema::registration(&config).validate(&fields).is_accepted());
    }

    #[test]
    fn short_matching_passwords_fail_on_password_only() {
        let mut fields = valid();
        fields.set_password("short");
        fields.set_confirm_password("short");

        let result = registration().validate(&fields);
        let errors = result.errors().unwrap();

        assert_eq!(errors.fields(), vec![Field::Password]);
        assert_eq!(
            errors.get(Field::Password).unwrap().kind,
            ErrorKind::TooShort { min: 8 }
        );
    }

    #[test]
    fn empty_password_reports_length_not_required() {
        let mut fields = valid();
        fields.set_password("");
        fields.set_confirm_password("");

        let result = registration().validate(&fields);
        let errors = result.errors().unwrap();

        assert_eq!(
            errors.message(Field::Password),
            Some(messages::password_too_short(8).as_str())
        );
        assert!(!errors.contains(Field::ConfirmPassword));
    }

    #[test]
    fn mismatched_valid_passwords_fail_on_confirmation_only() {
        let mut fields = valid();
        fields.set_confirm_password("longenough2");

        let result = registration().validate(&fields);
        let errors = result.errors().unwrap();

        assert_eq!(errors.fields(), vec![Field::ConfirmPassword]);
        assert_eq!(
            errors.message(Field::ConfirmPassword),
            Some(messages::PASSWORDS_MISMATCH)
        );
        assert_eq!(
            errors.get(Field::ConfirmPassword).unwrap().kind,
            ErrorKind::Mismatch {
                source: Field::Password
            }
        );
    }

    #[test]
    fn empty_confirmation_reports_length() {
        let mut fields = valid();
        fields.set_confirm_password("");

        let result = registration().validate(&fields);
        let errors = result.errors().unwrap();

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(Field::ConfirmPassword).unwrap().kind,
            ErrorKind::TooShort { min: 8 }
        );
    }

    #[test]
    fn short_confirmation_of_short_password_fails_both() {
        let mut fields = valid();
        fields.set_password("short");
        fields.set_confirm_password("shorter");

        let result = registration().validate(&fields);
        let errors = result.errors().unwrap();

        assert_eq!(errors.fields(), vec![Field::Password, Field::ConfirmPassword]);
        assert_eq!(
            errors.get(Field::ConfirmPassword).unwrap().kind,
            ErrorKind::TooShort { min: 8 }
        );
    }

    #[test]
    fn all_violations_are_accumulated() {
        let fields = FieldSet::new("", "not-an-email", "weak", "different");

        let result = registration().validate(&fields);
        let errors = result.errors().unwrap();

        assert_eq!(errors.len(), 4);
        assert_eq!(errors.fields(), Field::ALL.to_vec());
    }

    #[test]
    fn length_counts_characters() {
        let mut fields = valid();
        fields.set_password("contraseñ");
        fields.set_confirm_password("contraseñ");
        assert!(registration().validate(&fields).is_accepted());

        fields.set_password("ñññññññ");
        fields.set_confirm_password("ñññññññ");
        assert!(registration().validate(&fields).is_rejected());
    }

    #[test]
    fn configured_minimum_length_is_used() {
        let config = SchemaConfig {
            min_password_length: 12,
            ..SchemaConfig::default()
        };
        let result = Schema::registration(&config).validate(&valid());
        let errors = result.errors().unwrap();

        assert_eq!(
            errors.message(Field::Password),
            Some("La contraseña debe tener al menos 12 caracteres")
        );
    }

    #[test]
    fn configured_name_length_is_used() {
        let config = SchemaConfig {
            min_name_length: 3,
            ..SchemaConfig::default()
        };
        let schema = Schema::registration(&config);

        let mut fields = valid();
        fields.set_name("Al");
        let result = schema.validate(&fields);
        let error = result.errors().unwrap().get(Field::Name).unwrap().clone();
        assert_eq!(error.kind, ErrorKind::TooShort { min: 3 });
        assert_eq!(error.message, messages::NAME_REQUIRED);

        fields.set_name("");
        let result = schema.validate(&fields);
        assert_eq!(
            result.errors().unwrap().get(Field::Name).unwrap().kind,
            ErrorKind::Required
        );
    }

    #[test]
    fn field_rule_check_ignores_other_rules() {
        let schema = registration();
        let confirm = &schema.rules()[3];
        let fields = FieldSet::new("", "", "short", "short");

        assert!(confirm.check(&fields).is_failure());
        let result = schema.validate(&fields);
        assert!(!result.errors().unwrap().contains(Field::ConfirmPassword));
    }

    #[test]
    fn validate_is_deterministic() {
        let fields = FieldSet::new("", "x", "y", "z");
        let schema = registration();

        assert_eq!(schema.validate(&fields), schema.validate(&fields));
    }

    #[test]
    fn registration_schema_has_one_rule_per_field() {
        let schema = registration();
        let fields: Vec<Field> = schema.rules().iter().map(FieldRule::field).collect();

        assert_eq!(fields, Field::ALL.to_vec());
        assert_eq!(schema.rules()[3].confirms(), Some(Field::Password));
    }
}
