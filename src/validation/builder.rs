//! Builder API for creating validation schemas.

use crate::core::{Field, FieldSet};
use crate::validation::rules::{Check, CheckKind, Confirmation, EmailPolicy, FieldRule, Schema};

/// Builder for creating schemas
pub struct SchemaBuilder {
    rules: Vec<FieldRule>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Require a non-empty value
    pub fn required(self, field: Field, message: impl Into<String>) -> Self {
        self.check(field, CheckKind::Required, message)
    }

    /// Require an email address accepted by `EmailPolicy::Strict`
    pub fn email(self, field: Field, message: impl Into<String>) -> Self {
        self.email_with_policy(field, EmailPolicy::Strict, message)
    }

    pub fn email_with_policy(
        self,
        field: Field,
        policy: EmailPolicy,
        message: impl Into<String>,
    ) -> Self {
        self.check(field, CheckKind::Email(policy), message)
    }

    /// Require at least `min` characters
    pub fn min_length(self, field: Field, min: usize, message: impl Into<String>) -> Self {
        self.check(field, CheckKind::MinLength(min), message)
    }

    /// Add a predicate over the whole record; failures are reported on `field`
    pub fn require_pred<F>(self, field: Field, predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&FieldSet) -> bool + Send + Sync + 'static,
    {
        self.check(field, CheckKind::Predicate(Box::new(predicate)), message)
    }

    /// Require `field` to equal `source`.
    ///
    /// Runs after the field's other checks. Replaces any earlier
    /// confirmation on the same field.
    pub fn confirms(mut self, field: Field, source: Field, message: impl Into<String>) -> Self {
        self.rule_mut(field).confirms = Some(Confirmation {
            source,
            message: message.into(),
        });
        self
    }

    /// Build the schema
    pub fn build(self) -> Schema {
        Schema { rules: self.rules }
    }

    fn check(mut self, field: Field, kind: CheckKind, message: impl Into<String>) -> Self {
        self.rule_mut(field).checks.push(Check {
            kind,
            message: message.into(),
        });
        self
    }

    fn rule_mut(&mut self, field: Field) -> &mut FieldRule {
        let index = match self.rules.iter().position(|rule| rule.field == field) {
            Some(index) => index,
            None => {
                self.rules.push(FieldRule::new(field));
                self.rules.len() - 1
            }
        };
        &mut self.rules[index]
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}
