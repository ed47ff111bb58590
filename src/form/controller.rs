//! Form controller that owns field values and routes validation errors.

use crate::config::SchemaConfig;
use crate::core::{Field, FieldSet};
use crate::form::error::FormError;
use crate::form::sink::SubmitSink;
use crate::form::widget::FieldWidget;
use crate::validation::{FieldError, Schema, ValidationErrors, ValidationResult};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info_span};
use uuid::Uuid;

/// Result of a submit attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Record passed validation and was handed to the sink
    Accepted,

    /// Record failed validation; errors are available on the controller
    Rejected { fields: Vec<Field> },
}

/// Submission bookkeeping, kept across successful submits until reset
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    /// Number of submit attempts
    pub submit_count: usize,

    /// True once submit has been attempted
    pub is_submitted: bool,

    /// True if the latest submit attempt was accepted
    pub is_submit_successful: bool,

    pub last_submitted_at: Option<DateTime<Utc>>,
}

/// Owns the in-progress values of one registration form.
///
/// Edits never validate. Validation runs only on [`submit`](Self::submit).
///
/// # Example
///
/// ```rust
/// use signup_form::core::Field;
/// use signup_form::form::{CollectingSink, FormController, SubmitOutcome};
///
/// let mut form = FormController::new(CollectingSink::new());
/// form.set_field(Field::Name, "Ana");
/// form.set_field(Field::Email, "ana@example.com");
/// form.set_field(Field::Password, "longenough1");
///
/// assert!(matches!(form.submit(), SubmitOutcome::Rejected { .. }));
/// assert!(form.error(Field::ConfirmPassword).is_some());
///
/// form.set_field(Field::ConfirmPassword, "longenough1");
/// assert_eq!(form.submit(), SubmitOutcome::Accepted);
/// assert_eq!(form.sink().accepted().len(), 1);
/// ```
pub struct FormController<K: SubmitSink> {
    session: Uuid,
    schema: Schema,
    fields: FieldSet,
    errors: ValidationErrors,
    state: FormState,
    sink: K,
}

impl<K: SubmitSink> FormController<K> {
    /// Create an empty form using the registration schema
    pub fn new(sink: K) -> Self {
        Self::with_schema(Schema::registration(&SchemaConfig::default()), sink)
    }

    /// Create an empty form using the registration schema built from `config`
    pub fn with_config(config: &SchemaConfig, sink: K) -> Self {
        Self::with_schema(Schema::registration(config), sink)
    }

    /// Create an empty form validated by `schema`
    pub fn with_schema(schema: Schema, sink: K) -> Self {
        Self {
            session: Uuid::new_v4(),
            schema,
            fields: FieldSet::default(),
            errors: ValidationErrors::new(),
            state: FormState::default(),
            sink,
        }
    }

    /// Identifier of the current form session (pure)
    pub fn session(&self) -> Uuid {
        self.session
    }

    /// Current values (pure)
    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    /// Current value of `field` (pure)
    pub fn value(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    /// Error shown for `field` after the last rejected submit (pure)
    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn into_sink(self) -> K {
        self.sink
    }

    /// The form's widgets in form order
    pub fn widgets(&self) -> [FieldWidget; 4] {
        Field::ALL.map(FieldWidget::new)
    }

    /// Store an edit. Does not validate and leaves errors as they are.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        debug!(
            session = %self.session,
            field = field.key(),
            chars = value.chars().count(),
            "field edited"
        );
        self.fields.set(field, value);
    }

    /// Store an edit addressed by wire key, e.g. `"confirmPassword"`.
    pub fn set_field_by_key(
        &mut self,
        key: &str,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let field: Field = key.parse()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Validate the current values.
    ///
    /// On success the record goes to the sink, errors are cleared and a new
    /// session starts with empty values. On failure the values are kept and
    /// the error map is replaced, so fields without an entry show no error.
    pub fn submit(&mut self) -> SubmitOutcome {
        let span = info_span!("form", session = %self.session);
        let _enter = span.enter();

        self.state.submit_count += 1;
        self.state.is_submitted = true;
        self.state.last_submitted_at = Some(Utc::now());

        match self.schema.validate(&self.fields) {
            ValidationResult::Accepted(fields) => {
                debug!(attempt = self.state.submit_count, "submission accepted");
                self.state.is_submit_successful = true;
                self.errors = ValidationErrors::new();
                self.fields = FieldSet::default();
                self.session = Uuid::new_v4();
                self.sink.accept(fields);
                SubmitOutcome::Accepted
            }
            ValidationResult::Rejected(errors) => {
                debug!(
                    attempt = self.state.submit_count,
                    errors = errors.len(),
                    "submission rejected"
                );
                self.state.is_submit_successful = false;
                let fields = errors.fields();
                self.errors = errors;
                SubmitOutcome::Rejected { fields }
            }
        }
    }

    /// Discard values, errors and submission state, starting a new session
    pub fn reset(&mut self) {
        debug!(session = %self.session, "form reset");
        self.session = Uuid::new_v4();
        self.fields = FieldSet::default();
        self.errors = ValidationErrors::new();
        self.state = FormState::default();
    }
}
