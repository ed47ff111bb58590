//! Labeled inputs bound to a single form field.

use crate::core::{Field, InputKind};
use crate::form::controller::FormController;
use crate::form::sink::SubmitSink;
use std::borrow::Cow;
use std::fmt;

const MASK: char = '•';

/// One labeled input of the form.
///
/// A widget holds no state of its own: it reads the field's value and error
/// from the controller and forwards edits back to it.
///
/// # Example
///
/// ```rust
/// use signup_form::core::Field;
/// use signup_form::form::{CollectingSink, FieldWidget, FormController};
///
/// let mut form = FormController::new(CollectingSink::new());
/// let email = FieldWidget::new(Field::Email);
///
/// email.input(&mut form, "ana@example");
/// form.submit();
///
/// let view = email.render(&form);
/// assert_eq!(view.value, "ana@example");
/// assert_eq!(view.error.as_deref(), Some("El email es inválido"));
/// assert_eq!(view.class_names(), "form-control is-invalid");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldWidget {
    field: Field,
}

impl FieldWidget {
    pub fn new(field: Field) -> Self {
        Self { field }
    }

    pub fn field(&self) -> Field {
        self.field
    }

    /// Snapshot of the field for display.
    pub fn render<K: SubmitSink>(&self, form: &FormController<K>) -> WidgetView {
        WidgetView {
            id: self.field.key(),
            label: self.field.label(),
            kind: self.field.input_kind(),
            value: form.value(self.field).to_string(),
            error: form.error(self.field).map(|error| error.message.clone()),
        }
    }

    /// Forward a user edit to the controller.
    pub fn input<K: SubmitSink>(&self, form: &mut FormController<K>, value: impl Into<String>) {
        form.set_field(self.field, value);
    }
}

/// Rendered state of one widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetView {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
    pub value: String,
    pub error: Option<String>,
}

impl WidgetView {
    pub fn is_invalid(&self) -> bool {
        self.error.is_some()
    }

    /// CSS classes of the input element.
    pub fn class_names(&self) -> &'static str {
        if self.is_invalid() {
            "form-control is-invalid"
        } else {
            "form-control"
        }
    }

    /// Value as shown on screen; password inputs are masked.
    pub fn display_value(&self) -> Cow<'_, str> {
        if self.kind.is_masked() {
            Cow::Owned(MASK.to_string().repeat(self.value.chars().count()))
        } else {
            Cow::Borrowed(&self.value)
        }
    }
}

impl fmt::Display for WidgetView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [{}]", self.label, self.display_value())?;
        if let Some(error) = &self.error {
            write!(f, "\n  ! {error}")?;
        }
        Ok(())
    }
}

/// Text rendering of a whole form: every widget followed by the submit button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormView {
    pub widgets: Vec<WidgetView>,
}

impl FormView {
    pub fn render<K: SubmitSink>(form: &FormController<K>) -> Self {
        Self {
            widgets: form
                .widgets()
                .iter()
                .map(|widget| widget.render(form))
                .collect(),
        }
    }
}

impl fmt::Display for FormView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for widget in &self.widgets {
            writeln!(f, "{widget}")?;
        }
        write!(f, "[ Submit ]")
    }
}
