//! Signup Form: a typed registration form with accumulating validation
//!
//! The form has four fields (name, email, password and its confirmation).
//! Validation is a pure function built on Stillwater's `Validation` type,
//! so every failing field is reported in one pass. The controller around it
//! holds the in-progress values and hands accepted records to a sink.
//!
//! # Core Concepts
//!
//! - **FieldSet**: Typed record of the four raw field values
//! - **Schema**: Ordered field rules; the first failing rule per field wins
//! - **FormController**: Owns values, validates on submit, routes errors
//! - **SubmitSink**: Receives each record that passed validation
//!
//! # Example
//!
//! ```rust
//! use signup_form::core::{Field, FieldSet};
//! use signup_form::form::{CollectingSink, FormController, SubmitOutcome};
//! use signup_form::validate;
//!
//! let fields = FieldSet::new("Ana", "ana@example.com", "longenough1", "longenough1");
//! assert!(validate(&fields).is_accepted());
//!
//! let mut form = FormController::new(CollectingSink::new());
//! for field in Field::ALL {
//!     form.set_field(field, fields.get(field));
//! }
//!
//! assert_eq!(form.submit(), SubmitOutcome::Accepted);
//! assert_eq!(form.sink().last(), Some(&fields));
//! ```

pub mod config;
pub mod core;
pub mod form;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{Field, FieldSet};
pub use form::{FormController, SubmitOutcome, SubmitSink};
pub use validation::{validate, FieldError, ValidationErrors, ValidationResult};
