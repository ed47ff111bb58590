//! Core form data types.
//!
//! This module contains the plain data of the form:
//! - Field identifiers via the `Field` enum
//! - The four-field input record `FieldSet`
//!
//! Nothing in this module validates or has side effects.

mod field;
mod fieldset;

pub use field::{Field, InputKind, UnknownField};
pub use fieldset::FieldSet;
