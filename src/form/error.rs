//! Form controller errors.

use crate::core::UnknownField;
use thiserror::Error;

/// Errors from driving a form through its generic, key-based surface.
///
/// A rejected submission is not an error; it is reported through
/// [`SubmitOutcome`](crate::form::SubmitOutcome).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error(transparent)]
    UnknownField(#[from] UnknownField),
}
