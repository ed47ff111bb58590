//! Field identifiers for the registration form.
//!
//! The form has a closed set of four fields. Each field knows its wire key,
//! its display label and the kind of input it is edited with.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the four fields of the registration form.
///
/// Ordering follows form order, so maps keyed by `Field` iterate the way
/// the form is laid out.
///
/// # Example
///
/// ```rust
/// use signup_form::core::Field;
///
/// let field: Field = "confirmPassword".parse().unwrap();
/// assert_eq!(field, Field::ConfirmPassword);
/// assert_eq!(field.label(), "Confirm Password");
/// assert!("age".parse::<Field>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

/// How a field's input is presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Email,
    /// Value is masked when displayed.
    Password,
}

impl InputKind {
    /// HTML `type` attribute for this kind of input.
    pub fn html_type(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    pub fn is_masked(&self) -> bool {
        matches!(self, Self::Password)
    }
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 4] = [
        Field::Name,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// Wire key used for serialization and generic binding.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    /// Human-readable label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }

    pub fn input_kind(&self) -> InputKind {
        match self {
            Self::Name => InputKind::Text,
            Self::Email => InputKind::Email,
            Self::Password | Self::ConfirmPassword => InputKind::Password,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A key that does not name any field of the form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown field: {key}")]
pub struct UnknownField {
    pub key: String,
}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.key() == key)
            .ok_or_else(|| UnknownField {
                key: key.to_string(),
            })
    }
}
