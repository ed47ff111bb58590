//! User-facing error messages of the registration form.

pub const NAME_REQUIRED: &str = "El nombre es obligatorio";

pub const EMAIL_INVALID: &str = "El email es inválido";

pub const PASSWORDS_MISMATCH: &str = "Las contraseñas no coinciden";

/// Message for a password shorter than `min` characters.
pub fn password_too_short(min: usize) -> String {
    format!("La contraseña debe tener al menos {min} caracteres")
}
