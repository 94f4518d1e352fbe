//! Form Schemas
//!
//! Field structs and client-side validation for the login, register and
//! forgot-password forms. Validation mirrors the backend's expectations:
//! per-field rules checked locally so invalid input never reaches the
//! network layer. Errors are keyed by field name and surfaced inline next
//! to the offending input.

use std::collections::BTreeMap;

use crate::shared::auth::{AuthRole, Credentials};

/// Per-field validation errors, keyed by field name
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Minimal email shape check: one `@` with a dotted domain after it
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Login form state
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub role: AuthRole,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            role: AuthRole::Candidate,
        }
    }
}

impl LoginForm {
    /// Validate and produce credentials for submission
    pub fn validate(&self) -> Result<Credentials, FieldErrors> {
        let mut errors = FieldErrors::new();
        if !is_valid_email(&self.email) {
            errors.insert("email", "Please enter a valid email".to_string());
        }
        if self.password.is_empty() {
            errors.insert("password", "Please enter your password".to_string());
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
            role: self.role,
        })
    }
}

/// Register form state
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.full_name.trim().chars().count() < 3 {
            errors.insert("full_name", "Full name must be at least 3 characters".to_string());
        }
        if !is_valid_email(&self.email) {
            errors.insert("email", "Please enter a valid email".to_string());
        }
        if self.password.chars().count() < 6 {
            errors.insert("password", "Password must be at least 6 characters".to_string());
        }
        if self.confirm_password != self.password {
            errors.insert("confirm_password", "Passwords do not match".to_string());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Forgot-password form state
#[derive(Debug, Clone, Default)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl ForgotPasswordForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if !is_valid_email(&self.email) {
            errors.insert("email", "Please enter a valid email".to_string());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
