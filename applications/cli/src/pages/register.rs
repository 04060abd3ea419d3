/// Account creation page
use std::fmt::{self, Write};

use resumecheck_client::{ApiClient, RegisterRequest};
use resumecheck_core::validation::{RegisterForm, MIN_PASSWORD_LEN};
use resumecheck_core::{FormErrors, FormField};
use tracing::error;

use super::write_field_errors;
use crate::router::Route;

pub const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";

#[derive(Debug, Clone, Default)]
pub struct RegisterPage {
    pub form: RegisterForm,
    errors: FormErrors,
    submit_error: Option<String>,
}

impl RegisterPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Validate every field, then create the account. Nothing is sent while
    /// any field is invalid.
    pub async fn submit(&mut self, client: &ApiClient) -> Option<Route> {
        self.submit_error = None;
        if let Err(errors) = self.form.validate() {
            self.errors = errors;
            return None;
        }
        self.errors = FormErrors::new();

        let request = RegisterRequest {
            name: self.form.name.clone(),
            email: self.form.email.clone(),
            password: self.form.password.clone(),
        };

        match client.register(&request).await {
            Ok(_) => Some(Route::Dashboard),
            Err(e) => {
                error!(error = %e, "Register error");
                self.submit_error = Some(
                    e.server_message()
                        .map_or_else(|| REGISTRATION_FAILED.to_string(), str::to_string),
                );
                None
            }
        }
    }

    /// Password hint checklist as (requirement, satisfied)
    pub fn password_hints(&self) -> [(&'static str, bool); 4] {
        let password = &self.form.password;
        [
            (
                "At least 6 characters",
                password.chars().count() >= MIN_PASSWORD_LEN,
            ),
            (
                "One lowercase letter",
                password.chars().any(|c| c.is_ascii_lowercase()),
            ),
            (
                "One uppercase letter",
                password.chars().any(|c| c.is_ascii_uppercase()),
            ),
            ("One number", password.chars().any(|c| c.is_ascii_digit())),
        ]
    }

    pub fn render(&self) -> Result<String, fmt::Error> {
        let mut out = String::new();

        writeln!(out, "Create Account")?;
        writeln!(out, "Sign up to start optimizing your resume")?;
        writeln!(out)?;
        if let Some(message) = &self.submit_error {
            writeln!(out, "! {message}")?;
        }
        writeln!(out, "  {}: {}", FormField::Name.label(), self.form.name)?;
        writeln!(out, "  {}: {}", FormField::Email.label(), self.form.email)?;
        write_field_errors(&mut out, &self.errors)?;

        writeln!(out, "Password must contain:")?;
        for (hint, met) in self.password_hints() {
            writeln!(out, "  [{}] {hint}", if met { "x" } else { " " })?;
        }
        writeln!(out)?;
        writeln!(out, "Already have an account? Sign in here: resumecheck login")?;

        Ok(out)
    }
}
