/// Sign-in page
use std::fmt::{self, Write};

use resumecheck_client::{ApiClient, LoginRequest};
use resumecheck_core::validation::LoginForm;
use resumecheck_core::{FormErrors, FormField};
use tracing::error;

use super::write_field_errors;
use crate::router::Route;

pub const LOGIN_FAILED: &str = "Login failed. Please try again.";

#[derive(Debug, Clone, Default)]
pub struct LoginPage {
    pub form: LoginForm,
    errors: FormErrors,
    submit_error: Option<String>,
}

impl LoginPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Validate, then sign in. Returns where to go on success.
    ///
    /// Admins land on the admin panel, everyone else on the dashboard.
    pub async fn submit(&mut self, client: &ApiClient) -> Option<Route> {
        self.submit_error = None;
        if let Err(errors) = self.form.validate() {
            self.errors = errors;
            return None;
        }
        self.errors = FormErrors::new();

        let request = LoginRequest {
            email: self.form.email.clone(),
            password: self.form.password.clone(),
        };

        match client.login(&request).await {
            Ok(session) if session.user.is_admin() => Some(Route::Admin),
            Ok(_) => Some(Route::Dashboard),
            Err(e) => {
                error!(error = %e, "Login error");
                self.submit_error = Some(
                    e.server_message()
                        .map_or_else(|| LOGIN_FAILED.to_string(), str::to_string),
                );
                None
            }
        }
    }

    pub fn render(&self) -> Result<String, fmt::Error> {
        let mut out = String::new();

        writeln!(out, "Welcome Back")?;
        writeln!(out, "Sign in to continue optimizing your resume")?;
        writeln!(out)?;
        if let Some(message) = &self.submit_error {
            writeln!(out, "! {message}")?;
        }
        writeln!(out, "  {}: {}", FormField::Email.label(), self.form.email)?;
        write_field_errors(&mut out, &self.errors)?;
        writeln!(out)?;
        writeln!(out, "Don't have an account? Sign up here: resumecheck register")?;

        Ok(out)
    }
}
