//! Routed pages
//!
//! Each page owns its view state, talks to the API through a borrowed
//! [`ApiClient`](resumecheck_client::ApiClient) and renders to text. Async
//! operations return `Some(route)` when the app should navigate away.

use std::fmt::{self, Write};

use resumecheck_core::FormErrors;

mod admin;
mod dashboard;
mod home;
mod login;
mod register;
mod report;

pub use admin::{AdminPage, AdminTab};
pub use dashboard::{DashboardPage, DragEvent, UPLOAD_FAILED};
pub use home::HomePage;
pub use login::{LoginPage, LOGIN_FAILED};
pub use register::{RegisterPage, REGISTRATION_FAILED};
pub use report::ReportPage;

/// Inline field messages under a form
pub(crate) fn write_field_errors(out: &mut String, errors: &FormErrors) -> fmt::Result {
    for (field, message) in errors.iter() {
        writeln!(out, "  ! {}: {}", field.label(), message)?;
    }
    Ok(())
}
