//! Render-failure boundary
//!
//! Wraps a page's render step. A render error or panic is logged and replaced
//! by a static fallback until the boundary is reset. Failures outside
//! rendering (API calls) never reach here; pages keep those in their own
//! state.

use std::any::Any;
use std::fmt::{Display, Write};
use std::panic::{self, AssertUnwindSafe};

use tracing::error;

pub const FALLBACK_TITLE: &str = "Something went wrong.";
pub const FALLBACK_MESSAGE: &str =
    "The application encountered an unexpected error. Please try refreshing the page.";

/// Actions offered by the fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryAction {
    /// Clear the error and render the same page again
    TryAgain,
    /// Remount the page from scratch
    RefreshPage,
}

impl RecoveryAction {
    pub fn label(self) -> &'static str {
        match self {
            RecoveryAction::TryAgain => "Try Again",
            RecoveryAction::RefreshPage => "Refresh Page",
        }
    }
}

#[derive(Debug, Default)]
pub struct ErrorBoundary {
    error: Option<String>,
}

impl ErrorBoundary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Render the subtree, or the fallback if it fails now or failed before.
    pub fn render<F, E>(&mut self, subtree: F) -> String
    where
        F: FnOnce() -> Result<String, E>,
        E: Display,
    {
        if self.has_error() {
            return self.fallback();
        }

        let message = match panic::catch_unwind(AssertUnwindSafe(subtree)) {
            Ok(Ok(rendered)) => return rendered,
            Ok(Err(e)) => e.to_string(),
            Err(payload) => panic_message(payload.as_ref()),
        };

        error!(error = %message, "Error caught by ErrorBoundary");
        self.error = Some(message);
        self.fallback()
    }

    /// Clear the error flag so the next render tries the subtree again
    pub fn reset(&mut self) {
        self.error = None;
    }

    pub fn fallback(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = writeln!(out, "{FALLBACK_TITLE}");
        let _ = writeln!(out, "{FALLBACK_MESSAGE}");
        let _ = writeln!(
            out,
            "[{}]  [{}]",
            RecoveryAction::TryAgain.label(),
            RecoveryAction::RefreshPage.label()
        );

        if cfg!(debug_assertions) {
            if let Some(error) = &self.error {
                let _ = writeln!(out, "Error Details: {error}");
            }
        }

        out
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
