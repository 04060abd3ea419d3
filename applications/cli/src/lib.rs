//! ResumeCheck terminal client
//!
//! Pages, components and routing for the `resumecheck` binary. The binary is
//! a thin clap front-end over [`app::App`]; everything it renders comes from
//! this library so the flows can be driven from tests against a mock API.

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod router;

pub use app::{App, Screen, View};
pub use config::AppConfig;
pub use error::{AppError, Result};
