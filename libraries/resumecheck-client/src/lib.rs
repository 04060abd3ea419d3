//! ResumeCheck API Client
//!
//! HTTP client for the ResumeCheck ATS scoring API.
//!
//! # Features
//!
//! - **Authentication**: register, login and `me`, persisting the session
//! - **Resumes**: upload with local validation, list, fetch and delete
//! - **Admin**: list every user and resume, delete users
//!
//! All endpoints answer with a `{ success, data, message }` envelope, which
//! the client unwraps into typed results. Session expiry (401) clears the
//! stored session and is reported as [`ApiError::AuthExpired`].
//!
//! # Example
//!
//! ```ignore
//! use resumecheck_client::{ApiClient, ClientConfig, UploadFile};
//! use resumecheck_storage::SessionStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = SessionStore::open("sqlite://resumecheck.db").await?;
//!     let client = ApiClient::new(ClientConfig::from_env(), store)?;
//!
//!     let file = UploadFile::from_path("cv.pdf".as_ref()).await?;
//!     let resume = client.resumes().upload(file).await?;
//!     println!("ATS score: {}", resume.score);
//!
//!     Ok(())
//! }
//! ```

mod admin;
mod auth;
mod client;
mod error;
mod resume;
mod types;

pub use client::ApiClient;
pub use error::{ApiError, Result};
pub use types::{
    mime_type_for_file, ApiEnvelope, ClientConfig, LoginRequest, RegisterRequest, UploadFile,
    API_URL_ENV, DEFAULT_API_URL,
};

pub use admin::AdminApi;
pub use auth::AuthApi;
pub use resume::{ResumeApi, UPLOAD_FIELD};
