//! Types for ResumeCheck API requests and responses.

use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

use resumecheck_core::validation::{UploadCandidate, MAX_UPLOAD_BYTES};
use resumecheck_core::ValidationError;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncReadExt;

use crate::error::Result;

/// Production API, used when nothing overrides it
pub const DEFAULT_API_URL: &str = "https://resume-atsb.onrender.com/api";

/// Environment variable selecting the API base URL
pub const API_URL_ENV: &str = "RESUMECHECK_API_URL";

/// Configuration for connecting to the ResumeCheck API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL all endpoint paths are appended to
    pub base_url: String,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// `RESUMECHECK_API_URL` if set and non-empty, otherwise the default
    pub fn from_env() -> Self {
        let url = std::env::var(API_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self::new(url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

// =============================================================================
// Envelope
// =============================================================================

/// Wrapper every endpoint responds with
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// Authentication Types
// =============================================================================

/// Request body for login endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for register endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

// =============================================================================
// Upload Types
// =============================================================================

/// A resume file ready to be sent as multipart form data
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Read a local file, guessing its MIME type from the extension.
    ///
    /// The size limit is checked against the file's metadata before reading,
    /// and the read itself stops one byte past the limit.
    pub async fn from_path(path: &Path) -> Result<Self> {
        let metadata = tokio::fs::metadata(path).await?;
        if !metadata.is_file() {
            return Err(std::io::Error::new(
                ErrorKind::InvalidInput,
                format!("{} is not a regular file", path.display()),
            )
            .into());
        }
        if metadata.len() > MAX_UPLOAD_BYTES {
            return Err(ValidationError::FileTooLarge(metadata.len()).into());
        }

        let file = tokio::fs::File::open(path).await?;
        let mut bytes = Vec::with_capacity(metadata.len() as usize);
        file.take(MAX_UPLOAD_BYTES + 1)
            .read_to_end(&mut bytes)
            .await?;
        if bytes.len() as u64 > MAX_UPLOAD_BYTES {
            return Err(ValidationError::FileTooLarge(bytes.len() as u64).into());
        }

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("resume")
            .to_string();

        Ok(Self {
            file_name,
            mime_type: mime_type_for_file(path),
            bytes,
        })
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// What the upload validator needs to see
    pub fn candidate(&self) -> UploadCandidate {
        UploadCandidate::new(self.file_name.clone(), self.mime_type.clone(), self.size())
    }
}

/// MIME type for a document, from its extension.
pub fn mime_type_for_file(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}
