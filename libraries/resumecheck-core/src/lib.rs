//! ResumeCheck Core
//!
//! Platform-agnostic domain types, client-side validation and view-model
//! logic for the ResumeCheck ATS client.
//!
//! Resume parsing and scoring happen on the server. This crate only mirrors
//! the shapes the API returns and the presentation rules applied to them.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `Resume`, `Analysis`, `Session`
//! - **Validation**: upload pre-checks and login/register form rules
//! - **Score presentation**: tier thresholds and the animated gauge
//! - **View models**: dashboard/admin statistics, search, report breakdown
//!
//! # Example
//!
//! ```rust
//! use resumecheck_core::validation::{validate_upload, UploadCandidate};
//! use resumecheck_core::ScoreTier;
//!
//! let file = UploadCandidate::new("cv.pdf", "application/pdf", 120_000);
//! assert!(validate_upload(&file).is_ok());
//!
//! assert_eq!(ScoreTier::from_score(80.0).label(), "Excellent");
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod format;
pub mod report;
pub mod score;
pub mod stats;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use error::{FormErrors, FormField, Result, ValidationError};
pub use report::{ReportTab, ScoreBreakdown};
pub use score::{ScoreGauge, ScoreTier};
pub use stats::{AdminStats, DashboardStats};
pub use types::{
    Analysis, AnalysisDetails, Resume, ResumeId, ResumeOwner, Role, Session, SessionContext,
    User, UserId,
};
