//! Presentational components
//!
//! Components render to text through `Display` and hold no API access.

mod error_boundary;
mod loader;
mod navbar;
mod resume_card;
mod score_circle;

pub use error_boundary::{ErrorBoundary, RecoveryAction, FALLBACK_MESSAGE, FALLBACK_TITLE};
pub use loader::{Loader, LoaderSize};
pub use navbar::{NavItem, Navbar, BRAND};
pub use resume_card::ResumeCard;
pub use score_circle::ScoreCircle;
