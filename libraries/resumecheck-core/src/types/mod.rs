mod analysis;
mod ids;
mod resume;
mod session;
mod user;

pub use analysis::{Analysis, AnalysisDetails};
pub use ids::{ResumeId, UserId};
pub use resume::{Resume, ResumeOwner};
pub use session::{Session, SessionContext};
pub use user::{Role, User};
