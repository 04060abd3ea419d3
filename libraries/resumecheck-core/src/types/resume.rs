/// Resume domain type
use serde::{Deserialize, Serialize};

use super::{Analysis, ResumeId, UserId};
use crate::score::ScoreTier;

/// Uploaded resume with its analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    #[serde(alias = "_id")]
    pub id: ResumeId,

    /// Original file name as uploaded
    pub file_name: String,

    /// Upload timestamp (ISO string)
    pub uploaded_at: String,

    /// Overall ATS score, 0-100
    pub score: f64,

    pub analysis: Analysis,

    /// Owner, only present in admin listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<ResumeOwner>,
}

impl Resume {
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.score)
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.user.as_ref().is_some_and(|owner| &owner.id == user_id)
    }
}

/// Owner summary embedded in admin resume listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeOwner {
    #[serde(alias = "_id")]
    pub id: UserId,
    pub name: String,
    pub email: String,
}
