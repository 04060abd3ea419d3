/// Authenticated session types
use serde::{Deserialize, Serialize};

use super::User;

/// Token and user returned by login/register
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Snapshot of the persisted session.
///
/// Either half may be missing independently: a token can outlive a user
/// record that failed to parse, and vice versa. Route guards only treat the
/// snapshot as signed in when both are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl SessionContext {
    /// Empty context (signed out)
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn from_session(session: Session) -> Self {
        Self {
            token: Some(session.token),
            user: Some(session.user),
        }
    }

    /// A non-empty token is stored
    pub fn has_token(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Both a token and a user record are stored
    pub fn is_signed_in(&self) -> bool {
        self.has_token() && self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }

    /// Full session when both halves are present
    pub fn session(&self) -> Option<Session> {
        match (&self.token, &self.user) {
            (Some(token), Some(user)) if !token.is_empty() => Some(Session {
                token: token.clone(),
                user: user.clone(),
            }),
            _ => None,
        }
    }
}
