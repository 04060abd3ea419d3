/// User domain type
use serde::{Deserialize, Serialize};
use std::fmt;

use super::UserId;

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular account: own resumes only
    #[default]
    User,
    /// Administrator: may list and delete any user or resume
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    #[serde(alias = "_id")]
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Login email
    pub email: String,

    /// Account role
    #[serde(default)]
    pub role: Role,

    /// Account creation timestamp (ISO string)
    #[serde(default)]
    pub created_at: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
