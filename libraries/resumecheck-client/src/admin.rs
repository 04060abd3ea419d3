//! Admin endpoints. The server answers 403 for non-admin sessions.

use crate::client::ApiClient;
use crate::error::Result;
use reqwest::Method;
use resumecheck_core::{Resume, User, UserId};
use tracing::info;

pub struct AdminApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AdminApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /admin/users`
    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.client
            .fetch(self.client.request(Method::GET, "/admin/users"))
            .await
    }

    /// `GET /admin/resumes`
    pub async fn list_resumes(&self) -> Result<Vec<Resume>> {
        self.client
            .fetch(self.client.request(Method::GET, "/admin/resumes"))
            .await
    }

    /// `DELETE /admin/users/{id}`
    pub async fn delete_user(&self, id: &UserId) -> Result<()> {
        self.client
            .execute(self.client.request(Method::DELETE, &format!("/admin/users/{id}")))
            .await?;

        info!(user_id = %id, "User deleted");
        Ok(())
    }
}
